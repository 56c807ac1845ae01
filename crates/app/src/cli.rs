use clap::{Args, Parser, Subcommand};
use engine::{ClassFilter, ClassLabel, EXPORT_FILE_NAME, Query, Record, SortKey, SortOrder};

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Student records kept in a CSV file")]
pub struct Cli {
    /// Optional config file path (TOML).
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Override the CSV store path.
    #[arg(long, global = true)]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the records, filtered and sorted.
    List(ViewArgs),
    /// Append a new record. Existing serials are never overwritten.
    Add(AddArgs),
    /// Delete the record with the given serial.
    Delete(DeleteArgs),
    /// Write the filtered and sorted records as CSV.
    Export(ExportArgs),
    /// Students per class.
    Stats(StatsArgs),
    /// Class filters available for the current records.
    Classes,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// `All` or a class label such as `Class 3`.
    #[arg(long, default_value = "All")]
    pub class: ClassFilter,
    /// Column to sort by: `sl`, `name` or `class`.
    #[arg(long, default_value = "sl")]
    pub sort: SortKey,
    /// Sort descending.
    #[arg(long)]
    pub desc: bool,
}

impl ViewArgs {
    pub fn query(&self) -> Query {
        Query {
            filter: self.class,
            key: self.sort,
            order: SortOrder::ascending(!self.desc),
        }
    }
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub sl: u32,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub class: ClassLabel,
    #[arg(long)]
    pub batch: Option<String>,
    #[arg(long)]
    pub admit_date: Option<String>,
    #[arg(long)]
    pub mobile: Option<String>,
    #[arg(long)]
    pub parent_mobile: Option<String>,
}

impl AddArgs {
    pub fn into_record(self) -> Record {
        Record::new(self.sl, self.name, self.class)
            .with_batch(self.batch.unwrap_or_default())
            .with_admit_date(self.admit_date.unwrap_or_default())
            .with_mobile(self.mobile.unwrap_or_default())
            .with_parent_mobile(self.parent_mobile.unwrap_or_default())
    }
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[arg(long)]
    pub sl: u32,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub view: ViewArgs,
    /// Destination file, `-` for stdout.
    #[arg(long, default_value = EXPORT_FILE_NAME)]
    pub output: String,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Print the counts as JSON instead of charts.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_defaults_to_all_by_serial_ascending() {
        let cli = Cli::try_parse_from(["roster", "list"]).unwrap();
        let Command::List(view) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(view.query(), Query::default());
    }

    #[test]
    fn export_parses_view_flags() {
        let cli = Cli::try_parse_from([
            "roster", "export", "--class", "Class 2", "--sort", "name", "--desc", "--output", "-",
        ])
        .unwrap();
        let Command::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.output, "-");
        assert_eq!(
            args.view.query(),
            Query {
                filter: ClassFilter::Only(ClassLabel::new(2).unwrap()),
                key: SortKey::Name,
                order: SortOrder::Descending,
            }
        );
    }

    #[test]
    fn add_fills_missing_optionals_with_empty_text() {
        let cli = Cli::try_parse_from([
            "roster", "--store", "x.csv", "add", "--sl", "4", "--name", "Dana", "--class",
            "Class 9", "--mobile", "555",
        ])
        .unwrap();
        assert_eq!(cli.store.as_deref(), Some("x.csv"));
        let Command::Add(args) = cli.command else {
            panic!("expected add");
        };
        let record = args.into_record();
        assert_eq!(record.serial, 4);
        assert_eq!(record.mobile, "555");
        assert_eq!(record.batch, "");
    }

    #[test]
    fn unknown_class_is_a_usage_error() {
        assert!(
            Cli::try_parse_from([
                "roster", "add", "--sl", "1", "--name", "A", "--class", "Class 11",
            ])
            .is_err()
        );
        assert!(Cli::try_parse_from(["roster", "list", "--sort", "batch"]).is_err());
    }
}
