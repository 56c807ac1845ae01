use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use engine::{FileStore, Roster};

use crate::cli::{Cli, Command};
use crate::error::Result;

mod cli;
mod error;
mod render;
mod settings;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = match settings::Settings::new(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "roster={level},engine={level}",
            level = settings.app.level
        ))
        .with_writer(std::io::stderr)
        .init();

    let path = cli.store.unwrap_or(settings.store.path);
    match run(cli.command, &path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("command failed: {err:?}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, path: &str) -> Result<()> {
    let mut roster = Roster::open(FileStore::new(path)).inspect_err(|err| {
        tracing::error!("failed to open store {path}: {err}");
    })?;

    let mut out = std::io::stdout().lock();
    match command {
        Command::List(view) => {
            out.write_all(render::table(&roster.view(&view.query())).as_bytes())?;
        }
        Command::Add(args) => {
            let serial = args.sl;
            roster.add(args.into_record())?;
            writeln!(out, "Student record {serial} added successfully")?;
        }
        Command::Delete(args) => {
            roster.delete(args.sl)?;
            writeln!(out, "Student record {} deleted", args.sl)?;
        }
        Command::Export(args) => {
            let export = roster.export(&args.view.query())?;
            if args.output == "-" {
                out.write_all(&export.data)?;
            } else {
                std::fs::write(&args.output, &export.data)?;
                tracing::info!(
                    "wrote {} ({}) to {}",
                    export.file_name,
                    export.content_type,
                    args.output
                );
            }
        }
        Command::Stats(args) => {
            let counts = roster.counts();
            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&counts)?)?;
            } else {
                writeln!(out, "Students per class")?;
                out.write_all(render::bar_chart(&counts).as_bytes())?;
                writeln!(out)?;
                writeln!(out, "Class distribution")?;
                out.write_all(render::distribution(&counts).as_bytes())?;
            }
        }
        Command::Classes => {
            for filter in roster.class_filters() {
                writeln!(out, "{filter}")?;
            }
        }
    }
    Ok(())
}
