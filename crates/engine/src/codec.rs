//! CSV encoding of datasets.
//!
//! Shared by the file store and by exports so both always agree on the
//! format: a header row with [`COLUMNS`](crate::COLUMNS), then one row per
//! record.

use std::collections::HashSet;
use std::io::{Read, Write};

use csv::{ReaderBuilder, WriterBuilder};

use crate::schema::{COLUMNS, validate_header};
use crate::{Dataset, EngineError, Record, ResultEngine};

/// Parse a dataset, validating the header and every row against the schema.
pub fn read_dataset<R: Read>(reader: R) -> ResultEngine<Dataset> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let header = reader.headers().map_err(malformed)?.clone();
    validate_header(&header)?;

    let mut seen = HashSet::new();
    let mut dataset = Dataset::new();
    for row in reader.deserialize::<Record>() {
        let record = row.map_err(malformed)?;
        if !seen.insert(record.serial) {
            return Err(EngineError::MalformedStore(format!(
                "serial {} appears more than once",
                record.serial
            )));
        }
        dataset.push(record);
    }
    Ok(dataset)
}

/// Write the header and every record of `dataset`, in order.
///
/// The header is written even when the dataset is empty.
pub fn write_dataset<W: Write>(writer: W, dataset: &Dataset) -> ResultEngine<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(COLUMNS)?;
    for record in dataset {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Encode `dataset` into UTF-8 CSV bytes.
pub fn to_bytes(dataset: &Dataset) -> ResultEngine<Vec<u8>> {
    let mut out = Vec::new();
    write_dataset(&mut out, dataset)?;
    Ok(out)
}

fn malformed(err: csv::Error) -> EngineError {
    if err.is_io_error() {
        return EngineError::Csv(err);
    }
    EngineError::MalformedStore(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClassLabel;

    fn class(n: u8) -> ClassLabel {
        ClassLabel::new(n).unwrap()
    }

    #[test]
    fn empty_dataset_writes_header_only() {
        let bytes = to_bytes(&Dataset::new()).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "sl,name,class,batch,admit_date,mobile,parent_mobile\n"
        );
    }

    #[test]
    fn writes_rows_in_column_order_with_empty_optionals() {
        let dataset = Dataset::from(vec![
            Record::new(3, "Alice", class(1)).with_mobile("555-0101"),
        ]);
        let text = String::from_utf8(to_bytes(&dataset).unwrap()).unwrap();
        assert_eq!(
            text.lines().nth(1),
            Some("3,Alice,Class 1,,,555-0101,")
        );
    }

    #[test]
    fn quotes_fields_containing_delimiters() {
        let dataset = Dataset::from(vec![Record::new(1, "Doe, \"JJ\"", class(2))]);
        let bytes = to_bytes(&dataset).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains("\"Doe, \"\"JJ\"\"\""));
        assert_eq!(read_dataset(bytes.as_slice()).unwrap(), dataset);
    }

    #[test]
    fn rejects_non_integer_serial() {
        let input = "sl,name,class,batch,admit_date,mobile,parent_mobile\nabc,Alice,Class 1,,,,\n";
        assert!(matches!(
            read_dataset(input.as_bytes()),
            Err(EngineError::MalformedStore(_))
        ));
    }

    #[test]
    fn rejects_unknown_class() {
        let input = "sl,name,class,batch,admit_date,mobile,parent_mobile\n1,Alice,Class 12,,,,\n";
        assert!(matches!(
            read_dataset(input.as_bytes()),
            Err(EngineError::MalformedStore(_))
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        let input = "sl,name,class,batch,admit_date,mobile,parent_mobile\n1,Alice,Class 1\n";
        assert!(matches!(
            read_dataset(input.as_bytes()),
            Err(EngineError::MalformedStore(_))
        ));
    }

    #[test]
    fn rejects_repeated_serials() {
        let input = "sl,name,class,batch,admit_date,mobile,parent_mobile\n\
                     1,Alice,Class 1,,,,\n\
                     1,Bob,Class 2,,,,\n";
        assert_eq!(
            read_dataset(input.as_bytes()),
            Err(EngineError::MalformedStore(
                "serial 1 appears more than once".to_string()
            ))
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            read_dataset("".as_bytes()),
            Err(EngineError::MalformedStore(_))
        ));
    }
}
