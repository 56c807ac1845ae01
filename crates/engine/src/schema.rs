//! Column schema of the backing store and of exports.

use csv::StringRecord;

use crate::{EngineError, ResultEngine};

/// Columns in the fixed order they appear in the header row.
pub const COLUMNS: [&str; 7] = [
    "sl",
    "name",
    "class",
    "batch",
    "admit_date",
    "mobile",
    "parent_mobile",
];

/// Check a header row against [`COLUMNS`], position by position.
pub(crate) fn validate_header(header: &StringRecord) -> ResultEngine<()> {
    if header.iter().eq(COLUMNS.iter().copied()) {
        return Ok(());
    }
    let found: Vec<&str> = header.iter().collect();
    Err(EngineError::MalformedStore(format!(
        "expected columns [{}], found [{}]",
        COLUMNS.join(", "),
        found.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_header() {
        assert!(validate_header(&StringRecord::from(COLUMNS.to_vec())).is_ok());
    }

    #[test]
    fn rejects_reordered_or_missing_columns() {
        let mut swapped = COLUMNS.to_vec();
        swapped.swap(0, 1);
        assert!(matches!(
            validate_header(&StringRecord::from(swapped)),
            Err(EngineError::MalformedStore(_))
        ));
        assert!(matches!(
            validate_header(&StringRecord::from(COLUMNS[..6].to_vec())),
            Err(EngineError::MalformedStore(_))
        ));
    }
}
