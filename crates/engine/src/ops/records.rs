use crate::{Dataset, EngineError, Record, ResultEngine};

/// Append `record` to a copy of `dataset`.
///
/// Rejects a blank name before looking at the serial. An existing serial
/// always rejects the add; records are never updated in place.
pub fn add(dataset: &Dataset, record: Record) -> ResultEngine<Dataset> {
    if record.name.trim().is_empty() {
        return Err(EngineError::EmptyName);
    }
    if dataset.contains_serial(record.serial) {
        return Err(EngineError::DuplicateSerial(record.serial));
    }

    let mut next = dataset.clone();
    next.push(record);
    Ok(next)
}

/// Remove every record with `serial` from a copy of `dataset`.
pub fn delete(dataset: &Dataset, serial: u32) -> ResultEngine<Dataset> {
    if !dataset.contains_serial(serial) {
        return Err(EngineError::SerialNotFound(serial));
    }

    let mut next = dataset.clone();
    next.records_mut().retain(|r| r.serial != serial);
    Ok(next)
}
