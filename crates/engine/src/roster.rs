use crate::ops::{self, ClassCount, ClassFilter, Export, Query};
use crate::{Dataset, Record, RecordStore, ResultEngine};

/// The roster: a store handle plus the dataset it currently holds.
///
/// Mutations run the pure operation first, then persist the result. The
/// in-memory dataset is replaced only once the save succeeded, so a failed
/// operation never leaves memory and storage out of step.
#[derive(Debug)]
pub struct Roster<S> {
    store: S,
    dataset: Dataset,
}

impl<S: RecordStore> Roster<S> {
    /// Load the dataset from `store`.
    pub fn open(store: S) -> ResultEngine<Self> {
        let dataset = store.load()?;
        tracing::debug!("roster opened with {} records", dataset.len());
        Ok(Self { store, dataset })
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add a record and persist the dataset.
    pub fn add(&mut self, record: Record) -> ResultEngine<()> {
        let serial = record.serial;
        let next = ops::add(&self.dataset, record).inspect_err(|err| {
            tracing::warn!("add of serial {serial} rejected: {err}");
        })?;
        self.commit(next)?;
        tracing::info!("added serial {serial}");
        Ok(())
    }

    /// Delete the record with `serial` and persist the dataset.
    pub fn delete(&mut self, serial: u32) -> ResultEngine<()> {
        let next = ops::delete(&self.dataset, serial).inspect_err(|err| {
            tracing::warn!("delete of serial {serial} rejected: {err}");
        })?;
        self.commit(next)?;
        tracing::info!("deleted serial {serial}");
        Ok(())
    }

    /// Filtered and sorted view of the dataset.
    #[must_use]
    pub fn view(&self, query: &Query) -> Dataset {
        query.apply(&self.dataset)
    }

    /// Export the view selected by `query`.
    pub fn export(&self, query: &Query) -> ResultEngine<Export> {
        let view = self.view(query);
        let export = Export::of(&view)?;
        tracing::debug!(
            "exported {} records ({} bytes)",
            view.len(),
            export.data.len()
        );
        Ok(export)
    }

    /// Per-class counts over the full dataset.
    #[must_use]
    pub fn counts(&self) -> Vec<ClassCount> {
        ops::count_by_class(&self.dataset)
    }

    #[must_use]
    pub fn class_filters(&self) -> Vec<ClassFilter> {
        ops::class_filters(&self.dataset)
    }

    fn commit(&mut self, next: Dataset) -> ResultEngine<()> {
        self.store.save(&next)?;
        self.dataset = next;
        Ok(())
    }
}
