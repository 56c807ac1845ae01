//! Persistence of the dataset.
//!
//! The store owns the load/save contract. Every save is a full rewrite of the
//! backing file; a crash in the middle of a write may leave it truncated.
//! There is no locking, so a second process writing the same file is not
//! guarded against.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use crate::{Dataset, ResultEngine, codec};

/// Load/save contract for the whole dataset.
pub trait RecordStore {
    /// Load the full dataset, creating an empty store when none exists.
    fn load(&self) -> ResultEngine<Dataset>;
    /// Replace the persisted dataset with `dataset`.
    fn save(&self, dataset: &Dataset) -> ResultEngine<()>;
}

/// CSV file on disk.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> std::io::Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }
}

impl RecordStore for FileStore {
    fn load(&self) -> ResultEngine<Dataset> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let dataset = Dataset::new();
                self.save(&dataset)?;
                tracing::info!("created empty store at {}", self.path.display());
                return Ok(dataset);
            }
            Err(err) => return Err(err.into()),
        };

        let dataset = codec::read_dataset(BufReader::new(file))?;
        tracing::debug!(
            "loaded {} records from {}",
            dataset.len(),
            self.path.display()
        );
        Ok(dataset)
    }

    fn save(&self, dataset: &Dataset) -> ResultEngine<()> {
        self.ensure_parent()?;
        let file = File::create(&self.path)?;
        codec::write_dataset(BufWriter::new(file), dataset)?;
        tracing::debug!("saved {} records to {}", dataset.len(), self.path.display());
        Ok(())
    }
}

/// Store kept in memory as encoded CSV bytes.
///
/// Goes through the same codec as [`FileStore`], so a load after a save sees
/// exactly what a file would hold.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: RefCell<Option<Vec<u8>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw CSV, e.g. to exercise load validation.
    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: RefCell::new(Some(contents.into())),
        }
    }

    /// Raw bytes currently held, `None` until the first load or save.
    #[must_use]
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.contents.borrow().clone()
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> ResultEngine<Dataset> {
        let existing = self.contents.borrow().clone();
        match existing {
            Some(bytes) => codec::read_dataset(bytes.as_slice()),
            None => {
                let dataset = Dataset::new();
                self.save(&dataset)?;
                Ok(dataset)
            }
        }
    }

    fn save(&self, dataset: &Dataset) -> ResultEngine<()> {
        let bytes = codec::to_bytes(dataset)?;
        *self.contents.borrow_mut() = Some(bytes);
        Ok(())
    }
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn load(&self) -> ResultEngine<Dataset> {
        (**self).load()
    }

    fn save(&self, dataset: &Dataset) -> ResultEngine<()> {
        (**self).save(dataset)
    }
}
