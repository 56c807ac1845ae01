//! Student roster engine.
//!
//! The roster is a flat CSV dataset of student [`Record`]s. The engine loads
//! it through a [`RecordStore`], applies add/delete operations, derives
//! filtered and sorted views, exports them and counts students per class.
//!
//! All operations in [`ops`] are pure: they take a [`Dataset`] and return a
//! new one. [`Roster`] ties them to a store and persists after every
//! successful mutation.

pub use dataset::Dataset;
pub use error::EngineError;
pub use ops::{
    CONTENT_TYPE, ClassCount, ClassFilter, EXPORT_FILE_NAME, Export, Query, SortKey, SortOrder,
};
pub use record::{CLASS_COUNT, ClassLabel, Record};
pub use roster::Roster;
pub use schema::COLUMNS;
pub use store::{FileStore, MemoryStore, RecordStore};

pub mod codec;
mod dataset;
mod error;
pub mod ops;
mod record;
mod roster;
mod schema;
mod store;

pub type ResultEngine<T> = Result<T, EngineError>;
