//! Pure operations over a [`Dataset`](crate::Dataset).
//!
//! Each operation takes the current dataset and returns a new one (or a
//! derived view) without touching storage. Persisting a mutation is the
//! caller's job; [`Roster`](crate::Roster) does it after every success.

mod query;
mod records;
mod statistics;

pub use query::{CONTENT_TYPE, ClassFilter, EXPORT_FILE_NAME, Export, Query, SortKey, SortOrder};
pub use query::{export, filter_by_class, sort};
pub use records::{add, delete};
pub use statistics::{ClassCount, class_filters, count_by_class};
