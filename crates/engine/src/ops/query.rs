//! Filtered and sorted views of a dataset, and their export.

use core::cmp::Ordering;

use crate::{ClassLabel, Dataset, EngineError, Record, ResultEngine, codec};

/// Suggested file name for exported views.
pub const EXPORT_FILE_NAME: &str = "students_export.csv";
/// Content type of exported views.
pub const CONTENT_TYPE: &str = "text/csv";

const ALL: &str = "All";

/// Which classes a view keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClassFilter {
    /// Every record (the `All` sentinel).
    #[default]
    All,
    Only(ClassLabel),
}

impl ClassFilter {
    #[must_use]
    pub fn matches(self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::Only(label) => record.class_label == label,
        }
    }
}

impl core::fmt::Display for ClassFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(label) => write!(f, "{label}"),
        }
    }
}

impl core::str::FromStr for ClassFilter {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == ALL {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// Column a view is sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Serial,
    Name,
    Class,
}

impl SortKey {
    /// Column name as it appears in the header row.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Serial => "sl",
            Self::Name => "name",
            Self::Class => "class",
        }
    }

    fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            Self::Serial => a.serial.cmp(&b.serial),
            Self::Name => a.name.cmp(&b.name),
            Self::Class => a.class_label.cmp(&b.class_label),
        }
    }
}

impl TryFrom<&str> for SortKey {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "sl" => Ok(Self::Serial),
            "name" => Ok(Self::Name),
            "class" => Ok(Self::Class),
            other => Err(EngineError::InvalidSortKey(other.to_string())),
        }
    }
}

impl core::str::FromStr for SortKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.column())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub const fn ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }
}

/// Records of `dataset` whose class passes `filter`, in their original order.
#[must_use]
pub fn filter_by_class(dataset: &Dataset, filter: ClassFilter) -> Dataset {
    dataset
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Stable sort of `dataset` by `key`.
///
/// Records with equal keys keep their relative order in both directions.
#[must_use]
pub fn sort(dataset: &Dataset, key: SortKey, order: SortOrder) -> Dataset {
    let mut records = dataset.records().to_vec();
    match order {
        SortOrder::Ascending => records.sort_by(|a, b| key.compare(a, b)),
        SortOrder::Descending => records.sort_by(|a, b| key.compare(a, b).reverse()),
    }
    Dataset::from(records)
}

/// Encode exactly the given view as CSV in the store format.
pub fn export(dataset: &Dataset) -> ResultEngine<Vec<u8>> {
    codec::to_bytes(dataset)
}

/// Filter and sort settings of a table view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pub filter: ClassFilter,
    pub key: SortKey,
    pub order: SortOrder,
}

impl Query {
    /// Filter first, then sort the remaining records.
    #[must_use]
    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        sort(&filter_by_class(dataset, self.filter), self.key, self.order)
    }
}

/// A downloadable export of a view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub data: Vec<u8>,
}

impl Export {
    pub(crate) fn of(view: &Dataset) -> ResultEngine<Self> {
        Ok(Self {
            file_name: EXPORT_FILE_NAME,
            content_type: CONTENT_TYPE,
            data: export(view)?,
        })
    }
}
