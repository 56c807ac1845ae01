//! Student record primitives.
//!
//! A `Record` is one row of the roster, keyed by its serial number.

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Number of class labels offered by the roster (`Class 1` ..= `Class 10`).
pub const CLASS_COUNT: u8 = 10;

/// One of the fixed class labels a student can belong to.
///
/// Labels are stored and displayed as `Class N`. Ordering follows the label
/// text, so `Class 10` sorts before `Class 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassLabel(u8);

impl ClassLabel {
    /// Build a label from its number, if it is part of the fixed set.
    #[must_use]
    pub fn new(number: u8) -> Option<Self> {
        (1..=CLASS_COUNT).contains(&number).then_some(Self(number))
    }

    /// Every label, in numeric order.
    pub fn all() -> impl Iterator<Item = ClassLabel> {
        (1..=CLASS_COUNT).map(Self)
    }

    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn label(self) -> String {
        format!("Class {}", self.0)
    }
}

impl core::fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Class {}", self.0)
    }
}

impl PartialOrd for ClassLabel {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClassLabel {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.label().cmp(&other.label())
    }
}

impl TryFrom<&str> for ClassLabel {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value
            .strip_prefix("Class ")
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<u8>().ok())
            .and_then(Self::new)
            .ok_or_else(|| EngineError::InvalidClass(value.to_string()))
    }
}

impl TryFrom<String> for ClassLabel {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<ClassLabel> for String {
    fn from(value: ClassLabel) -> Self {
        value.label()
    }
}

impl core::str::FromStr for ClassLabel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.trim())
    }
}

/// A single student row.
///
/// Optional text fields are empty strings when absent; they are never
/// validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "sl")]
    pub serial: u32,
    pub name: String,
    #[serde(rename = "class")]
    pub class_label: ClassLabel,
    pub batch: String,
    pub admit_date: String,
    pub mobile: String,
    pub parent_mobile: String,
}

impl Record {
    /// New record with the required fields set and every optional field empty.
    pub fn new(serial: u32, name: impl Into<String>, class_label: ClassLabel) -> Self {
        Self {
            serial,
            name: name.into(),
            class_label,
            batch: String::new(),
            admit_date: String::new(),
            mobile: String::new(),
            parent_mobile: String::new(),
        }
    }

    pub fn with_batch(mut self, batch: impl Into<String>) -> Self {
        self.batch = batch.into();
        self
    }

    pub fn with_admit_date(mut self, admit_date: impl Into<String>) -> Self {
        self.admit_date = admit_date.into();
        self
    }

    pub fn with_mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = mobile.into();
        self
    }

    pub fn with_parent_mobile(mut self, parent_mobile: impl Into<String>) -> Self {
        self.parent_mobile = parent_mobile.into();
        self
    }
}
