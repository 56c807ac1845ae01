//! Per-class aggregates feeding the bar and pie views.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::{ClassFilter, ClassLabel, Dataset};

/// Number of students in one class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ClassCount {
    pub label: ClassLabel,
    pub count: usize,
}

impl ClassCount {
    /// Percentage of `total` this class accounts for (0 when `total` is 0).
    #[must_use]
    pub fn share(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.count as f64 * 100.0 / total as f64
    }
}

/// Count records per class.
///
/// Ordered by count descending, then by label text, so repeated calls on the
/// same data yield the same sequence. Classes with no records are omitted.
#[must_use]
pub fn count_by_class(dataset: &Dataset) -> Vec<ClassCount> {
    let mut counts: HashMap<ClassLabel, usize> = HashMap::new();
    for record in dataset {
        *counts.entry(record.class_label).or_default() += 1;
    }

    let mut counts: Vec<ClassCount> = counts
        .into_iter()
        .map(|(label, count)| ClassCount { label, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    counts
}

/// `All` followed by the distinct classes present, sorted by label text.
#[must_use]
pub fn class_filters(dataset: &Dataset) -> Vec<ClassFilter> {
    let present: BTreeSet<ClassLabel> = dataset.iter().map(|r| r.class_label).collect();
    std::iter::once(ClassFilter::All)
        .chain(present.into_iter().map(ClassFilter::Only))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;

    fn dataset(classes: &[u8]) -> Dataset {
        classes
            .iter()
            .zip(1u32..)
            .map(|(class, serial)| Record::new(serial, "S", ClassLabel::new(*class).unwrap()))
            .collect()
    }

    fn pairs(counts: &[ClassCount]) -> Vec<(String, usize)> {
        counts
            .iter()
            .map(|c| (c.label.to_string(), c.count))
            .collect()
    }

    #[test]
    fn counts_sorted_by_count_then_label() {
        let counts = count_by_class(&dataset(&[3, 2, 10, 3, 2, 1, 3]));
        assert_eq!(
            pairs(&counts),
            vec![
                ("Class 3".to_string(), 3),
                ("Class 2".to_string(), 2),
                ("Class 1".to_string(), 1),
                ("Class 10".to_string(), 1),
            ]
        );
    }

    #[test]
    fn empty_dataset_has_no_counts() {
        assert!(count_by_class(&Dataset::new()).is_empty());
    }

    #[test]
    fn share_is_percentage_of_total() {
        let counts = count_by_class(&dataset(&[1, 1, 1, 2]));
        assert!((counts[0].share(4) - 75.0).abs() < f64::EPSILON);
        assert!((counts[1].share(4) - 25.0).abs() < f64::EPSILON);
        assert_eq!(counts[0].share(0), 0.0);
    }

    #[test]
    fn filters_start_with_all_then_present_labels() {
        let filters: Vec<String> = class_filters(&dataset(&[2, 10, 2, 1]))
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(filters, vec!["All", "Class 1", "Class 10", "Class 2"]);
    }

    #[test]
    fn counts_serialize_labels_as_text() {
        let json = serde_json::to_string(&count_by_class(&dataset(&[4]))).unwrap();
        assert_eq!(json, r#"[{"label":"Class 4","count":1}]"#);
    }
}
