//! Plain-text rendering of tables and charts for the terminal.

use engine::{COLUMNS, ClassCount, Dataset, Record};

const BAR_WIDTH: usize = 30;

/// Render `dataset` as an aligned table with a header row.
#[must_use]
pub fn table(dataset: &Dataset) -> String {
    let rows: Vec<[String; 7]> = dataset.iter().map(cells).collect();
    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &COLUMNS.map(String::from), &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn cells(record: &Record) -> [String; 7] {
    [
        record.serial.to_string(),
        record.name.clone(),
        record.class_label.to_string(),
        record.batch.clone(),
        record.admit_date.clone(),
        record.mobile.clone(),
        record.parent_mobile.clone(),
    ]
}

fn push_line(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Horizontal bar per class, scaled to the largest class.
#[must_use]
pub fn bar_chart(counts: &[ClassCount]) -> String {
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
    counts
        .iter()
        .map(|c| {
            format!(
                "{:<8} {} {}\n",
                c.label.to_string(),
                ascii_bar(c.count as u64, max as u64, BAR_WIDTH),
                c.count
            )
        })
        .collect()
}

/// Share of the total per class, one decimal.
#[must_use]
pub fn distribution(counts: &[ClassCount]) -> String {
    let total: usize = counts.iter().map(|c| c.count).sum();
    counts
        .iter()
        .map(|c| format!("{:<8} {:>5.1}%\n", c.label.to_string(), c.share(total)))
        .collect()
}

/// Returns a string like `████████░░░░░░░░░░░░` representing the ratio.
#[must_use]
pub fn ascii_bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }

    let ratio = (value as f64 / max as f64).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64) as usize).min(width);
    let empty = width.saturating_sub(filled);

    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{ClassLabel, ops};

    fn sample() -> Dataset {
        Dataset::from(vec![
            Record::new(1, "Alice", ClassLabel::new(1).unwrap()).with_mobile("555-0101"),
            Record::new(2, "Bob", ClassLabel::new(2).unwrap()),
            Record::new(3, "Cy", ClassLabel::new(1).unwrap()),
        ])
    }

    #[test]
    fn table_aligns_columns() {
        let text = table(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "sl  name   class    batch  admit_date  mobile    parent_mobile"
        );
        assert_eq!(lines[1], "1   Alice  Class 1                     555-0101");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn empty_table_prints_header() {
        assert_eq!(table(&Dataset::new()).lines().count(), 1);
    }

    #[test]
    fn bars_scale_to_largest_class() {
        let chart = bar_chart(&ops::count_by_class(&sample()));
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], format!("Class 1  {} 2", "█".repeat(30)));
        assert_eq!(
            lines[1],
            format!("Class 2  {}{} 1", "█".repeat(15), "░".repeat(15))
        );
    }

    #[test]
    fn distribution_uses_one_decimal() {
        assert_eq!(
            distribution(&ops::count_by_class(&sample())),
            "Class 1   66.7%\nClass 2   33.3%\n"
        );
    }

    #[test]
    fn ascii_bar_handles_zero_max() {
        assert_eq!(ascii_bar(0, 0, 4), "░░░░");
    }
}
