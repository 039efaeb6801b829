//! Ordering of day labels for display and export.

use std::cmp::Ordering;

fn numeric_value(label: &str) -> Option<f64> {
    label
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

/// Compare two day labels.
///
/// Labels that both read as numbers compare numerically (`"2" < "10"`), two
/// non-numeric labels compare lexicographically, and numeric labels come
/// before non-numeric ones.
///
/// Mixed pairs do not fall back to text order (`"2"` sorts before `"#1"`
/// although `"#1" < "2"` as text); ranking numbers first keeps the order total.
pub fn compare_day_labels(a: &str, b: &str) -> Ordering {
    match (numeric_value(a), numeric_value(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Sort day labels in place with [`compare_day_labels`].
pub fn sort_day_labels<S: AsRef<str>>(labels: &mut [S]) {
    labels.sort_by(|a, b| compare_day_labels(a.as_ref(), b.as_ref()));
}
