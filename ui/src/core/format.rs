//! Formatting helpers for presenting frequencies and dataset names.

use super::table::Category;

/// Pivot cell text: blank for `None`, never `0`.
pub fn format_cell(value: Option<u32>) -> String {
    value.map(format_count).unwrap_or_default()
}

/// Thousands-separated count, e.g. `12,345`.
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// "USA and Canada", "Canada", "A, B and C".
pub fn join_categories(categories: &[Category], conjunction: &str) -> String {
    let labels: Vec<String> = categories.iter().map(ToString::to_string).collect();
    match labels.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} {conjunction} {last}", head.join(", ")),
    }
}
