//! Field formatting for the CSV report.

/// Quote `value` and right-align it to `width` columns; longer values are never truncated.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}
