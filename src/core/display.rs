use std::fmt::{Display, Write};

/// Values per output line for sequence listings.
pub const DEFAULT_PER_LINE: usize = 10;

/// Each value is followed by a single space; a newline follows every
/// `per_line`-th value. A `per_line` of 0 disables wrapping.
pub fn format_wrapped<T: Display>(values: &[T], per_line: usize) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        // writing into a String cannot fail
        let _ = write!(out, "{} ", value);
        if per_line > 0 && (i + 1) % per_line == 0 {
            out.push('\n');
        }
    }
    out
}

/// Space-separated values on one line, with the trailing space kept.
pub fn format_line<T: Display>(values: &[T]) -> String {
    format_wrapped(values, 0)
}
