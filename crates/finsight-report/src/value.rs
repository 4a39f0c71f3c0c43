//! Display formatting for optional values
//!
//! The sentinel appears only in rendered output; data types carry `Option`s.

/// Stand-in for attributes the upstream provider did not return
pub const SENTINEL: &str = "N/A";

/// Plain number, or the sentinel
pub fn num(value: Option<f64>) -> String {
    match value {
        Some(v) => format_number(v),
        None => SENTINEL.to_string(),
    }
}

/// Dollar-prefixed number, or the sentinel
pub fn currency(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${}", format_number(v)),
        None => SENTINEL.to_string(),
    }
}

/// Integer count, or the sentinel
pub fn int(value: Option<u64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => SENTINEL.to_string(),
    }
}

/// Borrowed string, or the sentinel
pub fn text(value: Option<&str>) -> &str {
    value.unwrap_or(SENTINEL)
}

// Whole-dollar amounts print without a fractional tail; ratios keep their
// precision.
fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num() {
        assert_eq!(num(Some(0.123)), "0.123");
        assert_eq!(num(Some(8_900_000_000.0)), "8900000000");
        assert_eq!(num(None), SENTINEL);
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency(Some(42.5)), "$42.5");
        assert_eq!(currency(Some(1_000_000.0)), "$1000000");
        assert_eq!(currency(None), SENTINEL);
    }

    #[test]
    fn test_int() {
        assert_eq!(int(Some(767)), "767");
        assert_eq!(int(None), SENTINEL);
    }

    #[test]
    fn test_text() {
        assert_eq!(text(Some("Technology")), "Technology");
        assert_eq!(text(None), SENTINEL);
    }
}
