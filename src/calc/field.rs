//! Numeric field parsing with defaulting policy
//!
//! Every calculator input arrives as text (a CLI flag, an interactive
//! prompt answer) and is parsed here. Parsing never fails: empty or
//! unparsable text degrades to a field-class fallback instead of
//! surfacing an error.
//!
//! Fallbacks by field class:
//! - additive/subtractive quantities fall back to 0
//! - anything used as a divisor falls back to 1
//!
//! A user who explicitly enters `0` in a divisor field gets the zero;
//! the non-finite result is handled at the presentation layer, not here.

/// Parse `raw` as a decimal number, substituting `fallback` when the
/// text is empty, unparsable, or a non-finite literal like `inf`/`NaN`.
pub fn parse_or(raw: &str, fallback: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => fallback,
    }
}

/// Parse an additive/subtractive quantity field (fallback 0).
pub fn quantity(raw: &str) -> f64 {
    parse_or(raw, 0.0)
}

/// Parse a divisor field (fallback 1, so a blank field never divides by zero).
pub fn divisor(raw: &str) -> f64 {
    parse_or(raw, 1.0)
}

/// Apply the policy to an optional raw value, as produced by CLI flags.
pub fn parse_opt(raw: Option<&str>, fallback: f64) -> Option<f64> {
    raw.map(|s| parse_or(s, fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_numbers() {
        assert_eq!(parse_or("28800", 0.0), 28800.0);
        assert_eq!(parse_or("  60.5 ", 0.0), 60.5);
        assert_eq!(parse_or("-4", 0.0), -4.0);
    }

    #[test]
    fn test_empty_quantity_falls_back_to_zero() {
        assert_eq!(quantity(""), 0.0);
        assert_eq!(quantity("   "), 0.0);
        assert_eq!(quantity("n/a"), 0.0);
    }

    #[test]
    fn test_empty_divisor_falls_back_to_one() {
        assert_eq!(divisor(""), 1.0);
        assert_eq!(divisor("two"), 1.0);
    }

    #[test]
    fn test_non_finite_literals_fall_back() {
        assert_eq!(divisor("inf"), 1.0);
        assert_eq!(divisor("NaN"), 1.0);
        assert_eq!(quantity("-inf"), 0.0);
    }

    #[test]
    fn test_explicit_zero_divisor_is_kept() {
        // A typed zero is a real value; only parse failure is remapped.
        assert_eq!(divisor("0"), 0.0);
    }

    #[test]
    fn test_parse_opt() {
        assert_eq!(parse_opt(Some("5"), 1.0), Some(5.0));
        assert_eq!(parse_opt(Some("bad"), 1.0), Some(1.0));
        assert_eq!(parse_opt(None, 1.0), None);
    }
}
