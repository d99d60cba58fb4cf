//! Shared helper functions for CLI commands

use console::style;

use crate::calc::field;

/// Format a value for display. Non-finite results come from zero-valued
/// divisors the user typed explicitly; they render as infinity/undefined
/// rather than a raw float debug string.
pub fn fmt_value(v: f64, decimals: u8) -> String {
    if v.is_nan() {
        "undefined".to_string()
    } else if v.is_infinite() {
        if v > 0.0 {
            "∞".to_string()
        } else {
            "-∞".to_string()
        }
    } else {
        format!("{:.*}", decimals as usize, v)
    }
}

/// Format a value that is conceptually a whole number (counts, seconds).
pub fn fmt_whole(v: f64) -> String {
    fmt_value(v, 0)
}

/// Parse an additive/subtractive flag value, warning when the fallback
/// kicks in so silent defaulting is at least visible on stderr.
pub fn parse_quantity_flag(name: &str, raw: &str) -> f64 {
    warn_on_fallback(name, raw, 0.0);
    field::quantity(raw)
}

/// Parse a divisor-class flag value (fallback 1), with the same warning.
pub fn parse_divisor_flag(name: &str, raw: &str) -> f64 {
    warn_on_fallback(name, raw, 1.0);
    field::divisor(raw)
}

fn warn_on_fallback(name: &str, raw: &str, fallback: f64) {
    if raw.trim().parse::<f64>().map(|v| v.is_finite()) != Ok(true) {
        eprintln!(
            "{} --{} '{}' is not a number, using {}",
            style("warning:").yellow().bold(),
            name,
            raw,
            fallback
        );
    }
}

/// Warn once when evaluation produced non-finite results, which happens
/// when a divisor field holds an explicit zero.
pub fn warn_non_finite(values: &[f64]) {
    if values.iter().any(|v| !v.is_finite()) {
        eprintln!(
            "{} a divisor input is zero; affected results are shown as ∞/undefined",
            style("warning:").yellow().bold()
        );
    }
}

/// Resolve the effective output format: explicit flag, then the config
/// file's default, then auto.
pub fn resolve_format(
    global: &crate::cli::GlobalOpts,
    config: &crate::core::Config,
) -> crate::cli::OutputFormat {
    match global.format {
        crate::cli::OutputFormat::Auto => config
            .default_format
            .as_deref()
            .map(crate::cli::OutputFormat::from_config_name)
            .unwrap_or(crate::cli::OutputFormat::Auto),
        f => f,
    }
}

/// Escape a string for CSV output (RFC 4180).
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Truncate a string to max_len, adding "..." if truncated.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_value() {
        assert_eq!(fmt_value(60.0, 2), "60.00");
        assert_eq!(fmt_value(f64::INFINITY, 2), "∞");
        assert_eq!(fmt_value(f64::NEG_INFINITY, 2), "-∞");
        assert_eq!(fmt_value(f64::NAN, 2), "undefined");
    }

    #[test]
    fn test_fmt_whole() {
        assert_eq!(fmt_whole(23460.4), "23460");
    }

    #[test]
    fn test_parse_flags_apply_field_policy() {
        assert_eq!(parse_quantity_flag("break-time", "bad"), 0.0);
        assert_eq!(parse_divisor_flag("shifts", ""), 1.0);
        assert_eq!(parse_divisor_flag("shifts", "2"), 2.0);
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
    }
}
