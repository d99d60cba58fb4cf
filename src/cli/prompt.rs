//! Interactive input prompting
//!
//! Walks a calculator's fields with dialoguer, showing the current value
//! as the default. Answers are free text routed through the same parsing
//! policy as CLI flags, so a blank or bad answer degrades to the field's
//! fallback instead of erroring.

use dialoguer::{theme::ColorfulTheme, Input};
use miette::{IntoDiagnostic, Result};

use crate::calc::field;

/// Prompt for one numeric field. `fallback` is the field-class default
/// applied when the answer does not parse; the current value is offered
/// as the dialoguer default so Enter keeps it.
pub fn numeric_field(theme: &ColorfulTheme, label: &str, current: f64, fallback: f64) -> Result<f64> {
    let raw: String = Input::with_theme(theme)
        .with_prompt(label)
        .default(trim_float(current))
        .allow_empty(true)
        .interact_text()
        .into_diagnostic()?;

    if raw.trim().is_empty() {
        return Ok(current);
    }
    Ok(field::parse_or(&raw, fallback))
}

/// Render a float without trailing zeros for prompt defaults.
fn trim_float(v: f64) -> String {
    if v.fract() == 0.0 && v.is_finite() {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_float() {
        assert_eq!(trim_float(28800.0), "28800");
        assert_eq!(trim_float(6.5), "6.5");
    }
}
