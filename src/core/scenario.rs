//! Scenario presets and scenario files
//!
//! A scenario is a named bundle of calculator inputs: the CLI analog of
//! the worked examples in the book. Built-in presets cover the case
//! studies; user scenarios are plain YAML files with the same shape.
//!
//! `--scenario` arguments resolve against the built-in names first and
//! fall back to the filesystem, so `vsm takt --scenario twi-industries`
//! and `vsm takt --scenario ./my-line.yaml` both work.

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::calc::{CapacityInputs, InventoryInputs, KanbanInputs, TaktInputs};

/// A bundle of calculator inputs. Sections are optional; a scenario only
/// carries the calculators it has data for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name
    pub name: String,

    /// Where the numbers come from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub takt: Option<TaktInputs>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<InventoryInputs>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<CapacityInputs>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kanban: Option<KanbanInputs>,
}

/// Scenario resolution and parsing errors
#[derive(Debug, Error, Diagnostic)]
pub enum ScenarioError {
    #[error("unknown scenario '{name}'")]
    #[diagnostic(
        code(vsm::scenario::unknown),
        help("built-in scenarios: {available}; anything else is read as a file path")
    )]
    Unknown { name: String, available: String },

    #[error("failed to read scenario file '{path}'")]
    #[diagnostic(code(vsm::scenario::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error in scenario file: {message}")]
    #[diagnostic(code(vsm::scenario::yaml))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("error here")]
        span: SourceSpan,
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl ScenarioError {
    fn parse(err: &serde_yml::Error, source: &str, filename: &str) -> Self {
        let (line, column) = err
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((1, 1));
        let offset = line_col_to_offset(source, line, column);
        let message = err.to_string();

        let help = if message.to_lowercase().contains("invalid type") {
            Some("calculator fields are plain numbers, e.g. `monthly_demand: 18400`".to_string())
        } else if message.contains('\t') || message.to_lowercase().contains("tab") {
            Some("YAML requires spaces for indentation, not tabs".to_string())
        } else {
            None
        };

        ScenarioError::Parse {
            src: NamedSource::new(filename, source.to_string()),
            span: SourceSpan::from(offset..offset.saturating_add(1)),
            message,
            help,
        }
    }
}

/// Convert a 1-based line/column to a byte offset into `source`.
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let mut current_line = 1;
    for (i, ch) in source.char_indices() {
        if current_line == line {
            return (i + column.saturating_sub(1)).min(source.len().saturating_sub(1));
        }
        if ch == '\n' {
            current_line += 1;
        }
    }
    source.len().saturating_sub(1).max(0)
}

impl Scenario {
    /// Built-in presets, seeded from the case studies.
    pub fn builtins() -> Vec<Scenario> {
        vec![
            Scenario {
                name: "generic".to_string(),
                description: Some("Single-shift line with no breaks".to_string()),
                takt: Some(TaktInputs {
                    shift_time: 27000.0,
                    break_time: 0.0,
                    monthly_demand: 9100.0,
                    working_days: 20.0,
                    shifts_per_day: 1.0,
                }),
                ..Scenario::default()
            },
            Scenario {
                name: "acme-stamping".to_string(),
                description: Some("ACME Stamping current-state case study".to_string()),
                takt: Some(TaktInputs::default()),
                inventory: Some(InventoryInputs::default()),
                capacity: Some(CapacityInputs::default()),
                kanban: Some(KanbanInputs::default()),
            },
            Scenario {
                name: "twi-industries".to_string(),
                description: Some("TWI Industries two-shift case study".to_string()),
                takt: Some(TaktInputs {
                    shift_time: 28800.0,
                    break_time: 1800.0,
                    monthly_demand: 24000.0,
                    working_days: 20.0,
                    shifts_per_day: 2.0,
                }),
                ..Scenario::default()
            },
        ]
    }

    /// Look up a built-in preset by name (case-insensitive).
    pub fn builtin(name: &str) -> Option<Scenario> {
        Self::builtins()
            .into_iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Load a scenario from a YAML file.
    pub fn from_path(path: &Path) -> Result<Scenario, ScenarioError> {
        let display = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: display.clone(),
            source,
        })?;
        serde_yml::from_str(&contents).map_err(|e| ScenarioError::parse(&e, &contents, &display))
    }

    /// Resolve a `--scenario` argument: built-in name first, then a path,
    /// and a diagnostic listing the built-ins when neither matches.
    pub fn resolve(arg: &str) -> Result<Scenario, ScenarioError> {
        if let Some(scenario) = Self::builtin(arg) {
            return Ok(scenario);
        }
        let path = Path::new(arg);
        if path.exists() {
            return Self::from_path(path);
        }
        Err(ScenarioError::Unknown {
            name: arg.to_string(),
            available: Self::builtins()
                .iter()
                .map(|s| s.name.clone())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_lookup_is_case_insensitive() {
        assert!(Scenario::builtin("ACME-Stamping").is_some());
        assert!(Scenario::builtin("nope").is_none());
    }

    #[test]
    fn test_acme_builtin_covers_all_calculators() {
        let s = Scenario::builtin("acme-stamping").unwrap();
        assert!(s.takt.is_some());
        assert!(s.inventory.is_some());
        assert!(s.capacity.is_some());
        assert!(s.kanban.is_some());
    }

    #[test]
    fn test_twi_takt_figures() {
        let takt = Scenario::builtin("twi-industries").unwrap().takt.unwrap();
        assert_eq!(takt.break_time, 1800.0);
        assert_eq!(takt.monthly_demand, 24000.0);
    }

    #[test]
    fn test_resolve_unknown_lists_builtins() {
        let err = Scenario::resolve("no-such-scenario").unwrap_err();
        match err {
            ScenarioError::Unknown { available, .. } => {
                assert!(available.contains("acme-stamping"));
            }
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn test_load_scenario_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "name: My Line\ntakt:\n  monthly_demand: 5000\n  working_days: 22\n"
        )
        .unwrap();

        let scenario = Scenario::from_path(file.path()).unwrap();
        assert_eq!(scenario.name, "My Line");
        let takt = scenario.takt.unwrap();
        assert_eq!(takt.monthly_demand, 5000.0);
        // Unspecified fields take the calculator defaults.
        assert_eq!(takt.shift_time, 28800.0);
        assert!(scenario.kanban.is_none());
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_diagnostic() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name: [unclosed\n").unwrap();
        let err = Scenario::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ScenarioError::Parse { .. }));
    }

    #[test]
    fn test_scenario_yaml_roundtrip() {
        let s = Scenario::builtin("acme-stamping").unwrap();
        let yaml = serde_yml::to_string(&s).unwrap();
        let parsed: Scenario = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed.name, "acme-stamping");
        assert_eq!(parsed.kanban.unwrap().demand_per_shift, 460.0);
    }
}
