//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    capacity::CapacityArgs,
    completions::CompletionsArgs,
    formulas::FormulaCommands,
    inventory::InventoryArgs,
    kanban::KanbanArgs,
    scenario::ScenarioCommands,
    takt::TaktArgs,
};

#[derive(Parser)]
#[command(name = "vsm")]
#[command(author, version, about = "VSM Toolkit - value stream mapping calculators")]
#[command(
    long_about = "Calculators and a formula reference for value stream mapping: takt time, inventory and lead time, process capacity, and kanban/leveling."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto", env = "VSM_FORMAT")]
    pub format: OutputFormat,

    /// Suppress breakdown and interpretation sections
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Takt time calculator (production pace to meet demand)
    Takt(TaktArgs),

    /// Inventory & lead-time calculator (timeline walk)
    Inventory(InventoryArgs),

    /// Process capacity calculator (pacemaker capacity, crew sizing)
    Capacity(CapacityArgs),

    /// Kanban & leveling calculator (pull-system sizing)
    Kanban(KanbanArgs),

    /// Formula reference catalog (search and browse)
    #[command(subcommand)]
    Formulas(FormulaCommands),

    /// Scenario presets (case-study input bundles)
    #[command(subcommand)]
    Scenario(ScenarioCommands),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Styled report with breakdown and interpretation
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// JSON format (for programming)
    Json,
    /// Tab-separated label/value pairs (for piping)
    Tsv,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
}

impl OutputFormat {
    /// Parse a config-file format name; unknown names fall back to auto.
    pub fn from_config_name(name: &str) -> Self {
        <Self as ValueEnum>::from_str(name, true).unwrap_or(OutputFormat::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_format_from_config_name() {
        assert_eq!(OutputFormat::from_config_name("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_config_name("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_config_name("bogus"), OutputFormat::Auto);
    }
}
