//! `vsm scenario` command - browse built-in scenario presets

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::resolve_format;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, Scenario};

#[derive(Subcommand, Debug)]
pub enum ScenarioCommands {
    /// List the built-in scenario presets
    List,

    /// Dump one scenario as YAML (a starting point for your own file)
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Scenario name (built-in) or path to a scenario file
    pub name: String,
}

pub fn run(cmd: ScenarioCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ScenarioCommands::List => run_list(global),
        ScenarioCommands::Show(args) => run_show(args),
    }
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let builtins = Scenario::builtins();

    match resolve_format(global, &config) {
        OutputFormat::Json => {
            let names: Vec<_> = builtins
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "name": s.name,
                        "description": s.description,
                        "sections": section_names(s),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&names).into_diagnostic()?);
        }
        _ => {
            for s in &builtins {
                println!(
                    "{:<16} {:<44} [{}]",
                    style(&s.name).cyan().bold(),
                    s.description.as_deref().unwrap_or(""),
                    section_names(s).join(", ")
                );
            }
        }
    }
    Ok(())
}

fn run_show(args: ShowArgs) -> Result<()> {
    let scenario = Scenario::resolve(&args.name)?;
    print!("{}", serde_yml::to_string(&scenario).into_diagnostic()?);
    Ok(())
}

fn section_names(s: &Scenario) -> Vec<&'static str> {
    let mut sections = Vec::new();
    if s.takt.is_some() {
        sections.push("takt");
    }
    if s.inventory.is_some() {
        sections.push("inventory");
    }
    if s.capacity.is_some() {
        sections.push("capacity");
    }
    if s.kanban.is_some() {
        sections.push("kanban");
    }
    sections
}
