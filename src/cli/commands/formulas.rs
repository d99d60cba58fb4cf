//! `vsm formulas` command - formula reference catalog

use clap::Subcommand;
use console::style;
use miette::{miette, IntoDiagnostic, Result};

use crate::catalog::{self, Category, Formula};
use crate::cli::helpers::{escape_csv, resolve_format, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum FormulaCommands {
    /// List formulas, optionally filtered by search term and category
    List(ListArgs),

    /// Show one formula card in full
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search term (matches name, description, and formula text)
    pub query: Option<String>,

    /// Filter by category
    #[arg(long, short = 'c')]
    pub category: Option<Category>,

    /// Show only the match count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Formula id (see the ID column of `formulas list`)
    pub id: u32,
}

pub fn run(cmd: FormulaCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        FormulaCommands::List(args) => run_list(args, global),
        FormulaCommands::Show(args) => run_show(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let results = catalog::filter(args.query.as_deref(), args.category);

    if args.count {
        println!("{}", results.len());
        return Ok(());
    }

    if results.is_empty() {
        println!(
            "No formulas match '{}'.",
            style(args.query.as_deref().unwrap_or("")).yellow()
        );
        return Ok(());
    }

    let format = resolve_format(global, &config);
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&results).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&results).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("id,name,category,formula,description");
            for f in &results {
                println!(
                    "{},{},{},{},{}",
                    f.id,
                    escape_csv(f.name),
                    f.category,
                    escape_csv(f.formula),
                    escape_csv(f.description)
                );
            }
        }
        OutputFormat::Md => {
            println!("| ID | Name | Category | Formula |");
            println!("|---|---|---|---|");
            for f in &results {
                println!("| {} | {} | {} | {} |", f.id, f.name, f.category, f.formula);
            }
        }
        OutputFormat::Tsv => {
            for f in &results {
                println!("{}\t{}\t{}\t{}", f.id, f.name, f.category, f.formula);
            }
        }
        OutputFormat::Auto => {
            println!(
                "{:<4} {:<32} {:<10} {:<40}",
                style("ID").bold(),
                style("NAME").bold(),
                style("CATEGORY").bold(),
                style("FORMULA").bold()
            );
            println!("{}", "-".repeat(88));
            for f in &results {
                println!(
                    "{:<4} {:<32} {} {:<40}",
                    f.id,
                    truncate_str(f.name, 30),
                    style(format!("{:<10}", f.category)).color256(category_color(f.category)),
                    truncate_str(f.formula, 40)
                );
            }
            println!();
            println!(
                "{} formula(s). Use {} for the full card.",
                style(results.len()).cyan(),
                style("vsm formulas show <ID>").cyan()
            );
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let formula = catalog::by_id(args.id)
        .ok_or_else(|| miette!("no formula with id {} (ids run 1-{})", args.id, catalog::CATALOG.len()))?;

    let format = resolve_format(global, &config);
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(formula).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(formula).into_diagnostic()?);
        }
        _ => print_card(formula),
    }
    Ok(())
}

fn print_card(f: &Formula) {
    println!("{}", style(f.name).bold());
    println!("{}", style("─".repeat(44)).dim());
    println!("Category:    {}", style(f.category).cyan());
    println!("Formula:     {}", style(f.formula).bold());
    println!("Example:     {}", f.example);
    println!("Description: {}", f.description);
    println!("Reference:   {}", style(f.page_ref).dim());
}

fn category_color(category: Category) -> u8 {
    match category {
        Category::TaktTime => 33,  // blue
        Category::Inventory => 34, // green
        Category::Capacity => 214, // orange
        Category::Kanban => 160,   // red
        Category::General => 245,  // grey
    }
}
