//! `vsm inventory` command - inventory & lead-time calculator

use console::style;
use dialoguer::theme::ColorfulTheme;
use miette::{miette, Result};

use crate::calc::inventory::SECONDS_PER_DAY;
use crate::calc::{field, InventoryInputs, TimelineSegment};
use crate::cli::helpers::{
    fmt_value, fmt_whole, parse_divisor_flag, parse_quantity_flag, resolve_format, warn_non_finite,
};
use crate::cli::output::{self, Report};
use crate::cli::{prompt, GlobalOpts, OutputFormat};
use crate::core::{Config, Scenario};

#[derive(clap::Args, Debug)]
pub struct InventoryArgs {
    /// Load inputs from a scenario (built-in name or YAML file)
    #[arg(long, short = 's')]
    pub scenario: Option<String>,

    /// Prompt for each input interactively
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Daily customer demand (pieces)
    #[arg(long, value_name = "PIECES")]
    pub daily_demand: Option<String>,

    /// Total inventory quantity on hand (pieces)
    #[arg(long, value_name = "PIECES")]
    pub inventory_qty: Option<String>,

    /// Working days per year
    #[arg(long, value_name = "DAYS")]
    pub working_days: Option<String>,

    /// Total value-added processing time (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub va_time: Option<String>,

    /// Replace the timeline: NAME=WAIT[:PROC[:QTY]], repeatable, in order
    #[arg(long = "segment", value_name = "SPEC")]
    pub segments: Vec<String>,
}

/// Parse one `--segment NAME=WAIT[:PROC[:QTY]]` spec. Times go through
/// the quantity parsing policy, so a malformed number degrades to 0
/// while a missing `=` is a real usage error.
pub fn parse_segment_spec(spec: &str) -> Result<TimelineSegment> {
    let (name, rest) = spec
        .split_once('=')
        .ok_or_else(|| miette!("invalid --segment '{spec}': expected NAME=WAIT[:PROC[:QTY]]"))?;
    if name.is_empty() {
        return Err(miette!("invalid --segment '{spec}': empty segment name"));
    }

    let mut parts = rest.splitn(3, ':');
    let wait_time = field::quantity(parts.next().unwrap_or(""));
    let process_time = field::quantity(parts.next().unwrap_or(""));
    let inventory_qty = parts.next().map(field::quantity);

    Ok(TimelineSegment {
        name: name.to_string(),
        wait_time,
        process_time,
        inventory_qty,
    })
}

pub fn run(args: InventoryArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();

    let mut inputs = match &args.scenario {
        Some(s) => Scenario::resolve(s)?.inventory.unwrap_or_default(),
        None => InventoryInputs::default(),
    };

    if let Some(raw) = &args.daily_demand {
        inputs.daily_demand = parse_divisor_flag("daily-demand", raw);
    }
    if let Some(raw) = &args.inventory_qty {
        inputs.inventory_qty = parse_quantity_flag("inventory-qty", raw);
    }
    if let Some(raw) = &args.working_days {
        // The original calculator falls back to its seeded 240 here, not
        // the generic quantity default.
        inputs.working_days_per_year = field::parse_or(raw, 240.0);
    }
    if let Some(raw) = &args.va_time {
        inputs.va_time = parse_quantity_flag("va-time", raw);
    }
    if !args.segments.is_empty() {
        inputs.segments = args
            .segments
            .iter()
            .map(|s| parse_segment_spec(s))
            .collect::<Result<Vec<_>>>()?;
    }

    if args.interactive {
        let theme = ColorfulTheme::default();
        inputs.daily_demand =
            prompt::numeric_field(&theme, "Daily customer demand (pieces)", inputs.daily_demand, 1.0)?;
        inputs.inventory_qty =
            prompt::numeric_field(&theme, "Total inventory quantity (pieces)", inputs.inventory_qty, 0.0)?;
        inputs.working_days_per_year =
            prompt::numeric_field(&theme, "Working days per year", inputs.working_days_per_year, 240.0)?;
        inputs.va_time =
            prompt::numeric_field(&theme, "Total VA processing time (seconds)", inputs.va_time, 0.0)?;
        for segment in &mut inputs.segments {
            segment.wait_time = prompt::numeric_field(
                &theme,
                &format!("{} wait time (days)", segment.name),
                segment.wait_time,
                0.0,
            )?;
        }
    }

    let result = inputs.evaluate();
    let decimals = config.decimals();
    let format = resolve_format(global, &config);

    let mut report = Report::new("Inventory & Lead Time");
    report.push("Inventory days", fmt_value(result.inventory_days, decimals), "days");
    report.push("Production lead time", fmt_value(result.lead_time, decimals), "days");
    report.push(
        "Inventory turns",
        fmt_value(result.inventory_turns, decimals),
        "per year",
    );
    report.push("VA ratio", fmt_value(result.va_ratio * 100.0, 4), "%");
    report.print(&result, format)?;

    if format == OutputFormat::Auto && !global.quiet {
        output::section("Timeline");
        for segment in &inputs.segments {
            let qty = segment
                .inventory_qty
                .map(|q| format!(" | {} pcs", fmt_whole(q)))
                .unwrap_or_default();
            println!(
                "  {:<20} {} days wait | {} sec process{}",
                style(&segment.name).bold(),
                segment.wait_time,
                segment.process_time,
                qty
            );
        }

        output::section("Step by step");
        output::step(format!(
            "inventory days = {} ÷ {} = {}",
            fmt_whole(inputs.inventory_qty),
            fmt_whole(inputs.daily_demand),
            fmt_value(result.inventory_days, decimals)
        ));
        output::step(format!(
            "lead time = Σ wait times = {} days",
            fmt_value(result.lead_time, decimals)
        ));
        output::step(format!(
            "turns = {} ÷ {} = {}",
            fmt_whole(inputs.working_days_per_year),
            fmt_value(result.lead_time, decimals),
            fmt_value(result.inventory_turns, decimals)
        ));
        output::step(format!(
            "VA ratio = {} ÷ ({} × {}) = {}%",
            fmt_whole(inputs.va_time),
            fmt_value(result.lead_time, decimals),
            fmt_whole(SECONDS_PER_DAY),
            fmt_value(result.va_ratio * 100.0, 4)
        ));

        output::section("What this means");
        output::note(format!(
            "You hold {} days of inventory and the stream takes {} days end \
             to end, turning {} times a year. Only {}% of that time adds value.",
            fmt_value(result.inventory_days, 1),
            fmt_value(result.lead_time, 1),
            fmt_value(result.inventory_turns, 1),
            fmt_value(result.va_ratio * 100.0, 4)
        ));
    }

    warn_non_finite(&[
        result.inventory_days,
        result.inventory_turns,
        result.va_ratio,
    ]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segment_spec_full() {
        let seg = parse_segment_spec("Coils=7.6:1:7000").unwrap();
        assert_eq!(seg.name, "Coils");
        assert_eq!(seg.wait_time, 7.6);
        assert_eq!(seg.process_time, 1.0);
        assert_eq!(seg.inventory_qty, Some(7000.0));
    }

    #[test]
    fn test_parse_segment_spec_wait_only() {
        let seg = parse_segment_spec("Finished Goods=4.5").unwrap();
        assert_eq!(seg.name, "Finished Goods");
        assert_eq!(seg.wait_time, 4.5);
        assert_eq!(seg.process_time, 0.0);
        assert_eq!(seg.inventory_qty, None);
    }

    #[test]
    fn test_parse_segment_spec_bad_number_degrades() {
        let seg = parse_segment_spec("WIP=lots").unwrap();
        assert_eq!(seg.wait_time, 0.0);
    }

    #[test]
    fn test_parse_segment_spec_missing_eq_is_error() {
        assert!(parse_segment_spec("just-a-name").is_err());
        assert!(parse_segment_spec("=5").is_err());
    }
}
