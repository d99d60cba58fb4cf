//! `vsm kanban` command - kanban & leveling calculator

use dialoguer::theme::ColorfulTheme;
use miette::Result;

use crate::calc::KanbanInputs;
use crate::cli::helpers::{fmt_value, fmt_whole, parse_divisor_flag, resolve_format, warn_non_finite};
use crate::cli::output::{self, Report};
use crate::cli::{prompt, GlobalOpts, OutputFormat};
use crate::core::{Config, Scenario};

#[derive(clap::Args, Debug)]
pub struct KanbanArgs {
    /// Load inputs from a scenario (built-in name or YAML file)
    #[arg(long, short = 's')]
    pub scenario: Option<String>,

    /// Prompt for each input interactively
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Takt time (seconds per piece)
    #[arg(long, value_name = "SECONDS")]
    pub takt_time: Option<String>,

    /// Customer demand per shift (pieces)
    #[arg(long, value_name = "PIECES")]
    pub demand: Option<String>,

    /// Container quantity (pieces per kanban)
    #[arg(long, value_name = "PIECES")]
    pub container: Option<String>,

    /// Pack-out quantity per withdrawal (pieces)
    #[arg(long, value_name = "PIECES")]
    pub pack_out: Option<String>,

    /// Available time per shift (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub available_time: Option<String>,

    /// Daily run time (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub run_time: Option<String>,

    /// Duration of one changeover (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub changeover_duration: Option<String>,

    /// Batch cycle time (seconds per piece)
    #[arg(long, value_name = "SECONDS")]
    pub cycle_time: Option<String>,

    /// Total changeover time per day (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub changeover_time: Option<String>,
}

pub fn run(args: KanbanArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();

    let mut inputs = match &args.scenario {
        Some(s) => Scenario::resolve(s)?.kanban.unwrap_or_default(),
        None => KanbanInputs::default(),
    };

    // Every kanban input sits in a denominator somewhere, so all flags
    // take the divisor fallback.
    let overrides: [(&str, &Option<String>, &mut f64); 9] = [
        ("takt-time", &args.takt_time, &mut inputs.takt_time),
        ("demand", &args.demand, &mut inputs.demand_per_shift),
        ("container", &args.container, &mut inputs.container_qty),
        ("pack-out", &args.pack_out, &mut inputs.pack_out_qty),
        ("available-time", &args.available_time, &mut inputs.available_time),
        ("run-time", &args.run_time, &mut inputs.daily_run_time),
        (
            "changeover-duration",
            &args.changeover_duration,
            &mut inputs.changeover_duration,
        ),
        ("cycle-time", &args.cycle_time, &mut inputs.batch_cycle_time),
        (
            "changeover-time",
            &args.changeover_time,
            &mut inputs.changeover_time,
        ),
    ];
    for (name, raw, slot) in overrides {
        if let Some(raw) = raw {
            *slot = parse_divisor_flag(name, raw);
        }
    }

    if args.interactive {
        let theme = ColorfulTheme::default();
        let prompts: [(&str, &mut f64); 9] = [
            ("Takt time (seconds per piece)", &mut inputs.takt_time),
            ("Demand per shift (pieces)", &mut inputs.demand_per_shift),
            ("Container quantity (pieces)", &mut inputs.container_qty),
            ("Pack-out quantity (pieces)", &mut inputs.pack_out_qty),
            ("Available time per shift (seconds)", &mut inputs.available_time),
            ("Daily run time (seconds)", &mut inputs.daily_run_time),
            ("Changeover duration (seconds)", &mut inputs.changeover_duration),
            ("Batch cycle time (seconds)", &mut inputs.batch_cycle_time),
            ("Changeover time (seconds)", &mut inputs.changeover_time),
        ];
        for (label, slot) in prompts {
            *slot = prompt::numeric_field(&theme, label, *slot, 1.0)?;
        }
    }

    let result = inputs.evaluate();
    let decimals = config.decimals();
    let format = resolve_format(global, &config);

    let mut report = Report::new("Kanban & Leveling");
    report.push(
        "Kanban per shift",
        fmt_value(result.kanban_per_shift, 1),
        "kanban",
    );
    report.push("Pitch", fmt_whole(result.pitch), "sec");
    report.push(
        "Leveling box columns",
        fmt_whole(result.leveling_columns),
        "columns",
    );
    report.push(
        "Time left for C/O",
        fmt_whole(result.changeover_slack),
        "sec",
    );
    report.push(
        "Max changeovers/day",
        fmt_value(result.max_changeovers, 1),
        "changeovers",
    );
    report.push("Batch size (EPE=1)", fmt_whole(result.batch_size), "pcs/day");
    report.push(
        "C/O-to-run ratio",
        fmt_value(result.co_to_run_ratio, decimals),
        ": 1",
    );
    report.print(&result, format)?;

    if format == OutputFormat::Auto && !global.quiet {
        output::section("Step by step");
        output::step(format!(
            "kanban per shift = {} ÷ {} = {}",
            fmt_whole(inputs.demand_per_shift),
            fmt_whole(inputs.container_qty),
            fmt_value(result.kanban_per_shift, 1)
        ));
        output::step(format!(
            "pitch = {} × {} = {}",
            fmt_whole(inputs.takt_time),
            fmt_whole(inputs.pack_out_qty),
            fmt_whole(result.pitch)
        ));
        output::step(format!(
            "columns = {} ÷ {} = {}",
            fmt_whole(inputs.available_time),
            fmt_whole(result.pitch),
            fmt_whole(result.leveling_columns)
        ));
        output::step(format!(
            "C/O slack = {} − {} = {}",
            fmt_whole(inputs.available_time),
            fmt_whole(inputs.daily_run_time),
            fmt_whole(result.changeover_slack)
        ));
        output::step(format!(
            "max C/O = {} ÷ {} = {}",
            fmt_whole(result.changeover_slack),
            fmt_whole(inputs.changeover_duration),
            fmt_value(result.max_changeovers, 1)
        ));

        output::section("What this means");
        output::note(format!(
            "Withdraw {} pieces every {} seconds using {} kanban per shift \
             and a leveling box with {} columns. The schedule leaves {} \
             seconds of changeover slack, enough for {} changeovers a day.",
            fmt_whole(inputs.pack_out_qty),
            fmt_whole(result.pitch),
            fmt_value(result.kanban_per_shift, 1),
            fmt_whole(result.leveling_columns),
            fmt_whole(result.changeover_slack),
            fmt_value(result.max_changeovers, 1)
        ));
    }

    warn_non_finite(&[
        result.kanban_per_shift,
        result.leveling_columns,
        result.max_changeovers,
        result.batch_size,
        result.co_to_run_ratio,
    ]);
    Ok(())
}
