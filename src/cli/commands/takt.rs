//! `vsm takt` command - takt time calculator

use dialoguer::theme::ColorfulTheme;
use miette::Result;

use crate::calc::TaktInputs;
use crate::cli::helpers::{
    fmt_value, fmt_whole, parse_divisor_flag, parse_quantity_flag, resolve_format, warn_non_finite,
};
use crate::cli::output::{self, Report};
use crate::cli::{prompt, GlobalOpts, OutputFormat};
use crate::core::{Config, Scenario};

#[derive(clap::Args, Debug)]
pub struct TaktArgs {
    /// Load inputs from a scenario (built-in name or YAML file)
    #[arg(long, short = 's')]
    pub scenario: Option<String>,

    /// Prompt for each input interactively
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Total shift time (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub shift_time: Option<String>,

    /// Break time per shift (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub break_time: Option<String>,

    /// Monthly customer demand (pieces)
    #[arg(long, value_name = "PIECES")]
    pub monthly_demand: Option<String>,

    /// Working days per month
    #[arg(long, value_name = "DAYS")]
    pub working_days: Option<String>,

    /// Shifts per day
    #[arg(long, value_name = "COUNT")]
    pub shifts: Option<String>,
}

pub fn run(args: TaktArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();

    let mut inputs = match &args.scenario {
        Some(s) => Scenario::resolve(s)?.takt.unwrap_or_default(),
        None => TaktInputs::default(),
    };

    if let Some(raw) = &args.shift_time {
        inputs.shift_time = parse_quantity_flag("shift-time", raw);
    }
    if let Some(raw) = &args.break_time {
        inputs.break_time = parse_quantity_flag("break-time", raw);
    }
    if let Some(raw) = &args.monthly_demand {
        inputs.monthly_demand = parse_quantity_flag("monthly-demand", raw);
    }
    if let Some(raw) = &args.working_days {
        inputs.working_days = parse_divisor_flag("working-days", raw);
    }
    if let Some(raw) = &args.shifts {
        inputs.shifts_per_day = parse_divisor_flag("shifts", raw);
    }

    if args.interactive {
        let theme = ColorfulTheme::default();
        inputs.shift_time =
            prompt::numeric_field(&theme, "Total shift time (seconds)", inputs.shift_time, 0.0)?;
        inputs.break_time =
            prompt::numeric_field(&theme, "Break time (seconds)", inputs.break_time, 0.0)?;
        inputs.monthly_demand = prompt::numeric_field(
            &theme,
            "Monthly customer demand (pieces)",
            inputs.monthly_demand,
            0.0,
        )?;
        inputs.working_days =
            prompt::numeric_field(&theme, "Working days per month", inputs.working_days, 1.0)?;
        inputs.shifts_per_day =
            prompt::numeric_field(&theme, "Shifts per day", inputs.shifts_per_day, 1.0)?;
    }

    let result = inputs.evaluate();
    let decimals = config.decimals();
    let format = resolve_format(global, &config);

    let mut report = Report::new("Takt Time");
    report.push("Available working time", fmt_whole(result.available_time), "sec");
    report.push("Daily demand", fmt_value(result.daily_demand, decimals), "pcs/day");
    report.push(
        "Demand per shift",
        fmt_value(result.demand_per_shift, decimals),
        "pcs/shift",
    );
    report.push("Takt time", fmt_value(result.takt_time, decimals), "sec/pc");
    report.print(&result, format)?;

    if format == OutputFormat::Auto && !global.quiet {
        output::section("Step by step");
        output::step(format!(
            "available = {} − {} = {}",
            fmt_whole(inputs.shift_time),
            fmt_whole(inputs.break_time),
            fmt_whole(result.available_time)
        ));
        output::step(format!(
            "daily demand = {} ÷ {} = {}",
            fmt_whole(inputs.monthly_demand),
            fmt_whole(inputs.working_days),
            fmt_value(result.daily_demand, decimals)
        ));
        output::step(format!(
            "demand per shift = {} ÷ {} = {}",
            fmt_value(result.daily_demand, decimals),
            fmt_whole(inputs.shifts_per_day),
            fmt_value(result.demand_per_shift, decimals)
        ));
        output::step(format!(
            "takt = {} ÷ {} = {}",
            fmt_whole(result.available_time),
            fmt_value(result.demand_per_shift, decimals),
            fmt_value(result.takt_time, decimals)
        ));

        output::section("What this means");
        output::note(format!(
            "Production must complete one piece every {} seconds to meet \
             customer demand; any process slower than that falls behind.",
            fmt_value(result.takt_time, decimals)
        ));
    }

    warn_non_finite(&[
        result.daily_demand,
        result.demand_per_shift,
        result.takt_time,
    ]);
    Ok(())
}
