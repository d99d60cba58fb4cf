//! `vsm capacity` command - process capacity calculator

use console::style;
use dialoguer::theme::ColorfulTheme;
use miette::{miette, Result};

use crate::calc::{field, CapacityInputs, ProcessStep};
use crate::cli::helpers::{
    fmt_value, fmt_whole, parse_divisor_flag, parse_quantity_flag, resolve_format, warn_non_finite,
};
use crate::cli::output::{self, Report};
use crate::cli::{prompt, GlobalOpts, OutputFormat};
use crate::core::{Config, Scenario};

#[derive(clap::Args, Debug)]
pub struct CapacityArgs {
    /// Load inputs from a scenario (built-in name or YAML file)
    #[arg(long, short = 's')]
    pub scenario: Option<String>,

    /// Prompt for each input interactively
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Available working time per shift (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub available_time: Option<String>,

    /// Takt time (seconds per piece)
    #[arg(long, value_name = "SECONDS")]
    pub takt_time: Option<String>,

    /// Total work content (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub work_content: Option<String>,

    /// Buffer time per takt cycle (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub buffer_time: Option<String>,

    /// Number of operators
    #[arg(long, value_name = "COUNT")]
    pub operators: Option<String>,

    /// Replace the route: NAME=CYCLE[:SETUP[:UPTIME]], repeatable, in order
    #[arg(long = "step", value_name = "SPEC")]
    pub steps: Vec<String>,
}

/// Parse one `--step NAME=CYCLE[:SETUP[:UPTIME]]` spec. Uptime defaults
/// to 100 when omitted; cycle time is divisor-class since capacity
/// divides by it.
pub fn parse_step_spec(spec: &str) -> Result<ProcessStep> {
    let (name, rest) = spec
        .split_once('=')
        .ok_or_else(|| miette!("invalid --step '{spec}': expected NAME=CYCLE[:SETUP[:UPTIME]]"))?;
    if name.is_empty() {
        return Err(miette!("invalid --step '{spec}': empty step name"));
    }

    let mut parts = rest.splitn(3, ':');
    let cycle_time = field::divisor(parts.next().unwrap_or(""));
    let setup_time = field::quantity(parts.next().unwrap_or(""));
    let uptime = parts.next().map(field::quantity).unwrap_or(100.0);

    Ok(ProcessStep::new(name, cycle_time, setup_time, uptime))
}

pub fn run(args: CapacityArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();

    let mut inputs = match &args.scenario {
        Some(s) => Scenario::resolve(s)?.capacity.unwrap_or_default(),
        None => CapacityInputs::default(),
    };

    if let Some(raw) = &args.available_time {
        inputs.available_time = parse_quantity_flag("available-time", raw);
    }
    if let Some(raw) = &args.takt_time {
        inputs.takt_time = parse_divisor_flag("takt-time", raw);
    }
    if let Some(raw) = &args.work_content {
        inputs.work_content = parse_quantity_flag("work-content", raw);
    }
    if let Some(raw) = &args.buffer_time {
        inputs.buffer_time = parse_quantity_flag("buffer-time", raw);
    }
    if let Some(raw) = &args.operators {
        inputs.operators = parse_divisor_flag("operators", raw);
    }
    if !args.steps.is_empty() {
        inputs.steps = args
            .steps
            .iter()
            .map(|s| parse_step_spec(s))
            .collect::<Result<Vec<_>>>()?;
    }

    if args.interactive {
        let theme = ColorfulTheme::default();
        inputs.available_time =
            prompt::numeric_field(&theme, "Available working time (seconds)", inputs.available_time, 0.0)?;
        inputs.takt_time =
            prompt::numeric_field(&theme, "Takt time (seconds per piece)", inputs.takt_time, 1.0)?;
        inputs.work_content =
            prompt::numeric_field(&theme, "Total work content (seconds)", inputs.work_content, 0.0)?;
        inputs.buffer_time =
            prompt::numeric_field(&theme, "Buffer time (seconds)", inputs.buffer_time, 0.0)?;
        inputs.operators =
            prompt::numeric_field(&theme, "Number of operators", inputs.operators, 1.0)?;
        for step in &mut inputs.steps {
            step.cycle_time = prompt::numeric_field(
                &theme,
                &format!("{} cycle time (seconds)", step.name),
                step.cycle_time,
                1.0,
            )?;
        }
    }

    let result = inputs.evaluate();
    let decimals = config.decimals();
    let format = resolve_format(global, &config);

    let mut report = Report::new("Process Capacity");
    report.push(
        "Process capacity",
        fmt_whole(result.process_capacity),
        "pcs/shift",
    );
    report.push(
        "Operators needed",
        fmt_value(result.operators_needed, decimals),
        "operators",
    );
    report.push(
        "Max work content",
        fmt_whole(result.max_work_content),
        "sec",
    );
    report.push("Utilization", fmt_value(result.utilization, 1), "%");
    report.print(&result, format)?;

    if format == OutputFormat::Auto && !global.quiet {
        output::section("Route");
        for (step, capacity) in inputs.steps.iter().zip(&result.step_capacities) {
            println!(
                "  {:<16} {:>5} sec cycle | {:>3}% uptime | capacity {} pcs/shift",
                style(&step.name).bold(),
                step.cycle_time,
                step.uptime,
                fmt_whole(*capacity)
            );
        }

        output::section("Step by step");
        if let Some(first) = inputs.steps.first() {
            output::step(format!(
                "capacity = ({} ÷ {}) × {}% = {}",
                fmt_whole(inputs.available_time),
                first.cycle_time,
                first.uptime,
                fmt_whole(result.process_capacity)
            ));
        }
        output::step(format!(
            "operators needed = {} ÷ {} = {}",
            fmt_whole(inputs.work_content),
            fmt_whole(inputs.takt_time),
            fmt_value(result.operators_needed, decimals)
        ));
        output::step(format!(
            "max work content = ({} − {}) × {} = {}",
            fmt_whole(inputs.takt_time),
            fmt_whole(inputs.buffer_time),
            fmt_whole(inputs.operators),
            fmt_whole(result.max_work_content)
        ));
        output::step(format!(
            "utilization = {} ÷ ({} × {}) = {}%",
            fmt_whole(inputs.work_content),
            fmt_whole(inputs.takt_time),
            fmt_whole(inputs.operators),
            fmt_value(result.utilization, 1)
        ));

        output::section("What this means");
        output::note(format!(
            "The pacemaker step can produce {} pieces per shift. Covering \
             {} seconds of work at takt needs {} operators; the crew is \
             running at {}% of capacity.",
            fmt_whole(result.process_capacity),
            fmt_whole(inputs.work_content),
            fmt_value(result.operators_needed, 1),
            fmt_value(result.utilization, 1)
        ));
    }

    warn_non_finite(&[
        result.process_capacity,
        result.operators_needed,
        result.utilization,
    ]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_step_spec_full() {
        let step = parse_step_spec("Stamping=1:0:85").unwrap();
        assert_eq!(step.name, "Stamping");
        assert_eq!(step.cycle_time, 1.0);
        assert_eq!(step.setup_time, 0.0);
        assert_eq!(step.uptime, 85.0);
    }

    #[test]
    fn test_parse_step_spec_cycle_only_defaults_uptime() {
        let step = parse_step_spec("Weld=39").unwrap();
        assert_eq!(step.cycle_time, 39.0);
        assert_eq!(step.uptime, 100.0);
    }

    #[test]
    fn test_parse_step_spec_bad_cycle_degrades_to_one() {
        // Cycle time divides available time, so it takes the divisor fallback.
        let step = parse_step_spec("Weld=fast").unwrap();
        assert_eq!(step.cycle_time, 1.0);
    }

    #[test]
    fn test_parse_step_spec_missing_eq_is_error() {
        assert!(parse_step_spec("Stamping").is_err());
    }
}
