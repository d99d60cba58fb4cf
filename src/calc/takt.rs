//! Takt time calculator
//!
//! Takt time is the pace production must hold to match customer demand:
//! available working time per shift divided by demand per shift.

use serde::{Deserialize, Serialize};

/// Takt time calculator inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaktInputs {
    /// Total shift time (seconds)
    pub shift_time: f64,

    /// Break time per shift (seconds)
    pub break_time: f64,

    /// Monthly customer demand (pieces)
    pub monthly_demand: f64,

    /// Working days per month
    pub working_days: f64,

    /// Shifts per day
    pub shifts_per_day: f64,
}

impl Default for TaktInputs {
    /// ACME Stamping case study values.
    fn default() -> Self {
        Self {
            shift_time: 28800.0,
            break_time: 1200.0,
            monthly_demand: 18400.0,
            working_days: 20.0,
            shifts_per_day: 2.0,
        }
    }
}

/// Derived takt time results, recomputed from scratch on every evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaktResult {
    /// Net production time per shift after breaks (seconds)
    pub available_time: f64,

    /// Average demand per working day (pieces)
    pub daily_demand: f64,

    /// Demand allocated to each shift (pieces)
    pub demand_per_shift: f64,

    /// Takt time (seconds per piece)
    pub takt_time: f64,
}

impl TaktInputs {
    /// Evaluate the takt time formula chain.
    pub fn evaluate(&self) -> TaktResult {
        let available_time = self.shift_time - self.break_time;
        let daily_demand = self.monthly_demand / self.working_days;
        let demand_per_shift = daily_demand / self.shifts_per_day;
        let takt_time = available_time / demand_per_shift;

        TaktResult {
            available_time,
            daily_demand,
            demand_per_shift,
            takt_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acme_stamping_example() {
        let result = TaktInputs::default().evaluate();
        assert_eq!(result.available_time, 27600.0);
        assert_eq!(result.daily_demand, 920.0);
        assert_eq!(result.demand_per_shift, 460.0);
        assert!((result.takt_time - 60.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_shift_no_breaks() {
        let inputs = TaktInputs {
            shift_time: 27000.0,
            break_time: 0.0,
            monthly_demand: 9100.0,
            working_days: 20.0,
            shifts_per_day: 1.0,
        };
        let result = inputs.evaluate();
        assert_eq!(result.available_time, 27000.0);
        assert_eq!(result.demand_per_shift, 455.0);
        assert!((result.takt_time - 59.34).abs() < 0.01);
    }

    #[test]
    fn test_zero_demand_propagates_infinity() {
        // A typed zero is not remapped; the display layer deals with it.
        let inputs = TaktInputs {
            monthly_demand: 0.0,
            ..TaktInputs::default()
        };
        assert!(inputs.evaluate().takt_time.is_infinite());
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let inputs = TaktInputs::default();
        let a = inputs.evaluate();
        let b = inputs.evaluate();
        assert_eq!(a.takt_time, b.takt_time);
        assert_eq!(a.available_time, b.available_time);
    }

    #[test]
    fn test_inputs_yaml_roundtrip() {
        let yaml = serde_yml::to_string(&TaktInputs::default()).unwrap();
        let parsed: TaktInputs = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed.monthly_demand, 18400.0);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let parsed: TaktInputs = serde_yml::from_str("monthly_demand: 24000").unwrap();
        assert_eq!(parsed.monthly_demand, 24000.0);
        assert_eq!(parsed.shift_time, 28800.0);
    }
}
