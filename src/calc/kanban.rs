//! Kanban & leveling calculator
//!
//! Pull-system sizing: kanban cards per shift, pitch, leveling-box
//! columns, changeover budget, and the EPE-1-day batch size.

use serde::{Deserialize, Serialize};

/// Kanban calculator inputs. Every field here ends up in a denominator
/// somewhere in the chain, so all of them are divisor-class (fallback 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KanbanInputs {
    /// Takt time (seconds per piece)
    pub takt_time: f64,

    /// Customer demand per shift (pieces)
    pub demand_per_shift: f64,

    /// Container quantity (pieces per kanban)
    pub container_qty: f64,

    /// Pack-out quantity withdrawn per pitch (pieces)
    pub pack_out_qty: f64,

    /// Available time per shift (seconds)
    pub available_time: f64,

    /// Daily run time needed to cover demand (seconds)
    pub daily_run_time: f64,

    /// Duration of one changeover (seconds)
    pub changeover_duration: f64,

    /// Cycle time used for batch sizing (seconds per piece)
    pub batch_cycle_time: f64,

    /// Total changeover time per day (seconds)
    pub changeover_time: f64,
}

impl Default for KanbanInputs {
    /// ACME Stamping pull-system figures.
    fn default() -> Self {
        Self {
            takt_time: 60.0,
            demand_per_shift: 460.0,
            container_qty: 20.0,
            pack_out_qty: 20.0,
            available_time: 27600.0,
            daily_run_time: 26100.0,
            changeover_duration: 900.0,
            batch_cycle_time: 1.0,
            changeover_time: 3600.0,
        }
    }
}

/// Derived kanban and leveling metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KanbanResult {
    /// Kanban cards circulating per shift
    pub kanban_per_shift: f64,

    /// Pitch: takt × pack-out (seconds)
    pub pitch: f64,

    /// Columns (time slots) in the leveling box
    pub leveling_columns: f64,

    /// Slack left for changeovers: available − run time (seconds)
    pub changeover_slack: f64,

    /// Maximum changeovers per day within the slack
    pub max_changeovers: f64,

    /// Batch size for an EPE interval of one day (pieces)
    pub batch_size: f64,

    /// Changeover-to-run ratio
    pub co_to_run_ratio: f64,
}

impl KanbanInputs {
    /// Evaluate the kanban formula chain.
    pub fn evaluate(&self) -> KanbanResult {
        let kanban_per_shift = self.demand_per_shift / self.container_qty;
        let pitch = self.takt_time * self.pack_out_qty;
        let leveling_columns = self.available_time / pitch;
        let changeover_slack = self.available_time - self.daily_run_time;
        let max_changeovers = changeover_slack / self.changeover_duration;
        let batch_size =
            (self.changeover_time / (max_changeovers * self.batch_cycle_time)) * self.daily_run_time;
        let co_to_run_ratio = self.changeover_time / (batch_size * self.batch_cycle_time);

        KanbanResult {
            kanban_per_shift,
            pitch,
            leveling_columns,
            changeover_slack,
            max_changeovers,
            batch_size,
            co_to_run_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acme_pull_system() {
        let result = KanbanInputs::default().evaluate();
        // 460 / 20 = 23 kanban per shift
        assert_eq!(result.kanban_per_shift, 23.0);
        // 60 * 20 = 1200 s pitch, 27600 / 1200 = 23 columns
        assert_eq!(result.pitch, 1200.0);
        assert_eq!(result.leveling_columns, 23.0);
    }

    #[test]
    fn test_changeover_budget() {
        let result = KanbanInputs::default().evaluate();
        assert_eq!(result.changeover_slack, 1500.0);
        // 1500 / 900 = 1.67 changeovers per day
        assert!((result.max_changeovers - 1500.0 / 900.0).abs() < 1e-10);
    }

    #[test]
    fn test_batch_size_chain() {
        let result = KanbanInputs::default().evaluate();
        let max_co = 1500.0 / 900.0;
        let batch = (3600.0 / (max_co * 1.0)) * 26100.0;
        assert!((result.batch_size - batch).abs() < 1e-6);
        assert!((result.co_to_run_ratio - 3600.0 / (batch * 1.0)).abs() < 1e-10);
    }

    #[test]
    fn test_no_slack_gives_non_finite_batch() {
        let inputs = KanbanInputs {
            daily_run_time: 27600.0,
            ..KanbanInputs::default()
        };
        let result = inputs.evaluate();
        assert_eq!(result.changeover_slack, 0.0);
        assert_eq!(result.max_changeovers, 0.0);
        assert!(result.batch_size.is_infinite());
    }
}
