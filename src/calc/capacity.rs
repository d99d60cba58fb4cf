//! Process capacity calculator
//!
//! Sizes a line against takt: capacity of the pacemaker step, operators
//! needed for the total work content, and operator utilization.

use serde::{Deserialize, Serialize};

/// One step in the process route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    /// Step name (e.g. "Stamping", "Weld #1")
    pub name: String,

    /// Cycle time (seconds per piece)
    pub cycle_time: f64,

    /// Setup time (seconds)
    #[serde(default)]
    pub setup_time: f64,

    /// Machine uptime (percent, 0-100)
    #[serde(default = "default_uptime")]
    pub uptime: f64,
}

fn default_uptime() -> f64 {
    100.0
}

impl ProcessStep {
    pub fn new(name: impl Into<String>, cycle_time: f64, setup_time: f64, uptime: f64) -> Self {
        Self {
            name: name.into(),
            cycle_time,
            setup_time,
            uptime,
        }
    }

    /// Capacity of this step alone: (available / cycle time) × uptime.
    pub fn capacity(&self, available_time: f64) -> f64 {
        (available_time / self.cycle_time) * (self.uptime / 100.0)
    }
}

/// Process capacity calculator inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityInputs {
    /// Available working time per shift (seconds)
    pub available_time: f64,

    /// Takt time (seconds per piece)
    pub takt_time: f64,

    /// Total work content across all steps (seconds)
    pub work_content: f64,

    /// Buffer time subtracted from takt when loading operators (seconds)
    pub buffer_time: f64,

    /// Number of operators on the line
    pub operators: f64,

    /// Ordered process route
    pub steps: Vec<ProcessStep>,
}

impl Default for CapacityInputs {
    /// ACME Stamping route: stamping pacemaker plus weld/assembly cells.
    fn default() -> Self {
        Self {
            available_time: 27600.0,
            takt_time: 60.0,
            work_content: 187.0,
            buffer_time: 4.0,
            operators: 3.0,
            steps: vec![
                ProcessStep::new("Stamping", 1.0, 0.0, 85.0),
                ProcessStep::new("Spot Weld #1", 39.0, 0.0, 85.0),
                ProcessStep::new("Spot Weld #2", 46.0, 0.0, 85.0),
                ProcessStep::new("Assembly #1", 62.0, 0.0, 85.0),
                ProcessStep::new("Assembly #2", 40.0, 0.0, 85.0),
            ],
        }
    }
}

/// Derived capacity metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityResult {
    /// Capacity of the first (pacemaker) step, pieces per shift
    pub process_capacity: f64,

    /// Operators required to cover the work content at takt
    pub operators_needed: f64,

    /// Work content target across the crew: (takt − buffer) × operators
    pub max_work_content: f64,

    /// Crew utilization (percent)
    pub utilization: f64,

    /// Capacity of each step in route order, pieces per shift
    pub step_capacities: Vec<f64>,
}

impl CapacityInputs {
    /// Evaluate the capacity formula chain.
    ///
    /// The headline capacity figure is taken from the first step of the
    /// route, matching how the case study reads capacity off the
    /// pacemaker process; per-step capacities are reported alongside.
    pub fn evaluate(&self) -> CapacityResult {
        let process_capacity = self
            .steps
            .first()
            .map(|s| s.capacity(self.available_time))
            .unwrap_or(0.0);

        let operators_needed = self.work_content / self.takt_time;
        let max_work_content = (self.takt_time - self.buffer_time) * self.operators;
        let utilization = self.work_content / (self.takt_time * self.operators) * 100.0;

        let step_capacities = self
            .steps
            .iter()
            .map(|s| s.capacity(self.available_time))
            .collect();

        CapacityResult {
            process_capacity,
            operators_needed,
            max_work_content,
            utilization,
            step_capacities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acme_stamping_capacity() {
        let result = CapacityInputs::default().evaluate();
        // (27600 / 1) * 0.85 = 23460 pieces per shift
        assert!((result.process_capacity - 23460.0).abs() < 1e-10);
    }

    #[test]
    fn test_operators_needed_and_utilization() {
        let result = CapacityInputs::default().evaluate();
        // 187 / 60 = 3.12 operators
        assert!((result.operators_needed - 187.0 / 60.0).abs() < 1e-10);
        // 187 / (60 * 3) = 103.9%: overloaded crew
        assert!((result.utilization - 103.888).abs() < 0.001);
    }

    #[test]
    fn test_max_work_content() {
        let result = CapacityInputs::default().evaluate();
        assert_eq!(result.max_work_content, (60.0 - 4.0) * 3.0);
    }

    #[test]
    fn test_step_capacities_follow_route_order() {
        let result = CapacityInputs::default().evaluate();
        assert_eq!(result.step_capacities.len(), 5);
        // Slowest step: 27600 / 62 * 0.85
        assert!((result.step_capacities[3] - 27600.0 / 62.0 * 0.85).abs() < 1e-10);
    }

    #[test]
    fn test_empty_route_has_zero_capacity() {
        let inputs = CapacityInputs {
            steps: Vec::new(),
            ..CapacityInputs::default()
        };
        let result = inputs.evaluate();
        assert_eq!(result.process_capacity, 0.0);
        assert!(result.step_capacities.is_empty());
    }

    #[test]
    fn test_uptime_defaults_to_full() {
        let parsed: ProcessStep =
            serde_yml::from_str("name: Deburr\ncycle_time: 12").unwrap();
        assert_eq!(parsed.uptime, 100.0);
        assert_eq!(parsed.setup_time, 0.0);
    }
}
