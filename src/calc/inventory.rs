//! Inventory & lead-time calculator
//!
//! Walks the value stream timeline: inventory on hand expressed in days of
//! demand, production lead time as the sum of segment wait times, inventory
//! turns per year, and the value-added ratio of the whole stream.

use serde::{Deserialize, Serialize};

/// Seconds in a day, for converting lead time days to seconds in the
/// VA ratio denominator.
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// One segment of the value stream timeline.
///
/// Wait times are in days, process times in seconds, matching how the
/// numbers are read off a value stream map. Negative times are accepted
/// as-is; the timeline is never validated for consistency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSegment {
    /// Segment name (e.g. "Raw Materials", "Finished Goods")
    pub name: String,

    /// Inventory wait time (days)
    #[serde(default)]
    pub wait_time: f64,

    /// Value-added process time (seconds)
    #[serde(default)]
    pub process_time: f64,

    /// Counted inventory at this point, when known (pieces)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_qty: Option<f64>,
}

impl TimelineSegment {
    pub fn new(name: impl Into<String>, wait_time: f64, process_time: f64) -> Self {
        Self {
            name: name.into(),
            wait_time,
            process_time,
            inventory_qty: None,
        }
    }
}

/// Inventory calculator inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryInputs {
    /// Daily customer demand (pieces)
    pub daily_demand: f64,

    /// Total inventory quantity on hand (pieces)
    pub inventory_qty: f64,

    /// Working days per year
    pub working_days_per_year: f64,

    /// Total value-added processing time (seconds)
    pub va_time: f64,

    /// Ordered timeline from raw material to finished goods
    pub segments: Vec<TimelineSegment>,
}

impl Default for InventoryInputs {
    /// ACME Stamping timeline as mapped in the current-state drawing.
    fn default() -> Self {
        Self {
            daily_demand: 920.0,
            inventory_qty: 7000.0,
            working_days_per_year: 240.0,
            va_time: 188.0,
            segments: vec![
                TimelineSegment::new("Raw Materials", 5.0, 0.0),
                TimelineSegment {
                    name: "Coils".to_string(),
                    wait_time: 0.0,
                    process_time: 0.0,
                    inventory_qty: Some(7000.0),
                },
                TimelineSegment {
                    name: "Stamped Parts".to_string(),
                    wait_time: 0.0,
                    process_time: 0.0,
                    inventory_qty: Some(7000.0),
                },
                TimelineSegment::new("Weld/Assembly WIP", 6.5, 0.0),
                TimelineSegment::new("Finished Goods", 4.5, 0.0),
            ],
        }
    }
}

/// Derived inventory metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryResult {
    /// Days of inventory on hand
    pub inventory_days: f64,

    /// Production lead time, raw material to finished goods (days)
    pub lead_time: f64,

    /// Inventory turns per year
    pub inventory_turns: f64,

    /// Fraction of lead time that is value-adding (0..1 scale)
    pub va_ratio: f64,
}

impl InventoryInputs {
    /// Evaluate the inventory formula chain.
    pub fn evaluate(&self) -> InventoryResult {
        let inventory_days = self.inventory_qty / self.daily_demand;
        let lead_time: f64 = self.segments.iter().map(|s| s.wait_time).sum();
        let inventory_turns = self.working_days_per_year / lead_time;
        let va_ratio = self.va_time / (lead_time * SECONDS_PER_DAY);

        InventoryResult {
            inventory_days,
            lead_time,
            inventory_turns,
            va_ratio,
        }
    }

    /// Sum of segment process times (the timeline's VA seconds).
    pub fn timeline_va_time(&self) -> f64 {
        self.segments.iter().map(|s| s.process_time).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Timeline from the full current-state map, wait times summing to 23.6.
    fn acme_full_timeline() -> InventoryInputs {
        InventoryInputs {
            segments: vec![
                TimelineSegment::new("Raw Materials", 5.0, 0.0),
                TimelineSegment::new("Coils", 7.6, 1.0),
                TimelineSegment::new("Stamped Parts", 1.8, 39.0),
                TimelineSegment::new("Welded Parts", 2.7, 46.0),
                TimelineSegment::new("Assembled Parts", 2.0, 62.0),
                TimelineSegment::new("Finished Goods", 4.5, 40.0),
            ],
            ..InventoryInputs::default()
        }
    }

    #[test]
    fn test_acme_current_state_metrics() {
        let result = acme_full_timeline().evaluate();
        assert!((result.inventory_days - 7000.0 / 920.0).abs() < 1e-10);
        assert!((result.lead_time - 23.6).abs() < 1e-10);
        assert!((result.inventory_turns - 240.0 / 23.6).abs() < 1e-10);
        // 188 / (23.6 * 86400) = 0.0092%
        assert!((result.va_ratio - 9.2201e-5).abs() < 1e-8);
    }

    #[test]
    fn test_timeline_va_time_sums_process_times() {
        assert_eq!(acme_full_timeline().timeline_va_time(), 188.0);
    }

    #[test]
    fn test_negative_wait_time_is_accepted() {
        let mut inputs = InventoryInputs::default();
        inputs.segments[0].wait_time = -2.0;
        let lead: f64 = inputs.segments.iter().map(|s| s.wait_time).sum();
        assert_eq!(inputs.evaluate().lead_time, lead);
    }

    #[test]
    fn test_empty_timeline_gives_non_finite_turns() {
        let inputs = InventoryInputs {
            segments: Vec::new(),
            ..InventoryInputs::default()
        };
        let result = inputs.evaluate();
        assert_eq!(result.lead_time, 0.0);
        assert!(result.inventory_turns.is_infinite());
    }

    #[test]
    fn test_segment_yaml_roundtrip() {
        let inputs = InventoryInputs::default();
        let yaml = serde_yml::to_string(&inputs).unwrap();
        let parsed: InventoryInputs = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed.segments, inputs.segments);
        assert_eq!(parsed.segments[1].inventory_qty, Some(7000.0));
    }
}
