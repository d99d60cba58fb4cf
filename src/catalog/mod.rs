//! Formula reference catalog
//!
//! A static table of the VSM formulas with worked examples and book page
//! references, filtered by a case-insensitive substring query intersected
//! with an optional category. At ~20 entries a linear scan is the index.

use clap::ValueEnum;
use serde::Serialize;

/// Formula category, matching the calculator the formula belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    TaktTime,
    Inventory,
    Capacity,
    Kanban,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TaktTime => "takt-time",
            Category::Inventory => "inventory",
            Category::Capacity => "capacity",
            Category::Kanban => "kanban",
            Category::General => "general",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One formula reference card.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Formula {
    pub id: u32,
    pub name: &'static str,
    pub formula: &'static str,
    pub example: &'static str,
    pub page_ref: &'static str,
    pub category: Category,
    pub description: &'static str,
}

impl Formula {
    /// Case-insensitive substring match against name, description, and
    /// formula text.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.description.to_lowercase().contains(&q)
            || self.formula.to_lowercase().contains(&q)
    }
}

/// Filter the catalog by optional query and optional category.
///
/// An empty/absent query matches everything; an absent category means all
/// categories. Both filters intersect.
pub fn filter(query: Option<&str>, category: Option<Category>) -> Vec<&'static Formula> {
    CATALOG
        .iter()
        .filter(|f| query.map_or(true, |q| q.is_empty() || f.matches_query(q)))
        .filter(|f| category.map_or(true, |c| f.category == c))
        .collect()
}

/// Look up a formula by its catalog id.
pub fn by_id(id: u32) -> Option<&'static Formula> {
    CATALOG.iter().find(|f| f.id == id)
}

/// The complete formula catalog.
pub static CATALOG: &[Formula] = &[
    Formula {
        id: 1,
        name: "Available Working Time",
        formula: "Total Shift Time − Break Time",
        example: "28,800 sec − 1,200 sec = 27,600 sec",
        page_ref: "VSM Guide",
        category: Category::TaktTime,
        description: "Net production time available per shift after breaks",
    },
    Formula {
        id: 2,
        name: "Takt Time",
        formula: "Available Working Time / Customer Demand per Shift",
        example: "27,600 sec ÷ 460 pcs = 60 sec/pc",
        page_ref: "pp.44, 58",
        category: Category::TaktTime,
        description: "Required production pace to meet customer demand",
    },
    Formula {
        id: 3,
        name: "Daily Customer Demand",
        formula: "Monthly Demand / Working Days per Month",
        example: "18,400 pcs ÷ 20 days = 920 pcs/day",
        page_ref: "VSM Guide",
        category: Category::TaktTime,
        description: "Average daily demand from monthly requirements",
    },
    Formula {
        id: 4,
        name: "Demand per Shift",
        formula: "Daily Demand / Shifts per Day",
        example: "920 pcs/day ÷ 2 shifts = 460 pcs/shift",
        page_ref: "VSM Guide",
        category: Category::TaktTime,
        description: "Customer demand allocated to each shift",
    },
    Formula {
        id: 5,
        name: "Inventory in Days",
        formula: "Inventory Quantity / Daily Customer Demand",
        example: "7,000 pcs ÷ 920 pcs/day = 7.6 days",
        page_ref: "VSM Guide",
        category: Category::Inventory,
        description: "How many days of inventory you have on hand",
    },
    Formula {
        id: 6,
        name: "Production Lead Time",
        formula: "Sum of all inventory wait times on timeline",
        example: "5 days + 7.6 days + 1.8 days + 2.7 days + 2 days + 4.5 days = 23.6 days",
        page_ref: "VSM Guide",
        category: Category::Inventory,
        description: "Total time from raw material to finished goods",
    },
    Formula {
        id: 7,
        name: "Total Processing (VA) Time",
        formula: "Sum of all process cycle times",
        example: "1 sec + 39 sec + 46 sec + 62 sec + 40 sec = 188 sec",
        page_ref: "VSM Guide",
        category: Category::Inventory,
        description: "Total value-added processing time",
    },
    Formula {
        id: 8,
        name: "Process Capacity (no C/O)",
        formula: "(Available Time / Cycle Time) × Uptime",
        example: "(27,600 sec ÷ 1 sec) × 85% = 23,460 pcs/shift",
        page_ref: "p.22",
        category: Category::Capacity,
        description: "Maximum output per shift without changeovers",
    },
    Formula {
        id: 9,
        name: "Operators Needed",
        formula: "Total Work Content / Takt Time",
        example: "187 sec ÷ 60 sec/pc = 3.12 → 4 operators",
        page_ref: "pp.63-64",
        category: Category::Capacity,
        description: "Number of operators required to meet takt time",
    },
    Formula {
        id: 10,
        name: "Max Work Content per Operator",
        formula: "Takt Time − Buffer",
        example: "3 ops × 56 sec = 168 sec target per operator",
        page_ref: "p.64",
        category: Category::Capacity,
        description: "Target work allocation per operator",
    },
    Formula {
        id: 11,
        name: "Pitch",
        formula: "Takt Time × Pack-Out Quantity",
        example: "60 sec/pc × 20 pcs = 1,200 sec = 20 min",
        page_ref: "p.51",
        category: Category::Kanban,
        description: "Time interval for paced withdrawal",
    },
    Formula {
        id: 12,
        name: "Kanban per Shift",
        formula: "Demand per Shift / Container Quantity",
        example: "460 pcs ÷ 20 pcs/container = 23 kanban/shift",
        page_ref: "p.76",
        category: Category::Kanban,
        description: "Number of kanban cards needed per shift",
    },
    Formula {
        id: 13,
        name: "Columns in Leveling Box",
        formula: "Available Time per Shift / Pitch",
        example: "27,600 sec ÷ 1,200 sec = 23 columns",
        page_ref: "p.76",
        category: Category::Kanban,
        description: "Number of time slots in production leveling box",
    },
    Formula {
        id: 14,
        name: "Time Left for Changeovers",
        formula: "Available Time − Time to Run Daily Demand",
        example: "16 hrs − 14.5 hrs = 1.5 hrs",
        page_ref: "p.54",
        category: Category::Kanban,
        description: "Available time for equipment changeovers",
    },
    Formula {
        id: 15,
        name: "Max Changeovers per Day",
        formula: "Time Left for C/O / Changeover Duration",
        example: "1.5 hrs ÷ 0.25 hrs = 6 changeovers/day",
        page_ref: "p.54",
        category: Category::Kanban,
        description: "Maximum number of changeovers possible per day",
    },
    Formula {
        id: 16,
        name: "Batch Size (EPE = 1 day)",
        formula: "Changeover Time / (Batch Size x Cycle Time)",
        example: "LH: 600 pcs/day, RH: 320 pcs/day",
        page_ref: "pp.67-68",
        category: Category::Kanban,
        description: "Optimal batch size for one-day production pattern",
    },
    Formula {
        id: 17,
        name: "Inventory Turns",
        formula: "≈ Working Days per Year ÷ Production Lead Time",
        example: "240 days ÷ 23.6 days ≈ 10 turns/year",
        page_ref: "pp.69,81",
        category: Category::Inventory,
        description: "How many times inventory turns over per year",
    },
    Formula {
        id: 18,
        name: "C/O-to-Run Ratio",
        formula: "Changeover Time / (Batch Size × Cycle Time)",
        example: "3,600 sec ÷ 60 sec = 60:1 (impractical)",
        page_ref: "p.68",
        category: Category::Kanban,
        description: "Ratio of changeover time to production run time",
    },
    Formula {
        id: 19,
        name: "VA Ratio",
        formula: "VA seconds ÷ (Lead Time days × 86,400 sec/day)",
        example: "188 sec ÷ (23.6 days × 86,400 sec/day) = 0.0092%",
        page_ref: "VSM Guide",
        category: Category::Inventory,
        description: "Percentage of value-added time in total lead time",
    },
    Formula {
        id: 20,
        name: "Mix Leveling Pattern",
        formula: "Target Work Content / Number of Operators",
        example: "RLLRLLRLL... (2:1 ratio of L to R)",
        page_ref: "pp.73-74",
        category: Category::Kanban,
        description: "Production sequence for mixed model leveling",
    },
    Formula {
        id: 21,
        name: "Daily Delivery Inventory Reduction",
        formula: "Changeover Time / (Batch Size × Cycle Time)",
        example: "Weekly→Daily = ~80% reduction",
        page_ref: "p.69",
        category: Category::Kanban,
        description: "Inventory reduction from increased delivery frequency",
    },
    Formula {
        id: 22,
        name: "Weld/Deflash Changeovers/Shift",
        formula: "1 − (New Delivery Freq / Old)",
        example: "3,600 sec ÷ 300 sec = 12 changeovers/shift",
        page_ref: "p.108",
        category: Category::Kanban,
        description: "Changeover requirements for TWI case study",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_unique_ids() {
        assert_eq!(CATALOG.len(), 22);
        let mut ids: Vec<u32> = CATALOG.iter().map(|f| f.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 22);
    }

    #[test]
    fn test_search_takt_all_categories() {
        let hits = filter(Some("takt"), None);
        assert!(!hits.is_empty());
        for f in &hits {
            assert!(f.matches_query("TAKT"));
        }
        // Exactly the entries that mention takt, nothing else.
        let expected = CATALOG.iter().filter(|f| f.matches_query("takt")).count();
        assert_eq!(hits.len(), expected);
    }

    #[test]
    fn test_category_filter_intersects_with_query() {
        let hits = filter(Some("takt"), Some(Category::Kanban));
        for f in hits {
            assert_eq!(f.category, Category::Kanban);
            assert!(f.matches_query("takt"));
        }
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert_eq!(filter(Some(""), None).len(), CATALOG.len());
        assert_eq!(filter(None, None).len(), CATALOG.len());
    }

    #[test]
    fn test_category_only_filter() {
        let hits = filter(None, Some(Category::Inventory));
        assert_eq!(hits.len(), 5);
        assert!(hits.iter().all(|f| f.category == Category::Inventory));
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(filter(Some("heijunka-box-zzz"), None).is_empty());
    }

    #[test]
    fn test_by_id() {
        assert_eq!(by_id(2).unwrap().name, "Takt Time");
        assert!(by_id(99).is_none());
    }
}
