//! CLI command implementations

pub mod capacity;
pub mod completions;
pub mod formulas;
pub mod inventory;
pub mod kanban;
pub mod scenario;
pub mod takt;
