//! Calculator definitions
//!
//! Each calculator is a flat input record plus a pure `evaluate()` that
//! recomputes every derived figure from scratch. No caching and no
//! incremental state; full recomputation is cheap and always correct.
//!
//! - [`takt::TaktInputs`] - production pace to match demand
//! - [`inventory::InventoryInputs`] - inventory days, lead time, turns, VA ratio
//! - [`capacity::CapacityInputs`] - pacemaker capacity, crew sizing, utilization
//! - [`kanban::KanbanInputs`] - pull-system and leveling-box sizing

pub mod capacity;
pub mod field;
pub mod inventory;
pub mod kanban;
pub mod takt;

pub use capacity::{CapacityInputs, CapacityResult, ProcessStep};
pub use inventory::{InventoryInputs, InventoryResult, TimelineSegment};
pub use kanban::{KanbanInputs, KanbanResult};
pub use takt::{TaktInputs, TaktResult};
