//! VSM Toolkit
//!
//! Command-line calculators and a formula reference for value stream
//! mapping: takt time, inventory and lead time, process capacity, and
//! kanban/leveling.

pub mod calc;
pub mod catalog;
pub mod cli;
pub mod core;
