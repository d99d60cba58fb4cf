//! Core module - configuration and scenario handling

pub mod config;
pub mod scenario;

pub use config::Config;
pub use scenario::{Scenario, ScenarioError};
