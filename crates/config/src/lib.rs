//! Configuration for the chat financing simulator
//!
//! The simulator has no config file surface; rates and policy ratios are
//! business constants carried as plain data. `SimulationConfig` makes them
//! overridable for embedding and testing while `constants` remains the single
//! source of truth for the defaults.

pub mod constants;
pub mod simulation;

pub use simulation::SimulationConfig;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
