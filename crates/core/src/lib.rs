//! Core traits and types for the chat financing simulator
//!
//! This crate provides foundational types used across all other crates:
//! - Parsed financial facts and amortization system definitions
//! - Simulation result types
//! - Collaborator trait seams (transcript source, compose field, UI attachment)
//! - Error types

pub mod error;
pub mod facts;
pub mod simulation;
pub mod traits;

pub use error::{Error, Result};
pub use facts::{AmortizationSystem, ParsedFacts, RequiredField};
pub use simulation::{SimulationResult, TermAdjustment};
pub use traits::{ComposeField, TranscriptSource, UiAttachment};
