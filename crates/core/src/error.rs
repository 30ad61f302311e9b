//! Error types for collaborator interactions
//!
//! Business outcomes (missing data, over-budget installments, no viable term)
//! are never errors; they are modeled as variants of the simulation outcome.
//! Errors here cover only the external collaborators the core does not
//! control: reading the visible transcript and writing into the compose field.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read conversation transcript: {0}")]
    TranscriptRead(String),

    #[error("failed to write into compose field: {0}")]
    ComposeWrite(String),
}

pub type Result<T> = std::result::Result<T, Error>;
