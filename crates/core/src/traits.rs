//! Collaborator trait seams
//!
//! The simulation core reads one opaque transcript string and writes one reply
//! string. How the transcript is scraped from the page and how the reply lands
//! in the compose box belongs to the host-page integration, behind these
//! traits. The core never depends on how either side is implemented.

use crate::error::Result;

/// Source of the chronologically-visible conversation text.
///
/// Implementations return the newline-joined transcript as currently visible;
/// the core re-derives all state from it on every invocation.
pub trait TranscriptSource {
    fn transcript(&self) -> Result<String>;
}

/// The message compose field the reply is inserted into.
///
/// Contract: accepts a string and appends it as new user-composable text.
pub trait ComposeField {
    fn insert(&mut self, text: &str) -> Result<()>;
}

/// Idempotent attachment of the trigger UI to an externally-mutating page.
///
/// `ensure_attached` may be called on every observation tick; it attaches the
/// trigger when detached and is a no-op otherwise, returning whether the UI is
/// attached afterwards.
pub trait UiAttachment {
    fn ensure_attached(&mut self) -> bool;

    fn is_attached(&self) -> bool;
}
