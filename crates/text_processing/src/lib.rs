//! Text processing for the chat financing simulator
//!
//! This crate turns free-text Brazilian-Portuguese chat messages into
//! structured financial facts:
//! - **Number normalization**: locale-formatted numeric tokens with magnitude
//!   words ("350.000,00", "1,5 mil", "2 milhões") into `f64`
//! - **Fact extraction**: line-oriented keyword heuristics filling
//!   [`ParsedFacts`](chat_credit_core::ParsedFacts) from a transcript
//!
//! # Example
//!
//! ```
//! use chat_credit_text_processing::{normalize_number, FactExtractor};
//!
//! assert_eq!(normalize_number("R$ 1,5 mil"), Some(1500.0));
//!
//! let facts = FactExtractor::new().extract("valor do imóvel 350 mil\nrenda 8 mil");
//! assert_eq!(facts.property_value, Some(350_000.0));
//! assert_eq!(facts.monthly_income, Some(8_000.0));
//! ```

mod extractor;
mod normalizer;

pub use extractor::FactExtractor;
pub use normalizer::{normalize_number, strip_diacritics};
