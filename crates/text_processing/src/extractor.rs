//! Fact extraction from conversation transcripts
//!
//! Scans the transcript line by line, assigning parsed values to financial
//! fields via keyword heuristics. Keyword patterns tolerate accent variants
//! ("imóvel"/"imovel") and a single line may feed several fields. Assignment
//! is last-wins per field, and a field is only overwritten when the line
//! actually yields a number.

use once_cell::sync::Lazy;
use regex::Regex;

use chat_credit_core::{AmortizationSystem, ParsedFacts};

use crate::normalizer::normalize_number;

/// Chat timestamp prefix: optional `[`, 1-2 digit hour, `:`, 2-digit minute
static TIMESTAMP_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[?\d{1,2}:\d{2}").unwrap());

static KW_PROPERTY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)im[oó]vel").unwrap());
static KW_DOWN_PAYMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:entrada|sinal)\b").unwrap());
static KW_FGTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bfgts\b").unwrap());
static KW_INCOME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\brenda\b").unwrap());
static KW_TERM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bprazo\b").unwrap());
static KW_SAC: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bsac\b").unwrap());
static KW_PRICE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bprice\b").unwrap());

/// Extracts [`ParsedFacts`] from a chat transcript.
///
/// All patterns are static and compiled once at program start, so
/// construction is a very cheap operation.
#[derive(Debug, Clone, Default)]
pub struct FactExtractor;

impl FactExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Scan the transcript and build a fresh set of facts.
    ///
    /// Empty lines and lines opening with a chat timestamp are never scanned
    /// for keywords.
    pub fn extract(&self, transcript: &str) -> ParsedFacts {
        let mut facts = ParsedFacts::default();

        for raw in transcript.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if TIMESTAMP_LINE.is_match(line) {
                tracing::debug!(line, "skipping timestamp line");
                continue;
            }

            if KW_PROPERTY.is_match(line) {
                if let Some(value) = parse_field(line, "property_value") {
                    facts.property_value = Some(value);
                }
            }
            if KW_DOWN_PAYMENT.is_match(line) {
                if let Some(value) = parse_field(line, "down_payment") {
                    facts.down_payment = Some(value);
                }
            }
            if KW_FGTS.is_match(line) {
                // Never reset to zero on a failed parse
                if let Some(value) = parse_field(line, "fgts_contribution") {
                    facts.fgts_contribution = value;
                }
            }
            if KW_INCOME.is_match(line) {
                if let Some(value) = parse_field(line, "monthly_income") {
                    facts.monthly_income = Some(value);
                }
            }
            if KW_TERM.is_match(line) {
                if let Some(value) = parse_field(line, "term_years") {
                    facts.term_years = Some(value);
                }
            }
            if KW_SAC.is_match(line) {
                facts.request_system(AmortizationSystem::Sac);
            }
            if KW_PRICE.is_match(line) {
                facts.request_system(AmortizationSystem::Price);
            }
        }

        facts
    }
}

fn parse_field(line: &str, field: &str) -> Option<f64> {
    let value = normalize_number(line);
    if value.is_none() {
        tracing::debug!(field, line, "keyword matched but no parseable number");
    }
    value
}
