//! Simulation orchestrator
//!
//! Three terminal outcomes per invocation: a data-request prompt when
//! required fields are missing (or the derivation is non-positive), or a
//! computed simulation with one block per requested amortization system.

use serde::Serialize;
use tracing::{debug, info};

use chat_credit_calculator::{
    find_ideal_term, max_affordable_installment, price_installment, sac_installments,
};
use chat_credit_config::SimulationConfig;
use chat_credit_core::{
    AmortizationSystem, ComposeField, ParsedFacts, RequiredField, Result, SimulationResult,
    TranscriptSource,
};
use chat_credit_text_processing::FactExtractor;

use crate::messages;

/// Terminal outcome of one simulation pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationOutcome {
    /// Required data still missing; prompt for the listed fields
    DataRequest(Vec<RequiredField>),
    /// One result per requested system, in order of first mention
    Computed(Vec<SimulationResult>),
}

/// Orchestrates extraction, calculation and rendering.
///
/// Synchronous and re-entrant safe: every call re-derives facts from the
/// transcript it is given, computes, renders, and retains nothing.
#[derive(Debug, Clone, Default)]
pub struct SimulationAgent {
    config: SimulationConfig,
    extractor: FactExtractor,
}

impl SimulationAgent {
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            config,
            extractor: FactExtractor::new(),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Full pipeline: transcript in, rendered reply out
    pub fn respond(&self, transcript: &str) -> String {
        let facts = self.extractor.extract(transcript);
        let outcome = self.evaluate(&facts);
        self.render(&outcome)
    }

    /// Drive one read → compute → insert pass over the collaborator seams
    pub fn run<S, C>(&self, source: &S, field: &mut C) -> Result<()>
    where
        S: TranscriptSource,
        C: ComposeField,
    {
        let transcript = source.transcript()?;
        let reply = self.respond(&transcript);
        field.insert(&reply)
    }

    /// Decide the outcome for a set of extracted facts
    pub fn evaluate(&self, facts: &ParsedFacts) -> SimulationOutcome {
        let (Some(financed), Some(income), Some(term_years)) =
            (facts.financed_amount(), facts.monthly_income, facts.term_years)
        else {
            let missing = facts.missing_fields();
            debug!(?missing, "transcript incomplete; requesting data");
            return SimulationOutcome::DataRequest(missing);
        };

        let months = (term_years * 12.0).round() as i64;
        if financed <= 0.0 || months <= 0 || income <= 0.0 {
            // A valid-looking parse can still derive nothing financeable
            // (down payment covers the property, zero term, zero income).
            // Ask again instead of computing garbage.
            debug!(
                financed,
                months, income, "non-positive derivation; requesting data again"
            );
            return SimulationOutcome::DataRequest(RequiredField::ALL.to_vec());
        }

        let rate = self.config.annual_interest_rate;
        let ceiling = max_affordable_installment(income, self.config.affordability_ratio);

        let mut results = Vec::new();
        for system in facts.systems() {
            let (first, last) = match system {
                AmortizationSystem::Price => {
                    let installment = price_installment(financed, rate, months);
                    (installment, installment)
                }
                AmortizationSystem::Sac => {
                    let sac = sac_installments(financed, rate, months);
                    (sac.first, sac.last)
                }
            };

            let over_ceiling = first > ceiling;
            let term_adjustment = if over_ceiling {
                find_ideal_term(
                    financed,
                    income,
                    rate,
                    self.config.affordability_ratio,
                    self.config.term_range(),
                    system,
                )
            } else {
                None
            };

            results.push(SimulationResult {
                system,
                financed_amount: financed,
                first_installment: first,
                last_installment: last,
                income_commitment_percent: first / income * 100.0,
                over_ceiling,
                term_adjustment,
            });
        }

        info!(
            financed,
            months,
            systems = results.len(),
            "simulation computed"
        );
        SimulationOutcome::Computed(results)
    }

    /// Render an outcome into the reply message
    pub fn render(&self, outcome: &SimulationOutcome) -> String {
        match outcome {
            SimulationOutcome::DataRequest(missing) => messages::data_request(missing),
            SimulationOutcome::Computed(results) => {
                messages::simulation_report(results, self.config.affordability_ratio)
            }
        }
    }
}
