//! Financial facts extracted from a conversation transcript

use serde::{Deserialize, Serialize};

/// Amortization system for the financing schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmortizationSystem {
    /// Declining-balance schedule: constant amortization, decreasing interest
    Sac,
    /// Fixed-installment schedule (French/Price table)
    Price,
}

impl std::fmt::Display for AmortizationSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmortizationSystem::Sac => write!(f, "SAC"),
            AmortizationSystem::Price => write!(f, "PRICE"),
        }
    }
}

/// Fields that must be present before a simulation can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    PropertyValue,
    DownPayment,
    MonthlyIncome,
    TermYears,
}

impl RequiredField {
    pub const ALL: [RequiredField; 4] = [
        RequiredField::PropertyValue,
        RequiredField::DownPayment,
        RequiredField::MonthlyIncome,
        RequiredField::TermYears,
    ];

    /// User-facing label for data-request prompts
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::PropertyValue => "Valor do imóvel",
            RequiredField::DownPayment => "Entrada",
            RequiredField::MonthlyIncome => "Renda bruta mensal",
            RequiredField::TermYears => "Prazo (anos)",
        }
    }
}

/// Facts extracted from the visible chat transcript.
///
/// Rebuilt fresh on every invocation; nothing persists across calls.
/// A field is only overwritten when a new non-null parse succeeds for a line
/// matching its keyword, and later matching lines override earlier ones
/// (last-wins per field, independently).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedFacts {
    /// Property price
    pub property_value: Option<f64>,
    /// Cash down payment
    pub down_payment: Option<f64>,
    /// FGTS (government housing fund) contribution, optional with zero default
    #[serde(default)]
    pub fgts_contribution: f64,
    /// Gross monthly income
    pub monthly_income: Option<f64>,
    /// Requested term in years
    pub term_years: Option<f64>,
    /// Amortization systems in order of first mention; empty means Price
    #[serde(default)]
    pub requested_systems: Vec<AmortizationSystem>,
}

impl ParsedFacts {
    /// Record a system request, keeping first-mention order and no duplicates
    pub fn request_system(&mut self, system: AmortizationSystem) {
        if !self.requested_systems.contains(&system) {
            self.requested_systems.push(system);
        }
    }

    /// Systems to simulate: requested order, or Price when none was mentioned
    pub fn systems(&self) -> Vec<AmortizationSystem> {
        if self.requested_systems.is_empty() {
            vec![AmortizationSystem::Price]
        } else {
            self.requested_systems.clone()
        }
    }

    /// Required fields still absent from the transcript
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.property_value.is_none() {
            missing.push(RequiredField::PropertyValue);
        }
        if self.down_payment.is_none() {
            missing.push(RequiredField::DownPayment);
        }
        if self.monthly_income.is_none() {
            missing.push(RequiredField::MonthlyIncome);
        }
        if self.term_years.is_none() {
            missing.push(RequiredField::TermYears);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Financed amount: property value minus down payment minus FGTS,
    /// floored at zero. `None` until property value and down payment are known.
    pub fn financed_amount(&self) -> Option<f64> {
        let property = self.property_value?;
        let down = self.down_payment?;
        Some((property - down - self.fgts_contribution).max(0.0))
    }
}
