//! Simulation result types

use serde::{Deserialize, Serialize};

use crate::facts::AmortizationSystem;

/// Alternative term found by the affordability search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TermAdjustment {
    /// Term in whole years
    pub years: u32,
    /// Installment at the adjusted term
    pub installment: f64,
}

/// Figures computed for one requested amortization system.
///
/// Values are rendered into the reply message and discarded; nothing is
/// retained across invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub system: AmortizationSystem,
    /// Property value minus down payment minus FGTS, floored at zero
    pub financed_amount: f64,
    /// First installment; equals `last_installment` for Price
    pub first_installment: f64,
    pub last_installment: f64,
    /// First installment as a percentage of monthly income
    pub income_commitment_percent: f64,
    /// Whether the installment exceeds the affordability ceiling
    pub over_ceiling: bool,
    /// Shorter term that fits the ceiling, when one exists in bounds
    pub term_adjustment: Option<TermAdjustment>,
}
