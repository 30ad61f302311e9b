//! Affordability ceiling and automatic term search

use std::ops::RangeInclusive;

use chat_credit_core::{AmortizationSystem, TermAdjustment};

use crate::amortization::{price_installment, sac_installments};

/// Affordability ceiling: the largest installment the income supports
pub fn max_affordable_installment(income: f64, ratio: f64) -> f64 {
    income * ratio
}

/// Search the shortest term (ascending whole years over `years`) whose
/// installment fits the affordability ceiling.
///
/// The per-year installment is the Price installment or the SAC *first*
/// installment, at `months = years * 12`. Returns `None` when even the
/// longest year in the range exceeds the ceiling; the search never
/// extrapolates past the bounds.
pub fn find_ideal_term(
    principal: f64,
    income: f64,
    annual_rate: f64,
    ratio: f64,
    years: RangeInclusive<u32>,
    system: AmortizationSystem,
) -> Option<TermAdjustment> {
    let ceiling = max_affordable_installment(income, ratio);

    for year in years {
        let months = i64::from(year) * 12;
        let installment = match system {
            AmortizationSystem::Price => price_installment(principal, annual_rate, months),
            AmortizationSystem::Sac => sac_installments(principal, annual_rate, months).first,
        };
        if installment <= ceiling {
            return Some(TermAdjustment {
                years: year,
                installment,
            });
        }
    }

    None
}
