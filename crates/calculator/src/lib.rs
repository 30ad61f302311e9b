//! Amortization math for the chat financing simulator
//!
//! Pure, deterministic functions over `f64`: fixed-installment (Price) and
//! declining-balance (SAC) schedules, the affordability ceiling, and the
//! automatic term search that brings an installment under the ceiling.

mod amortization;
mod term;

pub use amortization::{price_installment, sac_installments, SacInstallments};
pub use term::{find_ideal_term, max_affordable_installment};
