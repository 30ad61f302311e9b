//! Centralized business constants for the financing simulation
//!
//! Single source of truth for rates and policy values used across the
//! workspace. Values are estimates for a chat-based pre-qualification; the
//! reply message always carries a bank-analysis disclaimer.

/// Financing interest rates
pub mod rates {
    /// Fixed annual interest rate applied to every simulation.
    ///
    /// Not a live banking rate; real offers vary with bank analysis and CET.
    pub const ANNUAL_INTEREST_RATE: f64 = 0.095;
}

/// Affordability policy
pub mod affordability {
    /// Maximum share of gross monthly income an installment may take
    pub const INCOME_COMMITMENT_RATIO: f64 = 0.30;
}

/// Automatic term-search bounds (whole years, inclusive)
pub mod term_search {
    /// Shortest term considered by the search
    pub const MIN_YEARS: u32 = 10;

    /// Longest term considered; the search never extrapolates past it
    pub const MAX_YEARS: u32 = 35;
}
