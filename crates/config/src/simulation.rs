//! Simulation business configuration

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::constants::{affordability, rates, term_search};
use crate::ConfigError;

/// Business parameters for the financing simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Annual interest rate as a fraction (0.095 = 9.5% a.a.)
    #[serde(default = "default_annual_interest_rate")]
    pub annual_interest_rate: f64,

    /// Affordability ceiling as a fraction of gross monthly income
    #[serde(default = "default_affordability_ratio")]
    pub affordability_ratio: f64,

    /// Lower bound of the automatic term search (years)
    #[serde(default = "default_min_term_years")]
    pub min_term_years: u32,

    /// Upper bound of the automatic term search (years)
    #[serde(default = "default_max_term_years")]
    pub max_term_years: u32,
}

fn default_annual_interest_rate() -> f64 {
    rates::ANNUAL_INTEREST_RATE
}

fn default_affordability_ratio() -> f64 {
    affordability::INCOME_COMMITMENT_RATIO
}

fn default_min_term_years() -> u32 {
    term_search::MIN_YEARS
}

fn default_max_term_years() -> u32 {
    term_search::MAX_YEARS
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            annual_interest_rate: default_annual_interest_rate(),
            affordability_ratio: default_affordability_ratio(),
            min_term_years: default_min_term_years(),
            max_term_years: default_max_term_years(),
        }
    }
}

impl SimulationConfig {
    /// Monthly interest rate derived from the annual rate
    pub fn monthly_rate(&self) -> f64 {
        self.annual_interest_rate / 12.0
    }

    /// Inclusive term-search range in whole years
    pub fn term_range(&self) -> RangeInclusive<u32> {
        self.min_term_years..=self.max_term_years
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.annual_interest_rate > 0.0 && self.annual_interest_rate < 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "annual_interest_rate".into(),
                message: "must be a fraction in (0, 1)".into(),
            });
        }
        if !(self.affordability_ratio > 0.0 && self.affordability_ratio <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "affordability_ratio".into(),
                message: "must be a fraction in (0, 1]".into(),
            });
        }
        if self.min_term_years == 0 || self.min_term_years > self.max_term_years {
            return Err(ConfigError::InvalidValue {
                field: "min_term_years".into(),
                message: "must be positive and not above max_term_years".into(),
            });
        }
        Ok(())
    }
}
