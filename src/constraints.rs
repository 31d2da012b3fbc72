//! Client constraint inputs for product selection
//!
//! One `ClientConstraints` record arrives per selection request. The
//! transport layer is responsible for type/range validation; the engine
//! assumes a well-typed record.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Client risk tolerance bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Conservative,
    Moderate,
    Aggressive,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Conservative => write!(f, "conservative"),
            RiskLevel::Moderate => write!(f, "moderate"),
            RiskLevel::Aggressive => write!(f, "aggressive"),
        }
    }
}

/// Stated client constraints for one selection request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConstraints {
    /// Investment duration in months (> 0)
    #[serde(rename = "duration")]
    pub duration_months: u32,

    /// Target yield as a percentage (e.g. 6.0 = 6%)
    #[serde(default = "default_target_yield")]
    pub target_yield: f64,

    /// Risk tolerance
    pub risk_level: RiskLevel,

    /// Investment amount in currency units
    #[serde(default = "default_amount")]
    pub amount: f64,
}

fn default_target_yield() -> f64 { 5.0 }
fn default_amount() -> f64 { 10_000.0 }

impl ClientConstraints {
    /// Duration expressed in years
    pub fn duration_years(&self) -> f64 {
        self.duration_months as f64 / 12.0
    }

    /// Target yield expressed as a fraction (6.0% -> 0.06)
    pub fn target_yield_fraction(&self) -> f64 {
        self.target_yield / 100.0
    }
}
