//! Static payoff catalog
//!
//! The catalog is the read-only registry of payoff definitions, built once
//! at process start and shared by all selection calls. Insertion order is
//! fixed and significant: when two candidates score identically, the
//! first-listed entry wins.

use crate::constraints::RiskLevel;
use serde::Serialize;
use thiserror::Error;

/// Errors raised by catalog lookups
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Requested key is absent from the catalog. This indicates a
    /// catalog/selector consistency fault, not a user input problem.
    #[error("unknown payoff type: {0}")]
    UnknownPayoffType(String),
}

/// Static metadata and base economics for one payoff type
#[derive(Debug, Clone, Serialize)]
pub struct PayoffDefinition {
    /// Display name
    pub name: String,

    /// Short description for client-facing output
    pub description: String,

    /// Risk levels this product may be offered at (non-empty)
    pub eligible_risk_levels: Vec<RiskLevel>,

    /// Minimum duration in months (inclusive)
    pub min_duration: u32,

    /// Maximum duration in months (inclusive)
    pub max_duration: u32,

    /// Base annual yield as a fraction (e.g. 0.06 = 6%)
    pub base_yield: f64,

    /// Multiplier applied to base yield to derive the coupon
    pub risk_multiplier: f64,
}

impl PayoffDefinition {
    /// Check eligibility against a risk level and duration.
    /// Duration bounds are inclusive on both ends.
    pub fn is_eligible(&self, risk_level: RiskLevel, duration_months: u32) -> bool {
        self.eligible_risk_levels.contains(&risk_level)
            && self.min_duration <= duration_months
            && duration_months <= self.max_duration
    }

    /// Midpoint of the eligible duration window, used for scoring
    pub fn optimal_duration(&self) -> f64 {
        (self.min_duration + self.max_duration) as f64 / 2.0
    }

    /// Coupon rate derived for pricing: base yield scaled by risk multiplier
    pub fn coupon_rate(&self) -> f64 {
        self.base_yield * self.risk_multiplier
    }
}

/// Ordered, immutable registry of payoff definitions
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<(String, PayoffDefinition)>,
}

impl Catalog {
    /// Build a catalog from an ordered list of (key, definition) pairs
    pub fn new(entries: Vec<(String, PayoffDefinition)>) -> Self {
        Self { entries }
    }

    /// Standard three-product catalog
    pub fn default_catalog() -> Self {
        Self::new(vec![
            (
                "autocall".to_string(),
                PayoffDefinition {
                    name: "Autocall".to_string(),
                    description: "Automatic early redemption when the barrier is reached"
                        .to_string(),
                    eligible_risk_levels: vec![RiskLevel::Conservative, RiskLevel::Moderate],
                    min_duration: 6,
                    max_duration: 60,
                    base_yield: 0.06,
                    risk_multiplier: 1.2,
                },
            ),
            (
                "digital".to_string(),
                PayoffDefinition {
                    name: "Digital".to_string(),
                    description: "Fixed coupon paid when the final barrier condition is met"
                        .to_string(),
                    eligible_risk_levels: vec![RiskLevel::Conservative],
                    min_duration: 12,
                    max_duration: 36,
                    base_yield: 0.05,
                    risk_multiplier: 1.0,
                },
            ),
            (
                "participation".to_string(),
                PayoffDefinition {
                    name: "Participation".to_string(),
                    description: "Leveraged participation in the upside of the underlying"
                        .to_string(),
                    eligible_risk_levels: vec![RiskLevel::Moderate, RiskLevel::Aggressive],
                    min_duration: 12,
                    max_duration: 48,
                    base_yield: 0.04,
                    risk_multiplier: 1.5,
                },
            ),
        ])
    }

    /// Iterate entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &PayoffDefinition)> {
        self.entries.iter().map(|(key, def)| (key.as_str(), def))
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a definition by key
    pub fn get(&self, key: &str) -> Result<&PayoffDefinition, CatalogError> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, def)| def)
            .ok_or_else(|| CatalogError::UnknownPayoffType(key.to_string()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}
