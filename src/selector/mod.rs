//! Product selection and scoring
//!
//! Orchestrates one selection call: filter the catalog by eligibility,
//! build a payoff model per surviving candidate, compute expected
//! economics and Greeks, score, and pick the maximum-scoring entry.
//! An empty candidate set is an expected business outcome (`Ok(None)`),
//! not an error.

use crate::catalog::{Catalog, CatalogError, PayoffDefinition};
use crate::constraints::ClientConstraints;
use crate::payoff::Greeks;
use log::{debug, info};
use serde::Serialize;

// ============================================================================
// Scoring Weights
// ============================================================================
// Yield and duration components are clamped to [0, 100] by construction;
// the eligibility bonus is a flat add applied to every post-filter
// candidate. Since the filter already guaranteed eligibility, the bonus is
// a constant offset rather than a discriminator among survivors. Kept
// as-is for score compatibility.

/// Maximum value of each gap-based score component
pub const COMPONENT_CAP: f64 = 100.0;

/// Penalty per unit of absolute yield gap (yield expressed as a fraction)
pub const YIELD_GAP_WEIGHT: f64 = 1000.0;

/// Penalty per month of distance from the definition's optimal duration
pub const DURATION_GAP_WEIGHT: f64 = 2.0;

/// Flat bonus added to every candidate that passed the eligibility filter
pub const ELIGIBILITY_BONUS: f64 = 100.0;

/// Selected-product result record
#[derive(Debug, Clone, Serialize)]
pub struct PayoffInfo {
    /// Display name from the winning definition
    pub name: String,

    /// Catalog key of the winning definition
    #[serde(rename = "type")]
    pub product_type: String,

    /// Client-facing description
    pub description: String,

    /// Expected yield over the full duration, as a fraction
    pub expected_yield: f64,

    /// Expected return in currency units
    pub expected_return: f64,

    /// Heuristic sensitivities at the default market point
    pub greeks: Greeks,

    /// Total score (eligible candidates land in [100, 300])
    pub score: f64,
}

/// Transient per-candidate scoring state, alive for one selection call
struct ScoredCandidate<'a> {
    key: &'a str,
    definition: &'a PayoffDefinition,
    score: f64,
    expected_yield: f64,
    expected_return: f64,
    greeks: Greeks,
}

/// Selection engine over an immutable catalog
#[derive(Debug, Clone, Default)]
pub struct ProductSelector {
    catalog: Catalog,
}

impl ProductSelector {
    /// Create a selector over the given catalog
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog this selector reads from
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Select the best-matching product for the constraints.
    ///
    /// Returns `Ok(None)` when no catalog entry is eligible. A
    /// `CatalogError` can only arise from a catalog/selector consistency
    /// fault and is not a user-facing condition.
    pub fn select_optimal(
        &self,
        constraints: &ClientConstraints,
    ) -> Result<Option<PayoffInfo>, CatalogError> {
        let mut best: Option<ScoredCandidate> = None;

        for (key, definition) in self.catalog.entries() {
            if !definition.is_eligible(constraints.risk_level, constraints.duration_months) {
                debug!(
                    "candidate {} excluded: risk={}, duration={}m outside {}..={}m",
                    key,
                    constraints.risk_level,
                    constraints.duration_months,
                    definition.min_duration,
                    definition.max_duration
                );
                continue;
            }

            let candidate = self.score_candidate(key, definition, constraints)?;
            debug!(
                "candidate {}: score={:.2}, expected_yield={:.4}",
                key, candidate.score, candidate.expected_yield
            );

            // Strictly-greater keeps the first-listed entry on ties
            let replace = best
                .as_ref()
                .map_or(true, |current| candidate.score > current.score);
            if replace {
                best = Some(candidate);
            }
        }

        match best {
            Some(winner) => {
                info!(
                    "selected {} (score {:.2}) for risk={}, duration={}m",
                    winner.key, winner.score, constraints.risk_level, constraints.duration_months
                );
                Ok(Some(PayoffInfo {
                    name: winner.definition.name.clone(),
                    product_type: winner.key.to_string(),
                    description: winner.definition.description.clone(),
                    expected_yield: winner.expected_yield,
                    expected_return: winner.expected_return,
                    greeks: winner.greeks,
                    score: winner.score,
                }))
            }
            None => {
                info!(
                    "no eligible product for risk={}, duration={}m",
                    constraints.risk_level, constraints.duration_months
                );
                Ok(None)
            }
        }
    }

    /// Compute economics, Greeks, and score for one post-filter candidate
    fn score_candidate<'a>(
        &self,
        key: &'a str,
        definition: &'a PayoffDefinition,
        constraints: &ClientConstraints,
    ) -> Result<ScoredCandidate<'a>, CatalogError> {
        let expected_yield = definition.coupon_rate() * constraints.duration_years();
        let expected_return = expected_yield * constraints.amount;

        let model = self.catalog.build_model(key, constraints)?;
        let greeks = model.default_greeks();

        let score = score_definition(definition, constraints);

        Ok(ScoredCandidate {
            key,
            definition,
            score,
            expected_yield,
            expected_return,
            greeks,
        })
    }
}

/// Score a definition against the constraints.
///
/// Each gap-based component is floored at zero before summation; the
/// eligibility bonus is added unconditionally (callers only score
/// post-filter candidates).
pub fn score_definition(definition: &PayoffDefinition, constraints: &ClientConstraints) -> f64 {
    let expected_yield = definition.coupon_rate() * constraints.duration_years();
    let yield_gap = (expected_yield - constraints.target_yield_fraction()).abs();
    let yield_score = (COMPONENT_CAP - yield_gap * YIELD_GAP_WEIGHT).max(0.0);

    let duration_gap = (constraints.duration_months as f64 - definition.optimal_duration()).abs();
    let duration_score = (COMPONENT_CAP - duration_gap * DURATION_GAP_WEIGHT).max(0.0);

    yield_score + duration_score + ELIGIBILITY_BONUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::RiskLevel;

    fn constraints(
        duration_months: u32,
        target_yield: f64,
        risk_level: RiskLevel,
        amount: f64,
    ) -> ClientConstraints {
        ClientConstraints {
            duration_months,
            target_yield,
            risk_level,
            amount,
        }
    }

    #[test]
    fn test_moderate_24m_selects_participation() {
        // Eligible: autocall (6-60m) and participation (12-48m).
        // Digital is conservative-only.
        let selector = ProductSelector::default();
        let c = constraints(24, 6.0, RiskLevel::Moderate, 10_000.0);

        let result = selector.select_optimal(&c).unwrap().unwrap();

        assert_eq!(result.product_type, "participation");
        assert_eq!(result.name, "Participation");
        // expected_yield = 0.04 * 1.5 * 2 years
        assert!((result.expected_yield - 0.12).abs() < 1e-12);
        assert!((result.expected_return - 1200.0).abs() < 1e-9);
        // yield 40 + duration 88 + bonus 100
        assert!((result.score - 228.0).abs() < 1e-9);
    }

    #[test]
    fn test_moderate_24m_autocall_score() {
        let catalog = Catalog::default_catalog();
        let c = constraints(24, 6.0, RiskLevel::Moderate, 10_000.0);

        let autocall = catalog.get("autocall").unwrap();
        // expected_yield = 0.144, gap 0.084 -> yield 16; duration gap 9 -> 82
        assert!((score_definition(autocall, &c) - 198.0).abs() < 1e-9);
    }

    #[test]
    fn test_winner_carries_greeks() {
        let selector = ProductSelector::default();
        let c = constraints(24, 6.0, RiskLevel::Moderate, 10_000.0);

        let result = selector.select_optimal(&c).unwrap().unwrap();

        // Participation Greeks at T = 2
        let t: f64 = 2.0;
        assert!((result.greeks.delta - 0.8 * 1.5 * (-0.05 * t).exp()).abs() < 1e-12);
        assert!((result.greeks.theta - (-0.025)).abs() < 1e-12);
    }

    #[test]
    fn test_aggressive_short_duration_has_no_product() {
        // No definition offers aggressive below 12 months
        let selector = ProductSelector::default();
        let c = constraints(6, 8.0, RiskLevel::Aggressive, 50_000.0);

        assert!(selector.select_optimal(&c).unwrap().is_none());
    }

    #[test]
    fn test_filter_honors_duration_window() {
        let selector = ProductSelector::default();

        // 36 months: digital's upper bound, still eligible for conservative
        let at_max = constraints(36, 5.0, RiskLevel::Conservative, 10_000.0);
        assert!(selector.select_optimal(&at_max).unwrap().is_some());

        // 61 months: beyond every window for conservative
        let too_long = constraints(61, 5.0, RiskLevel::Conservative, 10_000.0);
        assert!(selector.select_optimal(&too_long).unwrap().is_none());
    }

    #[test]
    fn test_economics_linear_in_duration_and_amount() {
        let catalog = Catalog::default_catalog();
        let participation = catalog.get("participation").unwrap();

        let y12 = participation.coupon_rate() * (12.0 / 12.0);
        let y24 = participation.coupon_rate() * (24.0 / 12.0);
        assert!((y24 - 2.0 * y12).abs() < 1e-12);

        let selector = ProductSelector::default();
        let small = selector
            .select_optimal(&constraints(24, 6.0, RiskLevel::Moderate, 10_000.0))
            .unwrap()
            .unwrap();
        let large = selector
            .select_optimal(&constraints(24, 6.0, RiskLevel::Moderate, 20_000.0))
            .unwrap()
            .unwrap();
        assert!((large.expected_return - 2.0 * small.expected_return).abs() < 1e-9);
    }

    #[test]
    fn test_score_bounds() {
        let catalog = Catalog::default_catalog();

        // Gap components are clamped, so every definition scores within
        // [bonus, bonus + two capped components].
        for duration in [6u32, 12, 24, 36, 48, 60] {
            for target in [0.0, 4.0, 6.0, 12.0, 50.0] {
                let c = constraints(duration, target, RiskLevel::Moderate, 10_000.0);
                for (_, def) in catalog.entries() {
                    let score = score_definition(def, &c);
                    assert!(score >= ELIGIBILITY_BONUS);
                    assert!(score <= 3.0 * COMPONENT_CAP);
                }
            }
        }
    }

    #[test]
    fn test_tie_breaks_by_insertion_order() {
        // Two identical definitions: equal scores, first-listed must win
        let twin = PayoffDefinition {
            name: "Twin".to_string(),
            description: "Twin entry".to_string(),
            eligible_risk_levels: vec![RiskLevel::Moderate],
            min_duration: 6,
            max_duration: 60,
            base_yield: 0.06,
            risk_multiplier: 1.2,
        };
        let catalog = Catalog::new(vec![
            ("first".to_string(), twin.clone()),
            ("second".to_string(), twin),
        ]);
        let selector = ProductSelector::new(catalog);

        let result = selector
            .select_optimal(&constraints(24, 6.0, RiskLevel::Moderate, 10_000.0))
            .unwrap()
            .unwrap();
        assert_eq!(result.product_type, "first");
    }

    #[test]
    fn test_selection_deterministic() {
        let selector = ProductSelector::default();
        let c = constraints(24, 6.0, RiskLevel::Moderate, 10_000.0);

        let a = selector.select_optimal(&c).unwrap().unwrap();
        let b = selector.select_optimal(&c).unwrap().unwrap();

        assert_eq!(a.product_type, b.product_type);
        assert_eq!(a.score, b.score);
        assert_eq!(a.greeks, b.greeks);
    }
}
