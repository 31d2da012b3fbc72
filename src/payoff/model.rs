//! Payoff variants, payoff curves, and heuristic Greeks
//!
//! The Greeks here are documented closed-form heuristics, not outputs of a
//! stochastic pricing model. The constants and functional forms are fixed
//! for compatibility with downstream consumers.

use super::{
    AUTOCALL_PROTECTION, CURVE_SAMPLES, CURVE_SPOT_HIGH, CURVE_SPOT_LOW, DEFAULT_RATE,
    DEFAULT_SPOT, DEFAULT_STRIKE, DEFAULT_VOLATILITY, PARTICIPATION_PROTECTION,
    PARTICIPATION_RATE,
};
use serde::Serialize;

/// Sensitivity metrics for a payoff model
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Greeks {
    pub delta: f64,
    pub vega: f64,
    pub theta: f64,
    pub gamma: f64,
}

/// One sampled point of a payoff curve
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CurvePoint {
    /// Spot level
    pub spot: f64,
    /// Payoff as a percentage of notional (100.0 = capital returned)
    pub payoff: f64,
}

/// Parameters common to all payoff variants
#[derive(Debug, Clone, Copy)]
pub struct PayoffParams {
    /// Duration in months
    pub duration_months: u32,

    /// Barrier level as a percentage of strike
    pub barrier_percent: f64,

    /// Coupon rate as a fraction (e.g. 0.072 = 7.2%)
    pub coupon_rate: f64,
}

impl PayoffParams {
    /// Create parameters with the standard 100% barrier
    pub fn new(duration_months: u32, coupon_rate: f64) -> Self {
        Self {
            duration_months,
            barrier_percent: 100.0,
            coupon_rate,
        }
    }

    /// Time to maturity in years
    pub fn time_to_maturity(&self) -> f64 {
        self.duration_months as f64 / 12.0
    }
}

impl Default for PayoffParams {
    fn default() -> Self {
        Self {
            duration_months: 12,
            barrier_percent: 100.0,
            coupon_rate: 0.06,
        }
    }
}

/// Closed set of payoff variants
#[derive(Debug, Clone)]
pub enum PayoffModel {
    /// Fixed coupon above the barrier, capital back below it
    Digital { params: PayoffParams },

    /// Coupon above the barrier, capital protected down to the protection
    /// level, proportional loss below
    Autocall {
        params: PayoffParams,
        /// Spot threshold (fraction of strike) below which losses track
        /// the underlying
        protection_level: f64,
    },

    /// Leveraged upside above strike, protected zone, proportional loss
    /// below the protection level
    Participation {
        params: PayoffParams,
        protection_level: f64,
        /// Multiplier on upside appreciation beyond the strike
        participation_rate: f64,
    },
}

impl PayoffModel {
    /// Digital payoff with the given parameters
    pub fn digital(params: PayoffParams) -> Self {
        PayoffModel::Digital { params }
    }

    /// Autocall payoff with the standard 80% protection level
    pub fn autocall(params: PayoffParams) -> Self {
        PayoffModel::Autocall {
            params,
            protection_level: AUTOCALL_PROTECTION,
        }
    }

    /// Participation payoff with the standard 70% protection and 1.5x
    /// participation rate
    pub fn participation(params: PayoffParams) -> Self {
        PayoffModel::Participation {
            params,
            protection_level: PARTICIPATION_PROTECTION,
            participation_rate: PARTICIPATION_RATE,
        }
    }

    /// Shared parameter set
    pub fn params(&self) -> &PayoffParams {
        match self {
            PayoffModel::Digital { params }
            | PayoffModel::Autocall { params, .. }
            | PayoffModel::Participation { params, .. } => params,
        }
    }

    /// Variant name for display
    pub fn variant_name(&self) -> &'static str {
        match self {
            PayoffModel::Digital { .. } => "Digital",
            PayoffModel::Autocall { .. } => "Autocall",
            PayoffModel::Participation { .. } => "Participation",
        }
    }

    /// Payoff at maturity as a multiple of notional (1.0 = capital back)
    pub fn payoff_ratio(&self, spot_price: f64, strike: f64) -> f64 {
        let spot_ratio = spot_price / strike;

        match self {
            PayoffModel::Digital { params } => {
                if spot_ratio >= params.barrier_percent / 100.0 {
                    1.0 + params.coupon_rate
                } else {
                    1.0
                }
            }
            PayoffModel::Autocall {
                params,
                protection_level,
            } => {
                if spot_ratio >= params.barrier_percent / 100.0 {
                    1.0 + params.coupon_rate
                } else if spot_ratio >= *protection_level {
                    1.0
                } else {
                    // Capital loss proportional to the spot decline
                    spot_ratio
                }
            }
            PayoffModel::Participation {
                protection_level,
                participation_rate,
                ..
            } => {
                if spot_ratio >= 1.0 {
                    // Uncapped upside
                    1.0 + (spot_ratio - 1.0) * participation_rate
                } else if spot_ratio >= *protection_level {
                    1.0
                } else {
                    spot_ratio
                }
            }
        }
    }

    /// Heuristic Greeks at the given market point.
    ///
    /// Volatility is part of the documented signature but does not enter
    /// the heuristic forms.
    pub fn greeks(&self, spot: f64, _volatility: f64, rate: f64) -> Greeks {
        let t = self.params().time_to_maturity();

        match self {
            PayoffModel::Digital { .. } => Greeks {
                delta: 0.3 * (-rate * t).exp(),
                vega: 0.08 * t.sqrt() * spot / 100.0,
                theta: -0.015,
                gamma: 0.03 / t.sqrt(),
            },
            PayoffModel::Autocall { params, .. } => Greeks {
                delta: 0.6 * (-rate * t).exp(),
                vega: 0.15 * t.sqrt() * spot / 100.0,
                theta: -0.02 * (1.0 + params.coupon_rate),
                gamma: 0.05 / t.sqrt(),
            },
            PayoffModel::Participation {
                participation_rate, ..
            } => Greeks {
                delta: 0.8 * participation_rate * (-rate * t).exp(),
                vega: 0.25 * t.sqrt() * spot / 100.0,
                theta: -0.025,
                gamma: 0.08 / t.sqrt(),
            },
        }
    }

    /// Greeks at the default market point (spot=100, vol=20%, rate=5%)
    pub fn default_greeks(&self) -> Greeks {
        self.greeks(DEFAULT_SPOT, DEFAULT_VOLATILITY, DEFAULT_RATE)
    }

    /// Sample the payoff curve over `[spot_low, spot_high]`, inclusive of
    /// both bounds, with evenly spaced spots. Payoffs are expressed in
    /// percent of notional.
    pub fn payoff_curve(&self, spot_low: f64, spot_high: f64, samples: usize) -> Vec<CurvePoint> {
        if samples == 0 {
            return Vec::new();
        }
        if samples == 1 {
            return vec![CurvePoint {
                spot: spot_low,
                payoff: self.payoff_ratio(spot_low, DEFAULT_STRIKE) * 100.0,
            }];
        }

        let span = spot_high - spot_low;
        let last = (samples - 1) as f64;
        (0..samples)
            .map(|i| {
                // i = samples-1 lands exactly on spot_high
                let spot = spot_low + span * i as f64 / last;
                CurvePoint {
                    spot,
                    payoff: self.payoff_ratio(spot, DEFAULT_STRIKE) * 100.0,
                }
            })
            .collect()
    }

    /// Payoff curve over the default 70-130 range with 50 samples
    pub fn default_payoff_curve(&self) -> Vec<CurvePoint> {
        self.payoff_curve(CURVE_SPOT_LOW, CURVE_SPOT_HIGH, CURVE_SAMPLES)
    }
}
