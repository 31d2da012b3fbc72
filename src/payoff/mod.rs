//! Payoff models and Greeks computation
//!
//! Each catalog entry maps to one of three payoff variants (Digital,
//! Autocall, Participation). Models are built fresh per scoring attempt
//! and discarded after use; all computations are pure.

mod model;
mod factory;

pub use model::{CurvePoint, Greeks, PayoffModel, PayoffParams};

// ============================================================================
// Default Market Parameters
// ============================================================================
// Greeks are evaluated at a normalized market point unless the caller
// supplies its own. The payoff curve is sampled around the strike.

/// Default spot price (strike-normalized, strike = 100)
pub const DEFAULT_SPOT: f64 = 100.0;

/// Default annualized volatility (20%)
pub const DEFAULT_VOLATILITY: f64 = 0.2;

/// Default risk-free rate (5%)
pub const DEFAULT_RATE: f64 = 0.05;

/// Default strike level
pub const DEFAULT_STRIKE: f64 = 100.0;

/// Payoff curve sampling range, low end
pub const CURVE_SPOT_LOW: f64 = 70.0;

/// Payoff curve sampling range, high end
pub const CURVE_SPOT_HIGH: f64 = 130.0;

/// Number of evenly spaced samples in the payoff curve
pub const CURVE_SAMPLES: usize = 50;

/// Capital protection level for Autocall (fraction of strike)
pub const AUTOCALL_PROTECTION: f64 = 0.80;

/// Capital protection level for Participation (fraction of strike)
pub const PARTICIPATION_PROTECTION: f64 = 0.70;

/// Upside participation rate for Participation
pub const PARTICIPATION_RATE: f64 = 1.5;
