//! Structured product selection engine
//!
//! Selects, among a small static catalog of structured products, the one
//! best matching a client's constraints (duration, target yield, risk
//! tolerance, amount), and computes its expected economics, heuristic
//! Greeks, and payoff profile.
//!
//! The engine is pure and synchronous: the catalog is immutable after
//! construction and each selection call allocates its own transient state,
//! so concurrent calls need no synchronization.

pub mod catalog;
pub mod constraints;
pub mod payoff;
pub mod selector;

pub use catalog::{Catalog, CatalogError, PayoffDefinition};
pub use constraints::{ClientConstraints, RiskLevel};
pub use payoff::{CurvePoint, Greeks, PayoffModel, PayoffParams};
pub use selector::{PayoffInfo, ProductSelector};
