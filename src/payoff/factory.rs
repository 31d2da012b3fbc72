//! Model construction from catalog definitions
//!
//! Maps a catalog key plus client constraints to a concrete `PayoffModel`
//! with derived parameters. Folded into the `Catalog` since every build
//! starts with a definition lookup.

use super::{PayoffModel, PayoffParams};
use crate::catalog::{Catalog, CatalogError};
use crate::constraints::ClientConstraints;

impl Catalog {
    /// Build the payoff model for a catalog key.
    ///
    /// Derives `coupon_rate = base_yield * risk_multiplier` and takes the
    /// duration from the constraints; the barrier stays at the standard
    /// 100%. Fails with `UnknownPayoffType` if the key is absent, which
    /// indicates a catalog/selector consistency fault.
    pub fn build_model(
        &self,
        key: &str,
        constraints: &ClientConstraints,
    ) -> Result<PayoffModel, CatalogError> {
        let definition = self.get(key)?;
        let params = PayoffParams::new(constraints.duration_months, definition.coupon_rate());

        let model = match key {
            "autocall" => PayoffModel::autocall(params),
            "participation" => PayoffModel::participation(params),
            // Digital is the fallback shape for any other catalog entry
            _ => PayoffModel::digital(params),
        };

        Ok(model)
    }
}
