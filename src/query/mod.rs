//! Potential Part Promotion query
//!
//! Finds suppliers in one nation holding more than half of what they shipped,
//! during a one-year window, of parts whose name starts with a given prefix.
//! Each stage is a pure function over the input tables:
//!
//! ```text
//! part ───────► matching_parts ───────┐
//!                                     ├─► qualifying_suppliers ─► resolve_suppliers ─► rank
//! lineitem ───► aggregate_shipments ──┘          ▲                     ▲
//!                                         partsupp            supplier, nation
//! ```

pub mod params;
pub mod parts;
pub mod select;
pub mod shipments;
pub mod suppliers;
pub mod supply;

#[cfg(test)]
mod fixtures;

pub use params::QueryParams;
pub use select::PromotionCandidate;
pub use shipments::{ShipWindow, ShipmentThresholds};
pub use suppliers::SupplierRow;

use tracing::{debug, instrument};

use crate::core::dataset::Dataset;
use crate::core::error::QueryError;

/// The query bound to a set of parameters
#[derive(Debug, Clone, Default)]
pub struct PartPromotion {
    params: QueryParams,
}

impl PartPromotion {
    pub fn new(params: QueryParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Run the query and return the alphabetically first supplier
    ///
    /// `Ok(None)` means nothing qualified, which is a normal outcome.
    pub fn evaluate(&self, data: &Dataset) -> Result<Option<PromotionCandidate>, QueryError> {
        Ok(select::select_first(self.candidates(data)?))
    }

    /// Run the query and return up to `limit` suppliers in result order
    pub fn evaluate_ranked(
        &self,
        data: &Dataset,
        limit: usize,
    ) -> Result<Vec<PromotionCandidate>, QueryError> {
        Ok(select::rank(self.candidates(data)?, limit)
            .into_iter()
            .map(PromotionCandidate::from)
            .collect())
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(prefix = %self.params.part_prefix, nation = %self.params.nation)
    )]
    fn candidates(&self, data: &Dataset) -> Result<Vec<SupplierRow>, QueryError> {
        data.validate()?;

        let parts = parts::matching_parts(&data.parts, &self.params.part_prefix);
        debug!(parts = parts.len(), "matched part names");

        let window = self.params.window();
        let thresholds = shipments::aggregate_shipments(&data.line_items, &window)?;
        debug!(%window, groups = thresholds.len(), "aggregated shipments");

        let qualifying = supply::qualifying_suppliers(&data.part_supplies, &parts, &thresholds);
        debug!(suppliers = qualifying.len(), "qualified part supplies");

        let rows = suppliers::resolve_suppliers(
            &data.suppliers,
            &data.nations,
            &qualifying,
            &self.params.nation,
        );
        debug!(rows = rows.len(), "resolved suppliers in nation");

        Ok(rows)
    }
}
