//! Query parameters

use chrono::NaiveDate;

use crate::query::shipments::ShipWindow;

pub const DEFAULT_PART_PREFIX: &str = "midnight";
pub const DEFAULT_NATION: &str = "IRAN";
pub const DEFAULT_LIMIT: usize = 1;

/// Substitution parameters of the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    /// Literal prefix the part name must start with
    pub part_prefix: String,
    /// First day of the one-year shipment window
    pub window_start: NaiveDate,
    /// Exact nation name the supplier must be located in
    pub nation: String,
    /// Number of result rows to return
    pub limit: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            part_prefix: DEFAULT_PART_PREFIX.to_string(),
            window_start: default_window_start(),
            nation: DEFAULT_NATION.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl QueryParams {
    pub fn window(&self) -> ShipWindow {
        ShipWindow::one_year_from(self.window_start)
    }
}

pub fn default_window_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(1994, 1, 1).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = QueryParams::default();
        assert_eq!(params.part_prefix, "midnight");
        assert_eq!(params.nation, "IRAN");
        assert_eq!(params.limit, 1);
        assert_eq!(params.window().start, "1994-01-01".parse().unwrap());
        assert_eq!(params.window().end, "1995-01-01".parse().unwrap());
    }
}
