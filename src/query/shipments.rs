//! Shipment aggregation over a one-year window

use chrono::{Months, NaiveDate};
use std::collections::HashMap;
use std::fmt;

use crate::core::error::QueryError;
use crate::core::identity::{PartKey, SupplierKey};
use crate::core::quantity::Quantity;
use crate::entities::LineItem;

/// Half-open date interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ShipWindow {
    /// One calendar year starting at `start`
    ///
    /// Uses month arithmetic, so a Feb 29 start ends on Feb 28 of the next year.
    pub fn one_year_from(start: NaiveDate) -> Self {
        let end = start
            .checked_add_months(Months::new(12))
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

impl fmt::Display for ShipWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Shipped quantity per (part, supplier) inside the window
///
/// The threshold for a pair is half its entry. Pairs with no shipment in the
/// window have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipmentThresholds(HashMap<(PartKey, SupplierKey), Quantity>);

impl ShipmentThresholds {
    /// Total shipped in the window for a pair
    pub fn shipped(&self, part: PartKey, supplier: SupplierKey) -> Option<Quantity> {
        self.0.get(&(part, supplier)).copied()
    }

    /// Whether `available` units exceed the pair's threshold
    ///
    /// `None` when the pair shipped nothing in the window.
    pub fn exceeded_by(&self, part: PartKey, supplier: SupplierKey, available: i64) -> Option<bool> {
        self.shipped(part, supplier)
            .map(|shipped| shipped.half_is_below(available))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Sum in-window quantities per (part, supplier)
pub fn aggregate_shipments(
    line_items: &[LineItem],
    window: &ShipWindow,
) -> Result<ShipmentThresholds, QueryError> {
    let mut sums: HashMap<(PartKey, SupplierKey), Quantity> = HashMap::new();

    for item in line_items.iter().filter(|l| window.contains(l.ship_date)) {
        let sum = sums.entry((item.part, item.supplier)).or_default();
        *sum = sum
            .checked_add(item.quantity)
            .ok_or(QueryError::ShipmentSumOverflow {
                part: item.part,
                supplier: item.supplier,
            })?;
    }

    Ok(ShipmentThresholds(sums))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn item(part: i64, supplier: i64, ship: &str, qty: &str) -> LineItem {
        LineItem::new(part, supplier, date(ship), qty.parse().unwrap())
    }

    #[test]
    fn test_window_is_half_open() {
        let window = ShipWindow::one_year_from(date("1994-01-01"));
        assert_eq!(window.end, date("1995-01-01"));
        assert!(window.contains(date("1994-01-01")));
        assert!(window.contains(date("1994-12-31")));
        assert!(!window.contains(date("1995-01-01")));
        assert!(!window.contains(date("1993-12-31")));
    }

    #[test]
    fn test_window_uses_calendar_years() {
        // 1996 is a leap year; 365 days after 1996-01-01 would be 1996-12-31
        let window = ShipWindow::one_year_from(date("1996-01-01"));
        assert_eq!(window.end, date("1997-01-01"));
        assert!(window.contains(date("1996-12-31")));

        let window = ShipWindow::one_year_from(date("1995-03-01"));
        assert_eq!(window.end, date("1996-03-01"));
        assert!(window.contains(date("1996-02-29")));

        let window = ShipWindow::one_year_from(date("1996-02-29"));
        assert_eq!(window.end, date("1997-02-28"));
        assert!(!window.contains(date("1997-02-28")));
    }

    #[test]
    fn test_groups_and_sums() {
        let window = ShipWindow::one_year_from(date("1994-01-01"));
        let items = vec![
            item(1, 1, "1994-02-01", "100"),
            item(1, 1, "1994-06-15", "50"),
            item(1, 2, "1994-06-15", "3.25"),
            item(2, 1, "1994-06-15", "8"),
            // outside the window
            item(1, 1, "1995-01-01", "1000"),
            item(1, 1, "1993-12-31", "1000"),
        ];

        let thresholds = aggregate_shipments(&items, &window).unwrap();
        assert_eq!(thresholds.len(), 3);
        assert_eq!(thresholds.shipped(1.into(), 1.into()), Some(Quantity::whole(150)));
        assert_eq!(thresholds.shipped(1.into(), 2.into()), Some("3.25".parse().unwrap()));
        assert_eq!(thresholds.shipped(2.into(), 1.into()), Some(Quantity::whole(8)));
        assert_eq!(thresholds.exceeded_by(1.into(), 1.into(), 75), Some(false));
        assert_eq!(thresholds.exceeded_by(1.into(), 1.into(), 76), Some(true));
        assert_eq!(thresholds.exceeded_by(1.into(), 2.into(), 2), Some(true));
        assert_eq!(thresholds.exceeded_by(3.into(), 1.into(), 100), None);
    }

    #[test]
    fn test_pair_without_in_window_shipments_is_absent() {
        let window = ShipWindow::one_year_from(date("1994-01-01"));
        let items = vec![item(1, 1, "1996-05-05", "10")];

        let thresholds = aggregate_shipments(&items, &window).unwrap();
        assert!(thresholds.is_empty());
        assert_eq!(thresholds.shipped(1.into(), 1.into()), None);
    }

    #[test]
    fn test_zero_quantity_shipment_creates_zero_threshold() {
        let window = ShipWindow::one_year_from(date("1994-01-01"));
        let items = vec![item(1, 1, "1994-05-05", "0")];

        let thresholds = aggregate_shipments(&items, &window).unwrap();
        assert_eq!(thresholds.shipped(1.into(), 1.into()), Some(Quantity::ZERO));
        assert_eq!(thresholds.exceeded_by(1.into(), 1.into(), 0), Some(false));
        assert_eq!(thresholds.exceeded_by(1.into(), 1.into(), 1), Some(true));
    }

    #[test]
    fn test_sum_overflow_is_an_error() {
        let window = ShipWindow::one_year_from(date("1994-01-01"));
        let items = vec![
            item(1, 1, "1994-02-01", "5000000000000"),
            item(1, 1, "1994-03-01", "5000000000000"),
        ];

        assert_eq!(
            aggregate_shipments(&items, &window),
            Err(QueryError::ShipmentSumOverflow {
                part: 1.into(),
                supplier: 1.into(),
            })
        );
    }

    #[test]
    fn test_overflow_outside_window_is_ignored() {
        let window = ShipWindow::one_year_from(date("1994-01-01"));
        let items = vec![
            item(1, 1, "1994-02-01", "5000000000000"),
            item(1, 1, "1996-03-01", "5000000000000"),
        ];

        let thresholds = aggregate_shipments(&items, &window).unwrap();
        assert_eq!(thresholds.shipped(1.into(), 1.into()), Some(Quantity::whole(5_000_000_000_000)));
    }
}
