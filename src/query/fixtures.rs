//! Shared test data builders

use crate::core::dataset::Dataset;
use crate::entities::{LineItem, Nation, Part, PartSupply, Supplier};

pub const IRAN: i64 = 10;
pub const IRAQ: i64 = 11;
pub const CANADA: i64 = 3;

pub fn part(key: i64, name: &str) -> Part {
    Part::new(key, name)
}

pub fn supplier(key: i64, name: &str, address: &str, nation: i64) -> Supplier {
    Supplier::new(key, name, address, nation)
}

pub fn supply(part: i64, supplier: i64, available: i64) -> PartSupply {
    PartSupply::new(part, supplier, available)
}

pub fn shipment(part: i64, supplier: i64, ship_date: &str, quantity: &str) -> LineItem {
    LineItem::new(
        part,
        supplier,
        ship_date.parse().unwrap(),
        quantity.parse().unwrap(),
    )
}

fn nations() -> Vec<Nation> {
    vec![
        Nation::new(CANADA, "CANADA"),
        Nation::new(IRAN, "IRAN"),
        Nation::new(IRAQ, "IRAQ"),
    ]
}

/// One "midnight" part stocked by one Iranian supplier, shipped once in 1994
pub fn scenario(available: i64, shipped: &str) -> Dataset {
    Dataset {
        suppliers: vec![supplier(1, "Acme Corp", "1 Main St", IRAN)],
        nations: nations(),
        parts: vec![part(1, "midnight linen tan")],
        part_supplies: vec![supply(1, 1, available)],
        line_items: vec![shipment(1, 1, "1994-05-01", shipped)],
    }
}

/// Several suppliers, parts and shipments straddling the window
pub fn mixed_dataset() -> Dataset {
    Dataset {
        suppliers: vec![
            supplier(1, "Supplier#000000001", "N kD4on9OM Ipw3,gf0J", IRAN),
            supplier(2, "Supplier#000000002", "89eJ5ksX3ImxJQBvxObC,", IRAN),
            supplier(3, "Supplier#000000003", "q1,G3Pj6OjIuUYfUoH18B", IRAQ),
            supplier(4, "Supplier#000000004", "Bk7ah4CK8SYQTepEmvMkkgMwg", IRAN),
            supplier(5, "Supplier#000000005", "Gcdm2rJRzl5qlTVzc", 99),
        ],
        nations: nations(),
        parts: vec![
            part(1, "midnight linen tan"),
            part(2, "midnight blush navy"),
            part(3, "forest green misty"),
        ],
        part_supplies: vec![
            supply(1, 1, 40),
            supply(2, 1, 5),
            supply(1, 2, 12),
            supply(2, 3, 500),
            supply(1, 4, 30),
            supply(3, 4, 900),
            supply(1, 5, 900),
        ],
        line_items: vec![
            shipment(1, 1, "1994-02-11", "17.00"),
            shipment(1, 1, "1994-11-30", "36.00"),
            shipment(2, 1, "1994-08-08", "12.00"),
            shipment(1, 2, "1994-03-03", "20.00"),
            shipment(1, 2, "1994-09-09", "4.50"),
            shipment(2, 3, "1994-04-04", "9.00"),
            shipment(1, 4, "1995-01-01", "2.00"),
            shipment(1, 4, "1994-12-31", "59.50"),
            shipment(3, 4, "1994-06-06", "1.00"),
            shipment(1, 5, "1994-06-06", "1.00"),
        ],
    }
}
