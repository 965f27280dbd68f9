//! Result ordering

use serde::Serialize;

use crate::query::suppliers::SupplierRow;

/// One row of the query result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromotionCandidate {
    pub name: String,
    pub address: String,
}

impl From<SupplierRow> for PromotionCandidate {
    fn from(row: SupplierRow) -> Self {
        Self {
            name: row.name,
            address: row.address,
        }
    }
}

/// Sort by name, then address, then supplier key, and keep the first `limit`
pub fn rank(mut rows: Vec<SupplierRow>, limit: usize) -> Vec<SupplierRow> {
    rows.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.address.cmp(&b.address))
            .then_with(|| a.key.cmp(&b.key))
    });
    rows.truncate(limit);
    rows
}

/// The lexicographically first supplier, if any qualified
pub fn select_first(rows: Vec<SupplierRow>) -> Option<PromotionCandidate> {
    rank(rows, 1).into_iter().next().map(PromotionCandidate::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::SupplierKey;

    fn row(key: i64, name: &str, address: &str) -> SupplierRow {
        SupplierRow {
            key: SupplierKey(key),
            name: name.to_string(),
            address: address.to_string(),
        }
    }

    #[test]
    fn test_first_by_name() {
        let rows = vec![row(2, "Bolt Supply", "b"), row(1, "Acme Corp", "a")];
        assert_eq!(
            select_first(rows),
            Some(PromotionCandidate {
                name: "Acme Corp".into(),
                address: "a".into(),
            })
        );
    }

    #[test]
    fn test_byte_order_puts_uppercase_first() {
        let rows = vec![row(1, "acme", "x"), row(2, "Zeta", "y")];
        assert_eq!(select_first(rows).unwrap().name, "Zeta");
    }

    #[test]
    fn test_ties_broken_by_address_then_key() {
        let rows = vec![
            row(3, "Same", "b street"),
            row(2, "Same", "a street"),
            row(1, "Same", "a street"),
        ];
        let ranked = rank(rows, 10);
        let keys: Vec<i64> = ranked.iter().map(|r| r.key.get()).collect();
        assert_eq!(keys, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_input_is_none() {
        assert_eq!(select_first(Vec::new()), None);
        assert!(rank(Vec::new(), 5).is_empty());
    }

    #[test]
    fn test_limit_truncates() {
        let rows = vec![row(1, "C", ""), row(2, "A", ""), row(3, "B", "")];
        let names: Vec<String> = rank(rows, 2).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
