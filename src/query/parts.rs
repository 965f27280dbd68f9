//! Part name filter

use std::collections::HashSet;

use crate::core::identity::PartKey;
use crate::entities::Part;

/// Keys of parts whose name starts with `prefix`
///
/// Case-sensitive; the prefix matches literally with any suffix allowed.
pub fn matching_parts(parts: &[Part], prefix: &str) -> HashSet<PartKey> {
    parts
        .iter()
        .filter(|p| p.name.starts_with(prefix))
        .map(|p| p.key)
        .collect()
}
