//! Primary-parent selection.
//!
//! Every non-root company gets at most one primary parent: the incoming claim
//! with the strictly highest percentage. Ties keep the first-seen claim, so
//! the result depends only on input order, never on traversal order.

use crate::index::{OwnershipEdge, OwnershipIndex};
use rustc_hash::FxHashMap;

/// The winning claim per company id. Companies with no incoming claims are
/// absent; the root is never included.
pub fn primary_parents(index: &OwnershipIndex) -> FxHashMap<String, OwnershipEdge> {
    let mut out: FxHashMap<String, OwnershipEdge> = FxHashMap::default();

    for c in index.companies() {
        if index.root_id() == Some(c.id.as_str()) {
            continue;
        }
        let mut best: Option<&OwnershipEdge> = None;
        for claim in index.incoming(&c.id) {
            // Strict comparison: on equal percentages the earlier claim wins.
            if best.is_none_or(|b| claim.pct > b.pct) {
                best = Some(claim);
            }
        }
        if let Some(claim) = best {
            out.insert(c.id.clone(), claim.clone());
        }
    }

    out
}
