//! Edge classification against the resolved tree.
//!
//! The original edge list is never mutated; each retained edge is labeled by
//! whether it coincides with a parent/child edge of the spanning tree.
//! Non-tree edges are the cross/circular shareholdings the renderer must
//! still draw, just differently.

use crate::index::OwnershipIndex;
use crate::model::ClassifiedEdge;
use crate::tree::OwnershipTree;

/// Classifies every retained edge, in retained order (relations first, then
/// direct holdings). With no tree there is no hierarchy, so every edge is
/// non-tree.
pub fn classify_edges(index: &OwnershipIndex, tree: Option<&OwnershipTree>) -> Vec<ClassifiedEdge> {
    index
        .edges()
        .iter()
        .map(|e| ClassifiedEdge {
            source: e.source_id.clone(),
            target: e.target_id.clone(),
            ownership_pct: e.pct,
            controller_edge: e.from_controller,
            tree_edge: tree.is_some_and(|t| t.is_tree_edge(&e.source_id, &e.target_id)),
        })
        .collect()
}
