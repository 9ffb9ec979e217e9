//! Spanning-tree construction over the ownership graph.
//!
//! The underlying graph is cyclic whenever cross-shareholdings exist, so a
//! plain BFS over primary-parent edges can strand whole components. The
//! admission loop below re-attaches stranded companies through their best
//! already-reachable claim; anything still unreached lands directly under the
//! root. Termination: the visited set grows on every productive pass and the
//! entity set is finite.

use crate::index::{OwnershipEdge, OwnershipIndex};
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// The resolved hierarchy: every company sits in exactly one children list.
#[derive(Debug, Clone)]
pub struct OwnershipTree {
    root_id: String,
    children: IndexMap<String, Vec<String>>,
    parent: FxHashMap<String, String>,
}

impl OwnershipTree {
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    pub fn children(&self, id: &str) -> &[String] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn parent_of(&self, id: &str) -> Option<&str> {
        self.parent.get(id).map(String::as_str)
    }

    /// Whether `source -> target` is one of the parent/child edges the layout
    /// was built from.
    pub fn is_tree_edge(&self, source: &str, target: &str) -> bool {
        self.parent_of(target) == Some(source)
    }
}

/// Builds the spanning tree rooted at the controller. `None` when the group
/// has no root at all (no declared controller and no direct holdings).
pub fn build_tree(
    index: &OwnershipIndex,
    primaries: &FxHashMap<String, OwnershipEdge>,
) -> Option<OwnershipTree> {
    let root_id = index.root_id()?.to_string();

    let mut visited: FxHashSet<String> = FxHashSet::default();
    visited.insert(root_id.clone());
    let mut children: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut parent: FxHashMap<String, String> = FxHashMap::default();

    let mut queue: VecDeque<String> = VecDeque::new();
    queue.push_back(root_id.clone());
    propagate(
        index,
        primaries,
        &mut queue,
        &mut visited,
        &mut children,
        &mut parent,
    );

    // Companies can remain unvisited when their primary parent sits on a
    // cycle the root never reaches through primary-parent edges. Admit each
    // through its strongest already-visited claim, then let its own subtree
    // propagate, until a full scan makes no progress.
    loop {
        let mut progressed = false;
        for c in index.companies() {
            if visited.contains(&c.id) {
                continue;
            }
            let mut best: Option<&OwnershipEdge> = None;
            for claim in index.incoming(&c.id) {
                if !visited.contains(&claim.source_id) {
                    continue;
                }
                if best.is_none_or(|b| claim.pct > b.pct) {
                    best = Some(claim);
                }
            }
            let Some(claim) = best else {
                continue;
            };
            let source_id = claim.source_id.clone();
            attach(&source_id, &c.id, &mut visited, &mut children, &mut parent);
            queue.push_back(c.id.clone());
            propagate(
                index,
                primaries,
                &mut queue,
                &mut visited,
                &mut children,
                &mut parent,
            );
            progressed = true;
        }
        if !progressed {
            break;
        }
    }

    // Full-coverage fallback for disconnected companies.
    for c in index.companies() {
        if !visited.contains(&c.id) {
            attach(&root_id, &c.id, &mut visited, &mut children, &mut parent);
        }
    }

    Some(OwnershipTree {
        root_id,
        children,
        parent,
    })
}

/// Breadth-first expansion along primary-parent edges. Children of each
/// parent are admitted in descending claim percentage; equal percentages keep
/// input order.
fn propagate(
    index: &OwnershipIndex,
    primaries: &FxHashMap<String, OwnershipEdge>,
    queue: &mut VecDeque<String>,
    visited: &mut FxHashSet<String>,
    children: &mut IndexMap<String, Vec<String>>,
    parent: &mut FxHashMap<String, String>,
) {
    while let Some(cur) = queue.pop_front() {
        let mut next: Vec<(String, f64)> = Vec::new();
        for c in index.companies() {
            if visited.contains(&c.id) {
                continue;
            }
            if let Some(p) = primaries.get(&c.id) {
                if p.source_id == cur {
                    next.push((c.id.clone(), p.pct));
                }
            }
        }
        next.sort_by(|a, b| b.1.total_cmp(&a.1));
        for (id, _) in next {
            attach(&cur, &id, visited, children, parent);
            queue.push_back(id);
        }
    }
}

fn attach(
    parent_id: &str,
    child_id: &str,
    visited: &mut FxHashSet<String>,
    children: &mut IndexMap<String, Vec<String>>,
    parent: &mut FxHashMap<String, String>,
) {
    visited.insert(child_id.to_string());
    children
        .entry(parent_id.to_string())
        .or_default()
        .push(child_id.to_string());
    parent.insert(child_id.to_string(), parent_id.to_string());
}
