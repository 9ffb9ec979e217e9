//! Ownership index: a uniform incoming-claim view over inter-company
//! relations and the controller's direct holdings.
//!
//! All input filtering happens here. Records referencing unknown company ids,
//! self-referential edges, and non-positive percentages are dropped silently;
//! hand-maintained datasets are expected to contain some of each, and fewer
//! edges must degrade the chart, not fail it.

use chaebol_core::{Company, ControllerHolding, OwnershipRelation};
use rustc_hash::{FxHashMap, FxHashSet};

/// A retained, filtered ownership edge.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnershipEdge {
    pub source_id: String,
    pub target_id: String,
    pub pct: f64,
    /// Direct holding by the controlling individual rather than an
    /// inter-company relation.
    pub from_controller: bool,
}

/// Lookup structures for one layout pass.
///
/// `companies` preserves input order (it is the iteration order every
/// downstream stage uses), with the synthetic controller appended when one
/// had to be materialized. `edges` preserves input order as well: relations
/// first, then holdings.
#[derive(Debug, Clone)]
pub struct OwnershipIndex {
    companies: Vec<Company>,
    by_id: FxHashMap<String, usize>,
    edges: Vec<OwnershipEdge>,
    incoming: FxHashMap<String, Vec<usize>>,
    root_id: Option<String>,
}

impl OwnershipIndex {
    pub fn build(
        companies: &[Company],
        relations: &[OwnershipRelation],
        holdings: &[ControllerHolding],
        controller_name: &str,
    ) -> Self {
        let mut companies: Vec<Company> = companies.to_vec();

        let mut root_id = companies
            .iter()
            .find(|c| c.is_controller)
            .map(|c| c.id.clone());

        // No declared controller, but the dataset records direct holdings:
        // materialize a placeholder root so the tree stages stay uniform.
        if root_id.is_none() && !holdings.is_empty() {
            let taken: FxHashSet<&str> = companies.iter().map(|c| c.id.as_str()).collect();
            let id = synthetic_controller_id(&taken);
            tracing::debug!(id = %id, name = %controller_name, "materializing synthetic controller");
            companies.push(Company::synthetic_controller(id.clone(), controller_name));
            root_id = Some(id);
        }

        let by_id: FxHashMap<String, usize> = companies
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();

        let mut edges: Vec<OwnershipEdge> = Vec::with_capacity(relations.len() + holdings.len());
        for r in relations {
            if !by_id.contains_key(&r.from_company_id) || !by_id.contains_key(&r.to_company_id) {
                continue;
            }
            if r.from_company_id == r.to_company_id {
                continue;
            }
            if r.ownership_pct <= 0.0 {
                continue;
            }
            edges.push(OwnershipEdge {
                source_id: r.from_company_id.clone(),
                target_id: r.to_company_id.clone(),
                pct: r.ownership_pct,
                from_controller: false,
            });
        }

        if let Some(root) = &root_id {
            for h in holdings {
                if !by_id.contains_key(&h.company_id) {
                    continue;
                }
                if h.company_id == *root {
                    continue;
                }
                if h.ownership_pct <= 0.0 {
                    continue;
                }
                edges.push(OwnershipEdge {
                    source_id: root.clone(),
                    target_id: h.company_id.clone(),
                    pct: h.ownership_pct,
                    from_controller: true,
                });
            }
        }

        let mut incoming: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (i, e) in edges.iter().enumerate() {
            incoming.entry(e.target_id.clone()).or_default().push(i);
        }

        Self {
            companies,
            by_id,
            edges,
            incoming,
            root_id,
        }
    }

    /// All entities in input order (synthetic controller last, if present).
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn company(&self, id: &str) -> Option<&Company> {
        self.by_id.get(id).map(|&i| &self.companies[i])
    }

    /// Retained edges in input order: relations, then direct holdings.
    pub fn edges(&self) -> &[OwnershipEdge] {
        &self.edges
    }

    /// Incoming claims on `id`, in retained-edge order.
    pub fn incoming(&self, id: &str) -> impl Iterator<Item = &OwnershipEdge> + '_ {
        self.incoming
            .get(id)
            .into_iter()
            .flatten()
            .map(|&i| &self.edges[i])
    }

    /// The chart root: the declared controller or the materialized one.
    pub fn root_id(&self) -> Option<&str> {
        self.root_id.as_deref()
    }
}

fn synthetic_controller_id(taken: &FxHashSet<&str>) -> String {
    if !taken.contains("_controller") {
        return "_controller".to_string();
    }
    for i in 1usize.. {
        let candidate = format!("_controller{i}");
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
    }
    unreachable!()
}
