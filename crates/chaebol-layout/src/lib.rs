#![forbid(unsafe_code)]

//! Deterministic ownership-chart layout.
//!
//! Takes one group's companies, inter-company ownership relations, and the
//! controller's direct holdings, and produces positioned nodes plus
//! tree/non-tree classified edges for the rendering layer.
//!
//! The pipeline is a pure function of its input: no I/O, no shared state
//! between calls, identical output for identical input. Cross and circular
//! shareholdings are expected; the graph is reduced to a spanning tree
//! rooted at the controlling individual and every edge that did not make the
//! tree is classified, not dropped.

pub mod classify;
pub mod index;
pub mod model;
pub mod position;
pub mod resolve;
pub mod tree;

pub use index::OwnershipIndex;
pub use model::{ChartLayout, ClassifiedEdge, PositionedNode};
pub use tree::OwnershipTree;

use chaebol_core::{Company, ControllerHolding, GroupData, OwnershipRelation};

/// Lays out one group's ownership chart.
///
/// Total over any finite, well-typed input: malformed records are dropped,
/// disconnected companies attach under the root, and an empty company list
/// yields an empty layout. `controller_name` labels the placeholder root when
/// the dataset has direct holdings but no declared controller.
pub fn build_chart(
    companies: &[Company],
    relations: &[OwnershipRelation],
    holdings: &[ControllerHolding],
    controller_name: &str,
) -> ChartLayout {
    if companies.is_empty() {
        return ChartLayout::default();
    }

    let index = OwnershipIndex::build(companies, relations, holdings, controller_name);
    let primaries = resolve::primary_parents(&index);
    let tree = tree::build_tree(&index, &primaries);
    let positions = position::assign_positions(&index, tree.as_ref());
    let edges = classify::classify_edges(&index, tree.as_ref());

    let nodes = index
        .companies()
        .iter()
        .map(|c| {
            let p = positions
                .get(&c.id)
                .copied()
                .expect("every company is positioned");
            PositionedNode {
                company: c.clone(),
                x: p.x,
                y: p.y,
                depth: p.depth,
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        rooted = tree.is_some(),
        "built ownership chart"
    );

    ChartLayout { nodes, edges }
}

/// [`build_chart`] over a loaded group document.
pub fn build_chart_for_group(data: &GroupData) -> ChartLayout {
    build_chart(
        &data.companies,
        &data.relations,
        &data.controller_holdings,
        &data.group.controller_name,
    )
}
