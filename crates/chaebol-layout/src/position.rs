//! Subtree-width computation and coordinate assignment.
//!
//! Tree mode: widths bottom-up, then a top-down pass that centers each parent
//! over the combined span of its children. One vertical band per tree depth.
//! When the group has no root at all, there is no hierarchy to center and
//! placement falls back to a row-major grid.

use crate::index::OwnershipIndex;
use crate::tree::OwnershipTree;
use chaebol_core::Company;
use rustc_hash::FxHashMap;

const NODE_W: f64 = 200.0;
const NODE_H_LISTED: f64 = 88.0;
const NODE_H_UNLISTED: f64 = 56.0;
const NODE_H_CONTROLLER: f64 = 96.0;

const H_GAP: f64 = 240.0;
const V_BAND: f64 = 180.0;
const GRID_ROW_PAD: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePosition {
    pub x: f64,
    pub y: f64,
    pub depth: u32,
}

/// Density scale for crowded charts. Thresholds trade legibility against
/// total diagram size; they do not affect topology.
pub fn density_scale(company_count: usize) -> f64 {
    if company_count > 50 {
        0.72
    } else if company_count > 35 {
        0.82
    } else if company_count > 20 {
        0.9
    } else {
        1.0
    }
}

pub fn node_height(company: &Company) -> f64 {
    if company.is_controller {
        NODE_H_CONTROLLER
    } else if company.is_listed {
        NODE_H_LISTED
    } else {
        NODE_H_UNLISTED
    }
}

/// Assigns every company exactly one position.
pub fn assign_positions(
    index: &OwnershipIndex,
    tree: Option<&OwnershipTree>,
) -> FxHashMap<String, NodePosition> {
    match tree {
        Some(tree) => place_tree(index, tree),
        None => place_grid(index),
    }
}

fn place_tree(index: &OwnershipIndex, tree: &OwnershipTree) -> FxHashMap<String, NodePosition> {
    let scale = density_scale(index.companies().len());
    let h_gap = (H_GAP * scale).round();
    let band = (V_BAND * scale).round() * 1.2;

    let mut widths: FxHashMap<String, f64> = FxHashMap::default();
    subtree_width(tree, tree.root_id(), h_gap, &mut widths);

    let mut positions: FxHashMap<String, NodePosition> = FxHashMap::default();
    place_subtree(tree, tree.root_id(), 0.0, 0, h_gap, band, &widths, &mut positions);
    positions
}

/// Horizontal footprint of `id` and its descendants. A childless company
/// takes one node slot; an internal one takes its children's combined span,
/// never less than one slot.
fn subtree_width(
    tree: &OwnershipTree,
    id: &str,
    h_gap: f64,
    widths: &mut FxHashMap<String, f64>,
) -> f64 {
    let children = tree.children(id);
    let width = if children.is_empty() {
        NODE_W
    } else {
        let mut sum = 0.0;
        for child in children {
            sum += subtree_width(tree, child, h_gap, widths);
        }
        sum += h_gap * (children.len() - 1) as f64;
        sum.max(NODE_W)
    };
    widths.insert(id.to_string(), width);
    width
}

fn place_subtree(
    tree: &OwnershipTree,
    id: &str,
    center_x: f64,
    depth: u32,
    h_gap: f64,
    band: f64,
    widths: &FxHashMap<String, f64>,
    positions: &mut FxHashMap<String, NodePosition>,
) {
    positions.insert(
        id.to_string(),
        NodePosition {
            x: center_x,
            y: depth as f64 * band,
            depth,
        },
    );

    let children = tree.children(id);
    if children.is_empty() {
        return;
    }

    let mut span = h_gap * (children.len() - 1) as f64;
    for child in children {
        span += widths.get(child).copied().unwrap_or(NODE_W);
    }

    let mut cursor = center_x - span / 2.0;
    for child in children {
        let w = widths.get(child).copied().unwrap_or(NODE_W);
        place_subtree(tree, child, cursor + w / 2.0, depth + 1, h_gap, band, widths, positions);
        cursor += w + h_gap;
    }
}

/// Row-major grid for rootless groups. Rows are centered; each row's band is
/// the row index, since no ownership depth exists. Within the grid, holding
/// companies come first, then listed companies by descending market cap, then
/// the rest, keeping input order inside each class.
fn place_grid(index: &OwnershipIndex) -> FxHashMap<String, NodePosition> {
    let companies = index.companies();
    let scale = density_scale(companies.len());
    let h_gap = (H_GAP * scale).round();

    let mut order: Vec<&Company> = companies.iter().collect();
    order.sort_by(|a, b| grid_rank(a).total_cmp(&grid_rank(b)));

    let column_cap: usize = if companies.len() > 35 {
        8
    } else if companies.len() > 20 {
        7
    } else {
        6
    };
    let per_row = column_cap.min(companies.len().max(1));

    let mut positions: FxHashMap<String, NodePosition> = FxHashMap::default();
    let mut y = 0.0;
    for (row, chunk) in order.chunks(per_row).enumerate() {
        let span = h_gap * (chunk.len() - 1) as f64;
        let mut row_h: f64 = 0.0;
        for (col, c) in chunk.iter().enumerate() {
            positions.insert(
                c.id.clone(),
                NodePosition {
                    x: -span / 2.0 + col as f64 * h_gap,
                    y,
                    depth: row as u32,
                },
            );
            row_h = row_h.max(node_height(c));
        }
        y += row_h + GRID_ROW_PAD * scale;
    }
    positions
}

// Holdings sort ahead of listed companies, which sort by market cap
// descending; everything else follows. The sort is stable, so equal keys
// keep input order.
fn grid_rank(c: &Company) -> f64 {
    if c.is_holding {
        f64::NEG_INFINITY
    } else if c.is_listed {
        -c.market_cap.unwrap_or(0.0)
    } else {
        f64::INFINITY
    }
}
