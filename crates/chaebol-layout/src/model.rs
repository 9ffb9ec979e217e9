//! Layout output model consumed by the rendering layer.

use chaebol_core::Company;
use serde::{Deserialize, Serialize};

/// One positioned entity. `x`/`y` are the node center; one vertical band per
/// tree depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedNode {
    pub company: Company,
    pub x: f64,
    pub y: f64,
    pub depth: u32,
}

/// One retained ownership edge with its layout classification.
///
/// Tree edges are part of the resolved hierarchy and get the primary vertical
/// connector treatment; non-tree edges are cross/circular holdings the
/// renderer draws differently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedEdge {
    pub source: String,
    pub target: String,
    pub ownership_pct: f64,
    pub controller_edge: bool,
    pub tree_edge: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartLayout {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<ClassifiedEdge>,
}
