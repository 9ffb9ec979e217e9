//! Group dataset types.
//!
//! Field names mirror the JSON documents the dataset packaging pipeline
//! produces (`camelCase`, one document per group). Optional market fields are
//! refreshed by a separate price-update job and may be absent.

use serde::{Deserialize, Serialize};

/// Metadata for one conglomerate group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConglomerateGroup {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Display name of the controlling individual (동일인).
    pub controller_name: String,
    #[serde(default)]
    pub description: String,
    /// Disclosure reference date, e.g. `"2025-05"`.
    #[serde(default)]
    pub data_date: String,
    #[serde(default)]
    pub total_companies: u32,
    #[serde(default)]
    pub listed_companies: u32,
}

/// A company, or the controlling individual when `is_controller` is set.
///
/// At most one company per group carries `is_controller`. Market fields are
/// carried through to the layout output unchanged; they never affect
/// placement except as a sort key in the no-hierarchy fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    #[serde(default)]
    pub group_id: String,
    pub name: String,
    #[serde(default)]
    pub is_listed: bool,
    #[serde(default)]
    pub is_holding: bool,
    #[serde(default)]
    pub is_controller: bool,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
}

impl Company {
    /// A bare placeholder entity used when the dataset has direct-holding
    /// records but no explicit controller company.
    pub fn synthetic_controller(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group_id: String::new(),
            name: name.into(),
            is_listed: false,
            is_holding: false,
            is_controller: true,
            category: String::new(),
            stock_code: None,
            stock_price: None,
            price_change: None,
            price_change_percent: None,
            market_cap: None,
            sector: None,
        }
    }
}

/// A directed, percentage-weighted ownership claim between two companies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipRelation {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub group_id: String,
    pub from_company_id: String,
    pub to_company_id: String,
    pub ownership_pct: f64,
}

/// The controlling individual's direct stake in one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerHolding {
    #[serde(default)]
    pub group_id: String,
    pub company_id: String,
    pub ownership_pct: f64,
}

/// One complete group document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupData {
    pub group: ConglomerateGroup,
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub relations: Vec<OwnershipRelation>,
    #[serde(default)]
    pub controller_holdings: Vec<ControllerHolding>,
}

impl GroupData {
    /// The explicit controller company, if the dataset declares one.
    pub fn controller(&self) -> Option<&Company> {
        self.companies.iter().find(|c| c.is_controller)
    }
}
