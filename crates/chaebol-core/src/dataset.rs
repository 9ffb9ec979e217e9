//! Loading and sanity-checking group dataset documents.

use crate::Result;
use crate::model::GroupData;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io::Read;
use std::path::Path;

impl GroupData {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Non-fatal consistency diagnostics over a hand-maintained document.
    ///
    /// Everything reported here is tolerated downstream (the layout engine
    /// drops or reroutes the offending records); the warnings exist so
    /// dataset curators can see what will be ignored.
    pub fn validate(&self) -> Vec<DataWarning> {
        let mut warnings = Vec::new();

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for c in &self.companies {
            if !seen.insert(c.id.as_str()) {
                warnings.push(DataWarning::DuplicateCompanyId { id: c.id.clone() });
            }
        }

        let ids: FxHashSet<&str> = self.companies.iter().map(|c| c.id.as_str()).collect();
        for r in &self.relations {
            if !ids.contains(r.from_company_id.as_str()) {
                warnings.push(DataWarning::UnknownCompanyRef {
                    relation_id: r.id.clone(),
                    company_id: r.from_company_id.clone(),
                });
            }
            if !ids.contains(r.to_company_id.as_str()) {
                warnings.push(DataWarning::UnknownCompanyRef {
                    relation_id: r.id.clone(),
                    company_id: r.to_company_id.clone(),
                });
            }
            if r.from_company_id == r.to_company_id {
                warnings.push(DataWarning::SelfOwnership {
                    relation_id: r.id.clone(),
                });
            }
            if r.ownership_pct <= 0.0 {
                warnings.push(DataWarning::NonPositivePct {
                    relation_id: r.id.clone(),
                    pct: r.ownership_pct,
                });
            }
        }

        for h in &self.controller_holdings {
            if !ids.contains(h.company_id.as_str()) {
                warnings.push(DataWarning::UnknownHoldingRef {
                    company_id: h.company_id.clone(),
                });
            }
        }

        let controllers: Vec<String> = self
            .companies
            .iter()
            .filter(|c| c.is_controller)
            .map(|c| c.id.clone())
            .collect();
        if controllers.len() > 1 {
            warnings.push(DataWarning::MultipleControllers { ids: controllers });
        }

        warnings
    }
}

/// Reads one group document from a JSON file.
pub fn load_group(path: impl AsRef<Path>) -> Result<GroupData> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let data = GroupData::from_json_str(&text)?;
    tracing::debug!(
        group = %data.group.id,
        companies = data.companies.len(),
        relations = data.relations.len(),
        "loaded group dataset"
    );
    Ok(data)
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataWarning {
    DuplicateCompanyId { id: String },
    UnknownCompanyRef { relation_id: String, company_id: String },
    UnknownHoldingRef { company_id: String },
    SelfOwnership { relation_id: String },
    NonPositivePct { relation_id: String, pct: f64 },
    MultipleControllers { ids: Vec<String> },
}

impl fmt::Display for DataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataWarning::DuplicateCompanyId { id } => {
                write!(f, "duplicate company id: {id}")
            }
            DataWarning::UnknownCompanyRef {
                relation_id,
                company_id,
            } => {
                write!(
                    f,
                    "relation {relation_id} references unknown company {company_id}"
                )
            }
            DataWarning::UnknownHoldingRef { company_id } => {
                write!(f, "controller holding references unknown company {company_id}")
            }
            DataWarning::SelfOwnership { relation_id } => {
                write!(f, "relation {relation_id} is self-referential")
            }
            DataWarning::NonPositivePct { relation_id, pct } => {
                write!(f, "relation {relation_id} has non-positive percentage {pct}")
            }
            DataWarning::MultipleControllers { ids } => {
                write!(f, "more than one controller company: {}", ids.join(", "))
            }
        }
    }
}
