#![forbid(unsafe_code)]

//! Conglomerate ownership data model + dataset access.
//!
//! One JSON document per group: group metadata, companies, inter-company
//! ownership relations, and the controller's direct holdings. Loading is
//! lenient about optional fields; consistency problems in hand-maintained
//! documents surface as [`DataWarning`]s, never as hard errors.

pub mod dataset;
pub mod error;
pub mod format;
pub mod model;

pub use dataset::{DataWarning, load_group};
pub use error::{Error, Result};
pub use model::{Company, ConglomerateGroup, ControllerHolding, GroupData, OwnershipRelation};
