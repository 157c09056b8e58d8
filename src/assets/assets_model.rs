//! Asset kinds resolvable by the settlement engine.

use serde::{Deserialize, Serialize};

use crate::contracts::contracts_errors::ContractError;
use crate::errors::Result;

/// Kind of external asset a contract item may reference.
///
/// Each kind has its own table owned by the asset CRUD services; this core
/// only checks existence by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Property,
    Vehicle,
    Credit,
    Development,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Property => "property",
            AssetKind::Vehicle => "vehicle",
            AssetKind::Credit => "credit",
            AssetKind::Development => "development",
        }
    }

    pub fn from_str(value: &str) -> Result<Self> {
        match value {
            "property" => Ok(AssetKind::Property),
            "vehicle" => Ok(AssetKind::Vehicle),
            "credit" => Ok(AssetKind::Credit),
            "development" => Ok(AssetKind::Development),
            other => {
                Err(ContractError::InvalidData(format!("Unknown asset kind '{}'", other)).into())
            }
        }
    }
}
