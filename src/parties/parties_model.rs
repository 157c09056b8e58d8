//! Party kinds referenced by contract parties.

use serde::{Deserialize, Serialize};

use crate::contracts::contracts_errors::ContractError;
use crate::errors::Result;

/// A contract participant is either a person or a company. The underlying
/// registries are owned elsewhere; this core only snapshots name/document
/// onto the contract and checks existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyType {
    Person,
    Company,
}

impl PartyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyType::Person => "person",
            PartyType::Company => "company",
        }
    }

    pub fn from_str(value: &str) -> Result<Self> {
        match value {
            "person" => Ok(PartyType::Person),
            "company" => Ok(PartyType::Company),
            other => {
                Err(ContractError::InvalidData(format!("Unknown party type '{}'", other)).into())
            }
        }
    }
}
