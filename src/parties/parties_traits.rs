//! Party resolver trait (read-only collaborator).

use super::parties_model::PartyType;
use crate::errors::Result;

pub trait PartyResolverTrait: Send + Sync {
    /// Checks that a person/company id exists in its registry.
    fn exists(&self, party_type: PartyType, party_id: &str) -> Result<bool>;
}
