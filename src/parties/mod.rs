pub mod parties_model;
pub mod parties_repository;
pub mod parties_traits;

pub use parties_model::*;
pub use parties_repository::PartyResolver;
pub use parties_traits::PartyResolverTrait;
