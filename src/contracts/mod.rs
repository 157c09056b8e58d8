pub mod balance;
pub mod code;
pub mod contracts_errors;
pub mod contracts_model;
pub mod contracts_repository;
pub mod contracts_service;
pub mod contracts_traits;

pub use contracts_errors::ContractError;
pub use contracts_model::*;
pub use contracts_repository::ContractRepository;
pub use contracts_service::ContractService;
pub use contracts_traits::{ContractRepositoryTrait, ContractServiceTrait};
