pub mod bank_accounts_model;
pub mod bank_accounts_repository;
pub mod bank_accounts_service;
pub mod bank_accounts_traits;

pub use bank_accounts_model::*;
pub use bank_accounts_repository::BankAccountRepository;
pub use bank_accounts_service::BankAccountService;
pub use bank_accounts_traits::{BankAccountRepositoryTrait, BankAccountServiceTrait};
