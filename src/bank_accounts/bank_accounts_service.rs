use std::sync::Arc;

use super::bank_accounts_model::{BankAccount, NewBankAccount};
use super::bank_accounts_traits::{BankAccountRepositoryTrait, BankAccountServiceTrait};
use crate::errors::Result;

/// Service for managing bank accounts.
pub struct BankAccountService {
    repository: Arc<dyn BankAccountRepositoryTrait>,
}

impl BankAccountService {
    pub fn new(repository: Arc<dyn BankAccountRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl BankAccountServiceTrait for BankAccountService {
    async fn create_bank_account(&self, new_account: NewBankAccount) -> Result<BankAccount> {
        self.repository.create(new_account).await
    }

    fn get_bank_account(&self, account_id: &str) -> Result<BankAccount> {
        self.repository.get_by_id(account_id)
    }

    fn get_active_bank_accounts(&self) -> Result<Vec<BankAccount>> {
        self.repository.list(Some(true))
    }

    fn get_all_bank_accounts(&self) -> Result<Vec<BankAccount>> {
        self.repository.list(None)
    }
}
