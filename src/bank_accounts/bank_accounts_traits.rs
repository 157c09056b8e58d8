//! Bank account repository and service traits.

use async_trait::async_trait;
use diesel::sqlite::SqliteConnection;

use super::bank_accounts_model::{BankAccount, NewBankAccount};
use crate::errors::Result;

/// Persistence contract for bank accounts.
///
/// The `_in_tx` methods take a connection owned by an open transaction so the
/// ledger expander and the deletion orchestrator can thread balance writes
/// through the same atomic unit as the rest of their work.
#[async_trait]
pub trait BankAccountRepositoryTrait: Send + Sync {
    async fn create(&self, new_account: NewBankAccount) -> Result<BankAccount>;

    fn get_by_id(&self, account_id: &str) -> Result<BankAccount>;

    fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<BankAccount>>;

    /// First active account, in insertion order. The settlement engine
    /// settles single payments against whichever active account comes first;
    /// multi-account routing is not modelled.
    fn first_active_in_tx(&self, conn: &mut SqliteConnection) -> Result<Option<BankAccount>>;

    fn get_by_id_in_tx(&self, account_id: &str, conn: &mut SqliteConnection)
        -> Result<BankAccount>;

    fn set_balance_in_tx(
        &self,
        account_id: &str,
        new_balance: f64,
        conn: &mut SqliteConnection,
    ) -> Result<()>;
}

/// Business-facing surface for bank accounts.
#[async_trait]
pub trait BankAccountServiceTrait: Send + Sync {
    async fn create_bank_account(&self, new_account: NewBankAccount) -> Result<BankAccount>;

    fn get_bank_account(&self, account_id: &str) -> Result<BankAccount>;

    fn get_active_bank_accounts(&self) -> Result<Vec<BankAccount>>;

    fn get_all_bank_accounts(&self) -> Result<Vec<BankAccount>>;
}
