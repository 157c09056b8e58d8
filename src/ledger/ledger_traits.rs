//! Ledger repository and service traits.

use chrono::NaiveDate;
use diesel::sqlite::SqliteConnection;

use super::ledger_model::{
    AccountPayable, AccountReceivable, CashTransaction, NewCashTransaction, NewPayable,
    NewReceivable,
};
use crate::contracts::contracts_model::PaymentCondition;
use crate::errors::Result;

/// Persistence contract for the derived ledger tables.
///
/// Writes only happen inside an orchestrator transaction, so every mutation
/// takes the transaction's connection.
pub trait LedgerRepositoryTrait: Send + Sync {
    fn insert_cash_transaction_in_tx(
        &self,
        new_transaction: NewCashTransaction,
        conn: &mut SqliteConnection,
    ) -> Result<CashTransaction>;

    fn insert_receivable_in_tx(
        &self,
        new_receivable: NewReceivable,
        conn: &mut SqliteConnection,
    ) -> Result<AccountReceivable>;

    fn insert_payable_in_tx(
        &self,
        new_payable: NewPayable,
        conn: &mut SqliteConnection,
    ) -> Result<AccountPayable>;

    fn list_cash_transactions_by_contract(&self, contract_id: &str)
        -> Result<Vec<CashTransaction>>;

    fn list_cash_transactions_by_contract_in_tx(
        &self,
        contract_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Vec<CashTransaction>>;

    fn list_receivables_by_contract(&self, contract_id: &str) -> Result<Vec<AccountReceivable>>;

    fn list_payables_by_code_prefix(&self, code_prefix: &str) -> Result<Vec<AccountPayable>>;

    fn delete_cash_transactions_by_contract_in_tx(
        &self,
        contract_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<usize>;

    fn delete_receivables_by_contract_in_tx(
        &self,
        contract_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<usize>;

    /// Payables carry no contract foreign key; deletion matches
    /// `code LIKE '{contractCode}%'`.
    fn delete_payables_by_code_prefix_in_tx(
        &self,
        code_prefix: &str,
        conn: &mut SqliteConnection,
    ) -> Result<usize>;
}

/// The ledger expander and its deletion-side inverse.
pub trait LedgerServiceTrait: Send + Sync {
    /// Expands payment conditions into concrete ledger writes: single
    /// conditions become settled cash transactions against the first active
    /// bank account (threading its running balance); installment conditions
    /// become receivable/payable schedules.
    fn expand_in_tx(
        &self,
        contract_id: &str,
        contract_code: &str,
        contract_date: NaiveDate,
        conditions: &[PaymentCondition],
        actor_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<()>;

    /// Reverses every cash transaction tied to a contract against its bank
    /// account balance, then deletes the transactions. Returns how many
    /// transactions were unwound.
    fn unwind_cash_transactions_in_tx(
        &self,
        contract_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<usize>;

    /// Deletes the contract's receivable and payable schedules. Receivables
    /// match by contract id; payables only by code prefix. Returns the
    /// deleted (receivables, payables) counts.
    fn remove_schedules_in_tx(
        &self,
        contract_id: &str,
        contract_code: &str,
        conn: &mut SqliteConnection,
    ) -> Result<(usize, usize)>;
}
