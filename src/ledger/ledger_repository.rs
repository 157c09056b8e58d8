use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::ledger_model::*;
use super::ledger_traits::LedgerRepositoryTrait;
use crate::db::get_connection;
use crate::errors::Result;
use crate::schema::{accounts_payable, accounts_receivable, cash_transactions};

/// Repository for the derived ledger tables.
pub struct LedgerRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl LedgerRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl LedgerRepositoryTrait for LedgerRepository {
    fn insert_cash_transaction_in_tx(
        &self,
        new_transaction: NewCashTransaction,
        conn: &mut SqliteConnection,
    ) -> Result<CashTransaction> {
        let transaction_db = CashTransactionDB {
            id: Uuid::new_v4().to_string(),
            bank_account_id: new_transaction.bank_account_id,
            transaction_date: new_transaction.transaction_date,
            direction: new_transaction.direction.as_str().to_string(),
            description: new_transaction.description,
            tags: new_transaction.tags,
            value: new_transaction.value,
            balance_after: new_transaction.balance_after,
            contract_id: new_transaction.contract_id,
            status: CASH_STATUS_SETTLED.to_string(),
            created_by: new_transaction.created_by,
            created_at: Utc::now().naive_utc(),
        };

        diesel::insert_into(cash_transactions::table)
            .values(&transaction_db)
            .execute(conn)?;

        transaction_db.try_into()
    }

    fn insert_receivable_in_tx(
        &self,
        new_receivable: NewReceivable,
        conn: &mut SqliteConnection,
    ) -> Result<AccountReceivable> {
        let receivable_db = AccountReceivableDB {
            id: Uuid::new_v4().to_string(),
            code: new_receivable.code,
            contract_id: new_receivable.contract_id,
            description: new_receivable.description,
            counterparty: new_receivable.counterparty,
            original_value: new_receivable.value,
            remaining_value: new_receivable.value,
            due_date: new_receivable.due_date,
            registered_on: new_receivable.registered_on,
            status: InstallmentStatus::Open.as_str().to_string(),
            installment_index: new_receivable.installment_index,
            installment_total: new_receivable.installment_total,
            notes: new_receivable.notes,
        };

        diesel::insert_into(accounts_receivable::table)
            .values(&receivable_db)
            .execute(conn)?;

        receivable_db.try_into()
    }

    fn insert_payable_in_tx(
        &self,
        new_payable: NewPayable,
        conn: &mut SqliteConnection,
    ) -> Result<AccountPayable> {
        let payable_db = AccountPayableDB {
            id: Uuid::new_v4().to_string(),
            code: new_payable.code,
            description: new_payable.description,
            counterparty: new_payable.counterparty,
            original_value: new_payable.value,
            remaining_value: new_payable.value,
            due_date: new_payable.due_date,
            registered_on: new_payable.registered_on,
            status: InstallmentStatus::Open.as_str().to_string(),
            installment_index: new_payable.installment_index,
            installment_total: new_payable.installment_total,
            group_id: new_payable.group_id,
            notes: new_payable.notes,
        };

        diesel::insert_into(accounts_payable::table)
            .values(&payable_db)
            .execute(conn)?;

        payable_db.try_into()
    }

    fn list_cash_transactions_by_contract(
        &self,
        contract_id: &str,
    ) -> Result<Vec<CashTransaction>> {
        let mut conn = get_connection(&self.pool)?;
        self.list_cash_transactions_by_contract_in_tx(contract_id, &mut conn)
    }

    fn list_cash_transactions_by_contract_in_tx(
        &self,
        contract_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Vec<CashTransaction>> {
        let rows = cash_transactions::table
            .filter(cash_transactions::contract_id.eq(contract_id))
            .select(CashTransactionDB::as_select())
            .order(cash_transactions::created_at.asc())
            .load::<CashTransactionDB>(conn)?;

        rows.into_iter().map(CashTransaction::try_from).collect()
    }

    fn list_receivables_by_contract(&self, contract_id: &str) -> Result<Vec<AccountReceivable>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = accounts_receivable::table
            .filter(accounts_receivable::contract_id.eq(contract_id))
            .select(AccountReceivableDB::as_select())
            .order(accounts_receivable::installment_index.asc())
            .load::<AccountReceivableDB>(&mut conn)?;

        rows.into_iter().map(AccountReceivable::try_from).collect()
    }

    fn list_payables_by_code_prefix(&self, code_prefix: &str) -> Result<Vec<AccountPayable>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = accounts_payable::table
            .filter(accounts_payable::code.like(format!("{}%", code_prefix)))
            .select(AccountPayableDB::as_select())
            .order(accounts_payable::installment_index.asc())
            .load::<AccountPayableDB>(&mut conn)?;

        rows.into_iter().map(AccountPayable::try_from).collect()
    }

    fn delete_cash_transactions_by_contract_in_tx(
        &self,
        contract_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<usize> {
        let deleted = diesel::delete(
            cash_transactions::table.filter(cash_transactions::contract_id.eq(contract_id)),
        )
        .execute(conn)?;
        Ok(deleted)
    }

    fn delete_receivables_by_contract_in_tx(
        &self,
        contract_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<usize> {
        let deleted = diesel::delete(
            accounts_receivable::table.filter(accounts_receivable::contract_id.eq(contract_id)),
        )
        .execute(conn)?;
        Ok(deleted)
    }

    fn delete_payables_by_code_prefix_in_tx(
        &self,
        code_prefix: &str,
        conn: &mut SqliteConnection,
    ) -> Result<usize> {
        let deleted = diesel::delete(
            accounts_payable::table
                .filter(accounts_payable::code.like(format!("{}%", code_prefix))),
        )
        .execute(conn)?;
        Ok(deleted)
    }
}
