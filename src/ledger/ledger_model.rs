//! Derived ledger entities.
//!
//! Cash transactions come from single payment conditions; receivable and
//! payable schedules come from installment conditions. None of these are
//! edited by this core after creation; deletion reverses them wholesale.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::contracts::contracts_errors::ContractError;
use crate::contracts::contracts_model::PaymentDirection;
use crate::errors::{Error, Result};

/// Cash transactions are written already settled.
pub const CASH_STATUS_SETTLED: &str = "settled";

/// Status of a receivable/payable installment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InstallmentStatus {
    #[default]
    Open,
    Overdue,
    PartiallyPaid,
    Settled,
}

impl InstallmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallmentStatus::Open => "open",
            InstallmentStatus::Overdue => "overdue",
            InstallmentStatus::PartiallyPaid => "partially_paid",
            InstallmentStatus::Settled => "settled",
        }
    }

    pub fn from_str(value: &str) -> Result<Self> {
        match value {
            "open" => Ok(InstallmentStatus::Open),
            "overdue" => Ok(InstallmentStatus::Overdue),
            "partially_paid" => Ok(InstallmentStatus::PartiallyPaid),
            "settled" => Ok(InstallmentStatus::Settled),
            other => Err(ContractError::InvalidData(format!(
                "Unknown installment status '{}'",
                other
            ))
            .into()),
        }
    }
}

/// A single settled cash-register movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashTransaction {
    pub id: String,
    pub bank_account_id: String,
    pub transaction_date: NaiveDate,
    pub direction: PaymentDirection,
    pub description: String,
    pub tags: Option<String>,
    pub value: f64,
    /// Bank account balance right after this movement settled.
    pub balance_after: f64,
    pub contract_id: Option<String>,
    pub status: String,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

#[derive(Queryable, Selectable, Identifiable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::cash_transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CashTransactionDB {
    pub id: String,
    pub bank_account_id: String,
    pub transaction_date: NaiveDate,
    pub direction: String,
    pub description: String,
    pub tags: Option<String>,
    pub value: f64,
    pub balance_after: f64,
    pub contract_id: Option<String>,
    pub status: String,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<CashTransactionDB> for CashTransaction {
    type Error = Error;

    fn try_from(db: CashTransactionDB) -> Result<Self> {
        Ok(CashTransaction {
            id: db.id,
            bank_account_id: db.bank_account_id,
            transaction_date: db.transaction_date,
            direction: PaymentDirection::from_str(&db.direction)?,
            description: db.description,
            tags: db.tags,
            value: db.value,
            balance_after: db.balance_after,
            contract_id: db.contract_id,
            status: db.status,
            created_by: db.created_by,
            created_at: db.created_at,
        })
    }
}

/// Input for one cash-register entry.
#[derive(Debug, Clone)]
pub struct NewCashTransaction {
    pub bank_account_id: String,
    pub transaction_date: NaiveDate,
    pub direction: PaymentDirection,
    pub description: String,
    pub tags: Option<String>,
    pub value: f64,
    pub balance_after: f64,
    pub contract_id: Option<String>,
    pub created_by: String,
}

/// One receivable installment. Linked to its contract by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountReceivable {
    pub id: String,
    pub code: String,
    pub contract_id: Option<String>,
    pub description: String,
    pub counterparty: String,
    pub original_value: f64,
    pub remaining_value: f64,
    pub due_date: NaiveDate,
    pub registered_on: NaiveDate,
    pub status: InstallmentStatus,
    pub installment_index: i32,
    pub installment_total: i32,
    pub notes: Option<String>,
}

#[derive(Queryable, Selectable, Identifiable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::accounts_receivable)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountReceivableDB {
    pub id: String,
    pub code: String,
    pub contract_id: Option<String>,
    pub description: String,
    pub counterparty: String,
    pub original_value: f64,
    pub remaining_value: f64,
    pub due_date: NaiveDate,
    pub registered_on: NaiveDate,
    pub status: String,
    pub installment_index: i32,
    pub installment_total: i32,
    pub notes: Option<String>,
}

impl TryFrom<AccountReceivableDB> for AccountReceivable {
    type Error = Error;

    fn try_from(db: AccountReceivableDB) -> Result<Self> {
        Ok(AccountReceivable {
            id: db.id,
            code: db.code,
            contract_id: db.contract_id,
            description: db.description,
            counterparty: db.counterparty,
            original_value: db.original_value,
            remaining_value: db.remaining_value,
            due_date: db.due_date,
            registered_on: db.registered_on,
            status: InstallmentStatus::from_str(&db.status)?,
            installment_index: db.installment_index,
            installment_total: db.installment_total,
            notes: db.notes,
        })
    }
}

/// One payable installment. Carries no contract foreign key: linkage is by
/// the `{contractCode}-P{NN}` code prefix, and installments from the same
/// condition share a group id for bulk edit/delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayable {
    pub id: String,
    pub code: String,
    pub description: String,
    pub counterparty: String,
    pub original_value: f64,
    pub remaining_value: f64,
    pub due_date: NaiveDate,
    pub registered_on: NaiveDate,
    pub status: InstallmentStatus,
    pub installment_index: i32,
    pub installment_total: i32,
    pub group_id: Option<String>,
    pub notes: Option<String>,
}

#[derive(Queryable, Selectable, Identifiable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::accounts_payable)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountPayableDB {
    pub id: String,
    pub code: String,
    pub description: String,
    pub counterparty: String,
    pub original_value: f64,
    pub remaining_value: f64,
    pub due_date: NaiveDate,
    pub registered_on: NaiveDate,
    pub status: String,
    pub installment_index: i32,
    pub installment_total: i32,
    pub group_id: Option<String>,
    pub notes: Option<String>,
}

impl TryFrom<AccountPayableDB> for AccountPayable {
    type Error = Error;

    fn try_from(db: AccountPayableDB) -> Result<Self> {
        Ok(AccountPayable {
            id: db.id,
            code: db.code,
            description: db.description,
            counterparty: db.counterparty,
            original_value: db.original_value,
            remaining_value: db.remaining_value,
            due_date: db.due_date,
            registered_on: db.registered_on,
            status: InstallmentStatus::from_str(&db.status)?,
            installment_index: db.installment_index,
            installment_total: db.installment_total,
            group_id: db.group_id,
            notes: db.notes,
        })
    }
}

/// Input for one receivable installment row.
#[derive(Debug, Clone)]
pub struct NewReceivable {
    pub code: String,
    pub contract_id: Option<String>,
    pub description: String,
    pub counterparty: String,
    pub value: f64,
    pub due_date: NaiveDate,
    pub registered_on: NaiveDate,
    pub installment_index: i32,
    pub installment_total: i32,
    pub notes: Option<String>,
}

/// Input for one payable installment row.
#[derive(Debug, Clone)]
pub struct NewPayable {
    pub code: String,
    pub description: String,
    pub counterparty: String,
    pub value: f64,
    pub due_date: NaiveDate,
    pub registered_on: NaiveDate,
    pub installment_index: i32,
    pub installment_total: i32,
    pub group_id: Option<String>,
    pub notes: Option<String>,
}
