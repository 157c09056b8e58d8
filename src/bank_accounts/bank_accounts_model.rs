//! Bank account domain models.
//!
//! The settlement engine only ever mutates `balance`; everything else is
//! plain registry data owned by the back office.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a bank account.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub id: String,
    pub name: String,
    pub bank: Option<String>,
    pub currency: String,
    pub balance: f64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for bank accounts.
#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::bank_accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BankAccountDB {
    pub id: String,
    pub name: String,
    pub bank: Option<String>,
    pub currency: String,
    pub balance: f64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<BankAccountDB> for BankAccount {
    fn from(db: BankAccountDB) -> Self {
        BankAccount {
            id: db.id,
            name: db.name,
            bank: db.bank,
            currency: db.currency,
            balance: db.balance,
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

/// Input model for creating a new bank account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBankAccount {
    pub id: Option<String>,
    pub name: String,
    pub bank: Option<String>,
    pub currency: String,
    pub balance: f64,
    pub is_active: bool,
}

impl NewBankAccount {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Bank account name cannot be empty".to_string(),
            )));
        }
        if self.currency.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Currency cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
