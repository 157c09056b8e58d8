use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::bank_accounts_model::{BankAccount, BankAccountDB, NewBankAccount};
use super::bank_accounts_traits::BankAccountRepositoryTrait;
use crate::db::get_connection;
use crate::errors::Result;
use crate::schema::bank_accounts;

/// Repository for managing bank account data in the database.
pub struct BankAccountRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl BankAccountRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BankAccountRepositoryTrait for BankAccountRepository {
    async fn create(&self, new_account: NewBankAccount) -> Result<BankAccount> {
        new_account.validate()?;
        let mut conn = get_connection(&self.pool)?;

        let now = Utc::now().naive_utc();
        let account_db = BankAccountDB {
            id: new_account
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_account.name,
            bank: new_account.bank,
            currency: new_account.currency,
            balance: new_account.balance,
            is_active: new_account.is_active,
            created_at: now,
            updated_at: now,
        };

        diesel::insert_into(bank_accounts::table)
            .values(&account_db)
            .execute(&mut conn)?;

        Ok(account_db.into())
    }

    fn get_by_id(&self, account_id: &str) -> Result<BankAccount> {
        let mut conn = get_connection(&self.pool)?;

        let account = bank_accounts::table
            .select(BankAccountDB::as_select())
            .find(account_id)
            .first::<BankAccountDB>(&mut conn)?;

        Ok(account.into())
    }

    fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<BankAccount>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = bank_accounts::table.into_boxed();
        if let Some(active) = is_active_filter {
            query = query.filter(bank_accounts::is_active.eq(active));
        }

        let results = query
            .select(BankAccountDB::as_select())
            .order(bank_accounts::created_at.asc())
            .load::<BankAccountDB>(&mut conn)?;

        Ok(results.into_iter().map(BankAccount::from).collect())
    }

    fn first_active_in_tx(&self, conn: &mut SqliteConnection) -> Result<Option<BankAccount>> {
        let account = bank_accounts::table
            .filter(bank_accounts::is_active.eq(true))
            .select(BankAccountDB::as_select())
            .order(bank_accounts::created_at.asc())
            .first::<BankAccountDB>(conn)
            .optional()?;

        Ok(account.map(BankAccount::from))
    }

    fn get_by_id_in_tx(
        &self,
        account_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<BankAccount> {
        let account = bank_accounts::table
            .select(BankAccountDB::as_select())
            .find(account_id)
            .first::<BankAccountDB>(conn)?;

        Ok(account.into())
    }

    fn set_balance_in_tx(
        &self,
        account_id: &str,
        new_balance: f64,
        conn: &mut SqliteConnection,
    ) -> Result<()> {
        diesel::update(bank_accounts::table.find(account_id))
            .set((
                bank_accounts::balance.eq(new_balance),
                bank_accounts::updated_at.eq(Utc::now().naive_utc()),
            ))
            .execute(conn)?;

        Ok(())
    }
}
