// Shared across the integration test binaries; not every binary uses every
// helper.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use diesel::prelude::*;
use tempfile::TempDir;

use patrimonio_core::assets::AssetResolver;
use patrimonio_core::auth::{AuthContext, Role};
use patrimonio_core::bank_accounts::{
    BankAccount, BankAccountRepository, BankAccountRepositoryTrait, NewBankAccount,
};
use patrimonio_core::contracts::{ContractRepository, ContractService};
use patrimonio_core::db::{self, DbPool};
use patrimonio_core::ledger::{LedgerRepository, LedgerService};
use patrimonio_core::schema::{companies, people, properties, vehicles};

/// Everything a test needs: a throwaway database plus the wired-up services.
pub struct TestApp {
    pub pool: Arc<DbPool>,
    pub contracts: ContractService<Arc<DbPool>>,
    pub contract_repo: Arc<ContractRepository>,
    pub ledger_repo: Arc<LedgerRepository>,
    pub bank_repo: Arc<BankAccountRepository>,
    _dir: TempDir,
}

pub fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir
        .path()
        .join("test.db")
        .to_str()
        .expect("Invalid temp path")
        .to_string();

    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");

    let contract_repo = Arc::new(ContractRepository::new(pool.clone()));
    let ledger_repo = Arc::new(LedgerRepository::new(pool.clone()));
    let bank_repo = Arc::new(BankAccountRepository::new(pool.clone()));
    let asset_resolver = Arc::new(AssetResolver::new(pool.clone()));
    let ledger_service = Arc::new(LedgerService::new(ledger_repo.clone(), bank_repo.clone()));

    let contracts = ContractService::new(
        contract_repo.clone(),
        ledger_service,
        asset_resolver,
        pool.clone(),
    );

    TestApp {
        pool,
        contracts,
        contract_repo,
        ledger_repo,
        bank_repo,
        _dir: dir,
    }
}

pub fn admin() -> AuthContext {
    AuthContext::new("admin-user", Role::Admin)
}

pub fn editor() -> AuthContext {
    AuthContext::new("editor-user", Role::Editor)
}

pub fn viewer() -> AuthContext {
    AuthContext::new("viewer-user", Role::Viewer)
}

pub async fn seed_bank_account(app: &TestApp, name: &str, balance: f64) -> BankAccount {
    app.bank_repo
        .create(NewBankAccount {
            id: None,
            name: name.to_string(),
            bank: Some("Test Bank".to_string()),
            currency: "BRL".to_string(),
            balance,
            is_active: true,
        })
        .await
        .expect("Failed to seed bank account")
}

pub fn seed_property(app: &TestApp, id: &str, name: &str) {
    let mut conn = app.pool.get().unwrap();
    diesel::insert_into(properties::table)
        .values((
            properties::id.eq(id),
            properties::name.eq(name),
            properties::created_at.eq(Utc::now().naive_utc()),
        ))
        .execute(&mut conn)
        .expect("Failed to seed property");
}

pub fn seed_vehicle(app: &TestApp, id: &str, name: &str) {
    let mut conn = app.pool.get().unwrap();
    diesel::insert_into(vehicles::table)
        .values((
            vehicles::id.eq(id),
            vehicles::name.eq(name),
            vehicles::created_at.eq(Utc::now().naive_utc()),
        ))
        .execute(&mut conn)
        .expect("Failed to seed vehicle");
}

pub fn seed_person(app: &TestApp, id: &str, name: &str) {
    let mut conn = app.pool.get().unwrap();
    diesel::insert_into(people::table)
        .values((
            people::id.eq(id),
            people::name.eq(name),
            people::document.eq(Some("123.456.789-00")),
            people::created_at.eq(Utc::now().naive_utc()),
        ))
        .execute(&mut conn)
        .expect("Failed to seed person");
}

pub fn seed_company(app: &TestApp, id: &str, name: &str) {
    let mut conn = app.pool.get().unwrap();
    diesel::insert_into(companies::table)
        .values((
            companies::id.eq(id),
            companies::name.eq(name),
            companies::document.eq(Some("12.345.678/0001-00")),
            companies::created_at.eq(Utc::now().naive_utc()),
        ))
        .execute(&mut conn)
        .expect("Failed to seed company");
}

/// Row counts across the whole contract subtree, for rollback assertions.
pub fn subtree_row_counts(app: &TestApp) -> (i64, i64, i64, i64, i64, i64, i64, i64) {
    use patrimonio_core::schema::{
        accounts_payable, accounts_receivable, cash_transactions, contract_item_participants,
        contract_items, contract_parties, contract_payment_conditions, contracts,
    };

    let mut conn = app.pool.get().unwrap();
    (
        contracts::table.count().get_result(&mut conn).unwrap(),
        contract_parties::table.count().get_result(&mut conn).unwrap(),
        contract_items::table.count().get_result(&mut conn).unwrap(),
        contract_item_participants::table
            .count()
            .get_result(&mut conn)
            .unwrap(),
        contract_payment_conditions::table
            .count()
            .get_result(&mut conn)
            .unwrap(),
        cash_transactions::table.count().get_result(&mut conn).unwrap(),
        accounts_receivable::table.count().get_result(&mut conn).unwrap(),
        accounts_payable::table.count().get_result(&mut conn).unwrap(),
    )
}
