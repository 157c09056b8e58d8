mod common;

use std::sync::Arc;

use patrimonio_core::assets::{AssetKind, AssetResolver, AssetResolverTrait};
use patrimonio_core::bank_accounts::{
    BankAccountService, BankAccountServiceTrait, NewBankAccount,
};
use patrimonio_core::parties::{PartyResolver, PartyResolverTrait, PartyType};

#[test]
fn asset_resolver_checks_each_table() {
    let app = common::spawn_app();
    common::seed_property(&app, "prop-1", "Beach house");
    common::seed_vehicle(&app, "veh-1", "Truck");

    let resolver = AssetResolver::new(app.pool.clone());
    assert!(resolver.exists(AssetKind::Property, "prop-1").unwrap());
    assert!(resolver.exists(AssetKind::Vehicle, "veh-1").unwrap());
    assert!(!resolver.exists(AssetKind::Property, "veh-1").unwrap());
    assert!(!resolver.exists(AssetKind::Credit, "prop-1").unwrap());
}

#[test]
fn party_resolver_checks_people_and_companies() {
    let app = common::spawn_app();
    common::seed_person(&app, "person-1", "Maria Silva");
    common::seed_company(&app, "co-1", "Holding SA");

    let resolver = PartyResolver::new(app.pool.clone());
    assert!(resolver.exists(PartyType::Person, "person-1").unwrap());
    assert!(resolver.exists(PartyType::Company, "co-1").unwrap());
    // Registries are separate; an id only resolves against its own table.
    assert!(!resolver.exists(PartyType::Company, "person-1").unwrap());
    assert!(!resolver.exists(PartyType::Person, "missing").unwrap());
}

#[tokio::test]
async fn bank_account_service_filters_active_accounts() {
    let app = common::spawn_app();
    let service = BankAccountService::new(Arc::new(
        patrimonio_core::bank_accounts::BankAccountRepository::new(app.pool.clone()),
    ));

    let active = service
        .create_bank_account(NewBankAccount {
            id: None,
            name: "Operating".to_string(),
            bank: Some("Banco Alpha".to_string()),
            currency: "BRL".to_string(),
            balance: 1_000.0,
            is_active: true,
        })
        .await
        .unwrap();
    service
        .create_bank_account(NewBankAccount {
            id: None,
            name: "Dormant".to_string(),
            bank: None,
            currency: "BRL".to_string(),
            balance: 0.0,
            is_active: false,
        })
        .await
        .unwrap();

    assert_eq!(service.get_all_bank_accounts().unwrap().len(), 2);

    let actives = service.get_active_bank_accounts().unwrap();
    assert_eq!(actives.len(), 1);
    assert_eq!(actives[0].id, active.id);

    let fetched = service.get_bank_account(&active.id).unwrap();
    assert_eq!(fetched.name, "Operating");
    assert_eq!(fetched.balance, 1_000.0);
}

#[tokio::test]
async fn bank_account_names_are_validated() {
    let app = common::spawn_app();
    let service = BankAccountService::new(Arc::new(
        patrimonio_core::bank_accounts::BankAccountRepository::new(app.pool.clone()),
    ));

    let err = service
        .create_bank_account(NewBankAccount {
            id: None,
            name: "   ".to_string(),
            bank: None,
            currency: "BRL".to_string(),
            balance: 0.0,
            is_active: true,
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("name"));
}
