mod common;

use chrono::NaiveDate;

use patrimonio_core::contracts::{
    ContractServiceTrait, Frequency, NewContract, NewPaymentCondition, PaymentDirection,
    PaymentKind,
};
use patrimonio_core::ledger::{InstallmentStatus, LedgerRepositoryTrait};

fn contract_input(side_a_total: f64, side_b_total: f64) -> NewContract {
    NewContract {
        contract_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        notes: None,
        attachments: Vec::new(),
        status: None,
        side_a_total,
        side_b_total,
        parties: Vec::new(),
        items: Vec::new(),
        payment_conditions: Vec::new(),
    }
}

fn installment_condition(
    value: f64,
    direction: PaymentDirection,
    installments: i32,
    frequency: Option<Frequency>,
    start: NaiveDate,
) -> NewPaymentCondition {
    NewPaymentCondition {
        value,
        direction,
        payment_kind: PaymentKind::Installment,
        installments: Some(installments),
        frequency,
        start_date: start,
        payment_method: None,
        notes: None,
    }
}

#[tokio::test]
async fn monthly_receivable_schedule_has_exact_codes_amounts_and_dates() {
    let app = common::spawn_app();

    let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let mut input = contract_input(0.0, 120_000.0);
    input.payment_conditions.push(installment_condition(
        120_000.0,
        PaymentDirection::In,
        12,
        Some(Frequency::Monthly),
        start,
    ));

    let created = app
        .contracts
        .create_contract(&common::editor(), input)
        .await
        .unwrap();
    assert_eq!(created.balance, 0.0);

    let receivables = app
        .ledger_repo
        .list_receivables_by_contract(&created.id)
        .unwrap();
    assert_eq!(receivables.len(), 12);

    for (i, receivable) in receivables.iter().enumerate() {
        let index = i as i32 + 1;
        assert_eq!(receivable.code, format!("{}-R{:02}", created.code, index));
        assert_eq!(receivable.original_value, 10_000.0);
        assert_eq!(receivable.remaining_value, 10_000.0);
        assert_eq!(receivable.status, InstallmentStatus::Open);
        assert_eq!(receivable.installment_index, index);
        assert_eq!(receivable.installment_total, 12);
        assert_eq!(
            receivable.due_date,
            NaiveDate::from_ymd_opt(2024, i as u32 + 1, 15).unwrap()
        );
        assert_eq!(receivable.contract_id.as_deref(), Some(created.id.as_str()));
    }
}

#[tokio::test]
async fn outgoing_installments_become_payables_sharing_a_group() {
    let app = common::spawn_app();

    let start = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let mut input = contract_input(30_000.0, 0.0);
    input.payment_conditions.push(installment_condition(
        30_000.0,
        PaymentDirection::Out,
        3,
        Some(Frequency::Monthly),
        start,
    ));

    let created = app
        .contracts
        .create_contract(&common::editor(), input)
        .await
        .unwrap();

    let payables = app
        .ledger_repo
        .list_payables_by_code_prefix(&created.code)
        .unwrap();
    assert_eq!(payables.len(), 3);

    let group = payables[0].group_id.clone();
    assert!(group.is_some());
    for (i, payable) in payables.iter().enumerate() {
        let index = i as i32 + 1;
        assert_eq!(payable.code, format!("{}-P{:02}", created.code, index));
        assert_eq!(payable.original_value, 10_000.0);
        assert_eq!(payable.group_id, group);
        assert_eq!(
            payable.due_date,
            NaiveDate::from_ymd_opt(2024, 6 + i as u32, 10).unwrap()
        );
    }
}

#[tokio::test]
async fn month_end_start_clamps_to_shorter_months() {
    let app = common::spawn_app();

    let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    let mut input = contract_input(0.0, 9_000.0);
    input.payment_conditions.push(installment_condition(
        9_000.0,
        PaymentDirection::In,
        3,
        Some(Frequency::Monthly),
        start,
    ));

    let created = app
        .contracts
        .create_contract(&common::editor(), input)
        .await
        .unwrap();

    let receivables = app
        .ledger_repo
        .list_receivables_by_contract(&created.id)
        .unwrap();
    let due_dates: Vec<NaiveDate> = receivables.iter().map(|r| r.due_date).collect();
    assert_eq!(
        due_dates,
        vec![
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        ]
    );
}

#[tokio::test]
async fn missing_frequency_leaves_every_installment_on_the_start_date() {
    let app = common::spawn_app();

    let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    let mut input = contract_input(0.0, 4_000.0);
    input.payment_conditions.push(installment_condition(
        4_000.0,
        PaymentDirection::In,
        4,
        None,
        start,
    ));

    let created = app
        .contracts
        .create_contract(&common::editor(), input)
        .await
        .unwrap();

    let receivables = app
        .ledger_repo
        .list_receivables_by_contract(&created.id)
        .unwrap();
    assert_eq!(receivables.len(), 4);
    assert!(receivables.iter().all(|r| r.due_date == start));
}

#[tokio::test]
async fn single_condition_without_active_account_is_skipped() {
    let app = common::spawn_app();

    let mut input = contract_input(2_000.0, 0.0);
    input.payment_conditions.push(NewPaymentCondition {
        value: 2_000.0,
        direction: PaymentDirection::Out,
        payment_kind: PaymentKind::Single,
        installments: None,
        frequency: None,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        payment_method: None,
        notes: None,
    });

    // Creation succeeds; the condition simply produces no cash movement.
    let created = app
        .contracts
        .create_contract(&common::editor(), input)
        .await
        .unwrap();

    let transactions = app
        .ledger_repo
        .list_cash_transactions_by_contract(&created.id)
        .unwrap();
    assert!(transactions.is_empty());
}

#[tokio::test]
async fn deletion_clears_receivables_and_prefix_matched_payables() {
    let app = common::spawn_app();

    let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let mut input = contract_input(12_000.0, 12_000.0);
    input.payment_conditions.push(installment_condition(
        12_000.0,
        PaymentDirection::In,
        6,
        Some(Frequency::Monthly),
        start,
    ));
    input.payment_conditions.push(installment_condition(
        12_000.0,
        PaymentDirection::Out,
        6,
        Some(Frequency::Monthly),
        start,
    ));

    let created = app
        .contracts
        .create_contract(&common::editor(), input)
        .await
        .unwrap();

    assert_eq!(
        app.ledger_repo
            .list_receivables_by_contract(&created.id)
            .unwrap()
            .len(),
        6
    );
    assert_eq!(
        app.ledger_repo
            .list_payables_by_code_prefix(&created.code)
            .unwrap()
            .len(),
        6
    );

    let message = app
        .contracts
        .delete_contract(&common::admin(), &created.id)
        .await
        .unwrap();
    assert!(message.contains("6 receivable(s)"));
    assert!(message.contains("6 payable(s)"));

    assert!(app
        .ledger_repo
        .list_receivables_by_contract(&created.id)
        .unwrap()
        .is_empty());
    assert!(app
        .ledger_repo
        .list_payables_by_code_prefix(&created.code)
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn uneven_split_keeps_plain_division_amounts() {
    let app = common::spawn_app();

    let start = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    let mut input = contract_input(0.0, 100_000.0);
    input.payment_conditions.push(installment_condition(
        100_000.0,
        PaymentDirection::In,
        3,
        Some(Frequency::Monthly),
        start,
    ));

    let created = app
        .contracts
        .create_contract(&common::editor(), input)
        .await
        .unwrap();

    let receivables = app
        .ledger_repo
        .list_receivables_by_contract(&created.id)
        .unwrap();
    assert_eq!(receivables.len(), 3);

    let expected = 100_000.0 / 3.0;
    for receivable in &receivables {
        assert_eq!(receivable.original_value, expected);
    }
    let sum: f64 = receivables.iter().map(|r| r.original_value).sum();
    assert!((sum - 100_000.0).abs() < 0.01);
}
