//! Ledger expansion: turning payment conditions into concrete ledger writes.

use chrono::{NaiveDate, Utc};
use diesel::sqlite::SqliteConnection;
use log::{debug, warn};
use std::sync::Arc;
use uuid::Uuid;

use super::ledger_model::{NewCashTransaction, NewPayable, NewReceivable};
use super::ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
use super::schedule;
use crate::bank_accounts::BankAccountRepositoryTrait;
use crate::constants::{PAYABLE_SUFFIX, RECEIVABLE_SUFFIX};
use crate::contracts::contracts_model::{PaymentCondition, PaymentDirection, PaymentKind};
use crate::errors::Result;

/// Service that expands payment conditions into ledger entries and unwinds
/// them again on contract deletion.
pub struct LedgerService {
    ledger_repository: Arc<dyn LedgerRepositoryTrait>,
    bank_account_repository: Arc<dyn BankAccountRepositoryTrait>,
}

/// Cash register state threaded across the single-payment conditions of one
/// expansion, so consecutive movements chain their balance-after correctly.
struct CashRegister {
    account_id: String,
    running_balance: f64,
}

impl LedgerService {
    pub fn new(
        ledger_repository: Arc<dyn LedgerRepositoryTrait>,
        bank_account_repository: Arc<dyn BankAccountRepositoryTrait>,
    ) -> Self {
        Self {
            ledger_repository,
            bank_account_repository,
        }
    }

    fn installment_code(contract_code: &str, suffix: char, index: i32) -> String {
        format!("{}-{}{:02}", contract_code, suffix, index)
    }

    fn expand_single(
        &self,
        register: &mut Option<CashRegister>,
        condition: &PaymentCondition,
        contract_id: &str,
        contract_code: &str,
        contract_date: NaiveDate,
        actor_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<()> {
        if register.is_none() {
            let Some(account) = self.bank_account_repository.first_active_in_tx(conn)? else {
                // Soft failure: the condition stays recorded on the
                // contract but produces no cash movement.
                warn!(
                    "No active bank account; skipping single payment of {:.2} for contract {}",
                    condition.value, contract_code
                );
                return Ok(());
            };
            *register = Some(CashRegister {
                account_id: account.id,
                running_balance: account.balance,
            });
        }
        let Some(register) = register.as_mut() else {
            return Ok(());
        };
        let signed = match condition.direction {
            PaymentDirection::In => condition.value,
            PaymentDirection::Out => -condition.value,
        };
        let balance_after = register.running_balance + signed;

        self.ledger_repository.insert_cash_transaction_in_tx(
            NewCashTransaction {
                bank_account_id: register.account_id.clone(),
                transaction_date: contract_date,
                direction: condition.direction,
                description: format!("Contract {} settlement", contract_code),
                tags: Some(format!("contract:{}", contract_code)),
                value: condition.value,
                balance_after,
                contract_id: Some(contract_id.to_string()),
                created_by: actor_id.to_string(),
            },
            conn,
        )?;

        self.bank_account_repository
            .set_balance_in_tx(&register.account_id, balance_after, conn)?;
        register.running_balance = balance_after;

        Ok(())
    }

    fn expand_installments(
        &self,
        condition: &PaymentCondition,
        contract_id: &str,
        contract_code: &str,
        conn: &mut SqliteConnection,
    ) -> Result<()> {
        let total = condition.installments.max(1);
        // Plain division: the last installment is NOT remainder-corrected,
        // so the schedule total can drift from the condition value by float
        // rounding. Changing this changes every downstream schedule.
        let per_installment = condition.value / total as f64;
        let registered_on = Utc::now().date_naive();
        let counterparty = format!("Contract {}", contract_code);

        let group_id = match condition.direction {
            PaymentDirection::Out => Some(Uuid::new_v4().to_string()),
            PaymentDirection::In => None,
        };

        for i in 0..total {
            let due = schedule::due_date(condition.start_date, i as u32, condition.frequency);
            let description = format!(
                "Contract {} installment {}/{}",
                contract_code,
                i + 1,
                total
            );

            match condition.direction {
                PaymentDirection::In => {
                    self.ledger_repository.insert_receivable_in_tx(
                        NewReceivable {
                            code: Self::installment_code(contract_code, RECEIVABLE_SUFFIX, i + 1),
                            contract_id: Some(contract_id.to_string()),
                            description,
                            counterparty: counterparty.clone(),
                            value: per_installment,
                            due_date: due,
                            registered_on,
                            installment_index: i + 1,
                            installment_total: total,
                            notes: condition.notes.clone(),
                        },
                        conn,
                    )?;
                }
                PaymentDirection::Out => {
                    self.ledger_repository.insert_payable_in_tx(
                        NewPayable {
                            code: Self::installment_code(contract_code, PAYABLE_SUFFIX, i + 1),
                            description,
                            counterparty: counterparty.clone(),
                            value: per_installment,
                            due_date: due,
                            registered_on,
                            installment_index: i + 1,
                            installment_total: total,
                            group_id: group_id.clone(),
                            notes: condition.notes.clone(),
                        },
                        conn,
                    )?;
                }
            }
        }

        Ok(())
    }
}

impl LedgerServiceTrait for LedgerService {
    fn expand_in_tx(
        &self,
        contract_id: &str,
        contract_code: &str,
        contract_date: NaiveDate,
        conditions: &[PaymentCondition],
        actor_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<()> {
        debug!(
            "Expanding {} payment condition(s) for contract {}",
            conditions.len(),
            contract_code
        );

        let mut register: Option<CashRegister> = None;

        for condition in conditions {
            match condition.payment_kind {
                PaymentKind::Single => self.expand_single(
                    &mut register,
                    condition,
                    contract_id,
                    contract_code,
                    contract_date,
                    actor_id,
                    conn,
                )?,
                PaymentKind::Installment => {
                    self.expand_installments(condition, contract_id, contract_code, conn)?
                }
            }
        }

        Ok(())
    }

    fn unwind_cash_transactions_in_tx(
        &self,
        contract_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<usize> {
        let transactions = self
            .ledger_repository
            .list_cash_transactions_by_contract_in_tx(contract_id, conn)?;

        for transaction in &transactions {
            let adjustment = match transaction.direction {
                PaymentDirection::In => -transaction.value,
                PaymentDirection::Out => transaction.value,
            };
            let account = self
                .bank_account_repository
                .get_by_id_in_tx(&transaction.bank_account_id, conn)?;
            self.bank_account_repository.set_balance_in_tx(
                &account.id,
                account.balance + adjustment,
                conn,
            )?;
        }

        self.ledger_repository
            .delete_cash_transactions_by_contract_in_tx(contract_id, conn)?;

        Ok(transactions.len())
    }

    fn remove_schedules_in_tx(
        &self,
        contract_id: &str,
        contract_code: &str,
        conn: &mut SqliteConnection,
    ) -> Result<(usize, usize)> {
        let receivables = self
            .ledger_repository
            .delete_receivables_by_contract_in_tx(contract_id, conn)?;
        let payables = self
            .ledger_repository
            .delete_payables_by_code_prefix_in_tx(contract_code, conn)?;
        Ok((receivables, payables))
    }
}

#[cfg(test)]
mod amortization_tests {
    use proptest::prelude::*;

    // The per-installment amount is a plain division of the total; this pins
    // down how far the schedule sum may drift for ugly divisors.
    proptest! {
        #[test]
        fn installment_sum_stays_within_float_tolerance(
            total in 0.01f64..1_000_000.0,
            count in 1i32..=60,
        ) {
            let per_installment = total / count as f64;
            let mut sum = 0.0;
            for _ in 0..count {
                sum += per_installment;
            }
            prop_assert!((sum - total).abs() <= count as f64 * 1e-9);
        }
    }

    #[test]
    fn ugly_divisor_drift_is_sub_cent() {
        let total = 100_000.0f64;
        let per = total / 3.0;
        let sum = per + per + per;
        assert!((sum - total).abs() < 0.01);
    }
}
