//! Contract orchestrators: creation, activation, deletion.
//!
//! Each public operation is one transactional unit. Creation writes the
//! header, parties, items with their participant splits and payment
//! conditions, then expands the conditions into ledger entries; any failure
//! rolls the whole subtree back. Deletion unwinds the financial footprint
//! before removing the subtree in reverse dependency order.

use log::debug;
use std::sync::Arc;

use super::balance;
use super::code;
use super::contracts_errors::ContractError;
use super::contracts_model::*;
use super::contracts_traits::{ContractRepositoryTrait, ContractServiceTrait};
use crate::assets::AssetResolverTrait;
use crate::auth::AuthContext;
use crate::db::DbTransactionExecutor;
use crate::errors::Result;
use crate::ledger::LedgerServiceTrait;

/// Service for managing contracts (generic over the transaction executor).
pub struct ContractService<E: DbTransactionExecutor + Send + Sync + Clone> {
    repository: Arc<dyn ContractRepositoryTrait>,
    ledger_service: Arc<dyn LedgerServiceTrait>,
    asset_resolver: Arc<dyn AssetResolverTrait>,
    transaction_executor: E,
}

impl<E: DbTransactionExecutor + Send + Sync + Clone> ContractService<E> {
    pub fn new(
        repository: Arc<dyn ContractRepositoryTrait>,
        ledger_service: Arc<dyn LedgerServiceTrait>,
        asset_resolver: Arc<dyn AssetResolverTrait>,
        transaction_executor: E,
    ) -> Self {
        Self {
            repository,
            ledger_service,
            asset_resolver,
            transaction_executor,
        }
    }
}

#[async_trait::async_trait]
impl<E: DbTransactionExecutor + Send + Sync + Clone> ContractServiceTrait for ContractService<E> {
    async fn create_contract(&self, ctx: &AuthContext, input: NewContract) -> Result<Contract> {
        ctx.require_editor()?;
        input.validate()?;

        let repository = self.repository.clone();
        let ledger_service = self.ledger_service.clone();
        let asset_resolver = self.asset_resolver.clone();
        let actor = ctx.user_id.clone();
        let executor = self.transaction_executor.clone();

        executor.execute(move |conn| {
            let contract_code = code::next_code(|| repository.count_in_tx(&mut *conn));

            let contract_balance = balance::balance(
                input.side_a_total,
                input.side_b_total,
                input
                    .payment_conditions
                    .iter()
                    .map(|c| (c.value, c.direction)),
            );

            let contract = repository.create_header_in_tx(
                &input,
                &contract_code,
                contract_balance,
                &actor,
                conn,
            )?;
            debug!(
                "Created contract header {} ({}) with balance {:.2}",
                contract.code, contract.id, contract.balance
            );

            repository.insert_parties_in_tx(&contract.id, &input.parties, conn)?;

            for item in &input.items {
                if let (Some(asset_kind), Some(asset_id)) =
                    (item.item_kind.asset_kind(), item.item_id.as_deref())
                {
                    if !asset_resolver.exists_in_tx(asset_kind, asset_id, conn)? {
                        return Err(ContractError::ItemNotFound {
                            kind: asset_kind.as_str().to_string(),
                            id: asset_id.to_string(),
                        }
                        .into());
                    }
                }
                let created_item = repository.insert_item_in_tx(&contract.id, item, conn)?;
                repository.insert_item_participants_in_tx(
                    &created_item.id,
                    &item.participants,
                    conn,
                )?;
            }

            let conditions =
                repository.insert_conditions_in_tx(&contract.id, &input.payment_conditions, conn)?;

            if !conditions.is_empty() {
                ledger_service.expand_in_tx(
                    &contract.id,
                    &contract.code,
                    contract.contract_date,
                    &conditions,
                    &actor,
                    conn,
                )?;
            }

            Ok(contract)
        })
    }

    async fn activate_contract(&self, ctx: &AuthContext, contract_id: &str) -> Result<Contract> {
        ctx.require_editor()?;

        let contract = self.repository.get_by_id(contract_id)?;

        if contract.status != ContractStatus::Draft {
            return Err(ContractError::InvalidState(format!(
                "Contract {} is '{}', only draft contracts can be activated",
                contract.code,
                contract.status.as_str()
            ))
            .into());
        }

        // Activation trusts the persisted balance column; it is maintained
        // at write time, not recomputed here.
        if !balance::can_activate(contract.balance) {
            return Err(ContractError::Unbalanced {
                difference: contract.balance,
            }
            .into());
        }

        self.repository
            .update_status(contract_id, ContractStatus::Active)
    }

    async fn delete_contract(&self, ctx: &AuthContext, contract_id: &str) -> Result<String> {
        ctx.require_admin()?;

        let repository = self.repository.clone();
        let ledger_service = self.ledger_service.clone();
        let executor = self.transaction_executor.clone();
        let contract_id = contract_id.to_string();

        executor.execute(move |conn| {
            let contract = repository.get_by_id_in_tx(&contract_id, conn)?;

            let unwound =
                ledger_service.unwind_cash_transactions_in_tx(&contract.id, conn)?;
            let (receivables, payables) =
                ledger_service.remove_schedules_in_tx(&contract.id, &contract.code, conn)?;

            repository.delete_item_participants_in_tx(&contract.id, conn)?;
            repository.delete_items_in_tx(&contract.id, conn)?;
            repository.delete_conditions_in_tx(&contract.id, conn)?;
            repository.delete_parties_in_tx(&contract.id, conn)?;
            repository.delete_header_in_tx(&contract.id, conn)?;

            debug!(
                "Deleted contract {}: {} cash transaction(s) reversed, {} receivable(s), {} payable(s) removed",
                contract.code, unwound, receivables, payables
            );

            Ok(format!(
                "Contract {} deleted: {} cash transaction(s) reversed, {} receivable(s) and {} payable(s) removed",
                contract.code, unwound, receivables, payables
            ))
        })
    }

    fn get_contract(&self, contract_id: &str) -> Result<Contract> {
        self.repository.get_by_id(contract_id)
    }

    fn list_contracts(&self, status_filter: Option<ContractStatus>) -> Result<Vec<Contract>> {
        self.repository.list(status_filter)
    }
}
