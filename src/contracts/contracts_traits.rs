//! Contract repository and service traits.

use async_trait::async_trait;
use diesel::sqlite::SqliteConnection;

use super::contracts_model::*;
use crate::auth::AuthContext;
use crate::errors::Result;

/// Persistence contract for the contract subtree.
///
/// The orchestrators compose the `_in_tx` methods into a single transaction;
/// each method is one table touch.
pub trait ContractRepositoryTrait: Send + Sync {
    /// Unfiltered row count of the contracts table, used by code allocation.
    fn count_in_tx(&self, conn: &mut SqliteConnection) -> Result<i64>;

    fn create_header_in_tx(
        &self,
        new_contract: &NewContract,
        code: &str,
        balance: f64,
        created_by: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Contract>;

    fn insert_parties_in_tx(
        &self,
        contract_id: &str,
        parties: &[NewContractParty],
        conn: &mut SqliteConnection,
    ) -> Result<Vec<ContractParty>>;

    fn insert_item_in_tx(
        &self,
        contract_id: &str,
        item: &NewContractItem,
        conn: &mut SqliteConnection,
    ) -> Result<ContractItem>;

    fn insert_item_participants_in_tx(
        &self,
        contract_item_id: &str,
        participants: &[NewItemParticipant],
        conn: &mut SqliteConnection,
    ) -> Result<Vec<ContractItemParticipant>>;

    fn insert_conditions_in_tx(
        &self,
        contract_id: &str,
        conditions: &[NewPaymentCondition],
        conn: &mut SqliteConnection,
    ) -> Result<Vec<PaymentCondition>>;

    fn get_by_id(&self, contract_id: &str) -> Result<Contract>;

    fn get_by_id_in_tx(&self, contract_id: &str, conn: &mut SqliteConnection) -> Result<Contract>;

    fn list(&self, status_filter: Option<ContractStatus>) -> Result<Vec<Contract>>;

    fn list_parties(&self, contract_id: &str) -> Result<Vec<ContractParty>>;

    fn list_items(&self, contract_id: &str) -> Result<Vec<ContractItem>>;

    fn list_item_participants(&self, contract_item_id: &str)
        -> Result<Vec<ContractItemParticipant>>;

    fn list_conditions(&self, contract_id: &str) -> Result<Vec<PaymentCondition>>;

    fn update_status(&self, contract_id: &str, status: ContractStatus) -> Result<Contract>;

    fn delete_item_participants_in_tx(
        &self,
        contract_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<usize>;

    fn delete_items_in_tx(&self, contract_id: &str, conn: &mut SqliteConnection) -> Result<usize>;

    fn delete_conditions_in_tx(
        &self,
        contract_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<usize>;

    fn delete_parties_in_tx(&self, contract_id: &str, conn: &mut SqliteConnection)
        -> Result<usize>;

    fn delete_header_in_tx(&self, contract_id: &str, conn: &mut SqliteConnection) -> Result<usize>;
}

/// Business-facing surface for contracts.
#[async_trait]
pub trait ContractServiceTrait: Send + Sync {
    /// Creates a contract with its parties, items, participant splits and
    /// payment conditions, and expands the conditions into ledger entries.
    /// The whole unit commits or rolls back together.
    async fn create_contract(&self, ctx: &AuthContext, input: NewContract) -> Result<Contract>;

    /// Moves a draft contract to active if its persisted balance is settled.
    async fn activate_contract(&self, ctx: &AuthContext, contract_id: &str) -> Result<Contract>;

    /// Reverses a contract's financial footprint and hard-deletes its
    /// subtree. Returns a human-readable summary message.
    async fn delete_contract(&self, ctx: &AuthContext, contract_id: &str) -> Result<String>;

    fn get_contract(&self, contract_id: &str) -> Result<Contract>;

    fn list_contracts(&self, status_filter: Option<ContractStatus>) -> Result<Vec<Contract>>;
}
