use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::contracts_errors::ContractError;
use super::contracts_model::*;
use super::contracts_traits::ContractRepositoryTrait;
use crate::db::get_connection;
use crate::errors::Result;
use crate::schema::{
    contract_item_participants, contract_items, contract_parties, contract_payment_conditions,
    contracts,
};

/// Repository for managing contract data in the database.
pub struct ContractRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl ContractRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    fn load_contract(contract_id: &str, conn: &mut SqliteConnection) -> Result<Contract> {
        let contract = contracts::table
            .select(ContractDB::as_select())
            .find(contract_id)
            .first::<ContractDB>(conn)
            .optional()?
            .ok_or_else(|| {
                ContractError::NotFound(format!("Contract '{}' not found", contract_id))
            })?;

        contract.try_into()
    }
}

impl ContractRepositoryTrait for ContractRepository {
    fn count_in_tx(&self, conn: &mut SqliteConnection) -> Result<i64> {
        Ok(contracts::table.count().get_result::<i64>(conn)?)
    }

    fn create_header_in_tx(
        &self,
        new_contract: &NewContract,
        code: &str,
        balance: f64,
        created_by: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Contract> {
        let now = Utc::now().naive_utc();
        let attachments = if new_contract.attachments.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&new_contract.attachments)?)
        };

        let contract_db = ContractDB {
            id: Uuid::new_v4().to_string(),
            code: code.to_string(),
            contract_date: new_contract.contract_date,
            notes: new_contract.notes.clone(),
            attachments,
            status: new_contract.status.unwrap_or_default().as_str().to_string(),
            side_a_total: new_contract.side_a_total,
            side_b_total: new_contract.side_b_total,
            balance,
            created_by: created_by.to_string(),
            created_at: now,
            updated_at: now,
        };

        diesel::insert_into(contracts::table)
            .values(&contract_db)
            .execute(conn)?;

        contract_db.try_into()
    }

    fn insert_parties_in_tx(
        &self,
        contract_id: &str,
        parties: &[NewContractParty],
        conn: &mut SqliteConnection,
    ) -> Result<Vec<ContractParty>> {
        if parties.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<ContractPartyDB> = parties
            .iter()
            .map(|party| ContractPartyDB {
                id: Uuid::new_v4().to_string(),
                contract_id: contract_id.to_string(),
                side: party.side.as_str().to_string(),
                party_type: party.party_type.as_str().to_string(),
                party_id: party.party_id.clone(),
                display_name: party.display_name.clone(),
                document: party.document.clone(),
                gra_percent: party.gra_percent,
            })
            .collect();

        diesel::insert_into(contract_parties::table)
            .values(&rows)
            .execute(conn)?;

        rows.into_iter().map(ContractParty::try_from).collect()
    }

    fn insert_item_in_tx(
        &self,
        contract_id: &str,
        item: &NewContractItem,
        conn: &mut SqliteConnection,
    ) -> Result<ContractItem> {
        let item_db = ContractItemDB {
            id: Uuid::new_v4().to_string(),
            contract_id: contract_id.to_string(),
            side: item.side.as_str().to_string(),
            item_kind: item.item_kind.as_str().to_string(),
            item_id: item.item_id.clone(),
            description: item.description.clone(),
            value: item.value,
            notes: item.notes.clone(),
        };

        diesel::insert_into(contract_items::table)
            .values(&item_db)
            .execute(conn)?;

        item_db.try_into()
    }

    fn insert_item_participants_in_tx(
        &self,
        contract_item_id: &str,
        participants: &[NewItemParticipant],
        conn: &mut SqliteConnection,
    ) -> Result<Vec<ContractItemParticipant>> {
        if participants.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<ContractItemParticipantDB> = participants
            .iter()
            .map(|participant| ContractItemParticipantDB {
                id: Uuid::new_v4().to_string(),
                contract_item_id: contract_item_id.to_string(),
                party_id: participant.party_id.clone(),
                percent: participant.percent,
            })
            .collect();

        diesel::insert_into(contract_item_participants::table)
            .values(&rows)
            .execute(conn)?;

        Ok(rows.into_iter().map(ContractItemParticipant::from).collect())
    }

    fn insert_conditions_in_tx(
        &self,
        contract_id: &str,
        conditions: &[NewPaymentCondition],
        conn: &mut SqliteConnection,
    ) -> Result<Vec<PaymentCondition>> {
        if conditions.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<PaymentConditionDB> = conditions
            .iter()
            .map(|condition| PaymentConditionDB {
                id: Uuid::new_v4().to_string(),
                contract_id: contract_id.to_string(),
                value: condition.value,
                direction: condition.direction.as_str().to_string(),
                payment_kind: condition.payment_kind.as_str().to_string(),
                installments: condition.installments.unwrap_or(1),
                frequency: condition.frequency.map(|f| f.as_str().to_string()),
                start_date: condition.start_date,
                payment_method: condition.payment_method.clone(),
                notes: condition.notes.clone(),
            })
            .collect();

        diesel::insert_into(contract_payment_conditions::table)
            .values(&rows)
            .execute(conn)?;

        rows.into_iter().map(PaymentCondition::try_from).collect()
    }

    fn get_by_id(&self, contract_id: &str) -> Result<Contract> {
        let mut conn = get_connection(&self.pool)?;
        Self::load_contract(contract_id, &mut conn)
    }

    fn get_by_id_in_tx(&self, contract_id: &str, conn: &mut SqliteConnection) -> Result<Contract> {
        Self::load_contract(contract_id, conn)
    }

    fn list(&self, status_filter: Option<ContractStatus>) -> Result<Vec<Contract>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = contracts::table.into_boxed();
        if let Some(status) = status_filter {
            query = query.filter(contracts::status.eq(status.as_str()));
        }

        let rows = query
            .select(ContractDB::as_select())
            .order(contracts::code.asc())
            .load::<ContractDB>(&mut conn)?;

        rows.into_iter().map(Contract::try_from).collect()
    }

    fn list_parties(&self, contract_id: &str) -> Result<Vec<ContractParty>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = contract_parties::table
            .filter(contract_parties::contract_id.eq(contract_id))
            .select(ContractPartyDB::as_select())
            .load::<ContractPartyDB>(&mut conn)?;

        rows.into_iter().map(ContractParty::try_from).collect()
    }

    fn list_items(&self, contract_id: &str) -> Result<Vec<ContractItem>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = contract_items::table
            .filter(contract_items::contract_id.eq(contract_id))
            .select(ContractItemDB::as_select())
            .load::<ContractItemDB>(&mut conn)?;

        rows.into_iter().map(ContractItem::try_from).collect()
    }

    fn list_item_participants(
        &self,
        contract_item_id: &str,
    ) -> Result<Vec<ContractItemParticipant>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = contract_item_participants::table
            .filter(contract_item_participants::contract_item_id.eq(contract_item_id))
            .select(ContractItemParticipantDB::as_select())
            .load::<ContractItemParticipantDB>(&mut conn)?;

        Ok(rows.into_iter().map(ContractItemParticipant::from).collect())
    }

    fn list_conditions(&self, contract_id: &str) -> Result<Vec<PaymentCondition>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = contract_payment_conditions::table
            .filter(contract_payment_conditions::contract_id.eq(contract_id))
            .select(PaymentConditionDB::as_select())
            .load::<PaymentConditionDB>(&mut conn)?;

        rows.into_iter().map(PaymentCondition::try_from).collect()
    }

    fn update_status(&self, contract_id: &str, status: ContractStatus) -> Result<Contract> {
        let mut conn = get_connection(&self.pool)?;

        diesel::update(contracts::table.find(contract_id))
            .set((
                contracts::status.eq(status.as_str()),
                contracts::updated_at.eq(Utc::now().naive_utc()),
            ))
            .execute(&mut conn)?;

        Self::load_contract(contract_id, &mut conn)
    }

    fn delete_item_participants_in_tx(
        &self,
        contract_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<usize> {
        let item_ids = contract_items::table
            .filter(contract_items::contract_id.eq(contract_id))
            .select(contract_items::id);

        let deleted = diesel::delete(
            contract_item_participants::table
                .filter(contract_item_participants::contract_item_id.eq_any(item_ids)),
        )
        .execute(conn)?;
        Ok(deleted)
    }

    fn delete_items_in_tx(&self, contract_id: &str, conn: &mut SqliteConnection) -> Result<usize> {
        let deleted = diesel::delete(
            contract_items::table.filter(contract_items::contract_id.eq(contract_id)),
        )
        .execute(conn)?;
        Ok(deleted)
    }

    fn delete_conditions_in_tx(
        &self,
        contract_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<usize> {
        let deleted = diesel::delete(
            contract_payment_conditions::table
                .filter(contract_payment_conditions::contract_id.eq(contract_id)),
        )
        .execute(conn)?;
        Ok(deleted)
    }

    fn delete_parties_in_tx(
        &self,
        contract_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<usize> {
        let deleted = diesel::delete(
            contract_parties::table.filter(contract_parties::contract_id.eq(contract_id)),
        )
        .execute(conn)?;
        Ok(deleted)
    }

    fn delete_header_in_tx(&self, contract_id: &str, conn: &mut SqliteConnection) -> Result<usize> {
        let deleted =
            diesel::delete(contracts::table.find(contract_id.to_string())).execute(conn)?;
        Ok(deleted)
    }
}
