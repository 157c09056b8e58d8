//! Contract domain models.
//!
//! A contract is a bilateral exchange: assets, cash lines and parties on
//! Side A versus Side B, settled by payment conditions. The input graph
//! (`NewContract`) carries the whole subtree the orchestrator persists in one
//! transaction.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::contracts_errors::ContractError;
use crate::assets::AssetKind;
use crate::errors::{Error, Result};
use crate::parties::PartyType;

/// Lifecycle status of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    #[default]
    Draft,
    Active,
    Completed,
    Cancelled,
}

impl ContractStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Draft => "draft",
            ContractStatus::Active => "active",
            ContractStatus::Completed => "completed",
            ContractStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(value: &str) -> Result<Self> {
        match value {
            "draft" => Ok(ContractStatus::Draft),
            "active" => Ok(ContractStatus::Active),
            "completed" => Ok(ContractStatus::Completed),
            "cancelled" => Ok(ContractStatus::Cancelled),
            other => Err(
                ContractError::InvalidData(format!("Unknown contract status '{}'", other)).into(),
            ),
        }
    }
}

/// The two sides of a bilateral contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::A => "A",
            Side::B => "B",
        }
    }

    pub fn from_str(value: &str) -> Result<Self> {
        match value {
            "A" => Ok(Side::A),
            "B" => Ok(Side::B),
            other => {
                Err(ContractError::InvalidData(format!("Unknown side '{}'", other)).into())
            }
        }
    }
}

/// What a contract item line represents. `Cash` lines carry no external id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Property,
    Vehicle,
    Credit,
    Development,
    Cash,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Property => "property",
            ItemKind::Vehicle => "vehicle",
            ItemKind::Credit => "credit",
            ItemKind::Development => "development",
            ItemKind::Cash => "cash",
        }
    }

    pub fn from_str(value: &str) -> Result<Self> {
        match value {
            "property" => Ok(ItemKind::Property),
            "vehicle" => Ok(ItemKind::Vehicle),
            "credit" => Ok(ItemKind::Credit),
            "development" => Ok(ItemKind::Development),
            "cash" => Ok(ItemKind::Cash),
            other => {
                Err(ContractError::InvalidData(format!("Unknown item kind '{}'", other)).into())
            }
        }
    }

    /// The asset table this kind resolves against, if any.
    pub fn asset_kind(&self) -> Option<AssetKind> {
        match self {
            ItemKind::Property => Some(AssetKind::Property),
            ItemKind::Vehicle => Some(AssetKind::Vehicle),
            ItemKind::Credit => Some(AssetKind::Credit),
            ItemKind::Development => Some(AssetKind::Development),
            ItemKind::Cash => None,
        }
    }
}

/// Direction of a payment condition, seen from the company's cash register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentDirection {
    In,
    Out,
}

impl PaymentDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentDirection::In => "in",
            PaymentDirection::Out => "out",
        }
    }

    pub fn from_str(value: &str) -> Result<Self> {
        match value {
            "in" => Ok(PaymentDirection::In),
            "out" => Ok(PaymentDirection::Out),
            other => Err(ContractError::InvalidData(format!(
                "Unknown payment direction '{}'",
                other
            ))
            .into()),
        }
    }
}

/// Single cash movement vs amortized installment schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Single,
    Installment,
}

impl PaymentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentKind::Single => "single",
            PaymentKind::Installment => "installment",
        }
    }

    pub fn from_str(value: &str) -> Result<Self> {
        match value {
            "single" => Ok(PaymentKind::Single),
            "installment" => Ok(PaymentKind::Installment),
            other => {
                Err(ContractError::InvalidData(format!("Unknown payment kind '{}'", other)).into())
            }
        }
    }
}

/// Installment frequency. Unrecognized values fall back to monthly, matching
/// the due-date projector's behavior for legacy rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Semiannual,
    Annual,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Semiannual => "semiannual",
            Frequency::Annual => "annual",
        }
    }

    /// Lenient parse; anything unknown is treated as monthly.
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "weekly" => Frequency::Weekly,
            "monthly" => Frequency::Monthly,
            "quarterly" => Frequency::Quarterly,
            "semiannual" => Frequency::Semiannual,
            "annual" => Frequency::Annual,
            _ => Frequency::Monthly,
        }
    }
}

/// Domain model representing a contract header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub code: String,
    pub contract_date: NaiveDate,
    pub notes: Option<String>,
    pub attachments: Vec<String>,
    pub status: ContractStatus,
    pub side_a_total: f64,
    pub side_b_total: f64,
    /// Signed settlement balance, payment conditions included. Maintained at
    /// write time; activation reads this column rather than recomputing.
    pub balance: f64,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for contract headers.
#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::contracts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContractDB {
    pub id: String,
    pub code: String,
    pub contract_date: NaiveDate,
    pub notes: Option<String>,
    pub attachments: Option<String>,
    pub status: String,
    pub side_a_total: f64,
    pub side_b_total: f64,
    pub balance: f64,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<ContractDB> for Contract {
    type Error = Error;

    fn try_from(db: ContractDB) -> Result<Self> {
        let attachments = match db.attachments.as_deref() {
            Some(raw) if !raw.is_empty() => serde_json::from_str(raw)?,
            _ => Vec::new(),
        };
        Ok(Contract {
            id: db.id,
            code: db.code,
            contract_date: db.contract_date,
            notes: db.notes,
            attachments,
            status: ContractStatus::from_str(&db.status)?,
            side_a_total: db.side_a_total,
            side_b_total: db.side_b_total,
            balance: db.balance,
            created_by: db.created_by,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

/// One participant on one side of a contract. Name/document are snapshots of
/// the referenced person/company at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractParty {
    pub id: String,
    pub contract_id: String,
    pub side: Side,
    pub party_type: PartyType,
    pub party_id: String,
    pub display_name: String,
    pub document: Option<String>,
    pub gra_percent: f64,
}

#[derive(Queryable, Selectable, Identifiable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::contract_parties)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContractPartyDB {
    pub id: String,
    pub contract_id: String,
    pub side: String,
    pub party_type: String,
    pub party_id: String,
    pub display_name: String,
    pub document: Option<String>,
    pub gra_percent: f64,
}

impl TryFrom<ContractPartyDB> for ContractParty {
    type Error = Error;

    fn try_from(db: ContractPartyDB) -> Result<Self> {
        Ok(ContractParty {
            id: db.id,
            contract_id: db.contract_id,
            side: Side::from_str(&db.side)?,
            party_type: PartyType::from_str(&db.party_type)?,
            party_id: db.party_id,
            display_name: db.display_name,
            document: db.document,
            gra_percent: db.gra_percent,
        })
    }
}

/// One asset or cash line attached to a side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractItem {
    pub id: String,
    pub contract_id: String,
    pub side: Side,
    pub item_kind: ItemKind,
    pub item_id: Option<String>,
    pub description: String,
    pub value: f64,
    pub notes: Option<String>,
}

#[derive(Queryable, Selectable, Identifiable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::contract_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContractItemDB {
    pub id: String,
    pub contract_id: String,
    pub side: String,
    pub item_kind: String,
    pub item_id: Option<String>,
    pub description: String,
    pub value: f64,
    pub notes: Option<String>,
}

impl TryFrom<ContractItemDB> for ContractItem {
    type Error = Error;

    fn try_from(db: ContractItemDB) -> Result<Self> {
        Ok(ContractItem {
            id: db.id,
            contract_id: db.contract_id,
            side: Side::from_str(&db.side)?,
            item_kind: ItemKind::from_str(&db.item_kind)?,
            item_id: db.item_id,
            description: db.description,
            value: db.value,
            notes: db.notes,
        })
    }
}

/// Percentage split of one item's value across parties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractItemParticipant {
    pub id: String,
    pub contract_item_id: String,
    pub party_id: String,
    pub percent: f64,
}

#[derive(Queryable, Selectable, Identifiable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::contract_item_participants)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContractItemParticipantDB {
    pub id: String,
    pub contract_item_id: String,
    pub party_id: String,
    pub percent: f64,
}

impl From<ContractItemParticipantDB> for ContractItemParticipant {
    fn from(db: ContractItemParticipantDB) -> Self {
        ContractItemParticipant {
            id: db.id,
            contract_item_id: db.contract_item_id,
            party_id: db.party_id,
            percent: db.percent,
        }
    }
}

/// One payment instruction. This is the input the ledger expander turns into
/// cash-register entries or receivable/payable schedules; it does not itself
/// represent money movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCondition {
    pub id: String,
    pub contract_id: String,
    pub value: f64,
    pub direction: PaymentDirection,
    pub payment_kind: PaymentKind,
    pub installments: i32,
    pub frequency: Option<Frequency>,
    pub start_date: NaiveDate,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

#[derive(Queryable, Selectable, Identifiable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::contract_payment_conditions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PaymentConditionDB {
    pub id: String,
    pub contract_id: String,
    pub value: f64,
    pub direction: String,
    pub payment_kind: String,
    pub installments: i32,
    pub frequency: Option<String>,
    pub start_date: NaiveDate,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

impl TryFrom<PaymentConditionDB> for PaymentCondition {
    type Error = Error;

    fn try_from(db: PaymentConditionDB) -> Result<Self> {
        Ok(PaymentCondition {
            id: db.id,
            contract_id: db.contract_id,
            value: db.value,
            direction: PaymentDirection::from_str(&db.direction)?,
            payment_kind: PaymentKind::from_str(&db.payment_kind)?,
            installments: db.installments,
            frequency: db.frequency.as_deref().map(Frequency::from_str_lossy),
            start_date: db.start_date,
            payment_method: db.payment_method,
            notes: db.notes,
        })
    }
}

// === Input graph ===

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContractParty {
    pub side: Side,
    pub party_type: PartyType,
    pub party_id: String,
    pub display_name: String,
    pub document: Option<String>,
    pub gra_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItemParticipant {
    pub party_id: String,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContractItem {
    pub side: Side,
    pub item_kind: ItemKind,
    pub item_id: Option<String>,
    pub description: String,
    pub value: f64,
    pub notes: Option<String>,
    #[serde(default)]
    pub participants: Vec<NewItemParticipant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPaymentCondition {
    pub value: f64,
    pub direction: PaymentDirection,
    pub payment_kind: PaymentKind,
    /// Defaults to 1; only meaningful for installment conditions.
    pub installments: Option<i32>,
    pub frequency: Option<Frequency>,
    pub start_date: NaiveDate,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

/// Input model for creating a contract with its whole subtree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContract {
    pub contract_date: NaiveDate,
    pub notes: Option<String>,
    #[serde(default)]
    pub attachments: Vec<String>,
    pub status: Option<ContractStatus>,
    pub side_a_total: f64,
    pub side_b_total: f64,
    #[serde(default)]
    pub parties: Vec<NewContractParty>,
    #[serde(default)]
    pub items: Vec<NewContractItem>,
    #[serde(default)]
    pub payment_conditions: Vec<NewPaymentCondition>,
}

impl NewContract {
    /// Validates the input graph before anything is written.
    pub fn validate(&self) -> Result<()> {
        if !self.side_a_total.is_finite() || !self.side_b_total.is_finite() {
            return Err(
                ContractError::InvalidData("Side totals must be finite numbers".to_string()).into(),
            );
        }

        for party in &self.parties {
            if party.party_id.trim().is_empty() {
                return Err(
                    ContractError::InvalidData("Party reference id cannot be empty".to_string())
                        .into(),
                );
            }
            if party.display_name.trim().is_empty() {
                return Err(ContractError::InvalidData(
                    "Party display name cannot be empty".to_string(),
                )
                .into());
            }
            if !(0.0..=100.0).contains(&party.gra_percent) {
                return Err(ContractError::InvalidData(format!(
                    "GRA percentage {} is out of range",
                    party.gra_percent
                ))
                .into());
            }
        }

        for item in &self.items {
            if !item.value.is_finite() || item.value < 0.0 {
                return Err(ContractError::InvalidData(format!(
                    "Item '{}' has an invalid value",
                    item.description
                ))
                .into());
            }
            if item.item_kind == ItemKind::Cash && item.item_id.is_some() {
                return Err(ContractError::InvalidData(
                    "Cash lines cannot reference an external asset".to_string(),
                )
                .into());
            }
            for participant in &item.participants {
                if !(0.0..=100.0).contains(&participant.percent) {
                    return Err(ContractError::InvalidData(format!(
                        "Participant split {} is out of range",
                        participant.percent
                    ))
                    .into());
                }
            }
        }

        for condition in &self.payment_conditions {
            if !condition.value.is_finite() || condition.value <= 0.0 {
                return Err(ContractError::InvalidData(
                    "Payment condition value must be positive".to_string(),
                )
                .into());
            }
            if condition.payment_kind == PaymentKind::Installment
                && condition.installments.unwrap_or(1) < 1
            {
                return Err(ContractError::InvalidData(
                    "Installment count must be at least 1".to_string(),
                )
                .into());
            }
        }

        Ok(())
    }
}
