//! Patrimonio Core - contract settlement engine.
//!
//! This crate contains the back-office logic for recording bilateral
//! contracts over properties, vehicles, credits and developments, and for
//! deriving cash-register, receivable and payable entries from a contract's
//! payment conditions. It is consumed by a UI tier; everything here is a
//! library-level service layer over a SQLite datastore.

pub mod assets;
pub mod auth;
pub mod bank_accounts;
pub mod constants;
pub mod contracts;
pub mod db;
pub mod errors;
pub mod ledger;
pub mod parties;
pub mod schema;

pub use contracts::*;

pub use errors::Error;
pub use errors::Result;
