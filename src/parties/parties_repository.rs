use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::parties_model::PartyType;
use super::parties_traits::PartyResolverTrait;
use crate::db::get_connection;
use crate::errors::Result;
use crate::schema::{companies, people};

/// Diesel-backed resolver over the people/companies registries.
pub struct PartyResolver {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl PartyResolver {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl PartyResolverTrait for PartyResolver {
    fn exists(&self, party_type: PartyType, party_id: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let total = match party_type {
            PartyType::Person => people::table
                .filter(people::id.eq(party_id))
                .count()
                .get_result::<i64>(&mut conn)?,
            PartyType::Company => companies::table
                .filter(companies::id.eq(party_id))
                .count()
                .get_result::<i64>(&mut conn)?,
        };
        Ok(total > 0)
    }
}
