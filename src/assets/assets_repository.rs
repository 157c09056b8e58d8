use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::assets_model::AssetKind;
use super::assets_traits::AssetResolverTrait;
use crate::db::get_connection;
use crate::errors::Result;
use crate::schema::{credits, developments, properties, vehicles};

/// Diesel-backed resolver over the four asset tables.
pub struct AssetResolver {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl AssetResolver {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    fn count(kind: AssetKind, asset_id: &str, conn: &mut SqliteConnection) -> Result<i64> {
        let total = match kind {
            AssetKind::Property => properties::table
                .filter(properties::id.eq(asset_id))
                .count()
                .get_result::<i64>(conn)?,
            AssetKind::Vehicle => vehicles::table
                .filter(vehicles::id.eq(asset_id))
                .count()
                .get_result::<i64>(conn)?,
            AssetKind::Credit => credits::table
                .filter(credits::id.eq(asset_id))
                .count()
                .get_result::<i64>(conn)?,
            AssetKind::Development => developments::table
                .filter(developments::id.eq(asset_id))
                .count()
                .get_result::<i64>(conn)?,
        };
        Ok(total)
    }
}

impl AssetResolverTrait for AssetResolver {
    fn exists(&self, kind: AssetKind, asset_id: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        Ok(Self::count(kind, asset_id, &mut conn)? > 0)
    }

    fn exists_in_tx(
        &self,
        kind: AssetKind,
        asset_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<bool> {
        Ok(Self::count(kind, asset_id, conn)? > 0)
    }
}
