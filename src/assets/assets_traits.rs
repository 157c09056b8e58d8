//! Asset resolver trait.

use diesel::sqlite::SqliteConnection;

use super::assets_model::AssetKind;
use crate::errors::Result;

/// Existence-by-id check against the external asset tables.
///
/// Contract items referencing an asset id are validated synchronously at
/// insert time; a missing id rejects the whole contract.
pub trait AssetResolverTrait: Send + Sync {
    /// Checks existence using a pooled connection.
    fn exists(&self, kind: AssetKind, asset_id: &str) -> Result<bool>;

    /// Checks existence on a connection owned by an open transaction.
    fn exists_in_tx(
        &self,
        kind: AssetKind,
        asset_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<bool>;
}
