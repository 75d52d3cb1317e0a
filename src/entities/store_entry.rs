//! Store entry entity - the durable key-value table behind the storefront.
//! Order history, the latest order, the saved delivery location, and product
//! reviews are all JSON values stored under fixed keys in this one table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Key-value database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "store_entries")]
pub struct Model {
    /// Storage key (e.g. `"order_history"`, `"naija_delight_state"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    /// Stored value, JSON-encoded for structured data
    pub value: String,
    /// When this entry was last written
    pub updated_at: DateTimeUtc,
}

/// `StoreEntry` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
