//! Minimal key-value port over the database.
//!
//! Everything durable in the storefront (order history, latest order, saved
//! delivery location, reviews) goes through `get`/`set` on this module, so the
//! stores above it can be redirected to any durable backend without touching
//! their logic. Values are opaque strings here; callers that store structured
//! data JSON-encode it themselves.

use crate::{
    entities::{StoreEntry, store_entry},
    errors::Result,
};
use sea_orm::{ActiveModelTrait, Set, prelude::*};
use tracing::warn;

/// Reads the value stored under `key`, or `None` if the key has never been
/// written.
///
/// # Errors
/// Returns an error if the database query fails. Callers that must never fail
/// on read should use [`get_lenient`] instead.
pub async fn get(db: &DatabaseConnection, key: &str) -> Result<Option<String>> {
    let entry = StoreEntry::find_by_id(key).one(db).await?;
    Ok(entry.map(|e| e.value))
}

/// Reads the value stored under `key`, degrading any storage failure to
/// "no data present".
///
/// This is the read path the rest of the storefront uses: a corrupt or
/// unavailable store must produce empty history / unset location, never a
/// crash.
pub async fn get_lenient(db: &DatabaseConnection, key: &str) -> Option<String> {
    match get(db, key).await {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "storage read failed, treating as absent");
            None
        }
    }
}

/// Writes `value` under `key`, overwriting any previous value.
///
/// # Errors
/// Returns an error if the database insert/update fails.
pub async fn set(db: &DatabaseConnection, key: &str, value: &str) -> Result<()> {
    let now = chrono::Utc::now();

    match StoreEntry::find_by_id(key).one(db).await? {
        Some(existing) => {
            let mut active: store_entry::ActiveModel = existing.into();
            active.value = Set(value.to_string());
            active.updated_at = Set(now);
            active.update(db).await?;
        }
        None => {
            let entry = store_entry::ActiveModel {
                key: Set(key.to_string()),
                value: Set(value.to_string()),
                updated_at: Set(now),
            };
            entry.insert(db).await?;
        }
    }

    Ok(())
}
