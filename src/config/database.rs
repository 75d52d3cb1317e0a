//! Database configuration module for the storefront.
//!
//! Handles `SQLite` connection setup and table creation using `SeaORM`. Table
//! creation uses `Schema::create_table_from_entity` so the schema always
//! matches the entity definitions without hand-written SQL.

use crate::entities::StoreEntry;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// Looks for `DATABASE_URL` in the environment and falls back to a local
/// `SQLite` file if not found.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/naija_delight.sqlite?mode=rwc".to_string())
}

/// Establishes a connection to the `SQLite` database.
///
/// # Errors
/// Returns an error if the connection cannot be established.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url())
        .await
        .map_err(Into::into)
}

/// Creates all necessary database tables from the entity definitions.
///
/// Idempotent: existing tables are left untouched, so this runs on every
/// startup.
///
/// # Errors
/// Returns an error if the table creation statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut store_entry_table = schema.create_table_from_entity(StoreEntry);
    store_entry_table.if_not_exists();
    db.execute(builder.build(&store_entry_table)).await?;

    Ok(())
}
