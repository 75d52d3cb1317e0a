//! Entity module - Contains all SeaORM entity definitions for the database.
//! The storefront persists everything through a single key-value table; the
//! entity here represents that table and its columns.

pub mod store_entry;

// Re-export specific types to avoid conflicts
pub use store_entry::{Column as StoreEntryColumn, Entity as StoreEntry, Model as StoreEntryModel};
