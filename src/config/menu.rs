//! Menu configuration shapes from config.toml
//!
//! Raw, unvalidated product entries as they appear in the TOML file. Validation
//! into the closed [`crate::catalog::Category`] set happens when the
//! [`crate::catalog::Catalog`] is built, so a typo in a category name is a
//! load-time error rather than a runtime lookup miss.

use serde::Deserialize;

/// Configuration for a single menu product
#[derive(Debug, Deserialize, Clone)]
pub struct ProductConfig {
    /// Stable product identifier (e.g. `"sf-1"`)
    pub id: String,
    /// Display name of the product
    pub name: String,
    /// Category name, validated against the closed category set at load time
    pub category: String,
    /// Unit price in whole naira
    pub price: i64,
    /// Short marketing description
    pub description: String,
    /// Image URL for display layers
    pub image: String,
}
