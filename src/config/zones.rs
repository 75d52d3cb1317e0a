//! Delivery zone configuration shapes from config.toml
//!
//! Raw state -> LGA -> bus-stop entries, each stop carrying its flat delivery
//! fee and an estimated delivery-time range. The validated runtime form lives
//! in [`crate::locations`].

use serde::Deserialize;

/// Configuration for one supported state and its delivery areas
#[derive(Debug, Deserialize, Clone)]
pub struct StateConfig {
    /// State name (e.g. `"Abia"`)
    pub name: String,
    /// Local Government Areas the service delivers to within this state
    pub lgas: Vec<LgaConfig>,
}

/// Configuration for a Local Government Area
#[derive(Debug, Deserialize, Clone)]
pub struct LgaConfig {
    /// LGA name (e.g. `"Umuahia North"`)
    pub name: String,
    /// Drop-off bus stops within this LGA
    pub stops: Vec<StopConfig>,
}

/// Configuration for a single drop-off bus stop
#[derive(Debug, Deserialize, Clone)]
pub struct StopConfig {
    /// Bus stop name
    pub name: String,
    /// Flat delivery fee in whole naira
    pub fee: i64,
    /// Estimated delivery window, free text (e.g. `"30-45 mins"`)
    pub time: String,
}
