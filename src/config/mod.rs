//! Configuration loading for the storefront.
//!
//! The menu catalog and delivery zone table are static data seeded from
//! `config.toml`; the database module handles connection and schema setup.

/// Database configuration and connection management
pub mod database;

/// Menu product configuration loading from config.toml
pub mod menu;

/// Delivery zone configuration loading from config.toml
pub mod zones;

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Every sellable product on the menu
    pub menu: Vec<menu::ProductConfig>,
    /// Supported delivery states with their LGAs and bus stops
    pub zones: Vec<zones::StateConfig>,
}

/// Loads storefront configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads storefront configuration from the default location (./config.toml)
///
/// # Errors
/// Returns an error if the file is missing or malformed.
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [[menu]]
            id = "sf-1"
            name = "Grilled Fish"
            category = "sea_food"
            price = 3500
            description = "Spicy grilled catfish served with coleslaw."
            image = "https://example.com/fish.jpg"

            [[menu]]
            id = "dr-2"
            name = "Ice Cold Coke"
            category = "drinks"
            price = 500
            description = "50cl bottle."
            image = "https://example.com/coke.jpg"

            [[zones]]
            name = "Abia"

            [[zones.lgas]]
            name = "Umuahia North"

            [[zones.lgas.stops]]
            name = "Isi Gate"
            fee = 700
            time = "30-45 mins"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.menu.len(), 2);
        assert_eq!(config.menu[1].price, 500);
        assert_eq!(config.zones.len(), 1);
        assert_eq!(config.zones[0].lgas[0].stops[0].name, "Isi Gate");
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("does/not/exist.toml");
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }
}
