//! Shared test utilities for the storefront engine.
//!
//! Provides the standard in-memory database setup plus sample catalog, zone,
//! and order fixtures with sensible defaults.

use crate::{
    catalog::Catalog,
    checkout::{CheckoutOrchestrator, ContactInfo, DeliverySelection, GatewayConfig, PaymentMethod},
    config::{Config, menu::ProductConfig, zones::{LgaConfig, StateConfig, StopConfig}},
    errors::Result,
    locations::DeliveryZones,
    orders::{Order, OrderLine},
};
use sea_orm::DatabaseConnection;
use std::time::Duration;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

fn product(id: &str, name: &str, category: &str, price: i64) -> ProductConfig {
    ProductConfig {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price,
        description: format!("{name} (test fixture)"),
        image: format!("https://example.com/{id}.jpg"),
    }
}

/// Raw menu entries covering several categories, priced like the real menu.
#[must_use]
pub fn sample_menu() -> Vec<ProductConfig> {
    vec![
        product("sf-1", "Grilled Fish", "sea_food", 3500),
        product("sf-2", "Jumbo Prawns", "sea_food", 5000),
        product("rm-1", "Smoky Jollof Rice", "rice_meals", 1500),
        product("sp-1", "Egusi Soup", "soups", 2000),
        product("dr-2", "Ice Cold Coke", "drinks", 500),
        product("sn-1", "Meat Pie", "snacks", 800),
    ]
}

/// Raw zone entries: one state, two LGAs, fee tiers 700 / 1000 / 1200.
#[must_use]
pub fn sample_zone_config() -> Vec<StateConfig> {
    vec![StateConfig {
        name: "Abia".to_string(),
        lgas: vec![
            LgaConfig {
                name: "Umuahia North".to_string(),
                stops: vec![
                    StopConfig {
                        name: "Isi Gate".to_string(),
                        fee: 700,
                        time: "30-45 mins".to_string(),
                    },
                    StopConfig {
                        name: "Ubani Market".to_string(),
                        fee: 1000,
                        time: "35-50 mins".to_string(),
                    },
                ],
            },
            LgaConfig {
                name: "Aba South".to_string(),
                stops: vec![StopConfig {
                    name: "Ariaria Junction".to_string(),
                    fee: 1200,
                    time: "45-70 mins".to_string(),
                }],
            },
        ],
    }]
}

/// A validated catalog built from [`sample_menu`].
///
/// # Panics
/// Panics if the fixture data stops validating, which is a test bug.
#[must_use]
pub fn sample_catalog() -> Catalog {
    #[allow(clippy::unwrap_used)]
    Catalog::from_config(sample_menu()).unwrap()
}

/// A validated zone table built from [`sample_zone_config`].
///
/// # Panics
/// Panics if the fixture data stops validating, which is a test bug.
#[must_use]
pub fn sample_zones() -> DeliveryZones {
    #[allow(clippy::unwrap_used)]
    DeliveryZones::from_config(sample_zone_config()).unwrap()
}

/// A full raw config combining the sample menu and zones.
#[must_use]
pub fn sample_config() -> Config {
    Config {
        menu: sample_menu(),
        zones: sample_zone_config(),
    }
}

/// Contact details that pass validation.
#[must_use]
pub fn sample_contact() -> ContactInfo {
    ContactInfo {
        name: "Ada Obi".to_string(),
        phone: "08030000000".to_string(),
        address: "12 Aguiyi Road, near the stadium".to_string(),
    }
}

/// A selection that resolves in [`sample_zones`] (Isi Gate, fee 700).
#[must_use]
pub fn sample_selection() -> DeliverySelection {
    DeliverySelection {
        state: "Abia".to_string(),
        lga: "Umuahia North".to_string(),
        stop: "Isi Gate".to_string(),
    }
}

/// An orchestrator with a millisecond gateway delay so tests don't sleep.
#[must_use]
pub fn fast_orchestrator() -> CheckoutOrchestrator {
    CheckoutOrchestrator::new(GatewayConfig {
        delay: Duration::from_millis(1),
        fail: false,
    })
}

/// A finalized order with the given id and one jollof line.
#[must_use]
pub fn sample_order(id: &str) -> Order {
    Order {
        id: id.to_string(),
        lines: vec![OrderLine {
            product_id: "rm-1".to_string(),
            name: "Smoky Jollof Rice".to_string(),
            unit_price: 1500,
            quantity: 2,
            line_total: 3000,
        }],
        subtotal: 3000,
        delivery_fee: 700,
        total: 3700,
        payment_method: PaymentMethod::PayOnDelivery,
        customer: sample_contact(),
        destination: "Isi Gate, Umuahia North, Abia".to_string(),
        placed_at: chrono::Utc::now(),
    }
}
