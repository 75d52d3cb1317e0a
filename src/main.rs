//! Process shell for the storefront engine.
//!
//! There is no interactive surface in this crate; this binary wires up
//! tracing, configuration, and the database, then walks one scripted order
//! through the full pipeline as a smoke run.

use naija_delight::{
    app::Storefront,
    checkout::{ContactInfo, DeliverySelection, PaymentMethod},
    config,
    errors::Result,
};
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (env vars can also be set externally)
    dotenv().ok();

    // 3. Load menu and delivery zone configuration
    let app_config = config::load_default_config()?;
    info!(
        products = app_config.menu.len(),
        "loaded storefront configuration"
    );

    // 4. Initialize database
    let db = config::database::create_connection().await?;
    config::database::create_tables(&db).await?;
    info!("database initialized");

    // 5. Build the storefront controller
    let mut storefront = Storefront::from_config(db, app_config)?;

    if let Some(area) = storefront.saved_delivery_area().await {
        info!(state = %area.state, lga = %area.lga, "resuming saved delivery area");
    } else {
        storefront.confirm_delivery_area("Abia", "Umuahia North").await?;
    }

    // 6. Walk one scripted order through the pipeline
    storefront.add_to_cart("rm-1");
    storefront.add_to_cart("rm-1");
    storefront.add_to_cart("dr-2");
    info!(
        lines = storefront.cart.line_count(),
        subtotal = storefront.cart.subtotal(),
        "demo cart assembled"
    );

    let order = storefront
        .place_order(
            &DeliverySelection {
                state: "Abia".to_string(),
                lga: "Umuahia North".to_string(),
                stop: "Isi Gate".to_string(),
            },
            PaymentMethod::PayOnDelivery,
            ContactInfo {
                name: "Demo Shopper".to_string(),
                phone: "08030000000".to_string(),
                address: "12 Aguiyi Road".to_string(),
            },
        )
        .await?;

    info!(
        order_id = %order.id,
        subtotal = order.subtotal,
        delivery_fee = order.delivery_fee,
        total = order.total,
        "order placed"
    );

    let history = storefront.order_history().await;
    info!(orders = history.len(), "order archive size");

    Ok(())
}
