//! Order records and the append-only order archive.
//!
//! Finalized orders are immutable snapshots: the lines are copied out of the
//! live cart at checkout time so later cart edits can never rewrite history.
//! The archive is a newest-first JSON array under the `order_history` key,
//! with the most recent order duplicated under `latest_order` for the
//! confirmation view. No update or delete is exposed, and the archive is
//! unbounded.

use crate::{
    cart::CartLine,
    checkout::{ContactInfo, PaymentMethod},
    errors::Result,
    storage,
};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Storage key for the newest-first order history array.
pub const HISTORY_KEY: &str = "order_history";
/// Storage key for the most recent order, read by the confirmation view.
pub const LATEST_KEY: &str = "latest_order";

/// One ordered line, snapshotted from the cart at checkout time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Catalog product id at the time of purchase
    pub product_id: String,
    /// Product display name at the time of purchase
    pub name: String,
    /// Unit price in whole naira at the time of purchase
    pub unit_price: i64,
    /// Units ordered
    pub quantity: u32,
    /// Unit price times quantity
    pub line_total: i64,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product.id.clone(),
            name: line.product.name.clone(),
            unit_price: line.product.price,
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

/// A finalized, immutable order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Human-displayable order identifier, unique within the archive
    pub id: String,
    /// Snapshot of the cart lines at checkout time
    pub lines: Vec<OrderLine>,
    /// Sum of line totals in whole naira
    pub subtotal: i64,
    /// Delivery fee resolved from the chosen bus stop
    pub delivery_fee: i64,
    /// Subtotal plus delivery fee
    pub total: i64,
    /// How the shopper chose to pay
    pub payment_method: PaymentMethod,
    /// Customer contact details as submitted
    pub customer: ContactInfo,
    /// Delivery destination description (state / LGA / stop plus address)
    pub destination: String,
    /// When the order was placed
    pub placed_at: DateTime<Utc>,
}

/// Fulfilment stage reported by the tracking view.
///
/// The real kitchen has no feed into this system, so [`track`] simulates the
/// stage for archived orders. Ordered so later stages compare greater.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// The order has been received by the kitchen
    Received,
    /// The kitchen is preparing the items
    Preparing,
    /// The rider has picked up the order
    OnTheWay,
    /// The order has been handed over
    Delivered,
}

impl OrderStatus {
    /// Every stage, in fulfilment order.
    pub const ALL: [Self; 4] = [
        Self::Received,
        Self::Preparing,
        Self::OnTheWay,
        Self::Delivered,
    ];

    /// Display label for the tracking view.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Received => "Order Received",
            Self::Preparing => "Preparing",
            Self::OnTheWay => "On the way",
            Self::Delivered => "Delivered",
        }
    }
}

/// Looks up `order_id` in the archive and reports a fulfilment stage, or
/// `None` for an id the archive has never seen.
///
/// The stage is drawn at random on every call; there is no fulfilment backend
/// to ask, so tracking is a demo of the view rather than a real status feed.
pub async fn track(db: &DatabaseConnection, order_id: &str) -> Option<OrderStatus> {
    let archive = all(db).await;
    if !archive.iter().any(|order| order.id == order_id) {
        return None;
    }

    let index = rand::Rng::gen_range(&mut rand::thread_rng(), 0..OrderStatus::ALL.len());
    Some(OrderStatus::ALL[index])
}

/// Reads the full archive, newest first.
///
/// Missing or corrupt stored history degrades to an empty archive rather than
/// failing - history display must never crash the storefront.
pub async fn all(db: &DatabaseConnection) -> Vec<Order> {
    let Some(raw) = storage::get_lenient(db, HISTORY_KEY).await else {
        return Vec::new();
    };

    match serde_json::from_str(&raw) {
        Ok(orders) => orders,
        Err(e) => {
            warn!(error = %e, "order history is corrupt, treating as empty");
            Vec::new()
        }
    }
}

/// Reads the most recently appended order, or `None` for an empty archive.
///
/// The history head is authoritative; the `latest_order` slot is only
/// consulted when the history itself is empty or unreadable, since its write
/// is best-effort and may lag behind the archive.
pub async fn latest(db: &DatabaseConnection) -> Option<Order> {
    if let Some(order) = all(db).await.into_iter().next() {
        return Some(order);
    }

    let raw = storage::get_lenient(db, LATEST_KEY).await?;
    match serde_json::from_str(&raw) {
        Ok(order) => Some(order),
        Err(e) => {
            warn!(error = %e, "latest order is corrupt and history is empty");
            None
        }
    }
}

/// Appends `order` at the front of the archive (newest-first) and refreshes
/// the `latest_order` slot.
///
/// The history write is the single commit point: once it succeeds the order
/// is placed, and a failed `latest_order` refresh only logs a warning. A
/// caller that retried on that failure would otherwise record the same
/// purchase twice.
///
/// # Errors
/// Returns an error if the archive cannot be re-encoded or written. The
/// archive is read leniently first, so a previously corrupt store is replaced
/// rather than compounding the corruption.
pub async fn append(db: &DatabaseConnection, order: &Order) -> Result<()> {
    let mut history = all(db).await;
    history.insert(0, order.clone());

    storage::set(db, HISTORY_KEY, &serde_json::to_string(&history)?).await?;

    if let Err(e) = storage::set(db, LATEST_KEY, &serde_json::to_string(order)?).await {
        warn!(error = %e, "latest order slot not refreshed, history remains authoritative");
    }

    info!(order_id = %order.id, total = order.total, "order appended to archive");
    Ok(())
}
