//! Checkout orchestrator - turns a cart into a finalized order.
//!
//! The orchestrator is a small state machine: `Idle` ->
//! `AwaitingSelection` -> `Processing` -> `Completed`. Validation failures
//! (empty cart, unresolved delivery stop, blank contact fields) return the
//! machine to `AwaitingSelection` with nothing mutated. During `Processing`
//! the simulated gateway waits out a fixed delay and then accepts or
//! declines; if the submission ends without an archived order - decline,
//! storage failure, or the future being dropped by a caller-side timeout -
//! the machine returns to `AwaitingSelection` so the shopper can retry.

use crate::{
    cart::Cart,
    errors::{Error, Result},
    locations::DeliveryZones,
    orders::{self, Order, OrderLine},
};
use rand::Rng;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info};

/// How the shopper pays for the order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash or transfer handed over on delivery
    PayOnDelivery,
    /// Debit/credit card
    Card,
    /// Third-party payment gateway
    Gateway,
}

/// Customer contact details collected at checkout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Full name
    pub name: String,
    /// Phone number
    pub phone: String,
    /// Street address (street, house number, landmark)
    pub address: String,
}

impl ContactInfo {
    /// Checks that every required field is non-blank.
    ///
    /// # Errors
    /// Returns [`Error::MissingContact`] naming the first blank field.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::MissingContact { field: "name" });
        }
        if self.phone.trim().is_empty() {
            return Err(Error::MissingContact { field: "phone" });
        }
        if self.address.trim().is_empty() {
            return Err(Error::MissingContact { field: "address" });
        }
        Ok(())
    }
}

/// The delivery point the shopper picked at checkout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliverySelection {
    /// State name
    pub state: String,
    /// Local Government Area name
    pub lga: String,
    /// Drop-off bus stop name
    pub stop: String,
}

/// Tuning for the simulated payment gateway.
///
/// The failure flag exists for test coverage only; the shipped flow never
/// fails the payment step.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// How long the simulated gateway round-trip takes
    pub delay: Duration,
    /// When true, the gateway declines every submission after the delay
    pub fail: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1500),
            fail: false,
        }
    }
}

/// Where the checkout currently stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CheckoutState {
    /// No checkout underway
    Idle,
    /// Shopper is picking delivery point and payment method
    AwaitingSelection,
    /// Submission accepted, gateway round-trip in flight
    Processing,
    /// Order recorded; terminal until the next `reset`
    Completed,
}

/// Drives a cart through validation, the simulated gateway, and the archive.
#[derive(Debug)]
pub struct CheckoutOrchestrator {
    state: CheckoutState,
    gateway: GatewayConfig,
}

/// Restores the machine to `AwaitingSelection` when the Processing window
/// ends without completing - whether by gateway decline, a failed archive
/// write, or the `submit` future being dropped mid-flight by a caller-side
/// timeout. Without this, a cancelled submission would leave the machine in
/// `Processing` forever and every later submission would be refused.
struct ProcessingGuard<'a> {
    state: &'a mut CheckoutState,
    done: bool,
}

impl ProcessingGuard<'_> {
    fn complete(mut self) {
        *self.state = CheckoutState::Completed;
        self.done = true;
    }
}

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        if !self.done {
            *self.state = CheckoutState::AwaitingSelection;
        }
    }
}

impl Default for CheckoutOrchestrator {
    fn default() -> Self {
        Self::new(GatewayConfig::default())
    }
}

impl CheckoutOrchestrator {
    /// Creates an orchestrator with the given gateway tuning.
    #[must_use]
    pub const fn new(gateway: GatewayConfig) -> Self {
        Self {
            state: CheckoutState::Idle,
            gateway,
        }
    }

    /// Current state of the machine.
    #[must_use]
    pub const fn state(&self) -> CheckoutState {
        self.state
    }

    /// Enters the selection phase. Called when the shopper opens checkout.
    pub fn begin(&mut self) {
        if self.state != CheckoutState::Processing {
            self.state = CheckoutState::AwaitingSelection;
        }
    }

    /// Returns the machine to `Idle` after a completed order has been shown.
    pub fn reset(&mut self) {
        if self.state != CheckoutState::Processing {
            self.state = CheckoutState::Idle;
        }
    }

    /// Submits the cart for payment and, on success, records the order.
    ///
    /// Preconditions are checked before anything is mutated: the cart must be
    /// non-empty, the delivery selection must resolve to a known stop, and all
    /// contact fields must be filled. On acceptance the machine suspends for
    /// the gateway delay, then generates a unique order id, snapshots the cart
    /// into an immutable [`Order`], appends it to the archive, clears the
    /// cart, and completes.
    ///
    /// # Errors
    /// - [`Error::CheckoutInProgress`] if a submission is already processing
    /// - [`Error::EmptyCart`] if the cart has no lines
    /// - [`Error::UnknownDeliveryLocation`] if the selection is not in the table
    /// - [`Error::MissingContact`] if a required contact field is blank
    /// - [`Error::PaymentGateway`] only under test-time failure injection
    /// - Storage errors if the archive cannot be written
    pub async fn submit(
        &mut self,
        db: &DatabaseConnection,
        cart: &mut Cart,
        zones: &DeliveryZones,
        selection: &DeliverySelection,
        payment_method: PaymentMethod,
        contact: ContactInfo,
    ) -> Result<Order> {
        if self.state == CheckoutState::Processing {
            return Err(Error::CheckoutInProgress);
        }
        self.state = CheckoutState::AwaitingSelection;

        if cart.is_empty() {
            return Err(Error::EmptyCart);
        }
        let stop = zones.resolve(&selection.state, &selection.lga, &selection.stop)?;
        contact.validate()?;

        let gateway = self.gateway.clone();
        self.state = CheckoutState::Processing;
        let guard = ProcessingGuard {
            state: &mut self.state,
            done: false,
        };

        debug!(delay = ?gateway.delay, "entering payment processing");
        tokio::time::sleep(gateway.delay).await;

        if gateway.fail {
            // Guard drop returns the machine to AwaitingSelection
            return Err(Error::PaymentGateway {
                message: "payment was declined".to_string(),
            });
        }

        let id = generate_order_id(db).await;
        let lines: Vec<OrderLine> = cart.lines().iter().map(OrderLine::from).collect();
        let subtotal = cart.subtotal();
        let order = Order {
            id,
            lines,
            subtotal,
            delivery_fee: stop.fee,
            total: subtotal + stop.fee,
            payment_method,
            customer: contact,
            destination: format!("{}, {}, {}", selection.stop, selection.lga, selection.state),
            placed_at: chrono::Utc::now(),
        };

        // The order never makes the archive on Err; guard drop lets the
        // shopper retry from AwaitingSelection.
        orders::append(db, &order).await?;

        cart.clear();
        guard.complete();
        info!(order_id = %order.id, total = order.total, "checkout completed");
        Ok(order)
    }
}

/// Draws a 6-digit numeric order id, re-drawing on collision with any id
/// already in the archive. The displayed shape matches the original service;
/// the re-draw removes its birthday-collision defect.
async fn generate_order_id(db: &DatabaseConnection) -> String {
    let existing: HashSet<String> = orders::all(db).await.into_iter().map(|o| o.id).collect();

    let mut rng = rand::thread_rng();
    loop {
        let candidate = rng.gen_range(100_000..1_000_000).to_string();
        if !existing.contains(&candidate) {
            return candidate;
        }
    }
}
