//! Unified error types for the storefront engine.
//!
//! Every failure in the core degrades to a recoverable condition: validation
//! errors leave the checkout in its selection phase, storage read errors are
//! treated as "no data present" by the callers in [`crate::storage`], and
//! external-service errors never touch cart or checkout state.

use thiserror::Error;

/// All error conditions the storefront can surface.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or validated
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the configuration problem
        message: String,
    },

    /// Underlying database failure from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// JSON encode/decode failure for persisted values
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error (config file access)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Checkout was submitted with nothing in the cart
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// A product id was referenced that the catalog does not contain
    #[error("Unknown product: {id}")]
    UnknownProduct {
        /// The offending product id
        id: String,
    },

    /// The state/LGA/stop combination has no entry in the delivery table
    #[error("No delivery route for {state} / {lga} / {stop}")]
    UnknownDeliveryLocation {
        /// State name as submitted
        state: String,
        /// Local Government Area as submitted
        lga: String,
        /// Bus stop as submitted
        stop: String,
    },

    /// A required customer contact field was left blank
    #[error("Delivery contact field '{field}' is required")]
    MissingContact {
        /// Name of the blank field
        field: &'static str,
    },

    /// A second submission arrived while an order was already processing
    #[error("A checkout is already in progress")]
    CheckoutInProgress,

    /// The simulated payment gateway declined the submission
    #[error("Payment gateway error: {message}")]
    PaymentGateway {
        /// Gateway-reported reason
        message: String,
    },

    /// Review rating outside the accepted 1-5 range
    #[error("Review rating must be between 1 and 5, got {rating}")]
    InvalidRating {
        /// The rejected rating value
        rating: u8,
    },

    /// Review submitted without a reviewer name
    #[error("Reviewer name cannot be empty")]
    EmptyReviewerName,

    /// Failure from an external generative-AI service
    #[error("External service error: {message}")]
    ExternalService {
        /// Service-reported reason
        message: String,
    },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
