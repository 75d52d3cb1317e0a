//! `NaijaDelight` - headless storefront engine for a food-ordering service
//!
//! This crate provides the full order pipeline for a small food business:
//! an immutable menu catalog, a delivery zone table with flat per-stop fees,
//! an in-memory cart engine, a checkout state machine with a simulated
//! payment gateway, and an append-only order archive persisted through a
//! key-value store. The rendering surface is out of scope; everything here is
//! driven through the [`app::Storefront`] controller.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    // Documentation - missing docs should be added gradually
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Performance
    clippy::inefficient_to_string,
    clippy::large_types_passed_by_value,
    clippy::needless_pass_by_value,
    clippy::unnecessary_wraps,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Complexity and readability
    clippy::cognitive_complexity,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::too_many_lines,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Top-level controller owning cart, checkout, and navigation state
pub mod app;
/// External generative-AI boundary (chat assistant, image designer)
pub mod assistant;
/// In-memory cart engine
pub mod cart;
/// Immutable menu catalog with a closed category set
pub mod catalog;
/// Checkout state machine and simulated payment gateway
pub mod checkout;
/// Configuration loading for menu, zones, and the database
pub mod config;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Delivery zone table and persisted area selection
pub mod locations;
/// Order records and the append-only archive
pub mod orders;
/// Per-product customer reviews
pub mod reviews;
/// Minimal key-value port over the database
pub mod storage;

#[cfg(test)]
pub mod test_utils;
