//! Location and delivery table - state -> LGA -> bus stop, with fees.
//!
//! The delivery business currently serves a single state; the table still
//! validates and stores the full hierarchy so adding a second state is a data
//! change, not a code change. The shopper's confirmed state/LGA selection is
//! persisted so the next session can skip the location prompt.

use crate::{
    config::zones::StateConfig,
    errors::{Error, Result},
    storage,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Storage key for the shopper's confirmed state.
pub const STATE_KEY: &str = "naija_delight_state";
/// Storage key for the shopper's confirmed LGA.
pub const LGA_KEY: &str = "naija_delight_lga";

/// A drop-off bus stop with its fixed delivery fee and time estimate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusStop {
    /// Bus stop name
    pub name: String,
    /// Flat delivery fee in whole naira
    pub fee: i64,
    /// Estimated delivery window, free text (e.g. `"30-45 mins"`)
    pub time_estimate: String,
}

/// A Local Government Area and its drop-off stops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lga {
    /// LGA name
    pub name: String,
    /// Drop-off stops within this LGA
    pub stops: Vec<BusStop>,
}

/// A supported state and its delivery areas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateZone {
    /// State name
    pub name: String,
    /// LGAs served within this state
    pub lgas: Vec<Lga>,
}

/// Validated, immutable delivery zone table.
#[derive(Clone, Debug)]
pub struct DeliveryZones {
    states: Vec<StateZone>,
}

impl DeliveryZones {
    /// Builds the zone table from raw config entries, validating every level.
    ///
    /// # Errors
    /// Returns an error if any state, LGA, or stop name is empty, a fee is
    /// negative, or the table contains no states at all.
    pub fn from_config(entries: Vec<StateConfig>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::Config {
                message: "Delivery zone table is empty".to_string(),
            });
        }

        let mut states = Vec::with_capacity(entries.len());
        for state in entries {
            if state.name.trim().is_empty() {
                return Err(Error::Config {
                    message: "State name cannot be empty".to_string(),
                });
            }

            let mut lgas = Vec::with_capacity(state.lgas.len());
            for lga in state.lgas {
                if lga.name.trim().is_empty() {
                    return Err(Error::Config {
                        message: format!("State '{}' has an LGA with no name", state.name),
                    });
                }

                let mut stops = Vec::with_capacity(lga.stops.len());
                for stop in lga.stops {
                    if stop.name.trim().is_empty() {
                        return Err(Error::Config {
                            message: format!("LGA '{}' has a stop with no name", lga.name),
                        });
                    }
                    if stop.fee < 0 {
                        return Err(Error::Config {
                            message: format!(
                                "Stop '{}' has a negative delivery fee: {}",
                                stop.name, stop.fee
                            ),
                        });
                    }
                    stops.push(BusStop {
                        name: stop.name,
                        fee: stop.fee,
                        time_estimate: stop.time,
                    });
                }

                lgas.push(Lga {
                    name: lga.name,
                    stops,
                });
            }

            states.push(StateZone {
                name: state.name,
                lgas,
            });
        }

        Ok(Self { states })
    }

    /// Resolves a state/LGA/stop combination to its delivery stop.
    ///
    /// # Errors
    /// Returns [`Error::UnknownDeliveryLocation`] if any level of the
    /// combination is absent from the table. Resolution never mutates state, so
    /// a failed lookup leaves cart and checkout untouched.
    pub fn resolve(&self, state: &str, lga: &str, stop: &str) -> Result<&BusStop> {
        self.states
            .iter()
            .find(|s| s.name == state)
            .and_then(|s| s.lgas.iter().find(|l| l.name == lga))
            .and_then(|l| l.stops.iter().find(|b| b.name == stop))
            .ok_or_else(|| Error::UnknownDeliveryLocation {
                state: state.to_string(),
                lga: lga.to_string(),
                stop: stop.to_string(),
            })
    }

    /// All supported states.
    #[must_use]
    pub fn states(&self) -> &[StateZone] {
        &self.states
    }

    /// The LGAs served in a state, or `None` for an unsupported state.
    #[must_use]
    pub fn lgas(&self, state: &str) -> Option<&[Lga]> {
        self.states
            .iter()
            .find(|s| s.name == state)
            .map(|s| s.lgas.as_slice())
    }
}

/// The shopper's persisted delivery-area selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedSelection {
    /// Confirmed state name
    pub state: String,
    /// Confirmed LGA name
    pub lga: String,
}

/// Persists the shopper's confirmed state and LGA so the next session can
/// skip the location prompt.
///
/// # Errors
/// Returns an error if either write to the key-value store fails.
pub async fn save_selection(db: &DatabaseConnection, state: &str, lga: &str) -> Result<()> {
    storage::set(db, STATE_KEY, state).await?;
    storage::set(db, LGA_KEY, lga).await?;
    info!(state, lga, "saved delivery area selection");
    Ok(())
}

/// Loads the persisted delivery-area selection from a previous session.
///
/// Returns `None` when either key is absent or the store is unreadable; a
/// missing selection just means the shopper gets prompted again.
pub async fn load_selection(db: &DatabaseConnection) -> Option<SavedSelection> {
    let state = storage::get_lenient(db, STATE_KEY).await?;
    let lga = storage::get_lenient(db, LGA_KEY).await?;
    Some(SavedSelection { state, lga })
}
