//! Boundary for the external generative-AI features (chat assistant, cake
//! image designer).
//!
//! The storefront core consumes this as a black box: failures surface as
//! [`Error::ExternalService`] chat messages and are never retried, and no core
//! invariant depends on anything behind this trait.

use crate::errors::{Error, Result};

/// A generative-AI backend the assistant pages talk to.
pub trait AssistantService {
    /// Sends a freeform prompt and returns the generated reply text.
    fn ask(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send;

    /// Generates an image from a text prompt, returning the raw image bytes.
    fn generate_image(&self, prompt: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Maps a backend-specific failure into the generic service error the chat
/// view displays.
#[must_use]
pub fn service_error(message: impl Into<String>) -> Error {
    Error::ExternalService {
        message: message.into(),
    }
}
