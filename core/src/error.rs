//! Error types for the student records API client.
//!
//! # Design
//! Three failure layers, checked in this order for every operation:
//! - `Unreachable`: the transport never completed the exchange.
//! - `HttpError`: the exchange completed with a non-2xx status.
//! - `Rejected`: HTTP succeeded but the envelope's `status` is not
//!   `"success"`. Its display text is exactly the server's message (or the
//!   per-operation fallback) so it can be shown to a user verbatim.
//!
//! Payload (de)serialization failures get their own variants, as before.

use thiserror::Error;

use crate::http::TransportError;

/// Errors returned by `StudentClient` parse methods and `StudentApi` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend could not be reached at all.
    #[error("Cannot connect to server. Please ensure the backend server is running at {base_url}.")]
    Unreachable {
        base_url: String,
        #[source]
        source: TransportError,
    },

    /// The server answered with a status outside 2xx.
    #[error("HTTP error! status: {status}")]
    HttpError { status: u16, body: String },

    /// The envelope reported a logical failure.
    #[error("{message}")]
    Rejected { message: String },

    /// The response body could not be deserialized into the expected envelope.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Field-level problems found by `NewStudent::validate` / `UpdateStudent::validate`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("GPA must be between 0 and 10, got {0}")]
    GpaOutOfRange(f64),
}

/// Raised by `Notifier::show` when no Tokio runtime is available to run the
/// dismissal timers. Nothing is mounted in that case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    #[error("no Tokio runtime available to schedule the notification")]
    NoRuntime,
}
