//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." Both carry the message taken from the response's `error` field,
//! or the status reason phrase when the body has none.

use thiserror::Error;

/// Failure reported by a `Transport` before any HTTP status was received.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors surfaced by `TodoClient` and `TodoController`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("HTTP error! status: 404, message: {message}")]
    NotFound { message: String },

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP error! status: {status}, message: {message}")]
    HttpError { status: u16, message: String },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// Client-side validation rejected an empty title.
    #[error("Todo title cannot be empty!")]
    EmptyTitle,
}

impl ApiError {
    /// Validation failures are warnings; everything else is an error.
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::EmptyTitle)
    }
}
