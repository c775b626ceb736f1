//! Error types for the leads API client.
//!
//! # Design
//! The backend signals failures two ways: transport-level HTTP statuses
//! (404 for a missing lead on delete/update, 422 for malformed payloads)
//! and business failures wrapped in a `code != 200` envelope inside an
//! HTTP 200. `NotFound` and `Api` get dedicated variants because callers
//! frequently branch on them; everything else lands in `HttpError` with the
//! raw status and body for debugging.

use std::fmt;

/// Errors returned by `LeadClient` parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested lead or user does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    HttpError { status: u16, body: String },

    /// The server accepted the request but reported a business failure in
    /// the response envelope (e.g. marking a lead that was deleted).
    Api { code: i32, msg: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload or query could not be serialized.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Api { code, msg } => {
                write!(f, "API error {code}: {msg}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
