//! Error types for the todolist API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." The API answers business-level failures (unknown id, invalid
//! title) with HTTP 200 and a non-zero `resultCode`; those land in `Rejected`
//! with the server's messages. The store only cares whether an operation
//! failed; the variant is kept for logging and for callers that want it.

use thiserror::Error;

/// Errors returned by `TodolistClient` parse methods and by transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested resource does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The server answered with a non-zero result code.
    #[error("rejected by server (code {result_code}): {}", messages.join("; "))]
    Rejected {
        result_code: i32,
        messages: Vec<String>,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),
}
