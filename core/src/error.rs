//! Error types for the pricing API client.
//!
//! # Design
//! Every failure surfaces once, synchronously, to the caller of the service
//! method that triggered it. Nothing is retried or swallowed. URLs stored in
//! errors have the API key redacted so an error can be logged as-is.

use thiserror::Error;

use crate::validate::ValidationError;

/// Errors returned by the client and its services.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client was constructed with an empty API key or an unusable base URL.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never produced a response (DNS, connect, TLS, I/O).
    #[error("transport error for {url}: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a status outside 200..=299.
    #[error("failed to fetch {url}: {status} {status_text}")]
    RequestFailed {
        url: String,
        status: u16,
        status_text: String,
    },

    /// The response body is not valid JSON.
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },

    /// A POST body could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The decoded JSON does not match the declared response contract.
    #[error("response violates contract: {0}")]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// HTTP status of a `RequestFailed` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Replace the value of the `key` query parameter with `***`.
pub(crate) fn redact_key(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let pairs: Vec<String> = query
        .split('&')
        .map(|pair| {
            if pair == "key" || pair.starts_with("key=") {
                "key=***".to_string()
            } else {
                pair.to_string()
            }
        })
        .collect();
    format!("{base}?{}", pairs.join("&"))
}
