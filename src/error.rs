//! Error types for pagewalk
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for pagewalk
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Binding Errors
    // ============================================================================
    #[error("Binding error: {message}")]
    Binding { message: String },

    // ============================================================================
    // Engine Protocol Errors
    // ============================================================================
    #[error("Paged sequence is exhausted")]
    SequenceExhausted,

    #[error("A page fetch is already in flight (or was aborted) for this sequence")]
    FetchInFlight,

    #[error("Malformed continuation marker: {message}")]
    MalformedMarker { message: String },

    #[error("Invalid call arguments: {message}")]
    InvalidArguments { message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a not-found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a binding error
    pub fn binding(message: impl Into<String>) -> Self {
        Self::Binding {
            message: message.into(),
        }
    }

    /// Create a malformed-marker error
    pub fn malformed_marker(message: impl Into<String>) -> Self {
        Self::MalformedMarker {
            message: message.into(),
        }
    }

    /// Create an invalid-arguments error
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            message: message.into(),
        }
    }

    /// Check if this error is the recoverable-absence condition
    ///
    /// This is the canonical predicate fed to [`crate::FallbackPolicy`]:
    /// a typed not-found, or its raw HTTP 404 equivalent.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::HttpStatus { status, .. } => *status == 404,
            _ => false,
        }
    }
}

/// Result type alias for pagewalk
pub type Result<T> = std::result::Result<T, Error>;
