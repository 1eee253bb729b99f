//! Error types for the weather pipeline and location resolver
//!
//! None of these escape the library surface: the pipeline collapses every
//! failure into the fallback view and the resolver collapses into `None`.
//! They exist so the inner fetch paths stay testable and each fallback
//! site can log what actually went wrong.

use thiserror::Error;

/// Errors produced while fetching or decoding a weather report
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (DNS, TLS, timeout, reset connection)
    #[error("weather request failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// Provider answered with a non-success status code
    #[error("weather provider returned HTTP {status}")]
    Status { status: reqwest::StatusCode },

    /// Response body was not valid JSON for the expected document
    #[error("weather payload is not valid JSON: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// JSON decoded but required data was missing or unusable
    #[error("weather payload has an unexpected shape: {message}")]
    Shape { message: String },
}

impl FetchError {
    /// Create a new shape error
    pub fn shape<S: Into<String>>(message: S) -> Self {
        Self::Shape {
            message: message.into(),
        }
    }
}

/// Errors produced while resolving the host's coordinates
#[derive(Error, Debug)]
pub enum LocationError {
    /// Transport-level failure reaching the geolocation endpoint
    #[error("location request failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-success status code
    #[error("location service returned HTTP {status}")]
    Status { status: reqwest::StatusCode },

    /// Endpoint answered but did not provide a usable fix
    #[error("location lookup refused: {message}")]
    Refused { message: String },

    /// Response body was not the expected JSON document
    #[error("location payload is not valid JSON: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

impl LocationError {
    /// Create a new refusal error
    pub fn refused<S: Into<String>>(message: S) -> Self {
        Self::Refused {
            message: message.into(),
        }
    }
}

/// Errors produced while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A setting failed validation
    #[error("invalid configuration: {message}")]
    Invalid { message: String },

    /// An environment variable override could not be parsed
    #[error("invalid configuration: {variable} does not hold a number, got {value:?}")]
    BadEnv {
        variable: &'static str,
        value: String,
    },
}

impl ConfigError {
    /// Create a new validation error
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
