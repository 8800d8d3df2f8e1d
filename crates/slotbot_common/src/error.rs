// --- File: crates/slotbot_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// Application-level error for wiring, configuration and request handling.
///
/// Domain crates keep their own error enums (validation, authentication, calendar)
/// and convert into this type where they meet the HTTP layer or start-up code.
#[derive(Error, Debug)]
pub enum SlotbotError {
    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for SlotbotError {
    fn status_code(&self) -> u16 {
        match self {
            SlotbotError::ParseError(_) => 400,
            SlotbotError::ConfigError(_) => 500,
            SlotbotError::ExternalServiceError { .. } => 502,
            SlotbotError::InternalError(_) => 500,
        }
    }
}

impl From<config::ConfigError> for SlotbotError {
    fn from(err: config::ConfigError) -> Self {
        SlotbotError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for SlotbotError {
    fn from(err: std::io::Error) -> Self {
        SlotbotError::InternalError(err.to_string())
    }
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> SlotbotError {
    SlotbotError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}
