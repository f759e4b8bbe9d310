//! Error types for AigenticPay core

use thiserror::Error;

/// Main error type for page and waitlist operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Section id outside the tracked set
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Email failed the syntax check
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Endpoint URL could not be parsed
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// Trigger band fractions out of range
    #[error("Invalid trigger band: {0}")]
    InvalidTriggerBand(String),

    /// Invalid operation for current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Reasons an email address is rejected before submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email is required")]
    Empty,

    #[error("missing '@' separator")]
    MissingAt,

    #[error("invalid local part")]
    InvalidLocalPart,

    #[error("invalid domain")]
    InvalidDomain,
}

/// Transport failure while delivering a submission.
///
/// Never surfaced to the person submitting; only logged.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Delivery failed: {0}")]
    Other(String),
}

/// Result type alias using CoreError
pub type CoreResult<T> = Result<T, CoreError>;
