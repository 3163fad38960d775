//! Error taxonomy, in two tiers.
//!
//! Structural failures ([`DispatchError`]) mean the event could not even be
//! routed to a validator; they always surface as a single-error envelope.
//! Field failures ([`FieldError`]) accumulate within a validation phase and
//! surface together. The `Display` output of each variant is the wire
//! contract - callers compare these strings, so they never change casually.

use thiserror::Error;

/// The event cannot be routed to any validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The input is not a key-value mapping at all.
    #[error("Invalid JSON structure")]
    NotAnObject,

    /// The `type` field is absent, non-string, or not a recognized kind.
    #[error("Unknown event type")]
    UnknownEventType,
}

/// One failed field check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Missing field: {0}")]
    Missing(&'static str),

    #[error("{0} must be int")]
    ExpectedInt(&'static str),

    #[error("{0} must be string")]
    ExpectedString(&'static str),

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid plan")]
    InvalidPlan,

    #[error("amount must be positive number")]
    AmountNotPositive,

    #[error("Invalid currency")]
    InvalidCurrency,

    /// Covers both a non-integer value and a negative one.
    #[error("size_bytes must be >= 0")]
    SizeBytesOutOfRange,

    #[error("Invalid uploader email")]
    InvalidUploaderEmail,
}
