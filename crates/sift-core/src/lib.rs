//! sift-core
//!
//! Validation and normalization for inbound intake events.
//!
//! An event arrives as an untyped JSON value with a `type` discriminator.
//! [`handle`] classifies it, parses it into a typed request, runs the
//! per-kind validator, and returns a uniform [`Envelope`] - success with the
//! normalized payload, or error with every violation found.
//!
//! # Modules
//! - **domain**: envelope, error taxonomy, event view, request union, context
//! - **validators**: per-kind parse/normalize logic plus the email-shape check
//! - **dispatch**: the single `handle(event, ctx) -> Envelope` entry point

pub mod dispatch;
pub mod domain;
pub mod validators;

pub use dispatch::handle;
pub use domain::context::{Context, InvocationId};
pub use domain::envelope::{Envelope, Status};
pub use domain::errors::{DispatchError, FieldError};
