//! Per-kind validators.
//!
//! Each event kind gets an independent pure function pair: a fallible
//! `parse` over the raw fields (presence phase, then accumulated
//! type/content checks) and an infallible `normalize` producing the success
//! payload. The kinds share nothing beyond the email-shape check and the
//! envelope shape.

pub mod email;
pub mod payment;
pub mod signup;
pub mod upload;
