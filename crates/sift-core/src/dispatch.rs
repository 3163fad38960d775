//! Dispatch: the single entry point.
//!
//! `handle` is a pure function over its input: no I/O, no shared state, no
//! panics on any input shape. Concurrent callers need no coordination.

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::context::Context;
use crate::domain::envelope::Envelope;
use crate::domain::errors::DispatchError;
use crate::domain::event::RawEvent;
use crate::domain::request::{ParseFailure, Request};

/// Validate and normalize one inbound event.
///
/// The context is caller metadata only; it never influences the result.
pub fn handle(event: &Value, ctx: &Context) -> Envelope {
    let invocation = ctx.invocation_id().map(tracing::field::display);

    let Some(raw) = RawEvent::from_value(event) else {
        warn!(invocation, "rejected non-object event");
        return Envelope::error([DispatchError::NotAnObject]);
    };

    match Request::parse(&raw) {
        Ok(request) => {
            debug!(invocation, event_type = %request.event_type(), "event accepted");
            request.into_envelope()
        }
        Err(ParseFailure::UnknownType) => {
            warn!(invocation, event_type = raw.type_field(), "unknown event type");
            Envelope::error([DispatchError::UnknownEventType])
        }
        Err(ParseFailure::Fields(errors)) => {
            debug!(invocation, violations = errors.len(), "event failed validation");
            Envelope::error(errors)
        }
    }
}
