//! Domain model: the shapes that cross the dispatcher's boundary.

pub mod context;
pub mod envelope;
pub mod errors;
pub mod event;
pub mod event_type;
pub mod request;

pub use context::{Context, InvocationId};
pub use envelope::{Envelope, Status};
pub use errors::{DispatchError, FieldError};
pub use event::RawEvent;
pub use event_type::EventType;
pub use request::Request;
