//! Caller context: opaque metadata passed alongside each event.
//!
//! The dispatcher never branches on the context - it exists so a caller can
//! tag an invocation (and so trace output can carry that tag). Validators
//! do not see it at all.

use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// ULID-backed invocation identifier.
///
/// ULIDs sort by creation time and need no coordination to generate, which
/// suits a stateless dispatcher invoked from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvocationId(Ulid);

impl InvocationId {
    pub fn generate() -> Self {
        Self(Ulid::new())
    }

    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl fmt::Display for InvocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inv-{}", self.0)
    }
}

/// Per-invocation metadata. Reserved for the caller; not inspected by the
/// validation logic.
#[derive(Debug, Clone, Default)]
pub struct Context {
    invocation_id: Option<InvocationId>,
}

impl Context {
    /// Context with no invocation tag.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_invocation_id(invocation_id: InvocationId) -> Self {
        Self {
            invocation_id: Some(invocation_id),
        }
    }

    pub fn invocation_id(&self) -> Option<InvocationId> {
        self.invocation_id
    }
}
