//! Envelope: the uniform response shape for every dispatch.
//!
//! Every call to `handle` produces exactly one `Envelope`, success or not.
//! The invariants are: `status == Ok` iff `errors` is empty, and `data` is
//! empty exactly when `status == Error`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome discriminator for an [`Envelope`].
///
/// Serialized lowercase ("ok" / "error") to match the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

/// The uniform `{status, message, data, errors}` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: Status,
    pub message: String,

    /// Normalized payload fields. Empty on error.
    pub data: Map<String, Value>,

    /// Every violation found, in field order. Empty on success.
    pub errors: Vec<String>,
}

impl Envelope {
    /// Success envelope with a per-kind message and the normalized fields.
    pub fn ok(message: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            status: Status::Ok,
            message: message.into(),
            data,
            errors: Vec::new(),
        }
    }

    /// Error envelope. Both failure tiers (structural and field-level) use
    /// the same "Validation failed" message; only `errors` differs.
    pub fn error<E: ToString>(errors: impl IntoIterator<Item = E>) -> Self {
        Self {
            status: Status::Error,
            message: "Validation failed".to_string(),
            data: Map::new(),
            errors: errors.into_iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Ok).unwrap(), "\"ok\"");
        assert_eq!(serde_json::to_string(&Status::Error).unwrap(), "\"error\"");
    }

    #[test]
    fn ok_envelope_holds_invariants() {
        let mut data = Map::new();
        data.insert("user_id".to_string(), json!(1));

        let env = Envelope::ok("Signup processed", data);
        assert!(env.is_ok());
        assert!(env.errors.is_empty());
        assert!(!env.data.is_empty());
    }

    #[test]
    fn error_envelope_holds_invariants() {
        let env = Envelope::error(["Invalid email"]);
        assert!(!env.is_ok());
        assert_eq!(env.message, "Validation failed");
        assert!(env.data.is_empty());
        assert_eq!(env.errors, vec!["Invalid email".to_string()]);
    }

    #[test]
    fn envelope_wire_shape() {
        let env = Envelope::error(["Unknown event type"]);
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(
            v,
            json!({
                "status": "error",
                "message": "Validation failed",
                "data": {},
                "errors": ["Unknown event type"],
            })
        );
    }

    #[test]
    fn envelope_roundtrip_json() {
        let env = Envelope::error(["Missing field: plan"]);
        let s = serde_json::to_string(&env).unwrap();
        let back: Envelope = serde_json::from_str(&s).unwrap();
        assert_eq!(back, env);
    }
}
