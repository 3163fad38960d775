//! RawEvent: a borrowed, read-only view over an inbound JSON object.
//!
//! The caller owns the event; validators only ever look at it. The view
//! distinguishes an absent key from a key that is present with JSON `null` -
//! presence is about the key, not the value, so `{"user_id": null}` passes
//! the presence phase and fails the type phase.

use serde_json::{Map, Value};

use super::errors::FieldError;

/// Read-only view over the fields of one inbound event.
#[derive(Debug, Clone, Copy)]
pub struct RawEvent<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> RawEvent<'a> {
    /// Returns `None` unless the value is a JSON object.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(|fields| Self { fields })
    }

    /// The `type` discriminator, if present as a string.
    pub fn type_field(&self) -> Option<&'a str> {
        self.fields.get("type")?.as_str()
    }

    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.fields.get(name)
    }

    /// Presence phase: one error per absent required field, in the order
    /// the fields are declared.
    pub fn missing(&self, required: &[&'static str]) -> Vec<FieldError> {
        required
            .iter()
            .copied()
            .filter(|name| !self.fields.contains_key(*name))
            .map(FieldError::Missing)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::null(json!(null))]
    #[case::number(json!(42))]
    #[case::string(json!("USER_SIGNUP"))]
    #[case::array(json!([{"type": "PAYMENT"}]))]
    #[case::bool(json!(true))]
    fn only_objects_become_events(#[case] value: Value) {
        assert!(RawEvent::from_value(&value).is_none());
    }

    #[test]
    fn null_value_counts_as_present() {
        let value = json!({"user_id": null});
        let event = RawEvent::from_value(&value).unwrap();

        assert!(event.missing(&["user_id"]).is_empty());
        assert_eq!(event.get("user_id"), Some(&Value::Null));
    }

    #[test]
    fn missing_fields_keep_declared_order() {
        let value = json!({"email": "a@b.c"});
        let event = RawEvent::from_value(&value).unwrap();

        let missing = event.missing(&["user_id", "email", "plan"]);
        assert_eq!(
            missing,
            vec![FieldError::Missing("user_id"), FieldError::Missing("plan")]
        );
    }

    #[test]
    fn type_field_requires_a_string() {
        let value = json!({"type": 7});
        let event = RawEvent::from_value(&value).unwrap();
        assert_eq!(event.type_field(), None);

        let value = json!({"type": "FILE_UPLOAD"});
        let event = RawEvent::from_value(&value).unwrap();
        assert_eq!(event.type_field(), Some("FILE_UPLOAD"));
    }
}
