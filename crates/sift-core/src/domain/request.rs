//! Request: the discriminated union of parsed event kinds.
//!
//! Classification and field validation happen in one explicit parse step;
//! after that, every consumer works with typed fields. The match in
//! [`Request::into_envelope`] is exhaustive, so adding a kind forces every
//! seam to handle it.

use crate::domain::envelope::Envelope;
use crate::domain::errors::FieldError;
use crate::domain::event::RawEvent;
use crate::domain::event_type::EventType;
use crate::validators::payment::PaymentRequest;
use crate::validators::signup::SignupRequest;
use crate::validators::upload::UploadRequest;

/// One inbound event, classified and field-validated.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Signup(SignupRequest),
    Payment(PaymentRequest),
    FileUpload(UploadRequest),
}

/// Why an event failed to become a [`Request`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParseFailure {
    /// No recognized `type` discriminator; the structural tier.
    UnknownType,

    /// The kind was recognized but its fields did not validate.
    Fields(Vec<FieldError>),
}

impl Request {
    /// Classify by the `type` field, then run the matching validator.
    pub fn parse(event: &RawEvent<'_>) -> Result<Self, ParseFailure> {
        let kind = event
            .type_field()
            .and_then(EventType::parse)
            .ok_or(ParseFailure::UnknownType)?;

        let request = match kind {
            EventType::UserSignup => Self::Signup(
                SignupRequest::parse(event).map_err(ParseFailure::Fields)?,
            ),
            EventType::Payment => Self::Payment(
                PaymentRequest::parse(event).map_err(ParseFailure::Fields)?,
            ),
            EventType::FileUpload => Self::FileUpload(
                UploadRequest::parse(event).map_err(ParseFailure::Fields)?,
            ),
        };
        Ok(request)
    }

    pub fn event_type(&self) -> EventType {
        match self {
            Self::Signup(_) => EventType::UserSignup,
            Self::Payment(_) => EventType::Payment,
            Self::FileUpload(_) => EventType::FileUpload,
        }
    }

    /// Normalize and wrap in the success envelope with the per-kind message.
    pub fn into_envelope(self) -> Envelope {
        match self {
            Self::Signup(req) => Envelope::ok("Signup processed", req.normalize().into_fields()),
            Self::Payment(req) => Envelope::ok("Payment processed", req.normalize().into_fields()),
            Self::FileUpload(req) => {
                Envelope::ok("Upload processed", req.normalize().into_fields())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn parse(value: &Value) -> Result<Request, ParseFailure> {
        Request::parse(&RawEvent::from_value(value).unwrap())
    }

    #[rstest]
    #[case::absent(json!({}))]
    #[case::unrecognized(json!({"type": "REFUND"}))]
    #[case::wrong_case(json!({"type": "user_signup"}))]
    #[case::non_string(json!({"type": 3}))]
    fn unknown_discriminators_are_structural(#[case] value: Value) {
        assert_eq!(parse(&value), Err(ParseFailure::UnknownType));
    }

    #[test]
    fn field_failures_carry_every_error() {
        let failure = parse(&json!({"type": "PAYMENT"})).unwrap_err();
        match failure {
            ParseFailure::Fields(errs) => assert_eq!(errs.len(), 4),
            other => panic!("expected field failure, got {other:?}"),
        }
    }

    #[rstest]
    #[case::signup(
        json!({"type": "USER_SIGNUP", "user_id": 1, "email": "a@b.c", "plan": "free"}),
        EventType::UserSignup,
        "Signup processed"
    )]
    #[case::payment(
        json!({"type": "PAYMENT", "payment_id": "p", "user_id": 1, "amount": 1, "currency": "USD"}),
        EventType::Payment,
        "Payment processed"
    )]
    #[case::upload(
        json!({"type": "FILE_UPLOAD", "file_name": "f", "size_bytes": 0, "bucket": "b", "uploader": "a@b.c"}),
        EventType::FileUpload,
        "Upload processed"
    )]
    fn each_kind_parses_to_its_variant(
        #[case] value: Value,
        #[case] expected: EventType,
        #[case] message: &str,
    ) {
        let request = parse(&value).unwrap();
        assert_eq!(request.event_type(), expected);

        let envelope = request.into_envelope();
        assert!(envelope.is_ok());
        assert_eq!(envelope.message, message);
    }
}
