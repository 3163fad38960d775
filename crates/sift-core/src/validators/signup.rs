//! USER_SIGNUP validation and normalization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::errors::FieldError;
use crate::domain::event::RawEvent;

use super::email::is_email_shaped;

const REQUIRED: &[&str] = &["user_id", "email", "plan"];

/// Subscription plans, matched case-insensitively on input and rendered
/// lowercase on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Free,
    Pro,
    Edu,
}

impl Plan {
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("free") {
            Some(Self::Free)
        } else if s.eq_ignore_ascii_case("pro") {
            Some(Self::Pro)
        } else if s.eq_ignore_ascii_case("edu") {
            Some(Self::Edu)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Edu => "edu",
        }
    }
}

/// A signup event whose fields all passed validation. Values are still as
/// the caller sent them; [`SignupRequest::normalize`] canonicalizes them.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupRequest {
    user_id: i64,
    email: String,
    plan: Plan,
}

/// Normalized signup payload: the success `data` fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupData {
    pub user_id: i64,
    pub email: String,
    pub plan: Plan,
    pub welcome_email_subject: String,
}

impl SignupRequest {
    /// Two-phase validation. A missing required field stops the type phase
    /// entirely; within the type phase, every violation is collected.
    pub fn parse(event: &RawEvent<'_>) -> Result<Self, Vec<FieldError>> {
        let missing = event.missing(REQUIRED);
        if !missing.is_empty() {
            return Err(missing);
        }

        let mut errors = Vec::new();

        let user_id = event.get("user_id").and_then(Value::as_i64);
        if user_id.is_none() {
            errors.push(FieldError::ExpectedInt("user_id"));
        }

        let email = event
            .get("email")
            .and_then(Value::as_str)
            .filter(|s| is_email_shaped(s));
        if email.is_none() {
            errors.push(FieldError::InvalidEmail);
        }

        let plan = event.get("plan").and_then(Value::as_str).and_then(Plan::parse);
        if plan.is_none() {
            errors.push(FieldError::InvalidPlan);
        }

        match (user_id, email, plan) {
            (Some(user_id), Some(email), Some(plan)) => Ok(Self {
                user_id,
                email: email.to_string(),
                plan,
            }),
            _ => Err(errors),
        }
    }

    /// Canonicalize: lowercase the email, derive the welcome subject.
    pub fn normalize(self) -> SignupData {
        let plan = self.plan;
        SignupData {
            user_id: self.user_id,
            email: self.email.to_lowercase(),
            plan,
            welcome_email_subject: format!("Welcome to the {} plan!", plan.as_str()),
        }
    }
}

impl SignupData {
    pub fn into_fields(self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("user_id".to_string(), self.user_id.into());
        fields.insert("email".to_string(), self.email.into());
        fields.insert("plan".to_string(), self.plan.as_str().into());
        fields.insert(
            "welcome_email_subject".to_string(),
            self.welcome_email_subject.into(),
        );
        fields
    }
}
