//! PAYMENT validation and normalization.
//!
//! Monetary values are f64 rounded to 3 decimal places with explicit
//! round-half-to-even tie handling, so the fee arithmetic is deterministic
//! across platforms.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::errors::FieldError;
use crate::domain::event::RawEvent;

const REQUIRED: &[&str] = &["payment_id", "user_id", "amount", "currency"];

/// Fee charged on every payment, applied to the rounded amount.
const FEE_RATE: f64 = 0.02;

/// Supported settlement currencies, matched case-insensitively on input and
/// rendered uppercase on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Bhd,
    Usd,
    Eur,
}

impl Currency {
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("BHD") {
            Some(Self::Bhd)
        } else if s.eq_ignore_ascii_case("USD") {
            Some(Self::Usd)
        } else if s.eq_ignore_ascii_case("EUR") {
            Some(Self::Eur)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bhd => "BHD",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }
}

/// Round to 3 decimal places, ties to even (banker's rounding).
fn round3(value: f64) -> f64 {
    (value * 1000.0).round_ties_even() / 1000.0
}

/// A payment event whose fields all passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    payment_id: String,
    user_id: i64,
    amount: f64,
    currency: Currency,
}

/// Normalized payment payload: the success `data` fields.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentData {
    pub payment_id: String,
    pub user_id: i64,
    pub amount: f64,
    pub currency: Currency,
    pub fee: f64,
    pub net_amount: f64,
}

impl PaymentRequest {
    /// Two-phase validation; see [`SignupRequest::parse`] for the policy.
    ///
    /// `amount` accepts integers and floats (never booleans) and must be
    /// strictly positive.
    ///
    /// [`SignupRequest::parse`]: super::signup::SignupRequest::parse
    pub fn parse(event: &RawEvent<'_>) -> Result<Self, Vec<FieldError>> {
        let missing = event.missing(REQUIRED);
        if !missing.is_empty() {
            return Err(missing);
        }

        let mut errors = Vec::new();

        let payment_id = event.get("payment_id").and_then(Value::as_str);
        if payment_id.is_none() {
            errors.push(FieldError::ExpectedString("payment_id"));
        }

        let user_id = event.get("user_id").and_then(Value::as_i64);
        if user_id.is_none() {
            errors.push(FieldError::ExpectedInt("user_id"));
        }

        let amount = event
            .get("amount")
            .and_then(Value::as_f64)
            .filter(|amount| *amount > 0.0);
        if amount.is_none() {
            errors.push(FieldError::AmountNotPositive);
        }

        let currency = event
            .get("currency")
            .and_then(Value::as_str)
            .and_then(Currency::parse);
        if currency.is_none() {
            errors.push(FieldError::InvalidCurrency);
        }

        match (payment_id, user_id, amount, currency) {
            (Some(payment_id), Some(user_id), Some(amount), Some(currency)) => Ok(Self {
                payment_id: payment_id.to_string(),
                user_id,
                amount,
                currency,
            }),
            _ => Err(errors),
        }
    }

    /// Round the amount, derive the fee and the net amount.
    pub fn normalize(self) -> PaymentData {
        let amount = round3(self.amount);
        let fee = round3(amount * FEE_RATE);
        let net_amount = round3(amount - fee);
        PaymentData {
            payment_id: self.payment_id,
            user_id: self.user_id,
            amount,
            currency: self.currency,
            fee,
            net_amount,
        }
    }
}

impl PaymentData {
    pub fn into_fields(self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("payment_id".to_string(), self.payment_id.into());
        fields.insert("user_id".to_string(), self.user_id.into());
        fields.insert("amount".to_string(), self.amount.into());
        fields.insert("currency".to_string(), self.currency.as_str().into());
        fields.insert("fee".to_string(), self.fee.into());
        fields.insert("net_amount".to_string(), self.net_amount.into());
        fields
    }
}
