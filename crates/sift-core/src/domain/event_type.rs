//! EventType: the `type` discriminator as a closed enum.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The recognized event kinds.
///
/// Serialized SCREAMING_SNAKE_CASE to match the wire discriminator:
/// USER_SIGNUP / PAYMENT / FILE_UPLOAD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    UserSignup,
    Payment,
    FileUpload,
}

impl EventType {
    /// Exact-match parse of the wire discriminator. No case folding here:
    /// `"user_signup"` is an unknown type, unlike field values such as
    /// `plan` and `currency` which are matched case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "USER_SIGNUP" => Some(Self::UserSignup),
            "PAYMENT" => Some(Self::Payment),
            "FILE_UPLOAD" => Some(Self::FileUpload),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserSignup => "USER_SIGNUP",
            Self::Payment => "PAYMENT",
            Self::FileUpload => "FILE_UPLOAD",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
