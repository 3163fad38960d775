//! FILE_UPLOAD validation and normalization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::errors::FieldError;
use crate::domain::event::RawEvent;

use super::email::is_email_shaped;

const REQUIRED: &[&str] = &["file_name", "size_bytes", "bucket", "uploader"];

/// Storage tier assigned from the upload size.
///
/// Serialized SCREAMING_SNAKE_CASE: STANDARD / STANDARD_IA / GLACIER.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageClass {
    Standard,
    StandardIa,
    Glacier,
}

impl StorageClass {
    /// Tiering thresholds: under 1 MB stays STANDARD, under 50 MB moves to
    /// infrequent access, everything else goes to cold storage.
    pub fn for_size(size_bytes: i64) -> Self {
        if size_bytes < 1_000_000 {
            Self::Standard
        } else if size_bytes < 50_000_000 {
            Self::StandardIa
        } else {
            Self::Glacier
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::StandardIa => "STANDARD_IA",
            Self::Glacier => "GLACIER",
        }
    }
}

/// An upload event whose fields all passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    file_name: String,
    size_bytes: i64,
    bucket: String,
    uploader: String,
}

/// Normalized upload payload: the success `data` fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadData {
    pub file_name: String,
    pub size_bytes: i64,
    pub bucket: String,
    pub uploader: String,
    pub storage_class: StorageClass,
}

impl UploadRequest {
    /// Two-phase validation; see [`SignupRequest::parse`] for the policy.
    ///
    /// `size_bytes` must be a non-negative integer; both failures share the
    /// same error string.
    ///
    /// [`SignupRequest::parse`]: super::signup::SignupRequest::parse
    pub fn parse(event: &RawEvent<'_>) -> Result<Self, Vec<FieldError>> {
        let missing = event.missing(REQUIRED);
        if !missing.is_empty() {
            return Err(missing);
        }

        let mut errors = Vec::new();

        let file_name = event.get("file_name").and_then(Value::as_str);
        if file_name.is_none() {
            errors.push(FieldError::ExpectedString("file_name"));
        }

        let size_bytes = event
            .get("size_bytes")
            .and_then(Value::as_i64)
            .filter(|size| *size >= 0);
        if size_bytes.is_none() {
            errors.push(FieldError::SizeBytesOutOfRange);
        }

        let bucket = event.get("bucket").and_then(Value::as_str);
        if bucket.is_none() {
            errors.push(FieldError::ExpectedString("bucket"));
        }

        let uploader = event
            .get("uploader")
            .and_then(Value::as_str)
            .filter(|s| is_email_shaped(s));
        if uploader.is_none() {
            errors.push(FieldError::InvalidUploaderEmail);
        }

        match (file_name, size_bytes, bucket, uploader) {
            (Some(file_name), Some(size_bytes), Some(bucket), Some(uploader)) => Ok(Self {
                file_name: file_name.to_string(),
                size_bytes,
                bucket: bucket.to_string(),
                uploader: uploader.to_string(),
            }),
            _ => Err(errors),
        }
    }

    /// Trim the file name, lowercase bucket and uploader, derive the tier
    /// from the validated size.
    pub fn normalize(self) -> UploadData {
        UploadData {
            file_name: self.file_name.trim().to_string(),
            size_bytes: self.size_bytes,
            bucket: self.bucket.to_lowercase(),
            uploader: self.uploader.to_lowercase(),
            storage_class: StorageClass::for_size(self.size_bytes),
        }
    }
}

impl UploadData {
    pub fn into_fields(self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("file_name".to_string(), self.file_name.into());
        fields.insert("size_bytes".to_string(), self.size_bytes.into());
        fields.insert("bucket".to_string(), self.bucket.into());
        fields.insert("uploader".to_string(), self.uploader.into());
        fields.insert("storage_class".to_string(), self.storage_class.as_str().into());
        fields
    }
}
