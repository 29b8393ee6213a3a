use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The name of the collection inquiries are persisted into.
pub const INQUIRY_COLLECTION: &str = "contactinquiry";

/// A contact-form submission as persisted. Immutable after insert; the
/// store owns the record and the service keeps only the returned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub received_at: DateTime<Utc>,
}
