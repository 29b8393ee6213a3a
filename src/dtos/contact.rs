use crate::models::Inquiry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ContactInquiry {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 10, max = 2000, message = "Message must be 10-2000 characters"))]
    pub message: String,

    #[validate(length(max = 100, message = "Budget must be at most 100 characters"))]
    pub budget: Option<String>,

    #[validate(length(max = 100, message = "Project type must be at most 100 characters"))]
    pub project_type: Option<String>,
}

impl ContactInquiry {
    /// Stamps the submission with a server-assigned timestamp. Clients
    /// cannot supply `received_at`; it is not part of the request shape.
    pub fn into_inquiry(self, received_at: DateTime<Utc>) -> Inquiry {
        Inquiry {
            name: self.name,
            email: self.email,
            message: self.message,
            budget: self.budget,
            project_type: self.project_type,
            received_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub ok: bool,
    pub id: String,
}
