use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::lead::NewLead;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LeadPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "university must not be empty"))]
    pub university: String,
    #[validate(length(min = 1, message = "year must not be empty"))]
    pub year: String,
    #[validate(length(min = 1, message = "semester must not be empty"))]
    pub semester: String,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    pub phone: String,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
}

impl LeadPayload {
    /// Stamps the record with the request-receipt time.
    pub fn into_new_lead(self) -> NewLead {
        NewLead {
            name: self.name,
            university: self.university,
            year: self.year,
            semester: self.semester,
            phone: self.phone,
            email: self.email,
            submitted_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitDetailsResponse {
    pub success: bool,
    pub message: String,
}
