use serde::{Deserialize, Serialize};
use validator::Validate;

/// Contact-form payload. Lives for one request only: it is turned into the
/// two notification messages and then dropped.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InquiryPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    pub phone: String,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendEmailResponse {
    pub success: bool,
    pub message: String,
}
