use axum::{extract::State, Json};
use validator::Validate;

use crate::dto::contact_dto::{InquiryPayload, SendEmailResponse};
use crate::AppState;

#[axum::debug_handler]
pub async fn send_email(
    State(state): State<AppState>,
    Json(payload): Json<InquiryPayload>,
) -> crate::error::Result<Json<SendEmailResponse>> {
    payload.validate()?;
    tracing::info!(name = %payload.name, "contact inquiry received");

    state.inquiry_service.dispatch(&payload).await?;

    Ok(Json(SendEmailResponse {
        success: true,
        message: "Emails sent successfully".to_string(),
    }))
}
