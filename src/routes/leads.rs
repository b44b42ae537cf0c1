use axum::{extract::State, Json};
use validator::Validate;

use crate::dto::lead_dto::{LeadPayload, SubmitDetailsResponse};
use crate::AppState;

#[axum::debug_handler]
pub async fn submit_details(
    State(state): State<AppState>,
    Json(payload): Json<LeadPayload>,
) -> crate::error::Result<Json<SubmitDetailsResponse>> {
    payload.validate()?;

    match state.leads.insert(payload.into_new_lead()).await {
        Ok(lead) => {
            tracing::info!(lead_id = %lead.id, "lead captured");
            Ok(Json(SubmitDetailsResponse {
                success: true,
                message: "Details saved successfully".to_string(),
            }))
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to save lead");
            Err(e)
        }
    }
}
