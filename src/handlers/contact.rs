use crate::dtos::{ContactInquiry, ContactResponse};
use crate::error::AppError;
use crate::models::INQUIRY_COLLECTION;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use validator::Validate;

pub async fn submit_contact(
    State(state): State<AppState>,
    Json(inquiry): Json<ContactInquiry>,
) -> Result<impl IntoResponse, AppError> {
    inquiry.validate()?;

    let store = state.store.as_ref().ok_or(AppError::StoreUnavailable)?;

    let record = inquiry.into_inquiry(Utc::now());
    let payload = mongodb::bson::to_document(&record)
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("Failed to encode inquiry: {}", e)))?;

    let id = store.create_document(INQUIRY_COLLECTION, payload).await?;
    tracing::info!(id = %id, "Stored contact inquiry");

    Ok(Json(ContactResponse { ok: true, id }))
}
