use std::sync::Arc;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{error::ApiError, models::inquiry_models::StoredInquiry, AppState};

#[derive(Deserialize)]
pub struct ListInquiriesQuery {
    #[serde(default)]
    unread: bool,
}

pub async fn list_inquiries(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListInquiriesQuery>,
) -> Result<Json<Vec<StoredInquiry>>, ApiError> {
    let inquiries = state.inquiry_repository.list(query.unread)?;
    Ok(Json(inquiries))
}

pub async fn get_inquiry(
    State(state): State<Arc<AppState>>,
    Path(inquiry_id): Path<String>,
) -> Result<Json<StoredInquiry>, ApiError> {
    let inquiry = state
        .inquiry_repository
        .find(&inquiry_id)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(inquiry))
}

pub async fn mark_inquiry_read(
    State(state): State<Arc<AppState>>,
    Path(inquiry_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.inquiry_repository.mark_read(&inquiry_id)? {
        return Err(ApiError::NotFound);
    }
    info!(inquiry_id = %inquiry_id, "Inquiry marked as read");
    Ok(Json(json!({
        "message": "Inquiry marked as read"
    })))
}

pub async fn unread_count(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let unread = state.inquiry_repository.unread_count()?;
    Ok(Json(json!({ "unread": unread })))
}
