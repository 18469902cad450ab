use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use pathway_shared::{InquiryAck, InquiryDraft};
use tracing::info;

use crate::{error::ApiError, AppState};

/// Accept a lead from the site. The draft goes through the same rules the
/// form applies, so an out-of-date client still gets per-field messages.
pub async fn create_inquiry(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<InquiryDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<InquiryAck>), ApiError> {
    let Json(draft) = payload?;
    let inquiry = draft.validate()?;
    let stored = state.inquiry_repository.create(&inquiry)?;

    info!(
        inquiry_id = %stored.id,
        education_level = %inquiry.education_level,
        interests = inquiry.interested_in.len(),
        "Stored new inquiry"
    );

    Ok((StatusCode::CREATED, Json(InquiryAck::default())))
}
