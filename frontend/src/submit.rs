use log::info;
use pathway_shared::{Inquiry, InquiryAck, SubmitError};

/// Hand a validated inquiry off. Without the `backend-submit` feature this is a
/// fixed delay followed by the canned acknowledgement, and it never fails.
#[cfg(not(feature = "backend-submit"))]
pub async fn submit_inquiry(inquiry: Inquiry) -> Result<InquiryAck, SubmitError> {
    use crate::config;

    info!(
        "Inquiry submitted by {} ({}), interests: {:?}",
        inquiry.full_name(),
        inquiry.education_level,
        inquiry.interested_in
    );
    gloo_timers::future::TimeoutFuture::new(config::MOCK_SUBMIT_DELAY_MS).await;
    Ok(InquiryAck::default())
}

#[cfg(feature = "backend-submit")]
pub async fn submit_inquiry(inquiry: Inquiry) -> Result<InquiryAck, SubmitError> {
    use crate::config;
    use gloo_net::http::Request;
    use pathway_shared::{FieldErrorsResponse, InquiryDraft};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct ErrorResponse {
        error: String,
    }

    info!("Posting inquiry for {}", inquiry.full_name());
    let body = InquiryDraft::from(inquiry);
    let response = Request::post(&format!("{}/api/inquiries", config::get_backend_url()))
        .json(&body)
        .map_err(|e| SubmitError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        return response
            .json::<InquiryAck>()
            .await
            .map_err(|e| SubmitError::Rejected(format!("Failed to parse response: {}", e)));
    }

    info!("Inquiry rejected with status {}", response.status());
    if response.status() == 422 {
        if let Ok(body) = response.json::<FieldErrorsResponse>().await {
            return Err(SubmitError::Invalid(body.fields));
        }
        return Err(SubmitError::Rejected(String::new()));
    }
    match response.json::<ErrorResponse>().await {
        Ok(body) => Err(SubmitError::Rejected(body.error)),
        Err(_) => Err(SubmitError::Rejected(String::new())),
    }
}
