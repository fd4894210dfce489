use super::types::{ErrorResponse, ExtractionRequest};
use crate::{
    Error, Result,
    config::ExtractionConfig,
    extraction::{IdCardRecord, extract_json, extraction_prompt},
    llm::{ChatCompletionRequest, ImageInput, LlmClient},
};
use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

pub const METHOD_NOT_ALLOWED_BODY: &str = "Method Not Allowed.  Only POST requests are supported.";

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmClient>,
    pub extraction: ExtractionConfig,
}

/// The body is decoded as JSON whatever `Content-Type` the caller sent.
pub async fn extract(State(state): State<AppState>, body: Bytes) -> Response {
    let request_id = Uuid::new_v4();
    info!("Received extraction request {}", request_id);

    match process(&state, &body).await {
        Ok(record) => {
            info!("Extraction request {} succeeded", request_id);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                record,
            )
                .into_response()
        }
        Err(e) => {
            let status = e.status_code();
            if status.is_server_error() {
                error!("Extraction request {} failed: {}", request_id, e);
            } else {
                warn!("Extraction request {} rejected: {}", request_id, e);
            }
            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn process(state: &AppState, body: &[u8]) -> Result<String> {
    let request: ExtractionRequest = serde_json::from_slice(body)
        .map_err(|e| Error::bad_request(format!("Invalid JSON in request body: {}", e)))?;

    let image = request
        .image
        .filter(|image| !image.is_empty())
        .map(ImageInput::parse)
        .ok_or(Error::MissingField)?;

    debug!(
        "Image is {} (data-URL: {}), {} base64 chars",
        image.mime_type,
        image.is_data_url,
        image.payload_len()
    );

    let prompt = extraction_prompt(state.extraction.prompt.as_deref());
    let content = state
        .llm
        .create_chat_completion(ChatCompletionRequest::new(prompt, image))
        .await?;

    let json = extract_json(&content).inspect_err(|_| {
        warn!("Model output holds no JSON object: {:?}", content);
    })?;

    if state.extraction.validate_record {
        IdCardRecord::validate(json)?;
    }

    Ok(json.to_string())
}

pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST"), (header::CONTENT_TYPE, "text/plain")],
        METHOD_NOT_ALLOWED_BODY,
    )
        .into_response()
}
