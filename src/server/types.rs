use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ExtractionRequest {
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
