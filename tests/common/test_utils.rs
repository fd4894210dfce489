use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use osobna_extract::{
    config::{Config, ExtractionConfig, LlmConfig, LogsConfig, ServerConfig},
    llm::LlmClient,
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;

pub const TEST_IMAGE: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRgABAQAAAQABAAD/2wBDAAgGBgcGBQgH";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8787,
            max_body_bytes: 1024 * 1024,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            base_url: "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions"
                .to_string(),
            api_key: "test-api-key".to_string(),
            model: "gemini-2.5-flash".to_string(),
        },
        extraction: ExtractionConfig::default(),
    }
}

pub fn create_test_app(llm: Arc<dyn LlmClient>, extraction: ExtractionConfig) -> Router {
    let config = create_test_config();
    let app_state = AppState { llm, extraction };

    server::router(app_state, config.server.max_body_bytes)
}

pub fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9000
  logs:
    level: "debug"

llm:
  base_url: "http://localhost:4000/v1/chat/completions"
  api_key: "file-api-key"
  model: "gemini-2.0-flash"

extraction:
  validate_record: true
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
