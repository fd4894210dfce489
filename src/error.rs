use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing 'image' field in request body")]
    MissingField,

    #[error("{0}")]
    BadRequest(String),

    #[error("Gemini API Error: {status} {reason}")]
    Upstream { status: u16, reason: String },

    #[error("Upstream returned unparseable content")]
    InvalidJson,

    #[error("Upstream returned an unexpected record: {0}")]
    SchemaMismatch(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn schema(msg: impl Into<String>) -> Self {
        Self::SchemaMismatch(msg.into())
    }

    /// HTTP status the handler answers with when this error reaches it.
    ///
    /// Upstream failures keep the provider's own status; a status the
    /// provider sent that is not a valid code degrades to 502.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::InvalidJson | Self::SchemaMismatch(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
