//! Helpers for the `osobna-post` command-line client.

use crate::Result;
use base64::{Engine, engine::general_purpose::STANDARD};
use std::path::Path;
use tracing::warn;

const FALLBACK_MIME_TYPE: &str = "image/jpeg";

/// Guesses an image mime type from the file extension.
pub fn guess_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

pub fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Reads an image file and returns it as a data-URL.
pub async fn encode_image_file(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path).await?;

    let mime_type = guess_mime_type(path).unwrap_or_else(|| {
        warn!(
            "Could not detect mime type of {}, assuming {}",
            path.display(),
            FALLBACK_MIME_TYPE
        );
        FALLBACK_MIME_TYPE
    });

    Ok(to_data_url(mime_type, &bytes))
}
