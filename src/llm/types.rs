use serde::{Deserialize, Serialize};

const DEFAULT_MIME_TYPE: &str = "image/jpeg";
const DATA_URL_SUBTYPES: &[&str] = &["jpeg", "png", "gif"];

/// Image as the caller sent it, plus whatever the data-URL prefix says about it.
///
/// `url` is never rewritten: the provider accepts both bare base64 and
/// data-URLs, so the original string goes out unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInput {
    pub url: String,
    pub mime_type: String,
    pub is_data_url: bool,
}

impl ImageInput {
    pub fn parse(raw: impl Into<String>) -> Self {
        let url = raw.into();
        let sniffed = sniff_mime_type(&url);

        Self {
            mime_type: sniffed
                .map(|subtype| format!("image/{}", subtype))
                .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
            is_data_url: sniffed.is_some(),
            url,
        }
    }

    /// Length of the base64 payload without the data-URL prefix.
    pub fn payload_len(&self) -> usize {
        match self.url.split_once(";base64,") {
            Some((_, payload)) if self.is_data_url => payload.len(),
            _ => self.url.len(),
        }
    }
}

/// Returns the image subtype of a `data:image/<jpeg|png|gif>;base64,` prefix.
fn sniff_mime_type(raw: &str) -> Option<&'static str> {
    let rest = raw.strip_prefix("data:image/")?;
    let (subtype, _) = rest.split_once(";base64,")?;
    DATA_URL_SUBTYPES.iter().copied().find(|s| *s == subtype)
}

/// One vision turn: an instruction and the image it applies to.
#[derive(Debug, Clone)]
pub struct ChatCompletionRequest {
    pub prompt: String,
    pub image: ImageInput,
}

impl ChatCompletionRequest {
    pub fn new(prompt: impl Into<String>, image: ImageInput) -> Self {
        Self {
            prompt: prompt.into(),
            image,
        }
    }

    pub fn to_message(&self) -> ChatMessage {
        ChatMessage {
            role: "user".to_string(),
            content: vec![
                ContentPart::Text {
                    text: self.prompt.clone(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: self.image.url.clone(),
                    },
                },
            ],
        }
    }

    /// Wire body for an OpenAI-compatible `chat/completions` call.
    pub fn to_request_body(&self, model: &str) -> ChatCompletionBody {
        ChatCompletionBody {
            model: model.to_string(),
            messages: vec![self.to_message()],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionBody {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// The part of a chat-completions answer this service reads.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    pub fn into_first_content(self) -> Result<String, crate::Error> {
        self.choices
            .into_iter()
            .next()
            .ok_or_else(|| crate::Error::llm("completion response has no choices"))?
            .message
            .content
            .ok_or_else(|| crate::Error::llm("first choice has no message content"))
    }
}
