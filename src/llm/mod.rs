mod client;
mod types;

pub use client::{LlmClient, OpenAiCompatClient};
pub use types::*;
