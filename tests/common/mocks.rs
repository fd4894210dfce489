use async_trait::async_trait;
use osobna_extract::{
    Error, Result,
    llm::{ChatCompletionRequest, LlmClient},
};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing
#[derive(Debug)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    pub upstream_error: Option<(u16, String)>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            upstream_error: None,
            error: None,
        }
    }

    pub fn with_content(self, content: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(content.into());
        self
    }

    pub fn with_upstream_error(mut self, status: u16, reason: &str) -> Self {
        self.upstream_error = Some((status, reason.to_string()));
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(&self, request: ChatCompletionRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request);

        if let Some((status, ref reason)) = self.upstream_error {
            return Err(Error::Upstream {
                status,
                reason: reason.clone(),
            });
        }

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}
