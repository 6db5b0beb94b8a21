use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{CompletionProvider, CompletionResponse, Message};
use crate::errors::CompletionError;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct OpenAiProvider {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(
        &self,
        messages: &[Message],
        functions: Option<&[Value]>,
    ) -> Result<CompletionResponse, CompletionError> {
        // Fail before any network activity when no key is configured.
        if self.api_key.is_empty() {
            return Err(CompletionError::MissingApiKey);
        }

        let mut body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": 0.2,
        });
        if let Some(functions) = functions {
            body["functions"] = json!(functions);
            body["function_call"] = json!("auto");
        }

        let resp = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .timeout(REQUEST_TIMEOUT)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "completion request failed");
                CompletionError::Transport(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "completion API returned error");
            return Err(CompletionError::Api { status, body });
        }

        Ok(resp.json().await?)
    }
}
