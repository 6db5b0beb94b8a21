pub mod extract;
pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CompletionError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// One blocking round trip to the completion API. When `functions` is
    /// supplied, function-call mode is enabled with automatic selection.
    async fn complete(
        &self,
        messages: &[Message],
        functions: Option<&[Value]>,
    ) -> Result<CompletionResponse, CompletionError>;
}

/// Normalized chat-completion response. Upstream client versions have
/// placed the payload under `message` or `delta`; both are deserialized
/// here once so downstream code never probes raw JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    pub finish_reason: Option<String>,
    pub message: Option<ChoiceMessage>,
    pub delta: Option<ChoiceMessage>,
}

impl Choice {
    /// The message slot actually populated for this choice.
    pub fn call_message(&self) -> Option<&ChoiceMessage> {
        self.message.as_ref().or(self.delta.as_ref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
    pub function_call: Option<RawFunctionCall>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawFunctionCall {
    pub name: String,
    /// JSON-encoded argument object as emitted by the model.
    pub arguments: Option<String>,
}
