use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::{VisaidError, VisaidResult};
use crate::structs::completion::Completion;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::completion_client::CompletionClient;

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub(crate) choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
pub(crate) struct ChatChoice {
    pub(crate) message: Option<ResponseMessage>,
    pub(crate) finish_reason: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct ResponseMessage {
    pub(crate) content: Option<String>,
}

/// Chat-completion adapter. Model and temperature are fixed at construction;
/// the token ceiling varies per call.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
}

impl OpenAiClient {
    pub fn new(api_key: String, config: &AiConfig) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: String, max_tokens: u32) -> VisaidResult<Completion> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            temperature: self.temperature,
            max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| VisaidError::upstream_error("chat completion", None, &e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VisaidError::upstream_error(
                "chat completion",
                Some(status.as_u16()),
                &error_text,
            ));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| VisaidError::upstream_error("chat completion", None, &e.to_string()))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| VisaidError::upstream_empty("chat completion"))?;
        let finish_reason = choice.finish_reason;
        let text = choice
            .message
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| VisaidError::upstream_empty("chat completion"))?;

        Ok(Completion { text, finish_reason })
    }
}
