//! OpenAI-compatible chat-completions HTTP adapter.
//!
//! Speaks the `POST {base_url}/chat/completions` shape shared by OpenAI,
//! Anthropic's OpenAI-compatible endpoint, and most self-hosted
//! `vLLM`/`TGI` deployments, including the `tools`/`tool_calls` extension
//! used by the investigator's tool-calling loop.

use std::time::Duration;

use async_trait::async_trait;
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::providers::llm::{LlmMessage, LlmProvider, LlmResponse, LlmRole, LlmToolCall, LlmToolSpec};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

fn role_str(role: LlmRole) -> &'static str {
    match role {
        LlmRole::System => "system",
        LlmRole::User => "user",
        LlmRole::Assistant => "assistant",
        LlmRole::Tool => "tool",
    }
}

fn message_to_json(message: &LlmMessage) -> Value {
    let mut obj = json!({
        "role": role_str(message.role),
        "content": message.content,
    });
    if let Some(tool_call_id) = &message.tool_call_id {
        obj["tool_call_id"] = json!(tool_call_id);
    }
    obj
}

fn tool_to_json(tool: &LlmToolSpec) -> Value {
    json!({
        "type": "function",
        "function": {
            "name": tool.name,
            "description": tool.description,
            "parameters": tool.parameters_schema,
        },
    })
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize, Default)]
struct ChatResponseMessage {
    content: Option<String>,
    #[serde(default)]
    tool_calls: Vec<ChatToolCall>,
}

#[derive(Debug, Deserialize)]
struct ChatToolCall {
    id: String,
    function: ChatToolCallFunction,
}

#[derive(Debug, Deserialize)]
struct ChatToolCallFunction {
    name: String,
    arguments: String,
}

/// HTTP client against an OpenAI-compatible chat completions endpoint.
pub struct OpenAiHttpLlmProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model_id: String,
}

impl OpenAiHttpLlmProvider {
    /// Build a client against `base_url` (e.g. `https://api.openai.com/v1`)
    /// for the model identified by `model_id`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self { client: Client::new(), base_url: base_url.into(), api_key: None, model_id: model_id.into() }
    }

    /// Attach a bearer API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    async fn complete_inner(&self, mut body: Value, timeout: Duration) -> Result<LlmResponse> {
        body["model"] = json!(self.model_id);
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let response = self
            .request(self.client.post(&url).json(&body).timeout(timeout))
            .send()
            .await
            .map_err(|e| Error::upstream_unavailable("llm".to_owned(), e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::upstream_unavailable(
                "llm".to_owned(),
                format!("chat completion failed with status {status}: {text}"),
            ));
        }
        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::upstream_unavailable("llm".to_owned(), e.to_string()))?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::upstream_unavailable("llm".to_owned(), "empty choices in chat completion response".to_owned()))?;
        let tool_calls = choice
            .message
            .tool_calls
            .into_iter()
            .map(|tc| {
                let arguments = serde_json::from_str(&tc.function.arguments).unwrap_or(Value::Null);
                LlmToolCall { id: tc.id, name: tc.function.name, arguments }
            })
            .collect();
        Ok(LlmResponse { content: choice.message.content, tool_calls })
    }
}

#[async_trait]
impl LlmProvider for OpenAiHttpLlmProvider {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn complete(&self, system_prompt: &str, messages: &[LlmMessage], timeout: Duration) -> Result<LlmResponse> {
        let mut payload_messages = vec![json!({"role": "system", "content": system_prompt})];
        payload_messages.extend(messages.iter().map(message_to_json));
        self.complete_inner(json!({"messages": payload_messages}), timeout).await
    }

    async fn complete_with_tools(
        &self,
        system_prompt: &str,
        messages: &[LlmMessage],
        tools: &[LlmToolSpec],
        timeout: Duration,
    ) -> Result<LlmResponse> {
        let mut payload_messages = vec![json!({"role": "system", "content": system_prompt})];
        payload_messages.extend(messages.iter().map(message_to_json));
        let tool_specs: Vec<Value> = tools.iter().map(tool_to_json).collect();
        self.complete_inner(json!({"messages": payload_messages, "tools": tool_specs}), timeout).await
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use mcb_domain::registry::llm::{LLM_PROVIDERS, LlmProviderConfig, LlmProviderEntry};

fn openai_http_factory(config: &LlmProviderConfig) -> std::result::Result<Arc<dyn LlmProvider>, String> {
    let base_url = config.base_url.clone().ok_or_else(|| "openai-http llm provider requires base_url in config".to_owned())?;
    let model_id = config.model_id.clone().ok_or_else(|| "openai-http llm provider requires model_id in config".to_owned())?;
    let mut provider = OpenAiHttpLlmProvider::new(base_url, model_id);
    if let Some(key) = &config.api_key {
        provider = provider.with_api_key(key.clone());
    }
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(LLM_PROVIDERS)]
static OPENAI_HTTP_PROVIDER: LlmProviderEntry = LlmProviderEntry {
    name: "openai-http",
    description: "OpenAI-compatible chat completions client (also serves Anthropic/self-hosted OpenAI-compatible endpoints)",
    build: openai_http_factory,
};
