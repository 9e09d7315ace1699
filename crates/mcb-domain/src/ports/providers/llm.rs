//! LLM provider port: chat-style completion against one configured model.
//!
//! Three call sites in the Analysis Execution Core share this port: the
//! AI Scan broad scan (one call per configured model, no tools), the
//! investigator (tool-calling, bounded iterations), and the semantic-cache
//! track's insight narratives (single-shot, no tools). The transport,
//! authentication, and provider-specific request shape are infrastructure
//! concerns; this port only carries the request/response contract.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Role of a single message in a chat-style completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmRole {
    /// System/instruction message.
    System,
    /// End-user or caller-supplied message.
    User,
    /// A prior model response, included for multi-turn context.
    Assistant,
    /// The result of a tool call, fed back to the model.
    Tool,
}

/// A single message in a chat-style completion request.
#[derive(Debug, Clone)]
pub struct LlmMessage {
    /// Who produced this message.
    pub role: LlmRole,
    /// Message body.
    pub content: String,
    /// If `role` is [`LlmRole::Tool`], the id of the tool call this is a
    /// result for.
    pub tool_call_id: Option<String>,
}

impl LlmMessage {
    /// Build a plain user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: LlmRole::User,
            content: content.into(),
            tool_call_id: None,
        }
    }

    /// Build a tool-result message.
    #[must_use]
    pub fn tool_result(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: LlmRole::Tool,
            content: content.into(),
            tool_call_id: Some(tool_call_id.into()),
        }
    }
}

/// A tool definition offered to the model for tool-calling completions.
#[derive(Debug, Clone)]
pub struct LlmToolSpec {
    /// Tool name, as the model will reference it in a call.
    pub name: String,
    /// Human-readable description shown to the model.
    pub description: String,
    /// JSON Schema describing the tool's arguments object.
    pub parameters_schema: Value,
}

/// A single tool invocation requested by the model.
#[derive(Debug, Clone)]
pub struct LlmToolCall {
    /// Opaque identifier the caller must echo back in the matching
    /// [`LlmMessage::tool_result`].
    pub id: String,
    /// Name of the tool the model wants to invoke.
    pub name: String,
    /// Arguments the model supplied, matching the tool's parameter schema.
    pub arguments: Value,
}

/// A model's response to a completion request.
#[derive(Debug, Clone, Default)]
pub struct LlmResponse {
    /// Free-text content, if the model answered directly.
    pub content: Option<String>,
    /// Tool calls the model wants performed before it will continue.
    pub tool_calls: Vec<LlmToolCall>,
}

impl LlmResponse {
    /// Whether the model asked for one or more tool calls instead of
    /// returning a final answer.
    #[must_use]
    pub fn wants_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}

/// Chat-style completion against one configured LLM model.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Model identifier as registered in the model registry (see
    /// environment configuration: list of `{id, provider, timeout_s}`).
    fn model_id(&self) -> &str;

    /// Single-shot completion with no tool-calling. Used by the broad scan
    /// (structured-JSON system prompt) and semantic-cache insight
    /// narratives.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::UpstreamUnavailable`] on transport
    /// failure or timeout.
    async fn complete(
        &self,
        system_prompt: &str,
        messages: &[LlmMessage],
        timeout: Duration,
    ) -> Result<LlmResponse>;

    /// Tool-calling completion: the model may request zero or more of
    /// `tools` instead of answering directly. Used by the investigator.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::UpstreamUnavailable`] on transport
    /// failure or timeout.
    async fn complete_with_tools(
        &self,
        system_prompt: &str,
        messages: &[LlmMessage],
        tools: &[LlmToolSpec],
        timeout: Duration,
    ) -> Result<LlmResponse>;
}
