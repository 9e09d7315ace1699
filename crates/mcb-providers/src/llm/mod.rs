//! LLM-model adapters.
//!
//! [`openai_http`] is the only concrete adapter: an OpenAI-compatible chat
//! completions HTTP client (also spoken by Anthropic's OpenAI-compatible
//! endpoint and most self-hosted `vLLM`/`TGI` deployments), covering the
//! "LLM-model HTTP client" the expanded spec's AI Scan subsystem calls
//! through the model registry.

pub mod openai_http;

pub use openai_http::OpenAiHttpLlmProvider;
