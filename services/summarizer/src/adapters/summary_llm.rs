//! services/summarizer/src/adapters/summary_llm.rs
//!
//! This module contains the adapter for the summarizing LLM.
//! It implements the `TextCompletionService` port from the `core` crate.

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use news_summarizer_core::ports::{PortError, PortResult, TextCompletionService};
use tracing::debug;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `TextCompletionService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiSummaryAdapter {
    client: Client<OpenAIConfig>,
    model: String,
    instructions: String,
}

impl OpenAiSummaryAdapter {
    /// Creates a new `OpenAiSummaryAdapter`; `instructions` become the system message.
    pub fn new(client: Client<OpenAIConfig>, model: String, instructions: String) -> Self {
        Self {
            client,
            model,
            instructions,
        }
    }
}

//=========================================================================================
// `TextCompletionService` Trait Implementation
//=========================================================================================

#[async_trait]
impl TextCompletionService for OpenAiSummaryAdapter {
    async fn complete(&self, prompt: &str) -> PortResult<String> {
        let messages = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(self.instructions.clone())
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .n(1)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        debug!(model = %self.model, prompt_chars = prompt.len(), "Requesting summary completion");

        // Map the error by hand; `PortError` and `OpenAIError` are both foreign to this crate.
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Unexpected(e.to_string()))?;

        if let Some(choice) = response.choices.into_iter().next() {
            if let Some(content) = choice.message.content {
                Ok(content)
            } else {
                Err(PortError::Unexpected(
                    "Summary LLM response contained no text content.".to_string(),
                ))
            }
        } else {
            Err(PortError::Unexpected(
                "Summary LLM returned no choices in its response.".to_string(),
            ))
        }
    }
}
