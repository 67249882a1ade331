use std::fmt;
use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};

use super::{ChatCompletion, ChatMessage, ChatRole, CompletionRequest};
use crate::config::AiConfig;
use crate::{Error, Result};

/// OpenAI API provider
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
}

impl OpenAiProvider {
    /// A missing key is not rejected here; the API refuses the first call instead.
    pub fn new(config: &AiConfig) -> Self {
        let mut openai_config = OpenAIConfig::new()
            .with_api_key(config.openai_api_key.clone().unwrap_or_default());

        if let Some(ref api_base) = config.api_base {
            openai_config = openai_config.with_api_base(api_base.trim_end_matches('/'));
        }

        // Zero elapsed budget: a 429 or 5xx is returned on the first attempt
        let no_retry = backoff::ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        Self {
            client: Client::with_config(openai_config).with_backoff(no_retry),
        }
    }

    fn to_openai_message(message: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
        let converted = match message.role {
            ChatRole::System => ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(message.content.as_str())
                    .build()
                    .map_err(|e| Error::AiProvider(e.to_string()))?,
            ),
            ChatRole::User => ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(message.content.as_str())
                    .build()
                    .map_err(|e| Error::AiProvider(e.to_string()))?,
            ),
        };
        Ok(converted)
    }
}

impl fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("client", &"<async_openai::Client>")
            .finish()
    }
}

#[async_trait::async_trait]
impl ChatCompletion for OpenAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let messages = request
            .messages
            .iter()
            .map(Self::to_openai_message)
            .collect::<Result<Vec<_>>>()?;

        let openai_request = CreateChatCompletionRequestArgs::default()
            .model(&request.model)
            .messages(messages)
            .temperature(request.temperature)
            .max_tokens(request.max_tokens)
            .build()
            .map_err(|e| Error::AiProvider(e.to_string()))?;

        tracing::debug!("Requesting chat completion from model {}", request.model);

        let response = self
            .client
            .chat()
            .create(openai_request)
            .await
            .map_err(|e| Error::AiProvider(e.to_string()))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::AiProvider("No choices in completion response".to_string()))?;

        Ok(choice.message.content.unwrap_or_default())
    }
}
