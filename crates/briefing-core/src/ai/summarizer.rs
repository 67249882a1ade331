use std::sync::Arc;

use super::prompt::{build_articles_text, build_prompt, SYSTEM_PROMPT};
use super::providers::{ChatCompletion, ChatMessage, CompletionRequest, OpenAiProvider};
use crate::config::AppConfig;
use crate::feed::Article;

/// Prefix of the text returned in place of a summary when generation fails
pub const SUMMARY_ERROR_PREFIX: &str = "Error generating summary: ";

/// Turns a list of articles into the weekly briefing text
pub struct Summarizer {
    provider: Arc<dyn ChatCompletion>,
    model: String,
    temperature: f32,
    max_tokens: u32,
    brand: String,
}

impl Summarizer {
    /// Create a summarizer backed by the OpenAI API
    pub fn new(config: &AppConfig) -> Self {
        Self::with_provider(Arc::new(OpenAiProvider::new(&config.ai)), config)
    }

    /// Create a summarizer backed by any completion provider
    pub fn with_provider(provider: Arc<dyn ChatCompletion>, config: &AppConfig) -> Self {
        Self {
            provider,
            model: config.ai.openai_model.clone(),
            temperature: config.ai.temperature,
            max_tokens: config.ai.max_tokens,
            brand: config.general.brand.clone(),
        }
    }

    /// First line of every successful briefing
    pub fn heading(&self) -> String {
        format!("# {} weekly biotech briefing", self.brand)
    }

    /// Build the completion call for the given articles
    pub fn completion_request(&self, articles: &[Article]) -> CompletionRequest {
        let prompt = build_prompt(&build_articles_text(articles));

        CompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    /// Generate the briefing text.
    ///
    /// Never fails: a provider error is returned as
    /// `Error generating summary: <message>` so it can be shown in place of
    /// the summary.
    pub async fn generate_summary(&self, articles: &[Article]) -> String {
        tracing::info!("Generating briefing from {} articles", articles.len());

        match self.provider.complete(self.completion_request(articles)).await {
            Ok(text) => format!("{}\n\n{}", self.heading(), text),
            Err(e) => {
                tracing::warn!("Summary generation failed: {}", e);
                format!("{}{}", SUMMARY_ERROR_PREFIX, e)
            }
        }
    }
}
