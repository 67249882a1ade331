//! One "generate" action: fetch recent articles, then summarize them.

use std::sync::Arc;

use crate::ai::{ChatCompletion, Summarizer};
use crate::config::AppConfig;
use crate::feed::{FeedFetcher, FeedSource};
use crate::Result;

/// Notice shown when the feed yields nothing inside the window
pub const NO_ARTICLES_NOTICE: &str = "No recent biotech articles found in the given timeframe.";

/// Outcome of a generate action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Briefing {
    /// Nothing to summarize; the model was not called
    NoArticles,
    /// Briefing text, or the error text that replaced it
    Summary(String),
}

/// Composes the feed fetcher and the summarizer
pub struct BriefingService {
    fetcher: FeedFetcher,
    summarizer: Summarizer,
}

impl BriefingService {
    /// Build the service with the HTTP feed source and the OpenAI provider
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            fetcher: FeedFetcher::new(config)?,
            summarizer: Summarizer::new(config),
        })
    }

    /// Build the service from explicit collaborators
    pub fn with_parts(
        source: Arc<dyn FeedSource>,
        provider: Arc<dyn ChatCompletion>,
        config: &AppConfig,
    ) -> Self {
        Self {
            fetcher: FeedFetcher::with_source(source, config.feed.days_back),
            summarizer: Summarizer::with_provider(provider, config),
        }
    }

    pub async fn generate(&self) -> Briefing {
        let articles = self.fetcher.fetch_recent().await;

        if articles.is_empty() {
            tracing::info!("No recent articles, skipping summary generation");
            return Briefing::NoArticles;
        }

        Briefing::Summary(self.summarizer.generate_summary(&articles).await)
    }
}
