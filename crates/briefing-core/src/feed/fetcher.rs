use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, USER_AGENT};
use reqwest::{Client, Proxy};
use url::Url;

use super::filter::select_recent;
use super::models::{Article, FeedEntry};
use super::parser::parse_feed;
use crate::config::{AppConfig, FeedConfig};
use crate::{Error, Result};

const MAX_FEED_BYTES: usize = 5 * 1024 * 1024;
const FEED_USER_AGENT: &str = concat!("briefing/", env!("CARGO_PKG_VERSION"));

/// Source of raw feed entries
#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_entries(&self) -> Result<Vec<FeedEntry>>;
}

/// Feed source that downloads a single RSS/Atom URL over HTTP
pub struct HttpFeedSource {
    client: Client,
    url: String,
}

impl HttpFeedSource {
    pub fn new(config: &FeedConfig) -> Result<Self> {
        // Validate it's a proper URL
        Url::parse(&config.url)?;

        let client = Self::build_client(config.request_timeout_secs, &config.proxy_url)?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    /// Build HTTP client with optional proxy
    fn build_client(timeout_secs: u64, proxy_url: &Option<String>) -> Result<Client> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(10));

        if let Some(ref proxy) = proxy_url {
            let proxy = Proxy::all(proxy)
                .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
            tracing::info!("Using HTTP proxy for feed fetching");
        }

        builder.build().map_err(Error::Http)
    }

    fn build_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "application/rss+xml,application/atom+xml,application/xml;q=0.9,text/xml;q=0.8,*/*;q=0.5"
            )
        );
        headers.insert(
            ACCEPT_ENCODING,
            HeaderValue::from_static("gzip, deflate, br")
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(FEED_USER_AGENT));
        headers
    }

    fn ensure_content_size(&self, size: usize) -> Result<()> {
        if size > MAX_FEED_BYTES {
            return Err(Error::FeedParse(format!(
                "Feed too large ({} bytes) for URL: {}",
                size,
                self.url
            )));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_entries(&self) -> Result<Vec<FeedEntry>> {
        tracing::info!("Fetching feed from: {}", self.url);

        let response = self.client
            .get(&self.url)
            .headers(Self::build_headers())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FeedParse(format!(
                "HTTP {} for URL: {}",
                status,
                self.url
            )));
        }

        let content = response.bytes().await?;
        self.ensure_content_size(content.len())?;

        parse_feed(&content)
    }
}

/// Fetches a feed and keeps the entries inside the trailing window.
///
/// Fetching is best effort: any network or parse failure is logged and
/// reported as an empty article list.
pub struct FeedFetcher {
    source: Arc<dyn FeedSource>,
    window: chrono::Duration,
}

impl FeedFetcher {
    /// Create a fetcher for the configured feed URL
    pub fn new(config: &AppConfig) -> Result<Self> {
        let source = HttpFeedSource::new(&config.feed)?;
        Ok(Self::with_source(Arc::new(source), config.feed.days_back))
    }

    /// Create a fetcher over any entry source
    pub fn with_source(source: Arc<dyn FeedSource>, days_back: u32) -> Self {
        Self {
            source,
            window: chrono::Duration::days(i64::from(days_back)),
        }
    }

    /// Fetch articles published within the window ending now
    pub async fn fetch_recent(&self) -> Vec<Article> {
        self.fetch_recent_at(Utc::now()).await
    }

    /// Fetch articles published within the window ending at `now`
    pub async fn fetch_recent_at(&self, now: DateTime<Utc>) -> Vec<Article> {
        match self.source.fetch_entries().await {
            Ok(entries) => {
                let total = entries.len();
                let articles = select_recent(entries, now, self.window);
                tracing::debug!("Kept {} of {} feed entries", articles.len(), total);
                articles
            }
            Err(e) => {
                tracing::warn!("Error fetching articles: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Endpoints News</title>
    <link>https://endpts.com</link>
    <description>Biotech news</description>
    <item>
      <title>Recent approval</title>
      <link>https://endpts.com/recent/</link>
      <pubDate>Thu, 13 Jun 2024 10:00:00 +0000</pubDate>
    </item>
    <item>
      <title>Old merger</title>
      <link>https://endpts.com/old/</link>
      <pubDate>Mon, 13 May 2024 10:00:00 +0000</pubDate>
    </item>
  </channel>
</rss>"#;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn feed_config(url: String) -> FeedConfig {
        FeedConfig {
            url,
            ..FeedConfig::default()
        }
    }

    struct FailingSource;

    #[async_trait::async_trait]
    impl FeedSource for FailingSource {
        async fn fetch_entries(&self) -> Result<Vec<FeedEntry>> {
            Err(Error::FeedParse("connection reset".to_string()))
        }
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = HttpFeedSource::new(&feed_config("not a url".to_string()));
        assert!(matches!(result, Err(Error::UrlParse(_))));
    }

    #[test]
    fn test_invalid_proxy_rejected() {
        let config = FeedConfig {
            proxy_url: Some("::not a proxy::".to_string()),
            ..FeedConfig::default()
        };
        assert!(matches!(HttpFeedSource::new(&config), Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_fetch_filters_to_window() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/feed/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(RSS))
            .expect(1)
            .mount(&server)
            .await;

        let source = HttpFeedSource::new(&feed_config(format!("{}/feed/", server.uri()))).unwrap();
        let fetcher = FeedFetcher::with_source(Arc::new(source), 7);

        let articles = fetcher.fetch_recent_at(now()).await;
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Recent approval");
        assert_eq!(articles[0].link, "https://endpts.com/recent/");
        assert_eq!(articles[0].published_date(), "2024-06-13");
    }

    #[tokio::test]
    async fn test_http_error_yields_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let source = HttpFeedSource::new(&feed_config(format!("{}/feed/", server.uri()))).unwrap();
        let err = source.fetch_entries().await.unwrap_err();
        assert!(err.to_string().contains("404"));

        let fetcher = FeedFetcher::with_source(Arc::new(source), 7);
        assert!(fetcher.fetch_recent_at(now()).await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_yields_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let source = HttpFeedSource::new(&feed_config(server.uri())).unwrap();
        let fetcher = FeedFetcher::with_source(Arc::new(source), 7);
        assert!(fetcher.fetch_recent_at(now()).await.is_empty());
    }

    #[tokio::test]
    async fn test_source_error_yields_empty_list() {
        let fetcher = FeedFetcher::with_source(Arc::new(FailingSource), 7);
        assert!(fetcher.fetch_recent().await.is_empty());
    }

    #[tokio::test]
    async fn test_window_comes_from_config() {
        let server = MockServer::start().await;
        let body = RSS.replace("Mon, 13 May 2024 10:00:00 +0000", "Mon, 10 Jun 2024 10:00:00 +0000");
        Mock::given(method("GET"))
            .and(path("/feed/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let mut config = AppConfig::default();
        config.feed.url = format!("{}/feed/", server.uri());
        config.feed.days_back = 3;

        let articles = FeedFetcher::new(&config).unwrap().fetch_recent_at(now()).await;
        let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Recent approval"]);

        config.feed.days_back = 7;
        let articles = FeedFetcher::new(&config).unwrap().fetch_recent_at(now()).await;
        assert_eq!(articles.len(), 2);
    }
}
