use chrono::{DateTime, NaiveDate, Utc};

/// Title used when a feed entry carries none
pub const UNTITLED: &str = "No Title";

/// A raw entry as delivered by the feed parser
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub link: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

impl FeedEntry {
    /// Publish time of the entry, falling back to its update time
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.published.or(self.updated)
    }
}

/// A recent article, normalized for summarization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub summary: String,
    pub link: String,
    pub published: NaiveDate,
}

impl Article {
    /// Build an article from a feed entry and its resolved timestamp
    pub fn from_entry(entry: FeedEntry, published: DateTime<Utc>) -> Self {
        let title = entry
            .title
            .map(|t| t.trim().to_string())
            .unwrap_or_else(|| UNTITLED.to_string());

        let summary = entry
            .summary
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        Self {
            title,
            summary,
            link: entry.link.unwrap_or_default(),
            published: published.date_naive(),
        }
    }

    /// Publish date as YYYY-MM-DD
    pub fn published_date(&self) -> String {
        self.published.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_prefers_published() {
        let published = Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap();
        let updated = Utc.with_ymd_and_hms(2024, 5, 3, 8, 0, 0).unwrap();

        let entry = FeedEntry {
            published: Some(published),
            updated: Some(updated),
            ..Default::default()
        };
        assert_eq!(entry.timestamp(), Some(published));

        let entry = FeedEntry {
            updated: Some(updated),
            ..Default::default()
        };
        assert_eq!(entry.timestamp(), Some(updated));

        assert_eq!(FeedEntry::default().timestamp(), None);
    }

    #[test]
    fn test_from_entry_fallbacks() {
        let published = Utc.with_ymd_and_hms(2024, 5, 2, 23, 59, 0).unwrap();
        let article = Article::from_entry(FeedEntry::default(), published);

        assert_eq!(article.title, "No Title");
        assert_eq!(article.summary, "");
        assert_eq!(article.link, "");
        assert_eq!(article.published_date(), "2024-05-02");
    }

    #[test]
    fn test_from_entry_trims_title_and_summary() {
        let published = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap();
        let entry = FeedEntry {
            title: Some("  FDA approves drug \n".to_string()),
            summary: Some("\n  Details here.  ".to_string()),
            link: Some("https://example.com/a".to_string()),
            ..Default::default()
        };

        let article = Article::from_entry(entry, published);
        assert_eq!(article.title, "FDA approves drug");
        assert_eq!(article.summary, "Details here.");
        assert_eq!(article.link, "https://example.com/a");
    }
}
