use chrono::{DateTime, Duration, Utc};

use super::models::{Article, FeedEntry};

/// Keep entries published within `window` of `now`, in feed order.
///
/// Entries without a published or updated time are dropped rather than
/// given a synthetic date. An entry exactly on the cut-off is kept.
pub fn select_recent(entries: Vec<FeedEntry>, now: DateTime<Utc>, window: Duration) -> Vec<Article> {
    let threshold = now - window;

    entries
        .into_iter()
        .filter_map(|entry| {
            let published = entry.timestamp()?;
            if published < threshold {
                return None;
            }
            Some(Article::from_entry(entry, published))
        })
        .collect()
}
