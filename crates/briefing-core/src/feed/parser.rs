use feed_rs::model::Link;
use feed_rs::parser;

use super::models::FeedEntry;
use crate::{Error, Result};

/// Parse RSS/Atom/JSON feed content into entries, in document order
pub fn parse_feed(content: &[u8]) -> Result<Vec<FeedEntry>> {
    let feed = parser::parse(content)
        .map_err(|e| Error::FeedParse(e.to_string()))?;

    let entries = feed.entries.into_iter().map(|entry| {
        FeedEntry {
            title: entry.title.map(|t| t.content),
            summary: entry.summary.map(|s| s.content),
            link: article_link(&entry.links),
            published: entry.published,
            updated: entry.updated,
        }
    }).collect();

    Ok(entries)
}

/// Pick the entry's alternate link, skipping Atom "self"/"replies" links
fn article_link(links: &[Link]) -> Option<String> {
    links.iter()
        .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
        .or_else(|| links.first())
        .map(|l| l.href.clone())
}
