mod fetcher;
mod filter;
mod models;
mod parser;

pub use fetcher::{FeedFetcher, FeedSource, HttpFeedSource};
pub use filter::select_recent;
pub use models::{Article, FeedEntry, UNTITLED};
pub use parser::parse_feed;
