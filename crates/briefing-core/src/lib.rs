pub mod ai;
pub mod briefing;
pub mod config;
pub mod error;
pub mod feed;

pub use briefing::{Briefing, BriefingService, NO_ARTICLES_NOTICE};
pub use config::AppConfig;
pub use error::{Error, Result};
