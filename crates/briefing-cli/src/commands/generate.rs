use anyhow::Result;

use briefing_core::{AppConfig, Briefing, BriefingService, NO_ARTICLES_NOTICE};

pub async fn run(config: &AppConfig) -> Result<()> {
    let service = BriefingService::new(config)?;

    match service.generate().await {
        Briefing::NoArticles => eprintln!("{}", NO_ARTICLES_NOTICE),
        Briefing::Summary(summary) => println!("{}", summary),
    }

    Ok(())
}
