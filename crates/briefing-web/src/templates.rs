use askama::Template;

pub const PAGE_TITLE: &str = "Biotech News Bot";
pub const HEADLINE: &str = "Generate LinkedIn-ready biotech news summaries from Endpoints News.";

/// Shell page with the generate button and an empty results container
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    pub headline: &'a str,
}

impl Default for IndexTemplate<'static> {
    fn default() -> Self {
        Self {
            title: PAGE_TITLE,
            headline: HEADLINE,
        }
    }
}

/// Briefing text with a copy button
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate<'a> {
    pub summary: &'a str,
}

/// Message rendered with error styling
#[derive(Template)]
#[template(path = "notice.html")]
pub struct NoticeTemplate<'a> {
    pub message: &'a str,
}
