use crate::feed::Article;

/// System message fixing the assistant persona
pub const SYSTEM_PROMPT: &str = "You are a helpful biotech news summarizer.";

/// Serialize articles into the block embedded in the prompt.
///
/// Each article becomes four lines (`Title:`, `Summary:`, `URL:`,
/// `Published:`) followed by a blank line, in input order.
pub fn build_articles_text(articles: &[Article]) -> String {
    let mut text = String::new();
    for article in articles {
        text.push_str(&format!(
            "Title: {}\nSummary: {}\nURL: {}\nPublished: {}\n\n",
            article.title,
            article.summary,
            article.link,
            article.published_date(),
        ));
    }
    text
}

/// Wrap the serialized articles in the briefing instructions
pub fn build_prompt(articles_text: &str) -> String {
    format!(
        "You are an expert biotech news analyst. Given the following articles, generate a LinkedIn post summary \
with the most impactful 10 UK, Europe, and Middle-East articles as bullet points (no headings or footers, \
just the bullet points). For each bullet:
  - Start with an appropriate emoji from the following list based on the news category:
      - Regulatory & Approvals: 🏛️
      - M&A & Partnerships: 🤝
      - Clinical Trial Data: 🧪
      - Funding & IPO: 💰
      - Research & Innovation: 🔬
      - Press Releases & Announcements: 📢
      - Other high-impact biotech news: 🔍
  - Descriptive version of the article title (no link) without copying text verbatim.
Group similar articles by category where appropriate.

Articles:
{}",
        articles_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn article(title: &str, summary: &str, link: &str, day: u32) -> Article {
        Article {
            title: title.to_string(),
            summary: summary.to_string(),
            link: link.to_string(),
            published: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
        }
    }

    /// Read a serialized block back into articles, one four-line group at a time
    fn parse_articles_text(text: &str) -> Vec<Article> {
        text.split("\n\n")
            .filter(|block| !block.is_empty())
            .map(|block| {
                let lines: Vec<&str> = block.lines().collect();
                assert_eq!(lines.len(), 4, "unexpected block: {:?}", block);
                Article {
                    title: lines[0].strip_prefix("Title: ").unwrap().to_string(),
                    summary: lines[1].strip_prefix("Summary: ").unwrap().to_string(),
                    link: lines[2].strip_prefix("URL: ").unwrap().to_string(),
                    published: NaiveDate::parse_from_str(
                        lines[3].strip_prefix("Published: ").unwrap(),
                        "%Y-%m-%d",
                    )
                    .unwrap(),
                }
            })
            .collect()
    }

    #[test]
    fn test_articles_text_layout() {
        let articles = vec![
            article("EMA backs gene therapy", "Positive CHMP opinion.", "https://e.com/1", 11),
            article("No Title", "", "", 12),
        ];

        let text = build_articles_text(&articles);
        assert_eq!(
            text,
            "Title: EMA backs gene therapy\n\
             Summary: Positive CHMP opinion.\n\
             URL: https://e.com/1\n\
             Published: 2024-06-11\n\
             \n\
             Title: No Title\n\
             Summary: \n\
             URL: \n\
             Published: 2024-06-12\n\
             \n"
        );
    }

    #[test]
    fn test_articles_text_empty() {
        assert_eq!(build_articles_text(&[]), "");
    }

    #[test]
    fn test_articles_text_round_trip() {
        let articles = vec![
            article("Abu Dhabi fund backs biotech", "A $50M round.", "https://e.com/a", 10),
            article("UK trial readout", "Phase 3 met its endpoint.", "https://e.com/b", 13),
            article("Swiss merger", "Two firms combine.", "https://e.com/c", 14),
        ];

        let parsed = parse_articles_text(&build_articles_text(&articles));
        assert_eq!(parsed, articles);
    }

    #[test]
    fn test_prompt_embeds_articles_and_categories() {
        let text = build_articles_text(&[article("T", "S", "https://e.com", 1)]);
        let prompt = build_prompt(&text);

        assert!(prompt.ends_with(&format!("Articles:\n{}", text)));
        assert!(prompt.contains("most impactful 10 UK, Europe, and Middle-East articles"));
        assert!(prompt.contains("no headings or footers"));
        for category in [
            "Regulatory & Approvals: 🏛️",
            "M&A & Partnerships: 🤝",
            "Clinical Trial Data: 🧪",
            "Funding & IPO: 💰",
            "Research & Innovation: 🔬",
            "Press Releases & Announcements: 📢",
            "Other high-impact biotech news: 🔍",
        ] {
            assert!(prompt.contains(category), "missing category {}", category);
        }
    }
}
