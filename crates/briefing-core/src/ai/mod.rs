mod prompt;
pub mod providers;
mod summarizer;

pub use prompt::{build_articles_text, build_prompt, SYSTEM_PROMPT};
pub use providers::{ChatCompletion, ChatMessage, ChatRole, CompletionRequest, OpenAiProvider};
pub use summarizer::{Summarizer, SUMMARY_ERROR_PREFIX};
