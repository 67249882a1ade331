use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use briefing_core::{Briefing, NO_ARTICLES_NOTICE};
use serde_json::{json, Value};
use thiserror::Error;

use crate::templates::{IndexTemplate, NoticeTemplate, ResultsTemplate};
use crate::AppState;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Template rendering error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

/// GET /
pub async fn index() -> Result<Html<String>, WebError> {
    Ok(Html(IndexTemplate::default().render()?))
}

/// POST /generate — returns an HTML fragment for the results container
pub async fn generate(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let fragment = match state.briefing.generate().await {
        Briefing::NoArticles => NoticeTemplate { message: NO_ARTICLES_NOTICE }.render()?,
        Briefing::Summary(summary) => ResultsTemplate { summary: &summary }.render()?,
    };

    Ok(Html(fragment))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
