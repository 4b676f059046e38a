//! Preview server - serves the portfolio live over HTTP.
//!
//! Pages render per request from the loaded content store rather than from
//! a built tree, so fixture edits show up on the next reload while
//! authoring. Assets come from the same generators the builder writes to
//! disk, at the same URLs the templates reference.

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use thiserror::Error;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::builder::styles_asset;
use crate::contact::{form_script, MailtoTemplate};
use crate::content::ContentStore;
use crate::pages;
use crate::reveal::RevealConfig;

/// Shared application state. The store is loaded once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Pages
        .route(pages::home::ROUTE, get(home))
        .route(pages::education::ROUTE, get(education))
        .route(pages::experience::ROUTE, get(experience))
        .route(pages::awards::ROUTE, get(awards))
        .route(pages::publications::ROUTE, get(publications))
        .route(pages::contact::ROUTE, get(contact))
        // Generated assets
        .route("/assets/styles.css", get(styles_css))
        .route("/assets/reveal.js", get(reveal_js))
        .route("/assets/contact.js", get(contact_js))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(pages::home::page(&state.store))
}

async fn education(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(pages::education::page(&state.store))
}

async fn experience(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(pages::experience::page(&state.store))
}

async fn awards(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(pages::awards::page(&state.store))
}

async fn publications(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(pages::publications::page(&state.store))
}

async fn contact(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(pages::contact::page(&state.store))
}

fn render<T: Template>(template: T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

async fn styles_css() -> impl IntoResponse {
    asset("text/css; charset=utf-8", styles_asset(&RevealConfig::default()))
}

async fn reveal_js() -> impl IntoResponse {
    asset(
        "text/javascript; charset=utf-8",
        RevealConfig::default().script(),
    )
}

async fn contact_js(State(state): State<AppState>) -> impl IntoResponse {
    asset(
        "text/javascript; charset=utf-8",
        form_script(&MailtoTemplate::for_site(&state.store.site)),
    )
}

fn asset(content_type: &'static str, body: String) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, content_type)], body)
}

#[derive(Debug, Error)]
enum AppError {
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let message = self.to_string();
        let status = match self {
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
