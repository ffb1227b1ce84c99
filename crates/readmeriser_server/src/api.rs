//! HTTP routes: the form page, README generation, download and health.

use crate::forms::{DownloadForm, GenerateForm};
use crate::page::{PageRenderer, PageView};
use axum::{
    Form, Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use readmeriser_core::{GenerationSettings, readme_request};
use readmeriser_error::ServerError;
use readmeriser_interface::ReadmeDriver;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Filename offered for the downloaded README.
pub const DOWNLOAD_FILENAME: &str = "README.md";
/// Content type of the downloaded README.
pub const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    driver: Arc<dyn ReadmeDriver>,
    pages: Arc<PageRenderer>,
    settings: GenerationSettings,
    site_url: Option<String>,
}

impl AppState {
    /// Creates handler state around a driver.
    pub fn new(
        driver: Arc<dyn ReadmeDriver>,
        pages: PageRenderer,
        settings: GenerationSettings,
        site_url: Option<String>,
    ) -> Self {
        Self {
            driver,
            pages: Arc::new(pages),
            settings,
            site_url,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.settings.model)
            .field("site_url", &self.site_url)
            .finish()
    }
}

/// Creates the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(generate))
        .route("/download", post(download))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Page rendering failure, reported as a 500.
#[derive(Debug)]
pub struct PageError(ServerError);

impl From<ServerError> for PageError {
    fn from(err: ServerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "Failed to render page");
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
    }
}

/// Empty form.
#[instrument(skip_all)]
async fn index(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    Ok(Html(state.pages.render(PageView::Empty)?))
}

/// Builds the prompt, calls the driver once and renders preview or error.
#[instrument(skip_all)]
async fn generate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<GenerateForm>,
) -> Result<Html<String>, PageError> {
    debug!(provider = %state.driver.provider_name(), "Generating README");
    let details = form.into_details();
    let mut request = readme_request(&details, &state.settings);
    if let Some(referer) = referer(state.site_url.as_deref(), &headers) {
        request = request.with_referer(referer);
    }

    let page = match state.driver.generate_text(&request).await {
        Ok(text) => {
            info!(chars = text.len(), "README generated");
            state.pages.render(PageView::Preview(&text))?
        }
        Err(e) => {
            warn!(error = %e, "README generation failed");
            let message = e.kind().to_string();
            state.pages.render(PageView::Error(&message))?
        }
    };
    Ok(Html(page))
}

/// Returns the posted markdown as a `README.md` attachment.
#[instrument(skip_all)]
async fn download(Form(form): Form<DownloadForm>) -> impl IntoResponse {
    debug!(bytes = form.readme_content.len(), "Serving README download");
    (
        [
            (header::CONTENT_TYPE, MARKDOWN_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", DOWNLOAD_FILENAME),
            ),
        ],
        form.readme_content,
    )
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Site URL sent upstream: the configured one, else `<scheme>://<host>/`.
fn referer(configured: Option<&str>, headers: &HeaderMap) -> Option<String> {
    if let Some(url) = configured {
        return Some(url.to_string());
    }
    let host = headers.get(header::HOST)?.to_str().ok()?;
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    Some(format!("{}://{}/", scheme, host))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_referer_prefers_configured_url() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com"));
        assert_eq!(
            referer(Some("https://readme.example"), &headers).as_deref(),
            Some("https://readme.example")
        );
    }

    #[test]
    fn test_referer_from_host_and_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com:8080"));
        assert_eq!(
            referer(None, &headers).as_deref(),
            Some("http://example.com:8080/")
        );

        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        assert_eq!(
            referer(None, &headers).as_deref(),
            Some("https://example.com:8080/")
        );
    }

    #[test]
    fn test_referer_absent_without_host() {
        assert!(referer(None, &HeaderMap::new()).is_none());
    }
}
