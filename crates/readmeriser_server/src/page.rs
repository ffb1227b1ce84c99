//! HTML rendering for the form page.

use minijinja::{Environment, context};
use readmeriser_error::{ServerError, ServerErrorKind};

const INDEX_NAME: &str = "index.html";
const INDEX_SOURCE: &str = include_str!("../templates/index.html");

/// What the page shows below the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView<'a> {
    /// Just the form.
    Empty,
    /// Generated markdown with copy and download controls.
    Preview(&'a str),
    /// Why generation failed.
    Error(&'a str),
}

/// Renders the single HTML page with autoescaping.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Compiles the page template.
    ///
    /// # Errors
    ///
    /// Returns an error if the template does not parse.
    pub fn new() -> Result<Self, ServerError> {
        let mut env = Environment::new();
        env.add_template(INDEX_NAME, INDEX_SOURCE)
            .map_err(|e| ServerError::new(ServerErrorKind::Template(e.to_string())))?;
        Ok(Self { env })
    }

    /// Renders the page for the given view.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render(&self, view: PageView<'_>) -> Result<String, ServerError> {
        let (preview, error) = match view {
            PageView::Empty => (None, None),
            PageView::Preview(text) => (Some(text), None),
            PageView::Error(message) => (None, Some(message)),
        };

        self.env
            .get_template(INDEX_NAME)
            .and_then(|tmpl| tmpl.render(context! { preview => preview, error => error }))
            .map_err(|e| ServerError::new(ServerErrorKind::Template(e.to_string())))
    }
}
