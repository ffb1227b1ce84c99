//! Web layer for ReadmeRiser.
//!
//! Serves the project form, generates a README through a [`ReadmeDriver`],
//! shows the result or the error, and hands the markdown back as a
//! `README.md` download.
//!
//! [`ReadmeDriver`]: readmeriser_interface::ReadmeDriver

#![forbid(unsafe_code)]

mod api;
mod config;
mod forms;
mod page;
mod server;

pub use api::{AppState, DOWNLOAD_FILENAME, MARKDOWN_CONTENT_TYPE, PageError, create_router};
pub use config::{DEFAULT_HOST, DEFAULT_PORT, ENV_PREFIX, ServerConfig};
pub use forms::{DownloadForm, GenerateForm};
pub use page::{PageRenderer, PageView};
pub use server::{PROVIDER_NAME, ReadmeServer};
