//! ReadmeRiser - README generator web server.
//!
//! Serves a form that collects project notes, asks a chat-completion model to
//! write a README from them, and offers the result as a download.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use readmeriser_core::init_tracing;
use readmeriser_server::{ReadmeServer, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_format.into())?;

    info!(config_file = ?cli.config, "Loading configuration");
    let mut config = ServerConfig::load(Some(&cli.config))?;
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }
    info!(
        address = %config.bind_address(),
        model = %config.model(),
        endpoint = %config.url(),
        "Configuration loaded"
    );

    let server = ReadmeServer::from_config(&config)?;
    if cli.check {
        info!("Configuration valid, exiting");
        return Ok(());
    }

    server.run().await?;
    Ok(())
}
