//! Live preview server command.

use anyhow::{Context, Result};
use linkhub_config::{load_config, ProjectLayout};
use linkhub_server::{DevServer, DevServerConfig};

/// Run the dev server.
pub async fn run(project: ProjectLayout, host: String, port: u16, open: bool) -> Result<()> {
    // Fail fast on a broken config; requests reload it on their own.
    load_config(&project.config_file()).context("Cannot start preview server")?;

    tracing::info!("Starting preview server on port {}", port);

    let config = DevServerConfig {
        project,
        port,
        host,
        open,
    };

    DevServer::new(config).start().await?;

    Ok(())
}
