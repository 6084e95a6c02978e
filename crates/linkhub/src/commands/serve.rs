//! Preview server for built output.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Run the serve command.
///
/// Serves `dir` as plain files; nothing is rendered, so this shows exactly
/// what `linkhub build` produced.
pub async fn run(port: u16, dir: PathBuf, open: bool) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!(
            "Directory not found: {}. Run 'linkhub build' first.",
            dir.display()
        );
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let app = linkhub_server::static_router(&dir);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Serving {} at http://{}", dir.display(), addr);

    if open {
        let url = format!("http://{}", addr);
        if let Err(e) = open::that(&url) {
            tracing::warn!("Could not open browser: {}", e);
        }
    }

    axum::serve(listener, app).await?;

    Ok(())
}
