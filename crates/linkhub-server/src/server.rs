//! Development server implementation.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use linkhub_config::ProjectLayout;
use linkhub_template::render_project;

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Project to preview
    pub project: ProjectLayout,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            project: ProjectLayout::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
            open: false,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error on {addr}: {source}")]
    Serve {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only state shared by all requests.
struct ServerState {
    project: ProjectLayout,
}

/// Development server.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Address the server will listen on.
    pub fn addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        addr.parse().map_err(|_| ServerError::InvalidAddress(addr))
    }

    /// Start the development server. Runs until the process is stopped.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr = self.addr()?;
        let app = router(self.config.project.clone());

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Bind { addr, source: e })?;

        tracing::info!("Server running at http://{}", addr);

        // Open browser if configured
        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Serve { addr, source: e })?;

        Ok(())
    }
}

/// Build the preview router for `project`.
///
/// `/static/*` serves files from the project's static directory; every other
/// path renders the hub page.
pub fn router(project: ProjectLayout) -> Router {
    let static_dir = project.static_dir();
    let state = Arc::new(ServerState { project });

    Router::new()
        .route("/", get(index_handler))
        .nest_service(ProjectLayout::STATIC_PREFIX, ServeDir::new(static_dir))
        .fallback(index_handler)
        .with_state(state)
}

/// Build a router that serves the built site in `dir` as plain files.
///
/// `/` maps to `dir/index.html`; missing files are 404.
pub fn static_router(dir: &Path) -> Router {
    Router::new().fallback_service(ServeDir::new(dir))
}

/// Handler for the hub page.
///
/// Rendering reads the project from disk, so it runs on the blocking pool.
async fn index_handler(State(state): State<Arc<ServerState>>) -> Response {
    let project = state.project.clone();

    match tokio::task::spawn_blocking(move || render_project(&project)).await {
        Ok(Ok(html)) => Html(html).into_response(),
        Ok(Err(e)) => {
            tracing::warn!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
        Err(e) => {
            tracing::error!("Render task failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Render task failed").into_response()
        }
    }
}
