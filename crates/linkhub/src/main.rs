//! linkhub CLI - scaffold, preview and build a one-page link hub site.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use linkhub_config::ProjectLayout;
use linkhub_template::DEFAULT_TEMPLATE;

mod commands;

#[derive(Parser)]
#[command(name = "linkhub")]
#[command(about = "Generate a personal hub page for your social profiles and links")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project root directory
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project from a bundled template
    Init {
        /// Name of the project directory to create
        project_name: PathBuf,

        /// Template to start from
        #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
        template: String,

        /// Write into an existing, non-empty directory
        #[arg(short, long)]
        force: bool,
    },

    /// Start the live preview server
    Dev {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Open the page in a browser
        #[arg(long)]
        open: bool,
    },

    /// Build the static site
    Build {
        /// Output directory (defaults to "dist" under the project root)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Preview built output
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve (defaults to "dist" under the project root)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Open the site in a browser
        #[arg(long)]
        open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let project = ProjectLayout::new(&cli.root);

    // Execute command
    match cli.command {
        Commands::Init {
            project_name,
            template,
            force,
        } => {
            commands::init::run(&cli.root.join(project_name), &template, force).await?;
        }
        Commands::Dev { port, host, open } => {
            commands::dev::run(project, host, port, open).await?;
        }
        Commands::Build { output } => {
            commands::build::run(project, output).await?;
        }
        Commands::Serve { port, dir, open } => {
            let dir = dir.unwrap_or_else(|| project.output_dir());
            commands::serve::run(port, dir, open).await?;
        }
    }

    Ok(())
}
