//! Static site build command.

use std::path::PathBuf;

use anyhow::Result;
use linkhub_config::ProjectLayout;
use linkhub_static::{BuildConfig, StaticBuilder};

/// Run the build command.
pub async fn run(project: ProjectLayout, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Building static site...");

    let mut config = BuildConfig::for_project(project);
    if let Some(output) = output {
        config.output_dir = output;
    }

    let result = StaticBuilder::new(config).build()?;

    tracing::info!(
        "Built {} with {} asset files in {}ms",
        result.document.display(),
        result.copied_files,
        result.duration_ms
    );

    if !result.is_complete() {
        for failure in &result.copy_failures {
            tracing::error!("{} step failed: {}", failure.step, failure.error);
        }
        anyhow::bail!(
            "{} of the asset copy steps failed; output in {} is incomplete",
            result.copy_failures.len(),
            result.output_dir.display()
        );
    }

    tracing::info!("Build complete. Files are in {}", result.output_dir.display());

    Ok(())
}
