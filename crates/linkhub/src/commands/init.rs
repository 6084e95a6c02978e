//! Create a new project from a bundled template.

use std::path::Path;

use anyhow::Result;
use linkhub_template::{scaffold, EmbeddedCatalog, TemplateError};

/// Run the init command.
pub async fn run(project_dir: &Path, template: &str, force: bool) -> Result<()> {
    let catalog = EmbeddedCatalog::new();

    tracing::info!("Creating new linkhub project: {}", project_dir.display());
    tracing::info!("Using template: {}", template);

    let result = match scaffold(&catalog, template, project_dir, force) {
        Ok(result) => result,
        Err(TemplateError::Unknown { name, available }) => {
            tracing::error!("Unknown template: {}", name);
            tracing::info!("Available templates:");
            for candidate in &available {
                tracing::info!("  - {}", candidate);
            }
            anyhow::bail!("Unknown template '{}'", name);
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        "Project '{}' created from template '{}' ({} files)",
        result.project_dir.display(),
        result.template,
        result.files
    );
    tracing::info!("Next steps:");
    tracing::info!("  cd {}", result.project_dir.display());
    tracing::info!("  # Edit config/config.yml with your information");
    tracing::info!("  linkhub dev    # Start the preview server");
    tracing::info!("  linkhub build  # Build the static site");

    Ok(())
}
