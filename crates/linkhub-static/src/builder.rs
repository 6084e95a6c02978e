//! Static site builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use linkhub_config::ProjectLayout;
use linkhub_template::{render_project, SiteError};

use crate::copy::{copy_tree, CopyError};

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Project to build
    pub project: ProjectLayout,

    /// Output directory
    pub output_dir: PathBuf,
}

impl BuildConfig {
    /// Build `project` into its conventional output directory.
    pub fn for_project(project: ProjectLayout) -> Self {
        let output_dir = project.output_dir();
        Self {
            project,
            output_dir,
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::for_project(ProjectLayout::default())
    }
}

/// A copy step that did not complete.
#[derive(Debug)]
pub struct CopyFailure {
    /// Step label (e.g. "static")
    pub step: &'static str,

    pub error: CopyError,
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Output directory
    pub output_dir: PathBuf,

    /// Path of the rendered hub page
    pub document: PathBuf,

    /// Number of asset files copied
    pub copied_files: usize,

    /// Copy steps that failed; the page itself was still written
    pub copy_failures: Vec<CopyFailure>,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

impl BuildResult {
    /// True when every copy step succeeded.
    pub fn is_complete(&self) -> bool {
        self.copy_failures.is_empty()
    }
}

/// Errors that abort a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Site(#[from] SiteError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An asset tree to mirror into the output directory.
struct CopyStep {
    label: &'static str,
    from: PathBuf,
    to: PathBuf,
    /// Skip quietly when the source directory does not exist
    optional: bool,
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build the static site.
    ///
    /// Configuration, template and render failures abort the build. Asset
    /// copy failures do not: every step is attempted and failures are
    /// returned in [`BuildResult::copy_failures`].
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        let output_dir = &self.config.output_dir;

        // Ensure output directory exists
        fs::create_dir_all(output_dir).map_err(|e| BuildError::OutputDir {
            path: output_dir.clone(),
            source: e,
        })?;

        let html = render_project(&self.config.project)?;

        let document = output_dir.join(ProjectLayout::DOCUMENT_NAME);
        fs::write(&document, html).map_err(|e| BuildError::Write {
            path: document.clone(),
            source: e,
        })?;
        tracing::info!("Wrote {}", document.display());

        let mut copied_files = 0;
        let mut copy_failures = Vec::new();

        for step in self.copy_steps() {
            if step.optional && !step.from.exists() {
                tracing::debug!(
                    "Skipping {}: {} not found",
                    step.label,
                    step.from.display()
                );
                continue;
            }

            match copy_tree(&step.from, &step.to) {
                Ok(count) => {
                    tracing::debug!(
                        "Copied {} {} files to {}",
                        count,
                        step.label,
                        step.to.display()
                    );
                    copied_files += count;
                }
                Err(e) => {
                    tracing::error!("Failed to copy {} files: {}", step.label, e);
                    copy_failures.push(CopyFailure {
                        step: step.label,
                        error: e,
                    });
                }
            }
        }

        let duration = start.elapsed();

        Ok(BuildResult {
            output_dir: output_dir.clone(),
            document,
            copied_files,
            copy_failures,
            duration_ms: duration.as_millis() as u64,
        })
    }

    fn copy_steps(&self) -> Vec<CopyStep> {
        let project = &self.config.project;
        let out = &self.config.output_dir;

        vec![
            CopyStep {
                label: "layout",
                from: project.layout_dir(),
                to: out.join("layout"),
                optional: false,
            },
            CopyStep {
                label: "static",
                from: project.static_dir(),
                to: out.join("static"),
                optional: false,
            },
            CopyStep {
                label: "webfonts",
                from: project.fonts_dir(),
                to: out.join("webfonts"),
                optional: true,
            },
        ]
    }
}
