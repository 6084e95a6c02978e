//! Trait definitions for template sources.

use std::collections::BTreeMap;
use std::path::PathBuf;

use linkhub_config::ProjectLayout;

/// A loaded template: one entry document plus its layout fragments.
///
/// Fragments are keyed by file name (`head.html`) and the entry document
/// references them by that name. Nothing checks that the references resolve
/// until the tree is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTree {
    /// Template name (directory name)
    pub name: String,

    /// Entry document source
    pub entry: String,

    /// Layout fragments by file name
    pub fragments: BTreeMap<String, String>,
}

impl TemplateTree {
    /// Name under which the entry document is registered for rendering.
    pub fn entry_name() -> &'static str {
        ProjectLayout::DOCUMENT_NAME
    }

    /// Names of the loaded fragments, sorted.
    pub fn fragment_names(&self) -> Vec<&str> {
        self.fragments.keys().map(|k| k.as_str()).collect()
    }
}

/// Errors that can occur when resolving or extracting templates.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Unknown template '{name}'. Available templates: {}", .available.join(", "))]
    Unknown { name: String, available: Vec<String> },

    #[error("Template '{template}' has no entry document at {path}")]
    NotFound { template: String, path: PathBuf },

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template file is not valid UTF-8: {0}")]
    Encoding(PathBuf),

    #[error("Destination {0} already exists and is not empty. Use --force to overwrite.")]
    DestinationNotEmpty(PathBuf),
}

/// A place templates can be loaded from.
///
/// Implemented by the bundled catalog used at scaffold time and by a
/// project's working tree used for preview and build.
pub trait TemplateSource: Send + Sync {
    /// Source identifier used in log output (e.g. "catalog", "working-tree")
    fn kind(&self) -> &'static str;

    /// Names of the templates this source provides, sorted.
    fn list(&self) -> Result<Vec<String>, TemplateError>;

    /// Load the template called `name`.
    ///
    /// Fails with [`TemplateError::Unknown`] when `name` is not listed and
    /// with [`TemplateError::NotFound`] when the entry document is missing.
    fn resolve(&self, name: &str) -> Result<TemplateTree, TemplateError>;
}
