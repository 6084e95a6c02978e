//! Conventional locations inside a linkhub project.

use std::path::{Path, PathBuf};

/// Placeholder that keeps otherwise-empty directories under version control.
/// Never copied into build output.
pub const SENTINEL_FILE: &str = ".gitkeep";

/// File locations of a linkhub project, all relative to its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Configuration document
    pub const CONFIG_FILE: &'static str = "config/config.yml";

    /// Entry document of the template
    pub const ENTRY_FILE: &'static str = "src/index.html";

    /// File name of the entry document, in the template and in build output
    pub const DOCUMENT_NAME: &'static str = "index.html";

    /// Directory holding layout fragments (`*.html`)
    pub const LAYOUT_DIR: &'static str = "src/layout";

    /// Static asset tree, served under [`ProjectLayout::STATIC_PREFIX`]
    pub const STATIC_DIR: &'static str = "src/static";

    /// Font subtree inside the static assets
    pub const FONTS_DIR: &'static str = "src/static/webfonts";

    /// Default build output directory
    pub const OUTPUT_DIR: &'static str = "dist";

    /// URL prefix for static assets in the preview server
    pub const STATIC_PREFIX: &'static str = "/static";

    /// Extension of layout fragments
    pub const FRAGMENT_EXTENSION: &'static str = "html";

    /// Create a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(Self::CONFIG_FILE)
    }

    pub fn entry_file(&self) -> PathBuf {
        self.root.join(Self::ENTRY_FILE)
    }

    pub fn layout_dir(&self) -> PathBuf {
        self.root.join(Self::LAYOUT_DIR)
    }

    pub fn static_dir(&self) -> PathBuf {
        self.root.join(Self::STATIC_DIR)
    }

    pub fn fonts_dir(&self) -> PathBuf {
        self.root.join(Self::FONTS_DIR)
    }

    /// Default output directory for `build`.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(Self::OUTPUT_DIR)
    }

    /// Name of the project, taken from the root directory.
    ///
    /// Falls back to `"project"` when the root has no usable file name
    /// (e.g. `.` or `/`).
    pub fn name(&self) -> String {
        let resolved = self.root.canonicalize().unwrap_or_else(|_| self.root.clone());
        resolved
            .file_name()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| "project".to_string())
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::new(".")
    }
}
