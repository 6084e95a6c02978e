//! Bundled template catalog and project scaffolding.
//!
//! Every top-level directory under `templates/` is a complete project
//! (configuration, entry document, layout fragments, static assets) and is
//! compiled into the binary.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{include_dir, Dir, DirEntry};
use linkhub_config::ProjectLayout;

use crate::traits::{TemplateError, TemplateSource, TemplateTree};

static CATALOG: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Template used by `init` when none is requested.
pub const DEFAULT_TEMPLATE: &str = "default";

/// Templates bundled with the binary.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedCatalog {
    root: &'static Dir<'static>,
}

impl EmbeddedCatalog {
    /// The catalog compiled into this crate.
    pub fn new() -> Self {
        Self { root: &CATALOG }
    }

    fn template_dir(&self, name: &str) -> Option<&'static Dir<'static>> {
        // Only direct children of the catalog root are templates.
        self.root
            .dirs()
            .find(|d| d.path().file_name().and_then(|s| s.to_str()) == Some(name))
    }

    fn unknown(&self, name: &str) -> TemplateError {
        TemplateError::Unknown {
            name: name.to_string(),
            available: self.list().unwrap_or_default(),
        }
    }

    fn read_utf8(&self, path: &Path) -> Option<Result<String, TemplateError>> {
        self.root.get_file(path).map(|file| {
            file.contents_utf8()
                .map(|s| s.to_string())
                .ok_or_else(|| TemplateError::Encoding(path.to_path_buf()))
        })
    }

    /// Write every file of template `name` beneath `dest`.
    ///
    /// Sentinel files are written too so empty directories survive in the
    /// new project. Returns the number of files written.
    pub fn extract(&self, name: &str, dest: &Path) -> Result<usize, TemplateError> {
        let dir = self.template_dir(name).ok_or_else(|| self.unknown(name))?;
        extract_dir(dir, dir.path(), dest)
    }
}

impl Default for EmbeddedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSource for EmbeddedCatalog {
    fn kind(&self) -> &'static str {
        "catalog"
    }

    fn list(&self) -> Result<Vec<String>, TemplateError> {
        let mut names: Vec<String> = self
            .root
            .dirs()
            .filter_map(|d| d.path().file_name().and_then(|s| s.to_str()))
            .map(|s| s.to_string())
            .collect();
        names.sort();
        Ok(names)
    }

    fn resolve(&self, name: &str) -> Result<TemplateTree, TemplateError> {
        let dir = self.template_dir(name).ok_or_else(|| self.unknown(name))?;
        let base = dir.path();

        let entry_path = base.join(ProjectLayout::ENTRY_FILE);
        let entry = match self.read_utf8(&entry_path) {
            Some(source) => source?,
            None => {
                return Err(TemplateError::NotFound {
                    template: name.to_string(),
                    path: entry_path,
                })
            }
        };

        let mut fragments = BTreeMap::new();
        if let Some(layout) = self.root.get_dir(base.join(ProjectLayout::LAYOUT_DIR)) {
            for file in layout.files() {
                let path = file.path();
                if path.extension().and_then(|e| e.to_str())
                    != Some(ProjectLayout::FRAGMENT_EXTENSION)
                {
                    continue;
                }
                let Some(file_name) = path.file_name().and_then(|s| s.to_str()) else {
                    continue;
                };
                let source = file
                    .contents_utf8()
                    .ok_or_else(|| TemplateError::Encoding(path.to_path_buf()))?;
                fragments.insert(file_name.to_string(), source.to_string());
            }
        }

        tracing::debug!(
            "Resolved template '{}' from {} with {} fragments",
            name,
            self.kind(),
            fragments.len()
        );

        Ok(TemplateTree {
            name: name.to_string(),
            entry,
            fragments,
        })
    }
}

fn extract_dir(dir: &Dir<'_>, base: &Path, dest: &Path) -> Result<usize, TemplateError> {
    let mut written = 0;

    for entry in dir.entries() {
        let relative = entry.path().strip_prefix(base).unwrap_or(entry.path());
        let target = dest.join(relative);

        match entry {
            DirEntry::Dir(sub) => {
                fs::create_dir_all(&target).map_err(|e| TemplateError::Io {
                    path: target.clone(),
                    source: e,
                })?;
                written += extract_dir(sub, base, dest)?;
            }
            DirEntry::File(file) => {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).map_err(|e| TemplateError::Io {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }
                fs::write(&target, file.contents()).map_err(|e| TemplateError::Io {
                    path: target.clone(),
                    source: e,
                })?;
                tracing::debug!("Created {}", target.display());
                written += 1;
            }
        }
    }

    Ok(written)
}

/// Outcome of scaffolding a project.
#[derive(Debug)]
pub struct ScaffoldResult {
    /// Template that was extracted
    pub template: String,

    /// Directory the project was written to
    pub project_dir: PathBuf,

    /// Number of files written
    pub files: usize,
}

/// Create a new project at `dest` from catalog template `template`.
///
/// The template is resolved before anything touches the filesystem, so an
/// unknown name leaves `dest` alone. An existing non-empty `dest` is refused
/// unless `force` is set.
pub fn scaffold(
    catalog: &EmbeddedCatalog,
    template: &str,
    dest: &Path,
    force: bool,
) -> Result<ScaffoldResult, TemplateError> {
    catalog.resolve(template)?;

    if !force && !is_empty_dir(dest)? {
        return Err(TemplateError::DestinationNotEmpty(dest.to_path_buf()));
    }

    fs::create_dir_all(dest).map_err(|e| TemplateError::Io {
        path: dest.to_path_buf(),
        source: e,
    })?;

    let files = catalog.extract(template, dest)?;

    Ok(ScaffoldResult {
        template: template.to_string(),
        project_dir: dest.to_path_buf(),
        files,
    })
}

/// True if `path` does not exist or is an empty directory.
fn is_empty_dir(path: &Path) -> Result<bool, TemplateError> {
    if !path.exists() {
        return Ok(true);
    }
    let mut entries = fs::read_dir(path).map_err(|e| TemplateError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(entries.next().is_none())
}
