//! Templates loaded from a project's working tree.

use std::collections::BTreeMap;
use std::fs;

use walkdir::WalkDir;

use linkhub_config::ProjectLayout;

use crate::traits::{TemplateError, TemplateSource, TemplateTree};

/// The template a project carries on disk.
///
/// A project holds exactly one template, named after the project directory.
/// Nothing is cached: every [`resolve`](TemplateSource::resolve) re-reads the
/// files, so edits show up on the next call.
#[derive(Debug, Clone)]
pub struct WorkingTree {
    layout: ProjectLayout,
}

impl WorkingTree {
    /// Create a source for the project at `layout`.
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }

    /// Name of the project's template.
    pub fn name(&self) -> String {
        self.layout.name()
    }

    /// Load the project's template.
    pub fn load(&self) -> Result<TemplateTree, TemplateError> {
        self.resolve(&self.name())
    }
}

impl TemplateSource for WorkingTree {
    fn kind(&self) -> &'static str {
        "working-tree"
    }

    fn list(&self) -> Result<Vec<String>, TemplateError> {
        Ok(vec![self.name()])
    }

    fn resolve(&self, name: &str) -> Result<TemplateTree, TemplateError> {
        let own_name = self.name();
        if name != own_name {
            return Err(TemplateError::Unknown {
                name: name.to_string(),
                available: vec![own_name],
            });
        }

        let entry_path = self.layout.entry_file();
        if !entry_path.is_file() {
            return Err(TemplateError::NotFound {
                template: own_name,
                path: entry_path,
            });
        }

        let entry = fs::read_to_string(&entry_path).map_err(|e| TemplateError::Io {
            path: entry_path.clone(),
            source: e,
        })?;

        let mut fragments = BTreeMap::new();
        let layout_dir = self.layout.layout_dir();

        if layout_dir.is_dir() {
            for dir_entry in WalkDir::new(&layout_dir)
                .min_depth(1)
                .max_depth(1)
                .sort_by_file_name()
            {
                let dir_entry = dir_entry.map_err(|e| TemplateError::Io {
                    path: layout_dir.clone(),
                    source: e.into(),
                })?;
                let path = dir_entry.path();

                if !dir_entry.file_type().is_file() {
                    continue;
                }
                if path.extension().and_then(|e| e.to_str())
                    != Some(ProjectLayout::FRAGMENT_EXTENSION)
                {
                    continue;
                }
                let Some(file_name) = path.file_name().and_then(|s| s.to_str()) else {
                    continue;
                };

                let source = fs::read_to_string(path).map_err(|e| TemplateError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })?;
                fragments.insert(file_name.to_string(), source);
            }
        }

        tracing::debug!(
            "Resolved template '{}' from {} {} with {} fragments",
            name,
            self.kind(),
            self.layout.root().display(),
            fragments.len()
        );

        Ok(TemplateTree {
            name: name.to_string(),
            entry,
            fragments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn write_project(root: &std::path::Path) -> ProjectLayout {
        let layout = ProjectLayout::new(root);
        fs::create_dir_all(layout.layout_dir()).unwrap();
        fs::write(layout.entry_file(), "{% include \"a.html\" %}").unwrap();
        fs::write(layout.layout_dir().join("b.html"), "B").unwrap();
        fs::write(layout.layout_dir().join("a.html"), "A").unwrap();
        fs::write(layout.layout_dir().join("notes.txt"), "ignored").unwrap();
        fs::create_dir_all(layout.layout_dir().join("nested")).unwrap();
        fs::write(layout.layout_dir().join("nested/c.html"), "C").unwrap();
        layout
    }

    #[test]
    fn loads_entry_and_fragments() {
        let temp = tempdir().unwrap();
        let layout = write_project(temp.path());

        let tree = WorkingTree::new(layout).load().unwrap();

        assert_eq!(tree.entry, "{% include \"a.html\" %}");
        assert_eq!(tree.fragment_names(), vec!["a.html", "b.html"]);
    }

    #[test]
    fn missing_entry_is_not_found() {
        let temp = tempdir().unwrap();
        let layout = ProjectLayout::new(temp.path());

        let result = WorkingTree::new(layout.clone()).load();

        match result {
            Err(TemplateError::NotFound { path, .. }) => assert_eq!(path, layout.entry_file()),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn missing_layout_dir_yields_no_fragments() {
        let temp = tempdir().unwrap();
        let layout = ProjectLayout::new(temp.path());
        fs::create_dir_all(layout.entry_file().parent().unwrap()).unwrap();
        fs::write(layout.entry_file(), "plain").unwrap();

        let tree = WorkingTree::new(layout).load().unwrap();

        assert!(tree.fragments.is_empty());
    }

    #[test]
    fn rereads_files_on_every_resolve() {
        let temp = tempdir().unwrap();
        let layout = write_project(temp.path());
        let source = WorkingTree::new(layout.clone());

        let before = source.load().unwrap();
        fs::write(layout.layout_dir().join("a.html"), "A2").unwrap();
        let after = source.load().unwrap();

        assert_eq!(before.fragments["a.html"], "A");
        assert_eq!(after.fragments["a.html"], "A2");
    }

    #[test]
    fn lists_only_its_own_name() {
        let temp = tempdir().unwrap();
        let source = WorkingTree::new(write_project(temp.path()));

        assert_eq!(source.kind(), "working-tree");
        assert_eq!(source.list().unwrap(), vec![source.name()]);
        assert!(matches!(
            source.resolve("other"),
            Err(TemplateError::Unknown { .. })
        ));
    }
}
