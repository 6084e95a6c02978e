//! Binding configuration into a template tree.

use minijinja::{Environment, UndefinedBehavior};

use linkhub_config::{load_config, Config, ConfigError, ProjectLayout};

use crate::traits::{TemplateError, TemplateTree};
use crate::working_tree::WorkingTree;

/// Error raised while rendering a template tree.
///
/// Covers template syntax errors, `include`s of fragments the tree does not
/// have, and references to values outside the configuration shape.
#[derive(Debug, thiserror::Error)]
#[error("Failed to render template '{template}': {source}")]
pub struct RenderError {
    /// Name of the template tree being rendered
    pub template: String,

    #[source]
    pub source: minijinja::Error,
}

/// Any failure on the way from project files to a rendered page.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Build the template environment for `tree`.
///
/// Sources are handed to a loader and only parsed when first requested, so
/// the entry document and its fragments form one template set.
fn environment(tree: &TemplateTree) -> Environment<'static> {
    let mut sources = tree.fragments.clone();
    sources.insert(TemplateTree::entry_name().to_string(), tree.entry.clone());

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.set_loader(move |name| Ok(sources.get(name).cloned()));
    env
}

/// Render `tree` with `config`.
///
/// Output depends only on the two inputs. Values are HTML-escaped by the
/// template engine; the configuration itself is never modified.
pub fn render(tree: &TemplateTree, config: &Config) -> Result<String, RenderError> {
    let env = environment(tree);

    let to_error = |e: minijinja::Error| RenderError {
        template: tree.name.clone(),
        source: e,
    };

    let template = env.get_template(TemplateTree::entry_name()).map_err(to_error)?;
    template.render(config).map_err(to_error)
}

/// Load the configuration and template of the project at `layout` and render
/// the hub page.
///
/// Both are read from disk on every call.
pub fn render_project(layout: &ProjectLayout) -> Result<String, SiteError> {
    let config = load_config(&layout.config_file())?;
    let tree = WorkingTree::new(layout.clone()).load()?;
    let html = render(&tree, &config)?;

    Ok(html)
}
