//! Template registry, bundled catalog and renderer for linkhub sites.
//!
//! Templates come from one of two [`TemplateSource`]s: the [`EmbeddedCatalog`]
//! compiled into the binary (used to scaffold new projects) or a project's
//! [`WorkingTree`] (used for preview and build). Either yields a
//! [`TemplateTree`] that [`render`] binds a configuration into.

pub mod catalog;
pub mod render;
pub mod traits;
pub mod working_tree;

pub use catalog::{scaffold, EmbeddedCatalog, ScaffoldResult, DEFAULT_TEMPLATE};
pub use render::{render, render_project, RenderError, SiteError};
pub use traits::{TemplateError, TemplateSource, TemplateTree};
pub use working_tree::WorkingTree;
