//! Static site builder for linkhub projects.
//!
//! Renders the hub page once and copies the project's asset trees next to it,
//! producing a directory that can be deployed as-is.

pub mod builder;
pub mod copy;

pub use builder::{BuildConfig, BuildError, BuildResult, CopyFailure, StaticBuilder};
pub use copy::{copy_tree, CopyError};
