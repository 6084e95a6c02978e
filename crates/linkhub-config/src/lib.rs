//! Profile configuration model and project layout for linkhub sites.
//!
//! This crate loads the user's `config/config.yml` into a typed [`Config`] and
//! knows where every other piece of a project lives on disk.

pub mod config;
pub mod layout;

pub use config::{load_config, Config, ConfigError, Link, Params, Social, Theme};
pub use layout::{ProjectLayout, SENTINEL_FILE};
