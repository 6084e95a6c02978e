//! Live preview server for linkhub projects.
//!
//! Re-renders the hub page from the files on disk on every request, so edits
//! to the configuration or templates show up on the next reload. Built
//! output is served as plain files by [`static_router`].

pub mod server;

pub use server::{router, static_router, DevServer, DevServerConfig, ServerError};
