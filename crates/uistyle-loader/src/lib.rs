//! # uistyle-loader
//!
//! The I/O shell around `uistyle-core`: reads TOML style files from disk,
//! binds them into a [`Style`](uistyle_core::Style), resolves the
//! platform-appropriate style file location, and exports a live style back
//! to a document.
//!
//! Loading is synchronous and single-threaded; run it before handing the
//! style to a renderer. Logging goes through `tracing` – hosts install
//! their own subscriber, this crate never does.

pub mod export;
pub mod loader;

pub use export::{save_style, style_document};
pub use loader::{apply_str, config_style_path, load, load_into, LoadError};
