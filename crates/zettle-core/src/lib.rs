//! Zettle Core Library
//!
//! Directory registry, note scanning, citation index and the reference
//! completion engine. Editor interaction goes through the `host` traits.
//!

pub mod citation;
pub mod commands;
mod config;
pub mod completion;
pub mod error;
pub mod host;
pub mod line_map;
pub mod model;
pub mod registry;
pub mod scanner;
pub mod syntax;
pub mod utils;
pub mod vfs;

pub use citation::CitationIndex;
pub use completion::CompletionEngine;
pub use config::{ZettleConfig, DEFAULT_STORE_NAME};
pub use error::{Result, ZettleError};
pub use model::{CompletionCandidate, Trigger};
pub use registry::DirectoryRegistry;
pub use utils::id::{generate_chronological_id, generate_chronological_id_at};
pub use utils::normalize_path;
