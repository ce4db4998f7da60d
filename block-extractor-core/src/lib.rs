//! Block Extractor Core - Fence scanning, input loading, and configuration
//!
//! This crate contains the logic behind the `block-extractor` command,
//! independent of argument parsing:
//! - Fence scanner that pulls triple-backtick blocks out of Markdown
//! - Selection model (all blocks or one by index)
//! - Document loading from files and readers
//! - Configuration management

pub mod config;
pub mod doc;
pub mod scan;
pub mod selection;

// Re-export commonly used types
pub use config::Config;
pub use doc::{Document, Source};
pub use scan::{extract, extract_with, scan, Block, BLOCK_SEPARATOR};
pub use selection::Selection;
