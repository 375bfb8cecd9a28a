//! Tree formatting and display
//!
//! - `markdown` - heading plus fenced code block, for `.md` files
//! - `text` - heading and rule lines, for every other file
//! - `color` - green-on-black terminal output

mod color;
mod markdown;
mod text;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TreeError};

pub use color::write_colored;
pub use markdown::format_markdown;
pub use text::format_text;

/// Credit line shared by both file wrappers.
fn generator_credit() -> String {
    format!("Generated with treetool v{}", env!("CARGO_PKG_VERSION"))
}

/// Wrapper used when writing to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Text,
}

impl OutputFormat {
    /// `.md` (any case) selects markdown; anything else is plain text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("md") => Self::Markdown,
            _ => Self::Text,
        }
    }

    pub fn format(self, tree: &str, root_name: &str) -> String {
        match self {
            Self::Markdown => format_markdown(tree, root_name),
            Self::Text => format_text(tree, root_name),
        }
    }
}

/// Wrap `tree` for `path`, write it, and return the resolved file path.
pub fn write_output_file(path: &Path, tree: &str, root_name: &str) -> Result<PathBuf> {
    let content = OutputFormat::from_path(path).format(tree, root_name);
    fs::write(path, content).map_err(|source| TreeError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    debug!(path = %resolved.display(), "wrote tree");
    Ok(resolved)
}
