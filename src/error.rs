//! Error types for tree generation and the CLI surface

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("--dirs-only and --files-only are mutually exclusive")]
    ConflictingTypeFilters,

    #[error("ignore file not found: {}", .0.display())]
    IgnoreFileNotFound(PathBuf),

    #[error("cannot read ignore file {}: {source}", path.display())]
    ReadIgnoreFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot list directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing file {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing to stdout: {0}")]
    WriteStdout(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
