//! TreeGenerator - depth-first walk that renders connector lines

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Result, TreeError};
use crate::stats::TreeStats;

use super::config::{Glyphs, SortMode, TreeConfig};
use super::filter::IgnoreMatcher;

/// A directory entry that survived filtering.
#[derive(Debug)]
struct Entry {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Rendered tree text plus the counters collected while producing it.
#[derive(Debug, Clone)]
pub struct GeneratedTree {
    pub text: String,
    pub stats: TreeStats,
}

/// Walks a directory and renders it line by line.
pub struct TreeGenerator {
    config: TreeConfig,
    matcher: IgnoreMatcher,
    glyphs: Glyphs,
    stats: TreeStats,
    lines: Vec<String>,
}

impl TreeGenerator {
    pub fn new(config: TreeConfig) -> Self {
        let matcher = IgnoreMatcher::new(&config.ignore_patterns);
        let glyphs = config.style.glyphs();
        Self {
            config,
            matcher,
            glyphs,
            stats: TreeStats::default(),
            lines: Vec::new(),
        }
    }

    /// Render the configured root. Counters and lines start fresh on every call.
    pub fn generate(&mut self) -> Result<GeneratedTree> {
        self.stats = TreeStats::default();
        self.lines = vec![display_name(&self.config.root)];

        let root = self.config.root.clone();
        self.walk_dir(&root, "", 0)?;

        if self.config.show_stats {
            self.lines.extend(self.stats.summary_lines());
        }

        Ok(GeneratedTree {
            text: std::mem::take(&mut self.lines).join("\n"),
            stats: self.stats,
        })
    }

    fn walk_dir(&mut self, path: &Path, prefix: &str, depth: usize) -> Result<()> {
        if self.config.max_depth.is_some_and(|max| depth >= max) {
            return Ok(());
        }
        self.stats.record_depth(depth);
        trace!(path = %path.display(), depth, "listing directory");

        let entries = self.read_and_filter_entries(path)?;
        let count = entries.len();

        for (i, entry) in entries.into_iter().enumerate() {
            let is_last = i + 1 == count;
            let connector = if is_last {
                self.glyphs.last_branch
            } else {
                self.glyphs.branch
            };

            if entry.is_dir {
                self.stats.record_directory();
                self.lines
                    .push(format!("{}{}{}/", prefix, connector, entry.name));

                let continuation = if is_last {
                    self.glyphs.space
                } else {
                    self.glyphs.vertical
                };
                let child_prefix = format!("{}{}", prefix, continuation);
                self.walk_dir(&entry.path, &child_prefix, depth + 1)?;
            } else {
                self.stats.record_file();
                self.lines
                    .push(format!("{}{}{}", prefix, connector, entry.name));
            }
        }
        Ok(())
    }

    /// List, filter and sort the children of `path`.
    ///
    /// A directory we are not allowed to list is treated as empty.
    fn read_and_filter_entries(&self, path: &Path) -> Result<Vec<Entry>> {
        let read_dir = match fs::read_dir(path) {
            Ok(rd) => rd,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                debug!(path = %path.display(), "permission denied, showing as empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(TreeError::ReadDir {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = match dir_entry {
                Ok(e) => e,
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => continue,
                Err(source) => {
                    return Err(TreeError::ReadDir {
                        path: path.to_path_buf(),
                        source,
                    });
                }
            };

            let name = dir_entry.file_name().to_string_lossy().to_string();
            if self.config.ignore_hidden && name.starts_with('.') {
                continue;
            }

            let entry_path = dir_entry.path();
            // Follows symlinks, so a link to a directory is walked as one
            let is_dir = entry_path.is_dir();

            if self.matcher.should_ignore(&name, is_dir) {
                continue;
            }
            if !self.config.type_filter.keeps(is_dir) {
                continue;
            }

            entries.push(Entry {
                name,
                path: entry_path,
                is_dir,
            });
        }

        sort_entries(&mut entries, self.config.sort);
        Ok(entries)
    }
}

/// Case-insensitive name order, ties broken by the raw name.
fn sort_entries(entries: &mut [Entry], mode: SortMode) {
    match mode {
        SortMode::Alphabetic => {
            entries.sort_by_cached_key(|e| (e.name.to_lowercase(), e.name.clone()));
        }
        SortMode::DirsFirst => {
            entries.sort_by_cached_key(|e| (!e.is_dir, e.name.to_lowercase(), e.name.clone()));
        }
    }
}

/// Final path segment, or the whole path when there is none (e.g. `/`).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Render `config.root` in one call.
pub fn generate(config: &TreeConfig) -> Result<GeneratedTree> {
    TreeGenerator::new(config.clone()).generate()
}
