//! Configuration types for tree generation

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{Result, TreeError};

/// Which entry kinds survive the type filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    DirsOnly,
    FilesOnly,
}

impl TypeFilter {
    /// Build a filter from the two CLI flags, rejecting the combination of both.
    pub fn from_flags(dirs_only: bool, files_only: bool) -> Result<Self> {
        match (dirs_only, files_only) {
            (true, true) => Err(TreeError::ConflictingTypeFilters),
            (true, false) => Ok(Self::DirsOnly),
            (false, true) => Ok(Self::FilesOnly),
            (false, false) => Ok(Self::All),
        }
    }

    pub fn keeps(self, is_dir: bool) -> bool {
        match self {
            Self::All => true,
            Self::DirsOnly => is_dir,
            Self::FilesOnly => !is_dir,
        }
    }
}

/// Sibling ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Directories before files, each group sorted by name
    #[default]
    DirsFirst,
    /// One case-insensitive sort across all entries
    Alphabetic,
}

/// The four glyphs used to draw branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub branch: &'static str,
    pub last_branch: &'static str,
    pub vertical: &'static str,
    pub space: &'static str,
}

/// Tree drawing style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TreeStyle {
    /// |-- and +-- connectors
    #[default]
    Ascii,
    /// Box-drawing characters
    Unicode,
    /// Heavy box-drawing characters
    Bold,
    /// |-- and `-- connectors
    Minimal,
}

impl TreeStyle {
    pub fn glyphs(self) -> Glyphs {
        match self {
            Self::Ascii => Glyphs {
                branch: "|-- ",
                last_branch: "+-- ",
                vertical: "|   ",
                space: "    ",
            },
            Self::Unicode => Glyphs {
                branch: "├── ",
                last_branch: "└── ",
                vertical: "│   ",
                space: "    ",
            },
            Self::Bold => Glyphs {
                branch: "┣━━ ",
                last_branch: "┗━━ ",
                vertical: "┃   ",
                space: "    ",
            },
            Self::Minimal => Glyphs {
                branch: "|-- ",
                last_branch: "`-- ",
                vertical: "|   ",
                space: "    ",
            },
        }
    }
}

/// Snapshot of one traversal request.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    pub root: PathBuf,
    /// `None` means unlimited
    pub max_depth: Option<usize>,
    pub type_filter: TypeFilter,
    pub sort: SortMode,
    pub style: TreeStyle,
    pub show_stats: bool,
    pub use_color: bool,
    /// Skip entries whose name starts with '.'
    pub ignore_hidden: bool,
    pub ignore_patterns: BTreeSet<String>,
}

impl TreeConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: None,
            type_filter: TypeFilter::All,
            sort: SortMode::DirsFirst,
            style: TreeStyle::Ascii,
            show_stats: false,
            use_color: false,
            ignore_hidden: false,
            ignore_patterns: BTreeSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_filter_rejects_both_flags() {
        assert!(matches!(
            TypeFilter::from_flags(true, true),
            Err(TreeError::ConflictingTypeFilters)
        ));
        assert_eq!(TypeFilter::from_flags(true, false).unwrap(), TypeFilter::DirsOnly);
        assert_eq!(TypeFilter::from_flags(false, true).unwrap(), TypeFilter::FilesOnly);
        assert_eq!(TypeFilter::from_flags(false, false).unwrap(), TypeFilter::All);
    }

    #[test]
    fn test_type_filter_keeps() {
        assert!(TypeFilter::All.keeps(true));
        assert!(TypeFilter::All.keeps(false));
        assert!(TypeFilter::DirsOnly.keeps(true));
        assert!(!TypeFilter::DirsOnly.keeps(false));
        assert!(!TypeFilter::FilesOnly.keeps(true));
        assert!(TypeFilter::FilesOnly.keeps(false));
    }

    #[test]
    fn test_style_table() {
        let ascii = TreeStyle::Ascii.glyphs();
        assert_eq!(ascii.branch, "|-- ");
        assert_eq!(ascii.last_branch, "+-- ");
        assert_eq!(TreeStyle::Minimal.glyphs().last_branch, "`-- ");
        assert_eq!(TreeStyle::Unicode.glyphs().vertical, "│   ");
        assert_eq!(TreeStyle::Bold.glyphs().branch, "┣━━ ");

        // Every glyph is four columns wide so prefixes line up
        for style in TreeStyle::value_variants() {
            let g = style.glyphs();
            for glyph in [g.branch, g.last_branch, g.vertical, g.space] {
                assert_eq!(glyph.chars().count(), 4, "{:?}: {:?}", style, glyph);
            }
        }
    }

    #[test]
    fn test_defaults() {
        let config = TreeConfig::new("proj");
        assert_eq!(config.max_depth, None);
        assert_eq!(config.sort, SortMode::DirsFirst);
        assert_eq!(config.style, TreeStyle::Ascii);
        assert!(config.ignore_patterns.is_empty());
    }
}
