//! Built-in ignore pattern bundles for common ecosystems

use std::collections::BTreeSet;

use clap::ValueEnum;

const PYTHON: &[&str] = &[
    "__pycache__",
    "*.pyc",
    "*.pyo",
    "*.pyd",
    ".Python",
    "*.so",
    ".venv",
    "venv",
    "ENV",
    "env",
    "*.egg-info",
    "*.egg",
    "dist",
    "build",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
    "*.py[cod]",
    ".coverage",
    "htmlcov",
];

const NODE: &[&str] = &[
    "node_modules",
    "npm-debug.log*",
    "yarn-debug.log*",
    "yarn-error.log*",
    ".npm",
    ".yarn",
    "dist",
    "build",
    ".next",
    ".nuxt",
    "coverage",
];

const GIT: &[&str] = &[".git", ".gitignore", ".gitattributes", ".gitmodules"];

const IDE: &[&str] = &[
    ".idea",
    ".vscode",
    "*.swp",
    "*.swo",
    "*~",
    ".project",
    ".settings",
    ".classpath",
    "*.sublime-*",
    ".atom",
];

/// Named preset of ignore patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Python bytecode, virtualenvs and build output
    Python,
    /// node_modules, package manager logs and bundler output
    Node,
    /// Git metadata
    Git,
    /// Editor and IDE files
    Ide,
    /// Every preset above
    All,
}

impl Preset {
    pub fn patterns(self) -> BTreeSet<String> {
        let lists: &[&[&str]] = match self {
            Self::Python => &[PYTHON],
            Self::Node => &[NODE],
            Self::Git => &[GIT],
            Self::Ide => &[IDE],
            Self::All => &[PYTHON, NODE, GIT, IDE],
        };
        lists
            .iter()
            .flat_map(|list| list.iter())
            .map(|p| p.to_string())
            .collect()
    }
}

/// Union of the patterns of every requested preset.
pub fn preset_patterns(presets: &[Preset]) -> BTreeSet<String> {
    presets.iter().flat_map(|p| p.patterns()).collect()
}
