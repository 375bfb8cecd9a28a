//! Ignore-pattern matching for tree walking

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use glob::Pattern;
use tracing::debug;

use crate::error::{Result, TreeError};

/// A single-segment name pattern: glob match with a literal-equality fallback.
#[derive(Debug, Clone)]
struct NamePattern {
    raw: String,
    /// `None` when `raw` is not a valid glob; only equality applies then.
    glob: Option<Pattern>,
}

impl NamePattern {
    fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            glob: Pattern::new(raw).ok(),
        }
    }

    fn matches(&self, name: &str) -> bool {
        self.glob.as_ref().is_some_and(|p| p.matches(name)) || self.raw == name
    }
}

/// One parsed ignore rule.
#[derive(Debug, Clone)]
enum IgnoreRule {
    /// Applies to files and directories alike
    Any(NamePattern),
    /// Written with a trailing `/`; applies to directories only
    DirOnly(NamePattern),
}

impl IgnoreRule {
    fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix('/') {
            Some(stem) => Self::DirOnly(NamePattern::new(stem)),
            None => Self::Any(NamePattern::new(pattern)),
        }
    }

    fn matches(&self, name: &str, is_dir: bool) -> bool {
        match self {
            Self::Any(p) => p.matches(name),
            Self::DirOnly(p) => is_dir && p.matches(name),
        }
    }
}

/// Decides whether an entry name is excluded by any configured pattern.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    rules: Vec<IgnoreRule>,
}

impl IgnoreMatcher {
    pub fn new<'a, I>(patterns: I) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        Self {
            rules: patterns.into_iter().map(|p| IgnoreRule::parse(p)).collect(),
        }
    }

    pub fn should_ignore(&self, name: &str, is_dir: bool) -> bool {
        self.rules.iter().any(|rule| rule.matches(name, is_dir))
    }
}

/// Parse ignore-file contents: one pattern per line, blanks and `#` comments skipped.
pub fn parse_patterns(contents: &str) -> BTreeSet<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Load patterns from an ignore file. A missing file yields an empty set.
pub fn load_patterns(path: &Path) -> Result<BTreeSet<String>> {
    if !path.exists() {
        debug!(path = %path.display(), "ignore file absent, no patterns loaded");
        return Ok(BTreeSet::new());
    }
    let contents = fs::read_to_string(path).map_err(|source| TreeError::ReadIgnoreFile {
        path: path.to_path_buf(),
        source,
    })?;
    let patterns = parse_patterns(&contents);
    debug!(path = %path.display(), count = patterns.len(), "loaded ignore patterns");
    Ok(patterns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(patterns: &[&str]) -> IgnoreMatcher {
        let owned: Vec<String> = patterns.iter().map(|s| s.to_string()).collect();
        IgnoreMatcher::new(&owned)
    }

    #[test]
    fn test_glob_patterns() {
        let m = matcher(&["*.pyc", "test?.rs", "[abc].txt", "*.py[cod]"]);
        assert!(m.should_ignore("mod.pyc", false));
        assert!(m.should_ignore("test1.rs", false));
        assert!(!m.should_ignore("test12.rs", false));
        assert!(m.should_ignore("b.txt", false));
        assert!(!m.should_ignore("d.txt", false));
        assert!(m.should_ignore("x.pyd", false));
        assert!(!m.should_ignore("main.py", false));
    }

    #[test]
    fn test_matching_is_anchored_and_case_sensitive() {
        let m = matcher(&["build", "*.LOG"]);
        assert!(m.should_ignore("build", true));
        assert!(!m.should_ignore("build2", true));
        assert!(!m.should_ignore("mybuild", true));
        assert!(!m.should_ignore("Build", true));
        assert!(m.should_ignore("x.LOG", false));
        assert!(!m.should_ignore("x.log", false));
    }

    #[test]
    fn test_star_matches_leading_dot() {
        let m = matcher(&["*~", "*"]);
        assert!(m.should_ignore(".hidden", false));
    }

    #[test]
    fn test_dir_only_pattern() {
        let m = matcher(&["target/", "out*/"]);
        assert!(m.should_ignore("target", true));
        assert!(!m.should_ignore("target", false));
        assert!(m.should_ignore("output", true));
        assert!(!m.should_ignore("output", false));
    }

    #[test]
    fn test_invalid_glob_falls_back_to_exact() {
        // "[abc" is not a valid glob but still names a literal entry
        let m = matcher(&["[abc", "notes[/"]);
        assert!(m.should_ignore("[abc", false));
        assert!(!m.should_ignore("a", false));
        assert!(m.should_ignore("notes[", true));
        assert!(!m.should_ignore("notes[", false));
    }

    #[test]
    fn test_literal_metacharacters_match_exactly() {
        // A valid glob that doesn't match its own text still matches by equality
        let m = matcher(&["[x]"]);
        assert!(m.should_ignore("x", false));
        assert!(m.should_ignore("[x]", false));
    }

    #[test]
    fn test_empty_matcher_ignores_nothing() {
        let m = IgnoreMatcher::default();
        assert!(!m.should_ignore("anything", true));
    }

    #[test]
    fn test_parse_patterns() {
        let contents = "# comment\n\n  *.log  \nbuild/\n   # indented comment\n*.log\n";
        let patterns = parse_patterns(contents);
        let expected: BTreeSet<String> =
            ["*.log", "build/"].iter().map(|s| s.to_string()).collect();
        assert_eq!(patterns, expected);
    }

    #[test]
    fn test_load_patterns_missing_file_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let patterns = load_patterns(&dir.path().join("nope.ignore")).unwrap();
        assert!(patterns.is_empty());
    }

    #[test]
    fn test_load_patterns_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".treeignore");
        fs::write(&path, "node_modules\n# deps\n\n*.tmp\n").unwrap();
        let patterns = load_patterns(&path).unwrap();
        assert_eq!(patterns.len(), 2);
        assert!(patterns.contains("node_modules"));
        assert!(patterns.contains("*.tmp"));
    }
}
