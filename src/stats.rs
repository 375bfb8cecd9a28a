//! Traversal statistics and the summary block

/// Width of the rule lines around the summary.
const RULE_WIDTH: usize = 40;

/// Counters accumulated during one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
    /// Deepest directory level whose children were listed (root is 0)
    pub max_depth_reached: usize,
}

impl TreeStats {
    pub fn record_directory(&mut self) {
        self.directories += 1;
    }

    pub fn record_file(&mut self) {
        self.files += 1;
    }

    pub fn record_depth(&mut self, depth: usize) {
        self.max_depth_reached = self.max_depth_reached.max(depth);
    }

    /// Summary lines appended below the tree, starting with a blank separator.
    pub fn summary_lines(&self) -> Vec<String> {
        let rule = "-".repeat(RULE_WIDTH);
        vec![
            String::new(),
            rule.clone(),
            format!("Directories: {}", self.directories),
            format!("Files:       {}", self.files),
            format!("Max Depth:   {}", self.max_depth_reached),
            rule,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_depth_keeps_maximum() {
        let mut stats = TreeStats::default();
        stats.record_depth(2);
        stats.record_depth(1);
        assert_eq!(stats.max_depth_reached, 2);
    }

    #[test]
    fn test_summary_lines() {
        let mut stats = TreeStats::default();
        stats.record_directory();
        stats.record_file();
        stats.record_file();
        stats.record_depth(1);

        let lines = stats.summary_lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "-".repeat(40));
        assert_eq!(lines[2], "Directories: 1");
        assert_eq!(lines[3], "Files:       2");
        assert_eq!(lines[4], "Max Depth:   1");
        assert_eq!(lines[5], lines[1]);
    }
}
