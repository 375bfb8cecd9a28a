//! Plain-text output formatting

use super::generator_credit;

const RULE_WIDTH: usize = 50;

/// Format a rendered tree for any non-markdown file.
pub fn format_text(tree: &str, root_name: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    [
        format!("Directory Structure: {}", root_name),
        rule.clone(),
        String::new(),
        tree.to_string(),
        String::new(),
        rule,
        generator_credit(),
    ]
    .join("\n")
}
