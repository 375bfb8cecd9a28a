//! Markdown output formatting
//!
//! Wraps the rendered tree in a fenced code block under a heading naming the root.

use super::generator_credit;

/// Format a rendered tree for a `.md` file.
pub fn format_markdown(tree: &str, root_name: &str) -> String {
    [
        format!("# Directory Structure: `{}`", root_name),
        String::new(),
        "```".to_string(),
        tree.to_string(),
        "```".to_string(),
        String::new(),
        format!("*{}*", generator_credit()),
    ]
    .join("\n")
}
