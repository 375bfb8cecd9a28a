//! treetool - render directory structures as text trees for documentation

pub mod error;
pub mod output;
pub mod presets;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{OutputFormat, format_markdown, format_text, write_colored, write_output_file};
pub use presets::{Preset, preset_patterns};
pub use stats::TreeStats;
pub use tree::{
    GeneratedTree, Glyphs, IgnoreMatcher, SortMode, TreeConfig, TreeGenerator, TreeStyle,
    TypeFilter, display_name, generate, load_patterns,
};
