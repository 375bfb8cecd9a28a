//! Directory tree walking logic
//!
//! `TreeGenerator` lists each directory once, drops hidden, ignored and
//! type-filtered entries, sorts the survivors and emits one connector line
//! per entry in pre-order.

mod config;
mod filter;
mod walker;

pub use config::{Glyphs, SortMode, TreeConfig, TreeStyle, TypeFilter};
pub use filter::{IgnoreMatcher, load_patterns, parse_patterns};
pub use walker::{GeneratedTree, TreeGenerator, display_name, generate};
