//! CLI entry point for treetool

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{CommandFactory, FromArgMatches, Parser};
use termcolor::{ColorChoice, StandardStream};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use treetool::{
    Preset, Result, SortMode, TreeConfig, TreeError, TreeGenerator, TreeStyle, TypeFilter,
    display_name, load_patterns, preset_patterns, write_colored, write_output_file,
};

const EXAMPLES: &str = "\
Examples:
  treetool .                             # Current directory
  treetool ./src --depth 3               # Limit depth to 3
  treetool . --preset python -o tree.md  # Python project as Markdown
  treetool . --style unicode --color     # Unicode style with colors";

#[derive(Parser, Debug)]
#[command(name = "treetool")]
#[command(about = "Generate ASCII/Unicode tree representations of directory structures")]
#[command(version, after_help = EXAMPLES)]
struct Args {
    /// Root directory path
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output file (.md for Markdown, anything else for plain text)
    #[arg(short = 'o', long = "output", value_name = "FILE", help_heading = "Output Options")]
    output: Option<PathBuf>,

    /// Show statistics (directory/file counts)
    #[arg(long = "stats", help_heading = "Output Options")]
    stats: bool,

    /// Enable colored output (green on black); ignored with --output
    #[arg(long = "color", help_heading = "Output Options")]
    color: bool,

    /// Maximum depth to display (default: unlimited)
    #[arg(short = 'd', long = "depth", value_name = "N", help_heading = "Filter Options")]
    depth: Option<usize>,

    /// Show only directories
    #[arg(long = "dirs-only", help_heading = "Filter Options")]
    dirs_only: bool,

    /// Show only files
    #[arg(long = "files-only", help_heading = "Filter Options")]
    files_only: bool,

    /// Exclude hidden files and directories
    #[arg(long = "no-hidden", help_heading = "Filter Options")]
    no_hidden: bool,

    /// Use preset ignore patterns (can be used multiple times)
    #[arg(short = 'p', long = "preset", value_name = "NAME", help_heading = "Ignore Patterns")]
    preset: Vec<Preset>,

    /// Path to an ignore file (one pattern per line, # for comments)
    #[arg(short = 'i', long = "ignore-file", value_name = "FILE", help_heading = "Ignore Patterns")]
    ignore_file: Option<PathBuf>,

    /// Exclude pattern (can be used multiple times)
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN", help_heading = "Ignore Patterns")]
    exclude: Vec<String>,

    /// Tree drawing style
    #[arg(short = 's', long = "style", default_value = "ascii", help_heading = "Style Options")]
    style: TreeStyle,

    /// Sort alphabetically (default: directories first)
    #[arg(short = 'a', long = "alphabetic", help_heading = "Style Options")]
    alphabetic: bool,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

/// Canonicalize the root and make sure it is a directory.
fn resolve_root(path: &Path) -> Result<PathBuf> {
    let root = path
        .canonicalize()
        .map_err(|_| TreeError::PathNotFound(absolute_or_given(path)))?;
    if !root.is_dir() {
        return Err(TreeError::NotADirectory(root));
    }
    Ok(root)
}

fn absolute_or_given(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Presets, then the ignore file, then explicit excludes.
fn collect_patterns(args: &Args) -> Result<BTreeSet<String>> {
    let mut patterns = preset_patterns(&args.preset);

    if let Some(ref ignore_file) = args.ignore_file {
        // The loader tolerates a missing file; an explicitly named one must exist
        if !ignore_file.exists() {
            return Err(TreeError::IgnoreFileNotFound(ignore_file.clone()));
        }
        patterns.extend(load_patterns(ignore_file)?);
    }

    patterns.extend(args.exclude.iter().cloned());
    Ok(patterns)
}

fn build_config(args: &Args) -> Result<TreeConfig> {
    let root = resolve_root(&args.path)?;
    let ignore_patterns = collect_patterns(args)?;
    let type_filter = TypeFilter::from_flags(args.dirs_only, args.files_only)?;

    Ok(TreeConfig {
        max_depth: args.depth,
        type_filter,
        sort: if args.alphabetic {
            SortMode::Alphabetic
        } else {
            SortMode::DirsFirst
        },
        style: args.style,
        show_stats: args.stats,
        // No color for file output
        use_color: args.color && args.output.is_none(),
        ignore_hidden: args.no_hidden,
        ignore_patterns,
        ..TreeConfig::new(root)
    })
}

fn run(args: &Args) -> Result<()> {
    let config = build_config(args)?;
    debug!(?config, "starting traversal");

    let root_name = display_name(&config.root);
    let use_color = config.use_color;
    let tree = TreeGenerator::new(config).generate()?;

    let printed = match args.output {
        Some(ref output) => {
            let resolved = write_output_file(output, &tree.text, &root_name)?;
            writeln!(io::stdout().lock(), "Tree saved to: {}", resolved.display())
        }
        None if use_color => {
            let mut stdout = StandardStream::stdout(ColorChoice::Always);
            write_colored(&mut stdout, &tree.text)
        }
        None => writeln!(io::stdout().lock(), "{}", tree.text),
    };

    match printed {
        // Reader went away (e.g. `| head`), nothing left to report
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(source) => Err(TreeError::WriteStdout(source)),
        Ok(()) => Ok(()),
    }
}

fn main() {
    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| {
        eprintln!("treetool: argument parsing error: {}", e);
        process::exit(1);
    });

    init_logging();

    if let Err(e) = run(&args) {
        eprintln!("treetool: {}", e);
        process::exit(1);
    }
}
