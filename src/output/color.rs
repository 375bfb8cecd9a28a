//! Terminal coloring for the rendered tree

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

/// Green on black, applied once around the whole block.
fn tree_color() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Green))
        .set_intense(true)
        .set_bg(Some(Color::Black))
        .set_reset(false);
    spec
}

/// Write `text` followed by a newline, colored as one block when `out` supports color.
pub fn write_colored<W: WriteColor>(out: &mut W, text: &str) -> io::Result<()> {
    out.set_color(&tree_color())?;
    write!(out, "{}", text)?;
    out.reset()?;
    writeln!(out)?;
    Ok(())
}
