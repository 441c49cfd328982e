pub mod bitmap;
pub use bitmap::*;

pub mod error;
pub use error::*;

pub mod geometry;
pub use geometry::*;

pub mod icon;
pub use icon::*;

pub mod sheet;
pub use sheet::*;

pub mod font;
pub use font::*;

use std::fmt::Display;
use std::io::Write;

/// Writes every item on its own line.
pub fn write_lines<W: Write, T: Display>(writer: &mut W, lines: &[T]) -> Result<()> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
