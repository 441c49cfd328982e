//! Turns a packed bitmap into ARM store instructions that paint it into the framebuffer.
//!
//! The generated code expects the framebuffer base in `fb`, the foreground color in `white`
//! and uses `r2` as scratch register.

use std::fmt;
use std::io::Write;

use crate::{write_lines, FramebufferGeometry, PackedBitmap, Result};

/// Bytes covered by one source byte of the bitmap.
pub const BYTE_SPAN: u32 = 64;

/// Bytes covered by one source bit.
pub const BIT_SPAN: u32 = 8;

/// Offset of the upper word for 16 bpp targets.
const HIGH_WORD: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconStatement {
    /// Loads the origin offset into the scratch register.
    LoadOffset(u32),
    /// Adds the scratch register to the framebuffer pointer.
    AddOffset,
    /// Stores the foreground color at `fb + offset`.
    Store(u32),
    /// Moves the framebuffer pointer one line down.
    AdvanceRow(u32),
}

impl IconStatement {
    pub fn is_store(&self) -> bool {
        matches!(self, IconStatement::Store(_))
    }

    pub fn is_advance(&self) -> bool {
        matches!(self, IconStatement::AdvanceRow(_))
    }
}

impl fmt::Display for IconStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconStatement::LoadOffset(offset) => write!(f, "ldr r2, =#{offset}"),
            IconStatement::AddOffset => write!(f, "add fb, r2"),
            IconStatement::Store(offset) => write!(f, "str white, [fb, #{offset}]"),
            IconStatement::AdvanceRow(stride) => write!(f, "add fb, #{stride}"),
        }
    }
}

pub struct IconProgram;

impl IconProgram {
    pub fn generate(bitmap: &PackedBitmap, geometry: &FramebufferGeometry) -> Result<Vec<IconStatement>> {
        let origin = geometry.origin_offset()?;
        let stride = geometry.stride()?;
        let high_word = geometry.bits_per_pixel == 16;

        let mut program = vec![IconStatement::LoadOffset(origin), IconStatement::AddOffset];
        for row in bitmap.rows() {
            for _ in 0..geometry.scanlines_per_row {
                for (col, byte) in row.iter().enumerate() {
                    for bit in (0..8).rev() {
                        if byte & (1u8 << bit) == 0 {
                            continue;
                        }
                        let offset = col as u32 * BYTE_SPAN + (7 - bit) * BIT_SPAN;
                        program.push(IconStatement::Store(offset));
                        if high_word {
                            program.push(IconStatement::Store(offset + HIGH_WORD));
                        }
                    }
                }
                program.push(IconStatement::AdvanceRow(stride));
            }
        }
        log::debug!(
            "generated {} statements for a {}x{} bitmap at offset {origin}",
            program.len(),
            bitmap.width(),
            bitmap.height()
        );
        Ok(program)
    }
}

pub fn write_icon_program<W: Write>(bitmap: &PackedBitmap, geometry: &FramebufferGeometry, writer: &mut W) -> Result<()> {
    let program = IconProgram::generate(bitmap, geometry)?;
    write_lines(writer, &program)
}
