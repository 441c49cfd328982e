//! Turns an 8 pixel wide bitmap font sheet into `.byte` directives.
//!
//! Glyphs are laid out next to each other in the sheet and wrap into the next cell row
//! every `sheet_width / 8` glyphs. Output is row major: first row 0 of all glyphs, then row 1...

use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::{write_lines, FontSheet, IncError, PixelSource, Result};

pub const CELL_WIDTH: u32 = 8;
pub const CELL_HEIGHT: u32 = 16;
pub const GLYPH_COUNT: u32 = 256;
pub const DEFAULT_COLOR_INDEX: u8 = 15;

/// One row of one glyph, expanded to a palette index per pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteDirective {
    glyph: u8,
    row: u8,
    values: [u8; CELL_WIDTH as usize],
    color_index: u8,
}

impl ByteDirective {
    pub fn glyph(&self) -> u8 {
        self.glyph
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn values(&self) -> [u8; CELL_WIDTH as usize] {
        self.values
    }

    pub fn color_index(&self) -> u8 {
        self.color_index
    }

    /// The row as 0/1 flags.
    pub fn flags(&self) -> [u8; CELL_WIDTH as usize] {
        self.values.map(|v| v.checked_div(self.color_index).unwrap_or(0))
    }

    /// The glyph itself when it is printable ascii, otherwise `\<hex>h`.
    pub fn annotation(&self) -> String {
        glyph_annotation(self.glyph)
    }
}

pub fn glyph_annotation(glyph: u8) -> String {
    if glyph < 127 && (glyph == b' ' || glyph.is_ascii_graphic()) {
        char::from(glyph).to_string()
    } else {
        format!("\\{glyph:X}h")
    }
}

impl fmt::Display for ByteDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".byte ")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "0x{v:02X}")?;
        }
        write!(f, " # ")?;
        for flag in self.flags() {
            write!(f, "{flag}")?;
        }
        write!(f, " {}", self.annotation())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontConverter {
    color_index: u8,
}

impl Default for FontConverter {
    fn default() -> Self {
        Self {
            color_index: DEFAULT_COLOR_INDEX,
        }
    }
}

impl FontConverter {
    pub fn new(color_index: u8) -> Result<Self> {
        if color_index == 0 {
            return Err(IncError::ZeroColorIndex);
        }
        Ok(Self { color_index })
    }

    pub fn color_index(&self) -> u8 {
        self.color_index
    }

    /// Checks that every glyph cell lies inside the sheet.
    pub fn validate(&self, source: &dyn PixelSource) -> Result<()> {
        if self.color_index == 0 {
            return Err(IncError::ZeroColorIndex);
        }
        let width = source.width();
        if width == 0 || width % CELL_WIDTH != 0 {
            return Err(IncError::SheetWidthNotAligned { width, cell_width: CELL_WIDTH });
        }
        let required_height = (GLYPH_COUNT * CELL_WIDTH).div_ceil(width) * CELL_HEIGHT;
        if source.height() < required_height {
            return Err(IncError::SheetTooSmall {
                width,
                height: source.height(),
                required_height,
                glyphs: GLYPH_COUNT,
            });
        }
        Ok(())
    }

    /// Samples one row of one glyph from a validated sheet.
    fn sample(&self, source: &dyn PixelSource, glyph: u8, row: u8) -> ByteDirective {
        let width = source.width();
        let mut values = [0; CELL_WIDTH as usize];
        for (bit, value) in values.iter_mut().enumerate() {
            let linear = glyph as u32 * CELL_WIDTH + bit as u32;
            let x = linear % width;
            let y = linear / width * CELL_HEIGHT + row as u32;
            if source.get_pixel(x, y) != 0 {
                *value = self.color_index;
            }
        }
        ByteDirective {
            glyph,
            row,
            values,
            color_index: self.color_index,
        }
    }

    pub fn directives(&self, source: &dyn PixelSource) -> Result<Vec<ByteDirective>> {
        self.validate(source)?;
        let mut result = Vec::with_capacity((GLYPH_COUNT * CELL_HEIGHT) as usize);
        for row in 0..CELL_HEIGHT as u8 {
            for glyph in 0..=u8::MAX {
                result.push(self.sample(source, glyph, row));
            }
        }
        log::debug!("sampled {} glyph rows from {}x{} sheet", result.len(), source.width(), source.height());
        Ok(result)
    }
}

pub fn write_font_directives<W: Write>(converter: &FontConverter, source: &dyn PixelSource, writer: &mut W) -> Result<()> {
    let directives = converter.directives(source)?;
    write_lines(writer, &directives)
}

/// Loads the sheet at `path` and writes its directives. Nothing is written if loading fails.
pub fn convert_font_sheet<W: Write>(path: &Path, converter: &FontConverter, writer: &mut W) -> Result<()> {
    let sheet = FontSheet::load(path)?;
    write_font_directives(converter, &sheet, writer)
}
