use std::fmt;

use crate::{IncError, Result};

/// A monochrome bitmap stored as rows of bytes.
/// Bits are read most significant first, so bit 7 of the first byte is the leftmost pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedBitmap {
    rows: Vec<Vec<u8>>,
    bytes_per_row: usize,
}

const SET_PIXEL: char = 'x';
const CLEAR_PIXEL: char = '-';

impl PackedBitmap {
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self> {
        let bytes_per_row = rows.first().map_or(0, Vec::len);
        for (row, data) in rows.iter().enumerate() {
            if data.len() != bytes_per_row {
                return Err(IncError::InconsistentRowWidth {
                    row,
                    expected: bytes_per_row,
                    actual: data.len(),
                });
            }
        }
        Ok(Self { rows, bytes_per_row })
    }

    /// Parses ascii art where `x` marks a set pixel and `-` or a space an unset one.
    /// Rows are padded to the widest row, rounded up to whole bytes.
    pub fn parse(art: &[&str]) -> Result<Self> {
        let width = art.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let bytes_per_row = width.div_ceil(8);
        let mut rows = Vec::with_capacity(art.len());
        for (row, line) in art.iter().enumerate() {
            let mut data = vec![0u8; bytes_per_row];
            for (x, ch) in line.chars().enumerate() {
                match ch {
                    'x' | 'X' | '#' => data[x / 8] |= 0x80u8 >> (x % 8),
                    '-' | ' ' | '.' => {}
                    ch => return Err(IncError::InvalidBitmapChar { row, ch }),
                }
            }
            rows.push(data);
        }
        Ok(Self { rows, bytes_per_row })
    }

    /// The "NO OS" sign shown when no operating system could be booted.
    pub fn no_os() -> Result<Self> {
        Self::parse(&[
            "x---x--xxx-----xxx---xxxx",
            "xx--x-x---x---x---x-x----",
            "x-x-x-x---x---x---x--xxx-",
            "x--xx-x---x---x---x-----x",
            "x---x--xxx-----xxx--xxxx-",
        ])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    pub fn width(&self) -> usize {
        self.bytes_per_row * 8
    }

    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.rows.get(y).and_then(|row| row.get(x / 8)).is_some_and(|b| b & (0x80u8 >> (x % 8)) != 0)
    }

    pub fn count_set(&self) -> usize {
        self.rows.iter().flatten().map(|b| b.count_ones() as usize).sum()
    }
}

impl fmt::Display for PackedBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let ch = if self.is_set(x, y) { SET_PIXEL } else { CLEAR_PIXEL };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
