//! Error types for icy_inc

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IncError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decoding error: {0}")]
    PngDecoding(#[from] png::DecodingError),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Bitmap row {row} is {actual} bytes wide, expected {expected}")]
    InconsistentRowWidth { row: usize, expected: usize, actual: usize },

    #[error("Invalid bitmap character '{ch}' in row {row}")]
    InvalidBitmapChar { row: usize, ch: char },

    #[error("Bits per pixel must be a non-zero multiple of 8, got {0}")]
    UnalignedBitsPerPixel(u32),

    #[error("Framebuffer offset does not fit into 32 bits")]
    OffsetOverflow,

    #[error("Font sheet width {width} is not a multiple of the cell width {cell_width}")]
    SheetWidthNotAligned { width: u32, cell_width: u32 },

    #[error("Font sheet is {width}x{height}, at least {required_height} lines are needed for {glyphs} glyphs")]
    SheetTooSmall { width: u32, height: u32, required_height: u32, glyphs: u32 },

    #[error("Pixel buffer length mismatch: expected {expected}, got {actual}")]
    PixelBufferSize { expected: usize, actual: usize },

    #[error("Image is too large to decode")]
    ImageTooLarge,

    #[error("Color index must not be zero")]
    ZeroColorIndex,

    #[error("Unsupported PNG bit depth: {0}")]
    UnsupportedBitDepth(u8),
}

pub type Result<T> = std::result::Result<T, IncError>;
