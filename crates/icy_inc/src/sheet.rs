use std::io::Cursor;
use std::path::Path;

use crate::{IncError, Result};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Read access to a grid of pixel values. Zero is the background.
pub trait PixelSource {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn get_pixel(&self, x: u32, y: u32) -> u8;
}

/// A decoded font sheet, one byte per pixel.
///
/// Indexed PNGs keep their palette indices, every other image is converted to 8 bit luma.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontSheet {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FontSheet {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(IncError::PixelBufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { width, height, pixels })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        let sheet = Self::from_bytes(&data)?;
        log::info!("loaded font sheet {} ({}x{})", path.display(), sheet.width, sheet.height);
        Ok(sheet)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.starts_with(PNG_SIGNATURE) {
            if let Some(sheet) = Self::read_indexed_png(data)? {
                return Ok(sheet);
            }
        }
        let img = image::load_from_memory(data)?.to_luma8();
        let (width, height) = img.dimensions();
        log::debug!("decoded {width}x{height} image as luma");
        Self::new(width, height, img.into_raw())
    }

    /// Returns `None` if the png isn't palette based.
    fn read_indexed_png(data: &[u8]) -> Result<Option<Self>> {
        let mut decoder = png::Decoder::new(Cursor::new(data));
        decoder.set_transformations(png::Transformations::IDENTITY);
        let mut reader = decoder.read_info()?;
        if reader.info().color_type != png::ColorType::Indexed {
            return Ok(None);
        }

        let buffer_size = reader.output_buffer_size().ok_or(IncError::ImageTooLarge)?;
        let mut buf = vec![0; buffer_size];
        let frame = reader.next_frame(&mut buf)?;

        let depth = frame.bit_depth as u8;
        if !matches!(depth, 1 | 2 | 4 | 8) {
            return Err(IncError::UnsupportedBitDepth(depth));
        }
        let depth = depth as usize;
        let mask = ((1u16 << depth) - 1) as u8;

        let mut pixels = Vec::with_capacity(frame.width as usize * frame.height as usize);
        for line in buf.chunks(frame.line_size).take(frame.height as usize) {
            for x in 0..frame.width as usize {
                let bit = x * depth;
                let shift = 8 - depth - bit % 8;
                pixels.push((line[bit / 8] >> shift) & mask);
            }
        }
        log::debug!("decoded {}x{} indexed png with {depth} bit depth", frame.width, frame.height);
        Self::new(frame.width, frame.height, pixels).map(Some)
    }
}

impl PixelSource for FontSheet {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get_pixel(&self, x: u32, y: u32) -> u8 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}
