use crate::{IncError, Result};

/// Placement of a bitmap inside a linear framebuffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramebufferGeometry {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u32,
    pub origin_x: u32,
    pub origin_y: u32,

    /// How many framebuffer lines each bitmap row is drawn on.
    pub scanlines_per_row: u32,
}

impl FramebufferGeometry {
    pub fn new(width: u32, height: u32, bits_per_pixel: u32, origin_x: u32, origin_y: u32) -> Result<Self> {
        let geometry = Self {
            width,
            height,
            bits_per_pixel,
            origin_x,
            origin_y,
            scanlines_per_row: 1,
        };
        geometry.bytes_per_pixel()?;
        Ok(geometry)
    }

    /// 640x480 at 16 bpp with the sign roughly centered.
    pub fn no_os_sign() -> Self {
        Self {
            width: 640,
            height: 480,
            bits_per_pixel: 16,
            origin_x: 275,
            origin_y: 220,
            scanlines_per_row: 1,
        }
    }

    pub fn with_scanlines_per_row(mut self, scanlines: u32) -> Self {
        self.scanlines_per_row = scanlines;
        self
    }

    pub fn bytes_per_pixel(&self) -> Result<u32> {
        if self.bits_per_pixel == 0 || self.bits_per_pixel % 8 != 0 {
            return Err(IncError::UnalignedBitsPerPixel(self.bits_per_pixel));
        }
        Ok(self.bits_per_pixel / 8)
    }

    /// Number of bytes between two framebuffer lines.
    pub fn stride(&self) -> Result<u32> {
        let stride = self.width as u64 * self.bytes_per_pixel()? as u64;
        u32::try_from(stride).map_err(|_| IncError::OffsetOverflow)
    }

    /// Byte offset of the origin from the start of the framebuffer.
    pub fn origin_offset(&self) -> Result<u32> {
        let bpp = self.bytes_per_pixel()? as u64;
        let offset = self.origin_y as u64 * self.width as u64 * bpp + self.origin_x as u64 * bpp;
        u32::try_from(offset).map_err(|_| IncError::OffsetOverflow)
    }
}
