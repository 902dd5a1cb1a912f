use crate::core::data::colour::Colour;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

/// Serialization contract with the presentation surface: row-major, four
/// bytes per pixel (red, green, blue, one padding byte). The padding keeps
/// each pixel 32 bits wide for the surface's pixel format.
pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        x: u32,
        y: u32,
        resolution: Resolution,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { x, y, resolution } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    x,
                    y,
                    resolution.width(),
                    resolution.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    resolution: Resolution,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            bytes: vec![0; resolution.pixel_count() * BYTES_PER_PIXEL],
        }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Bytes of one row, in the four-bytes-per-pixel layout.
    #[must_use]
    pub fn row_len(&self) -> usize {
        self.resolution.width() as usize * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.pixel_index(x, y)?;

        self.bytes[index] = colour.r;
        self.bytes[index + 1] = colour.g;
        self.bytes[index + 2] = colour.b;

        Ok(())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Colour, PixelBufferError> {
        let index = self.pixel_index(x, y)?;

        Ok(Colour {
            r: self.bytes[index],
            g: self.bytes[index + 1],
            b: self.bytes[index + 2],
        })
    }

    fn pixel_index(&self, x: u32, y: u32) -> Result<usize, PixelBufferError> {
        if x >= self.resolution.width() || y >= self.resolution.height() {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                resolution: self.resolution,
            });
        }

        Ok((y as usize * self.resolution.width() as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

/// Writes a colour into one pixel slot of a raw row slice. Shared by the
/// parallel providers, which hand out disjoint row slices to their workers.
pub fn write_pixel(row: &mut [u8], x: usize, colour: Colour) {
    let index = x * BYTES_PER_PIXEL;

    row[index] = colour.r;
    row[index + 1] = colour.g;
    row[index + 2] = colour.b;
}
