use crate::core::data::colour::Rgba;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::screen::SelectionRect;
use std::error::Error;

/// The presentation surface the render role composes into: a raw framebuffer
/// blit plus two overlay primitives and a present/flush.
///
/// `blit` consumes the row-major four-bytes-per-pixel layout documented on
/// [`PixelBuffer`]. Surface failures are fatal to the viewer; there is no
/// degraded presentation mode.
pub trait PresentationSurface {
    type Error: Error + Send + 'static;

    fn blit(&mut self, frame: &PixelBuffer) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, rect: SelectionRect, colour: Rgba) -> Result<(), Self::Error>;

    fn outline_rect(&mut self, rect: SelectionRect, colour: Rgba) -> Result<(), Self::Error>;

    fn present(&mut self) -> Result<(), Self::Error>;
}
