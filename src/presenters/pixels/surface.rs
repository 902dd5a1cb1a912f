use crate::controllers::ports::surface::PresentationSurface;
use crate::core::data::colour::Rgba;
use crate::core::data::pixel_buffer::{PixelBuffer, BYTES_PER_PIXEL};
use crate::core::data::resolution::Resolution;
use crate::core::data::screen::SelectionRect;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

/// Presentation surface backed by a `pixels` framebuffer on a winit window.
///
/// `blit` fills the framebuffer, the overlay primitives draw straight into it
/// and `present` runs the scaling render pass. The window outlives the event
/// loop, so the surface borrows it for `'static`.
pub struct PixelsSurface {
    pixels: Pixels<'static>,
    resolution: Resolution,
}

impl PixelsSurface {
    pub fn new(window: &'static Window, resolution: Resolution) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(resolution.width(), resolution.height(), surface_texture)?;

        Ok(Self { pixels, resolution })
    }

    fn blend_pixel(&mut self, x: u32, y: u32, colour: Rgba) {
        let index = (y as usize * self.resolution.width() as usize + x as usize) * 4;
        let frame = self.pixels.frame_mut();
        blend_into(&mut frame[index..index + 4], colour);
    }
}

impl PresentationSurface for PixelsSurface {
    type Error = pixels::Error;

    fn blit(&mut self, frame: &PixelBuffer) -> Result<(), pixels::Error> {
        let dest = self.pixels.frame_mut();

        for (src, dst) in frame
            .bytes()
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(dest.chunks_exact_mut(4))
        {
            dst[0] = src[0];
            dst[1] = src[1];
            dst[2] = src[2];
            dst[3] = 255;
        }

        Ok(())
    }

    fn fill_rect(&mut self, rect: SelectionRect, colour: Rgba) -> Result<(), pixels::Error> {
        let Some((x0, y0, x1, y1)) = rect_bounds(rect, self.resolution) else {
            return Ok(());
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                self.blend_pixel(x, y, colour);
            }
        }

        Ok(())
    }

    fn outline_rect(&mut self, rect: SelectionRect, colour: Rgba) -> Result<(), pixels::Error> {
        let Some((x0, y0, x1, y1)) = rect_bounds(rect, self.resolution) else {
            return Ok(());
        };

        for x in x0..=x1 {
            self.blend_pixel(x, y0, colour);
            self.blend_pixel(x, y1, colour);
        }
        for y in y0..=y1 {
            self.blend_pixel(x0, y, colour);
            self.blend_pixel(x1, y, colour);
        }

        Ok(())
    }

    fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}

/// Clamps a selection rectangle to the framebuffer and returns inclusive
/// pixel bounds, or `None` when the rectangle lies entirely off-screen.
fn rect_bounds(rect: SelectionRect, resolution: Resolution) -> Option<(u32, u32, u32, u32)> {
    let (min, max) = rect.normalized();

    if max.x < 0.0 || max.y < 0.0 {
        return None;
    }
    if min.x >= resolution.width() as f64 || min.y >= resolution.height() as f64 {
        return None;
    }

    let x0 = min.x.max(0.0) as u32;
    let y0 = min.y.max(0.0) as u32;
    let x1 = (max.x as u32).min(resolution.width() - 1);
    let y1 = (max.y as u32).min(resolution.height() - 1);

    Some((x0, y0, x1, y1))
}

/// Source-over blend of an overlay colour into one RGBA framebuffer pixel.
fn blend_into(dst: &mut [u8], colour: Rgba) {
    let alpha = u32::from(colour.a);
    let inverse = 255 - alpha;

    dst[0] = ((u32::from(colour.r) * alpha + u32::from(dst[0]) * inverse) / 255) as u8;
    dst[1] = ((u32::from(colour.g) * alpha + u32::from(dst[1]) * inverse) / 255) as u8;
    dst[2] = ((u32::from(colour.b) * alpha + u32::from(dst[2]) * inverse) / 255) as u8;
    dst[3] = 255;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::screen::ScreenPoint;

    fn rect(ax: f64, ay: f64, cx: f64, cy: f64) -> SelectionRect {
        SelectionRect {
            anchor: ScreenPoint { x: ax, y: ay },
            current: ScreenPoint { x: cx, y: cy },
        }
    }

    #[test]
    fn test_rect_bounds_clamps_to_framebuffer() {
        let resolution = Resolution::new(100, 100).unwrap();

        assert_eq!(
            rect_bounds(rect(-10.0, 50.0, 150.0, 120.0), resolution),
            Some((0, 50, 99, 99))
        );
    }

    #[test]
    fn test_rect_bounds_normalizes_reversed_corners() {
        let resolution = Resolution::new(100, 100).unwrap();

        assert_eq!(
            rect_bounds(rect(30.0, 40.0, 10.0, 20.0), resolution),
            Some((10, 20, 30, 40))
        );
    }

    #[test]
    fn test_rect_bounds_rejects_off_screen_rect() {
        let resolution = Resolution::new(100, 100).unwrap();

        assert_eq!(rect_bounds(rect(-20.0, -20.0, -1.0, -1.0), resolution), None);
        assert_eq!(
            rect_bounds(rect(100.0, 0.0, 200.0, 50.0), resolution),
            None
        );
    }

    #[test]
    fn test_opaque_blend_replaces_pixel() {
        let mut dst = [10, 20, 30, 255];

        blend_into(
            &mut dst,
            Rgba {
                r: 255,
                g: 0,
                b: 0,
                a: 255,
            },
        );

        assert_eq!(dst, [255, 0, 0, 255]);
    }

    #[test]
    fn test_translucent_blend_mixes_with_background() {
        let mut dst = [0, 0, 0, 255];

        blend_into(
            &mut dst,
            Rgba {
                r: 255,
                g: 0,
                b: 0,
                a: 125,
            },
        );

        // 255 * 125 / 255 = 125
        assert_eq!(dst, [125, 0, 0, 255]);
    }
}
