use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::data::screen::ScreenPoint;
use crate::core::data::viewport::Viewport;

/// Linear interpolation from screen space into the viewport's plane
/// rectangle. The same mapping serves whole-pixel selection corners and
/// sub-pixel sample positions; an inverted imaginary axis in the viewport
/// flows through unchanged.
#[must_use]
pub fn screen_to_plane(viewport: Viewport, resolution: Resolution, point: ScreenPoint) -> Complex {
    Complex {
        real: viewport.top_left().real + viewport.width() * point.x / resolution.width() as f64,
        imag: viewport.top_left().imag + viewport.height() * point.y / resolution.height() as f64,
    }
}

/// Inverse of [`screen_to_plane`].
#[must_use]
pub fn plane_to_screen(viewport: Viewport, resolution: Resolution, point: Complex) -> ScreenPoint {
    ScreenPoint {
        x: (point.real - viewport.top_left().real) / viewport.width() * resolution.width() as f64,
        y: (point.imag - viewport.top_left().imag) / viewport.height()
            * resolution.height() as f64,
    }
}
