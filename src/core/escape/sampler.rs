use crate::core::data::colour::Colour;
use crate::core::data::render_params::RenderParams;
use crate::core::data::resolution::Resolution;
use crate::core::data::screen::ScreenPoint;
use crate::core::data::viewport::Viewport;
use crate::core::escape::algorithm::escape_time;
use crate::core::escape::palette::Palette;
use crate::core::util::screen_to_plane::screen_to_plane;

/// Computes the anti-aliased colour of one pixel.
///
/// Sub-samples sit on the pixel diagonal at offsets `(k + 0.5) / samples`,
/// which degenerates to the pixel center for a single sample. The pattern is
/// fixed, so identical inputs always produce identical colours. Channel
/// averages are rounded to the nearest integer.
#[must_use]
pub fn supersampled_colour(
    viewport: Viewport,
    resolution: Resolution,
    params: RenderParams,
    palette: &Palette,
    x: u32,
    y: u32,
) -> Colour {
    let samples = params.samples_per_pixel();
    let mut sums = [0u64; 3];

    for k in 0..samples {
        let offset = (k as f64 + 0.5) / samples as f64;
        let point = ScreenPoint {
            x: x as f64 + offset,
            y: y as f64 + offset,
        };

        let c = screen_to_plane(viewport, resolution, point);
        let colour = palette.colour(escape_time(c, params.max_iterations()));

        sums[0] += u64::from(colour.r);
        sums[1] += u64::from(colour.g);
        sums[2] += u64::from(colour.b);
    }

    let samples = u64::from(samples);
    let half = samples / 2;

    Colour {
        r: ((sums[0] + half) / samples) as u8,
        g: ((sums[1] + half) / samples) as u8,
        b: ((sums[2] + half) / samples) as u8,
    }
}
