use std::num::NonZeroUsize;
use std::thread;

use crate::core::compute::job::ComputeJob;
use crate::core::compute::provider::{
    check_resolution, ComputeProvider, DeviceDescription, DispatchError,
};
use crate::core::data::pixel_buffer::{write_pixel, PixelBuffer};
use crate::core::escape::palette::Palette;
use crate::core::escape::sampler::supersampled_colour;

/// Alternative CPU provider: splits the image into horizontal bands, one
/// scoped thread per band. The last band absorbs any remainder rows.
///
/// Produces byte-identical output to [`RayonProvider`], which the tests rely
/// on; it exists so the engine keeps a second, dependency-free dispatch path.
///
/// [`RayonProvider`]: crate::core::compute::rayon_provider::RayonProvider
#[derive(Debug)]
pub struct BandedProvider {
    max_bands: NonZeroUsize,
}

impl BandedProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_bands: thread::available_parallelism().unwrap_or(NonZeroUsize::MIN),
        }
    }

    #[must_use]
    pub fn with_max_bands(max_bands: NonZeroUsize) -> Self {
        Self { max_bands }
    }

    fn bands_for_height(&self, height: u32) -> usize {
        self.max_bands.get().min(height as usize)
    }
}

impl Default for BandedProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputeProvider for BandedProvider {
    fn name(&self) -> &str {
        "banded scoped threads"
    }

    fn devices(&self) -> Vec<DeviceDescription> {
        vec![DeviceDescription {
            name: "CPU (banded scoped threads)".to_string(),
            parallel_compute_units: self.max_bands.get(),
        }]
    }

    fn dispatch(&self, job: &ComputeJob, buffer: &mut PixelBuffer) -> Result<(), DispatchError> {
        check_resolution(job, buffer)?;

        let palette = Palette::new(job.params.max_iterations());
        let viewport = job.viewport;
        let resolution = job.resolution;
        let params = job.params;

        let height = resolution.height() as usize;
        let bands = self.bands_for_height(resolution.height());
        let band_height = height / bands;
        let row_len = buffer.row_len();

        let mut rest = buffer.bytes_mut();
        let mut band_top = 0usize;

        thread::scope(|scope| {
            for band in 0..bands {
                let rows = if band == bands - 1 {
                    height - band_top
                } else {
                    band_height
                };

                let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(rows * row_len);
                rest = tail;

                let y_offset = band_top;
                scope.spawn(move || {
                    for (i, row) in chunk.chunks_exact_mut(row_len).enumerate() {
                        let y = (y_offset + i) as u32;
                        for x in 0..resolution.width() {
                            let colour = supersampled_colour(
                                viewport, resolution, params, &palette, x, y,
                            );
                            write_pixel(row, x as usize, colour);
                        }
                    }
                });

                band_top += rows;
            }
        });

        Ok(())
    }
}
