use rayon::prelude::*;

use crate::core::compute::job::ComputeJob;
use crate::core::compute::provider::{
    check_resolution, ComputeProvider, DeviceDescription, DispatchError,
};
use crate::core::data::pixel_buffer::{write_pixel, PixelBuffer};
use crate::core::escape::palette::Palette;
use crate::core::escape::sampler::supersampled_colour;

/// The default compute provider: rows are farmed out to rayon's work-stealing
/// thread pool, each worker writing into its own disjoint row slice of the
/// shared buffer.
#[derive(Debug, Default)]
pub struct RayonProvider;

impl RayonProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ComputeProvider for RayonProvider {
    fn name(&self) -> &str {
        "rayon thread pool"
    }

    fn devices(&self) -> Vec<DeviceDescription> {
        vec![DeviceDescription {
            name: "CPU (rayon work-stealing pool)".to_string(),
            parallel_compute_units: rayon::current_num_threads(),
        }]
    }

    fn dispatch(&self, job: &ComputeJob, buffer: &mut PixelBuffer) -> Result<(), DispatchError> {
        check_resolution(job, buffer)?;

        let palette = Palette::new(job.params.max_iterations());
        let viewport = job.viewport;
        let resolution = job.resolution;
        let params = job.params;
        let row_len = buffer.row_len();

        buffer
            .bytes_mut()
            .par_chunks_exact_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| {
                for x in 0..resolution.width() {
                    let colour = supersampled_colour(
                        viewport, resolution, params, &palette, x, y as u32,
                    );
                    write_pixel(row, x as usize, colour);
                }
            });

        Ok(())
    }
}
