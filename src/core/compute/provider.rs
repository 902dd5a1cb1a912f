use crate::core::compute::job::ComputeJob;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    ResolutionMismatch {
        job_width: u32,
        job_height: u32,
        buffer_width: u32,
        buffer_height: u32,
    },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResolutionMismatch {
                job_width,
                job_height,
                buffer_width,
                buffer_height,
            } => {
                write!(
                    f,
                    "job resolution {}x{} does not match buffer resolution {}x{}",
                    job_width, job_height, buffer_width, buffer_height
                )
            }
        }
    }
}

impl Error for DispatchError {}

/// One entry of a provider's device listing, printed at startup for
/// diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescription {
    pub name: String,
    pub parallel_compute_units: usize,
}

/// A data-parallel execution facility for the per-pixel escape-time
/// computation. Dispatch is synchronous: when it returns `Ok`, the whole
/// buffer is ready to read.
pub trait ComputeProvider: Send {
    fn name(&self) -> &str;

    fn devices(&self) -> Vec<DeviceDescription>;

    fn dispatch(&self, job: &ComputeJob, buffer: &mut PixelBuffer) -> Result<(), DispatchError>;
}

pub(crate) fn check_resolution(
    job: &ComputeJob,
    buffer: &PixelBuffer,
) -> Result<(), DispatchError> {
    if job.resolution != buffer.resolution() {
        return Err(DispatchError::ResolutionMismatch {
            job_width: job.resolution.width(),
            job_height: job.resolution.height(),
            buffer_width: buffer.resolution().width(),
            buffer_height: buffer.resolution().height(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::render_params::RenderParams;
    use crate::core::data::resolution::Resolution;
    use crate::core::data::viewport::Viewport;

    #[test]
    fn test_check_resolution_rejects_mismatch() {
        let job = ComputeJob {
            viewport: Viewport::default_view(),
            resolution: Resolution::new(8, 8).unwrap(),
            params: RenderParams::default(),
        };
        let buffer = PixelBuffer::new(Resolution::new(4, 8).unwrap());

        assert_eq!(
            check_resolution(&job, &buffer),
            Err(DispatchError::ResolutionMismatch {
                job_width: 8,
                job_height: 8,
                buffer_width: 4,
                buffer_height: 8,
            })
        );
    }

    #[test]
    fn test_check_resolution_accepts_match() {
        let resolution = Resolution::new(8, 8).unwrap();
        let job = ComputeJob {
            viewport: Viewport::default_view(),
            resolution,
            params: RenderParams::default(),
        };
        let buffer = PixelBuffer::new(resolution);

        assert!(check_resolution(&job, &buffer).is_ok());
    }
}
