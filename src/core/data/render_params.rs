use std::error::Error;
use std::fmt;

pub const DEFAULT_MAX_ITERATIONS: u64 = 100;
pub const DEFAULT_SAMPLES_PER_PIXEL: u32 = 1;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderParamsError {
    ZeroMaxIterations,
    ZeroSamplesPerPixel,
}

impl fmt::Display for RenderParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::ZeroSamplesPerPixel => {
                write!(f, "samples per pixel must be greater than zero")
            }
        }
    }
}

impl Error for RenderParamsError {}

/// Iteration cap and supersampling count, both always at least 1.
///
/// The iteration cap grows and shrinks by a tenth of its value plus one, so
/// repeated key presses scale the cap geometrically. The cap is 64 bits wide
/// and the step saturates, so no amount of key presses can wrap it back
/// below the floor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderParams {
    max_iterations: u64,
    samples_per_pixel: u32,
}

impl RenderParams {
    pub fn new(max_iterations: u64, samples_per_pixel: u32) -> Result<Self, RenderParamsError> {
        if max_iterations == 0 {
            return Err(RenderParamsError::ZeroMaxIterations);
        }
        if samples_per_pixel == 0 {
            return Err(RenderParamsError::ZeroSamplesPerPixel);
        }

        Ok(Self {
            max_iterations,
            samples_per_pixel,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    #[must_use]
    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    pub fn increase_iterations(&mut self) {
        self.max_iterations = self
            .max_iterations
            .saturating_add(self.max_iterations / 10 + 1);
    }

    pub fn decrease_iterations(&mut self) {
        if self.max_iterations > 1 {
            self.max_iterations -= self.max_iterations / 10 + 1;
        }
    }

    pub fn increase_samples(&mut self) {
        self.samples_per_pixel += 1;
    }

    pub fn decrease_samples(&mut self) {
        if self.samples_per_pixel > 1 {
            self.samples_per_pixel -= 1;
        }
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            samples_per_pixel: DEFAULT_SAMPLES_PER_PIXEL,
        }
    }
}
