use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "viewport must have positive width and non-zero height: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangular region of the complex plane mapped onto the pixel grid.
///
/// The imaginary axis may be inverted (top-left imag larger than bottom-right
/// imag) so that screen y growing downward matches plane y growing upward.
/// `height()` is therefore signed; `width()` is always positive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    top_left: Complex,
    bottom_right: Complex,
}

impl Viewport {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ViewportError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        if width <= 0.0 || height == 0.0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// The startup view `(-2, 2)` to `(2, -2)`.
    #[must_use]
    pub fn default_view() -> Self {
        Self {
            top_left: Complex {
                real: -2.0,
                imag: 2.0,
            },
            bottom_right: Complex {
                real: 2.0,
                imag: -2.0,
            },
        }
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    /// Signed height: negative when the imaginary axis is inverted.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.top_left.real + self.bottom_right.real) / 2.0,
            imag: (self.top_left.imag + self.bottom_right.imag) / 2.0,
        }
    }
}
