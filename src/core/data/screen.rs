/// A position in screen space. Stored as `f64` so sub-pixel sample offsets
/// can reuse the same mapping as whole-pixel coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// The transient rubber-band rectangle between the drag anchor and the
/// current cursor position.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SelectionRect {
    pub anchor: ScreenPoint,
    pub current: ScreenPoint,
}

impl SelectionRect {
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn at(point: ScreenPoint) -> Self {
        Self {
            anchor: point,
            current: point,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchor.x == self.current.x || self.anchor.y == self.current.y
    }

    /// Corners sorted so the first is the top-left in screen space. Keeps the
    /// mapped viewport's real axis ordered even for right-to-left drags.
    #[must_use]
    pub fn normalized(&self) -> (ScreenPoint, ScreenPoint) {
        let min = ScreenPoint {
            x: self.anchor.x.min(self.current.x),
            y: self.anchor.y.min(self.current.y),
        };
        let max = ScreenPoint {
            x: self.anchor.x.max(self.current.x),
            y: self.anchor.y.max(self.current.y),
        };

        (min, max)
    }
}
