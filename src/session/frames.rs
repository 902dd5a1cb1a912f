use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::resolution::Resolution;
use std::sync::{Arc, Mutex};

/// Hand-off point between the compute and render roles.
///
/// The compute role builds each frame into a fresh buffer and publishes it
/// with an `Arc` swap under a short lock; the render role clones the `Arc`
/// each tick. The render role therefore always sees a complete frame, never
/// a torn one.
#[derive(Debug)]
pub struct FrameStore {
    latest: Mutex<Arc<PixelBuffer>>,
}

impl FrameStore {
    /// Starts with a zeroed (black) frame so the render role has something to
    /// present before the first computation finishes.
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            latest: Mutex::new(Arc::new(PixelBuffer::new(resolution))),
        }
    }

    pub fn publish(&self, frame: PixelBuffer) {
        *self.latest.lock().expect("frame store lock poisoned") = Arc::new(frame);
    }

    #[must_use]
    pub fn latest(&self) -> Arc<PixelBuffer> {
        Arc::clone(&self.latest.lock().expect("frame store lock poisoned"))
    }
}
