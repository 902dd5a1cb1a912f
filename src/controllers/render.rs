use crate::controllers::ports::surface::PresentationSurface;
use crate::core::data::colour::Rgba;
use crate::session::frames::FrameStore;
use crate::session::state::OverlayReader;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Fixed presentation cadence. The render role never waits for new frames;
/// it re-presents the latest one every tick.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

pub const SELECTION_FILL: Rgba = Rgba {
    r: 255,
    g: 0,
    b: 0,
    a: 125,
};

pub const SELECTION_OUTLINE: Rgba = Rgba {
    r: 255,
    g: 0,
    b: 0,
    a: 255,
};

/// The render role: blits the latest published frame, draws the selection
/// overlay on top and presents, once per tick until shutdown.
pub struct RenderRole<S: PresentationSurface> {
    surface: S,
    frames: Arc<FrameStore>,
    overlay: OverlayReader,
    interval: Duration,
}

impl<S: PresentationSurface> RenderRole<S> {
    #[must_use]
    pub fn new(surface: S, frames: Arc<FrameStore>, overlay: OverlayReader) -> Self {
        Self::with_interval(surface, frames, overlay, FRAME_INTERVAL)
    }

    #[must_use]
    pub fn with_interval(
        surface: S,
        frames: Arc<FrameStore>,
        overlay: OverlayReader,
        interval: Duration,
    ) -> Self {
        Self {
            surface,
            frames,
            overlay,
            interval,
        }
    }

    /// Ticks until the shutdown flag is raised. Shutdown is observed within
    /// one interval. Surface failures are fatal and bubble up to the
    /// supervisor.
    pub fn run(&mut self) -> Result<(), S::Error> {
        while !self.overlay.is_shutdown() {
            self.tick()?;
            thread::sleep(self.interval);
        }

        Ok(())
    }

    /// One presentation pass: frame, then overlay, then present. An empty
    /// selection draws no overlay at all.
    pub fn tick(&mut self) -> Result<(), S::Error> {
        let frame = self.frames.latest();
        self.surface.blit(&frame)?;

        let selection = self.overlay.selection();
        if !selection.is_empty() {
            self.surface.fill_rect(selection, SELECTION_FILL)?;
            self.surface.outline_rect(selection, SELECTION_OUTLINE)?;
        }

        self.surface.present()
    }
}
