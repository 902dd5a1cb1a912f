use crate::controllers::compute::ComputeRole;
use crate::controllers::input::InputController;
use crate::controllers::ports::event_source::EventSource;
use crate::controllers::ports::surface::PresentationSurface;
use crate::controllers::render::RenderRole;
use crate::core::compute::provider::ComputeProvider;
use crate::core::data::render_params::RenderParams;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::session::frames::FrameStore;
use crate::session::signal::RecomputeSignal;
use crate::session::state::session;
use std::process;
use std::sync::Arc;
use std::thread;

/// Wires the three roles over a fresh session and runs them to completion.
///
/// Compute and render run on scoped threads; input runs on the calling
/// thread and owns the lifecycle. When the input role exits it raises
/// shutdown, and `run` returns only after both peers have joined. A failing
/// provider or surface terminates the process, matching the viewer's
/// no-degraded-mode policy.
pub struct Viewer<E, S, P> {
    events: E,
    surface: S,
    provider: P,
    resolution: Resolution,
}

impl<E, S, P> Viewer<E, S, P>
where
    E: EventSource,
    S: PresentationSurface + Send,
    P: ComputeProvider,
{
    #[must_use]
    pub fn new(events: E, surface: S, provider: P, resolution: Resolution) -> Self {
        Self {
            events,
            surface,
            provider,
            resolution,
        }
    }

    pub fn run(self) {
        let (writer, reader, overlay) = session(Viewport::default_view(), RenderParams::default());
        let signal = Arc::new(RecomputeSignal::new());
        let frames = Arc::new(FrameStore::new(self.resolution));

        let compute = ComputeRole::new(
            self.provider,
            reader,
            Arc::clone(&frames),
            Arc::clone(&signal),
            self.resolution,
        );
        let mut render = RenderRole::new(self.surface, frames, overlay);
        let mut input = InputController::new(self.events, writer, signal, self.resolution);

        thread::scope(|scope| {
            scope.spawn(move || {
                if let Err(err) = compute.run() {
                    eprintln!("compute failed: {err}");
                    process::exit(1);
                }
            });

            scope.spawn(move || {
                if let Err(err) = render.run() {
                    eprintln!("presentation failed: {err}");
                    process::exit(1);
                }
            });

            input.run();
            input.shutdown();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::events::InputEvent;
    use crate::core::compute::job::ComputeJob;
    use crate::core::compute::provider::{DeviceDescription, DispatchError};
    use crate::core::data::colour::Rgba;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::screen::SelectionRect;
    use std::fmt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Sleeps before quitting so the compute and render roles get at least
    /// one full pass each.
    struct DelayedQuit(Duration);

    impl EventSource for DelayedQuit {
        fn next_event(&mut self) -> InputEvent {
            thread::sleep(self.0);
            InputEvent::Quit
        }
    }

    struct CountingProvider(Arc<AtomicUsize>);

    impl ComputeProvider for CountingProvider {
        fn name(&self) -> &str {
            "counting"
        }

        fn devices(&self) -> Vec<DeviceDescription> {
            Vec::new()
        }

        fn dispatch(
            &self,
            _job: &ComputeJob,
            _buffer: &mut PixelBuffer,
        ) -> Result<(), DispatchError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[derive(Debug)]
    struct NeverFails;

    impl fmt::Display for NeverFails {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "never fails")
        }
    }

    impl std::error::Error for NeverFails {}

    struct CountingSurface(Arc<AtomicUsize>);

    impl PresentationSurface for CountingSurface {
        type Error = NeverFails;

        fn blit(&mut self, _frame: &PixelBuffer) -> Result<(), NeverFails> {
            Ok(())
        }

        fn fill_rect(&mut self, _rect: SelectionRect, _colour: Rgba) -> Result<(), NeverFails> {
            Ok(())
        }

        fn outline_rect(&mut self, _rect: SelectionRect, _colour: Rgba) -> Result<(), NeverFails> {
            Ok(())
        }

        fn present(&mut self) -> Result<(), NeverFails> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_run_joins_all_roles_after_quit() {
        let dispatches = Arc::new(AtomicUsize::new(0));
        let presents = Arc::new(AtomicUsize::new(0));

        let viewer = Viewer::new(
            DelayedQuit(Duration::from_millis(120)),
            CountingSurface(Arc::clone(&presents)),
            CountingProvider(Arc::clone(&dispatches)),
            Resolution::new(8, 8).unwrap(),
        );

        viewer.run();

        // the startup frame was computed and presented at least once before
        // the quit event shut everything down
        assert!(dispatches.load(Ordering::SeqCst) >= 1);
        assert!(presents.load(Ordering::SeqCst) >= 1);
    }

    #[test]
    fn test_immediate_quit_still_terminates() {
        let viewer = Viewer::new(
            DelayedQuit(Duration::ZERO),
            CountingSurface(Arc::new(AtomicUsize::new(0))),
            CountingProvider(Arc::new(AtomicUsize::new(0))),
            Resolution::new(8, 8).unwrap(),
        );

        viewer.run();
    }
}
