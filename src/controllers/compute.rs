use crate::core::compute::job::ComputeJob;
use crate::core::compute::provider::{ComputeProvider, DispatchError};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::resolution::Resolution;
use crate::session::frames::FrameStore;
use crate::session::signal::{RecomputeSignal, WakeReason};
use crate::session::state::ViewReader;
use std::sync::Arc;

/// The compute role: renders one frame at startup, then sleeps on the wake
/// signal and re-renders whenever a commit lands. Each frame is built into a
/// fresh buffer and published whole.
pub struct ComputeRole<P: ComputeProvider> {
    provider: P,
    view: ViewReader,
    frames: Arc<FrameStore>,
    signal: Arc<RecomputeSignal>,
    resolution: Resolution,
}

impl<P: ComputeProvider> ComputeRole<P> {
    #[must_use]
    pub fn new(
        provider: P,
        view: ViewReader,
        frames: Arc<FrameStore>,
        signal: Arc<RecomputeSignal>,
        resolution: Resolution,
    ) -> Self {
        Self {
            provider,
            view,
            frames,
            signal,
            resolution,
        }
    }

    /// Compute, publish, wait, repeat. Returns on shutdown, which wins over
    /// any pending recompute. Dispatch failures are fatal and bubble up to
    /// the supervisor.
    pub fn run(&self) -> Result<(), DispatchError> {
        // a viewer quitting before startup skips the first frame entirely
        if self.signal.is_shutdown() {
            return Ok(());
        }
        self.compute_once()?;

        loop {
            match self.signal.wait() {
                WakeReason::Shutdown => return Ok(()),
                WakeReason::Recompute => self.compute_once()?,
            }
        }
    }

    fn compute_once(&self) -> Result<(), DispatchError> {
        let settings = self.view.snapshot();
        let job = ComputeJob {
            viewport: settings.viewport,
            resolution: self.resolution,
            params: settings.params,
        };

        let mut frame = PixelBuffer::new(self.resolution);
        self.provider.dispatch(&job, &mut frame)?;
        self.frames.publish(frame);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compute::provider::DeviceDescription;
    use crate::core::data::colour::Colour;
    use crate::core::data::render_params::RenderParams;
    use crate::core::data::viewport::Viewport;
    use crate::session::state::session;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    /// Counts dispatches and paints a solid marker colour.
    struct CountingProvider {
        dispatches: Arc<AtomicUsize>,
    }

    impl ComputeProvider for CountingProvider {
        fn name(&self) -> &str {
            "counting"
        }

        fn devices(&self) -> Vec<DeviceDescription> {
            Vec::new()
        }

        fn dispatch(
            &self,
            job: &ComputeJob,
            buffer: &mut PixelBuffer,
        ) -> Result<(), DispatchError> {
            self.dispatches.fetch_add(1, Ordering::SeqCst);
            for y in 0..job.resolution.height() {
                for x in 0..job.resolution.width() {
                    buffer
                        .set_pixel(x, y, Colour { r: 7, g: 7, b: 7 })
                        .unwrap();
                }
            }
            Ok(())
        }
    }

    struct Fixture {
        role: ComputeRole<CountingProvider>,
        frames: Arc<FrameStore>,
        signal: Arc<RecomputeSignal>,
        dispatches: Arc<AtomicUsize>,
    }

    fn fixture() -> Fixture {
        let resolution = Resolution::new(8, 8).unwrap();
        let (_writer, reader, _overlay) =
            session(Viewport::default_view(), RenderParams::default());
        let frames = Arc::new(FrameStore::new(resolution));
        let signal = Arc::new(RecomputeSignal::new());
        let dispatches = Arc::new(AtomicUsize::new(0));

        let role = ComputeRole::new(
            CountingProvider {
                dispatches: Arc::clone(&dispatches),
            },
            reader,
            Arc::clone(&frames),
            Arc::clone(&signal),
            resolution,
        );

        Fixture {
            role,
            frames,
            signal,
            dispatches,
        }
    }

    #[test]
    fn test_startup_frame_computed_without_a_request() {
        let f = fixture();
        let signal = Arc::clone(&f.signal);
        let dispatches = Arc::clone(&f.dispatches);
        let frames = Arc::clone(&f.frames);

        let handle = thread::spawn(move || f.role.run());
        // let the startup frame land, then stop
        while dispatches.load(Ordering::SeqCst) == 0 {
            thread::sleep(Duration::from_millis(1));
        }
        signal.shutdown();
        handle.join().unwrap().unwrap();

        assert_eq!(dispatches.load(Ordering::SeqCst), 1);
        assert_eq!(
            frames.latest().pixel(0, 0).unwrap(),
            Colour { r: 7, g: 7, b: 7 }
        );
    }

    #[test]
    fn test_shutdown_before_startup_skips_first_frame() {
        let f = fixture();

        f.signal.shutdown();
        f.role.run().unwrap();

        assert_eq!(f.dispatches.load(Ordering::SeqCst), 0);
        // frame store still holds the initial black frame
        assert!(f.frames.latest().bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_recompute_requests_trigger_additional_frames() {
        let f = fixture();
        let signal = Arc::clone(&f.signal);
        let dispatches = Arc::clone(&f.dispatches);

        let handle = thread::spawn(move || f.role.run());

        while dispatches.load(Ordering::SeqCst) < 1 {
            thread::sleep(Duration::from_millis(1));
        }
        signal.request_recompute();
        while dispatches.load(Ordering::SeqCst) < 2 {
            thread::sleep(Duration::from_millis(1));
        }

        signal.shutdown();
        handle.join().unwrap().unwrap();

        assert_eq!(dispatches.load(Ordering::SeqCst), 2);
    }

    struct ViewportRecordingProvider {
        seen: Arc<std::sync::Mutex<Vec<Viewport>>>,
    }

    impl ComputeProvider for ViewportRecordingProvider {
        fn name(&self) -> &str {
            "viewport recording"
        }

        fn devices(&self) -> Vec<DeviceDescription> {
            Vec::new()
        }

        fn dispatch(
            &self,
            job: &ComputeJob,
            _buffer: &mut PixelBuffer,
        ) -> Result<(), DispatchError> {
            self.seen.lock().unwrap().push(job.viewport);
            Ok(())
        }
    }

    #[test]
    fn test_recompute_snapshots_the_committed_viewport() {
        let resolution = Resolution::new(8, 8).unwrap();
        let (writer, reader, _overlay) =
            session(Viewport::default_view(), RenderParams::default());
        let signal = Arc::new(RecomputeSignal::new());
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));

        let role = ComputeRole::new(
            ViewportRecordingProvider {
                seen: Arc::clone(&seen),
            },
            reader,
            Arc::new(FrameStore::new(resolution)),
            Arc::clone(&signal),
            resolution,
        );

        let zoomed = Viewport::new(
            crate::core::data::complex::Complex {
                real: -2.0,
                imag: 2.0,
            },
            crate::core::data::complex::Complex::ZERO,
        )
        .unwrap();

        let handle = thread::spawn(move || role.run());
        while seen.lock().unwrap().is_empty() {
            thread::sleep(Duration::from_millis(1));
        }

        writer.set_viewport(zoomed);
        signal.request_recompute();
        while seen.lock().unwrap().len() < 2 {
            thread::sleep(Duration::from_millis(1));
        }

        signal.shutdown();
        handle.join().unwrap().unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0], Viewport::default_view());
        assert_eq!(seen[1], zoomed);
    }

    struct FailingProvider;

    impl ComputeProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        fn devices(&self) -> Vec<DeviceDescription> {
            Vec::new()
        }

        fn dispatch(
            &self,
            job: &ComputeJob,
            _buffer: &mut PixelBuffer,
        ) -> Result<(), DispatchError> {
            Err(DispatchError::ResolutionMismatch {
                job_width: job.resolution.width(),
                job_height: job.resolution.height(),
                buffer_width: 0,
                buffer_height: 0,
            })
        }
    }

    #[test]
    fn test_dispatch_failure_is_returned_to_the_supervisor() {
        let resolution = Resolution::new(4, 4).unwrap();
        let (_writer, reader, _overlay) =
            session(Viewport::default_view(), RenderParams::default());
        let role = ComputeRole::new(
            FailingProvider,
            reader,
            Arc::new(FrameStore::new(resolution)),
            Arc::new(RecomputeSignal::new()),
            resolution,
        );

        assert!(role.run().is_err());
    }
}
