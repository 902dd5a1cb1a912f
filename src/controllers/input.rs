use crate::controllers::events::{InputEvent, KeyAction};
use crate::controllers::ports::event_source::EventSource;
use crate::core::data::render_params::RenderParams;
use crate::core::data::resolution::Resolution;
use crate::core::data::screen::SelectionRect;
use crate::core::data::viewport::Viewport;
use crate::core::util::screen_to_plane::screen_to_plane;
use crate::session::signal::RecomputeSignal;
use crate::session::state::ViewWriter;
use std::sync::Arc;

/// How the transient selection reacts to pointer motion.
///
/// `Tracking`: a zero-size rectangle follows the cursor. `Dragging`: the
/// anchor is pinned and the opposite corner follows. `Frozen`: pointer-up has
/// frozen the rectangle; motion is ignored until the next pointer-down.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum DragState {
    Tracking,
    Dragging,
    Frozen,
}

/// What the commit key will turn into the next viewport.
///
/// A screen rectangle is mapped through the viewport active at commit time,
/// never through a stale copy. The reset key instead stores the default plane
/// rectangle, which commits verbatim.
#[derive(Debug, Copy, Clone, PartialEq)]
enum PendingSelection {
    Screen(SelectionRect),
    Plane(Viewport),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControllerFlow {
    Continue,
    Exit,
}

/// The input role: a state machine over pointer and key events that owns the
/// pending selection and, on commit, replaces the shared viewport and wakes
/// the compute role exactly once.
pub struct InputController<E: EventSource> {
    events: E,
    view: ViewWriter,
    signal: Arc<RecomputeSignal>,
    resolution: Resolution,
    drag: DragState,
    pending: Option<PendingSelection>,
}

impl<E: EventSource> InputController<E> {
    #[must_use]
    pub fn new(
        events: E,
        view: ViewWriter,
        signal: Arc<RecomputeSignal>,
        resolution: Resolution,
    ) -> Self {
        Self {
            events,
            view,
            signal,
            resolution,
            drag: DragState::Tracking,
            pending: None,
        }
    }

    /// Blocks on the event source until a quit event arrives. The caller is
    /// responsible for propagating shutdown afterwards.
    pub fn run(&mut self) {
        loop {
            let event = self.events.next_event();
            if self.handle_event(event) == ControllerFlow::Exit {
                return;
            }
        }
    }

    /// Raises the shared shutdown flag and wakes the compute role so both
    /// peer roles can exit. Called by the supervisor once `run` returns.
    pub fn shutdown(&self) {
        self.view.request_shutdown();
        self.signal.shutdown();
    }

    pub fn handle_event(&mut self, event: InputEvent) -> ControllerFlow {
        match event {
            InputEvent::Quit | InputEvent::Key(KeyAction::Quit) => {
                return ControllerFlow::Exit;
            }
            InputEvent::PointerPressed(point) => {
                self.drag = DragState::Dragging;
                self.view.set_selection(SelectionRect::at(point));
            }
            InputEvent::PointerMoved(point) => match self.drag {
                DragState::Tracking => {
                    self.view.set_selection(SelectionRect::at(point));
                }
                DragState::Dragging => {
                    let mut selection = self.view.selection();
                    selection.current = point;
                    self.view.set_selection(selection);
                }
                DragState::Frozen => {}
            },
            InputEvent::PointerReleased(point) => {
                if self.drag == DragState::Dragging {
                    let mut selection = self.view.selection();
                    selection.current = point;
                    self.view.set_selection(selection);
                    self.pending = Some(PendingSelection::Screen(selection));
                    self.drag = DragState::Frozen;
                }
            }
            InputEvent::Key(KeyAction::IncreaseIterations) => {
                self.view.update_params(RenderParams::increase_iterations);
            }
            InputEvent::Key(KeyAction::DecreaseIterations) => {
                self.view.update_params(RenderParams::decrease_iterations);
            }
            InputEvent::Key(KeyAction::IncreaseSamples) => {
                self.view.update_params(RenderParams::increase_samples);
            }
            InputEvent::Key(KeyAction::DecreaseSamples) => {
                self.view.update_params(RenderParams::decrease_samples);
            }
            InputEvent::Key(KeyAction::ResetSelection) => {
                self.pending = Some(PendingSelection::Plane(Viewport::default_view()));
            }
            InputEvent::Key(KeyAction::CommitSelection) => {
                self.commit();
            }
        }

        ControllerFlow::Continue
    }

    /// Applies the pending selection: replaces the shared viewport, clears
    /// the transient selection and signals one recompute. A degenerate or
    /// absent pending selection makes this a no-op.
    fn commit(&mut self) {
        let settings = self.view.snapshot();

        let viewport = match self.pending {
            None => None,
            Some(PendingSelection::Plane(viewport)) => Some(viewport),
            Some(PendingSelection::Screen(rect)) => {
                let (min, max) = rect.normalized();
                let top_left = screen_to_plane(settings.viewport, self.resolution, min);
                let bottom_right = screen_to_plane(settings.viewport, self.resolution, max);
                Viewport::new(top_left, bottom_right).ok()
            }
        };

        let Some(viewport) = viewport else {
            return;
        };

        self.view.set_viewport(viewport);
        self.view.set_selection(SelectionRect::zero());
        self.drag = DragState::Tracking;
        self.pending = None;
        self.signal.request_recompute();

        let center = viewport.center();
        println!(
            "[{}/{}:{}/{} i = {}, s = {}]",
            center.real,
            center.imag,
            viewport.top_left().real - viewport.bottom_right().real,
            viewport.top_left().imag - viewport.bottom_right().imag,
            settings.params.max_iterations(),
            settings.params.samples_per_pixel(),
        );
    }
}
