use crate::core::data::render_params::RenderParams;
use crate::core::data::screen::SelectionRect;
use crate::core::data::viewport::Viewport;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// The viewport/params pair read together by the compute role.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewSettings {
    pub viewport: Viewport,
    pub params: RenderParams,
}

#[derive(Debug)]
struct Session {
    view: Mutex<ViewSettings>,
    selection: Mutex<SelectionRect>,
    shutdown: AtomicBool,
}

/// Builds the shared session context and splits it into one handle per role.
///
/// The handles enforce the access rules by interface: only the input role's
/// [`ViewWriter`] can mutate the viewport, params or selection; the compute
/// role's [`ViewReader`] takes consistent snapshots; the render role's
/// [`OverlayReader`] sees only the selection and the shutdown flag.
#[must_use]
pub fn session(
    viewport: Viewport,
    params: RenderParams,
) -> (ViewWriter, ViewReader, OverlayReader) {
    let session = Arc::new(Session {
        view: Mutex::new(ViewSettings { viewport, params }),
        selection: Mutex::new(SelectionRect::zero()),
        shutdown: AtomicBool::new(false),
    });

    (
        ViewWriter {
            session: Arc::clone(&session),
        },
        ViewReader {
            session: Arc::clone(&session),
        },
        OverlayReader { session },
    )
}

#[derive(Debug)]
pub struct ViewWriter {
    session: Arc<Session>,
}

impl ViewWriter {
    #[must_use]
    pub fn snapshot(&self) -> ViewSettings {
        *self.session.view.lock().expect("session view lock poisoned")
    }

    pub fn set_viewport(&self, viewport: Viewport) {
        self.session
            .view
            .lock()
            .expect("session view lock poisoned")
            .viewport = viewport;
    }

    pub fn update_params(&self, update: impl FnOnce(&mut RenderParams)) {
        let mut guard = self.session.view.lock().expect("session view lock poisoned");
        update(&mut guard.params);
    }

    #[must_use]
    pub fn selection(&self) -> SelectionRect {
        *self
            .session
            .selection
            .lock()
            .expect("session selection lock poisoned")
    }

    pub fn set_selection(&self, selection: SelectionRect) {
        *self
            .session
            .selection
            .lock()
            .expect("session selection lock poisoned") = selection;
    }

    pub fn request_shutdown(&self) {
        self.session.shutdown.store(true, Ordering::Release);
    }
}

#[derive(Debug)]
pub struct ViewReader {
    session: Arc<Session>,
}

impl ViewReader {
    /// A consistent copy of viewport and params, taken at the start of each
    /// computation so a commit landing mid-flight cannot mix old and new
    /// values.
    #[must_use]
    pub fn snapshot(&self) -> ViewSettings {
        *self.session.view.lock().expect("session view lock poisoned")
    }

    #[must_use]
    pub fn is_shutdown(&self) -> bool {
        self.session.shutdown.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
pub struct OverlayReader {
    session: Arc<Session>,
}

impl OverlayReader {
    #[must_use]
    pub fn selection(&self) -> SelectionRect {
        *self
            .session
            .selection
            .lock()
            .expect("session selection lock poisoned")
    }

    #[must_use]
    pub fn is_shutdown(&self) -> bool {
        self.session.shutdown.load(Ordering::Acquire)
    }
}
