use std::sync::{Condvar, Mutex};

/// Why a waiting compute role was woken.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WakeReason {
    Recompute,
    Shutdown,
}

#[derive(Debug, Default)]
struct SignalState {
    pending: bool,
    shutdown: bool,
}

/// Single-slot wake channel between the input and compute roles.
///
/// Commits set a `pending` bit; multiple commits between wakes coalesce into
/// a single recompute. Shutdown latches permanently and wins over any pending
/// recompute, so a quitting viewer never starts another computation.
#[derive(Debug, Default)]
pub struct RecomputeSignal {
    state: Mutex<SignalState>,
    wake: Condvar,
}

impl RecomputeSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_recompute(&self) {
        let mut state = self.state.lock().expect("signal lock poisoned");
        state.pending = true;
        drop(state);

        self.wake.notify_one();
    }

    pub fn shutdown(&self) {
        let mut state = self.state.lock().expect("signal lock poisoned");
        state.shutdown = true;
        drop(state);

        self.wake.notify_all();
    }

    /// Blocks until a recompute is requested or shutdown latches. Consumes
    /// the pending bit; never consumes shutdown.
    #[must_use]
    pub fn wait(&self) -> WakeReason {
        let mut state = self.state.lock().expect("signal lock poisoned");

        loop {
            if state.shutdown {
                return WakeReason::Shutdown;
            }
            if state.pending {
                state.pending = false;
                return WakeReason::Recompute;
            }

            state = self.wake.wait(state).expect("signal lock poisoned");
        }
    }

    /// Non-blocking check used before the startup computation.
    #[must_use]
    pub fn is_shutdown(&self) -> bool {
        self.state.lock().expect("signal lock poisoned").shutdown
    }
}
