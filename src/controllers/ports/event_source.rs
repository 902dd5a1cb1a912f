use crate::controllers::events::InputEvent;

/// Blocking source of input events. The GUI adapter bridges the window
/// library's event queue through this; tests script it.
pub trait EventSource {
    fn next_event(&mut self) -> InputEvent;
}

/// Replays a fixed sequence of events, then reports quit. Used by tests and
/// kept in the library so downstream benches can drive the controller too.
#[derive(Debug, Default)]
pub struct ScriptedEventSource {
    events: std::collections::VecDeque<InputEvent>,
}

impl ScriptedEventSource {
    #[must_use]
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEventSource {
    fn next_event(&mut self) -> InputEvent {
        self.events.pop_front().unwrap_or(InputEvent::Quit)
    }
}
