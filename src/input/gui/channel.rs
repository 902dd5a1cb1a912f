use crate::controllers::events::InputEvent;
use crate::controllers::ports::event_source::EventSource;
use std::sync::mpsc;

/// Feeds the input role from the window event loop. The loop sends
/// translated events through the channel; a disconnected sender reads as
/// quit, so a crashed event loop still shuts the viewer down.
pub struct ChannelEventSource {
    receiver: mpsc::Receiver<InputEvent>,
}

impl ChannelEventSource {
    #[must_use]
    pub fn new(receiver: mpsc::Receiver<InputEvent>) -> Self {
        Self { receiver }
    }
}

impl EventSource for ChannelEventSource {
    fn next_event(&mut self) -> InputEvent {
        self.receiver.recv().unwrap_or(InputEvent::Quit)
    }
}
