use crate::core::data::screen::ScreenPoint;

/// The seven logical key actions the viewer understands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyAction {
    IncreaseIterations,
    DecreaseIterations,
    IncreaseSamples,
    DecreaseSamples,
    CommitSelection,
    ResetSelection,
    Quit,
}

/// One input event, already translated out of the windowing library's own
/// event type.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Quit,
    Key(KeyAction),
    PointerPressed(ScreenPoint),
    PointerReleased(ScreenPoint),
    PointerMoved(ScreenPoint),
}
