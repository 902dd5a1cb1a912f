use crate::controllers::events::{InputEvent, KeyAction};
use crate::controllers::viewer::Viewer;
use crate::core::compute::rayon_provider::RayonProvider;
use crate::core::data::resolution::Resolution;
use crate::core::data::screen::ScreenPoint;
use crate::input::gui::channel::ChannelEventSource;
use crate::presenters::pixels::surface::PixelsSurface;
use std::sync::mpsc;
use std::thread;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowBuilder};

const WINDOW_WIDTH: u32 = 700;
const WINDOW_HEIGHT: u32 = 700;

/// Opens the window, spawns the viewer and pumps window events into it.
///
/// The viewer's three roles run off the main thread; this thread stays in
/// the window library's event loop, translating raw events and forwarding
/// them over a channel. Closing the window or pressing escape quits.
pub fn run_gui() {
    let event_loop = EventLoop::new().expect("Failed to create event loop");

    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Viewer")
            .with_inner_size(LogicalSize::new(
                f64::from(WINDOW_WIDTH),
                f64::from(WINDOW_HEIGHT),
            ))
            .with_resizable(false)
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let resolution = Resolution::new(WINDOW_WIDTH, WINDOW_HEIGHT)
        .expect("window dimensions are non-zero");
    let surface =
        PixelsSurface::new(window, resolution).expect("Failed to create pixels surface");

    let (sender, receiver) = mpsc::channel();
    let viewer = Viewer::new(
        ChannelEventSource::new(receiver),
        surface,
        RayonProvider::new(),
        resolution,
    );
    let viewer_thread = thread::spawn(move || viewer.run());

    let mut cursor = ScreenPoint { x: 0.0, y: 0.0 };

    event_loop
        .run(move |event, elwt| {
            let Event::WindowEvent { event, .. } = event else {
                return;
            };

            match event {
                WindowEvent::CloseRequested => {
                    let _ = sender.send(InputEvent::Quit);
                    elwt.exit();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = ScreenPoint {
                        x: position.x,
                        y: position.y,
                    };
                    let _ = sender.send(InputEvent::PointerMoved(cursor));
                }
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => {
                    let event = match state {
                        ElementState::Pressed => InputEvent::PointerPressed(cursor),
                        ElementState::Released => InputEvent::PointerReleased(cursor),
                    };
                    let _ = sender.send(event);
                }
                WindowEvent::KeyboardInput {
                    event: key_event, ..
                } if key_event.state == ElementState::Pressed => {
                    if let Some(action) = key_action(&key_event.logical_key) {
                        let _ = sender.send(InputEvent::Key(action));
                        if action == KeyAction::Quit {
                            elwt.exit();
                        }
                    }
                }
                _ => {}
            }
        })
        .expect("event loop failed");

    viewer_thread.join().expect("viewer thread panicked");
}

fn key_action(key: &Key) -> Option<KeyAction> {
    match key {
        Key::Named(NamedKey::ArrowUp) => Some(KeyAction::IncreaseIterations),
        Key::Named(NamedKey::ArrowDown) => Some(KeyAction::DecreaseIterations),
        Key::Named(NamedKey::ArrowRight) => Some(KeyAction::IncreaseSamples),
        Key::Named(NamedKey::ArrowLeft) => Some(KeyAction::DecreaseSamples),
        Key::Named(NamedKey::Enter) => Some(KeyAction::CommitSelection),
        Key::Named(NamedKey::Backspace) => Some(KeyAction::ResetSelection),
        Key::Named(NamedKey::Escape) => Some(KeyAction::Quit),
        _ => None,
    }
}
