mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod session;

pub use controllers::compute::ComputeRole;
pub use controllers::events::{InputEvent, KeyAction};
pub use controllers::input::{ControllerFlow, InputController};
pub use controllers::ports::event_source::{EventSource, ScriptedEventSource};
pub use controllers::ports::surface::PresentationSurface;
pub use controllers::render::{RenderRole, FRAME_INTERVAL};
pub use controllers::viewer::Viewer;
pub use core::compute::banded_provider::BandedProvider;
pub use core::compute::job::ComputeJob;
pub use core::compute::provider::{ComputeProvider, DeviceDescription, DispatchError};
pub use core::compute::rayon_provider::RayonProvider;
pub use core::data::colour::{Colour, Rgba};
pub use core::data::complex::Complex;
pub use core::data::pixel_buffer::{PixelBuffer, BYTES_PER_PIXEL};
pub use core::data::render_params::RenderParams;
pub use core::data::resolution::Resolution;
pub use core::data::screen::{ScreenPoint, SelectionRect};
pub use core::data::viewport::Viewport;
pub use presenters::ppm::write_ppm;
pub use session::frames::FrameStore;
pub use session::signal::{RecomputeSignal, WakeReason};
pub use session::state::{session, OverlayReader, ViewReader, ViewWriter};

#[cfg(feature = "gui")]
pub use input::gui::app::run_gui;
#[cfg(feature = "gui")]
pub use presenters::pixels::surface::PixelsSurface;
