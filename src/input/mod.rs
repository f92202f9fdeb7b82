//! Input handling: platform-agnostic event types and the frame-sampled
//! accumulator that feeds the camera controller.

/// Platform-agnostic input events (with winit conversions behind the
/// `viewer` feature).
pub mod event;
/// Accumulates events into per-frame input samples.
pub mod state;

pub use event::{InputEvent, MouseButton};
pub use state::{FrameInput, InputState};
