//! Frame-sampled input accumulation.
//!
//! Event-driven platforms deliver edges; the camera controller consumes
//! one snapshot per rendered frame. [`InputState`] sits between the two:
//! feed it every [`InputEvent`] as it arrives, then call
//! [`InputState::sample`] once per frame. Press edges and scroll deltas
//! accumulate until sampled and are cleared by the sample, while held
//! state and the cursor position persist across frames.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};

/// One frame's worth of pointer input, as consumed by
/// [`OrbitCamera::update`](crate::camera::OrbitCamera::update).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Cursor position in physical pixels.
    pub cursor: Vec2,
    /// Whether the manipulation modifier is held.
    pub modifier_held: bool,
    /// Primary button went down since the last sample.
    pub primary_pressed: bool,
    /// Primary button is currently held.
    pub primary_held: bool,
    /// Secondary button went down since the last sample.
    pub secondary_pressed: bool,
    /// Secondary button is currently held.
    pub secondary_held: bool,
    /// Scroll delta accumulated since the last sample.
    pub scroll: Vec2,
}

/// Accumulates raw input events between frames.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    cursor: Vec2,
    modifier_held: bool,
    primary_held: bool,
    secondary_held: bool,
    primary_pressed: bool,
    secondary_pressed: bool,
    scroll: Vec2,
}

impl InputState {
    /// Create an input state with nothing held and the cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw input event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_button(button, pressed);
            }
            InputEvent::Scroll { dx, dy } => {
                self.scroll += Vec2::new(dx, dy);
            }
            InputEvent::ModifiersChanged { alt } => {
                self.modifier_held = alt;
            }
        }
    }

    fn handle_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Primary => {
                if pressed && !self.primary_held {
                    self.primary_pressed = true;
                }
                self.primary_held = pressed;
            }
            MouseButton::Secondary => {
                if pressed && !self.secondary_held {
                    self.secondary_pressed = true;
                }
                self.secondary_held = pressed;
            }
        }
    }

    /// Take this frame's snapshot.
    ///
    /// Press edges and the scroll delta are consumed by the call; cursor
    /// position, held buttons, and the modifier persist.
    pub fn sample(&mut self) -> FrameInput {
        let frame = FrameInput {
            cursor: self.cursor,
            modifier_held: self.modifier_held,
            primary_pressed: self.primary_pressed,
            primary_held: self.primary_held,
            secondary_pressed: self.secondary_pressed,
            secondary_held: self.secondary_held,
            scroll: self.scroll,
        };
        self.primary_pressed = false;
        self.secondary_pressed = false;
        self.scroll = Vec2::ZERO;
        frame
    }
}
