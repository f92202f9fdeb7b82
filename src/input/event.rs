/// Platform-agnostic input events.
///
/// These are fed into an [`InputState`](super::InputState) which
/// accumulates them into per-frame [`FrameInput`](super::FrameInput)
/// samples for the camera controller.
///
/// # Example
///
/// ```
/// use tumble::input::{InputEvent, InputState, MouseButton};
///
/// let mut state = InputState::new();
/// state.handle_event(InputEvent::ModifiersChanged { alt: true });
/// state.handle_event(InputEvent::MouseButton {
///     button: MouseButton::Primary,
///     pressed: true,
/// });
/// let frame = state.sample();
/// assert!(frame.modifier_held && frame.primary_pressed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel delta (vertical component drives the dolly).
    Scroll {
        /// Horizontal scroll amount.
        dx: f32,
        /// Vertical scroll amount (positive = toward the anchor).
        dy: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the manipulation modifier (Alt) is held.
        alt: bool,
    },
}

/// Platform-agnostic mouse button identifier.
///
/// Only the two buttons the camera distinguishes are represented; anything
/// else a platform reports is ignored upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) button, used for orbit gestures.
    Primary,
    /// Secondary (right) button, used for track gestures.
    Secondary,
}

#[cfg(feature = "viewer")]
impl MouseButton {
    /// Map a winit button to the camera's vocabulary, if it participates.
    #[must_use]
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Primary),
            winit::event::MouseButton::Right => Some(Self::Secondary),
            _ => None,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Translate a winit window event into an [`InputEvent`], if relevant.
    ///
    /// Pixel-based scroll deltas are scaled down so trackpads and mouse
    /// wheels land in a comparable range.
    #[must_use]
    pub fn from_winit(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => Some(Self::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::MouseInput { button, state, .. } => {
                MouseButton::from_winit(*button).map(|button| Self::MouseButton {
                    button,
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let (dx, dy) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (*x, *y),
                    MouseScrollDelta::PixelDelta(pos) => {
                        (pos.x as f32 * 0.01, pos.y as f32 * 0.01)
                    }
                };
                Some(Self::Scroll { dx, dy })
            }
            WindowEvent::ModifiersChanged(modifiers) => Some(Self::ModifiersChanged {
                alt: modifiers.state().alt_key(),
            }),
            _ => None,
        }
    }
}
