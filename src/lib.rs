// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orbit/follow camera control for interactive 3D viewers.
//!
//! Tumble converts pointer and scroll input into rotation and translation
//! of a viewpoint around a target anchor, the way DCC viewports do it:
//! modifier + primary drag tumbles, modifier + secondary drag tracks, and
//! the scroll wheel dollies. A locked-follow mode pins the camera at a
//! fixed offset from the anchor instead.
//!
//! # Key entry points
//!
//! - [`OrbitCamera`] - the per-frame camera controller
//! - [`InputState`] - accumulates platform events into frame samples
//! - [`Options`] - control sensitivities and follow placement, with TOML
//!   preset support
//!
//! # Frame loop
//!
//! ```
//! use glam::Vec3;
//! use tumble::{CameraMode, InputState, OrbitCamera};
//!
//! let mut input = InputState::new();
//! let mut camera = OrbitCamera::new(Vec3::ZERO, Vec3::new(0.0, 2.0, 8.0));
//!
//! // Each frame: feed events into `input`, then
//! let frame = input.sample();
//! camera.update(CameraMode::Free, &frame);
//! let view = camera.pose().view_matrix();
//! # let _ = view;
//! ```
//!
//! The host owns the mode flag and passes it into every update; the
//! controller holds no hidden global state. With the `viewer` feature,
//! [`input::InputEvent`] gains `from_winit` adapters for winit window
//! events.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;

pub use camera::{CameraMode, CameraPose, OrbitCamera};
pub use error::TumbleError;
pub use input::{FrameInput, InputEvent, InputState, MouseButton};
pub use options::Options;
