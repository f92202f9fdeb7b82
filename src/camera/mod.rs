//! Camera system: pose representation and the orbit/follow controller.

/// Orbit/follow camera controller and mode flag.
pub mod controller;
/// Camera pose: position plus orthonormal orientation basis.
pub mod core;

pub use controller::{CameraMode, OrbitCamera};
pub use core::CameraPose;
