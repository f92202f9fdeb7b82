use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Free-orbit gesture sensitivities.
pub struct ControlOptions {
    /// Degrees of orbit per pixel of pointer drag.
    #[schemars(title = "Rotate Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub rotate_degrees_per_pixel: f32,
    /// World units of track (pan) per pixel of pointer drag.
    #[schemars(title = "Track Sensitivity", range(min = 0.005, max = 0.5), extend("step" = 0.005))]
    pub track_units_per_pixel: f32,
    /// Closest the dolly may bring the camera to the anchor.
    #[schemars(title = "Minimum Dolly Distance", range(min = 0.01, max = 10.0), extend("step" = 0.01))]
    pub min_dolly_distance: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            rotate_degrees_per_pixel: 0.1,
            track_units_per_pixel: 0.05,
            min_dolly_distance: 0.1,
        }
    }
}
