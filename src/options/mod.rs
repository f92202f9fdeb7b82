//! Camera control options with TOML preset support.
//!
//! All tweakable settings (gesture sensitivities, follow placement) are
//! consolidated here. Options serialize to/from TOML so hosts can ship
//! control presets; the JSON schema export feeds settings UIs.

mod controls;
mod follow;

use std::path::Path;

pub use controls::ControlOptions;
pub use follow::FollowOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TumbleError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[follow]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Free-orbit gesture sensitivities.
    pub controls: ControlOptions,
    /// Locked-follow placement parameters.
    pub follow: FollowOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TumbleError> {
        let content = std::fs::read_to_string(path).map_err(TumbleError::Io)?;
        toml::from_str(&content)
            .map_err(|e| TumbleError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TumbleError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TumbleError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TumbleError::Io)?;
        }
        std::fs::write(path, content).map_err(TumbleError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[controls]
rotate_degrees_per_pixel = 0.25
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.controls.rotate_degrees_per_pixel, 0.25);
        // Everything else should be default
        assert_eq!(opts.controls.track_units_per_pixel, 0.05);
        assert_eq!(opts.follow.offset, [-1.0, 1.0, 0.0]);
    }

    #[test]
    fn defaults_match_control_constants() {
        let opts = Options::default();
        assert_eq!(opts.controls.rotate_degrees_per_pixel, 0.1);
        assert_eq!(opts.controls.track_units_per_pixel, 0.05);
        assert_eq!(opts.controls.min_dolly_distance, 0.1);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("controls"));
        assert!(props.contains_key("follow"));

        let controls = &props["controls"]["properties"];
        assert!(controls.get("rotate_degrees_per_pixel").is_some());
        assert!(controls.get("track_units_per_pixel").is_some());
        assert!(controls.get("min_dolly_distance").is_some());
    }
}
