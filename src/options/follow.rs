use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Follow", inline)]
#[serde(default)]
/// Locked-follow placement parameters.
pub struct FollowOptions {
    /// Fixed camera offset from the anchor while following, in world units.
    #[schemars(title = "Follow Offset")]
    pub offset: [f32; 3],
}

impl Default for FollowOptions {
    fn default() -> Self {
        Self {
            offset: [-1.0, 1.0, 0.0],
        }
    }
}
