use glam::{Mat3, Mat4, Quat, Vec3};

/// Camera placement: a world-space position plus an orthonormal
/// orientation basis (right, up, forward).
///
/// The basis is built in one step by [`CameraPose::look_at`] and is never
/// assigned vector-by-vector, so it stays mutually orthogonal and
/// unit-length by construction. Translation helpers move the position
/// without touching the basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    right: Vec3,
    up: Vec3,
    forward: Vec3,
}

impl CameraPose {
    /// Build a pose at `position` facing `target`, with `up_hint` steering
    /// the roll.
    ///
    /// The basis is derived in one construction: forward toward the target,
    /// right = forward x up_hint, up = right x forward. A degenerate hint
    /// (parallel to the view direction, or zero) falls back to another
    /// world axis rather than producing a collapsed basis.
    #[must_use]
    pub fn look_at(position: Vec3, target: Vec3, up_hint: Vec3) -> Self {
        let forward = (target - position).normalize_or(Vec3::NEG_Z);
        let mut right = forward.cross(up_hint);
        if right.length_squared() < 1e-12 {
            // Hint is (anti)parallel to the view direction; pick whichever
            // world axis is least aligned with it.
            let fallback = if forward.dot(Vec3::Y).abs() < 0.9 {
                Vec3::Y
            } else {
                Vec3::Z
            };
            right = forward.cross(fallback);
        }
        let right = right.normalize();
        let up = right.cross(forward).normalize();
        Self {
            position,
            right,
            up,
            forward,
        }
    }

    /// Unit vector pointing to the camera's right.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit vector pointing up from the camera.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit vector pointing out of the lens.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Move the position by `delta`, keeping the orientation.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Orientation as a rotation quaternion (rotates `-Z` to `forward`,
    /// `Y` to `up`).
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_mat3(&Mat3::from_cols(self.right, self.up, -self.forward))
    }

    /// Build the world-to-view matrix for this pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        // look_at_rh wants a target point; any point along forward works.
        Mat4::look_at_rh(self.position, self.position + self.forward, self.up)
    }
}
