use glam::{Quat, Vec2, Vec3};

use crate::camera::core::CameraPose;
use crate::input::FrameInput;
use crate::options::Options;

/// Candidate positions whose direction from the anchor gets this close to
/// world-up (in absolute dot product) are rejected; the orbit would pass
/// through the vertical singularity where roll becomes ill-defined.
const POLE_LIMIT: f32 = 0.985;

/// Which control scheme drives the camera this frame.
///
/// The flag is owned by the host (UI state, gameplay logic) and passed
/// into [`OrbitCamera::update`] every frame; the controller keeps no
/// transition logic of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Locked follow: anchor position plus a fixed offset, always facing
    /// the anchor. Consumes no input.
    #[default]
    Follow,
    /// Free orbit: pointer gestures orbit, track, and dolly the camera
    /// around the anchor.
    Free,
}

/// Orbit/follow camera controller.
///
/// Owns the look-at anchor and the camera pose. Call
/// [`update`](Self::update) once per rendered frame with the mode flag and
/// that frame's [`FrameInput`] sample; read the result back through
/// [`pose`](Self::pose).
///
/// Gestures follow the usual DCC convention: with the modifier held, a
/// primary-button drag tumbles the camera about the anchor, a
/// secondary-button drag tracks camera and anchor together, and the scroll
/// wheel dollies along the view offset.
pub struct OrbitCamera {
    anchor: Vec3,
    pose: CameraPose,

    follow_offset: Vec3,
    rotate_degrees_per_pixel: f32,
    track_units_per_pixel: f32,
    min_dolly_distance: f32,

    /// Reference pointer position while a drag gesture is active.
    drag_origin: Option<Vec2>,
}

impl OrbitCamera {
    /// Create a controller bound to `anchor`, with the camera at
    /// `position`, using default options.
    ///
    /// The anchor is a constructor argument on purpose: there is no
    /// unbound state and no lazy lookup, so every later update has a
    /// valid target.
    #[must_use]
    pub fn new(anchor: Vec3, position: Vec3) -> Self {
        Self::with_options(anchor, position, &Options::default())
    }

    /// Create a controller with explicit options.
    #[must_use]
    pub fn with_options(anchor: Vec3, position: Vec3, options: &Options) -> Self {
        Self {
            anchor,
            pose: CameraPose::look_at(position, anchor, Vec3::Y),
            follow_offset: Vec3::from_array(options.follow.offset),
            rotate_degrees_per_pixel: options.controls.rotate_degrees_per_pixel,
            track_units_per_pixel: options.controls.track_units_per_pixel,
            min_dolly_distance: options.controls.min_dolly_distance,
            drag_origin: None,
        }
    }

    /// Current camera pose.
    #[must_use]
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Current anchor (look-at) position.
    #[must_use]
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    /// Overwrite the anchor position.
    ///
    /// Callable by host logic at any time; no validation. The camera
    /// re-frames the new anchor on its next update.
    pub fn set_anchor_position(&mut self, p: Vec3) {
        self.anchor = p;
    }

    /// Per-frame update: apply one frame of input under the given mode.
    pub fn update(&mut self, mode: CameraMode, input: &FrameInput) {
        match mode {
            CameraMode::Follow => self.update_follow(),
            CameraMode::Free => self.update_free(input),
        }
    }

    /// Locked follow: fixed offset from the anchor, facing it.
    fn update_follow(&mut self) {
        self.drag_origin = None;
        self.pose = CameraPose::look_at(
            self.anchor + self.follow_offset,
            self.anchor,
            Vec3::Y,
        );
    }

    fn update_free(&mut self, input: &FrameInput) {
        // Baseline before any input: face the anchor with world-up roll.
        self.pose =
            CameraPose::look_at(self.pose.position, self.anchor, Vec3::Y);

        let gesture_button_held = input.primary_held || input.secondary_held;

        if input.modifier_held
            && (input.primary_pressed || input.secondary_pressed)
        {
            // Gesture start: record the reference point, move nothing.
            self.drag_origin = Some(input.cursor);
        } else if input.modifier_held && gesture_button_held {
            match self.drag_origin.take() {
                // Button was already down when the modifier engaged; start
                // the gesture here instead of jumping from a stale origin.
                None => self.drag_origin = Some(input.cursor),
                Some(origin) => {
                    let dx = origin.x - input.cursor.x;
                    let dy = origin.y - input.cursor.y;
                    self.drag_origin = Some(input.cursor);

                    if input.primary_held {
                        self.orbit(dx, dy);
                    } else {
                        self.track(dx, dy);
                    }
                }
            }
        } else {
            self.drag_origin = None;
        }

        // Dolly runs on every modifier-held frame, independent of the
        // drag gesture.
        if input.modifier_held {
            self.dolly(input.scroll.y);
        }
    }

    /// Tumble about the anchor: yaw about world-up, then pitch about the
    /// camera's current right axis. Two independent single-axis rotations,
    /// each subject to the pole guard.
    fn orbit(&mut self, dx: f32, dy: f32) {
        let yaw_degrees = -dx * self.rotate_degrees_per_pixel;
        let yaw = Quat::from_axis_angle(Vec3::Y, yaw_degrees.to_radians());
        let _ = self.rotate_about_anchor(yaw);

        let pitch_degrees = dy * self.rotate_degrees_per_pixel;
        let pitch = Quat::from_axis_angle(
            self.pose.right(),
            pitch_degrees.to_radians(),
        );
        let _ = self.rotate_about_anchor(pitch);
    }

    /// Rotate the camera position about an axis through the anchor,
    /// rejecting candidates that would cross the vertical pole.
    ///
    /// Returns whether the rotation was applied.
    fn rotate_about_anchor(&mut self, rotation: Quat) -> bool {
        let candidate =
            self.anchor + rotation * (self.pose.position - self.anchor);
        let direction = (candidate - self.anchor).normalize_or(Vec3::NEG_Z);

        if direction.dot(Vec3::Y).abs() >= POLE_LIMIT {
            log::debug!(
                "orbit rejected: candidate within pole guard (dot {:.3})",
                direction.dot(Vec3::Y)
            );
            return false;
        }

        // Rebuild the full basis from the new geometry in one step,
        // keeping the previous up as the roll hint.
        self.pose = CameraPose::look_at(candidate, self.anchor, self.pose.up());
        true
    }

    /// Screen-space pan: move camera and anchor together so the framed
    /// subject keeps its offset.
    fn track(&mut self, dx: f32, dy: f32) {
        let delta = self.pose.right() * (dx * self.track_units_per_pixel)
            + self.pose.up() * (dy * self.track_units_per_pixel);
        self.pose.translate(delta);
        self.anchor += delta;
    }

    /// Move along the anchor-to-camera offset, floor-clamped so the view
    /// direction can never invert.
    fn dolly(&mut self, scroll: f32) {
        if scroll == 0.0 {
            return;
        }
        let offset = self.pose.position - self.anchor;
        let distance = offset.length();
        if distance < 1e-6 {
            return;
        }
        let new_distance = (distance - scroll).max(self.min_dolly_distance);
        self.pose.position = self.anchor + offset * (new_distance / distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FrameInput;

    const EPS: f32 = 1e-4;

    fn free_frame() -> FrameInput {
        FrameInput {
            modifier_held: true,
            ..FrameInput::default()
        }
    }

    /// Begin a primary-drag gesture at `cursor`.
    fn press_primary(cam: &mut OrbitCamera, cursor: Vec2) {
        let input = FrameInput {
            cursor,
            primary_pressed: true,
            primary_held: true,
            ..free_frame()
        };
        cam.update(CameraMode::Free, &input);
    }

    /// Continue a primary drag at `cursor`.
    fn drag_primary(cam: &mut OrbitCamera, cursor: Vec2) {
        let input = FrameInput {
            cursor,
            primary_held: true,
            ..free_frame()
        };
        cam.update(CameraMode::Free, &input);
    }

    fn assert_orthonormal(cam: &OrbitCamera) {
        let pose = cam.pose();
        assert!((pose.right().length() - 1.0).abs() < EPS);
        assert!((pose.up().length() - 1.0).abs() < EPS);
        assert!((pose.forward().length() - 1.0).abs() < EPS);
        assert!(pose.right().dot(pose.up()).abs() < EPS);
        assert!(pose.right().dot(pose.forward()).abs() < EPS);
        assert!(pose.up().dot(pose.forward()).abs() < EPS);
    }

    #[test]
    fn gesture_start_moves_nothing() {
        let mut cam = OrbitCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        press_primary(&mut cam, Vec2::new(200.0, 0.0));
        assert!((cam.pose().position - Vec3::new(0.0, 0.0, -5.0)).length() < EPS);
    }

    #[test]
    fn yaw_drag_orbits_about_world_up() {
        let mut cam = OrbitCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        press_primary(&mut cam, Vec2::new(200.0, 0.0));
        // dx = 200 - 100 = 100 px at 0.1 deg/px -> yaw -10 degrees.
        drag_primary(&mut cam, Vec2::new(100.0, 0.0));

        let expected = Quat::from_axis_angle(Vec3::Y, (-10.0_f32).to_radians())
            * Vec3::new(0.0, 0.0, -5.0);
        let position = cam.pose().position;
        assert!((position - expected).length() < 1e-3);
        // Still on the radius-5 circle in the horizontal plane.
        assert!((position.length() - 5.0).abs() < 1e-3);
        assert!(position.y.abs() < EPS);
        assert_orthonormal(&cam);
    }

    #[test]
    fn rotation_preserves_anchor_distance() {
        let mut cam = OrbitCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        press_primary(&mut cam, Vec2::new(0.0, 0.0));
        let drags = [
            Vec2::new(35.0, -12.0),
            Vec2::new(70.0, 30.0),
            Vec2::new(40.0, 55.0),
            Vec2::new(-25.0, 40.0),
        ];
        for cursor in drags {
            drag_primary(&mut cam, cursor);
            let radius = (cam.pose().position - cam.anchor()).length();
            assert!((radius - 5.0).abs() < 1e-3);
            assert_orthonormal(&cam);
        }
    }

    #[test]
    fn pole_guard_rejects_near_vertical() {
        let mut cam = OrbitCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        press_primary(&mut cam, Vec2::new(0.0, 0.0));
        let before = *cam.pose();

        // dy = 850 px -> pitch 85 degrees, landing inside the pole guard.
        drag_primary(&mut cam, Vec2::new(0.0, -850.0));
        assert_eq!(*cam.pose(), before);

        // A modest pitch is still accepted.
        drag_primary(&mut cam, Vec2::new(0.0, -300.0));
        assert!((*cam.pose() != before), "30 degree pitch should apply");
        let dir = (cam.pose().position - cam.anchor()).normalize();
        assert!(dir.dot(Vec3::Y).abs() < POLE_LIMIT);
    }

    #[test]
    fn track_preserves_camera_anchor_offset() {
        let mut cam = OrbitCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        let before_offset = cam.anchor() - cam.pose().position;

        let input = FrameInput {
            cursor: Vec2::new(0.0, 0.0),
            secondary_pressed: true,
            secondary_held: true,
            ..free_frame()
        };
        cam.update(CameraMode::Free, &input);
        let input = FrameInput {
            cursor: Vec2::new(-40.0, -20.0),
            secondary_held: true,
            ..free_frame()
        };
        cam.update(CameraMode::Free, &input);

        assert!(cam.anchor() != Vec3::ZERO, "anchor should move with the pan");
        let after_offset = cam.anchor() - cam.pose().position;
        assert_eq!(before_offset, after_offset);
    }

    #[test]
    fn track_distance_matches_pixel_scale() {
        let mut cam = OrbitCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        let input = FrameInput {
            cursor: Vec2::new(100.0, 0.0),
            secondary_pressed: true,
            secondary_held: true,
            ..free_frame()
        };
        cam.update(CameraMode::Free, &input);
        let input = FrameInput {
            cursor: Vec2::new(0.0, 0.0),
            secondary_held: true,
            ..free_frame()
        };
        cam.update(CameraMode::Free, &input);

        // dx = 100 px at 0.05 units/px -> 5 units along camera right.
        assert!((cam.anchor().length() - 5.0).abs() < EPS);
    }

    #[test]
    fn dolly_moves_by_scroll_amount() {
        let mut cam = OrbitCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        let input = FrameInput {
            scroll: Vec2::new(0.0, 2.0),
            ..free_frame()
        };
        cam.update(CameraMode::Free, &input);
        let distance = (cam.pose().position - cam.anchor()).length();
        assert!((distance - 3.0).abs() < EPS);
    }

    #[test]
    fn dolly_clamps_at_minimum_distance() {
        let mut cam = OrbitCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        let input = FrameInput {
            scroll: Vec2::new(0.0, 50.0),
            ..free_frame()
        };
        cam.update(CameraMode::Free, &input);

        let offset = cam.pose().position - cam.anchor();
        assert!((offset.length() - 0.1).abs() < EPS);
        // View direction must not invert: still looking from -Z.
        assert!(offset.z < 0.0);
    }

    #[test]
    fn dolly_requires_modifier() {
        let mut cam = OrbitCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        let input = FrameInput {
            scroll: Vec2::new(0.0, 2.0),
            modifier_held: false,
            ..FrameInput::default()
        };
        cam.update(CameraMode::Free, &input);
        let distance = (cam.pose().position - cam.anchor()).length();
        assert!((distance - 5.0).abs() < EPS);
    }

    #[test]
    fn follow_mode_pins_offset_and_faces_anchor() {
        let mut cam = OrbitCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        // Disturb the pose first so follow has to win regardless of state.
        press_primary(&mut cam, Vec2::new(0.0, 0.0));
        drag_primary(&mut cam, Vec2::new(60.0, 25.0));

        cam.set_anchor_position(Vec3::new(3.0, 2.0, 1.0));
        cam.update(CameraMode::Follow, &FrameInput::default());

        let expected = Vec3::new(3.0, 2.0, 1.0) + Vec3::new(-1.0, 1.0, 0.0);
        assert!((cam.pose().position - expected).length() < EPS);
        let to_anchor = (cam.anchor() - cam.pose().position).normalize();
        assert!((cam.pose().forward() - to_anchor).length() < EPS);
    }

    #[test]
    fn follow_mode_ignores_input() {
        let mut cam = OrbitCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        let input = FrameInput {
            cursor: Vec2::new(50.0, 50.0),
            primary_pressed: true,
            primary_held: true,
            scroll: Vec2::new(0.0, 3.0),
            ..free_frame()
        };
        cam.update(CameraMode::Follow, &input);
        let expected = cam.anchor() + Vec3::new(-1.0, 1.0, 0.0);
        assert!((cam.pose().position - expected).length() < EPS);
    }

    #[test]
    fn held_button_without_origin_records_instead_of_jumping() {
        let mut cam = OrbitCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        // Button held but no press edge this frame (pressed before the
        // modifier engaged): must not move the camera.
        drag_primary(&mut cam, Vec2::new(400.0, 300.0));
        assert!((cam.pose().position - Vec3::new(0.0, 0.0, -5.0)).length() < EPS);

        // The next drag frame has a reference and orbits normally.
        drag_primary(&mut cam, Vec2::new(300.0, 300.0));
        assert!(
            (cam.pose().position - Vec3::new(0.0, 0.0, -5.0)).length() > 0.1
        );
    }

    #[test]
    fn releasing_modifier_ends_gesture() {
        let mut cam = OrbitCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        press_primary(&mut cam, Vec2::new(200.0, 0.0));

        // Modifier released while the button stays down.
        let input = FrameInput {
            cursor: Vec2::new(100.0, 0.0),
            primary_held: true,
            modifier_held: false,
            ..FrameInput::default()
        };
        cam.update(CameraMode::Free, &input);
        assert!((cam.pose().position - Vec3::new(0.0, 0.0, -5.0)).length() < EPS);

        // Re-engaging the modifier re-anchors the gesture; the old origin
        // must not replay as a jump.
        drag_primary(&mut cam, Vec2::new(500.0, 0.0));
        assert!((cam.pose().position - Vec3::new(0.0, 0.0, -5.0)).length() < EPS);
    }

    #[test]
    fn set_anchor_position_reframes_on_next_update() {
        let mut cam = OrbitCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        cam.set_anchor_position(Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(cam.anchor(), Vec3::new(10.0, 0.0, 0.0));

        cam.update(CameraMode::Free, &FrameInput::default());
        let to_anchor = (cam.anchor() - cam.pose().position).normalize();
        assert!((cam.pose().forward() - to_anchor).length() < EPS);
    }
}
