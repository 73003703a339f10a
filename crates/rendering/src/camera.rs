use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::lifecycle::CameraRig;

const PAN_SPEED: f32 = 500.0;
const ZOOM_SPEED: f32 = 0.15;
const ORBIT_SENSITIVITY: f32 = 0.005;
/// Fraction of the remaining offset closed per frame while damping the
/// presented state toward the targets.
const DAMPING: f32 = 0.15;

/// Orbital camera model: the camera orbits a focus point on the ground.
///
/// Input systems write the `target_*` fields; [`apply_orbit_camera`] damps
/// the presented state toward the targets each frame and writes the
/// `Camera3d` transform. Clamp bounds are swapped per scene via
/// [`OrbitCamera::apply_rig`].
#[derive(Resource)]
pub struct OrbitCamera {
    /// Ground point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians (clamped between `min_pitch` and `max_pitch`)
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
    pub target_focus: Vec3,
    pub target_yaw: f32,
    pub target_pitch: f32,
    pub target_distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
    /// Focus may not leave a square of this half-extent around the origin.
    pub pan_bound: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_rig(&CameraRig::default())
    }
}

impl OrbitCamera {
    pub fn from_rig(rig: &CameraRig) -> Self {
        Self {
            focus: rig.focus,
            yaw: rig.yaw,
            pitch: rig.pitch,
            distance: rig.distance,
            target_focus: rig.focus,
            target_yaw: rig.yaw,
            target_pitch: rig.pitch,
            target_distance: rig.distance,
            min_distance: rig.min_distance,
            max_distance: rig.max_distance,
            min_pitch: rig.min_pitch,
            max_pitch: rig.max_pitch,
            pan_bound: rig.pan_bound,
        }
    }

    /// Snap to a scene's rig: presented state, targets, and bounds all reset.
    pub fn apply_rig(&mut self, rig: &CameraRig) {
        *self = Self::from_rig(rig);
    }

    /// Scroll input: scale the target distance, clamped to the rig bounds.
    pub fn zoom_by(&mut self, scroll_y: f32) {
        let factor = 1.0 - scroll_y * ZOOM_SPEED;
        self.target_distance =
            (self.target_distance * factor).clamp(self.min_distance, self.max_distance);
    }

    /// Drag input: rotate the yaw/pitch targets, pitch clamped to the rig.
    pub fn orbit_by(&mut self, delta: Vec2) {
        self.target_yaw += delta.x * ORBIT_SENSITIVITY;
        self.target_pitch =
            (self.target_pitch - delta.y * ORBIT_SENSITIVITY).clamp(self.min_pitch, self.max_pitch);
    }

    /// Pan input: move the focus target along the ground plane. The delta is
    /// rotated by the current yaw so dragging stays screen-relative.
    pub fn pan_by(&mut self, delta: Vec2) {
        let cos_yaw = self.target_yaw.cos();
        let sin_yaw = self.target_yaw.sin();
        let world_x = -delta.x * cos_yaw - delta.y * sin_yaw;
        let world_z = delta.x * sin_yaw - delta.y * cos_yaw;
        self.target_focus.x =
            (self.target_focus.x + world_x).clamp(-self.pan_bound, self.pan_bound);
        self.target_focus.z =
            (self.target_focus.z + world_z).clamp(-self.pan_bound, self.pan_bound);
    }

    /// Advance the damped state one frame toward the targets.
    pub fn step_damping(&mut self) {
        self.focus = self.focus.lerp(self.target_focus, DAMPING);
        self.yaw += (self.target_yaw - self.yaw) * DAMPING;
        self.pitch += (self.target_pitch - self.pitch) * DAMPING;
        self.distance += (self.target_distance - self.distance) * DAMPING;
    }
}

#[derive(Resource, Default)]
pub struct CameraDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

#[derive(Resource, Default)]
pub struct CameraOrbitDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

/// Returns `true` when egui wants the pointer: the cursor is over a panel
/// or egui is mid-drag. Camera input systems early-return in that case so
/// scrolling a table never zooms the scene underneath it.
#[inline]
fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    let (pos, look_at) = orbit_to_transform(&orbit);

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(pos).looking_at(look_at, Vec3::Y),
    ));
    commands.insert_resource(orbit);
}

/// Spherical to cartesian offset from focus.
fn orbit_to_transform(orbit: &OrbitCamera) -> (Vec3, Vec3) {
    let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
    let y = orbit.distance * orbit.pitch.sin();
    let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();
    let pos = orbit.focus + Vec3::new(x, y, z);
    (pos, orbit.focus)
}

/// System: damp toward the targets and write the camera `Transform`.
pub fn apply_orbit_camera(
    mut orbit: ResMut<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    orbit.step_damping();
    let (pos, look_at) = orbit_to_transform(&orbit);
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = Transform::from_translation(pos).looking_at(look_at, Vec3::Y);
}

/// WASD/Arrow keys: pan focus along the ground plane.
pub fn camera_pan_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut contexts: EguiContexts,
    mut orbit: ResMut<OrbitCamera>,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }

    let mut dir = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        dir.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        dir.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        dir.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        dir.x += 1.0;
    }

    if dir != Vec2::ZERO {
        let dir = dir.normalize();
        let scale = orbit.distance / 1000.0;
        orbit.pan_by(-dir * PAN_SPEED * scale * time.delta_secs());
    }
}

/// Left-mouse drag: orbit (horizontal = yaw, vertical = pitch).
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut drag: ResMut<CameraOrbitDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) && !egui_wants_pointer(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            orbit.orbit_by(delta);
            drag.last_pos = pos;
        }
    }
}

/// Right-mouse drag: pan focus.
pub fn camera_pan_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut drag: ResMut<CameraDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Right) && !egui_wants_pointer(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Right) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            let scale = orbit.distance / 1000.0;
            orbit.pan_by(delta * scale);
            drag.last_pos = pos;
        }
    }
}

/// Scroll wheel: zoom (change distance).
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut orbit: ResMut<OrbitCamera>,
) {
    if egui_wants_pointer(&mut contexts) {
        scroll_evts.clear();
        return;
    }
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        orbit.zoom_by(dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_zoom_stays_in_bounds() {
        let mut orbit = OrbitCamera::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10_000 {
            orbit.zoom_by(rng.gen_range(-50.0..50.0));
            assert!(orbit.target_distance >= orbit.min_distance);
            assert!(orbit.target_distance <= orbit.max_distance);
        }
    }

    #[test]
    fn test_pitch_stays_in_bounds() {
        let mut orbit = OrbitCamera::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..10_000 {
            orbit.orbit_by(Vec2::new(
                rng.gen_range(-500.0..500.0),
                rng.gen_range(-500.0..500.0),
            ));
            assert!(orbit.target_pitch >= orbit.min_pitch);
            assert!(orbit.target_pitch <= orbit.max_pitch);
        }
    }

    #[test]
    fn test_damping_settles_within_bounds() {
        let mut orbit = OrbitCamera::default();
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        for _ in 0..1_000 {
            orbit.zoom_by(rng.gen_range(-10.0..10.0));
            orbit.orbit_by(Vec2::new(
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
            ));
            orbit.step_damping();
        }
        for _ in 0..500 {
            orbit.step_damping();
        }
        assert!(orbit.distance >= orbit.min_distance - 0.1);
        assert!(orbit.distance <= orbit.max_distance + 0.1);
        assert!(orbit.pitch >= orbit.min_pitch - 0.01);
        assert!(orbit.pitch <= orbit.max_pitch + 0.01);
    }

    #[test]
    fn test_pan_clamped_to_bound() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..1_000 {
            orbit.pan_by(Vec2::new(100.0, 100.0));
        }
        assert!(orbit.target_focus.x.abs() <= orbit.pan_bound);
        assert!(orbit.target_focus.z.abs() <= orbit.pan_bound);
    }

    #[test]
    fn test_apply_rig_resets_state() {
        let mut orbit = OrbitCamera::default();
        orbit.zoom_by(-10.0);
        orbit.orbit_by(Vec2::new(300.0, -200.0));
        let rig = CameraRig::default();
        orbit.apply_rig(&rig);
        assert_eq!(orbit.distance, rig.distance);
        assert_eq!(orbit.target_yaw, rig.yaw);
        assert_eq!(orbit.target_pitch, rig.pitch);
    }
}
