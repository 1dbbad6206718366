use glam::{Mat4, Vec3};

use super::movement::CameraMovement;
use super::projection::Projection;
use crate::config::CameraConfig;

//
// ──────────────────────────────────────────────────────────────
//   Camera (free-fly, yaw/pitch in degrees, right-hand rule)
//
//   Coordinate system (default world-up = +Y):
//     X → right
//     Y → up
//     -Z → forward at yaw = -90°, pitch = 0°
//
//   The orientation basis is derived from `yaw` and `pitch`:
//     front = (cos yaw · cos pitch, sin pitch, sin yaw · cos pitch)
//     right = normalize(front × world_up)
//     up    = normalize(right × front)
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct Camera
{
  position: Vec3,
  front: Vec3,
  up: Vec3,
  right: Vec3,
  world_up: Vec3,

  yaw: f32,
  pitch: f32,

  movement_speed: f32,
  mouse_sensitivity: f32,
  zoom: f32,
}

/// Orthonormal orientation triad derived from yaw/pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis
{
  pub front: Vec3,
  pub right: Vec3,
  pub up: Vec3,
}

//
// ──────────────────────────────────────────────────────────────
//   Constants
// ──────────────────────────────────────────────────────────────
//

pub const PITCH_LIMIT: f32 = 89.0; // degrees, never reaches the pole
pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 45.0;

const INITIAL_FRONT: Vec3 = Vec3::new(0.0, 0.0, -1.0);
const INITIAL_RIGHT: Vec3 = Vec3::X;

// Squared length below which front × world_up is treated as collinear
const DEGENERATE_EPSILON: f32 = 1e-12;

//
// ──────────────────────────────────────────────────────────────
//   Public API
// ──────────────────────────────────────────────────────────────
//

impl Camera
{
  pub fn new(config: CameraConfig) -> Self
  {
    let mut camera = Self {
      position: config.position,
      front: INITIAL_FRONT,
      up: config.world_up,
      right: INITIAL_RIGHT,
      world_up: config.world_up,

      yaw: config.yaw,
      pitch: config.pitch,

      movement_speed: config.movement_speed,
      mouse_sensitivity: config.mouse_sensitivity,
      zoom: ZOOM_MAX,
    };

    camera.update_camera_vectors();

    log::debug!(
      "camera created at {} (yaw {:.1}°, pitch {:.1}°)",
      camera.position,
      camera.yaw,
      camera.pitch
    );

    camera
  }

  /// Scalar-component overload of [`Camera::new`].
  #[allow(clippy::too_many_arguments)]
  pub fn from_components(
    pos_x: f32,
    pos_y: f32,
    pos_z: f32,
    up_x: f32,
    up_y: f32,
    up_z: f32,
    yaw: f32,
    pitch: f32,
  ) -> Self
  {
    let config = CameraConfig::default()
      .with_position(Vec3::new(pos_x, pos_y, pos_z))
      .with_world_up(Vec3::new(up_x, up_y, up_z))
      .with_orientation(yaw, pitch);

    Self::new(config)
  }

  pub fn view_matrix(&self) -> Mat4
  {
    build_view_matrix(self)
  }

  /// Perspective matrix using the current zoom as vertical FOV.
  pub fn projection_matrix(&self, projection: &Projection) -> Mat4
  {
    projection.matrix(self.zoom)
  }

  /// Translate along front (forward/backward) or right (left/right).
  pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32)
  {
    let velocity = self.movement_speed * delta_time;

    match direction
    {
      CameraMovement::Forward => self.position += self.front * velocity,
      CameraMovement::Backward => self.position -= self.front * velocity,
      CameraMovement::Left => self.position -= self.right * velocity,
      CameraMovement::Right => self.position += self.right * velocity,
    }

    log::trace!("move {:?} → {}", direction, self.position);
  }

  /// Offsets are raw mouse deltas; they are scaled by the sensitivity
  /// before being added to yaw/pitch (degrees).
  pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool)
  {
    self.yaw += x_offset * self.mouse_sensitivity;
    self.pitch += y_offset * self.mouse_sensitivity;

    if constrain_pitch
    {
      self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    self.update_camera_vectors();

    log::trace!("look yaw {:.2}° pitch {:.2}°", self.yaw, self.pitch);
  }

  /// Scrolling up (positive) narrows the field of view.
  pub fn process_mouse_scroll(&mut self, y_offset: f32)
  {
    self.zoom = (self.zoom - y_offset).clamp(ZOOM_MIN, ZOOM_MAX);
  }

  pub fn set_movement_speed(&mut self, speed: f32)
  {
    if !is_valid_tuning(speed)
    {
      log::warn!("ignoring movement speed {}", speed);
      return;
    }

    self.movement_speed = speed;
  }

  pub fn set_mouse_sensitivity(&mut self, sensitivity: f32)
  {
    if !is_valid_tuning(sensitivity)
    {
      log::warn!("ignoring mouse sensitivity {}", sensitivity);
      return;
    }

    self.mouse_sensitivity = sensitivity;
  }

  pub fn position(&self) -> Vec3
  {
    self.position
  }

  pub fn front(&self) -> Vec3
  {
    self.front
  }

  pub fn right(&self) -> Vec3
  {
    self.right
  }

  pub fn up(&self) -> Vec3
  {
    self.up
  }

  pub fn world_up(&self) -> Vec3
  {
    self.world_up
  }

  pub fn yaw(&self) -> f32
  {
    self.yaw
  }

  pub fn pitch(&self) -> f32
  {
    self.pitch
  }

  /// Field-of-view proxy in degrees, always within `[ZOOM_MIN, ZOOM_MAX]`.
  pub fn zoom(&self) -> f32
  {
    self.zoom
  }

  pub fn movement_speed(&self) -> f32
  {
    self.movement_speed
  }

  pub fn mouse_sensitivity(&self) -> f32
  {
    self.mouse_sensitivity
  }

  pub fn basis(&self) -> Basis
  {
    Basis { front: self.front, right: self.right, up: self.up }
  }

  fn update_camera_vectors(&mut self)
  {
    let basis = derive_basis(self.yaw, self.pitch, self.world_up, self.right);

    self.front = basis.front;
    self.right = basis.right;
    self.up = basis.up;
  }
}

impl Default for Camera
{
  fn default() -> Self
  {
    Self::new(CameraConfig::default())
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Yaw/pitch → basis
// ──────────────────────────────────────────────────────────────
//

/// Derive the orientation basis for `yaw`/`pitch` (degrees).
///
/// `previous_right` is only consulted when `front` is collinear with
/// `world_up`: it is re-orthogonalised against the new front so the basis
/// stays orthonormal instead of collapsing to NaN.
pub fn derive_basis(yaw: f32, pitch: f32, world_up: Vec3, previous_right: Vec3) -> Basis
{
  let front = front_from_angles(yaw, pitch);
  let right = right_from_front(front, world_up, previous_right);
  let up = right.cross(front).normalize();

  Basis { front, right, up }
}

fn front_from_angles(yaw: f32, pitch: f32) -> Vec3
{
  let (sin_yaw, cos_yaw) = yaw.to_radians().sin_cos();
  let (sin_pitch, cos_pitch) = pitch.to_radians().sin_cos();

  Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize()
}

fn right_from_front(front: Vec3, world_up: Vec3, previous_right: Vec3) -> Vec3
{
  let cross = front.cross(world_up);
  if cross.length_squared() > DEGENERATE_EPSILON
  {
    return cross.normalize();
  }

  log::warn!("front {} is collinear with world up {}; keeping previous right", front, world_up);

  let projected = previous_right - front * previous_right.dot(front);
  if projected.length_squared() > DEGENERATE_EPSILON
  {
    return projected.normalize();
  }

  front.any_orthonormal_vector()
}

fn is_valid_tuning(value: f32) -> bool
{
  value.is_finite() && value >= 0.0
}

//
// ──────────────────────────────────────────────────────────────
//   Matrix builders
// ──────────────────────────────────────────────────────────────
//

fn build_view_matrix(cam: &Camera) -> Mat4
{
  Mat4::look_at_rh(cam.position, cam.position + cam.front, cam.up)
}

#[cfg(test)]
mod tests
{
  use super::*;

  const EPS: f32 = 1e-5;

  fn assert_orthonormal(basis: Basis)
  {
    assert!((basis.front.length() - 1.0).abs() < EPS, "front not unit: {}", basis.front);
    assert!((basis.right.length() - 1.0).abs() < EPS, "right not unit: {}", basis.right);
    assert!((basis.up.length() - 1.0).abs() < EPS, "up not unit: {}", basis.up);
    assert!(basis.front.dot(basis.right).abs() < EPS);
    assert!(basis.front.dot(basis.up).abs() < EPS);
    assert!(basis.right.dot(basis.up).abs() < EPS);
  }

  #[test]
  fn default_camera_faces_negative_z()
  {
    let cam = Camera::default();

    assert_eq!(cam.position(), Vec3::ZERO);
    assert!(cam.front().abs_diff_eq(Vec3::NEG_Z, EPS));
    assert!(cam.right().abs_diff_eq(Vec3::X, EPS));
    assert!(cam.up().abs_diff_eq(Vec3::Y, EPS));
    assert_eq!(cam.zoom(), 45.0);
    assert_eq!(cam.yaw(), -90.0);
    assert_eq!(cam.pitch(), 0.0);
    assert_eq!(cam.movement_speed(), 2.5);
    assert_eq!(cam.mouse_sensitivity(), 0.1);
  }

  #[test]
  fn right_follows_front_cross_world_up()
  {
    let cam = Camera::default();
    let expected = cam.front().cross(cam.world_up()).normalize();
    assert!(cam.right().abs_diff_eq(expected, EPS));
  }

  #[test]
  fn component_constructor_matches_config_constructor()
  {
    let a = Camera::from_components(1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 30.0, 10.0);
    let b = Camera::new(
      CameraConfig::default()
        .with_position(Vec3::new(1.0, 2.0, 3.0))
        .with_world_up(Vec3::Y)
        .with_orientation(30.0, 10.0),
    );

    assert_eq!(a.position(), b.position());
    assert_eq!(a.basis(), b.basis());
    assert_eq!(a.zoom(), b.zoom());
  }

  #[test]
  fn keyboard_moves_along_basis()
  {
    let mut cam = Camera::default();

    cam.process_keyboard(CameraMovement::Forward, 1.0);
    assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 0.0, -2.5), EPS));

    cam.process_keyboard(CameraMovement::Backward, 1.0);
    assert!(cam.position().abs_diff_eq(Vec3::ZERO, EPS));

    cam.process_keyboard(CameraMovement::Right, 2.0);
    assert!(cam.position().abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), EPS));

    cam.process_keyboard(CameraMovement::Left, 2.0);
    assert!(cam.position().abs_diff_eq(Vec3::ZERO, EPS));
  }

  #[test]
  fn keyboard_leaves_orientation_alone()
  {
    let mut cam = Camera::default();
    let before = cam.basis();

    cam.process_keyboard(CameraMovement::Forward, 0.3);
    cam.process_keyboard(CameraMovement::Left, 0.7);

    assert_eq!(cam.basis(), before);
  }

  #[test]
  fn mouse_movement_scales_by_sensitivity()
  {
    let mut cam = Camera::default();
    cam.process_mouse_movement(100.0, 50.0, true);

    assert!((cam.yaw() - (-80.0)).abs() < EPS);
    assert!((cam.pitch() - 5.0).abs() < EPS);
    assert_orthonormal(cam.basis());
  }

  #[test]
  fn zero_mouse_offset_keeps_state()
  {
    let mut cam = Camera::default();
    let before = cam.basis();

    cam.process_mouse_movement(0.0, 0.0, true);

    assert_eq!(cam.yaw(), -90.0);
    assert_eq!(cam.pitch(), 0.0);
    assert_eq!(cam.basis(), before);
  }

  #[test]
  fn pitch_clamped_when_constrained()
  {
    let mut cam = Camera::default();

    cam.process_mouse_movement(0.0, 10_000.0, true);
    assert_eq!(cam.pitch(), PITCH_LIMIT);

    cam.process_mouse_movement(0.0, -50_000.0, true);
    assert_eq!(cam.pitch(), -PITCH_LIMIT);
  }

  #[test]
  fn pitch_free_when_unconstrained()
  {
    let mut cam = Camera::default();
    cam.process_mouse_movement(0.0, 1_000.0, false);

    assert!((cam.pitch() - 100.0).abs() < EPS);
    assert_orthonormal(cam.basis());
  }

  #[test]
  fn scroll_saturates_both_ends()
  {
    let mut cam = Camera::default();

    cam.process_mouse_scroll(-100.0);
    assert_eq!(cam.zoom(), ZOOM_MAX);

    cam.process_mouse_scroll(100.0);
    assert_eq!(cam.zoom(), ZOOM_MIN);

    cam.process_mouse_scroll(-4.0);
    assert_eq!(cam.zoom(), 5.0);
  }

  #[test]
  fn scroll_does_not_touch_orientation()
  {
    let mut cam = Camera::default();
    let before = cam.basis();

    cam.process_mouse_scroll(3.0);

    assert_eq!(cam.basis(), before);
    assert_eq!(cam.yaw(), -90.0);
  }

  #[test]
  fn view_matrix_tracks_mutations()
  {
    let mut cam = Camera::default();
    cam.process_mouse_movement(123.0, -45.0, true);
    cam.process_keyboard(CameraMovement::Forward, 0.5);

    let expected = Mat4::look_at_rh(cam.position(), cam.position() + cam.front(), cam.up());
    assert!(cam.view_matrix().abs_diff_eq(expected, EPS));
  }

  #[test]
  fn tuning_setters_reject_bad_values()
  {
    let mut cam = Camera::default();

    cam.set_movement_speed(-1.0);
    cam.set_mouse_sensitivity(f32::NAN);
    assert_eq!(cam.movement_speed(), 2.5);
    assert_eq!(cam.mouse_sensitivity(), 0.1);

    cam.set_movement_speed(10.0);
    cam.set_mouse_sensitivity(0.5);
    assert_eq!(cam.movement_speed(), 10.0);
    assert_eq!(cam.mouse_sensitivity(), 0.5);

    cam.process_keyboard(CameraMovement::Forward, 1.0);
    assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 0.0, -10.0), EPS));
  }

  #[test]
  fn collinear_world_up_keeps_basis_finite()
  {
    // Looking straight up with pitch unconstrained puts front on world up
    let basis = derive_basis(-90.0, 90.0, Vec3::Y, Vec3::X);

    assert!(basis.front.is_finite() && basis.right.is_finite() && basis.up.is_finite());
    assert!(basis.right.abs_diff_eq(Vec3::X, EPS));
    assert_orthonormal(basis);
  }

  #[test]
  fn zero_world_up_falls_back_to_orthonormal_vector()
  {
    let basis = derive_basis(-90.0, 0.0, Vec3::ZERO, Vec3::NEG_Z);

    assert!(basis.front.abs_diff_eq(Vec3::NEG_Z, EPS));
    assert_orthonormal(basis);
  }
}
