use glam::Mat4;

//
// ──────────────────────────────────────────────────────────────
//   Perspective projection (right-handed, depth 0..1)
//
//   The vertical field of view is supplied per call so the
//   camera's zoom can drive it directly.
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection
{
  pub aspect: f32,
  pub znear: f32,
  pub zfar: f32,
}

const DEFAULT_ZNEAR: f32 = 0.1;
const DEFAULT_ZFAR: f32 = 10_000.0;

impl Projection
{
  pub fn new(aspect: f32) -> Self
  {
    Self { aspect, znear: DEFAULT_ZNEAR, zfar: DEFAULT_ZFAR }
  }

  pub fn set_aspect(&mut self, aspect: f32)
  {
    self.aspect = aspect;
  }

  /// `fovy_degrees` is typically [`Camera::zoom`](super::Camera::zoom).
  pub fn matrix(&self, fovy_degrees: f32) -> Mat4
  {
    Mat4::perspective_rh(fovy_degrees.to_radians(), self.aspect, self.znear, self.zfar)
  }
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn matrix_matches_glam_perspective()
  {
    let proj = Projection::new(16.0 / 9.0);
    let expected = Mat4::perspective_rh(45f32.to_radians(), 16.0 / 9.0, 0.1, 10_000.0);
    assert!(proj.matrix(45.0).abs_diff_eq(expected, 1e-6));
  }

  #[test]
  fn set_aspect_changes_horizontal_scale()
  {
    let mut proj = Projection::new(1.0);
    let square = proj.matrix(45.0);

    proj.set_aspect(2.0);
    let wide = proj.matrix(45.0);

    assert!((wide.x_axis.x - square.x_axis.x / 2.0).abs() < 1e-6);
    assert_eq!(wide.y_axis.y, square.y_axis.y);
  }
}
