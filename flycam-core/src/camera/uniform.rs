use super::fly::Camera;
use super::projection::Projection;

//
// ──────────────────────────────────────────────────────────────
//   Camera Uniform (GPU side)
//
//   WGSL layout:
//     view_proj : mat4x4<f32>   → 64 bytes
//     eye       : vec4<f32>     → 16 bytes (w = 1)
//   Total: 80 bytes
// ──────────────────────────────────────────────────────────────
//

#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform
{
  pub view_proj: [[f32; 4]; 4], // 64 bytes
  pub eye: [f32; 4],            // 16 bytes
}

// Catch CPU/GPU layout mismatches at compile time
const _: () = assert!(std::mem::size_of::<CameraUniform>() == 80);

impl CameraUniform
{
  pub fn from_camera(camera: &Camera, projection: &Projection) -> Self
  {
    let view_proj = camera.projection_matrix(projection) * camera.view_matrix();

    Self {
      view_proj: view_proj.to_cols_array_2d(),
      eye: camera.position().extend(1.0).to_array(),
    }
  }
}

#[cfg(test)]
mod tests
{
  use super::*;
  use crate::camera::CameraMovement;
  use glam::{Mat4, Vec4};

  #[test]
  fn uniform_combines_zoomed_projection_and_view()
  {
    let mut camera = Camera::default();
    camera.process_keyboard(CameraMovement::Forward, 2.0);
    camera.process_mouse_scroll(15.0);

    let projection = Projection::new(4.0 / 3.0);
    let uniform = CameraUniform::from_camera(&camera, &projection);

    let expected = projection.matrix(30.0) * camera.view_matrix();
    assert!(Mat4::from_cols_array_2d(&uniform.view_proj).abs_diff_eq(expected, 1e-5));
    assert!(Vec4::from_array(uniform.eye).abs_diff_eq(Vec4::new(0.0, 0.0, -5.0, 1.0), 1e-5));
  }

  #[test]
  fn uniform_casts_to_bytes()
  {
    let uniform = CameraUniform::from_camera(&Camera::default(), &Projection::new(1.0));
    assert_eq!(bytemuck::bytes_of(&uniform).len(), 80);
  }
}
