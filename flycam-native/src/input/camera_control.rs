use flycam_core::{Camera, CameraMovement};

use crate::input::InputState;

//
// ──────────────────────────────────────────────────────────────
//   Public API
// ──────────────────────────────────────────────────────────────
//

/// Feed one frame of input to the camera. Returns true if the pose changed.
pub fn apply_input_to_camera(input: &InputState, camera: &mut Camera, delta_time: f32) -> bool
{
  let moved = apply_movement(input, camera, delta_time);
  let looked = apply_look(input, camera);
  let zoomed = apply_zoom(input, camera);

  moved || looked || zoomed
}

//
// ──────────────────────────────────────────────────────────────
//   Input handlers
// ──────────────────────────────────────────────────────────────
//

fn apply_movement(input: &InputState, camera: &mut Camera, delta_time: f32) -> bool
{
  if delta_time <= 0.0
  {
    return false;
  }

  let mut moved = false;

  for direction in CameraMovement::ALL
  {
    if input.is_held(direction)
    {
      camera.process_keyboard(direction, delta_time);
      moved = true;
    }
  }

  moved
}

fn apply_look(input: &InputState, camera: &mut Camera) -> bool
{
  if !input.right_held
  {
    return false;
  }

  if input.mouse_dx == 0.0 && input.mouse_dy == 0.0
  {
    return false;
  }

  // Screen y grows downward; dragging up should pitch up
  camera.process_mouse_movement(input.mouse_dx, -input.mouse_dy, true);
  true
}

fn apply_zoom(input: &InputState, camera: &mut Camera) -> bool
{
  if input.scroll == 0.0
  {
    return false;
  }

  camera.process_mouse_scroll(input.scroll);
  true
}
