pub mod camera_control;

use flycam_core::CameraMovement;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

// Pixels of touchpad scroll treated as one wheel line
const PIXELS_PER_LINE: f32 = 40.0;

pub struct InputState
{
  pub mouse_x: Option<f32>,
  pub mouse_y: Option<f32>,
  pub mouse_dx: f32,
  pub mouse_dy: f32,

  pub right_held: bool,

  pub scroll: f32,

  pub forward_held: bool,
  pub backward_held: bool,
  pub left_held: bool,
  pub right_key_held: bool,
}

impl InputState
{
  pub fn new() -> Self
  {
    Self {
      mouse_x: None,
      mouse_y: None,
      mouse_dx: 0.0,
      mouse_dy: 0.0,

      right_held: false,

      scroll: 0.0,

      forward_held: false,
      backward_held: false,
      left_held: false,
      right_key_held: false,
    }
  }

  pub fn handle_event(&mut self, event: &WindowEvent)
  {
    match event
    {
      WindowEvent::CursorMoved { position, .. } =>
      {
        self.cursor_moved(position.x as f32, position.y as f32);
      }

      WindowEvent::MouseInput { state, button, .. } =>
      {
        self.set_button(*button, *state == ElementState::Pressed);
      }

      WindowEvent::MouseWheel { delta, .. } => match delta
      {
        MouseScrollDelta::LineDelta(_, y) => self.scroll += *y,
        MouseScrollDelta::PixelDelta(p) => self.scroll += p.y as f32 / PIXELS_PER_LINE,
      },

      WindowEvent::KeyboardInput { event, .. } =>
      {
        if let PhysicalKey::Code(code) = event.physical_key
        {
          self.set_key(code, event.state == ElementState::Pressed);
        }
      }

      WindowEvent::CursorLeft { .. } =>
      {
        self.forget_cursor();
      }

      WindowEvent::Focused(false) =>
      {
        self.release_all();
      }

      _ =>
      {}
    }
  }

  pub fn cursor_moved(&mut self, x: f32, y: f32)
  {
    // First sample only establishes the reference point
    if let (Some(last_x), Some(last_y)) = (self.mouse_x, self.mouse_y)
    {
      self.mouse_dx += x - last_x;
      self.mouse_dy += y - last_y;
    }

    self.mouse_x = Some(x);
    self.mouse_y = Some(y);
  }

  pub fn set_button(&mut self, button: MouseButton, pressed: bool)
  {
    if button == MouseButton::Right
    {
      self.right_held = pressed;
    }
  }

  pub fn set_key(&mut self, code: KeyCode, pressed: bool)
  {
    let Some(direction) = movement_for_key(code)
    else
    {
      return;
    };

    match direction
    {
      CameraMovement::Forward => self.forward_held = pressed,
      CameraMovement::Backward => self.backward_held = pressed,
      CameraMovement::Left => self.left_held = pressed,
      CameraMovement::Right => self.right_key_held = pressed,
    }
  }

  pub fn is_held(&self, direction: CameraMovement) -> bool
  {
    match direction
    {
      CameraMovement::Forward => self.forward_held,
      CameraMovement::Backward => self.backward_held,
      CameraMovement::Left => self.left_held,
      CameraMovement::Right => self.right_key_held,
    }
  }

  /// Drop the reference point so the next sample doesn't produce a jump.
  pub fn forget_cursor(&mut self)
  {
    self.mouse_x = None;
    self.mouse_y = None;
  }

  pub fn any_movement_held(&self) -> bool
  {
    CameraMovement::ALL.iter().any(|d| self.is_held(*d))
  }

  pub fn release_all(&mut self)
  {
    self.forget_cursor();
    self.right_held = false;
    self.forward_held = false;
    self.backward_held = false;
    self.left_held = false;
    self.right_key_held = false;
  }

  pub fn end_frame(&mut self)
  {
    self.mouse_dx = 0.0;
    self.mouse_dy = 0.0;
    self.scroll = 0.0;
  }
}

pub fn movement_for_key(code: KeyCode) -> Option<CameraMovement>
{
  match code
  {
    KeyCode::KeyW | KeyCode::ArrowUp => Some(CameraMovement::Forward),
    KeyCode::KeyS | KeyCode::ArrowDown => Some(CameraMovement::Backward),
    KeyCode::KeyA | KeyCode::ArrowLeft => Some(CameraMovement::Left),
    KeyCode::KeyD | KeyCode::ArrowRight => Some(CameraMovement::Right),
    _ => None,
  }
}
