use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use flycam_core::{Camera, CameraConfig, CameraUniform, Projection};
use winit::{
  application::ApplicationHandler,
  event::WindowEvent,
  event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
  keyboard::{KeyCode, PhysicalKey},
  window::{Window, WindowId},
};

use crate::input::camera_control::apply_input_to_camera;
use crate::input::InputState;

// Tick rate while a movement key is held; otherwise the loop sleeps until an event
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

// Longest frame step fed to the camera, so a stall doesn't teleport it
const MAX_FRAME_SECONDS: f32 = 0.1;

pub fn run(config: CameraConfig) -> anyhow::Result<()>
{
  let event_loop = EventLoop::new().context("failed to create event loop")?;
  let mut app = FlycamApp::new(config);

  event_loop.run_app(&mut app).context("event loop exited with an error")?;

  Ok(())
}

struct FlycamApp
{
  window: Option<Arc<Window>>,
  camera: Camera,
  projection: Projection,
  input: InputState,
  clock: FrameClock,
}

impl FlycamApp
{
  fn new(config: CameraConfig) -> Self
  {
    Self {
      window: None,
      camera: Camera::new(config),
      projection: Projection::new(16.0 / 9.0),
      input: InputState::new(),
      clock: FrameClock::new(),
    }
  }

  fn init_window(&mut self, event_loop: &ActiveEventLoop)
  {
    if self.window.is_some()
    {
      return;
    }

    let attrs = Window::default_attributes().with_title("flycam");
    let window = match event_loop.create_window(attrs)
    {
      Ok(w) => Arc::new(w),
      Err(e) =>
      {
        log::error!("failed to create window: {}", e);
        event_loop.exit();
        return;
      }
    };

    let size = window.inner_size();
    if size.width > 0 && size.height > 0
    {
      self.projection.set_aspect(size.width as f32 / size.height as f32);
    }

    log::info!(
      "window {}x{}, WASD to move, right-drag to look, wheel to zoom",
      size.width,
      size.height
    );

    self.window = Some(window);
    self.publish_pose();
  }

  fn handle_window_event(&mut self, elwt: &ActiveEventLoop, window_id: WindowId, event: WindowEvent)
  {
    match &self.window
    {
      Some(w) if w.id() == window_id =>
      {}
      _ => return,
    }

    self.input.handle_event(&event);

    match event
    {
      WindowEvent::CloseRequested =>
      {
        elwt.exit();
      }

      WindowEvent::KeyboardInput { event, .. }
        if event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
      {
        elwt.exit();
      }

      WindowEvent::Resized(size) =>
      {
        if size.width == 0 || size.height == 0
        {
          return;
        }

        self.projection.set_aspect(size.width as f32 / size.height as f32);
        self.publish_pose();
      }

      _ =>
      {}
    }
  }

  fn frame(&mut self, event_loop: &ActiveEventLoop)
  {
    let now = Instant::now();

    let (delta_time, control_flow) = match self.clock.step(now, self.input.any_movement_held())
    {
      FrameStep::Idle => (0.0, ControlFlow::Wait),
      FrameStep::NotDue(due) => (0.0, ControlFlow::WaitUntil(due)),
      FrameStep::Advance(dt) => (dt, ControlFlow::WaitUntil(now + FRAME_INTERVAL)),
    };

    if apply_input_to_camera(&self.input, &mut self.camera, delta_time)
    {
      self.publish_pose();
    }

    self.input.end_frame();
    event_loop.set_control_flow(control_flow);
  }

  /// Hand the current pose to whatever consumes it: the window title and the log.
  fn publish_pose(&self)
  {
    let Some(window) = &self.window
    else
    {
      return;
    };

    let p = self.camera.position();
    window.set_title(&format!(
      "flycam | pos ({:.2}, {:.2}, {:.2}) | yaw {:.1}° pitch {:.1}° | fov {:.1}°",
      p.x,
      p.y,
      p.z,
      self.camera.yaw(),
      self.camera.pitch(),
      self.camera.zoom()
    ));

    let uniform = CameraUniform::from_camera(&self.camera, &self.projection);
    log::debug!("view_proj {:?} eye {:?}", uniform.view_proj, uniform.eye);
  }
}

impl ApplicationHandler for FlycamApp
{
  fn resumed(&mut self, event_loop: &ActiveEventLoop)
  {
    event_loop.set_control_flow(ControlFlow::Wait);
    self.init_window(event_loop);
  }

  fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent)
  {
    self.handle_window_event(event_loop, window_id, event);
  }

  fn about_to_wait(&mut self, event_loop: &ActiveEventLoop)
  {
    self.frame(event_loop);
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Frame pacing
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq)]
enum FrameStep
{
  /// Nothing held: sleep until the next event.
  Idle,
  /// Movement held but the next tick is not due yet.
  NotDue(Instant),
  /// Seconds of movement to apply this tick.
  Advance(f32),
}

/// Paces keyboard movement at `FRAME_INTERVAL` while a key is held.
struct FrameClock
{
  last_tick: Option<Instant>,
}

impl FrameClock
{
  fn new() -> Self
  {
    Self { last_tick: None }
  }

  fn step(&mut self, now: Instant, moving: bool) -> FrameStep
  {
    if !moving
    {
      self.last_tick = None;
      return FrameStep::Idle;
    }

    // First tick of a key hold only starts the clock
    let Some(last) = self.last_tick
    else
    {
      self.last_tick = Some(now);
      return FrameStep::Advance(0.0);
    };

    let due = last + FRAME_INTERVAL;
    if now < due
    {
      return FrameStep::NotDue(due);
    }

    self.last_tick = Some(now);
    FrameStep::Advance((now - last).as_secs_f32().min(MAX_FRAME_SECONDS))
  }
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn idle_clock_never_schedules_a_wakeup()
  {
    let mut clock = FrameClock::new();
    let t0 = Instant::now();

    assert_eq!(clock.step(t0, false), FrameStep::Idle);
    assert_eq!(clock.step(t0 + Duration::from_secs(5), false), FrameStep::Idle);
  }

  #[test]
  fn key_hold_after_idle_does_not_jump()
  {
    let mut clock = FrameClock::new();
    let t0 = Instant::now();

    clock.step(t0, false);
    assert_eq!(clock.step(t0 + Duration::from_secs(3), true), FrameStep::Advance(0.0));
  }

  #[test]
  fn wakeups_before_the_interval_are_not_ticks()
  {
    let mut clock = FrameClock::new();
    let t0 = Instant::now();

    clock.step(t0, true);
    assert_eq!(
      clock.step(t0 + Duration::from_millis(2), true),
      FrameStep::NotDue(t0 + FRAME_INTERVAL)
    );
  }

  #[test]
  fn due_tick_reports_elapsed_time_capped()
  {
    let mut clock = FrameClock::new();
    let t0 = Instant::now();

    clock.step(t0, true);
    match clock.step(t0 + Duration::from_millis(20), true)
    {
      FrameStep::Advance(dt) => assert!((dt - 0.02).abs() < 1e-4),
      other => panic!("expected a tick, got {:?}", other),
    }

    assert_eq!(
      clock.step(t0 + Duration::from_secs(2), true),
      FrameStep::Advance(MAX_FRAME_SECONDS)
    );
  }

  #[test]
  fn releasing_keys_resets_the_clock()
  {
    let mut clock = FrameClock::new();
    let t0 = Instant::now();

    clock.step(t0, true);
    clock.step(t0 + Duration::from_millis(20), false);
    assert_eq!(clock.step(t0 + Duration::from_millis(500), true), FrameStep::Advance(0.0));
  }
}
