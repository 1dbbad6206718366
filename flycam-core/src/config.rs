use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

//
// ──────────────────────────────────────────────────────────────
//   Defaults
// ──────────────────────────────────────────────────────────────
//

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;

//
// ──────────────────────────────────────────────────────────────
//   CameraConfig
//
//   JSON shape (every field optional):
//     {
//       "position": [0.0, 0.0, 0.0],
//       "world_up": [0.0, 1.0, 0.0],
//       "yaw": -90.0,
//       "pitch": 0.0,
//       "movement_speed": 2.5,
//       "mouse_sensitivity": 0.1
//     }
// ──────────────────────────────────────────────────────────────
//

/// Initial pose and tuning for a [`Camera`](crate::Camera).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig
{
  pub position: Vec3,
  pub world_up: Vec3,
  pub yaw: f32,
  pub pitch: f32,
  pub movement_speed: f32,
  pub mouse_sensitivity: f32,
}

impl Default for CameraConfig
{
  fn default() -> Self
  {
    Self {
      position: Vec3::ZERO,
      world_up: Vec3::Y,
      yaw: DEFAULT_YAW,
      pitch: DEFAULT_PITCH,
      movement_speed: DEFAULT_SPEED,
      mouse_sensitivity: DEFAULT_SENSITIVITY,
    }
  }
}

impl CameraConfig
{
  pub fn with_position(mut self, position: Vec3) -> Self
  {
    self.position = position;
    self
  }

  pub fn with_world_up(mut self, world_up: Vec3) -> Self
  {
    self.world_up = world_up;
    self
  }

  /// Yaw and pitch in degrees.
  pub fn with_orientation(mut self, yaw: f32, pitch: f32) -> Self
  {
    self.yaw = yaw;
    self.pitch = pitch;
    self
  }

  pub fn with_movement_speed(mut self, speed: f32) -> Self
  {
    self.movement_speed = speed;
    self
  }

  pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self
  {
    self.mouse_sensitivity = sensitivity;
    self
  }

  pub fn from_json_str(json: &str) -> Result<Self, ConfigError>
  {
    let config: Self = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError>
  {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
      .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

    let config = Self::from_json_str(&text)?;
    log::info!("loaded camera config from {}", path.display());

    Ok(config)
  }

  pub fn validate(&self) -> Result<(), ConfigError>
  {
    if !self.position.is_finite() || !self.world_up.is_finite()
    {
      return Err(ConfigError::Invalid("position and world_up must be finite".into()));
    }

    if self.world_up.length_squared() == 0.0
    {
      return Err(ConfigError::Invalid("world_up must not be zero".into()));
    }

    if !self.yaw.is_finite() || !self.pitch.is_finite()
    {
      return Err(ConfigError::Invalid("yaw and pitch must be finite".into()));
    }

    check_tuning("movement_speed", self.movement_speed)?;
    check_tuning("mouse_sensitivity", self.mouse_sensitivity)?;

    Ok(())
  }
}

fn check_tuning(name: &str, value: f32) -> Result<(), ConfigError>
{
  if value.is_finite() && value >= 0.0
  {
    return Ok(());
  }

  Err(ConfigError::Invalid(format!("{} must be a non-negative number, got {}", name, value)))
}
