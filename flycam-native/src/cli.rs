use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use flycam_core::CameraConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "flycam-native")]
#[command(
  about = "Free-fly camera host (WASD to move, right-drag to look, wheel to zoom)",
  long_about = None
)]
pub struct Cli
{
  /// JSON camera config; missing fields fall back to defaults
  #[arg(long)]
  pub config: Option<PathBuf>,

  /// Movement speed override, world units per second
  #[arg(long)]
  pub speed: Option<f32>,

  /// Mouse sensitivity override, degrees per pixel
  #[arg(long)]
  pub sensitivity: Option<f32>,
}

impl Cli
{
  pub fn camera_config(&self) -> anyhow::Result<CameraConfig>
  {
    let mut config = match &self.config
    {
      Some(path) => CameraConfig::load(path)
        .with_context(|| format!("could not use camera config {}", path.display()))?,
      None => CameraConfig::default(),
    };

    if let Some(speed) = self.speed
    {
      config = config.with_movement_speed(speed);
    }

    if let Some(sensitivity) = self.sensitivity
    {
      config = config.with_mouse_sensitivity(sensitivity);
    }

    config.validate().context("command-line overrides rejected")?;

    Ok(config)
  }
}
