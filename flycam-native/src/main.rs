mod app;
mod cli;
mod input;

use clap::Parser;

fn main() -> anyhow::Result<()>
{
  // RUST_LOG overrides the default filter, e.g. RUST_LOG=flycam_core=trace
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info,winit=warn"))
    .init();

  let cli = cli::Cli::parse();
  let config = cli.camera_config()?;

  app::run(config)
}
