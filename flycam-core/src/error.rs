use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError
{
  #[error("failed to read camera config {path}")]
  Io
  {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed camera config: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("invalid camera config: {0}")]
  Invalid(String),
}
