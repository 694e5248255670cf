#[derive(Debug, thiserror::Error)]
pub enum VigimatchError {
  #[error("invalid configuration: {0}")]
  ConfigError(String),
  #[error("could not access stored data: {0}")]
  Io(#[from] std::io::Error),
  #[error("malformed document: {0}")]
  Malformed(#[from] serde_json::Error),
  #[error(transparent)]
  OtherError(#[from] anyhow::Error),
}
