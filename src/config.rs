// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  /// Inject artificial latency before every mock response, to make the UI
  /// behave as it would against a remote server. Tests switch this off.
  pub mock_latency: bool,

  /// Directory holding the local JSON snapshots (cart and session).
  pub storage_dir: PathBuf,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = env::var("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let mock_latency = env::var("MOCK_LATENCY")
      .unwrap_or_else(|_| "true".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid MOCK_LATENCY value: {}", e)))?;

    let storage_dir = env::var("STORAGE_DIR")
      .map(PathBuf::from)
      .unwrap_or_else(|_| PathBuf::from(".storefront"));

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      mock_latency,
      storage_dir,
    })
  }

  /// Configuration suitable for in-process integration tests: no artificial
  /// latency, snapshots under the given directory.
  pub fn for_tests(storage_dir: impl Into<PathBuf>) -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 0,
      mock_latency: false,
      storage_dir: storage_dir.into(),
    }
  }
}
