// src/state.rs

use crate::config::AppConfig;
use crate::errors::Result;
use crate::mock::MockState;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
  pub mock: Arc<MockState>,
  pub config: Arc<AppConfig>,
}

impl AppState {
  /// Builds the shared application state with a freshly seeded mock
  /// backend.
  pub fn new(config: AppConfig) -> Result<Self> {
    Ok(Self {
      mock: Arc::new(MockState::seeded()?),
      config: Arc::new(config),
    })
  }

  /// Sleeps for the endpoint's artificial latency, unless disabled by
  /// configuration. Always called before any lock is taken.
  pub async fn simulate_latency(&self, ms: u64) {
    if self.config.mock_latency {
      tokio::time::sleep(Duration::from_millis(ms)).await;
    }
  }
}
