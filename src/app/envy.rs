use std::time::Duration;

use serde::Deserialize;

use super::config;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: String,
    pub port: Option<u16>,

    pub generation_delay_ms: Option<u64>,
}

impl Envy {
    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(
            self.generation_delay_ms
                .unwrap_or(config::DEFAULT_GENERATION_DELAY_MS),
        )
    }
}
