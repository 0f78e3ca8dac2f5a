use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOGOUT_TRIGGER_IDS, DEFAULT_READY_CHANNEL_CAPACITY,
    MAX_READY_CHANNEL_CAPACITY,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Element ids that act as logout controls when present on a page
    pub logout_trigger_ids: Vec<String>,
    /// Buffered ready notifications per page before slow listeners lag
    pub ready_channel_capacity: usize,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            logout_trigger_ids: DEFAULT_LOGOUT_TRIGGER_IDS
                .iter()
                .map(|id| id.to_string())
                .collect(),
            ready_channel_capacity: DEFAULT_READY_CHANNEL_CAPACITY,
        }
    }
}

impl GateConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.logout_trigger_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(ConfigError::gate(
                "gate.logout_trigger_ids cannot contain empty ids",
            ));
        }

        if self.ready_channel_capacity == 0
            || self.ready_channel_capacity > MAX_READY_CHANNEL_CAPACITY
        {
            return Err(ConfigError::gate(format!(
                "gate.ready_channel_capacity must be between 1 and {}, got {}",
                MAX_READY_CHANNEL_CAPACITY, self.ready_channel_capacity
            )));
        }

        Ok(())
    }
}
