use serde::{Deserialize, Serialize};

const DEFAULT_LIST_LIMIT: usize = 20;
const MAX_LIST_LIMIT: usize = 100;

/// Service-level tunables. Board geometry is deliberately absent; the
/// 15x15 layout is a fixed fixture, not configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub default_list_limit: usize,
    pub max_list_limit: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_list_limit: DEFAULT_LIST_LIMIT,
            max_list_limit: MAX_LIST_LIMIT,
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.default_list_limit == 0 {
            return Err("default list limit must be positive".to_string());
        }
        if self.max_list_limit < self.default_list_limit {
            return Err(format!(
                "max list limit ({}) cannot be below the default ({})",
                self.max_list_limit, self.default_list_limit
            ));
        }
        Ok(())
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let config: ServiceConfig =
            serde_yaml_ng::from_str(content).map_err(|e| format!("config parse error: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("config validation error: {}", e))?;
        Ok(config)
    }

    /// Effective page size for a list request.
    pub fn clamp_limit(&self, limit: Option<usize>) -> usize {
        limit
            .unwrap_or(self.default_list_limit)
            .min(self.max_list_limit)
    }
}
