//! Service configuration read from the environment.
use std::path::PathBuf;
use std::time::Duration;

use tripwise_budget::BudgetPolicy;
use tripwise_core::{Pacing, TripError};

pub const DEFAULT_ADDR: &str = "0.0.0.0:8787";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Listen address (`TRIPWISE_ADDR`)
    pub addr: String,
    /// Optional YAML budget policy (`TRIPWISE_POLICY`)
    pub policy_path: Option<PathBuf>,
    /// Delay per progress stage (`TRIPWISE_PACING_MS`); none by default
    pub pacing: Pacing,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            policy_path: None,
            pacing: Pacing::instant(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, TripError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TripError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(addr) = get("TRIPWISE_ADDR") {
            config.addr = addr;
        }
        config.policy_path = get("TRIPWISE_POLICY").map(PathBuf::from);

        if let Some(ms) = get("TRIPWISE_PACING_MS") {
            let ms: u64 = ms.parse().map_err(|_| {
                TripError::Config(format!("TRIPWISE_PACING_MS must be a whole number of milliseconds, got '{}'", ms))
            })?;
            config.pacing = Pacing::Fixed(Duration::from_millis(ms));
        }

        Ok(config)
    }

    /// The configured policy, or the canonical one when no path is set
    pub fn load_policy(&self) -> Result<BudgetPolicy, TripError> {
        match &self.policy_path {
            Some(path) => Ok(BudgetPolicy::from_file(path)?),
            None => Ok(BudgetPolicy::default()),
        }
    }
}
