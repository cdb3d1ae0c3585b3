//! Configuration management for Markgate.

use serde::{Deserialize, Serialize};

use crate::ratelimit::TimeUnit;

/// Main configuration for the Markgate gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkgateConfig {
    /// Registry endpoint configuration
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limiting: RateLimitingConfig,
}

impl Default for MarkgateConfig {
    fn default() -> Self {
        Self {
            registry: RegistryConfig::default(),
            rate_limiting: RateLimitingConfig::default(),
        }
    }
}

/// Registry endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// URL of the document-creation resource
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Optional per-request timeout in seconds; absent means no timeout
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: None,
        }
    }
}

fn default_endpoint() -> String {
    "https://ismp.crpt.ru/api/v3/lk/documents/create".to_string()
}

/// Rate limiting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitingConfig {
    /// Number of submissions admitted per unit of time
    #[serde(default = "default_requests_per_unit")]
    pub requests_per_unit: usize,

    /// The time unit after which permits are fully replenished
    #[serde(default = "default_unit")]
    pub unit: TimeUnit,
}

impl Default for RateLimitingConfig {
    fn default() -> Self {
        Self {
            requests_per_unit: default_requests_per_unit(),
            unit: default_unit(),
        }
    }
}

fn default_requests_per_unit() -> usize {
    10
}

fn default_unit() -> TimeUnit {
    TimeUnit::Second
}

impl MarkgateConfig {
    /// Load configuration from a file path.
    pub fn from_file(path: &str) -> crate::error::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: MarkgateConfig = serde_yaml::from_str(&contents)
            .map_err(|e| crate::error::MarkgateError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate constraints that serde cannot express.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.rate_limiting.requests_per_unit == 0 {
            return Err(crate::error::MarkgateError::Config(
                "rate_limiting.requests_per_unit must be positive".to_string(),
            ));
        }
        if self.registry.endpoint.is_empty() {
            return Err(crate::error::MarkgateError::Config(
                "registry.endpoint must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
