// Path: crates/types/src/config/mod.rs

//! Shared configuration structures for the execution host and its binaries.
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Configuration for structured logging.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// The `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable text.
    #[serde(default = "default_true")]
    pub json: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: default_true(),
        }
    }
}

/// Configuration for the serial execution host.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Maximum nesting of contract-to-contract calls. A call that would go
    /// deeper aborts and rolls back.
    #[serde(default = "default_max_call_depth")]
    pub max_call_depth: u32,
    /// Maximum size in bytes of a raw request accepted at any call depth.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
    /// Logging settings used by the binaries.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

fn default_max_call_depth() -> u32 {
    64
}
fn default_max_input_bytes() -> usize {
    64 * 1024
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            max_call_depth: default_max_call_depth(),
            max_input_bytes: default_max_input_bytes(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl HostConfig {
    /// Rejects settings under which no call could ever run.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.max_call_depth == 0 {
            return Err(CoreError::Config("max_call_depth must be at least 1".into()));
        }
        if self.max_input_bytes == 0 {
            return Err(CoreError::Config("max_input_bytes must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let cfg: HostConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, HostConfig::default());
        assert_eq!(cfg.max_call_depth, 64);
        assert_eq!(cfg.max_input_bytes, 65536);
        assert!(cfg.telemetry.json);
    }

    #[test]
    fn test_partial_document_overrides() {
        let cfg: HostConfig = toml::from_str(
            r#"
            max_call_depth = 4

            [telemetry]
            filter = "dnote=debug"
            json = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.max_call_depth, 4);
        assert_eq!(cfg.max_input_bytes, 65536);
        assert_eq!(cfg.telemetry.filter, "dnote=debug");
        assert!(!cfg.telemetry.json);
        cfg.validate().unwrap();
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let cfg = HostConfig {
            max_call_depth: 0,
            ..HostConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
