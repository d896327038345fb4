//! Top-level ccheck configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::NamingConfig;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all rule configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CCHECK_*`)
/// 2. Project config (`ccheck.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CcheckConfig {
    pub naming: NamingConfig,
}

impl CcheckConfig {
    /// Load configuration from `root`, applying env overrides and
    /// validating the result.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_path = root.join("ccheck.toml");
        if project_path.exists() {
            let content = std::fs::read_to_string(&project_path).map_err(|_| {
                ConfigError::FileNotFound {
                    path: project_path.display().to_string(),
                }
            })?;
            config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: project_path.display().to_string(),
                message: e.to_string(),
            })?;
            debug!(path = %project_path.display(), "loaded project config");
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration: both naming patterns must compile.
    pub fn validate(config: &Self) -> Result<(), ConfigError> {
        compile_check(
            "naming.const_pattern",
            config.naming.effective_const_pattern(),
        )?;
        compile_check(
            "naming.nonconst_pattern",
            config.naming.effective_nonconst_pattern(),
        )?;
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `CCHECK_NAMING_CONST_PATTERN`, `CCHECK_NAMING_NONCONST_PATTERN`.
    fn apply_env_overrides(config: &mut Self) {
        if let Ok(val) = std::env::var("CCHECK_NAMING_CONST_PATTERN") {
            config.naming.const_pattern = Some(val);
        }
        if let Ok(val) = std::env::var("CCHECK_NAMING_NONCONST_PATTERN") {
            config.naming.nonconst_pattern = Some(val);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn compile_check(field: &str, pattern: &str) -> Result<(), ConfigError> {
    regex::Regex::new(pattern)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidPattern {
            field: field.to_string(),
            message: e.to_string(),
        })
}
