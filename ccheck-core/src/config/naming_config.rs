//! Naming-rule configuration.

use serde::{Deserialize, Serialize};

/// Default pattern for const variable names (upper snake case).
pub const DEFAULT_CONST_PATTERN: &str = "^[A-Z][A-Z0-9_]*$";

/// Default pattern for non-const variable names (lower camel case).
pub const DEFAULT_NONCONST_PATTERN: &str = "^([a-z][a-z0-9]*)([A-Z][a-z0-9]*)*$";

/// Configuration for the variable-naming rule.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NamingConfig {
    /// Pattern const variable names must match. Default: `^[A-Z][A-Z0-9_]*$`.
    pub const_pattern: Option<String>,
    /// Pattern non-const variable names must match. Default: lower camel case.
    pub nonconst_pattern: Option<String>,
}

impl NamingConfig {
    /// Returns the effective const pattern, defaulting to upper snake case.
    pub fn effective_const_pattern(&self) -> &str {
        self.const_pattern
            .as_deref()
            .unwrap_or(DEFAULT_CONST_PATTERN)
    }

    /// Returns the effective non-const pattern, defaulting to lower camel case.
    pub fn effective_nonconst_pattern(&self) -> &str {
        self.nonconst_pattern
            .as_deref()
            .unwrap_or(DEFAULT_NONCONST_PATTERN)
    }
}
