//! Configuration for ccheck.
//! TOML-based: project `ccheck.toml`, `CCHECK_*` env overrides, compiled defaults.

pub mod ccheck_config;
pub mod naming_config;

pub use ccheck_config::CcheckConfig;
pub use naming_config::{NamingConfig, DEFAULT_CONST_PATTERN, DEFAULT_NONCONST_PATTERN};
