//! Error types for ccheck. One enum per fallible subsystem, `thiserror`
//! throughout.
//!
//! Rule execution itself has no error path: traversal exhaustion and
//! unresolvable types degrade locally to "no finding".

pub mod config_error;
pub mod error_code;

pub use config_error::ConfigError;
pub use error_code::CcheckErrorCode;
