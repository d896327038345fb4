//! Stable error codes for host-side classification.

pub const CONFIG_ERROR: &str = "CCHECK_CONFIG";

/// Maps an error enum to a stable code string.
pub trait CcheckErrorCode {
    fn error_code(&self) -> &'static str;
}
