//! Human-readable entity labels for diagnostics.

use crate::ir::{Declaration, Token};

/// Label for a declaration, e.g. `global variable 'LIMIT'`.
pub fn entity_label(decl: &Declaration) -> String {
    format!("{} '{}'", decl.kind.label(), decl.name)
}

/// Label for a token, e.g. `token 'const'`.
pub fn token_label(token: &Token) -> String {
    format!("token '{}'", token.value)
}
