//! Declarations and the per-translation-unit IR graph.

use serde::{Deserialize, Serialize};

use super::tokens::{SourcePos, TokenId, TokenStream};
use super::types::{TypeId, TypeTable};

/// Declaration kinds the style rules care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclKind {
    GlobalVariable,
    LocalVariable,
    Parameter,
}

impl DeclKind {
    /// Lowercase label used in entity descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            Self::GlobalVariable => "global variable",
            Self::LocalVariable => "local variable",
            Self::Parameter => "parameter",
        }
    }
}

/// A global variable, local variable, or parameter definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub kind: DeclKind,
    /// Identifier text.
    pub name: String,
    pub ty: TypeId,
    /// Position of the type's leftmost specifier token.
    pub specifier_pos: SourcePos,
    /// The declaration's own starting token.
    pub start_token: TokenId,
}

/// One translation unit's declarations, types, and tokens.
///
/// Built by the host, read-only for the duration of a rule run. Nothing
/// in here survives across invocations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IrGraph {
    pub tokens: TokenStream,
    pub types: TypeTable,
    decls: Vec<Declaration>,
}

impl IrGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration; callers add them in document order.
    pub fn add_declaration(&mut self, decl: Declaration) {
        self.decls.push(decl);
    }

    /// Declarations whose kind is in `kinds`, in document order.
    ///
    /// Finite and single-pass; a fresh call re-scans from the start.
    pub fn declarations<'a>(
        &'a self,
        kinds: &'a [DeclKind],
    ) -> impl Iterator<Item = &'a Declaration> + 'a {
        self.decls.iter().filter(move |d| kinds.contains(&d.kind))
    }

    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }
}
