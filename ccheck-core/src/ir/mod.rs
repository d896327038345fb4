//! IR graph model — declarations, types, and tokens for one translation unit.

pub mod graph;
pub mod tokens;
pub mod types;

pub use graph::{DeclKind, Declaration, IrGraph};
pub use tokens::{SourcePos, Token, TokenId, TokenStream};
pub use types::{Qualifiers, TypeId, TypeNode, TypeTable};
