//! Core types for the ccheck style-rule engine.
//!
//! ccheck evaluates C/C++ style rules over an IR graph built by a host
//! analysis framework. This crate holds the graph model (declarations,
//! types, tokens), the diagnostic sink, configuration, and errors; the
//! rule evaluators live in `ccheck-rules`.

pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod ir;
pub mod trace;
pub mod unparse;

pub use config::{CcheckConfig, NamingConfig};
pub use diagnostics::{render_message, Diagnostic, MessageSink, VecSink};
pub use errors::{CcheckErrorCode, ConfigError};
pub use ir::{
    DeclKind, Declaration, IrGraph, Qualifiers, SourcePos, Token, TokenId, TokenStream, TypeId,
    TypeNode, TypeTable,
};
