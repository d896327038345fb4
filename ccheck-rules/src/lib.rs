//! Style-rule evaluators for ccheck.
//!
//! Two stateless rules run over the host-built IR graph: `VariableNaming`
//! checks identifier conventions (const vs non-const), and
//! `TypeQualifierPosition` flags qualifiers placed on the left-hand side
//! of the type they qualify (house style is east-const).

pub mod rules;

pub use rules::{
    Rule, RuleGroup, RuleMetadata, RuleRegistry, Severity, TypeQualifierPosition, VariableNaming,
    RULE_GROUP,
};
