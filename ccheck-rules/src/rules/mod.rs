//! Rule trait, metadata, and the two style rules.

pub mod metadata;
pub mod qualifier_position;
pub mod registry;
pub mod variable_naming;

pub use metadata::{RuleGroup, RuleMetadata, Severity, RULE_GROUP};
pub use qualifier_position::TypeQualifierPosition;
pub use registry::RuleRegistry;
pub use variable_naming::VariableNaming;

use ccheck_core::diagnostics::MessageSink;
use ccheck_core::ir::IrGraph;

/// A single style rule, evaluated once per translation unit.
///
/// Rules hold no mutable state and share nothing across invocations; all
/// output flows through the sink.
pub trait Rule {
    fn metadata(&self) -> &RuleMetadata;

    /// Evaluate the rule over one translation unit.
    fn execute(&self, graph: &IrGraph, sink: &mut dyn MessageSink);
}
