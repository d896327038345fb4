//! Type-qualifier position rule — `const`/`volatile` must trail the type
//! they qualify (east-const).

use smallvec::SmallVec;
use tracing::trace;

use ccheck_core::diagnostics::{Diagnostic, MessageSink};
use ccheck_core::ir::{DeclKind, Declaration, IrGraph, Token};
use ccheck_core::unparse;

use super::metadata::{RuleMetadata, Severity, RULE_GROUP};
use super::Rule;

static METADATA: RuleMetadata = RuleMetadata {
    name: "TypeQualifierPosition",
    group: RULE_GROUP,
    severity: Severity::Required,
    messages: &[(
        "qualifier_position",
        "The const and volatile qualifiers must be placed on the type's right-hand side.",
    )],
    description: Some(
        "Type qualifiers should be noted on the right-hand side of types.\n\
         Example:\n\
         int const x = 1; // ok\n\
         const int x = 1; // not ok",
    ),
};

const RELEVANT_KINDS: &[DeclKind] = &[
    DeclKind::GlobalVariable,
    DeclKind::LocalVariable,
    DeclKind::Parameter,
];

/// Flags `const`/`volatile` keywords on the left-hand side of a
/// declaration's type.
#[derive(Debug, Default)]
pub struct TypeQualifierPosition;

impl TypeQualifierPosition {
    pub fn new() -> Self {
        Self
    }

    /// Walk backward from the declaration's own token until the token at
    /// `specifier_pos` is found.
    ///
    /// Returns `None` when the stream is exhausted first. The walk is
    /// additionally capped at the stream length, so it terminates even on
    /// malformed position data.
    fn find_anchor<'g>(graph: &'g IrGraph, decl: &Declaration) -> Option<&'g Token> {
        let mut current = decl.start_token;
        for _ in 0..=graph.tokens.len() {
            let token = graph.tokens.get(current)?;
            if token.pos == decl.specifier_pos {
                return Some(token);
            }
            current = graph.tokens.try_prev(current)?;
        }
        None
    }
}

impl Rule for TypeQualifierPosition {
    fn metadata(&self) -> &RuleMetadata {
        &METADATA
    }

    fn execute(&self, graph: &IrGraph, sink: &mut dyn MessageSink) {
        for decl in graph.declarations(RELEVANT_KINDS) {
            let Some(anchor) = Self::find_anchor(graph, decl) else {
                trace!(name = %decl.name, "specifier position not reachable, skipping");
                continue;
            };
            if anchor.value == "const" || anchor.value == "volatile" {
                sink.add_message(Diagnostic {
                    rule: METADATA.name.to_string(),
                    key: "qualifier_position".to_string(),
                    pos: anchor.pos,
                    entity: unparse::token_label(anchor),
                    message_arguments: SmallVec::new(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccheck_core::diagnostics::VecSink;
    use ccheck_core::ir::SourcePos;

    /// `int const x = 1;` — east-const, specifier position at `int`.
    fn east_const_unit() -> IrGraph {
        let mut graph = IrGraph::new();
        graph.tokens.push("int", 1, 1);
        graph.tokens.push("const", 1, 5);
        let x = graph.tokens.push("x", 1, 11);
        graph.tokens.push("=", 1, 13);
        graph.tokens.push("1", 1, 15);
        graph.tokens.push(";", 1, 16);
        let base = graph.types.named("int");
        let ty = graph
            .types
            .qualified(ccheck_core::ir::Qualifiers::const_only(), base);
        graph.add_declaration(Declaration {
            kind: DeclKind::LocalVariable,
            name: "x".to_string(),
            ty,
            specifier_pos: SourcePos::new(1, 1),
            start_token: x,
        });
        graph
    }

    /// `const int x = 1;` — west-const, specifier position at `const`.
    fn west_const_unit() -> IrGraph {
        let mut graph = IrGraph::new();
        graph.tokens.push("const", 1, 1);
        graph.tokens.push("int", 1, 7);
        let x = graph.tokens.push("x", 1, 11);
        graph.tokens.push("=", 1, 13);
        graph.tokens.push("1", 1, 15);
        graph.tokens.push(";", 1, 16);
        let base = graph.types.named("int");
        let ty = graph
            .types
            .qualified(ccheck_core::ir::Qualifiers::const_only(), base);
        graph.add_declaration(Declaration {
            kind: DeclKind::LocalVariable,
            name: "x".to_string(),
            ty,
            specifier_pos: SourcePos::new(1, 1),
            start_token: x,
        });
        graph
    }

    fn run(graph: &IrGraph) -> VecSink {
        let mut sink = VecSink::new();
        TypeQualifierPosition::new().execute(graph, &mut sink);
        sink
    }

    #[test]
    fn test_east_const_is_compliant() {
        assert!(run(&east_const_unit()).is_empty());
    }

    #[test]
    fn test_west_const_is_flagged_at_the_qualifier_token() {
        let sink = run(&west_const_unit());
        assert_eq!(sink.len(), 1);
        let diag = &sink.diagnostics[0];
        assert_eq!(diag.key, "qualifier_position");
        assert_eq!(diag.pos, SourcePos::new(1, 1));
        assert_eq!(diag.entity, "token 'const'");
        assert!(diag.message_arguments.is_empty());
    }

    #[test]
    fn test_west_volatile_is_flagged() {
        let mut graph = IrGraph::new();
        graph.tokens.push("volatile", 2, 1);
        graph.tokens.push("int", 2, 10);
        let x = graph.tokens.push("x", 2, 14);
        let ty = graph.types.named("int");
        graph.add_declaration(Declaration {
            kind: DeclKind::Parameter,
            name: "x".to_string(),
            ty,
            specifier_pos: SourcePos::new(2, 1),
            start_token: x,
        });
        let sink = run(&graph);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.diagnostics[0].entity, "token 'volatile'");
    }

    #[test]
    fn test_unreachable_specifier_position_is_a_no_op() {
        let graph = east_const_unit();
        // Point the declaration at a position no token occupies.
        let mut decl = graph
            .declarations(&[DeclKind::LocalVariable])
            .next()
            .unwrap()
            .clone();
        decl.specifier_pos = SourcePos::new(99, 99);
        let mut graph2 = IrGraph::new();
        graph2.tokens = graph.tokens.clone();
        graph2.types = graph.types.clone();
        graph2.add_declaration(decl);
        assert!(run(&graph2).is_empty());
    }

    #[test]
    fn test_scan_is_idempotent() {
        let graph = west_const_unit();
        let first = run(&graph);
        let second = run(&graph);
        assert_eq!(first.diagnostics, second.diagnostics);
    }

    #[test]
    fn test_empty_stream_is_a_no_op() {
        let mut graph = IrGraph::new();
        let ty = graph.types.named("int");
        graph.add_declaration(Declaration {
            kind: DeclKind::GlobalVariable,
            name: "x".to_string(),
            ty,
            specifier_pos: SourcePos::new(1, 1),
            start_token: ccheck_core::ir::TokenId(0),
        });
        assert!(run(&graph).is_empty());
    }

    #[test]
    fn test_anchor_on_start_token_itself() {
        // Declaration whose own token sits at the specifier position.
        let mut graph = IrGraph::new();
        let tok = graph.tokens.push("const", 3, 1);
        let ty = graph.types.named("int");
        graph.add_declaration(Declaration {
            kind: DeclKind::LocalVariable,
            name: "x".to_string(),
            ty,
            specifier_pos: SourcePos::new(3, 1),
            start_token: tok,
        });
        assert_eq!(run(&graph).len(), 1);
    }
}
