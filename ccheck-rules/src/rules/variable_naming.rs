//! Variable naming rule — const names upper snake case, non-const names
//! lower camel case.

use regex::Regex;
use smallvec::smallvec;
use tracing::debug;

use ccheck_core::config::NamingConfig;
use ccheck_core::diagnostics::{Diagnostic, MessageSink};
use ccheck_core::errors::ConfigError;
use ccheck_core::ir::{DeclKind, IrGraph};
use ccheck_core::unparse;

use super::metadata::{RuleMetadata, Severity, RULE_GROUP};
use super::Rule;

static METADATA: RuleMetadata = RuleMetadata {
    name: "VariableNaming",
    group: RULE_GROUP,
    severity: Severity::Required,
    messages: &[
        (
            "const_naming",
            "const variable name does not match the pattern '{}'.",
        ),
        (
            "nonconst_naming",
            "Variable name does not match the pattern '{}'.",
        ),
    ],
    description: Some("Variable naming convention."),
};

const RELEVANT_KINDS: &[DeclKind] = &[DeclKind::GlobalVariable, DeclKind::LocalVariable];

/// Checks variable identifiers against the configured naming patterns.
///
/// A declaration whose type resolves (through typedef layers) to a
/// const-qualified definition is checked against the const pattern;
/// everything else, including unresolvable types, against the non-const
/// pattern. Patterns are compiled once at construction.
#[derive(Debug)]
pub struct VariableNaming {
    const_re: Regex,
    nonconst_re: Regex,
    const_source: String,
    nonconst_source: String,
}

impl VariableNaming {
    /// Compile the configured patterns. Fails fast on an invalid regex.
    pub fn new(config: &NamingConfig) -> Result<Self, ConfigError> {
        let const_source = config.effective_const_pattern().to_string();
        let nonconst_source = config.effective_nonconst_pattern().to_string();
        Ok(Self {
            const_re: compile_anchored("naming.const_pattern", &const_source)?,
            nonconst_re: compile_anchored("naming.nonconst_pattern", &nonconst_source)?,
            const_source,
            nonconst_source,
        })
    }
}

/// Wrap the pattern so a match must cover the whole identifier, then compile.
fn compile_anchored(field: &str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|e| ConfigError::InvalidPattern {
        field: field.to_string(),
        message: e.to_string(),
    })
}

impl Rule for VariableNaming {
    fn metadata(&self) -> &RuleMetadata {
        &METADATA
    }

    fn execute(&self, graph: &IrGraph, sink: &mut dyn MessageSink) {
        for decl in graph.declarations(RELEVANT_KINDS) {
            let is_const = graph.types.is_const_qualified(decl.ty);
            let (re, key, pattern) = if is_const {
                (&self.const_re, "const_naming", self.const_source.as_str())
            } else {
                (
                    &self.nonconst_re,
                    "nonconst_naming",
                    self.nonconst_source.as_str(),
                )
            };
            if !re.is_match(&decl.name) {
                debug!(name = %decl.name, key, "naming violation");
                let pos = graph
                    .tokens
                    .get(decl.start_token)
                    .map(|t| t.pos)
                    .unwrap_or(decl.specifier_pos);
                sink.add_message(Diagnostic {
                    rule: METADATA.name.to_string(),
                    key: key.to_string(),
                    pos,
                    entity: unparse::entity_label(decl),
                    message_arguments: smallvec![pattern.to_string()],
                });
            }
        }
    }
}
