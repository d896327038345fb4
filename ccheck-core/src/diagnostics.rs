//! Diagnostic emission — the sole output channel of a rule run.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::ir::SourcePos;

/// One style finding, emitted fire-and-forget to a `MessageSink`.
///
/// The final text is rendered host-side by substituting
/// `message_arguments` into the rule's message template for `key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Name of the rule that produced the finding.
    pub rule: String,
    /// Diagnostic key, resolved against the rule's message templates.
    pub key: String,
    /// Position of the anchor node or token.
    pub pos: SourcePos,
    /// Human-readable label of the anchor entity.
    pub entity: String,
    pub message_arguments: SmallVec<[String; 2]>,
}

/// Where rules deliver findings.
///
/// Emission is unidirectional; implementations never call back into the
/// rule and rules never read emitted diagnostics back.
pub trait MessageSink {
    fn add_message(&mut self, diagnostic: Diagnostic);
}

/// In-memory sink used by hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct VecSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Serialize the collected diagnostics as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.diagnostics)
    }
}

impl MessageSink for VecSink {
    fn add_message(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Substitute each `{}` placeholder in `template` with the next argument.
///
/// Placeholders beyond the argument list render literally; surplus
/// arguments are ignored.
pub fn render_message(template: &str, arguments: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = arguments.iter();
    let mut rest = template;
    while let Some(idx) = rest.find("{}") {
        out.push_str(&rest[..idx]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("{}"),
        }
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    out
}
