//! Static rule metadata — consumed by the host's message-formatting pipeline.

/// Severity classification of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Required,
    Advisory,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Advisory => "advisory",
        }
    }
}

/// A named group of rules, for host-side grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleGroup {
    pub name: &'static str,
    pub title: &'static str,
}

/// The group both style rules register under.
pub const RULE_GROUP: RuleGroup = RuleGroup {
    name: "stylechecks",
    title: "Style check rules",
};

/// Metadata a rule declares to integrate with the host: a unique name,
/// severity, message templates keyed by diagnostic key, and an optional
/// description.
#[derive(Debug, Clone, Copy)]
pub struct RuleMetadata {
    pub name: &'static str,
    pub group: RuleGroup,
    pub severity: Severity,
    /// (diagnostic key, message template) pairs; templates use `{}`
    /// placeholders filled from a diagnostic's message arguments.
    pub messages: &'static [(&'static str, &'static str)],
    pub description: Option<&'static str>,
}

impl RuleMetadata {
    /// Template for a diagnostic key, if the rule declares it.
    pub fn template_for(&self, key: &str) -> Option<&'static str> {
        self.messages
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, template)| *template)
    }
}
