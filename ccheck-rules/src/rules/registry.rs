//! Rule registry — owns the configured rules and runs them in order.

use rustc_hash::FxHashMap;
use tracing::debug_span;

use ccheck_core::config::CcheckConfig;
use ccheck_core::diagnostics::MessageSink;
use ccheck_core::errors::ConfigError;
use ccheck_core::ir::IrGraph;

use super::{Rule, TypeQualifierPosition, VariableNaming};

/// Holds the registered rules; execution order is registration order.
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
    by_name: FxHashMap<&'static str, usize>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with both style rules, configured from `config`.
    pub fn with_defaults(config: &CcheckConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        registry.register(Box::new(VariableNaming::new(&config.naming)?));
        registry.register(Box::new(TypeQualifierPosition::new()));
        Ok(registry)
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.by_name.insert(rule.metadata().name, self.rules.len());
        self.rules.push(rule);
    }

    /// Look up a registered rule by name.
    pub fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.by_name.get(name).map(|&i| self.rules[i].as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every registered rule over one translation unit.
    ///
    /// Rules share no state; any execution order yields the same findings.
    pub fn run_all(&self, graph: &IrGraph, sink: &mut dyn MessageSink) {
        for rule in &self.rules {
            let span = debug_span!("rule", name = rule.metadata().name);
            let _guard = span.enter();
            rule.execute(graph, sink);
        }
    }
}
