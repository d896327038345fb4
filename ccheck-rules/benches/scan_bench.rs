//! Benchmarks the reverse token scan over a long stream.

use criterion::{criterion_group, criterion_main, Criterion};

use ccheck_core::diagnostics::VecSink;
use ccheck_core::ir::{DeclKind, Declaration, IrGraph, SourcePos, TokenId};
use ccheck_rules::{Rule, TypeQualifierPosition};

fn build_unit(token_count: usize) -> IrGraph {
    let mut graph = IrGraph::new();
    graph.tokens.push("const", 1, 1);
    for i in 1..token_count {
        graph.tokens.push("tok", 1, (i as u32) + 1);
    }
    let ty = graph.types.named("int");
    graph.add_declaration(Declaration {
        kind: DeclKind::LocalVariable,
        name: "x".to_string(),
        ty,
        specifier_pos: SourcePos::new(1, 1),
        start_token: TokenId((token_count - 1) as u32),
    });
    graph
}

fn qualifier_scan(c: &mut Criterion) {
    let graph = build_unit(10_000);
    let rule = TypeQualifierPosition::new();
    c.bench_function("qualifier_scan_10k_tokens", |b| {
        b.iter(|| {
            let mut sink = VecSink::new();
            rule.execute(&graph, &mut sink);
            sink.len()
        })
    });
}

criterion_group!(benches, qualifier_scan);
criterion_main!(benches);
