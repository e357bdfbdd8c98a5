//! Document generation benchmarks
//!
//! Layout alone, then the full layout + PDF pass, per generator.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use harbor_layout::{LayoutConfig, LayoutEngine};
use harbor_template_dsl::prelude::StyleRegistry;
use safe_harbor::DocumentKind;
use safe_harbor::documents::{ai_kit, evidence_ledger, impl_guide, policy_pack, roadmap, staff_guide};
use std::hint::black_box;

fn bench_layout(c: &mut Criterion) {
    let styles = StyleRegistry::standard();
    let engine = LayoutEngine::new(LayoutConfig::default());
    let documents = [
        ("policy_pack", policy_pack::document(&styles)),
        ("impl_guide", impl_guide::document(&styles)),
        ("staff_guide", staff_guide::document(&styles)),
        ("roadmap", roadmap::document(&styles)),
        ("ai_kit", ai_kit::document(&styles)),
    ];

    let mut group = c.benchmark_group("layout");
    for (name, document) in &documents {
        group.bench_with_input(BenchmarkId::from_parameter(name), document, |b, document| {
            b.iter(|| engine.paginate(black_box(document)))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(20);
    for kind in DocumentKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind.file_name()), &kind, |b, kind| {
            b.iter(|| kind.render())
        });
    }
    group.finish();
}

fn bench_ledger_model(c: &mut Criterion) {
    c.bench_function("ledger_model", |b| b.iter(evidence_ledger::workbook));
}

criterion_group!(benches, bench_layout, bench_render, bench_ledger_model);
criterion_main!(benches);
