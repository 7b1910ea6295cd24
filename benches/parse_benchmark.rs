//! Benchmarks for mdpress classification performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks classify a synthetic survey report.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mdpress::parser::MarkdownParser;
use mdpress::InlineFormatter;

/// Build a synthetic report with the given number of sections.
fn create_test_report(section_count: usize) -> String {
    let mut report = String::new();
    report.push_str("# Synthetic Survey Report\n## Benchmark Edition\n\n");

    for i in 0..section_count {
        report.push_str(&format!("## Section {}\n", i + 1));
        report.push_str("This section covers **key** findings from the *latest* wave.\n");
        report.push_str("- First `metric` moved up\n");
        report.push_str("- Second metric held [steady](trends.md)\n");
        report.push_str("1. Collect\n2. Clean\n3. Model\n");
        report.push_str("| Metric | Mean | SD |\n|---|---|---|\n");
        for row in 0..5 {
            report.push_str(&format!("| m{} | {}.1 | 0.{} |\n", row, row, row + 1));
        }
        report.push_str("![Figure](fig.png)\n\n");
    }

    report
}

fn bench_classify(c: &mut Criterion) {
    let small = create_test_report(5);
    let large = create_test_report(50);
    let parser = MarkdownParser::new();

    c.bench_function("classify_5_sections", |b| {
        b.iter(|| parser.parse(black_box(&small)))
    });

    c.bench_function("classify_50_sections", |b| {
        b.iter(|| parser.parse(black_box(&large)))
    });
}

fn bench_inline_formatter(c: &mut Criterion) {
    let formatter = InlineFormatter::new();
    let line = "scores were **significantly** higher for *tenured* members; see `table 3` and [appendix](a.md)";

    c.bench_function("format_inline", |b| {
        b.iter(|| formatter.format(black_box(line)))
    });
}

criterion_group!(benches, bench_classify, bench_inline_formatter);
criterion_main!(benches);
