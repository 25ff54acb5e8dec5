//! Benchmark for the molt codemod linter.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use molt::{fix, Linter};

fn bench_lint_small(c: &mut Criterion) {
    let source = r#"
import { EmptyStatePrimary } from '@patternfly/react-core';
import { Table } from '@patternfly/react-table';

export const Empty = () => (
  <EmptyStatePrimary>
    <Table hasSelectableRowCaption />
  </EmptyStatePrimary>
);
"#;

    let linter = Linter::new();

    let mut group = c.benchmark_group("lint");
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("lint_small", |b| {
        b.iter(|| linter.lint(black_box(source), "bench.tsx"))
    });

    group.finish();
}

fn bench_lint_clean_file(c: &mut Criterion) {
    // A file without target imports exercises the early-exit path
    let mut source = String::from("import { useState } from 'react';\n");
    for i in 0..200 {
        source.push_str(&format!(
            "export const Component{i} = () => <div id=\"c{i}\">{{useState()}}</div>;\n"
        ));
    }

    let linter = Linter::new();

    let mut group = c.benchmark_group("lint");
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("lint_clean", |b| {
        b.iter(|| linter.lint(black_box(&source), "bench.tsx"))
    });

    group.finish();
}

fn bench_fix_convergence(c: &mut Criterion) {
    // Many rename sites plus import maintenance, driven to the fixed point
    let mut source =
        String::from("import { EmptyStatePrimary, EmptyStateSecondaryActions } from '@patternfly/react-core';\n<>\n");
    for _ in 0..50 {
        source.push_str("<EmptyStatePrimary>a</EmptyStatePrimary>\n");
        source.push_str("<EmptyStateSecondaryActions>b</EmptyStateSecondaryActions>\n");
    }
    source.push_str("</>;\n");

    let linter = Linter::new();

    let mut group = c.benchmark_group("fix");
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("fix_renames", |b| {
        b.iter(|| fix(&linter, black_box(&source), "bench.tsx").unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lint_small,
    bench_lint_clean_file,
    bench_fix_convergence
);
criterion_main!(benches);
