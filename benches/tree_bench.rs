//! Performance benchmarks

use bintree_layout::{BinaryTree, LayoutEngine, RecordingSink};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn complete(n: usize) -> BinaryTree<u64> {
    let elements: Vec<u64> = (0..=n as u64).collect();
    BinaryTree::from_complete(&elements, n).expect("array holds n + 1 cells")
}

fn benchmark_tree_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree");
    for n in [1_023usize, 65_535] {
        let elements: Vec<u64> = (0..=n as u64).collect();
        group.bench_with_input(BenchmarkId::new("from_complete", n), &n, |b, &n| {
            b.iter(|| BinaryTree::from_complete(black_box(&elements), n))
        });

        let tree = complete(n);
        group.bench_with_input(BenchmarkId::new("clone", n), &tree, |b, tree| {
            b.iter(|| black_box(tree.clone()))
        });
        group.bench_with_input(BenchmarkId::new("to_flat_array", n), &tree, |b, tree| {
            let mut flat = vec![0u64; n + 1];
            b.iter(|| tree.to_flat_array(black_box(&mut flat), n))
        });
    }
    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let tree = complete(1_023);
    let engine = LayoutEngine::with_defaults();
    c.bench_function("render_1023", |b| {
        b.iter(|| {
            let mut sink = RecordingSink::new();
            engine.render(black_box(&tree), &mut sink, "");
            black_box(sink.stroke_count())
        })
    });
}

criterion_group!(benches, benchmark_tree_ops, benchmark_render);
criterion_main!(benches);
