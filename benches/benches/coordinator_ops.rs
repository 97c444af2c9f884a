// Copyright 2026 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use wayfind_coordinator::{CoordinatorId, CoordinatorTree};
use wayfind_flow::{Flow, Request, Screen};

#[derive(Clone, Debug, PartialEq)]
struct Page(u32);

impl Screen for Page {
    type Id = u32;
    fn id(&self) -> u32 {
        self.0
    }
}

fn gen_push_flow(n: usize) -> Flow<Page> {
    (0..n).map(|i| Request::push(Page(i as u32))).collect()
}

fn gen_mixed_flow(n: usize) -> Flow<Page> {
    let mut flow = Flow::new();
    for i in 0..n {
        if i == n / 2 {
            flow.push(Request::sheet(Page(i as u32)));
        } else {
            flow.push(Request::push(Page(i as u32)));
        }
    }
    flow
}

/// A chain of coordinators, each hosting the previous overlay's content, with
/// `stack` pushes per level.
fn gen_deep_tree(depth: usize, stack: usize) -> (CoordinatorTree<Page>, CoordinatorId) {
    let mut tree = CoordinatorTree::new();
    let root = tree.insert_root();
    let mut cur = root;
    for level in 0..depth {
        for i in 0..stack {
            tree.navigate_to(cur, Page((level * stack + i) as u32));
        }
        if level + 1 < depth {
            tree.navigate(cur, Request::sheet(Page(u32::MAX - level as u32)), None);
            cur = tree.next_coordinator(cur, None);
        }
    }
    tree.settle();
    (tree, cur)
}

fn bench_flow_partitioning(c: &mut Criterion) {
    let mut group = c.benchmark_group("flow_partitioning");
    for &n in &[8_usize, 64, 512] {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("all_push/{n}"), |b| {
            b.iter_batched(
                || {
                    let mut tree = CoordinatorTree::new();
                    let root = tree.insert_root();
                    (tree, root, gen_push_flow(n))
                },
                |(mut tree, root, flow)| {
                    tree.navigate_flow(root, flow, None);
                    black_box(tree.stack(root).len())
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("mixed/{n}"), |b| {
            b.iter_batched(
                || {
                    let mut tree = CoordinatorTree::new();
                    let root = tree.insert_root();
                    (tree, root, gen_mixed_flow(n))
                },
                |(mut tree, root, flow)| {
                    tree.navigate_flow(root, flow, None);
                    black_box(tree.sheet(root).is_some())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_unwind(c: &mut Criterion) {
    let mut group = c.benchmark_group("unwind");
    for &depth in &[4_usize, 16, 64] {
        group.bench_function(format!("unwind_to_root/depth_{depth}"), |b| {
            b.iter_batched(
                || gen_deep_tree(depth, 8),
                |(mut tree, leaf)| {
                    tree.unwind_to_root(leaf, None);
                    tree.settle();
                    black_box(tree.is_settled())
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("unwind_to_bottom/depth_{depth}"), |b| {
            b.iter_batched(
                || gen_deep_tree(depth, 8),
                |(mut tree, leaf)| {
                    tree.unwind_to(leaf, Page(0), None);
                    tree.settle();
                    black_box(tree.is_settled())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_pop_to(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop_to");
    for &n in &[16_usize, 256] {
        group.bench_function(format!("middle/{n}"), |b| {
            b.iter_batched(
                || {
                    let mut tree = CoordinatorTree::new();
                    let root = tree.insert_root();
                    for i in 0..n {
                        tree.navigate_to(root, Page(i as u32));
                    }
                    (tree, root)
                },
                |(mut tree, root)| {
                    tree.pop_to_id(root, (n / 2) as u32, None);
                    black_box(tree.stack(root).len())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flow_partitioning, bench_unwind, bench_pop_to);
criterion_main!(benches);
