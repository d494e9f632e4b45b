use std::collections::HashMap;

use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;

use pargenfs::core::Tree;
use pargenfs::{lift, Config};

/// Builds a balanced `branching`-ary tree `depth` levels deep and a cluster
/// that assigns every leaf a nonzero, slightly varying membership.
fn balanced_tree(branching: usize, depth: usize) -> (Tree, HashMap<String, f64>) {
    let mut tree = Tree::new("", "root");
    let mut cluster = HashMap::new();
    let mut frontier = vec![tree.root()];
    let mut counter = 0usize;

    for level in 0..depth {
        let mut next = Vec::with_capacity(frontier.len() * branching);
        for &parent in &frontier {
            for i in 0..branching {
                counter += 1;
                let name = format!("n{level}_{counter}");
                let child = tree.add_child(parent, (i + 1).to_string(), name.clone());
                next.push(child);
                if level == depth - 1 {
                    cluster.insert(name, 1.0 + (i % 3) as f64 * 0.1);
                }
            }
        }
        frontier = next;
    }

    (tree, cluster)
}

fn lift_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lift");
    group
        .significance_level(0.05)
        .measurement_time(std::time::Duration::new(10, 0));

    for &(branching, depth) in &[(4, 3), (4, 5), (8, 4)] {
        let config = Config::default();
        let bench_name = format!("branching-{branching}-depth-{depth}");

        group.bench_function(&bench_name, |b| {
            b.iter_with_large_drop(|| {
                let (mut tree, cluster) = balanced_tree(branching, depth);
                lift(&mut tree, &cluster, &config).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, lift_benchmark);
criterion_main!(benches);
