use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sokoban_search::config::{Heuristic, Method, SearchConfig};
use sokoban_search::{LoadLevel, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_room(c: &mut Criterion) {
    // one box, walk around it
    bench_level(c, "levels/room.txt", &[Method::BreadthFirst, Method::IterativeDeepening], 100);
}

#[allow(unused)]
fn bench_two_boxes(c: &mut Criterion) {
    bench_level(
        c,
        "levels/two-boxes.txt",
        &[
            Method::BreadthFirst,
            Method::DepthFirst,
            Method::IterativeDeepening,
            Method::Greedy(Heuristic::Manhattan),
            Method::AStar(Heuristic::Manhattan),
            Method::AStar(Heuristic::LinearConflict),
        ],
        50,
    );
}

fn bench_level(c: &mut Criterion, level_path: &str, methods: &[Method], samples: usize) {
    let level = level_path.load_level().unwrap();
    let config = SearchConfig::default();

    let mut group = c.benchmark_group(level_path);
    group.sample_size(samples);
    for &method in methods {
        group.bench_function(method.to_string(), |b| {
            b.iter(|| level.solve(black_box(method), black_box(&config)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_room, bench_two_boxes);
criterion_main!(benches);
