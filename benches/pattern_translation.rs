use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use vim_history_search::{PathMatcher, translate};

const SEARCHES: &[&str] = &["foo", "^foo$", "\\^foo\\$", "/usr/share/", "~/notes.md$", "*.rs"];

fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate");

    for search in SEARCHES {
        group.bench_with_input(BenchmarkId::from_parameter(search), search, |b, s| {
            b.iter(|| translate(black_box(s)));
        });
    }

    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let paths: Vec<String> =
        (0..1_000).map(|i| format!("/home/me/projects/p{}/src/file_{}.rs", i % 13, i)).collect();

    let mut group = c.benchmark_group("path_matcher");
    for search in ["file_5", "^/home/me/projects/p7/", ".rs$"] {
        let matcher = PathMatcher::new(search).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(search), &matcher, |b, m| {
            b.iter(|| paths.iter().filter(|p| m.is_match(black_box(p))).count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_translate, bench_match);
criterion_main!(benches);
