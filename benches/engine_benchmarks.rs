//! Benchmarks for move generation, evaluation, and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use glasschess::eval::{evaluate, evaluate_breakdown};
use glasschess::search::search_at_depth;
use glasschess::{Board, EngineConfig};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let startpos = Board::new();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let kiwipete = Board::from_fen(KIWIPETE).unwrap();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let middlegame = Board::from_fen(MIDDLEGAME).unwrap();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_moves()))
    });

    let kiwipete = Board::from_fen(KIWIPETE).unwrap();
    group.bench_function("kiwipete", |b| b.iter(|| black_box(kiwipete.legal_moves())));

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let config = EngineConfig::default();

    let kiwipete = Board::from_fen(KIWIPETE).unwrap();
    group.bench_function("total", |b| {
        b.iter(|| evaluate(black_box(&kiwipete), &config))
    });
    group.bench_function("breakdown", |b| {
        b.iter(|| evaluate_breakdown(black_box(&kiwipete), &config))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let config = EngineConfig::default();

    let startpos = Board::new();
    for depth in [2, 3, 4] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| search_at_depth(black_box(&startpos), depth, &config))
        });
    }

    let middlegame = Board::from_fen(MIDDLEGAME).unwrap();
    for depth in [2, 3] {
        group.bench_with_input(
            BenchmarkId::new("middlegame", depth),
            &depth,
            |b, &depth| b.iter(|| search_at_depth(black_box(&middlegame), depth, &config)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_evaluate,
    bench_search
);
criterion_main!(benches);
