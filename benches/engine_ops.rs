use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use term_2048::engine::{line, Direction, Grid, History, Slide, Spawner};

fn corpus() -> Vec<Grid> {
    let mut spawner = Spawner::seeded(42);
    let mut boards = Vec::new();
    // Empty and two-tile starts
    boards.push(Grid::EMPTY);
    let mut g = Grid::EMPTY;
    spawner.spawn(&mut g);
    spawner.spawn(&mut g);
    boards.push(g);
    // Derive a variety of densities deterministically
    let seq = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
    for i in 0..20 {
        if g.apply_move(seq[i % seq.len()]) {
            spawner.spawn(&mut g);
        }
        boards.push(g);
    }
    boards
}

fn bench_line(c: &mut Criterion) {
    let lines: Vec<[u32; 4]> = corpus().iter().flat_map(|g| *g.rows()).collect();
    c.bench_function("line/transform_left", |bch| {
        bch.iter(|| {
            let mut acc = 0u32;
            for &l in &lines { acc ^= line::transform(l, Slide::Left)[0]; }
            black_box(acc)
        })
    });
}

fn bench_shift(c: &mut Criterion) {
    let boards = corpus();
    for dir in Direction::ALL {
        c.bench_function(&format!("shift/{dir:?}").to_lowercase(), |bch| {
            bch.iter(|| {
                let mut acc = 0u64;
                for &g in &boards { acc ^= g.shift(dir).score(); }
                black_box(acc)
            })
        });
    }
}

fn bench_spawn_and_undo(c: &mut Criterion) {
    c.bench_function("spawner/fill_board", |bch| {
        bch.iter_batched(
            || (Grid::EMPTY, Spawner::seeded(7)),
            |(mut g, mut spawner)| {
                for _ in 0..16 { spawner.spawn(&mut g); }
                black_box(g)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("history/push_pop", |bch| {
        let boards = corpus();
        bch.iter(|| {
            let mut h = History::new();
            for &g in &boards { h.push(g); }
            while let Some(g) = h.pop() { black_box(g); }
        })
    });
}

criterion_group!(engine_ops, bench_line, bench_shift, bench_spawn_and_undo);
criterion_main!(engine_ops);
