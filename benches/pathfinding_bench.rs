use criterion::{criterion_group, criterion_main, Criterion};
use grid_maze::{MazeGenerator, ObstacleGrid, PathFinder};
use grid_util::point::Point;
use rand::prelude::*;
use std::hint::black_box;

fn maze_bench(c: &mut Criterion) {
    const N: usize = 101;
    let generator = MazeGenerator::new();
    let finder = PathFinder::new();
    for seed in [0, 1] {
        let mut grid = ObstacleGrid::new(N, N);
        generator.generate(&mut grid, &mut StdRng::seed_from_u64(seed));
        let start = Point::new(0, 0);
        let end = Point::new(N as i32 - 1, N as i32 - 1);

        c.bench_function(format!("maze {}x{}, seed {}", N, N, seed).as_str(), |b| {
            b.iter(|| black_box(finder.find_path(&mut grid, start, end)))
        });
    }
}

fn open_field_bench(c: &mut Criterion) {
    const N: usize = 101;
    let finder = PathFinder::new();
    let mut grid = ObstacleGrid::new(N, N);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);

    c.bench_function(format!("open field {}x{}", N, N).as_str(), |b| {
        b.iter(|| black_box(finder.find_path(&mut grid, start, end)))
    });
}

criterion_group!(benches, maze_bench, open_field_bench);
criterion_main!(benches);
