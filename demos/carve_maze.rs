use grid_maze::{MazeGenerator, ObstacleGrid, PathFinder};
use grid_util::point::Point;
use rand::prelude::*;

// Carves a seeded 25x25 perfect maze and solves it corner to corner. The
// same seed always reproduces the same maze.

fn main() {
    let mut grid = ObstacleGrid::new(25, 25);
    MazeGenerator::new().generate(&mut grid, &mut StdRng::seed_from_u64(2024));
    let finder = PathFinder::new();
    let path = finder
        .find_path(&mut grid, Point::new(0, 0), Point::new(24, 24))
        .unwrap();
    println!("Solved in {} steps:", path.len());
    println!("{}", grid);
}
