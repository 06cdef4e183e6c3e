use grid_maze::{CellState, MazeGenerator, ObstacleGrid, PathError, PathFinder};
use grid_util::point::Point;
use rand::prelude::*;

fn manhattan_distance(a: &Point, b: &Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// 5x5 empty grid, corner to corner: the optimal path has Manhattan length
/// plus one cells and makes Manhattan progress towards the goal on every
/// step.
#[test]
fn empty_grid_corner_to_corner() {
    let mut grid = ObstacleGrid::new(5, 5);
    let finder = PathFinder::new();
    let start = Point::new(0, 0);
    let goal = Point::new(4, 4);
    let path = finder.find_path(&mut grid, start, goal).unwrap();
    assert_eq!(path.len(), 9);
    for w in path.windows(2) {
        assert_eq!(manhattan_distance(&w[0], &w[1]), 1);
        assert!(manhattan_distance(&w[1], &goal) < manhattan_distance(&w[0], &goal));
    }
}

/// A solid blocked row separating the two halves: the result is the empty
/// path, not an error.
#[test]
fn solid_row_separates_the_grid() {
    let mut grid = ObstacleGrid::new(7, 7);
    for x in 0..7 {
        grid.set_cell(x, 3, CellState::Blocked);
    }
    grid.set_start(0, 0);
    grid.set_goal(6, 6);
    let finder = PathFinder::new();
    let path = finder
        .find_path(&mut grid, Point::new(0, 0), Point::new(6, 6))
        .unwrap();
    assert!(path.is_empty());
    assert_eq!(grid.last_path(), Some(&[][..]));
}

#[test]
fn typed_failures() {
    let mut grid = ObstacleGrid::new(4, 4);
    grid.set_cell(1, 1, CellState::Blocked);
    let finder = PathFinder::new();
    assert_eq!(
        finder.find_path(&mut grid, Point::new(-1, 0), Point::new(3, 3)),
        Err(PathError::OutOfBounds(Point::new(-1, 0)))
    );
    assert_eq!(
        finder.find_path(&mut grid, Point::new(0, 0), Point::new(1, 1)),
        Err(PathError::Blocked(Point::new(1, 1)))
    );
}

/// Painting a maze-like obstacle course and solving it repeatedly returns
/// the identical path every time.
#[test]
fn repeated_solves_are_stable() {
    let mut grid = ObstacleGrid::new(25, 25);
    for y in 0..20 {
        grid.set_cell(6, y, CellState::Blocked);
    }
    for y in 5..25 {
        grid.set_cell(12, y, CellState::Blocked);
    }
    for y in 0..20 {
        grid.set_cell(18, y, CellState::Blocked);
    }
    let finder = PathFinder::new();
    let start = Point::new(0, 0);
    let goal = Point::new(24, 0);
    let first = finder.find_path(&mut grid, start, goal).unwrap();
    assert!(!first.is_empty());
    for _ in 0..3 {
        assert_eq!(finder.find_path(&mut grid, start, goal).unwrap(), first);
    }
}

/// Generating a maze and then pathfinding between two rooms always succeeds:
/// a perfect maze connects every pair of rooms.
#[test]
fn maze_rooms_are_always_connected() {
    let generator = MazeGenerator::new();
    let finder = PathFinder::new();
    for seed in [1, 17, 99] {
        let mut grid = ObstacleGrid::new(25, 25);
        generator.generate(&mut grid, &mut StdRng::seed_from_u64(seed));
        grid.clear_path();
        let path = finder
            .find_path(&mut grid, Point::new(0, 0), Point::new(24, 24))
            .unwrap();
        assert!(!path.is_empty());
        for p in &path {
            assert_eq!(grid.get_cell(p.x, p.y), Some(CellState::Open));
        }
    }
}

/// The same seed reproduces the same maze on the reference 25x25 size.
#[test]
fn seeded_maze_reproduction() {
    let generator = MazeGenerator::new();
    let mut first = ObstacleGrid::new(25, 25);
    let mut second = ObstacleGrid::new(25, 25);
    generator.generate(&mut first, &mut StdRng::seed_from_u64(1234));
    generator.generate(&mut second, &mut StdRng::seed_from_u64(1234));
    assert_eq!(first.to_string(), second.to_string());
}
