use grid_maze::{CellState, ObstacleGrid, PathFinder};
use grid_util::point::Point;

// In this example a path is found on a 5x5 grid with shape
//  _____
// |S    |
// | ### |
// |   # |
// |   # |
// |    G|
//  _____
// where
// - # marks a painted obstacle
// - S marks the start
// - G marks the goal
//
// Cells have a 4-neighborhood

fn main() {
    let mut grid = ObstacleGrid::new(5, 5);
    for x in 1..4 {
        grid.set_cell(x, 1, CellState::Blocked);
    }
    grid.set_cell(3, 2, CellState::Blocked);
    grid.set_cell(3, 3, CellState::Blocked);
    grid.set_start(0, 0);
    grid.set_goal(4, 4);
    let finder = PathFinder::new();
    let path = finder
        .find_path(&mut grid, Point::new(0, 0), Point::new(4, 4))
        .unwrap();
    println!("{}", grid);
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
}
