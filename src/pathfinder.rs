use grid_util::point::Point;
use log::info;
use thiserror::Error;

use crate::astar::astar;
use crate::obstacle_grid::{CellState, ObstacleGrid};

/// Typed failures of [PathFinder::find_path]. An unreachable goal is not a
/// failure; it is reported as an empty path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("coordinate {0} is out of bounds")]
    OutOfBounds(Point),

    #[error("cell {0} is blocked")]
    Blocked(Point),
}

/// Shortest-path search over an [ObstacleGrid]: A* on the 4-connected grid
/// graph with unit step cost and the Manhattan distance as heuristic, which
/// is admissible and consistent on such a grid and therefore yields optimal
/// paths.
#[derive(Clone, Debug, Default)]
pub struct PathFinder;

impl PathFinder {
    pub fn new() -> PathFinder {
        PathFinder
    }

    /// Computes a shortest path from start to goal inclusive.
    ///
    /// Returns the path as an ordered sequence of coordinates (length 1
    /// exactly when start equals goal), or an empty vector if the goal is
    /// unreachable through open cells. Fails if start or goal lies outside
    /// the grid or on a blocked cell. Every successful result, including the
    /// empty one, is remembered as the grid's last path.
    ///
    /// The obstacle layout is never modified; the mutable borrow only
    /// refreshes the component cache and records the result. Repeated calls
    /// on an unchanged grid return identical paths.
    pub fn find_path(
        &self,
        grid: &mut ObstacleGrid,
        start: Point,
        goal: Point,
    ) -> Result<Vec<Point>, PathError> {
        for p in [start, goal] {
            match grid.get_cell(p.x, p.y) {
                None => return Err(PathError::OutOfBounds(p)),
                Some(CellState::Blocked) => return Err(PathError::Blocked(p)),
                Some(CellState::Open) => {}
            }
        }
        grid.update();
        // Check if start and goal are on the same connected component.
        if grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            grid.record_path(Vec::new());
            return Ok(Vec::new());
        }
        let result = astar(
            &start,
            |node| grid.pathfinding_neighborhood(node),
            |node| manhattan_distance(node, &goal),
            |node| *node == goal,
        );
        let path = result.map(|(v, _c)| v).unwrap_or_default();
        grid.record_path(path.clone());
        Ok(path)
    }
}

fn manhattan_distance(a: &Point, b: &Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
