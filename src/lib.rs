//! # grid_maze
//!
//! An obstacle-grid toolkit: paint obstacles on a fixed-size grid, mark a
//! start and a goal, and compute a shortest obstacle-free path between them
//! with [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over the
//! 4-connected grid graph (Manhattan heuristic, unit step cost), or fill the
//! grid with a randomly generated
//! [perfect maze](https://en.wikipedia.org/wiki/Maze_generation_algorithm)
//! using randomized Prim carving. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! The crate is pure library code with no ambient state: everything operates
//! on an explicitly passed [ObstacleGrid], so a windowing or terminal host
//! only has to map input to grid mutations and read back cell states, the
//! markers and the last computed path for rendering.
mod astar;
pub mod maze;
pub mod obstacle_grid;
pub mod pathfinder;

pub use maze::MazeGenerator;
pub use obstacle_grid::{CellState, ObstacleGrid};
pub use pathfinder::{PathError, PathFinder};
