use grid_util::point::Point;
use log::info;
use rand::Rng;

use crate::obstacle_grid::{CellState, ObstacleGrid};

/// Overwrites a grid with a randomly generated perfect maze.
///
/// The maze is carved on the even-coordinate sublattice (the "rooms"), so
/// passages and the walls between them alternate cleanly: a randomized Prim
/// spanning tree is grown room by room, which guarantees exactly one simple
/// path between any two rooms and no cycles. Start, goal and the remembered
/// path are left untouched; the host clears stale markers after regenerating.
#[derive(Clone, Debug, Default)]
pub struct MazeGenerator;

/// A carving candidate: the wall cell between an already open room and the
/// still blocked room two steps away.
struct WallCandidate {
    wall: Point,
    next: Point,
}

impl MazeGenerator {
    pub fn new() -> MazeGenerator {
        MazeGenerator
    }

    /// Carves a maze using the given random number generator. A fixed seed
    /// reproduces the identical maze, which the host can rely on for
    /// shareable layouts.
    pub fn generate<R: Rng>(&self, grid: &mut ObstacleGrid, rng: &mut R) {
        let w = grid.width() as i32;
        let h = grid.height() as i32;
        for y in 0..h {
            for x in 0..w {
                grid.set_cell(x, y, CellState::Blocked);
            }
        }
        // Seed room: a uniformly random cell with both coordinates even.
        let seed = Point::new(
            2 * rng.gen_range(0..(w + 1) / 2),
            2 * rng.gen_range(0..(h + 1) / 2),
        );
        grid.set_cell(seed.x, seed.y, CellState::Open);
        let mut frontier: Vec<WallCandidate> = Vec::new();
        push_candidates(grid, seed, &mut frontier);
        let mut carved = 1;
        while !frontier.is_empty() {
            // The frontier is an unordered bag: swapping out a random index
            // gives O(1) removal.
            let ix = rng.gen_range(0..frontier.len());
            let candidate = frontier.swap_remove(ix);
            // The target room may have been opened through another wall since
            // the candidate was enqueued.
            if grid.get_cell(candidate.next.x, candidate.next.y) == Some(CellState::Blocked) {
                grid.set_cell(candidate.wall.x, candidate.wall.y, CellState::Open);
                grid.set_cell(candidate.next.x, candidate.next.y, CellState::Open);
                push_candidates(grid, candidate.next, &mut frontier);
                carved += 1;
            }
        }
        info!("Carved a maze with {} rooms from seed {}", carved, seed);
    }

    /// Carves a maze from entropy, for hosts that do not care about
    /// reproducibility.
    pub fn generate_random(&self, grid: &mut ObstacleGrid) {
        self.generate(grid, &mut rand::thread_rng());
    }
}

fn push_candidates(grid: &ObstacleGrid, room: Point, frontier: &mut Vec<WallCandidate>) {
    for (dx, dy) in [(0, -2), (0, 2), (-2, 0), (2, 0)] {
        let next = Point::new(room.x + dx, room.y + dy);
        if grid.get_cell(next.x, next.y) == Some(CellState::Blocked) {
            frontier.push(WallCandidate {
                wall: Point::new(room.x + dx / 2, room.y + dy / 2),
                next,
            });
        }
    }
}
