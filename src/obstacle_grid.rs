use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

/// State of a single grid cell. There is no third "path marker" state: the
/// computed path is tracked separately so path rendering never competes with
/// obstacle semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Open,
    Blocked,
}

impl CellState {
    pub fn is_open(self) -> bool {
        self == CellState::Open
    }
    pub fn is_blocked(self) -> bool {
        self == CellState::Blocked
    }
}

fn cell_state(blocked: bool) -> CellState {
    if blocked {
        CellState::Blocked
    } else {
        CellState::Open
    }
}

/// [ObstacleGrid] is the shared substrate the path finder and maze generator
/// operate on. It owns the raw [bool] cell values in a [BoolGrid] ([true]
/// meaning blocked), the optional start/goal markers, the last computed path
/// and a [UnionFind] structure tracking 4-connected components, which is used
/// to answer reachability queries without flood-filling.
#[derive(Clone, Debug)]
pub struct ObstacleGrid {
    grid: BoolGrid,
    components: UnionFind<usize>,
    components_dirty: bool,
    start: Option<Point>,
    goal: Option<Point>,
    last_path: Option<Vec<Point>>,
}

impl ObstacleGrid {
    /// Creates a grid of the given dimensions with every cell [CellState::Open]
    /// and no markers or remembered path.
    pub fn new(width: usize, height: usize) -> ObstacleGrid {
        ObstacleGrid {
            grid: BoolGrid::new(width, height, false),
            components: UnionFind::new(width * height),
            // The fresh UnionFind is all singletons, which does not describe
            // an all-open grid; regenerate on first use.
            components_dirty: true,
            start: None,
            goal: None,
            last_path: None,
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width
    }
    pub fn height(&self) -> usize {
        self.grid.height
    }

    /// The start marker, if one has been set.
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    /// The goal marker, if one has been set.
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// The most recently computed path. [None] means no path has been computed
    /// yet; an empty slice is a genuine "no path exists" result. The remembered
    /// path is not invalidated by later edits: it goes stale silently and the
    /// host decides when to drop it.
    pub fn last_path(&self) -> Option<&[Point]> {
        self.last_path.as_deref()
    }

    /// Drops the remembered path, typically after regenerating the maze.
    pub fn clear_path(&mut self) {
        self.last_path = None;
    }

    pub(crate) fn record_path(&mut self, path: Vec<Point>) {
        self.last_path = Some(path);
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.grid.index_in_bounds(x as usize, y as usize)
    }

    /// Whether a position can be entered: in bounds and not blocked.
    pub fn can_move_to(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && !self.grid.get(pos.x as usize, pos.y as usize)
    }

    /// The cell state at (x, y), or [None] if the coordinate lies outside the
    /// grid.
    pub fn get_cell(&self, x: i32, y: i32) -> Option<CellState> {
        if self.in_bounds(x, y) {
            Some(cell_state(self.grid.get(x as usize, y as usize)))
        } else {
            None
        }
    }

    /// Sets the cell state at (x, y). Out-of-bounds writes are silently
    /// ignored: interactive pointer input routinely produces coordinates just
    /// past the grid edge and must not fail. Joins newly connected components
    /// and flags the components as dirty if blocking (potentially) breaks a
    /// component apart.
    pub fn set_cell(&mut self, x: i32, y: i32, state: CellState) {
        if !self.in_bounds(x, y) {
            return;
        }
        let blocked = state.is_blocked();
        if self.grid.get(x as usize, y as usize) != blocked {
            if blocked {
                self.components_dirty = true;
            } else {
                let ix = self.grid.get_ix(x as usize, y as usize);
                for p in self.get_neighbours(Point::new(x, y)) {
                    self.components
                        .union(ix, self.grid.get_ix(p.x as usize, p.y as usize));
                }
            }
        }
        self.grid.set(x as usize, y as usize, blocked);
    }

    /// Records the start marker and forces that cell open. Out of bounds is a
    /// silent no-op, like [set_cell](Self::set_cell).
    pub fn set_start(&mut self, x: i32, y: i32) {
        if self.in_bounds(x, y) {
            self.set_cell(x, y, CellState::Open);
            self.start = Some(Point::new(x, y));
        }
    }

    /// Records the goal marker and forces that cell open. Out of bounds is a
    /// silent no-op, like [set_cell](Self::set_cell).
    pub fn set_goal(&mut self, x: i32, y: i32) {
        if self.in_bounds(x, y) {
            self.set_cell(x, y, CellState::Open);
            self.goal = Some(Point::new(x, y));
        }
    }

    /// Resets every cell to [CellState::Open] and clears the start and goal
    /// markers and the remembered path.
    pub fn clear(&mut self) {
        let (w, h) = (self.grid.width, self.grid.height);
        self.grid = BoolGrid::new(w, h, false);
        self.components = UnionFind::new(w * h);
        self.components_dirty = true;
        self.start = None;
        self.goal = None;
        self.last_path = None;
    }

    /// The open von Neumann neighbours of a point.
    fn get_neighbours(&self, point: Point) -> Vec<Point> {
        neumann_neighborhood(point)
            .into_iter()
            .filter(|p| self.can_move_to(*p))
            .collect::<Vec<Point>>()
    }

    pub(crate) fn pathfinding_neighborhood(&self, pos: &Point) -> Vec<(Point, i32)> {
        neumann_neighborhood(*pos)
            .into_iter()
            .filter(|&position| self.can_move_to(position))
            .map(|p| (p, 1))
            .collect::<Vec<_>>()
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components
            .find(self.grid.get_ix(point.x as usize, point.y as usize))
    }

    /// Checks if two points are on the same component.
    pub fn reachable(&self, a: &Point, b: &Point) -> bool {
        !self.unreachable(a, b)
    }

    /// Checks if two points are not on the same component.
    pub fn unreachable(&self, a: &Point, b: &Point) -> bool {
        if self.in_bounds(a.x, a.y) && self.in_bounds(b.x, b.y) {
            let a_ix = self.grid.get_ix(a.x as usize, a.y as usize);
            let b_ix = self.grid.get_ix(b.x as usize, b.y as usize);
            !self.components.equiv(a_ix, b_ix)
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up grid neighbours to
    /// the same components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                if !self.grid.get(x, y) {
                    let parent_ix = self.grid.get_ix(x, y);
                    let point = Point::new(x as i32, y as i32);
                    // Linking right and down covers every 4-connected edge once.
                    let neighbours = [
                        Point::new(point.x + 1, point.y),
                        Point::new(point.x, point.y + 1),
                    ]
                    .into_iter()
                    .filter(|p| self.can_move_to(*p))
                    .map(|p| self.grid.get_ix(p.x as usize, p.y as usize))
                    .collect::<Vec<usize>>();
                    for ix in neighbours {
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

/// The four cardinal neighbours of a point, without bounds filtering.
pub(crate) fn neumann_neighborhood(point: Point) -> [Point; 4] {
    [
        Point::new(point.x, point.y - 1),
        Point::new(point.x, point.y + 1),
        Point::new(point.x - 1, point.y),
        Point::new(point.x + 1, point.y),
    ]
}

impl fmt::Display for ObstacleGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                let p = Point::new(x as i32, y as i32);
                let c = if self.start == Some(p) {
                    'S'
                } else if self.goal == Some(p) {
                    'G'
                } else if self.grid.get(x, y) {
                    '#'
                } else if self.last_path.as_ref().is_some_and(|path| path.contains(&p)) {
                    'o'
                } else {
                    '.'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
