//! # grid_search
//!
//! Step-by-step pathfinding on a 4-connected grid with walls. Implements
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm),
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the Manhattan heuristic,
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) and
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search). Every search can be
//! advanced one visited cell at a time, which makes the traversal order observable (for example to
//! animate it) while the outcome stays fully deterministic. Moves are orthogonal with unit cost.
//!
//! ```
//! use grid_search::{Algorithm, Pathfinder, PathingGrid};
//!
//! let grid: PathingGrid = "S.#\n..#\n#.E".parse().unwrap();
//! let mut pathfinder = Pathfinder::from_grid(grid);
//! let report = pathfinder.run(Algorithm::AStar, |_| ()).unwrap();
//! assert!(report.found());
//! assert_eq!(report.path_length(), 5);
//! ```
pub mod components;
pub mod coord;
pub mod error;
pub mod maze;
pub mod path;
pub mod pathfinder;
pub mod pathing_grid;
pub mod solver;

pub use coord::Coord;
pub use error::{PathfindingError, Result};
pub use path::{is_contiguous, reconstruct_path};
pub use pathfinder::{GridConfig, Pathfinder, RunStep, SearchReport};
pub use pathing_grid::{Cell, PathingGrid};
pub use solver::{search, Algorithm, Search, SearchResult, SearchStep};

/// Score of a cell that has not been reached.
pub const INFINITY: u32 = u32::MAX;
/// Orthogonal neighbourhood size.
pub const N_NEIGHBORS: usize = 4;

/// Number of rows of a default [GridConfig](pathfinder::GridConfig) grid.
pub const DEFAULT_ROWS: usize = 20;
/// Number of columns of a default grid.
pub const DEFAULT_COLS: usize = 25;
/// `(row, col)` of the start marker on a default grid.
pub const DEFAULT_START: (usize, usize) = (5, 5);
/// `(row, col)` of the end marker on a default grid.
pub const DEFAULT_END: (usize, usize) = (15, 20);
/// Chance of any non-marker cell becoming a wall in a generated maze.
pub const WALL_DENSITY: f64 = 0.3;
