use crate::coord::Coord;
use core::fmt;

/// Everything that can go wrong when editing a grid or driving a search. An unreachable goal is
/// not an error; it is reported as a [SearchResult](crate::solver::SearchResult) with `found`
/// set to `false`.
#[derive(Clone, Debug, PartialEq)]
pub enum PathfindingError {
    /// A grid needs at least one row and one column.
    EmptyGrid,
    /// The dimensions do not fit the grid's `i32` point space or overflow the cell count.
    TooLarge { rows: usize, cols: usize },
    /// A coordinate outside of the grid was passed to an editing operation.
    OutOfBounds {
        coord: Coord,
        rows: usize,
        cols: usize,
    },
    /// The algorithm selector did not name one of the supported algorithms.
    UnknownAlgorithm(String),
    /// A search is running; it must finish before another one starts or the grid is edited.
    SearchInProgress,
    /// A step was requested while no search is running.
    NoActiveSearch,
    /// A textual grid layout could not be parsed.
    InvalidLayout(String),
    /// A wall density outside of `[0, 1]`.
    InvalidDensity(f64),
}

impl fmt::Display for PathfindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathfindingError::EmptyGrid => write!(f, "grid must have at least one row and column"),
            PathfindingError::TooLarge { rows, cols } => {
                write!(f, "a {rows}x{cols} grid is too large")
            }
            PathfindingError::OutOfBounds { coord, rows, cols } => {
                write!(f, "{coord} is outside of the {rows}x{cols} grid")
            }
            PathfindingError::UnknownAlgorithm(name) => write!(
                f,
                "unknown algorithm '{name}', expected one of dijkstra, astar, bfs, dfs"
            ),
            PathfindingError::SearchInProgress => write!(f, "a search is already running"),
            PathfindingError::NoActiveSearch => write!(f, "no search is running"),
            PathfindingError::InvalidLayout(reason) => write!(f, "invalid grid layout: {reason}"),
            PathfindingError::InvalidDensity(density) => {
                write!(f, "wall density {density} is not in [0, 1]")
            }
        }
    }
}

impl std::error::Error for PathfindingError {}

pub type Result<T> = std::result::Result<T, PathfindingError>;
