use core::fmt;
use grid_util::Point;

/// A `(row, col)` position on a [PathingGrid](crate::pathing_grid::PathingGrid). Rows grow
/// downwards, columns grow to the right. Converts to a [Point] with `x = col` and `y = row`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), which is exact on
    /// an empty 4-connected grid and therefore admissible everywhere else.
    pub fn manhattan_distance(&self, other: &Coord) -> u32 {
        Point::from(*self).manhattan_distance(&Point::from(*other)) as u32
    }

    /// Whether `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Coord {
        Coord { row, col }
    }
}

/// Grids are capped at `i32::MAX` rows and columns, so in-grid coordinates always fit.
impl From<Coord> for Point {
    fn from(coord: Coord) -> Point {
        Point::new(coord.col as i32, coord.row as i32)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
