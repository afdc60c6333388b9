use crate::coord::Coord;
use crate::pathing_grid::PathingGrid;
use itertools::Itertools;

/// Follows the back-pointers from `end` until a cell without one (normally the start) and
/// returns the cells from start to `end` inclusive. A cell without a back-pointer yields a path
/// of just that cell.
pub fn reconstruct_path(grid: &PathingGrid, end: Coord) -> Vec<Coord> {
    if !grid.in_bounds(end) {
        return Vec::new();
    }
    let mut path: Vec<Coord> =
        std::iter::successors(Some(end), |&coord| grid.cell(coord)?.previous).collect();
    path.reverse();
    path
}

/// Checks that every consecutive pair of the path is a single orthogonal step.
pub fn is_contiguous(path: &[Coord]) -> bool {
    path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
}
