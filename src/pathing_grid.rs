use crate::coord::Coord;
use crate::error::{PathfindingError, Result};
use crate::{INFINITY, N_NEIGHBORS};
use core::fmt;
use core::str::FromStr;
use grid_util::{Grid, SimpleGrid};
use itertools::iproduct;
use log::debug;
use smallvec::SmallVec;

/// State of a single grid position. The wall flag belongs to the layout; everything else is
/// per-run search bookkeeping that [PathingGrid::reset_search_state] wipes before every search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub is_wall: bool,
    pub is_visited: bool,
    /// Tentative distance from the start, used by Dijkstra.
    pub distance: u32,
    /// Cost of the best known path from the start, used by A*.
    pub g_score: u32,
    /// Heuristic estimate to the end, used by A*.
    pub h_score: u32,
    /// `g_score + h_score`, used by A*.
    pub f_score: u32,
    /// The cell this one was reached from.
    pub previous: Option<Coord>,
}

impl Default for Cell {
    fn default() -> Cell {
        Cell {
            is_wall: false,
            is_visited: false,
            distance: INFINITY,
            g_score: INFINITY,
            h_score: 0,
            f_score: INFINITY,
            previous: None,
        }
    }
}

impl Cell {
    fn reset(&mut self) {
        self.is_visited = false;
        self.distance = INFINITY;
        self.g_score = INFINITY;
        self.h_score = 0;
        self.f_score = INFINITY;
        self.previous = None;
    }
}

/// [PathingGrid] is a fixed-size matrix of [Cell]s, stored in a [SimpleGrid] addressed by
/// [Point](grid_util::Point)s, together with the start and end markers. The markers are never walls: placing a
/// marker clears the wall under it and walls cannot be toggled on a marker.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    rows: usize,
    cols: usize,
    cells: SimpleGrid<Cell>,
    start: Coord,
    end: Coord,
}

impl PathingGrid {
    /// Both dimensions must be positive and fit the `i32` coordinates of a [Point].
    pub fn new(rows: usize, cols: usize, start: Coord, end: Coord) -> Result<PathingGrid> {
        if rows == 0 || cols == 0 {
            return Err(PathfindingError::EmptyGrid);
        }
        let max = i32::MAX as usize;
        if rows > max || cols > max || rows.checked_mul(cols).is_none() {
            return Err(PathfindingError::TooLarge { rows, cols });
        }
        let grid = PathingGrid {
            rows,
            cols,
            cells: SimpleGrid::new(cols, rows, Cell::default()),
            start,
            end,
        };
        grid.check_bounds(start)?;
        grid.check_bounds(end)?;
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn start(&self) -> Coord {
        self.start
    }
    pub fn end(&self) -> Coord {
        self.end
    }
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn check_bounds(&self, coord: Coord) -> Result<()> {
        if self.in_bounds(coord) {
            Ok(())
        } else {
            Err(PathfindingError::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        if self.in_bounds(coord) {
            self.cells.get_point(coord.into())
        } else {
            None
        }
    }

    pub(crate) fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        if self.in_bounds(coord) {
            self.cells.get_point_mut(coord.into())
        } else {
            None
        }
    }

    /// Out-of-bounds positions count as walls.
    pub fn is_wall(&self, coord: Coord) -> bool {
        self.cell(coord).map_or(true, |c| c.is_wall)
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self.cell(coord).map_or(false, |c| c.is_visited)
    }

    pub fn is_marker(&self, coord: Coord) -> bool {
        coord == self.start || coord == self.end
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        iproduct!(0..self.rows, 0..self.cols).map(|(row, col)| Coord::new(row, col))
    }

    pub fn wall_count(&self) -> usize {
        self.coords().filter(|c| self.is_wall(*c)).count()
    }

    /// In-bounds orthogonal neighbours in the fixed order up, down, left, right. Traversal order
    /// of every search depends on this order.
    pub fn neighbors(&self, coord: Coord) -> SmallVec<[Coord; N_NEIGHBORS]> {
        let mut neighbors = SmallVec::new();
        if !self.in_bounds(coord) {
            return neighbors;
        }
        let Coord { row, col } = coord;
        if row > 0 {
            neighbors.push(Coord::new(row - 1, col));
        }
        if row + 1 < self.rows {
            neighbors.push(Coord::new(row + 1, col));
        }
        if col > 0 {
            neighbors.push(Coord::new(row, col - 1));
        }
        if col + 1 < self.cols {
            neighbors.push(Coord::new(row, col + 1));
        }
        neighbors
    }

    /// [neighbors](Self::neighbors) without the cells already visited in the current run. Walls
    /// are kept.
    pub fn unvisited_neighbors(&self, coord: Coord) -> SmallVec<[Coord; N_NEIGHBORS]> {
        let mut neighbors = self.neighbors(coord);
        neighbors.retain(|n| !self.is_visited(*n));
        neighbors
    }

    fn for_each_cell<F: FnMut(&mut Cell)>(&mut self, mut f: F) {
        for coord in self.coords() {
            if let Some(cell) = self.cells.get_point_mut(coord.into()) {
                f(cell);
            }
        }
    }

    /// Clears visitation, scores and back-pointers on every cell. Walls and markers stay.
    pub fn reset_search_state(&mut self) {
        debug!("Resetting search state of {}x{} grid", self.rows, self.cols);
        self.for_each_cell(Cell::reset);
    }

    pub fn set_start(&mut self, coord: Coord) -> Result<()> {
        self.check_bounds(coord)?;
        if let Some(cell) = self.cell_mut(coord) {
            cell.is_wall = false;
        }
        self.start = coord;
        Ok(())
    }

    pub fn set_end(&mut self, coord: Coord) -> Result<()> {
        self.check_bounds(coord)?;
        if let Some(cell) = self.cell_mut(coord) {
            cell.is_wall = false;
        }
        self.end = coord;
        Ok(())
    }

    /// Flips the wall at `coord` and returns the new state. The start and end cells are left
    /// open and report `false`.
    pub fn toggle_wall(&mut self, coord: Coord) -> Result<bool> {
        self.check_bounds(coord)?;
        if self.is_marker(coord) {
            return Ok(false);
        }
        Ok(self.cell_mut(coord).map_or(false, |cell| {
            cell.is_wall = !cell.is_wall;
            cell.is_wall
        }))
    }

    /// Sets the wall at `coord`. Requests to block the start or end are ignored.
    pub fn set_wall(&mut self, coord: Coord, blocked: bool) -> Result<()> {
        self.check_bounds(coord)?;
        if !self.is_marker(coord) {
            if let Some(cell) = self.cell_mut(coord) {
                cell.is_wall = blocked;
            }
        }
        Ok(())
    }

    pub fn clear_walls(&mut self) {
        self.for_each_cell(|c| c.is_wall = false);
    }
}

impl PartialEq for PathingGrid {
    fn eq(&self, other: &PathingGrid) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.start == other.start
            && self.end == other.end
            && self.coords().all(|c| self.cell(c) == other.cell(c))
    }
}

impl Eq for PathingGrid {}

/// Writes the layout using `S` for the start, `E` for the end, `#` for walls and `.` for open
/// cells; the output parses back through [FromStr].
impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            let line = (0..self.cols)
                .map(|col| {
                    let coord = Coord::new(row, col);
                    if coord == self.start {
                        'S'
                    } else if coord == self.end {
                        'E'
                    } else if self.is_wall(coord) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl FromStr for PathingGrid {
    type Err = PathfindingError;

    fn from_str(s: &str) -> Result<PathingGrid> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<&str>>();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        if rows == 0 || cols == 0 {
            return Err(PathfindingError::EmptyGrid);
        }
        let mut start = None;
        let mut end = None;
        let mut walls = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(PathfindingError::InvalidLayout(format!(
                    "row {row} has {} cells, expected {cols}",
                    line.chars().count()
                )));
            }
            for (col, c) in line.chars().enumerate() {
                let coord = Coord::new(row, col);
                match c {
                    '.' => {}
                    '#' => walls.push(coord),
                    'S' if start.is_none() => start = Some(coord),
                    'E' if end.is_none() => end = Some(coord),
                    'S' | 'E' => {
                        return Err(PathfindingError::InvalidLayout(format!(
                            "more than one '{c}' marker"
                        )))
                    }
                    other => {
                        return Err(PathfindingError::InvalidLayout(format!(
                            "unexpected character '{other}' at {coord}"
                        )))
                    }
                }
            }
        }
        let start =
            start.ok_or_else(|| PathfindingError::InvalidLayout("missing 'S' marker".into()))?;
        let end = end.ok_or_else(|| PathfindingError::InvalidLayout("missing 'E' marker".into()))?;
        let mut grid = PathingGrid::new(rows, cols, start, end)?;
        for wall in walls {
            grid.set_wall(wall, true)?;
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_util::Point;

    fn open_grid() -> PathingGrid {
        PathingGrid::new(3, 4, Coord::new(0, 0), Coord::new(2, 3)).unwrap()
    }

    /// Corner cells have two neighbours, edge cells three and inner cells four, always in the
    /// order up, down, left, right.
    #[test]
    fn neighbor_order() {
        let grid = open_grid();
        assert_eq!(
            grid.neighbors(Coord::new(1, 1)).as_slice(),
            &[
                Coord::new(0, 1),
                Coord::new(2, 1),
                Coord::new(1, 0),
                Coord::new(1, 2)
            ]
        );
        assert_eq!(
            grid.neighbors(Coord::new(0, 0)).as_slice(),
            &[Coord::new(1, 0), Coord::new(0, 1)]
        );
        assert_eq!(
            grid.neighbors(Coord::new(2, 3)).as_slice(),
            &[Coord::new(1, 3), Coord::new(2, 2)]
        );
        assert_eq!(grid.neighbors(Coord::new(0, 2)).len(), 3);
        assert!(grid.neighbors(Coord::new(3, 0)).is_empty());
    }

    #[test]
    fn unvisited_neighbors_skip_visited_but_keep_walls() {
        let mut grid = open_grid();
        grid.set_wall(Coord::new(1, 2), true).unwrap();
        grid.cell_mut(Coord::new(0, 1)).unwrap().is_visited = true;
        assert_eq!(
            grid.unvisited_neighbors(Coord::new(1, 1)).as_slice(),
            &[Coord::new(2, 1), Coord::new(1, 0), Coord::new(1, 2)]
        );
    }

    #[test]
    fn markers_are_never_walls() {
        let mut grid = open_grid();
        assert_eq!(grid.toggle_wall(Coord::new(0, 0)), Ok(false));
        assert!(!grid.is_wall(Coord::new(0, 0)));
        assert_eq!(grid.toggle_wall(Coord::new(1, 1)), Ok(true));
        grid.set_start(Coord::new(1, 1)).unwrap();
        assert!(!grid.is_wall(Coord::new(1, 1)));
        assert_eq!(grid.start(), Coord::new(1, 1));
        // The old start cell is an ordinary cell again.
        assert_eq!(grid.toggle_wall(Coord::new(0, 0)), Ok(true));
    }

    #[test]
    fn out_of_bounds_edits_do_not_mutate() {
        let mut grid = open_grid();
        let before = grid.clone();
        let outside = Coord::new(3, 0);
        assert!(matches!(
            grid.toggle_wall(outside),
            Err(PathfindingError::OutOfBounds { .. })
        ));
        assert!(grid.set_start(outside).is_err());
        assert!(grid.set_end(Coord::new(0, 4)).is_err());
        assert_eq!(grid, before);
        assert_eq!(
            PathingGrid::new(0, 3, Coord::new(0, 0), Coord::new(0, 1)),
            Err(PathfindingError::EmptyGrid)
        );
    }

    #[test]
    fn oversized_dimensions_are_refused() {
        let origin = Coord::new(0, 0);
        assert_eq!(
            PathingGrid::new(usize::MAX, 2, origin, origin),
            Err(PathfindingError::TooLarge {
                rows: usize::MAX,
                cols: 2
            })
        );
        let wide = i32::MAX as usize + 1;
        assert_eq!(
            PathingGrid::new(1, wide, origin, origin),
            Err(PathfindingError::TooLarge { rows: 1, cols: wide })
        );
    }

    /// Cells live in the point grid with `x` as column and `y` as row.
    #[test]
    fn cells_are_stored_by_point() {
        let mut grid = open_grid();
        grid.set_wall(Coord::new(2, 1), true).unwrap();
        assert!(grid.cells.get_point(Point::new(1, 2)).unwrap().is_wall);
        assert!(!grid.cells.get_point(Point::new(2, 1)).unwrap().is_wall);
        assert_eq!(grid.wall_count(), 1);
        assert_eq!(grid.len(), 12);
    }

    #[test]
    fn reset_keeps_layout() {
        let mut grid = open_grid();
        grid.set_wall(Coord::new(1, 1), true).unwrap();
        {
            let cell = grid.cell_mut(Coord::new(2, 2)).unwrap();
            cell.is_visited = true;
            cell.distance = 3;
            cell.g_score = 3;
            cell.h_score = 1;
            cell.f_score = 4;
            cell.previous = Some(Coord::new(2, 1));
        }
        grid.reset_search_state();
        assert_eq!(grid.cell(Coord::new(2, 2)), Some(&Cell::default()));
        assert!(grid.is_wall(Coord::new(1, 1)));
        assert_eq!(grid.start(), Coord::new(0, 0));
        assert_eq!(grid.end(), Coord::new(2, 3));
    }

    #[test]
    fn layout_round_trip() {
        let layout = "S.#.\n.##.\n...E\n";
        let grid: PathingGrid = layout.parse().unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.wall_count(), 3);
        assert_eq!(grid.end(), Coord::new(2, 3));
        assert_eq!(grid.to_string(), layout);
    }

    #[test]
    fn bad_layouts() {
        assert!(matches!(
            "S..\n..".parse::<PathingGrid>(),
            Err(PathfindingError::InvalidLayout(_))
        ));
        assert!(matches!(
            "S.S\n..E".parse::<PathingGrid>(),
            Err(PathfindingError::InvalidLayout(_))
        ));
        assert!(matches!(
            "S..\n...".parse::<PathingGrid>(),
            Err(PathfindingError::InvalidLayout(_))
        ));
        assert!(matches!(
            "S.x\n..E".parse::<PathingGrid>(),
            Err(PathfindingError::InvalidLayout(_))
        ));
        assert_eq!("".parse::<PathingGrid>(), Err(PathfindingError::EmptyGrid));
    }
}
