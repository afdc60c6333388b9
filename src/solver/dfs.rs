use crate::coord::Coord;
use crate::pathing_grid::PathingGrid;

/// Depth-first search on an explicit stack. Cells are marked visited when popped, so a cell can
/// sit on the stack more than once; stale copies are skipped. Finds some path, not necessarily a
/// short one.
pub(crate) struct DfsFrontier {
    stack: Vec<Coord>,
}

impl DfsFrontier {
    pub(crate) fn seed(grid: &mut PathingGrid) -> DfsFrontier {
        DfsFrontier {
            stack: vec![grid.start()],
        }
    }

    pub(crate) fn next_visit(&mut self, grid: &mut PathingGrid) -> Option<Coord> {
        while let Some(coord) = self.stack.pop() {
            let Some(cell) = grid.cell_mut(coord) else {
                continue;
            };
            if cell.is_visited || cell.is_wall {
                continue;
            }
            cell.is_visited = true;
            return Some(coord);
        }
        None
    }

    /// The latest push owns the back-pointer; it is also the copy popped first.
    pub(crate) fn expand(&mut self, grid: &mut PathingGrid, coord: Coord) {
        for neighbor in grid.neighbors(coord) {
            let Some(cell) = grid.cell_mut(neighbor) else {
                continue;
            };
            if !cell.is_visited && !cell.is_wall {
                cell.previous = Some(coord);
                self.stack.push(neighbor);
            }
        }
    }
}
