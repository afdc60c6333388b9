use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use itertools::Itertools;

use crate::coord::Coord;
use crate::pathing_grid::PathingGrid;
use crate::INFINITY;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// A* with the [Manhattan distance](Coord::manhattan_distance) as heuristic. The open set keeps
/// insertion order; the next cell is the earliest inserted one with the lowest `f_score`.
/// Rescoring a cell that is already open updates it in place without moving it, which is sound
/// because the minimum is searched again on every pop.
pub(crate) struct AstarFrontier {
    open: FxIndexSet<Coord>,
    end: Coord,
}

impl AstarFrontier {
    pub(crate) fn seed(grid: &mut PathingGrid) -> AstarFrontier {
        let start = grid.start();
        let end = grid.end();
        let h = start.manhattan_distance(&end);
        if let Some(cell) = grid.cell_mut(start) {
            cell.g_score = 0;
            cell.h_score = h;
            cell.f_score = h;
        }
        let mut open = FxIndexSet::default();
        open.insert(start);
        AstarFrontier { open, end }
    }

    pub(crate) fn next_visit(&mut self, grid: &mut PathingGrid) -> Option<Coord> {
        loop {
            let pos = self
                .open
                .iter()
                .position_min_by_key(|c| grid.cell(**c).map_or(INFINITY, |cell| cell.f_score))?;
            let coord = self.open.shift_remove_index(pos)?;
            let Some(cell) = grid.cell_mut(coord) else {
                continue;
            };
            if cell.is_wall {
                continue;
            }
            cell.is_visited = true;
            return Some(coord);
        }
    }

    pub(crate) fn expand(&mut self, grid: &mut PathingGrid, coord: Coord) {
        let Some(tentative) = grid.cell(coord).map(|c| c.g_score + 1) else {
            return;
        };
        for neighbor in grid.neighbors(coord) {
            let Some(cell) = grid.cell_mut(neighbor) else {
                continue;
            };
            if cell.is_wall || cell.is_visited || tentative >= cell.g_score {
                continue;
            }
            cell.previous = Some(coord);
            cell.g_score = tentative;
            cell.h_score = neighbor.manhattan_distance(&self.end);
            cell.f_score = cell.g_score + cell.h_score;
            // No-op when already open, the cell keeps its place.
            self.open.insert(neighbor);
        }
    }
}
