//! Uniform-cost search over an explicit unvisited list.
//!
//! Every cell starts in the list in row-major order. Before each selection the list is stably
//! sorted by tentative distance and the front cell is taken, so equal distances keep the order
//! the previous sort left them in: cells that got their distance earlier come first, and cells
//! that got it in the same round stay in row-major order. Walls stay in the list and are dropped
//! without a visit when they come up.
use std::collections::VecDeque;

use crate::coord::Coord;
use crate::pathing_grid::PathingGrid;
use crate::INFINITY;

pub(crate) struct DijkstraFrontier {
    unvisited: VecDeque<Coord>,
}

impl DijkstraFrontier {
    pub(crate) fn seed(grid: &mut PathingGrid) -> DijkstraFrontier {
        let start = grid.start();
        if let Some(cell) = grid.cell_mut(start) {
            cell.distance = 0;
        }
        DijkstraFrontier {
            unvisited: grid.coords().collect(),
        }
    }

    pub(crate) fn next_visit(&mut self, grid: &mut PathingGrid) -> Option<Coord> {
        loop {
            self.unvisited
                .make_contiguous()
                .sort_by_key(|c| grid.cell(*c).map_or(INFINITY, |cell| cell.distance));
            let coord = self.unvisited.pop_front()?;
            let Some(cell) = grid.cell_mut(coord) else {
                continue;
            };
            if cell.is_wall {
                continue;
            }
            if cell.distance == INFINITY {
                // Everything left is cut off from the start.
                self.unvisited.clear();
                return None;
            }
            cell.is_visited = true;
            return Some(coord);
        }
    }

    /// With unit edge costs cells are selected in non-decreasing distance order, so overwriting
    /// the distance of an unvisited neighbour never makes it worse.
    pub(crate) fn expand(&mut self, grid: &mut PathingGrid, coord: Coord) {
        let Some(distance) = grid.cell(coord).map(|c| c.distance + 1) else {
            return;
        };
        for neighbor in grid.unvisited_neighbors(coord) {
            if let Some(cell) = grid.cell_mut(neighbor) {
                cell.distance = distance;
                cell.previous = Some(coord);
            }
        }
    }
}
