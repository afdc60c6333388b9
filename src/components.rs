use log::info;
use petgraph::unionfind::UnionFind;

use crate::coord::Coord;
use crate::pathing_grid::PathingGrid;

/// Connected components of the open cells of a [PathingGrid], maintained in a [UnionFind]
/// structure. Lets callers tell whether the end can be reached, and how large a region is,
/// without running a search.
#[derive(Clone, Debug)]
pub struct ComponentMap {
    components: UnionFind<usize>,
    open: Vec<bool>,
    cols: usize,
}

impl ComponentMap {
    /// Links up every open cell with its open right and lower neighbours.
    pub fn generate(grid: &PathingGrid) -> ComponentMap {
        info!("Generating connected components");
        let mut components = UnionFind::new(grid.len());
        let open = grid
            .coords()
            .map(|c| !grid.is_wall(c))
            .collect::<Vec<bool>>();
        let cols = grid.cols();
        let ix = |coord: Coord| coord.row * cols + coord.col;
        for coord in grid.coords() {
            if !open[ix(coord)] {
                continue;
            }
            [
                Coord::new(coord.row + 1, coord.col),
                Coord::new(coord.row, coord.col + 1),
            ]
            .into_iter()
            .filter(|n| grid.in_bounds(*n) && !grid.is_wall(*n))
            .for_each(|n| {
                components.union(ix(coord), ix(n));
            });
        }
        ComponentMap {
            components,
            open,
            cols,
        }
    }

    fn ix(&self, coord: Coord) -> Option<usize> {
        let ix = coord.row * self.cols + coord.col;
        if coord.col < self.cols && ix < self.open.len() && self.open[ix] {
            Some(ix)
        } else {
            None
        }
    }

    /// Component id of an open cell; `None` for walls and positions outside the grid.
    pub fn component(&self, coord: Coord) -> Option<usize> {
        self.ix(coord).map(|ix| self.components.find(ix))
    }

    /// Checks if both cells are open and on the same component.
    pub fn reachable(&self, a: Coord, b: Coord) -> bool {
        match (self.ix(a), self.ix(b)) {
            (Some(a), Some(b)) => self.components.equiv(a, b),
            _ => false,
        }
    }

    /// Number of open cells on the component of `coord`, zero for walls.
    pub fn component_size(&self, coord: Coord) -> usize {
        match self.component(coord) {
            Some(id) => (0..self.open.len())
                .filter(|&ix| self.open[ix] && self.components.find(ix) == id)
                .count(),
            None => 0,
        }
    }
}
