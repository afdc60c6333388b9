use std::collections::VecDeque;

use crate::coord::Coord;
use crate::pathing_grid::PathingGrid;

/// Breadth-first search. Cells are marked visited when they are enqueued, so each cell enters
/// the queue at most once; the visit itself is reported when the cell is dequeued.
pub(crate) struct BfsFrontier {
    queue: VecDeque<Coord>,
}

impl BfsFrontier {
    pub(crate) fn seed(grid: &mut PathingGrid) -> BfsFrontier {
        let start = grid.start();
        if let Some(cell) = grid.cell_mut(start) {
            cell.is_visited = true;
        }
        BfsFrontier {
            queue: VecDeque::from([start]),
        }
    }

    pub(crate) fn next_visit(&mut self, _grid: &mut PathingGrid) -> Option<Coord> {
        self.queue.pop_front()
    }

    pub(crate) fn expand(&mut self, grid: &mut PathingGrid, coord: Coord) {
        for neighbor in grid.neighbors(coord) {
            let Some(cell) = grid.cell_mut(neighbor) else {
                continue;
            };
            if !cell.is_visited && !cell.is_wall {
                cell.is_visited = true;
                cell.previous = Some(coord);
                self.queue.push_back(neighbor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::coord::Coord;
    use crate::pathing_grid::PathingGrid;
    use crate::solver::{search, Algorithm, Search, SearchStep};

    #[test]
    fn fifo_order() {
        let mut grid: PathingGrid = "S.\n.E".parse().unwrap();
        let result = search(&mut grid, Algorithm::Bfs, |_| ());
        assert_eq!(
            result.visit_order,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(1, 1)
            ]
        );
        assert_eq!(
            result.path,
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)]
        );
    }

    /// Neighbours count as visited as soon as they are queued, before their visit is reported.
    #[test]
    fn marks_on_enqueue() {
        let mut grid: PathingGrid = "S..\n...\n..E".parse().unwrap();
        let mut bfs = Search::new(Algorithm::Bfs, &mut grid);
        assert!(grid.cell(Coord::new(0, 0)).unwrap().is_visited);
        assert_eq!(bfs.step(&mut grid), SearchStep::Visited(Coord::new(0, 0)));
        assert_eq!(bfs.visited_count(), 1);
        let down = grid.cell(Coord::new(1, 0)).unwrap();
        assert!(down.is_visited);
        assert_eq!(down.previous, Some(Coord::new(0, 0)));
        assert!(grid.cell(Coord::new(0, 1)).unwrap().is_visited);
        assert!(!grid.cell(Coord::new(1, 1)).unwrap().is_visited);
    }

    #[test]
    fn shortest_around_obstacle() {
        let mut grid: PathingGrid = "S#...\n.#.#.\n...#E".parse().unwrap();
        let result = search(&mut grid, Algorithm::Bfs, |_| ());
        assert!(result.found);
        assert_eq!(result.path_length(), 11);
    }
}
