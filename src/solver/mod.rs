use crate::coord::Coord;
use crate::error::PathfindingError;
use crate::path::reconstruct_path;
use crate::pathing_grid::PathingGrid;
use core::fmt;
use core::str::FromStr;
use log::debug;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use astar::AstarFrontier;
use bfs::BfsFrontier;
use dfs::DfsFrontier;
use dijkstra::DijkstraFrontier;

/// The supported search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dijkstra,
    AStar,
    Bfs,
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        }
    }

    /// Whether the returned path is guaranteed to be a shortest one.
    pub fn is_optimal(&self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PathfindingError;

    fn from_str(s: &str) -> Result<Algorithm, PathfindingError> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| PathfindingError::UnknownAlgorithm(s.to_owned()))
    }
}

/// Outcome of one search. `path` runs from start to end inclusive and is empty when the end was
/// not reached; `visit_order` lists every visit event in the order it happened.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub found: bool,
    pub path: Vec<Coord>,
    pub visited_count: usize,
    pub visit_order: Vec<Coord>,
}

impl SearchResult {
    /// Number of cells on the path, start and end included. Zero if no path was found.
    pub fn path_length(&self) -> usize {
        self.path.len()
    }
}

/// What a single [Search::step] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchStep {
    /// A cell was marked visited. The end cell is reported too.
    Visited(Coord),
    /// The search is over, either because the end was visited by the previous step or because
    /// the frontier ran dry. Stepping again returns the same result.
    Done(SearchResult),
}

enum Frontier {
    Dijkstra(DijkstraFrontier),
    AStar(AstarFrontier),
    Bfs(BfsFrontier),
    Dfs(DfsFrontier),
}

impl Frontier {
    fn seed(algorithm: Algorithm, grid: &mut PathingGrid) -> Frontier {
        match algorithm {
            Algorithm::Dijkstra => Frontier::Dijkstra(DijkstraFrontier::seed(grid)),
            Algorithm::AStar => Frontier::AStar(AstarFrontier::seed(grid)),
            Algorithm::Bfs => Frontier::Bfs(BfsFrontier::seed(grid)),
            Algorithm::Dfs => Frontier::Dfs(DfsFrontier::seed(grid)),
        }
    }

    fn next_visit(&mut self, grid: &mut PathingGrid) -> Option<Coord> {
        match self {
            Frontier::Dijkstra(f) => f.next_visit(grid),
            Frontier::AStar(f) => f.next_visit(grid),
            Frontier::Bfs(f) => f.next_visit(grid),
            Frontier::Dfs(f) => f.next_visit(grid),
        }
    }

    fn expand(&mut self, grid: &mut PathingGrid, coord: Coord) {
        match self {
            Frontier::Dijkstra(f) => f.expand(grid, coord),
            Frontier::AStar(f) => f.expand(grid, coord),
            Frontier::Bfs(f) => f.expand(grid, coord),
            Frontier::Dfs(f) => f.expand(grid, coord),
        }
    }
}

/// A resumable search over a [PathingGrid]. Each [step](Self::step) performs exactly one visit,
/// which lets a caller pause between visits (for instance to animate them). The grid must not be
/// edited while a search over it is in progress.
pub struct Search {
    algorithm: Algorithm,
    frontier: Frontier,
    goal: Coord,
    visit_order: Vec<Coord>,
    outcome: Option<bool>,
}

impl Search {
    /// Resets the per-run state of `grid` and seeds the frontier of `algorithm` with the start.
    pub fn new(algorithm: Algorithm, grid: &mut PathingGrid) -> Search {
        grid.reset_search_state();
        debug!(
            "Seeding {} search from {} towards {}",
            algorithm,
            grid.start(),
            grid.end()
        );
        Search {
            algorithm,
            frontier: Frontier::seed(algorithm, grid),
            goal: grid.end(),
            visit_order: Vec::new(),
            outcome: None,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn visited_count(&self) -> usize {
        self.visit_order.len()
    }

    pub fn is_done(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn step(&mut self, grid: &mut PathingGrid) -> SearchStep {
        if let Some(found) = self.outcome {
            return SearchStep::Done(self.result(grid, found));
        }
        match self.frontier.next_visit(grid) {
            Some(coord) => {
                self.visit_order.push(coord);
                if coord == self.goal {
                    self.outcome = Some(true);
                } else {
                    self.frontier.expand(grid, coord);
                }
                SearchStep::Visited(coord)
            }
            None => {
                self.outcome = Some(false);
                SearchStep::Done(self.result(grid, false))
            }
        }
    }

    fn result(&self, grid: &PathingGrid, found: bool) -> SearchResult {
        let path = if found {
            reconstruct_path(grid, self.goal)
        } else {
            Vec::new()
        };
        SearchResult {
            found,
            path,
            visited_count: self.visit_order.len(),
            visit_order: self.visit_order.clone(),
        }
    }
}

/// Runs `algorithm` on `grid` to completion, calling `on_visit` for every visited cell. Pass
/// `|_| ()` when the visits are of no interest.
pub fn search<F>(grid: &mut PathingGrid, algorithm: Algorithm, mut on_visit: F) -> SearchResult
where
    F: FnMut(Coord),
{
    let mut search = Search::new(algorithm, grid);
    loop {
        match search.step(grid) {
            SearchStep::Visited(coord) => on_visit(coord),
            SearchStep::Done(result) => return result,
        }
    }
}
