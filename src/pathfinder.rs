use std::time::{Duration, Instant};

use log::{info, warn};
use rand::Rng;

use crate::components::ComponentMap;
use crate::coord::Coord;
use crate::error::{PathfindingError, Result};
use crate::maze::scatter_walls;
use crate::pathing_grid::PathingGrid;
use crate::solver::{Algorithm, Search, SearchResult, SearchStep};
use crate::{DEFAULT_COLS, DEFAULT_END, DEFAULT_ROWS, DEFAULT_START, WALL_DENSITY};

/// Dimensions and initial markers of the grid a [Pathfinder] manages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Coord,
    pub end: Coord,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start: Coord::from(DEFAULT_START),
            end: Coord::from(DEFAULT_END),
        }
    }
}

/// A finished run: the search outcome plus timing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub algorithm: Algorithm,
    pub result: SearchResult,
    pub elapsed: Duration,
}

impl SearchReport {
    pub fn found(&self) -> bool {
        self.result.found
    }
    pub fn visited_count(&self) -> usize {
        self.result.visited_count
    }
    pub fn path_length(&self) -> usize {
        self.result.path_length()
    }
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// What a single [Pathfinder::step] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunStep {
    Visited(Coord),
    Finished(SearchReport),
}

struct ActiveRun {
    search: Search,
    started: Instant,
}

/// Owns a [PathingGrid] and runs at most one search over it at a time. While a search is in
/// progress the grid cannot be edited and no other search can be started.
pub struct Pathfinder {
    grid: PathingGrid,
    components: ComponentMap,
    components_dirty: bool,
    active: Option<ActiveRun>,
}

impl Default for Pathfinder {
    fn default() -> Pathfinder {
        Pathfinder::from_grid(
            PathingGrid::new(DEFAULT_ROWS, DEFAULT_COLS, DEFAULT_START.into(), DEFAULT_END.into())
                .expect("default grid configuration is valid"),
        )
    }
}

impl Pathfinder {
    pub fn new(config: GridConfig) -> Result<Pathfinder> {
        let grid = PathingGrid::new(config.rows, config.cols, config.start, config.end)?;
        Ok(Pathfinder::from_grid(grid))
    }

    pub fn from_grid(grid: PathingGrid) -> Pathfinder {
        let components = ComponentMap::generate(&grid);
        Pathfinder {
            grid,
            components,
            components_dirty: false,
            active: None,
        }
    }

    pub fn grid(&self) -> &PathingGrid {
        &self.grid
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    fn editable_grid(&mut self) -> Result<&mut PathingGrid> {
        if self.is_running() {
            return Err(PathfindingError::SearchInProgress);
        }
        Ok(&mut self.grid)
    }

    pub fn set_start(&mut self, coord: Coord) -> Result<()> {
        self.editable_grid()?.set_start(coord)?;
        self.components_dirty = true;
        Ok(())
    }

    pub fn set_end(&mut self, coord: Coord) -> Result<()> {
        self.editable_grid()?.set_end(coord)?;
        self.components_dirty = true;
        Ok(())
    }

    pub fn toggle_wall(&mut self, coord: Coord) -> Result<bool> {
        let blocked = self.editable_grid()?.toggle_wall(coord)?;
        self.components_dirty = true;
        Ok(blocked)
    }

    pub fn set_wall(&mut self, coord: Coord, blocked: bool) -> Result<()> {
        self.editable_grid()?.set_wall(coord, blocked)?;
        self.components_dirty = true;
        Ok(())
    }

    /// Wipes visitation and scores from the last run, keeping the layout.
    pub fn clear_path(&mut self) -> Result<()> {
        self.editable_grid()?.reset_search_state();
        Ok(())
    }

    /// Removes every wall as well as the state of the last run. The markers stay where they are.
    pub fn clear_all(&mut self) -> Result<()> {
        let grid = self.editable_grid()?;
        grid.clear_walls();
        grid.reset_search_state();
        self.components_dirty = true;
        Ok(())
    }

    /// Replaces the layout with a random one of [WALL_DENSITY] walls. Returns the number of walls.
    pub fn generate_maze<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize> {
        let grid = self.editable_grid()?;
        grid.reset_search_state();
        let placed = scatter_walls(grid, rng, WALL_DENSITY)?;
        self.components_dirty = true;
        Ok(placed)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.components = ComponentMap::generate(&self.grid);
            self.components_dirty = false;
        }
    }

    /// Checks if start and end are on the same connected component.
    pub fn end_reachable(&mut self) -> bool {
        self.update();
        self.components.reachable(self.grid.start(), self.grid.end())
    }

    /// Resets the per-run state and seeds `algorithm`. Fails if a run is already in progress.
    pub fn begin(&mut self, algorithm: Algorithm) -> Result<()> {
        if self.is_running() {
            return Err(PathfindingError::SearchInProgress);
        }
        let reachable = self.end_reachable();
        info!(
            "Starting {} from {} to {} (end {})",
            algorithm,
            self.grid.start(),
            self.grid.end(),
            if reachable { "reachable" } else { "unreachable" }
        );
        let started = Instant::now();
        let search = Search::new(algorithm, &mut self.grid);
        self.active = Some(ActiveRun { search, started });
        Ok(())
    }

    /// Advances the active run by one visit. The step that finds the run over returns the report
    /// and frees the pathfinder for edits and new runs.
    pub fn step(&mut self) -> Result<RunStep> {
        let run = self.active.as_mut().ok_or(PathfindingError::NoActiveSearch)?;
        match run.search.step(&mut self.grid) {
            SearchStep::Visited(coord) => Ok(RunStep::Visited(coord)),
            SearchStep::Done(result) => {
                let report = SearchReport {
                    algorithm: run.search.algorithm(),
                    result,
                    elapsed: run.started.elapsed(),
                };
                self.active = None;
                self.log_report(&report);
                Ok(RunStep::Finished(report))
            }
        }
    }

    /// Runs `algorithm` to completion, calling `on_visit` for every visited cell.
    pub fn run<F>(&mut self, algorithm: Algorithm, mut on_visit: F) -> Result<SearchReport>
    where
        F: FnMut(Coord),
    {
        self.begin(algorithm)?;
        loop {
            match self.step()? {
                RunStep::Visited(coord) => on_visit(coord),
                RunStep::Finished(report) => return Ok(report),
            }
        }
    }

    /// Like [run](Self::run), with the algorithm given by name.
    pub fn run_named<F>(&mut self, algorithm: &str, on_visit: F) -> Result<SearchReport>
    where
        F: FnMut(Coord),
    {
        let algorithm = algorithm.parse::<Algorithm>()?;
        self.run(algorithm, on_visit)
    }

    fn log_report(&mut self, report: &SearchReport) {
        info!(
            "{} finished: found={} visited={} path_length={} elapsed={}ms",
            report.algorithm,
            report.found(),
            report.visited_count(),
            report.path_length(),
            report.elapsed_ms()
        );
        if !report.found() && self.end_reachable() {
            warn!(
                "{} did not reach {} although it is on the start's component",
                report.algorithm,
                self.grid.end()
            );
        }
    }
}
