use log::debug;
use rand::Rng;

use crate::error::{PathfindingError, Result};
use crate::pathing_grid::PathingGrid;

/// Clears the grid's walls and then blocks every cell other than the start and end independently
/// with probability `density`. Returns the number of walls placed.
pub fn scatter_walls<R: Rng + ?Sized>(
    grid: &mut PathingGrid,
    rng: &mut R,
    density: f64,
) -> Result<usize> {
    if !(0.0..=1.0).contains(&density) {
        return Err(PathfindingError::InvalidDensity(density));
    }
    grid.clear_walls();
    let mut placed = 0;
    for coord in grid.coords().collect::<Vec<_>>() {
        if grid.is_marker(coord) {
            continue;
        }
        if rng.gen_bool(density) {
            grid.set_wall(coord, true)?;
            placed += 1;
        }
    }
    debug!(
        "Scattered {} walls over {} cells with density {}",
        placed,
        grid.len(),
        density
    );
    Ok(placed)
}
