use grid_search::{Algorithm, Pathfinder, PathingGrid};

// In this example each algorithm searches a 5x7 grid with shape
//  _______
// |S..#...|
// |.#.#.#.|
// |.#...#.|
// |.####..|
// |......E|
//  _______
// where
// - # marks a wall
// - S marks the start
// - E marks the end
//
// Moves are orthogonal only.

fn main() {
    let grid: PathingGrid = "S..#...\n.#.#.#.\n.#...#.\n.####..\n......E"
        .parse()
        .unwrap();
    println!("{}", grid);
    let mut pathfinder = Pathfinder::from_grid(grid);
    for algorithm in Algorithm::ALL {
        let report = pathfinder.run(algorithm, |_| ()).unwrap();
        println!(
            "{:>8}: visited {:>2}, path length {:>2}, {} ms",
            algorithm,
            report.visited_count(),
            report.path_length(),
            report.elapsed_ms()
        );
        println!("Path: {:?}", report.result.path);
    }
}
