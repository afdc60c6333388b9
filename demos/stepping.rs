use std::collections::HashSet;
use std::env;
use std::thread;
use std::time::Duration;

use grid_search::{Algorithm, Coord, Pathfinder, PathingGrid, RunStep};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Animates a search on a random maze in the terminal, one visited cell per frame.
//
// cargo run --example stepping -- [dijkstra|astar|bfs|dfs] [seed]

const FRAME: Duration = Duration::from_millis(15);

fn render(grid: &PathingGrid, visited: &HashSet<Coord>, path: &[Coord]) -> String {
    let mut out = String::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let c = Coord::new(row, col);
            // Markers are drawn over visits and the path.
            out.push(if c == grid.start() {
                'S'
            } else if c == grid.end() {
                'E'
            } else if grid.is_wall(c) {
                '#'
            } else if path.contains(&c) {
                '*'
            } else if visited.contains(&c) {
                'o'
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    out
}

fn main() {
    let mut args = env::args().skip(1);
    let algorithm = args
        .next()
        .map(|name| name.parse::<Algorithm>())
        .transpose()
        .unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(2)
        })
        .unwrap_or(Algorithm::AStar);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);

    let mut pathfinder = Pathfinder::default();
    let walls = pathfinder
        .generate_maze(&mut StdRng::seed_from_u64(seed))
        .unwrap();
    println!("{walls} walls, end reachable: {}", pathfinder.end_reachable());

    let mut visited = HashSet::new();
    pathfinder.begin(algorithm).unwrap();
    let report = loop {
        match pathfinder.step().unwrap() {
            RunStep::Visited(c) => {
                visited.insert(c);
                print!("\x1b[2J\x1b[H{}", render(pathfinder.grid(), &visited, &[]));
                thread::sleep(FRAME);
            }
            RunStep::Finished(report) => break report,
        }
    };
    print!(
        "\x1b[2J\x1b[H{}",
        render(pathfinder.grid(), &visited, &report.result.path)
    );
    if report.found() {
        println!(
            "{algorithm}: visited {}, path length {}",
            report.visited_count(),
            report.path_length()
        );
    } else {
        println!("{algorithm}: no path found after {} visits", report.visited_count());
    }
}
