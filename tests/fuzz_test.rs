/// Fuzzes the search algorithms by checking on many random grids that a path is found exactly
/// when the end shares a connected component with the start, and that the optimal algorithms
/// agree on the path length. All four algorithms are tested.
use grid_search::components::ComponentMap;
use grid_search::maze::scatter_walls;
use grid_search::*;
use itertools::Itertools;
use rand::prelude::*;

fn random_grid(n: usize, rng: &mut StdRng, start: Coord, end: Coord) -> PathingGrid {
    let mut grid = PathingGrid::new(n, n, start, end).unwrap();
    scatter_walls(&mut grid, rng, 0.4).unwrap();
    grid
}

fn random_coord(n: usize, rng: &mut StdRng) -> Coord {
    Coord::new(rng.gen_range(0..n), rng.gen_range(0..n))
}

fn visualize_grid(grid: &PathingGrid, path: &[Coord]) {
    for row in 0..grid.rows() {
        let line = (0..grid.cols())
            .map(|col| {
                let c = Coord::new(row, col);
                if c == grid.start() {
                    'S'
                } else if c == grid.end() {
                    'E'
                } else if grid.is_wall(c) {
                    '#'
                } else if path.contains(&c) {
                    '*'
                } else {
                    '.'
                }
            })
            .collect::<String>();
        println!("{line}");
    }
}

fn check_path(grid: &PathingGrid, result: &SearchResult) {
    assert!(result.visited_count >= result.path_length());
    assert_eq!(result.visited_count, result.visit_order.len());
    assert!(result.visit_order.iter().all_unique());
    if result.found {
        assert_eq!(result.path.first(), Some(&grid.start()));
        assert_eq!(result.path.last(), Some(&grid.end()));
        assert!(is_contiguous(&result.path));
        assert!(result.path.iter().all(|c| !grid.is_wall(*c)));
    } else {
        assert!(result.path.is_empty());
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Coord::new(0, 0);
    let end = Coord::new(N - 1, N - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng, start, end);
        let reachable = ComponentMap::generate(&grid).reachable(start, end);
        for algorithm in Algorithm::ALL {
            let result = search(&mut grid, algorithm, |_| ());
            // Show the grid if the outcome disagrees with the components
            if result.found != reachable {
                println!("{algorithm} found={} reachable={reachable}", result.found);
                visualize_grid(&grid, &result.path);
            }
            assert_eq!(result.found, reachable);
            check_path(&grid, &result);
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let start = random_coord(N, &mut rng);
        let end = random_coord(N, &mut rng);
        let mut grid = random_grid(N, &mut rng, start, end);
        let bfs = search(&mut grid, Algorithm::Bfs, |_| ());
        let dijkstra = search(&mut grid, Algorithm::Dijkstra, |_| ());
        let astar = search(&mut grid, Algorithm::AStar, |_| ());
        let dfs = search(&mut grid, Algorithm::Dfs, |_| ());
        for result in [&bfs, &dijkstra, &astar, &dfs] {
            assert_eq!(result.found, bfs.found);
            check_path(&grid, result);
        }
        if bfs.path_length() != astar.path_length() || bfs.path_length() != dijkstra.path_length()
        {
            println!("BFS path: {:?}\nA* path: {:?}", bfs.path, astar.path);
            visualize_grid(&grid, &astar.path);
        }
        assert_eq!(dijkstra.path_length(), bfs.path_length());
        assert_eq!(astar.path_length(), bfs.path_length());
        assert!(dfs.path_length() >= bfs.path_length());
        if bfs.found {
            let manhattan = start.manhattan_distance(&end) as usize;
            assert!(bfs.path_length() > manhattan);
        }
    }
}

/// Without a path every algorithm floods exactly the start's component.
#[test]
fn fuzz_unreachable_flood() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(2);
    let mut unreachable = 0;
    for _ in 0..N_GRIDS {
        let start = random_coord(N, &mut rng);
        let end = random_coord(N, &mut rng);
        let mut grid = random_grid(N, &mut rng, start, end);
        let components = ComponentMap::generate(&grid);
        if components.reachable(start, end) {
            continue;
        }
        unreachable += 1;
        let size = components.component_size(start);
        for algorithm in Algorithm::ALL {
            let result = search(&mut grid, algorithm, |_| ());
            assert!(!result.found);
            assert_eq!(result.visited_count, size, "{algorithm}");
        }
    }
    assert!(unreachable > 0);
}

#[test]
fn fuzz_deterministic() {
    const N: usize = 12;
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let start = random_coord(N, &mut rng);
        let end = random_coord(N, &mut rng);
        let grid = random_grid(N, &mut rng, start, end);
        for algorithm in Algorithm::ALL {
            let mut a = Pathfinder::from_grid(grid.clone());
            let mut b = Pathfinder::from_grid(grid.clone());
            let mut visits_a = Vec::new();
            let report_a = a.run(algorithm, |c| visits_a.push(c)).unwrap();
            // Dirty the second grid with another run first.
            b.run(Algorithm::Dfs, |_| ()).unwrap();
            let report_b = b.run(algorithm, |_| ()).unwrap();
            assert_eq!(report_a.result, report_b.result);
            assert_eq!(visits_a, report_a.result.visit_order);
        }
    }
}
