extern crate generic_pathfinding;
use env_logger::Env;

use criterion::{criterion_group, criterion_main, Criterion};

use generic_pathfinding::{grid, prelude::*, Point};
use log::info;
use nanorand::{Rng, WyRand};

#[derive(Copy, Clone, Debug)]
pub struct Tile {
    cost: isize,
}

#[derive(Clone)]
struct Map {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
}

impl Map {
    pub fn new(width: usize, height: usize) -> Self {
        let tile_count = width * height;
        Map {
            tiles: vec![Tile { cost: 1 }; tile_count],
            width,
            height,
        }
    }

    pub fn new_random(width: usize, height: usize) -> Self {
        let tile_count = width * height;
        let mut tiles = Vec::with_capacity(tile_count);
        let mut rng = WyRand::new_seed(4);
        for _ in 0..tile_count {
            tiles.push(Tile {
                cost: rng.generate_range(0..10u32) as isize - 1,
            });
        }
        let mut map = Map {
            tiles,
            width,
            height,
        };
        // keep the corners used by the benchmarks open
        for (x, y) in [(0, 0), (width - 1, height - 1), (40, 90), (900, 600)] {
            map.set_cost(x, y, 1);
        }
        map
    }

    pub fn set_cost(&mut self, x: usize, y: usize, cost: isize) {
        let pos = self.get_tile_index(x, y);
        if let Some(pos) = pos {
            self.tiles[pos].cost = cost;
        }
    }

    fn get_tile_cost(&self, (x, y): Point) -> isize {
        match self.get_tile_index(x, y) {
            Some(index) => self.tiles[index].cost,
            None => -1,
        }
    }

    fn get_tile_index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            // Index out of bounds
            return None;
        }

        Some(x + y * self.width)
    }
}

// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info") // Change this from info to trace (with the `log` feature) to see every search.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_single_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single Path");

    init();

    for (name, map) in [
        ("Uniform", Map::new(128, 128)),
        ("Random", Map::new_random(128, 128)),
    ] {
        let (width, height) = (map.width, map.height);
        let neighborhood = MooreNeighborhood::new(width, height);

        let id = format!("A*, {} Map, Map Size: ({}, {})", name, width, height);
        group.bench_function(&id, |b| {
            b.iter(|| {
                grid::a_star_search(
                    &neighborhood,
                    |p| map.get_tile_cost(p),
                    (0, 0),
                    (width - 1, height - 1),
                    SearchConfig::default(),
                )
            })
        });

        let id = format!("Dijkstra, {} Map, Map Size: ({}, {})", name, width, height);
        group.bench_function(&id, |b| {
            b.iter(|| {
                grid::dijkstra_search(
                    &neighborhood,
                    |p| map.get_tile_cost(p),
                    (0, 0),
                    &[(width - 1, height - 1)],
                    SearchConfig::default(),
                )
            })
        });
    }

    // For large maps, use a smaller sample size so they don't take 30+s per run.
    group.sample_size(10);

    let (width, height) = (1024, 1024);
    let map = Map::new_random(width, height);
    let neighborhood = ManhattanNeighborhood::new(width, height);

    let id = format!("A*, Large Random Map, Map Size: ({}, {})", width, height);
    group.bench_function(&id, |b| {
        b.iter(|| {
            grid::a_star_search(
                &neighborhood,
                |p| map.get_tile_cost(p),
                (40, 90),
                (900, 600),
                SearchConfig {
                    size_hint: 1 << 16,
                    ..Default::default()
                },
            )
        })
    });

    let id = format!(
        "A*, Large Random Map, Limited Cost, Map Size: ({}, {})",
        width, height
    );
    group.bench_function(&id, |b| {
        b.iter(|| {
            grid::a_star_search(
                &neighborhood,
                |p| map.get_tile_cost(p),
                (40, 90),
                (900, 600),
                SearchConfig::with_max_cost(500),
            )
        })
    });
}

fn bench_hexagons(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hexagons");

    let (width, height) = (256, 256);
    let neighborhood = HexNeighborhood::new(width, height);
    let goal = (width - 1, height - 1);

    group.bench_function("A*, world distances", |b| {
        b.iter(|| {
            a_star_search(
                (0, 0),
                goal,
                |&a, &b| neighborhood.world_distance(a, b),
                |&a, &b| neighborhood.world_heuristic(a, b),
                |&p| neighborhood.neighbors(p),
                SearchConfig::default(),
            )
        })
    });

    group.bench_function("Dijkstra, world distances", |b| {
        b.iter(|| {
            dijkstra_search(
                (0, 0),
                |&a, &b| neighborhood.world_distance(a, b),
                |visit| neighborhood.neighbors(*visit.node()),
                |visit| *visit.node() == goal,
                SearchConfig::default(),
            )
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch");
    group.sample_size(10);

    let (width, height) = (256, 256);
    let map = Map::new_random(width, height);
    let neighborhood = MooreNeighborhood::new(width, height);
    let queries: Vec<(Point, Point)> = (0..64)
        .map(|i| ((i, 0), (width - 1 - i, height - 1)))
        .filter(|&(start, goal)| map.get_tile_cost(start) >= 0 && map.get_tile_cost(goal) >= 0)
        .collect();
    info!("running {} queries per iteration", queries.len());

    let get_cost = |&p: &Point, _: &Point| map.get_tile_cost(p).max(0) as usize;
    let get_heuristic = |&a: &Point, &b: &Point| neighborhood.heuristic(a, b);
    let get_all_neighbors = |&p: &Point| {
        neighborhood
            .neighbors(p)
            .into_iter()
            .map(|other| (map.get_tile_cost(other) >= 0).then_some(other))
            .collect::<Vec<_>>()
    };

    group.bench_function("A*, sequential", |b| {
        b.iter(|| {
            generic_pathfinding::batch::a_star_search_many(
                &queries,
                get_cost,
                get_heuristic,
                get_all_neighbors,
                SearchConfig::default(),
            )
        })
    });

    #[cfg(feature = "parallel")]
    group.bench_function("A*, parallel", |b| {
        b.iter(|| {
            generic_pathfinding::batch::a_star_search_many_parallel(
                &queries,
                get_cost,
                get_heuristic,
                get_all_neighbors,
                SearchConfig::default(),
            )
        })
    });
}

criterion_group!(benches, bench_single_path, bench_hexagons, bench_batch);
criterion_main!(benches);
