use criterion::{criterion_group, criterion_main, Criterion};
use hill_climbing::{AstarSolver, DijkstraSolver, GridSolver, Terrain};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

/// A winding ramp from S to E over an n x n grid, with lowered cells scattered around as extra
/// candidate starts.
fn ramp_terrain(n: usize, rng: &mut StdRng) -> Terrain {
    let last = n * n - 1;
    let rows = (0..n).map(|row| {
        (0..n)
            .map(|column| {
                let k = row * n + if row % 2 == 0 { column } else { n - 1 - column };
                match k {
                    0 => 'S',
                    k if k == last => 'E',
                    _ if rng.gen_bool(0.05) => 'a',
                    k => (b'a' + (k * 25 / last) as u8) as char,
                }
            })
            .collect::<String>()
    });
    Terrain::from_rows(rows.collect::<Vec<_>>()).unwrap()
}

fn bench_single_goal(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let terrain = ramp_terrain(64, &mut rng);
    let astar = AstarSolver::new();
    let dijkstra = DijkstraSolver::new();
    c.bench_function("64x64 ramp, Astar", |b| {
        b.iter(|| black_box(astar.get_path_single_goal(&terrain)))
    });
    c.bench_function("64x64 ramp, Dijkstra", |b| {
        b.iter(|| black_box(dijkstra.get_path_single_goal(&terrain)))
    });
}

fn bench_multi_start(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let terrain = ramp_terrain(40, &mut rng);
    let solver = AstarSolver::new();
    let is_low = |p: &hill_climbing::Coordinate| terrain.has_start_elevation(p).unwrap();
    c.bench_function("40x40 ramp, lowest start", |b| {
        b.iter(|| black_box(solver.get_path_multiple_starts(&terrain, is_low)))
    });
    c.bench_function("40x40 ramp, lowest start (parallel)", |b| {
        b.iter(|| black_box(solver.par_get_path_multiple_starts(&terrain, is_low)))
    });
}

criterion_group!(benches, bench_single_goal, bench_multi_start);
criterion_main!(benches);
