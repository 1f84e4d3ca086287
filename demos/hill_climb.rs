use hill_climbing::{AstarSolver, GridSolver, PathMap, SearchOutcome, Terrain};
use std::error::Error;
use std::fs;

// Reads a terrain such as
//
// Sabqponm
// abcryxxl
// accszExk
// acctuvwj
// abdefghi
//
// from the file given as the first argument (input.txt by default), where
// - S marks the start, at elevation a
// - E marks the goal, at elevation z
// - every step may climb at most one letter
//
// and prints the route from S as well as the best route from any cell at elevation a.

fn report(title: &str, terrain: &Terrain, outcome: &SearchOutcome<hill_climbing::Route>) {
    println!("{title}:");
    match outcome {
        SearchOutcome::Found(route) => {
            println!("Path length: {} (from {})", route.steps(), route.start);
            println!("{}", PathMap::new(terrain, route));
        }
        SearchOutcome::Exhausted => println!("No path exists\n"),
        SearchOutcome::Aborted { expanded } => {
            println!("Gave up after expanding {expanded} nodes\n")
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let file_name = std::env::args().nth(1).unwrap_or_else(|| "input.txt".to_owned());
    let terrain: Terrain = fs::read_to_string(&file_name)?.parse()?;
    println!("{terrain}");

    let solver = AstarSolver::new();
    report("From S", &terrain, &solver.get_path_single_goal(&terrain));
    report(
        "Scenic",
        &terrain,
        &solver.par_get_path_multiple_starts(&terrain, |c| {
            terrain.has_start_elevation(c).unwrap_or(false)
        }),
    );
    Ok(())
}
