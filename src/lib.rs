//! # hill_climbing
//!
//! Shortest walking routes over elevation grids. A [Terrain] is a rectangular height map of
//! letters `a..=z` with a start cell `S` and a goal cell `E`; a step to an orthogonal neighbour
//! may climb at most one level but descend any amount.
//!
//! Routes are found with [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) guided by the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) to the goal. Besides
//! the route from the designated start, a solver can find the best route over many candidate
//! starts, optionally spread over a thread pool. A reverse flood fill from the goal is used to
//! skip candidates that cannot reach it.
//!
//! ```
//! use hill_climbing::{AstarSolver, GridSolver, Terrain};
//!
//! let terrain: Terrain = "Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi"
//!     .parse()
//!     .unwrap();
//! let solver = AstarSolver::new();
//! let route = solver.get_path_single_goal(&terrain).found().unwrap();
//! assert_eq!(route.steps(), 31);
//! let scenic = solver.get_path_lowest_start(&terrain).found().unwrap();
//! assert_eq!(scenic.steps(), 29);
//! ```
mod config;
mod coordinate;
mod error;
pub mod reachability;
pub mod render;
mod rules;
pub mod search;
pub mod solver;
mod terrain;

pub use config::{SearchConfig, StepCost};
pub use coordinate::{Coordinate, Direction};
pub use error::{PathError, TerrainError};
pub use render::PathMap;
pub use rules::elevation_cost_of;
pub use search::SearchOutcome;
pub use solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver, Route};
pub use terrain::Terrain;

/// Marks the designated start cell.
pub const START_SYMBOL: char = 'S';
/// Marks the goal cell.
pub const GOAL_SYMBOL: char = 'E';
/// Elevation of the start cell.
pub const START_ELEVATION: u8 = b'a';
/// Elevation of the goal cell.
pub const GOAL_ELEVATION: u8 = b'z';
/// Highest climb allowed in a single step.
pub const MAX_CLIMB: u32 = 1;
/// Largest accepted terrain, in cells. A simple path costs at most 26 per cell, so any path cost
/// plus its Manhattan estimate stays well inside `u32`.
pub const MAX_CELLS: usize = (u32::MAX / 32) as usize;
/// Inline capacity for neighbour lists; a cell has at most four orthogonal neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;
