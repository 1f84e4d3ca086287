use log::debug;
use rayon::prelude::*;

use crate::error::PathError;
use crate::search::{astar as astar_search, SearchOutcome};
use crate::{Coordinate, SearchConfig, Terrain};

pub mod astar;
pub mod dijkstra;
mod multi_start;

use multi_start::{candidate_starts, select_shortest, CandidateRun};

/// A path found by a search, together with the cell it started from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub start: Coordinate,
    /// The cells walked through, excluding `start` and ending at the goal.
    pub path: Vec<Coordinate>,
    /// Accumulated step cost under the [StepCost](crate::StepCost) the search used.
    pub cost: u32,
}

impl Route {
    /// Number of steps taken, which is the length of [path](Self::path).
    pub fn steps(&self) -> usize {
        self.path.len()
    }

    /// The cell the route ends on.
    pub fn end(&self) -> Coordinate {
        self.path.last().copied().unwrap_or(self.start)
    }

    /// Checks that every consecutive pair of cells is a legal step on `terrain`.
    pub fn is_walkable(&self, terrain: &Terrain) -> bool {
        std::iter::once(&self.start)
            .chain(self.path.iter())
            .zip(self.path.iter())
            .all(|(from, to)| terrain.can_step(from, to))
    }
}

pub trait GridSolver {
    type Successors: IntoIterator<Item = (Coordinate, u32)>;

    fn config(&self) -> &SearchConfig;

    /// Lower bound on the cost of getting from `point` to the goal.
    fn heuristic(&self, terrain: &Terrain, point: &Coordinate) -> u32;

    fn successors(&self, terrain: &Terrain, node: &Coordinate) -> Self::Successors;

    /// Searches from the terrain's designated start cell.
    fn get_path_single_goal(&self, terrain: &Terrain) -> SearchOutcome<Route> {
        search_from(self, terrain, terrain.start())
    }

    /// Searches from an arbitrary start cell.
    fn get_path_from(
        &self,
        terrain: &Terrain,
        start: Coordinate,
    ) -> Result<SearchOutcome<Route>, PathError> {
        terrain.check_bounds(&start)?;
        Ok(search_from(self, terrain, start))
    }

    /// Runs one independent search from every cell accepted by `is_candidate` and keeps the
    /// route with the fewest steps. Ties go to the candidate that comes first in row-major order.
    fn get_path_multiple_starts<F>(&self, terrain: &Terrain, is_candidate: F) -> SearchOutcome<Route>
    where
        F: Fn(&Coordinate) -> bool,
    {
        let (candidates, index) = candidate_starts(self.config(), terrain, is_candidate);
        let runs = candidates.iter().map(|start| {
            CandidateRun::new(*start, index.as_ref(), || search_from(self, terrain, *start))
        });
        select_shortest(runs)
    }

    /// [get_path_multiple_starts](Self::get_path_multiple_starts) with the searches spread over
    /// the rayon thread pool. Returns the same route as the sequential version.
    fn par_get_path_multiple_starts<F>(
        &self,
        terrain: &Terrain,
        is_candidate: F,
    ) -> SearchOutcome<Route>
    where
        Self: Sync,
        F: Fn(&Coordinate) -> bool,
    {
        let (candidates, index) = candidate_starts(self.config(), terrain, is_candidate);
        let runs: Vec<CandidateRun> = candidates
            .par_iter()
            .map(|start| {
                CandidateRun::new(*start, index.as_ref(), || search_from(self, terrain, *start))
            })
            .collect();
        select_shortest(runs)
    }

    /// The shortest route to the goal from any cell as low as the start cell.
    fn get_path_lowest_start(&self, terrain: &Terrain) -> SearchOutcome<Route> {
        self.get_path_multiple_starts(terrain, |c| {
            terrain.has_start_elevation(c).unwrap_or(false)
        })
    }
}

fn search_from<S>(solver: &S, terrain: &Terrain, start: Coordinate) -> SearchOutcome<Route>
where
    S: GridSolver + ?Sized,
{
    debug_assert!(terrain.in_bounds(&start));
    let goal = terrain.goal();
    debug!("Searching from {start} to {goal}");
    astar_search(
        &start,
        |node| solver.successors(terrain, node),
        |point| solver.heuristic(terrain, point),
        |point| *point == goal,
        solver.config().expansion_limit,
    )
    .map(|(path, cost)| Route { start, path, cost })
}
