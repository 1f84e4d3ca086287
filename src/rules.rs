use smallvec::SmallVec;

use crate::config::StepCost;
use crate::error::PathError;
use crate::{
    Coordinate, Terrain, GOAL_ELEVATION, GOAL_SYMBOL, MAX_CLIMB, N_SMALLVEC_SIZE,
    START_ELEVATION, START_SYMBOL,
};

/// Cost of a terrain symbol as returned by [Terrain::symbol]: `S` and `a` cost 1, `E` and `z`
/// cost 26. Anything else has no cost.
pub fn elevation_cost_of(symbol: char) -> Option<u32> {
    match symbol {
        START_SYMBOL => Some(level_cost(START_ELEVATION)),
        GOAL_SYMBOL => Some(level_cost(GOAL_ELEVATION)),
        'a'..='z' => Some(level_cost(symbol as u8)),
        _ => None,
    }
}

/// Cost of an elevation letter already known to lie in `a..=z`.
pub(crate) fn level_cost(elevation: u8) -> u32 {
    debug_assert!(elevation.is_ascii_lowercase());
    (elevation - START_ELEVATION) as u32 + 1
}

impl Terrain {
    /// Cost of standing on a cell: 1 for `S` and `a`, 26 for `E` and `z`.
    pub fn elevation_cost(&self, coordinate: &Coordinate) -> Result<u32, PathError> {
        Ok(level_cost(self.elevation(coordinate)?))
    }

    /// Whether a single step from `from` to the adjacent cell `to` is legal: climbing at most
    /// [MAX_CLIMB] levels, descending any amount.
    pub fn can_step(&self, from: &Coordinate, to: &Coordinate) -> bool {
        self.in_bounds(from)
            && self.in_bounds(to)
            && from.manhattan_distance(to) == 1
            && self.climb_allowed(from, to)
    }

    fn climb_allowed(&self, from: &Coordinate, to: &Coordinate) -> bool {
        level_cost(self.elevation_unchecked(to))
            <= level_cost(self.elevation_unchecked(from)) + MAX_CLIMB
    }

    /// The orthogonal neighbours reachable in one step, in the order up, down, left, right.
    pub fn neighbors(
        &self,
        coordinate: &Coordinate,
    ) -> Result<SmallVec<[Coordinate; N_SMALLVEC_SIZE]>, PathError> {
        self.check_bounds(coordinate)?;
        Ok(self.neighbors_unchecked(coordinate))
    }

    /// Like [neighbors](Self::neighbors) for a coordinate already known to be in bounds.
    pub(crate) fn neighbors_unchecked(
        &self,
        coordinate: &Coordinate,
    ) -> SmallVec<[Coordinate; N_SMALLVEC_SIZE]> {
        coordinate
            .neumann_neighborhood()
            .into_iter()
            .filter(|n| self.in_bounds(n) && self.climb_allowed(coordinate, n))
            .collect()
    }

    /// Legal neighbours paired with the cost of stepping onto them.
    pub(crate) fn neighbors_and_cost(
        &self,
        coordinate: &Coordinate,
        step_cost: StepCost,
    ) -> SmallVec<[(Coordinate, u32); N_SMALLVEC_SIZE]> {
        self.neighbors_unchecked(coordinate)
            .into_iter()
            .map(|n| (n, step_cost.of(self, &n)))
            .collect()
    }
}
