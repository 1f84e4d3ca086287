use crate::rules::level_cost;
use crate::{Coordinate, Terrain};

/// What a single legal step costs during a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StepCost {
    /// Every step costs 1, so the cheapest path is the one with the fewest steps.
    #[default]
    Unit,
    /// A step costs the elevation cost of the cell it enters, so the cheapest path is the one
    /// that climbs the least in total.
    Elevation,
}

impl StepCost {
    pub(crate) fn of(self, terrain: &Terrain, to: &Coordinate) -> u32 {
        match self {
            StepCost::Unit => 1,
            StepCost::Elevation => level_cost(terrain.elevation_unchecked(to)),
        }
    }
}

/// Settings shared by every solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub step_cost: StepCost,
    /// Give up after expanding this many nodes in a single search.
    pub expansion_limit: Option<usize>,
    /// Skip candidate starts in multi-start queries when a flood fill from the goal shows they
    /// cannot reach it. Does not change any result.
    pub prune_unreachable: bool,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            step_cost: StepCost::Unit,
            expansion_limit: None,
            prune_unreachable: true,
        }
    }
}
