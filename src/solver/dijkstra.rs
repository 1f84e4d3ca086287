use smallvec::SmallVec;

use crate::{solver::GridSolver, Coordinate, SearchConfig, Terrain, N_SMALLVEC_SIZE};

/// Uninformed search: A* with a heuristic of zero.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver {
    pub config: SearchConfig,
}

impl DijkstraSolver {
    pub fn new() -> DijkstraSolver {
        DijkstraSolver::default()
    }

    pub fn with_config(config: SearchConfig) -> DijkstraSolver {
        DijkstraSolver { config }
    }
}

impl GridSolver for DijkstraSolver {
    type Successors = SmallVec<[(Coordinate, u32); N_SMALLVEC_SIZE]>;

    fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn successors(&self, terrain: &Terrain, node: &Coordinate) -> Self::Successors {
        terrain.neighbors_and_cost(node, self.config.step_cost)
    }

    fn heuristic(&self, _: &Terrain, _: &Coordinate) -> u32 {
        0
    }
}
