use smallvec::SmallVec;

use crate::{solver::GridSolver, Coordinate, SearchConfig, Terrain, N_SMALLVEC_SIZE};

/// A* guided by the Manhattan distance to the goal. Every step costs at least 1 under either
/// [StepCost](crate::StepCost), so the heuristic never overestimates and the returned routes
/// are optimal.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub config: SearchConfig,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver::default()
    }

    pub fn with_config(config: SearchConfig) -> AstarSolver {
        AstarSolver { config }
    }
}

impl GridSolver for AstarSolver {
    type Successors = SmallVec<[(Coordinate, u32); N_SMALLVEC_SIZE]>;

    fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn successors(&self, terrain: &Terrain, node: &Coordinate) -> Self::Successors {
        terrain.neighbors_and_cost(node, self.config.step_cost)
    }

    fn heuristic(&self, terrain: &Terrain, point: &Coordinate) -> u32 {
        // Lossless: a terrain holds at most MAX_CELLS cells.
        point.manhattan_distance(&terrain.goal()) as u32
    }
}
