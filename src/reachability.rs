use fxhash::FxHashSet;
use log::debug;
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::{Bfs, Reversed};

use crate::{Coordinate, Terrain};

/// The set of cells from which the goal can be reached at all. Built by flood-filling the climb
/// graph backwards from the goal, which lets multi-start queries skip hopeless candidates
/// without running a search for each of them.
#[derive(Clone, Debug)]
pub struct ReachabilityIndex {
    reaching: FxHashSet<Coordinate>,
}

impl ReachabilityIndex {
    pub fn new(terrain: &Terrain) -> ReachabilityIndex {
        let mut graph: DiGraphMap<Coordinate, ()> = DiGraphMap::new();
        for from in terrain.coordinates() {
            graph.add_node(from);
            for to in terrain.neighbors_unchecked(&from) {
                graph.add_edge(from, to, ());
            }
        }
        let reversed = Reversed(&graph);
        let mut bfs = Bfs::new(reversed, terrain.goal());
        let mut reaching = FxHashSet::default();
        while let Some(node) = bfs.next(reversed) {
            reaching.insert(node);
        }
        debug!(
            "{} of {} cells can reach the goal",
            reaching.len(),
            graph.node_count()
        );
        ReachabilityIndex { reaching }
    }

    pub fn can_reach_goal(&self, coordinate: &Coordinate) -> bool {
        self.reaching.contains(coordinate)
    }

    /// Number of cells that can reach the goal, the goal included.
    pub fn len(&self) -> usize {
        self.reaching.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reaching.is_empty()
    }
}
