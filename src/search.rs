//! A generic A* core in the style of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html).
//! The best-cost and predecessor maps live in a single insertion-ordered map so that frontier
//! entries and back-pointers can refer to nodes by index.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, warn};
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Terminal state of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome<T> {
    /// The goal was popped from the frontier.
    Found(T),
    /// The frontier ran dry; the goal cannot be reached.
    Exhausted,
    /// The configured expansion limit was hit first.
    Aborted { expanded: usize },
}

impl<T> SearchOutcome<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> SearchOutcome<U> {
        match self {
            SearchOutcome::Found(t) => SearchOutcome::Found(f(t)),
            SearchOutcome::Exhausted => SearchOutcome::Exhausted,
            SearchOutcome::Aborted { expanded } => SearchOutcome::Aborted { expanded },
        }
    }

    pub fn found(self) -> Option<T> {
        match self {
            SearchOutcome::Found(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_found(&self) -> Option<&T> {
        match self {
            SearchOutcome::Found(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
    sequence: usize,
}

impl<K: Ord> Eq for SmallestCostHolder<K> {}

impl<K: Ord> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first. Ties go to the largest cost so far, so deeper nodes are
        // expanded first, and after that to the most recent push.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Per-call search state: the frontier plus the combined best-cost and predecessor map.
/// Nothing in here outlives a single call to [astar].
pub(crate) struct SearchSession<N, C> {
    parents: FxIndexMap<N, (usize, C)>,
    frontier: BinaryHeap<SmallestCostHolder<C>>,
    pushed: usize,
}

impl<N, C> SearchSession<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    pub(crate) fn new(start: &N, start_estimate: C) -> Self {
        let mut parents = FxIndexMap::default();
        parents.insert(start.clone(), (usize::MAX, Zero::zero()));
        let mut session = SearchSession {
            parents,
            frontier: BinaryHeap::new(),
            pushed: 0,
        };
        session.push(0, Zero::zero(), start_estimate);
        session
    }

    fn push(&mut self, index: usize, cost: C, estimated_cost: C) {
        self.frontier.push(SmallestCostHolder {
            estimated_cost,
            cost,
            index,
            sequence: self.pushed,
        });
        self.pushed += 1;
    }

    /// Pops the next entry that still carries the best known cost of its node.
    fn pop(&mut self) -> Option<(usize, C)> {
        while let Some(SmallestCostHolder { cost, index, .. }) = self.frontier.pop() {
            let (_, best) = self.parents[index];
            // A node is pushed again each time a cheaper route to it is found; older entries
            // are dropped here.
            if cost > best {
                continue;
            }
            return Some((index, cost));
        }
        None
    }

    /// Records `cost` as the cost of reaching `node` through `parent` if it beats the known
    /// cost, and queues the node. Returns whether the record changed.
    pub(crate) fn relax<FH>(&mut self, parent: usize, node: N, cost: C, heuristic: &mut FH) -> bool
    where
        FH: FnMut(&N) -> C,
    {
        let (index, h) = match self.parents.entry(node) {
            Vacant(e) => {
                let h = heuristic(e.key());
                let index = e.index();
                e.insert((parent, cost));
                (index, h)
            }
            Occupied(mut e) => {
                if cost < e.get().1 {
                    let h = heuristic(e.key());
                    let index = e.index();
                    e.insert((parent, cost));
                    (index, h)
                } else {
                    return false;
                }
            }
        };
        self.push(index, cost, cost + h);
        true
    }

    #[cfg(test)]
    pub(crate) fn best_cost(&self, node: &N) -> Option<C> {
        self.parents.get(node).map(|&(_, c)| c)
    }

    /// Follows predecessors back from `index`, returning the nodes in walking order without
    /// the start node.
    fn reverse_path(&self, index: usize) -> Vec<N> {
        let mut path: Vec<N> = std::iter::successors(Some(index), |&i| {
            self.parents
                .get_index(i)
                .map(|(_, &(parent, _))| parent)
                .filter(|&p| p != usize::MAX)
        })
        .filter_map(|i| self.parents.get_index(i).map(|(node, _)| node.clone()))
        .collect();
        path.pop();
        path.reverse();
        path
    }
}

/// Runs A* from `start` until `success` accepts a popped node.
///
/// `successors` yields `(node, step cost)` pairs; `heuristic` must not overestimate the remaining
/// cost for the returned path to be optimal. The found path excludes `start` and ends at the
/// goal, so its length is the number of steps taken. With `expansion_limit` set, the search
/// gives up after expanding that many nodes.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    expansion_limit: Option<usize>,
) -> SearchOutcome<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut session = SearchSession::new(start, heuristic(start));
    let mut expanded = 0;
    while let Some((index, cost)) = session.pop() {
        let successors = {
            let (node, _) = session.parents.get_index(index).unwrap();
            if success(node) {
                debug!("Goal reached after expanding {expanded} nodes");
                return SearchOutcome::Found((session.reverse_path(index), cost));
            }
            if expansion_limit.is_some_and(|limit| expanded >= limit) {
                warn!("Search aborted after expanding {expanded} nodes");
                return SearchOutcome::Aborted { expanded };
            }
            expanded += 1;
            successors(node)
        };
        for (successor, move_cost) in successors {
            session.relax(index, successor, cost + move_cost, &mut heuristic);
        }
    }
    debug!("Frontier exhausted after expanding {expanded} nodes");
    SearchOutcome::Exhausted
}

#[cfg(test)]
mod tests {
    use super::*;

    // A line graph 0 - 1 - 2 - ... - 9 with unit edges.
    fn line_successors(n: &i32) -> Vec<(i32, u32)> {
        [n - 1, n + 1]
            .into_iter()
            .filter(|m| (0..10).contains(m))
            .map(|m| (m, 1))
            .collect()
    }

    #[test]
    fn finds_path_excluding_start() {
        let outcome = astar(
            &2,
            line_successors,
            |n| (7 - n).unsigned_abs(),
            |n| *n == 7,
            None,
        );
        assert_eq!(outcome, SearchOutcome::Found((vec![3, 4, 5, 6, 7], 5)));
    }

    #[test]
    fn start_equal_to_goal_gives_empty_path() {
        let outcome = astar(&4, line_successors, |_| 0, |n| *n == 4, None);
        assert_eq!(outcome, SearchOutcome::Found((vec![], 0)));
    }

    #[test]
    fn exhausts_when_goal_is_missing() {
        let outcome = astar(&0, line_successors, |_| 0u32, |n| *n == 42, None);
        assert_eq!(outcome, SearchOutcome::Exhausted);
    }

    #[test]
    fn aborts_at_expansion_limit() {
        let outcome = astar(&0, line_successors, |_| 0u32, |n| *n == 9, Some(3));
        assert_eq!(outcome, SearchOutcome::Aborted { expanded: 3 });
        // A generous limit changes nothing.
        let outcome = astar(&0, line_successors, |_| 0u32, |n| *n == 9, Some(100));
        assert!(outcome.is_found());
    }

    #[test]
    fn prefers_cheaper_route_over_fewer_hops() {
        // 0 -> 1 costs 10, but 0 -> 2 -> 3 -> 1 costs 3.
        let edges = |n: &u8| -> Vec<(u8, u32)> {
            match n {
                0 => vec![(1, 10), (2, 1)],
                2 => vec![(3, 1)],
                3 => vec![(1, 1)],
                _ => vec![],
            }
        };
        let outcome = astar(&0, edges, |_| 0, |n| *n == 1, None);
        assert_eq!(outcome, SearchOutcome::Found((vec![2, 3, 1], 3)));
    }

    #[test]
    fn relax_only_accepts_strict_improvements() {
        let mut h = |_: &u8| 0u32;
        let mut session: SearchSession<u8, u32> = SearchSession::new(&0, 0);
        assert!(session.relax(0, 1, 9, &mut h));
        assert_eq!(session.best_cost(&1), Some(9));
        assert!(!session.relax(0, 1, 9, &mut h));
        assert!(!session.relax(0, 1, 12, &mut h));
        assert!(session.relax(0, 1, 4, &mut h));
        assert_eq!(session.best_cost(&1), Some(4));
        // The start keeps cost zero and can never be improved.
        assert!(!session.relax(1, 0, 0, &mut h));
        assert_eq!(session.best_cost(&0), Some(0));
    }

    #[test]
    fn stale_entries_are_skipped() {
        let mut h = |_: &u8| 0u32;
        let mut session: SearchSession<u8, u32> = SearchSession::new(&0, 0);
        assert_eq!(session.pop(), Some((0, 0)));
        session.relax(0, 1, 9, &mut h);
        session.relax(0, 1, 4, &mut h);
        assert_eq!(session.pop(), Some((1, 4)));
        // The entry with cost 9 is stale and never surfaces.
        assert_eq!(session.pop(), None);
    }

    #[test]
    fn equal_priorities_pop_deeper_then_newer() {
        let mut session: SearchSession<u8, u32> = SearchSession::new(&0, 10);
        assert_eq!(session.pop(), Some((0, 0)));
        // Estimated cost 10 everywhere, different costs so far.
        let mut h = |n: &u8| if *n == 1 { 8 } else { 7 };
        session.relax(0, 1, 2, &mut h);
        session.relax(0, 2, 3, &mut h);
        session.relax(0, 3, 3, &mut h);
        assert_eq!(session.pop(), Some((3, 3)));
        assert_eq!(session.pop(), Some((2, 3)));
        assert_eq!(session.pop(), Some((1, 2)));
    }
}
