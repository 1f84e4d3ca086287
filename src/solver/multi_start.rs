use log::{debug, info};

use crate::reachability::ReachabilityIndex;
use crate::search::SearchOutcome;
use crate::solver::Route;
use crate::{Coordinate, SearchConfig, Terrain};

/// Result of considering one candidate start.
#[derive(Clone, Debug)]
pub(crate) struct CandidateRun {
    start: Coordinate,
    outcome: SearchOutcome<Route>,
    pruned: bool,
}

impl CandidateRun {
    /// Runs `search` unless `index` proves that `start` cannot reach the goal, in which case the
    /// run counts as exhausted straight away.
    pub(crate) fn new<F>(start: Coordinate, index: Option<&ReachabilityIndex>, search: F) -> Self
    where
        F: FnOnce() -> SearchOutcome<Route>,
    {
        if index.is_some_and(|index| !index.can_reach_goal(&start)) {
            debug!("Skipping {start}, the goal is out of reach");
            CandidateRun {
                start,
                outcome: SearchOutcome::Exhausted,
                pruned: true,
            }
        } else {
            CandidateRun {
                start,
                outcome: search(),
                pruned: false,
            }
        }
    }
}

/// Every accepted cell in row-major order, plus a reachability index when pruning is on and
/// there is more than one candidate to prune.
pub(crate) fn candidate_starts<F>(
    config: &SearchConfig,
    terrain: &Terrain,
    is_candidate: F,
) -> (Vec<Coordinate>, Option<ReachabilityIndex>)
where
    F: Fn(&Coordinate) -> bool,
{
    let candidates = terrain
        .coordinates()
        .filter(|c| is_candidate(c))
        .collect::<Vec<_>>();
    let index = (config.prune_unreachable && candidates.len() > 1)
        .then(|| ReachabilityIndex::new(terrain));
    (candidates, index)
}

/// Keeps the found route with the fewest steps; the first one wins a tie. Without any found
/// route the outcome is [Aborted](SearchOutcome::Aborted) if some run gave up, and
/// [Exhausted](SearchOutcome::Exhausted) otherwise.
pub(crate) fn select_shortest<I>(runs: I) -> SearchOutcome<Route>
where
    I: IntoIterator<Item = CandidateRun>,
{
    let mut considered = 0;
    let mut pruned = 0;
    let mut aborted_expansions = None;
    let mut found = Vec::new();
    for run in runs {
        considered += 1;
        if run.pruned {
            pruned += 1;
        }
        match run.outcome {
            SearchOutcome::Found(route) => found.push(route),
            SearchOutcome::Exhausted => {}
            SearchOutcome::Aborted { expanded } => {
                *aborted_expansions.get_or_insert(0) += expanded;
                debug!("Search from {} was aborted", run.start);
            }
        }
    }
    let reached = found.len();
    // min_by_key keeps the first of several equal minima.
    match found.into_iter().min_by_key(Route::steps) {
        Some(route) => {
            info!(
                "Best of {considered} starts ({pruned} pruned, {reached} reached the goal): {} steps from {}",
                route.steps(),
                route.start
            );
            SearchOutcome::Found(route)
        }
        None => match aborted_expansions {
            Some(expanded) => SearchOutcome::Aborted { expanded },
            None => {
                info!("None of {considered} starts reach the goal ({pruned} pruned)");
                SearchOutcome::Exhausted
            }
        },
    }
}
