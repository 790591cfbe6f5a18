use core::fmt;
use log::warn;
use std::collections::{vec_deque, VecDeque};

use crate::{container::NodeContainer, examiner::Examiner, Coordinate, NodeId, SearchContext};

/// Height added to every path coordinate. Nodes are the cells an agent stands on, paths list the
/// cells the agent occupies.
pub const PATH_Y_OFFSET: i32 = 1;

/// How a search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    Resolved,
    /// The search ran out of nodes to expand, or was stopped by its examiner, before reaching the
    /// destination.
    Unresolvable,
    /// Start and destination are further apart than the configured range. Checked before any
    /// searching happens.
    RangeExceeded,
    /// The iteration cap was reached before the destination.
    IterationsExceeded,
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SearchStatus::Resolved => "resolved",
            SearchStatus::Unresolvable => "unresolvable",
            SearchStatus::RangeExceeded => "range exceeded",
            SearchStatus::IterationsExceeded => "iterations exceeded",
        };
        f.write_str(name)
    }
}

/// Outcome of a search. The path runs from start to destination and is only present when the
/// search is [Resolved](SearchStatus::Resolved).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    status: SearchStatus,
    path: VecDeque<Coordinate>,
    iterations: usize,
}

impl SearchResult {
    pub(crate) fn failed(status: SearchStatus, iterations: usize) -> SearchResult {
        SearchResult {
            status,
            path: VecDeque::new(),
            iterations,
        }
    }

    /// Reconstructs the path ending in `last`, the node closed last, and verifies that it starts
    /// at the start and ends at a destination.
    pub(crate) fn from_context<C, E>(
        context: &SearchContext<'_, C>,
        examiner: &E,
        last: Option<NodeId>,
    ) -> SearchResult
    where
        C: NodeContainer,
        E: Examiner<C::Data>,
    {
        let iterations = context.iterations();
        let Some(last) = last else {
            return SearchResult::failed(SearchStatus::Unresolvable, iterations);
        };
        let graph = context.container().graph();
        // Agents standing on the top layer of the grid have no cell to occupy
        let shifted = |c: Coordinate| c.checked_offset(0, PATH_Y_OFFSET, 0);
        let Some(path) = graph
            .path_to(last)
            .into_iter()
            .map(shifted)
            .collect::<Option<VecDeque<Coordinate>>>()
        else {
            warn!("Path to {} leaves the grid", graph.node(last).coordinate());
            return SearchResult::failed(SearchStatus::Unresolvable, iterations);
        };
        if path.front().copied() != shifted(context.start()) {
            warn!(
                "Path to {} does not lead back to {}",
                graph.node(last).coordinate(),
                context.start()
            );
            return SearchResult::failed(SearchStatus::Unresolvable, iterations);
        }
        if !examiner.is_destination(graph.node(last)) {
            return SearchResult::failed(SearchStatus::Unresolvable, iterations);
        }
        SearchResult {
            status: SearchStatus::Resolved,
            path,
            iterations,
        }
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }
    pub fn is_resolved(&self) -> bool {
        self.status == SearchStatus::Resolved
    }
    /// Number of expansions the search loop completed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    /// The coordinates left on the path.
    pub fn path(&self) -> &VecDeque<Coordinate> {
        &self.path
    }
    /// Length of the remaining path, none unless the search was resolved.
    pub fn path_length(&self) -> Option<usize> {
        self.is_resolved().then_some(self.path.len())
    }
    /// Takes the next coordinate off the front of the path.
    pub fn remove(&mut self) -> Option<Coordinate> {
        self.path.pop_front()
    }
    pub fn into_path(self) -> Vec<Coordinate> {
        self.path.into()
    }
}

impl IntoIterator for SearchResult {
    type Item = Coordinate;
    type IntoIter = vec_deque::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.path.into_iter()
    }
}
