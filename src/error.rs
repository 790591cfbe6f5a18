use crate::Coordinate;
use thiserror::Error;

/// A broken node invariant. These are programming errors of a container, factory or examiner
/// implementation, never the outcome of a search; see [SearchStatus](crate::SearchStatus) for
/// those.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidOperation {
    #[error("node {0} cannot be its own parent")]
    SelfParent(Coordinate),

    #[error("start node {0} cannot be given a parent")]
    ParentOfStart(Coordinate),

    #[error("parent {parent} is not horizontally adjacent to node {node}")]
    NotAdjacent { node: Coordinate, parent: Coordinate },

    /// The score handed to `set_parent` was computed for another node or another parent.
    #[error("score of {scored} via {scored_parent:?} does not describe node {node} via {parent:?}")]
    ScoreMismatch {
        node: Coordinate,
        parent: Option<Coordinate>,
        scored: Coordinate,
        scored_parent: Option<Coordinate>,
    },

    /// Only the start node may be opened without a parent.
    #[error("node {node} opened without a parent while {start} is the start node")]
    SecondStart { node: Coordinate, start: Coordinate },
}
