use crate::{container::NodeContainer, Node, Score, SearchContext};
use std::time::{Duration, Instant};

pub mod walking;

/// Verdict of [Examiner::is_pathable] on a single candidate cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pathability {
    /// The candidate can be moved to.
    Valid,
    /// Only this candidate is rejected; cells below it are still examined.
    InvalidPoint,
    /// This candidate is rejected, and so is every cell below it that is left in the current
    /// vertical scan of its column.
    InvalidColumn,
}

/// The terrain policy a search runs with. The engine asks it whether the goal has been reached,
/// whether to keep going, which neighbours can be moved to and what reaching them costs.
pub trait Examiner<D = ()> {
    /// Whether `node` satisfies the goal of the search.
    fn is_destination(&self, node: &Node<D>) -> bool;

    /// Checked once per iteration; returning `false` ends the search as if the open set had run
    /// dry. Used for cancellation and wall-clock budgets.
    fn can_search<C>(&self, _context: &SearchContext<'_, C>) -> bool
    where
        C: NodeContainer<Data = D>,
    {
        true
    }

    /// Whether `to`, a neighbour of `from`, can be moved to.
    fn is_pathable(&self, from: &Node<D>, to: &Node<D>) -> Pathability;

    /// The score of `node` when reached through `parent`, which is none for the start node.
    ///
    /// The returned [Score::node] must be the coordinate of `node` and [Score::parent] that of
    /// `parent`. A score for any other pair is rejected by the container and ends the search with
    /// [InvalidOperation::ScoreMismatch](crate::InvalidOperation::ScoreMismatch).
    fn score(&self, parent: Option<&Node<D>>, node: &Node<D>) -> Score;
}

impl<D, E: Examiner<D>> Examiner<D> for &E {
    fn is_destination(&self, node: &Node<D>) -> bool {
        (**self).is_destination(node)
    }
    fn can_search<C>(&self, context: &SearchContext<'_, C>) -> bool
    where
        C: NodeContainer<Data = D>,
    {
        (**self).can_search(context)
    }
    fn is_pathable(&self, from: &Node<D>, to: &Node<D>) -> Pathability {
        (**self).is_pathable(from, to)
    }
    fn score(&self, parent: Option<&Node<D>>, node: &Node<D>) -> Score {
        (**self).score(parent, node)
    }
}

/// Wraps an examiner so that searches stop once a deadline has passed. The deadline is only
/// looked at between iterations, a single expansion is never interrupted.
#[derive(Clone, Debug)]
pub struct TimeLimited<E> {
    pub inner: E,
    pub deadline: Instant,
}

impl<E> TimeLimited<E> {
    pub fn new(inner: E, deadline: Instant) -> TimeLimited<E> {
        TimeLimited { inner, deadline }
    }

    /// Deadline `budget` from now.
    pub fn with_budget(inner: E, budget: Duration) -> TimeLimited<E> {
        TimeLimited::new(inner, Instant::now() + budget)
    }
}

impl<D, E: Examiner<D>> Examiner<D> for TimeLimited<E> {
    fn is_destination(&self, node: &Node<D>) -> bool {
        self.inner.is_destination(node)
    }
    fn can_search<C>(&self, context: &SearchContext<'_, C>) -> bool
    where
        C: NodeContainer<Data = D>,
    {
        Instant::now() < self.deadline && self.inner.can_search(context)
    }
    fn is_pathable(&self, from: &Node<D>, to: &Node<D>) -> Pathability {
        self.inner.is_pathable(from, to)
    }
    fn score(&self, parent: Option<&Node<D>>, node: &Node<D>) -> Score {
        self.inner.score(parent, node)
    }
}
