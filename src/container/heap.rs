use fxhash::{FxHashMap, FxHashSet};
use log::trace;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::NodeContainer;
use crate::{
    examiner::Examiner, InvalidOperation, Node, NodeFactory, NodeGraph, NodeId, PlainNodeFactory,
};

struct SmallestScoreHolder {
    f: f64,
    sequence: u64,
    id: NodeId,
}

impl Eq for SmallestScoreHolder {}

impl PartialEq for SmallestScoreHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestScoreHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestScoreHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the lowest F is the greatest, ties go to the earliest insertion
        match other.f.total_cmp(&self.f) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Default [NodeContainer]: a binary heap ordered by F score holds the open set and a hash set the
/// closed one. Improving the route to an open node pushes a new heap entry; the outdated entry
/// stays in the heap and is skipped when popped.
pub struct HeapNodeContainer<D = (), F = PlainNodeFactory> {
    factory: F,
    graph: NodeGraph<D>,
    to_see: BinaryHeap<SmallestScoreHolder>,
    /// Sequence number of the live heap entry of every open node.
    open: FxHashMap<NodeId, u64>,
    closed: FxHashSet<NodeId>,
    sequence: u64,
}

impl HeapNodeContainer {
    pub fn new() -> HeapNodeContainer {
        HeapNodeContainer::with_factory(PlainNodeFactory)
    }
}

impl Default for HeapNodeContainer {
    fn default() -> Self {
        HeapNodeContainer::new()
    }
}

impl<D, F: NodeFactory<D>> HeapNodeContainer<D, F> {
    pub fn with_factory(factory: F) -> HeapNodeContainer<D, F> {
        HeapNodeContainer {
            factory,
            graph: NodeGraph::new(),
            to_see: BinaryHeap::new(),
            open: FxHashMap::default(),
            closed: FxHashSet::default(),
            sequence: 0,
        }
    }
    pub fn is_open(&self, id: NodeId) -> bool {
        self.open.contains_key(&id)
    }
    pub fn is_closed(&self, id: NodeId) -> bool {
        self.closed.contains(&id)
    }
    pub fn open_len(&self) -> usize {
        self.open.len()
    }
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }
}

impl<D, F: NodeFactory<D>> NodeContainer for HeapNodeContainer<D, F> {
    type Data = D;
    type Factory = F;

    fn open<E>(
        &mut self,
        examiner: &E,
        parent: Option<NodeId>,
        node: Node<D>,
    ) -> Result<NodeId, InvalidOperation>
    where
        E: Examiner<D>,
    {
        let (id, inserted) = self.graph.insert(node);
        if self.closed.contains(&id) {
            return Ok(id);
        }
        match parent {
            None => self.graph.mark_start(id)?,
            // The start is where every route begins, it is never re-parented
            Some(_) if self.graph.is_start(id) => return Ok(id),
            Some(_) => {}
        }
        let score = examiner.score(parent.map(|p| self.graph.node(p)), self.graph.node(id));
        if !inserted {
            if let Some(known) = self.graph.node(id).score() {
                if score.f() >= known.f() {
                    return Ok(id);
                }
            }
        }
        self.graph.set_parent(id, parent, score)?;
        self.sequence += 1;
        self.open.insert(id, self.sequence);
        self.to_see.push(SmallestScoreHolder {
            f: score.f(),
            sequence: self.sequence,
            id,
        });
        Ok(id)
    }

    fn close_best(&mut self) -> Option<NodeId> {
        while let Some(SmallestScoreHolder { sequence, id, .. }) = self.to_see.pop() {
            // Entries superseded by a better route are discarded here
            if self.open.get(&id) != Some(&sequence) {
                continue;
            }
            self.open.remove(&id);
            self.closed.insert(id);
            trace!("Closed {}", self.graph.node(id).coordinate());
            return Some(id);
        }
        None
    }

    fn node_factory(&self) -> &F {
        &self.factory
    }

    fn graph(&self) -> &NodeGraph<D> {
        &self.graph
    }

    fn clear(&mut self) {
        self.graph.clear();
        self.to_see.clear();
        self.open.clear();
        self.closed.clear();
        self.sequence = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{examiner::Pathability, Coordinate, Score};

    /// Scores every node by its distance to the origin, optionally adding a fixed penalty to
    /// routes through one cell.
    struct OriginExaminer {
        penalized: Option<Coordinate>,
    }

    impl Examiner for OriginExaminer {
        fn is_destination(&self, _node: &Node) -> bool {
            false
        }
        fn is_pathable(&self, _from: &Node, _to: &Node) -> Pathability {
            Pathability::Valid
        }
        fn score(&self, parent: Option<&Node>, node: &Node) -> Score {
            let c = node.coordinate();
            let penalty = match parent {
                Some(p) if Some(p.coordinate()) == self.penalized => 10.0,
                _ => 0.0,
            };
            let g = parent.and_then(|p| p.score()).map_or(0.0, |s| s.g() + 1.0) + penalty;
            Score::new(c, parent.map(|p| p.coordinate()), g, c.distance(&Coordinate::default()))
        }
    }

    fn plain(x: i32, y: i32, z: i32) -> Node {
        Node::new(Coordinate::new(x, y, z), ())
    }

    #[test]
    fn closes_in_score_order() {
        let examiner = OriginExaminer { penalized: None };
        let mut container = HeapNodeContainer::new();
        let start = container.open(&examiner, None, plain(0, 0, 0)).unwrap();
        let far = container.open(&examiner, Some(start), plain(1, 0, 1)).unwrap();
        let near = container.open(&examiner, Some(start), plain(1, 0, 0)).unwrap();
        assert_eq!(container.close_best(), Some(start));
        assert_eq!(container.close_best(), Some(near));
        assert_eq!(container.close_best(), Some(far));
        assert_eq!(container.close_best(), None);
        assert_eq!(container.closed_len(), 3);
    }

    #[test]
    fn ties_break_by_insertion_order() {
        let examiner = OriginExaminer { penalized: None };
        let mut container = HeapNodeContainer::new();
        let start = container.open(&examiner, None, plain(0, 0, 0)).unwrap();
        container.close_best();
        let ids: Vec<NodeId> = [(1, 0, 0), (0, 0, 1), (-1, 0, 0), (0, 0, -1)]
            .into_iter()
            .map(|(x, y, z)| container.open(&examiner, Some(start), plain(x, y, z)).unwrap())
            .collect();
        let closed: Vec<NodeId> = std::iter::from_fn(|| container.close_best()).collect();
        assert_eq!(closed, ids);
    }

    #[test]
    fn better_route_replaces_parent() {
        let examiner = OriginExaminer {
            penalized: Some(Coordinate::new(1, 0, 0)),
        };
        let mut container = HeapNodeContainer::new();
        let start = container.open(&examiner, None, plain(0, 0, 0)).unwrap();
        let detour = container.open(&examiner, Some(start), plain(1, 0, 0)).unwrap();
        let target = container.open(&examiner, Some(detour), plain(1, 0, 1)).unwrap();
        assert_eq!(container.graph().node(target).parent(), Some(detour));

        // Reaching the same cell straight from the start avoids the penalty
        let again = container.open(&examiner, Some(start), plain(1, 0, 1)).unwrap();
        assert_eq!(again, target);
        assert_eq!(container.graph().node(target).parent(), Some(start));
        assert_eq!(container.open_len(), 3);

        // The worse route does not undo the improvement
        container.open(&examiner, Some(detour), plain(1, 0, 1)).unwrap();
        assert_eq!(container.graph().node(target).parent(), Some(start));

        let closed: Vec<NodeId> = std::iter::from_fn(|| container.close_best()).collect();
        assert_eq!(closed.iter().filter(|&&id| id == target).count(), 1);
        assert_eq!(closed.len(), 3);
    }

    #[test]
    fn closed_nodes_ignore_open() {
        let examiner = OriginExaminer { penalized: None };
        let mut container = HeapNodeContainer::new();
        let start = container.open(&examiner, None, plain(0, 0, 0)).unwrap();
        let a = container.open(&examiner, Some(start), plain(1, 0, 0)).unwrap();
        container.close_best();
        container.close_best();
        assert!(container.is_closed(a));
        let before = container.graph().node(start).score().copied();
        // Neither the closed start nor the closed neighbour are reopened
        container.open(&examiner, Some(a), plain(0, 0, 0)).unwrap();
        container.open(&examiner, Some(start), plain(1, 0, 0)).unwrap();
        assert_eq!(container.graph().node(start).parent(), None);
        assert_eq!(container.graph().node(start).score().copied(), before);
        assert_eq!(container.close_best(), None);
    }

    #[test]
    fn open_start_is_not_reparented() {
        let examiner = OriginExaminer { penalized: None };
        let mut container = HeapNodeContainer::new();
        let start = container.open(&examiner, None, plain(0, 0, 0)).unwrap();
        let a = container.open(&examiner, Some(start), plain(1, 0, 0)).unwrap();
        assert_eq!(container.open(&examiner, Some(a), plain(0, 0, 0)), Ok(start));
        assert_eq!(container.graph().node(start).parent(), None);
    }

    #[test]
    fn second_parentless_node_is_an_error() {
        let examiner = OriginExaminer { penalized: None };
        let mut container = HeapNodeContainer::new();
        container.open(&examiner, None, plain(0, 0, 0)).unwrap();
        assert!(matches!(
            container.open(&examiner, None, plain(3, 0, 0)),
            Err(InvalidOperation::SecondStart { .. })
        ));
    }

    #[test]
    fn clear_forgets_everything() {
        let examiner = OriginExaminer { penalized: None };
        let mut container = HeapNodeContainer::new();
        let start = container.open(&examiner, None, plain(0, 0, 0)).unwrap();
        container.open(&examiner, Some(start), plain(1, 0, 0)).unwrap();
        container.clear();
        assert!(container.graph().is_empty());
        assert_eq!(container.close_best(), None);
        // A new start can be seeded after clearing
        assert!(container.open(&examiner, None, plain(5, 0, 5)).is_ok());
    }

    #[test]
    fn relative_uses_factory() {
        let container: HeapNodeContainer<i32, _> =
            HeapNodeContainer::with_factory(|c: Coordinate| c.x + c.y + c.z);
        let origin = container.node_factory().create(Coordinate::new(1, 1, 1), None);
        let node = container.relative(&origin, 1, -3, 0);
        assert_eq!(node.coordinate(), Coordinate::new(2, -2, 1));
        assert_eq!(*node.data(), 1);
    }
}
