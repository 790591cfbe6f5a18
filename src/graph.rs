use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;

use crate::{Coordinate, InvalidOperation, Node, NodeId, Score};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Arena holding every node discovered during one search, keyed by coordinate so that there is
/// exactly one canonical node per cell. A [NodeId] is the insertion index of a node.
#[derive(Clone, Debug)]
pub struct NodeGraph<D = ()> {
    nodes: FxIndexMap<Coordinate, Node<D>>,
    start: Option<NodeId>,
}

impl<D> Default for NodeGraph<D> {
    fn default() -> Self {
        NodeGraph {
            nodes: FxIndexMap::default(),
            start: None,
        }
    }
}

impl<D> NodeGraph<D> {
    pub fn new() -> NodeGraph<D> {
        NodeGraph::default()
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.start = None;
    }

    /// Inserts `node` unless a node with the same coordinate is already known, in which case the
    /// new instance is dropped. Returns the canonical id and whether `node` was inserted.
    pub fn insert(&mut self, node: Node<D>) -> (NodeId, bool) {
        match self.nodes.entry(node.coordinate()) {
            Occupied(e) => (NodeId(e.index()), false),
            Vacant(e) => {
                let id = NodeId(e.index());
                e.insert(node);
                (id, true)
            }
        }
    }

    /// Panics if `id` was not handed out by this graph, like out of bounds slice indexing.
    pub fn node(&self, id: NodeId) -> &Node<D> {
        &self.nodes[id.0]
    }
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<D> {
        &mut self.nodes[id.0]
    }
    pub fn get(&self, id: NodeId) -> Option<&Node<D>> {
        self.nodes.get_index(id.0).map(|(_, node)| node)
    }
    pub fn find(&self, coordinate: &Coordinate) -> Option<NodeId> {
        self.nodes.get_index_of(coordinate).map(NodeId)
    }
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<D>)> {
        self.nodes
            .values()
            .enumerate()
            .map(|(ix, node)| (NodeId(ix), node))
    }

    pub fn start(&self) -> Option<NodeId> {
        self.start
    }
    pub fn is_start(&self, id: NodeId) -> bool {
        self.start == Some(id)
    }

    /// Records `id` as the start of the search. Marking the same node again is allowed, marking a
    /// different one is not.
    pub fn mark_start(&mut self, id: NodeId) -> Result<(), InvalidOperation> {
        match self.start {
            Some(start) if start != id => Err(InvalidOperation::SecondStart {
                node: self.node(id).coordinate(),
                start: self.node(start).coordinate(),
            }),
            _ => {
                self.start = Some(id);
                Ok(())
            }
        }
    }

    /// Replaces the predecessor and score of `id` together, as a score is only meaningful
    /// relative to the parent it was computed for.
    pub fn set_parent(
        &mut self,
        id: NodeId,
        parent: Option<NodeId>,
        score: Score,
    ) -> Result<(), InvalidOperation> {
        let coordinate = self.node(id).coordinate();
        let parent_coordinate = parent.map(|p| self.node(p).coordinate());
        if parent == Some(id) {
            return Err(InvalidOperation::SelfParent(coordinate));
        }
        if parent.is_some() && self.is_start(id) {
            return Err(InvalidOperation::ParentOfStart(coordinate));
        }
        if let Some(p) = parent_coordinate {
            if !coordinate.is_horizontally_adjacent(&p) {
                return Err(InvalidOperation::NotAdjacent {
                    node: coordinate,
                    parent: p,
                });
            }
        }
        if score.node() != coordinate || score.parent() != parent_coordinate {
            return Err(InvalidOperation::ScoreMismatch {
                node: coordinate,
                parent: parent_coordinate,
                scored: score.node(),
                scored_parent: score.parent(),
            });
        }
        let node = self.node_mut(id);
        node.parent = parent;
        node.score = Some(score);
        Ok(())
    }

    /// Walks the parent links from `id` back to a node without a parent and returns the
    /// coordinates in start-to-`id` order. The walk visits at most every node once, so a
    /// corrupted parent chain cannot loop forever.
    pub fn path_to(&self, id: NodeId) -> Vec<Coordinate> {
        let mut path: Vec<Coordinate> =
            std::iter::successors(Some(id), |&ix| self.node(ix).parent())
                .take(self.len())
                .map(|ix| self.node(ix).coordinate())
                .collect();
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(coordinates: &[(i32, i32, i32)]) -> (NodeGraph, Vec<NodeId>) {
        let mut graph = NodeGraph::new();
        let ids = coordinates
            .iter()
            .map(|&c| graph.insert(Node::new(c.into(), ())).0)
            .collect();
        (graph, ids)
    }

    fn score_for(graph: &NodeGraph, id: NodeId, parent: Option<NodeId>) -> Score {
        let c = graph.node(id).coordinate();
        Score::new(c, parent.map(|p| graph.node(p).coordinate()), 1.0, 1.0)
    }

    #[test]
    fn insert_canonicalizes_by_coordinate() {
        let mut graph: NodeGraph<u8> = NodeGraph::new();
        let (a, new_a) = graph.insert(Node::new(Coordinate::new(1, 1, 1), 1));
        let (b, new_b) = graph.insert(Node::new(Coordinate::new(1, 1, 1), 2));
        assert!(new_a && !new_b);
        assert_eq!(a, b);
        assert_eq!(*graph.node(a).data(), 1);
        assert_eq!(graph.find(&Coordinate::new(1, 1, 1)), Some(a));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn rejects_self_parent() {
        let (mut graph, ids) = graph_with(&[(0, 0, 0)]);
        let score = score_for(&graph, ids[0], Some(ids[0]));
        assert_eq!(
            graph.set_parent(ids[0], Some(ids[0]), score),
            Err(InvalidOperation::SelfParent(Coordinate::new(0, 0, 0)))
        );
    }

    #[test]
    fn rejects_parent_of_start() {
        let (mut graph, ids) = graph_with(&[(0, 0, 0), (1, 0, 0)]);
        graph.mark_start(ids[0]).unwrap();
        let score = score_for(&graph, ids[0], Some(ids[1]));
        assert!(matches!(
            graph.set_parent(ids[0], Some(ids[1]), score),
            Err(InvalidOperation::ParentOfStart(_))
        ));
        // Clearing the parent of the start is fine
        let score = score_for(&graph, ids[0], None);
        assert!(graph.set_parent(ids[0], None, score).is_ok());
    }

    #[test]
    fn rejects_non_adjacent_parent() {
        let (mut graph, ids) = graph_with(&[(0, 0, 0), (2, 0, 0), (1, -4, 1)]);
        let score = score_for(&graph, ids[1], Some(ids[0]));
        assert!(matches!(
            graph.set_parent(ids[1], Some(ids[0]), score),
            Err(InvalidOperation::NotAdjacent { .. })
        ));
        // A large drop is still adjacent
        let score = score_for(&graph, ids[2], Some(ids[0]));
        assert!(graph.set_parent(ids[2], Some(ids[0]), score).is_ok());
        assert_eq!(graph.node(ids[2]).parent(), Some(ids[0]));
    }

    #[test]
    fn rejects_foreign_score() {
        let (mut graph, ids) = graph_with(&[(0, 0, 0), (1, 0, 0), (1, 0, 1)]);
        let score = score_for(&graph, ids[2], Some(ids[0]));
        assert!(matches!(
            graph.set_parent(ids[1], Some(ids[0]), score),
            Err(InvalidOperation::ScoreMismatch { .. })
        ));
        assert!(graph.node(ids[1]).score().is_none());
    }

    #[test]
    fn second_start_is_rejected() {
        let (mut graph, ids) = graph_with(&[(0, 0, 0), (1, 0, 0)]);
        graph.mark_start(ids[0]).unwrap();
        graph.mark_start(ids[0]).unwrap();
        assert!(matches!(
            graph.mark_start(ids[1]),
            Err(InvalidOperation::SecondStart { .. })
        ));
    }

    #[test]
    fn path_follows_parents() {
        let (mut graph, ids) = graph_with(&[(0, 0, 0), (1, 0, 0), (2, -1, 1)]);
        for (child, parent) in [(1, 0), (2, 1)] {
            let score = score_for(&graph, ids[child], Some(ids[parent]));
            graph
                .set_parent(ids[child], Some(ids[parent]), score)
                .unwrap();
        }
        assert_eq!(
            graph.path_to(ids[2]),
            vec![
                Coordinate::new(0, 0, 0),
                Coordinate::new(1, 0, 0),
                Coordinate::new(2, -1, 1)
            ]
        );
        assert_eq!(graph.path_to(ids[0]), vec![Coordinate::new(0, 0, 0)]);
    }
}
