use crate::{Coordinate, Score};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Index of a [Node] in a [NodeGraph](crate::NodeGraph). Parent links are stored as ids so that
/// nodes never hold references to each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A vertex of the search graph. Besides its position, the best known predecessor and the score
/// relative to that predecessor, a node carries caller-defined per-cell `data`, filled in by the
/// [NodeFactory](crate::NodeFactory) that created it.
///
/// Nodes are equal when their coordinates are.
#[derive(Clone, Debug)]
pub struct Node<D = ()> {
    coordinate: Coordinate,
    pub(crate) parent: Option<NodeId>,
    pub(crate) score: Option<Score>,
    data: D,
}

impl<D> Node<D> {
    pub fn new(coordinate: Coordinate, data: D) -> Node<D> {
        Node {
            coordinate,
            parent: None,
            score: None,
            data,
        }
    }
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
    pub fn score(&self) -> Option<&Score> {
        self.score.as_ref()
    }
    pub fn data(&self) -> &D {
        &self.data
    }
    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    /// Checks whether `other` is at most one step away on the X/Z plane, ignoring height since a
    /// node may sit directly above or below its neighbour after a climb or drop.
    pub fn is_adjacent<T>(&self, other: &Node<T>) -> bool {
        self.coordinate
            .is_horizontally_adjacent(&other.coordinate)
    }

    /// Orders nodes by score. An unscored node sorts after any scored one and two unscored nodes
    /// are equal.
    pub fn cmp_score<T>(&self, other: &Node<T>) -> Ordering {
        match (&self.score, &other.score) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<D> PartialEq for Node<D> {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate == other.coordinate
    }
}

impl<D> Eq for Node<D> {}

impl<D> Hash for Node<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinate.hash(state);
    }
}
