use crate::{examiner::Examiner, InvalidOperation, Node, NodeFactory, NodeGraph, NodeId};

pub mod heap;

pub use heap::HeapNodeContainer;

/// The open and closed sets of a search. The container owns every node discovered during a search
/// and decides which open node is expanded next.
pub trait NodeContainer {
    /// Per-cell data carried by the nodes.
    type Data;
    type Factory: NodeFactory<Self::Data>;

    /// Reports that `node` is reachable from `parent`, which is none only for the start node.
    /// The node is scored through `examiner` and, if this route is better than any known one,
    /// (re)inserted into the open set with `parent` as its predecessor. Nodes that are already
    /// closed are left alone, as is a route to a known node that is not an improvement.
    ///
    /// Returns the id of the canonical node for the coordinate of `node`.
    fn open<E>(
        &mut self,
        examiner: &E,
        parent: Option<NodeId>,
        node: Node<Self::Data>,
    ) -> Result<NodeId, InvalidOperation>
    where
        E: Examiner<Self::Data>;

    /// Removes the open node with the lowest score and marks it closed.
    fn close_best(&mut self) -> Option<NodeId>;

    fn node_factory(&self) -> &Self::Factory;

    /// All nodes discovered so far.
    fn graph(&self) -> &NodeGraph<Self::Data>;

    /// Forgets every node so the container can serve a new search.
    fn clear(&mut self);

    /// Creates the node at the given offset from `node` through the factory of this container.
    fn relative(&self, node: &Node<Self::Data>, dx: i32, dy: i32, dz: i32) -> Node<Self::Data> {
        self.node_factory()
            .create(node.coordinate().offset(dx, dy, dz), Some(node))
    }
}
