use crate::{
    container::NodeContainer, examiner::Examiner, Coordinate, InvalidOperation, Node, NodeFactory,
    NodeId, SearchConfig,
};

/// Everything one search works with: the configuration, the container, the fixed endpoints and
/// their nodes. A context is built per [search](crate::AStar::search) call and fixed after
/// construction apart from the container contents and the iteration count.
pub struct SearchContext<'a, C: NodeContainer> {
    config: &'a SearchConfig,
    pub(crate) container: &'a mut C,
    start: Coordinate,
    destination: Coordinate,
    start_node: NodeId,
    destination_node: Node<C::Data>,
    pub(crate) iterations: usize,
}

impl<'a, C: NodeContainer> SearchContext<'a, C> {
    /// Clears `container` and seeds it with the start node.
    pub(crate) fn new<E>(
        config: &'a SearchConfig,
        container: &'a mut C,
        examiner: &E,
        start: Coordinate,
        destination: Coordinate,
    ) -> Result<SearchContext<'a, C>, InvalidOperation>
    where
        E: Examiner<C::Data>,
    {
        container.clear();
        let start_node = container.node_factory().create(start, None);
        let destination_node = container.node_factory().create(destination, None);
        let start_node = container.open(examiner, None, start_node)?;
        Ok(SearchContext {
            config,
            container,
            start,
            destination,
            start_node,
            destination_node,
            iterations: 0,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        self.config
    }
    pub fn container(&self) -> &C {
        &*self.container
    }
    pub fn start(&self) -> Coordinate {
        self.start
    }
    pub fn destination(&self) -> Coordinate {
        self.destination
    }
    pub fn start_id(&self) -> NodeId {
        self.start_node
    }
    pub fn start_node(&self) -> &Node<C::Data> {
        self.container.graph().node(self.start_node)
    }
    pub fn destination_node(&self) -> &Node<C::Data> {
        &self.destination_node
    }
    /// Number of expansions completed by the search loop so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}
