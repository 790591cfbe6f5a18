use crate::{Coordinate, Node};

/// Builds the nodes a search discovers. Containers materialize every neighbour through their
/// factory, which lets callers attach their own per-cell data to nodes.
pub trait NodeFactory<D> {
    /// Creates the node at `coordinate`, discovered from `parent` (none for the start and
    /// destination nodes of a search).
    fn create(&self, coordinate: Coordinate, parent: Option<&Node<D>>) -> Node<D>;
}

/// Factory for nodes without extra data.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainNodeFactory;

impl NodeFactory<()> for PlainNodeFactory {
    fn create(&self, coordinate: Coordinate, _parent: Option<&Node<()>>) -> Node<()> {
        Node::new(coordinate, ())
    }
}

/// Any closure mapping a cell to its data is a factory.
impl<D, F> NodeFactory<D> for F
where
    F: Fn(Coordinate) -> D,
{
    fn create(&self, coordinate: Coordinate, _parent: Option<&Node<D>>) -> Node<D> {
        Node::new(coordinate, self(coordinate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_factory_fills_data() {
        let factory = |c: Coordinate| c.y * 2;
        let node = factory.create(Coordinate::new(0, 21, 0), None);
        assert_eq!(*node.data(), 42);
        assert!(node.parent().is_none() && node.score().is_none());
    }
}
