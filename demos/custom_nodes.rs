use block_pathfinding::examiner::Pathability;
use block_pathfinding::{
    AStar, Coordinate, Examiner, HeapNodeContainer, Node, NodeContainer, Score,
};

// Nodes can carry data of their own, filled in by the factory of the container. Here every cell
// of a flat field knows its terrain type and the examiner charges more for walking through
// shallow water than over grass, and refuses deep water.

#[derive(Clone, Copy, Debug, PartialEq)]
enum Ground {
    Grass,
    Shallows,
    Deep,
}

fn ground(c: Coordinate) -> Ground {
    match (c.x, c.z) {
        (3..=5, -6..=1) => Ground::Deep,
        (3..=5, _) => Ground::Shallows,
        _ => Ground::Grass,
    }
}

struct Wading {
    destination: Coordinate,
}

impl Examiner<Ground> for Wading {
    fn is_destination(&self, node: &Node<Ground>) -> bool {
        node.coordinate() == self.destination
    }

    fn is_pathable(&self, _from: &Node<Ground>, to: &Node<Ground>) -> Pathability {
        if to.coordinate().y != 0 || *to.data() == Ground::Deep {
            Pathability::InvalidPoint
        } else {
            Pathability::Valid
        }
    }

    fn score(&self, parent: Option<&Node<Ground>>, node: &Node<Ground>) -> Score {
        let c = node.coordinate();
        let step = match node.data() {
            Ground::Shallows => 3.0,
            _ => 1.0,
        };
        let g = parent.map_or(0.0, |p| {
            p.score().map_or(0.0, Score::g) + p.coordinate().distance(&c) * step
        });
        Score::new(c, parent.map(Node::coordinate), g, c.distance(&self.destination))
    }
}

fn main() {
    let start = Coordinate::new(0, 0, 0);
    let end = Coordinate::new(8, 0, 0);
    let astar = AStar::new(Wading { destination: end }).with_max_drop_height(0);
    let mut container = HeapNodeContainer::with_factory(ground);
    let result = astar.search(start, end, &mut container).unwrap();
    println!(
        "Search {}, {} nodes discovered",
        result.status(),
        container.graph().len()
    );
    for p in result {
        println!("{} {:?}", p, ground(p));
    }
}
