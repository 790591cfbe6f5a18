use super::{Examiner, Pathability};
use crate::{Coordinate, Node, Score};
use std::collections::HashSet;
use std::hash::BuildHasher;

/// Read access to the cells a walking agent moves through.
pub trait Terrain {
    fn is_solid(&self, coordinate: Coordinate) -> bool;
}

impl<F> Terrain for F
where
    F: Fn(Coordinate) -> bool,
{
    fn is_solid(&self, coordinate: Coordinate) -> bool {
        self(coordinate)
    }
}

/// A set of the solid cells, everything else is open.
impl<S: BuildHasher> Terrain for HashSet<Coordinate, S> {
    fn is_solid(&self, coordinate: Coordinate) -> bool {
        self.contains(&coordinate)
    }
}

/// Examiner for an agent walking over solid cells. A node is the cell the agent stands on, so it
/// has to be solid with `clearance` open cells above it. Steps cost their straight-line length
/// and the heuristic is the straight-line distance to the destination scaled by
/// `heuristic_factor`.
#[derive(Clone, Debug)]
pub struct WalkingExaminer<T> {
    pub terrain: T,
    pub destination: Coordinate,
    /// Open cells required above a floor cell.
    pub clearance: i32,
    /// Scales the heuristic. Values above 1.0 give
    /// [weighted A*](https://en.wikipedia.org/wiki/A*_search_algorithm#Bounded_relaxation),
    /// which expands fewer nodes but no longer guarantees the cheapest path.
    pub heuristic_factor: f64,
    reach_squared: u64,
}

impl<T: Terrain> WalkingExaminer<T> {
    pub fn new(terrain: T, destination: Coordinate) -> WalkingExaminer<T> {
        WalkingExaminer {
            terrain,
            destination,
            clearance: 2,
            heuristic_factor: 1.0,
            reach_squared: 0,
        }
    }

    /// Any node within `reach` of the destination counts as having arrived.
    pub fn with_reach(mut self, reach: u32) -> WalkingExaminer<T> {
        self.reach_squared = u64::from(reach).pow(2);
        self
    }

    fn is_open(&self, coordinate: Coordinate) -> bool {
        !self.terrain.is_solid(coordinate)
    }

    /// Whether the cell `dy` above `floor` is open. Above the top of the grid is open air.
    fn is_open_above(&self, floor: Coordinate, dy: i32) -> bool {
        floor
            .checked_offset(0, dy, 0)
            .map_or(true, |cell| self.is_open(cell))
    }
}

impl<T: Terrain, D> Examiner<D> for WalkingExaminer<T> {
    fn is_destination(&self, node: &Node<D>) -> bool {
        node.coordinate().distance_squared(&self.destination) <= self.reach_squared
    }

    fn is_pathable(&self, _from: &Node<D>, to: &Node<D>) -> Pathability {
        let floor = to.coordinate();
        if !self.is_open_above(floor, 1) {
            // Standing in a wall, every cell further down this column is buried as well
            return Pathability::InvalidColumn;
        }
        if self.is_open(floor) {
            // Nothing to stand on, there may be a floor further down
            return Pathability::InvalidPoint;
        }
        if (2..=self.clearance).all(|dy| self.is_open_above(floor, dy)) {
            Pathability::Valid
        } else {
            Pathability::InvalidPoint
        }
    }

    fn score(&self, parent: Option<&Node<D>>, node: &Node<D>) -> Score {
        let coordinate = node.coordinate();
        let g = parent.map_or(0.0, |p| {
            p.score().map_or(0.0, Score::g) + p.coordinate().distance(&coordinate)
        });
        let h = coordinate.distance(&self.destination) * self.heuristic_factor;
        Score::new(coordinate, parent.map(Node::coordinate), g, h)
    }
}
