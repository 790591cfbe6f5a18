use core::fmt;
use std::ops::Add;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer address of one cell in the search space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32, z: i32) -> Coordinate {
        Coordinate { x, y, z }
    }

    /// The coordinate shifted by the given offsets. Overflows like plain [i32] addition, see
    /// [Coordinate::checked_offset] for cells near the edge of the grid.
    pub const fn offset(&self, dx: i32, dy: i32, dz: i32) -> Coordinate {
        Coordinate::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// The coordinate shifted by the given offsets, or none if it would leave the grid.
    pub fn checked_offset(&self, dx: i32, dy: i32, dz: i32) -> Option<Coordinate> {
        Some(Coordinate::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
            self.z.checked_add(dz)?,
        ))
    }

    /// Squared straight-line distance. Saturates at [u64::MAX], which no squared [u32] range
    /// reaches.
    pub fn distance_squared(&self, other: &Coordinate) -> u64 {
        [
            self.x.abs_diff(other.x),
            self.y.abs_diff(other.y),
            self.z.abs_diff(other.z),
        ]
        .into_iter()
        .map(|d| u64::from(d).pow(2))
        .fold(0, u64::saturating_add)
    }

    /// Straight-line ([Euclidean](https://en.wikipedia.org/wiki/Euclidean_distance)) distance.
    pub fn distance(&self, other: &Coordinate) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        let dz = f64::from(self.z) - f64::from(other.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// The [Chebyshev distance](https://en.wikipedia.org/wiki/Chebyshev_distance), which is the
    /// number of steps needed when every one of the 26 neighbours is one step away.
    pub fn chebyshev_distance(&self, other: &Coordinate) -> u32 {
        self.x
            .abs_diff(other.x)
            .max(self.y.abs_diff(other.y))
            .max(self.z.abs_diff(other.z))
    }

    /// Whether the two coordinates are at most one step apart on the X/Z plane. The vertical
    /// offset is ignored as a step may climb or drop.
    pub fn is_horizontally_adjacent(&self, other: &Coordinate) -> bool {
        self.x.abs_diff(other.x) <= 1 && self.z.abs_diff(other.z) <= 1
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        self.offset(rhs.x, rhs.y, rhs.z)
    }
}

impl From<(i32, i32, i32)> for Coordinate {
    fn from((x, y, z): (i32, i32, i32)) -> Coordinate {
        Coordinate::new(x, y, z)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Coordinate::new(0, 0, 0);
        let b = Coordinate::new(3, -4, 12);
        assert_eq!(a.distance_squared(&b), 169);
        assert_eq!(a.distance(&b), 13.0);
        assert_eq!(a.chebyshev_distance(&b), 12);
    }

    #[test]
    fn distances_span_the_whole_grid() {
        let a = Coordinate::new(i32::MIN, i32::MIN, i32::MIN);
        let b = Coordinate::new(i32::MAX, 0, 0);
        let span = u64::from(u32::MAX);
        let across = Coordinate::new(i32::MAX, i32::MIN, i32::MIN);
        assert_eq!(a.distance_squared(&across), span * span);
        let corner = Coordinate::new(i32::MAX, i32::MAX, i32::MAX);
        assert_eq!(a.distance_squared(&corner), u64::MAX);
        assert_eq!(a.chebyshev_distance(&b), u32::MAX);
        assert!(a.distance(&b) > f64::from(u32::MAX));
        assert!(!a.is_horizontally_adjacent(&b));
        assert!(!b.is_horizontally_adjacent(&Coordinate::new(i32::MIN, 0, 0)));
    }

    #[test]
    fn checked_offset_stops_at_the_edge() {
        let edge = Coordinate::new(i32::MAX, 0, i32::MIN);
        assert_eq!(edge.checked_offset(1, 0, 0), None);
        assert_eq!(edge.checked_offset(0, 0, -1), None);
        assert_eq!(
            edge.checked_offset(-1, 1, 1),
            Some(Coordinate::new(i32::MAX - 1, 1, i32::MIN + 1))
        );
    }

    /// Vertical offsets never break adjacency, horizontal offsets above one always do.
    #[test]
    fn horizontal_adjacency() {
        let a = Coordinate::new(4, 10, 4);
        assert!(a.is_horizontally_adjacent(&Coordinate::new(5, -20, 3)));
        assert!(a.is_horizontally_adjacent(&a));
        assert!(!a.is_horizontally_adjacent(&Coordinate::new(6, 10, 4)));
        assert!(!a.is_horizontally_adjacent(&Coordinate::new(4, 10, 2)));
    }

    #[test]
    fn offset_and_add_agree() {
        let a = Coordinate::new(1, 2, 3);
        assert_eq!(a.offset(-1, 1, 0), a + Coordinate::from((-1, 1, 0)));
        assert_eq!(a.to_string(), "(1, 2, 3)");
    }
}
