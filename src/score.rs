use crate::Coordinate;
use std::cmp::Ordering;

/// The classic A* costs of reaching `node` through `parent`. G is the cost from the start, H the
/// heuristic estimate to the destination and F the value the open set is ordered by, which is
/// `G + H` unless an examiner combines them differently.
///
/// Scores compare by F only, lower being better.
#[derive(Clone, Copy, Debug)]
pub struct Score {
    node: Coordinate,
    parent: Option<Coordinate>,
    g: f64,
    h: f64,
    f: f64,
}

impl Score {
    /// Scores `node` reached through `parent` with `F = G + H`. When returned from
    /// [Examiner::score](crate::Examiner::score), `node` and `parent` must be the coordinates of
    /// the node and parent being scored.
    pub fn new(node: Coordinate, parent: Option<Coordinate>, g: f64, h: f64) -> Score {
        Score::with_f(node, parent, g, h, g + h)
    }

    /// A score whose F is not simply `G + H`.
    pub fn with_f(node: Coordinate, parent: Option<Coordinate>, g: f64, h: f64, f: f64) -> Score {
        Score {
            node,
            parent,
            g,
            h,
            f,
        }
    }

    pub fn node(&self) -> Coordinate {
        self.node
    }
    pub fn parent(&self) -> Option<Coordinate> {
        self.parent
    }
    pub fn g(&self) -> f64 {
        self.g
    }
    pub fn h(&self) -> f64 {
        self.h
    }
    pub fn f(&self) -> f64 {
        self.f
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f.total_cmp(&other.f)
    }
}
