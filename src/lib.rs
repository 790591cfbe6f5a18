//! # block_pathfinding
//!
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) pathfinding on a 3D grid of blocks.
//! A step moves to one of the eight horizontal neighbours of a cell, climbing at most one layer or
//! dropping up to a configurable height. What counts as walkable and what a step costs is decided
//! by an [Examiner], so the engine knows nothing about the terrain it searches.
//!
//! The pieces of a search:
//!
//! - [AStar] runs the search loop and expands neighbourhoods, bounded by a [SearchConfig].
//! - An [Examiner] accepts or rejects neighbours, scores them and recognizes the destination.
//!   [WalkingExaminer](examiner::walking::WalkingExaminer) implements walking over solid cells.
//! - A [NodeContainer] holds the open and closed sets. [HeapNodeContainer] is a binary heap
//!   combined with a hash set, and can attach custom data to nodes through a [NodeFactory].
//! - The resulting [SearchResult] holds a [SearchStatus] and the path found.
//!
//! ```
//! use block_pathfinding::examiner::walking::WalkingExaminer;
//! use block_pathfinding::{AStar, Coordinate, HeapNodeContainer, SearchStatus};
//!
//! // Flat ground at y = 0
//! let ground = |c: Coordinate| c.y <= 0;
//! let destination = Coordinate::new(4, 0, 2);
//! let astar = AStar::new(WalkingExaminer::new(ground, destination));
//! let result = astar
//!     .search(Coordinate::new(0, 0, 0), destination, &mut HeapNodeContainer::new())
//!     .unwrap();
//! assert_eq!(result.status(), SearchStatus::Resolved);
//! // Paths hold the cells above the ground that is walked on
//! assert_eq!(result.path().back(), Some(&Coordinate::new(4, 1, 2)));
//! ```
mod astar;
pub mod container;
mod context;
mod coordinate;
mod error;
pub mod examiner;
mod factory;
mod graph;
mod node;
mod result;
mod score;

pub use astar::{AStar, SearchConfig, DEFAULT_MAX_DROP_HEIGHT, DEFAULT_RANGE};
pub use container::{HeapNodeContainer, NodeContainer};
pub use context::SearchContext;
pub use coordinate::Coordinate;
pub use error::InvalidOperation;
pub use examiner::{Examiner, Pathability};
pub use factory::{NodeFactory, PlainNodeFactory};
pub use graph::NodeGraph;
pub use node::{Node, NodeId};
pub use result::{SearchResult, SearchStatus, PATH_Y_OFFSET};
pub use score::Score;
