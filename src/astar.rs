use itertools::iproduct;
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    container::NodeContainer,
    examiner::{Examiner, Pathability},
    Coordinate, InvalidOperation, NodeId, SearchContext, SearchResult, SearchStatus,
};

pub const DEFAULT_RANGE: u32 = 18;
pub const DEFAULT_MAX_DROP_HEIGHT: u32 = 5;

/// Limits a search runs under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Largest straight-line distance allowed between start and destination, and between the
    /// start and any node the search considers.
    pub range: u32,
    /// How many cells below the current node a step may end; a step can climb at most one.
    pub max_drop_height: u32,
    /// Cap on expansions, none (or zero) for no cap.
    pub max_iterations: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            range: DEFAULT_RANGE,
            max_drop_height: DEFAULT_MAX_DROP_HEIGHT,
            max_iterations: None,
        }
    }
}

impl SearchConfig {
    pub fn range_squared(&self) -> u64 {
        u64::from(self.range).pow(2)
    }
    /// The lowest vertical offset a step may reach.
    fn lowest_step(&self) -> i32 {
        -i32::try_from(self.max_drop_height).unwrap_or(i32::MAX)
    }
    fn iteration_cap(&self) -> Option<usize> {
        self.max_iterations.filter(|&cap| cap > 0)
    }
}

/// The A* engine. Holds the examiner defining the terrain rules and the configuration; both may
/// be changed between searches.
#[derive(Clone, Debug)]
pub struct AStar<E> {
    pub examiner: E,
    pub config: SearchConfig,
}

impl<E> AStar<E> {
    pub fn new(examiner: E) -> AStar<E> {
        AStar::with_config(examiner, SearchConfig::default())
    }
    pub fn with_config(examiner: E, config: SearchConfig) -> AStar<E> {
        AStar { examiner, config }
    }
    pub fn with_range(mut self, range: u32) -> AStar<E> {
        self.config.range = range;
        self
    }
    pub fn with_max_drop_height(mut self, max_drop_height: u32) -> AStar<E> {
        self.config.max_drop_height = max_drop_height;
        self
    }
    pub fn with_max_iterations(mut self, max_iterations: usize) -> AStar<E> {
        self.config.max_iterations = Some(max_iterations);
        self
    }

    /// Searches a path from `start` to a node the examiner accepts as destination, using
    /// `container` for the open and closed sets. The container is cleared first.
    ///
    /// Not finding a path is reported through the [SearchStatus] of the result. An error is only
    /// returned when the container breaks a node invariant.
    pub fn search<C>(
        &self,
        start: Coordinate,
        destination: Coordinate,
        container: &mut C,
    ) -> Result<SearchResult, InvalidOperation>
    where
        C: NodeContainer,
        E: Examiner<C::Data>,
    {
        if start.distance_squared(&destination) > self.config.range_squared() {
            debug!(
                "{} is out of range {} of {}",
                destination, self.config.range, start
            );
            return Ok(SearchResult::failed(SearchStatus::RangeExceeded, 0));
        }
        debug!("Searching path from {} to {}", start, destination);
        let mut context =
            SearchContext::new(&self.config, container, &self.examiner, start, destination)?;
        let start_id = context.start_id();
        self.expand(&mut context, start_id)?;

        let mut last = None;
        while self.examiner.can_search(&context) {
            last = context.container.close_best();
            let Some(current) = last else {
                break;
            };
            if self
                .examiner
                .is_destination(context.container.graph().node(current))
            {
                break;
            }
            self.expand(&mut context, current)?;
            context.iterations += 1;
            if let Some(cap) = self.config.iteration_cap() {
                if context.iterations >= cap {
                    debug!("Gave up after {} iterations", context.iterations);
                    return Ok(SearchResult::failed(
                        SearchStatus::IterationsExceeded,
                        context.iterations,
                    ));
                }
            }
        }
        let result = SearchResult::from_context(&context, &self.examiner, last);
        debug!(
            "Search from {} to {} {} after {} iterations",
            start,
            destination,
            result.status(),
            result.iterations()
        );
        Ok(result)
    }

    /// Opens every valid neighbour of `current`. Neighbours are examined column by column from
    /// one layer above `current` down to the drop height. Once a column is found invalid, by being
    /// out of range, off the grid or by the examiner, its lower cells are skipped.
    fn expand<C>(
        &self,
        context: &mut SearchContext<'_, C>,
        current: NodeId,
    ) -> Result<(), InvalidOperation>
    where
        C: NodeContainer,
        E: Examiner<C::Data>,
    {
        let range_squared = self.config.range_squared();
        let origin = context.start();
        let position = context.container.graph().node(current).coordinate();
        trace!("Expanding {}", position);
        // Indexed [x + 1][z + 1], the centre column is never a neighbour
        let mut columns = [[true; 3]; 3];
        columns[1][1] = false;
        for dy in (self.config.lowest_step()..=1).rev() {
            for (dx, dz) in iproduct!(-1..=1, -1..=1) {
                let (ix, iz) = ((dx + 1) as usize, (dz + 1) as usize);
                if !columns[ix][iz] {
                    continue;
                }
                let Some(target) = position.checked_offset(dx, dy, dz) else {
                    // Off the grid, only the cell above the top layer leaves lower cells in it
                    if dy <= 0 {
                        columns[ix][iz] = false;
                    }
                    continue;
                };
                if origin.distance_squared(&target) > range_squared {
                    columns[ix][iz] = false;
                    continue;
                }
                let (candidate, pathability) = {
                    let container = &*context.container;
                    let from = container.graph().node(current);
                    let candidate = container.relative(from, dx, dy, dz);
                    let pathability = self.examiner.is_pathable(from, &candidate);
                    (candidate, pathability)
                };
                match pathability {
                    Pathability::Valid => {
                        context
                            .container
                            .open(&self.examiner, Some(current), candidate)?;
                    }
                    Pathability::InvalidColumn => columns[ix][iz] = false,
                    Pathability::InvalidPoint => {}
                }
            }
            if columns.iter().flatten().all(|valid| !valid) {
                break;
            }
        }
        Ok(())
    }
}
