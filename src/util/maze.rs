use {
    super::*,
    glam::IVec2,
    std::{
        cmp::Ordering,
        collections::{hash_map::Entry, HashMap, HashSet, VecDeque},
    },
};

crate::ascii_cell! {
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub enum MazeCell {
        #[default]
        Empty = b'.',
        Wall = b'#',
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MazeError {
    /// A referenced start or terminal position lies outside the grid dimensions.
    OutOfBounds,

    /// A transition cost was requested between non-adjacent poses. This is an internal invariant
    /// failure, not a user-facing condition.
    InvalidTransition,

    /// No terminal pose has a recorded distance.
    Unreachable,
}

const STEP_COST: u32 = 1_u32;
const TURN_COST: u32 = 1000_u32;

/// The edge weight from `from` to `to`: stepping forward is cheap, turning in place is expensive.
/// This asymmetry is the defining tuning parameter of the search, and lives only here.
pub fn transition_cost(from: Pose, to: Pose) -> Result<u32, MazeError> {
    if from.step() == to {
        Ok(STEP_COST)
    } else if from.turn_left() == to || from.turn_right() == to {
        Ok(TURN_COST)
    } else {
        Err(MazeError::InvalidTransition)
    }
}

/// The minimal total cost from the start to a pose, together with every immediate predecessor
/// pose achieving exactly that cost. The start pose alone has an empty predecessor set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoseRecord {
    pub cost: u32,
    pub predecessors: HashSet<Pose>,
}

impl PoseRecord {
    fn new(cost: u32, predecessor: Pose) -> Self {
        Self {
            cost,
            predecessors: HashSet::from([predecessor]),
        }
    }
}

pub type DistanceMap = HashMap<Pose, PoseRecord>;

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Maze {
    grid: Grid<MazeCell>,
}

impl Maze {
    pub fn new(grid: Grid<MazeCell>) -> Self {
        Self { grid }
    }

    #[inline]
    pub fn grid(&self) -> &Grid<MazeCell> {
        &self.grid
    }

    /// Computes, for every pose reachable from `start` through `Empty` cells, the minimal total
    /// cost and the complete set of immediate predecessors achieving it.
    ///
    /// This is a label-correcting relaxation over a FIFO worklist, not a binary-heap Dijkstra: a
    /// plain queue does not pop poses in non-decreasing cost order, so any pose whose best cost
    /// improves is un-finalized and reprocessed to propagate the improvement. All edge weights
    /// are positive, so this converges to exact optima regardless of processing order. Duplicate
    /// enqueues are tolerated and absorbed by the finalized check on pop.
    pub fn solve(&self, start: Pose) -> Result<DistanceMap, MazeError> {
        if !self.grid.contains(start.pos) {
            return Err(MazeError::OutOfBounds);
        }

        let mut distances: DistanceMap = DistanceMap::new();
        let mut finalized: HashSet<Pose> = HashSet::new();
        let mut worklist: VecDeque<Pose> = VecDeque::new();

        distances.insert(
            start,
            PoseRecord {
                cost: 0_u32,
                predecessors: HashSet::new(),
            },
        );
        worklist.push_back(start);

        while let Some(current) = worklist.pop_front() {
            if !finalized.insert(current) {
                continue;
            }

            let current_cost: u32 = distances[&current].cost;

            for next in current.neighbors() {
                // A wall (or a step off the grid) is not an error, it is normal pruning: such a
                // pose never enters the distance map.
                if !matches!(self.grid.get(next.pos), Some(MazeCell::Empty)) {
                    continue;
                }

                worklist.push_back(next);

                let candidate_cost: u32 = current_cost + transition_cost(current, next)?;

                match distances.entry(next) {
                    Entry::Vacant(entry) => {
                        entry.insert(PoseRecord::new(candidate_cost, current));
                    }
                    Entry::Occupied(mut entry) => {
                        let record: &mut PoseRecord = entry.get_mut();

                        match candidate_cost.cmp(&record.cost) {
                            Ordering::Less => {
                                *record = PoseRecord::new(candidate_cost, current);
                                finalized.remove(&next);
                            }
                            Ordering::Equal => {
                                // Every tying predecessor is retained: union, not replace.
                                record.predecessors.insert(current);
                            }
                            Ordering::Greater => {}
                        }
                    }
                }
            }
        }

        Ok(distances)
    }

    /// The minimal cost over the terminal poses, and every distinct position lying on at least
    /// one path achieving it (facings collapse per position).
    pub fn optimal_positions(
        &self,
        distances: &DistanceMap,
        terminals: &[Pose],
    ) -> Result<(u32, HashSet<IVec2>), MazeError> {
        if terminals
            .iter()
            .any(|terminal| !self.grid.contains(terminal.pos))
        {
            return Err(MazeError::OutOfBounds);
        }

        let best_cost: u32 = terminals
            .iter()
            .filter_map(|terminal| distances.get(terminal))
            .map(|record| record.cost)
            .min()
            .ok_or(MazeError::Unreachable)?;

        // The predecessor graph restricted to min-cost edges is a DAG ending at the start, so
        // this backward closure terminates.
        let mut positions: HashSet<IVec2> = HashSet::new();
        let mut expanded: HashSet<Pose> = HashSet::new();
        let mut worklist: Vec<Pose> = terminals
            .iter()
            .copied()
            .filter(|terminal| {
                distances
                    .get(terminal)
                    .map_or(false, |record| record.cost == best_cost)
            })
            .collect();

        while let Some(current) = worklist.pop() {
            if !expanded.insert(current) {
                continue;
            }

            positions.insert(current.pos);
            worklist.extend(distances[&current].predecessors.iter().copied());
        }

        Ok((best_cost, positions))
    }

    /// The minimal cost over the terminal poses, and the count of distinct positions on any
    /// minimal-cost path.
    pub fn reconstruct(
        &self,
        distances: &DistanceMap,
        terminals: &[Pose],
    ) -> Result<(u32, usize), MazeError> {
        self.optimal_positions(distances, terminals)
            .map(|(best_cost, positions)| (best_cost, positions.len()))
    }
}
