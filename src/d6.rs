use {
    crate::*,
    bitvec::prelude::*,
    glam::IVec2,
    nom::{combinator::map_opt, error::Error, Err, IResult},
    rayon::iter::{IntoParallelIterator, ParallelIterator},
    strum::EnumCount,
};

crate::ascii_cell! {
    #[cfg_attr(test, derive(Debug))]
    #[derive(Clone, Copy, Default, PartialEq)]
    enum PatrolCell {
        #[default]
        Empty = b'.',
        Obstruction = b'#',
        Guard = b'^',
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    grid: Grid<PatrolCell>,
    start: Pose,
}

impl Solution {
    /// Walks the patrol until the guard exits the grid or revisits a pose. Returns the visited
    /// position set and whether the walk cycled.
    fn patrol(&self, extra_obstruction: Option<IVec2>) -> (BitVec, bool) {
        let mut visited_positions: BitVec = bitvec![0; self.grid.area()];
        let mut visited_poses: BitVec = bitvec![0; self.grid.area() * Direction::COUNT];
        let mut pose: Pose = self.start;

        loop {
            let position_index: usize = self.grid.index_from_pos(pose.pos);
            let pose_index: usize = position_index * Direction::COUNT + pose.dir as usize;

            if visited_poses[pose_index] {
                return (visited_positions, true);
            }

            visited_poses.set(pose_index, true);
            visited_positions.set(position_index, true);

            let ahead: Pose = pose.step();

            if extra_obstruction == Some(ahead.pos)
                || matches!(self.grid.get(ahead.pos), Some(PatrolCell::Obstruction))
            {
                pose = pose.turn_right();
            } else if self.grid.contains(ahead.pos) {
                pose = ahead;
            } else {
                return (visited_positions, false);
            }
        }
    }

    fn visited_position_count(&self) -> usize {
        self.patrol(None).0.count_ones()
    }

    /// Only positions on the unobstructed patrol path can change it, so only those are candidate
    /// obstruction sites.
    fn cycling_obstruction_count(&self) -> usize {
        let (visited_positions, _): (BitVec, bool) = self.patrol(None);

        visited_positions
            .iter_ones()
            .map(|position_index| self.grid.pos_from_index(position_index))
            .filter(|&pos| pos != self.start.pos)
            .collect::<Vec<IVec2>>()
            .into_par_iter()
            .filter(|&pos| self.patrol(Some(pos)).1)
            .count()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_opt(Grid::parse, |mut grid: Grid<PatrolCell>| {
            grid.try_find_single_position_with_cell(&PatrolCell::Guard)
                .map(|start_pos| {
                    *grid.get_mut(start_pos).unwrap() = PatrolCell::Empty;

                    Self {
                        grid,
                        start: Pose::new(start_pos, Direction::Up),
                    }
                })
        })(input)
    }
}

impl RunParts for Solution {
    fn p1_internal(&mut self, _args: &PartArgs) {
        dbg!(self.visited_position_count());
    }

    fn p2_internal(&mut self, _args: &PartArgs) {
        dbg!(self.cycling_obstruction_count());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
