use {
    crate::*,
    glam::IVec2,
    nom::{combinator::map_opt, error::Error, Err, IResult},
    std::collections::HashSet,
    strum::IntoEnumIterator,
};

crate::ascii_cell! {
    #[cfg_attr(test, derive(Debug))]
    #[derive(Clone, Copy, Default, PartialEq)]
    enum RaceCell {
        #[default]
        Empty = b'.',
        Wall = b'#',
        Start = b'S',
        End = b'E',
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    maze: Maze,
    start: Pose,
    end: IVec2,
}

impl Solution {
    const START_DIR: Direction = Direction::Right;

    /// The end counts in any facing.
    fn end_poses(&self) -> Vec<Pose> {
        Direction::iter()
            .map(|dir| Pose::new(self.end, dir))
            .collect()
    }

    fn try_answers(&self) -> Result<(u32, HashSet<IVec2>), MazeError> {
        let distances: DistanceMap = self.maze.solve(self.start)?;

        self.maze.optimal_positions(&distances, &self.end_poses())
    }

    fn try_best_score(&self) -> Result<u32, MazeError> {
        self.try_answers().map(|(best_score, _)| best_score)
    }

    fn try_optimal_position_count(&self) -> Result<usize, MazeError> {
        self.try_answers().map(|(_, positions)| positions.len())
    }

    fn render_optimal_positions(&self, positions: &HashSet<IVec2>) -> String {
        let dimensions: IVec2 = self.maze.grid().dimensions();
        let mut rendering: String =
            String::with_capacity(((dimensions.x + 1_i32) * dimensions.y) as usize);

        for y in 0_i32..dimensions.y {
            for x in 0_i32..dimensions.x {
                let pos: IVec2 = IVec2::new(x, y);

                rendering.push(if pos == self.start.pos {
                    'S'
                } else if pos == self.end {
                    'E'
                } else if positions.contains(&pos) {
                    'O'
                } else if self.maze.grid().get(pos) == Some(&MazeCell::Wall) {
                    '#'
                } else {
                    '.'
                });
            }

            rendering.push('\n');
        }

        rendering
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_opt(Grid::parse, |grid: Grid<RaceCell>| {
            let start: IVec2 = grid.try_find_single_position_with_cell(&RaceCell::Start)?;
            let end: IVec2 = grid.try_find_single_position_with_cell(&RaceCell::End)?;
            let cells: Vec<MazeCell> = grid
                .cells()
                .iter()
                .map(|cell| match cell {
                    RaceCell::Wall => MazeCell::Wall,
                    _ => MazeCell::Empty,
                })
                .collect();

            Some(Self {
                maze: Maze::new(Grid::try_from_cells_and_dimensions(
                    cells,
                    grid.dimensions(),
                )?),
                start: Pose::new(start, Self::START_DIR),
                end,
            })
        })(input)
    }
}

impl RunParts for Solution {
    fn p1_internal(&mut self, _args: &PartArgs) {
        match self.try_best_score() {
            Ok(best_score) => {
                dbg!(best_score);
            }
            Err(error) => eprintln!("Failed to find a path to the end: {error:?}"),
        }
    }

    fn p2_internal(&mut self, args: &PartArgs) {
        if !args.verbose {
            match self.try_optimal_position_count() {
                Ok(optimal_position_count) => {
                    dbg!(optimal_position_count);
                }
                Err(error) => eprintln!("Failed to find a path to the end: {error:?}"),
            }
        } else {
            match self.try_answers() {
                Ok((_, positions)) => {
                    dbg!(positions.len());
                    println!("{}", self.render_optimal_positions(&positions));
                }
                Err(error) => eprintln!("Failed to find a path to the end: {error:?}"),
            }
        }
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STRS: &'static [&'static str] = &[
        "\
        ###############\n\
        #.......#....E#\n\
        #.#.###.#.###.#\n\
        #.....#.#...#.#\n\
        #.###.#####.#.#\n\
        #.#.#.......#.#\n\
        #.#.#####.###.#\n\
        #...........#.#\n\
        ###.#.#####.#.#\n\
        #...#.....#.#.#\n\
        #.#.#.###.#.#.#\n\
        #.....#...#.#.#\n\
        #.###.#.#.#.#.#\n\
        #S..#.....#...#\n\
        ###############\n",
        "\
        #################\n\
        #...#...#...#..E#\n\
        #.#.#.#.#.#.#.#.#\n\
        #.#.#.#...#...#.#\n\
        #.#.#.#.###.#.#.#\n\
        #...#.#.#.....#.#\n\
        #.#.#.#.#.#####.#\n\
        #.#...#.#.#.....#\n\
        #.#.#####.#.###.#\n\
        #.#.#.......#...#\n\
        #.#.###.#####.###\n\
        #.#.#...#.....#.#\n\
        #.#.#.#####.###.#\n\
        #.#.#.........#.#\n\
        #.#.#.#########.#\n\
        #S#.............#\n\
        #################\n",
    ];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            SOLUTION_STRS
                .iter()
                .copied()
                .map(|solution_str| Solution::try_from(solution_str).unwrap())
                .collect()
        })[index]
    }

    #[test]
    fn test_parsed_solution() {
        assert_eq!(
            solution(0_usize).start,
            Pose::new(IVec2::new(1_i32, 13_i32), Direction::Right)
        );
        assert_eq!(solution(0_usize).end, IVec2::new(13_i32, 1_i32));
        assert_eq!(
            solution(1_usize).start,
            Pose::new(IVec2::new(1_i32, 15_i32), Direction::Right)
        );
        assert_eq!(solution(1_usize).end, IVec2::new(15_i32, 1_i32));
    }

    #[test]
    fn test_try_best_score() {
        for (index, best_score) in [7036_u32, 11048_u32].into_iter().enumerate() {
            assert_eq!(solution(index).try_best_score(), Ok(best_score));
        }
    }

    #[test]
    fn test_try_optimal_position_count() {
        for (index, optimal_position_count) in [45_usize, 64_usize].into_iter().enumerate() {
            assert_eq!(
                solution(index).try_optimal_position_count(),
                Ok(optimal_position_count)
            );
        }
    }
}
