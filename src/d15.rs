use {
    crate::*,
    glam::IVec2,
    nom::{
        character::complete::{line_ending, one_of},
        combinator::{map, map_opt, opt},
        error::Error,
        multi::many0,
        sequence::{preceded, terminated, tuple},
        Err, IResult,
    },
    std::collections::HashSet,
};

crate::ascii_cell! {
    #[cfg_attr(test, derive(Debug))]
    #[derive(Clone, Copy, Default, PartialEq)]
    enum WarehouseCell {
        #[default]
        Empty = b'.',
        Wall = b'#',
        Box = b'O',
        Robot = b'@',
        BoxLeft = b'[',
        BoxRight = b']',
    }
}

/// A working copy of the warehouse state for one simulation run.
struct Warehouse {
    grid: Grid<WarehouseCell>,
    robot: IVec2,
}

impl Warehouse {
    fn narrow(solution: &Solution) -> Self {
        Self {
            grid: solution.grid.clone(),
            robot: solution.robot,
        }
    }

    /// Every cell doubles in width; boxes become `[]` pairs.
    fn wide(solution: &Solution) -> Self {
        let dimensions: IVec2 = solution.grid.dimensions();
        let mut cells: Vec<WarehouseCell> = Vec::with_capacity(2_usize * solution.grid.area());

        for cell in solution.grid.cells() {
            cells.extend(match cell {
                WarehouseCell::Wall => [WarehouseCell::Wall, WarehouseCell::Wall],
                WarehouseCell::Box => [WarehouseCell::BoxLeft, WarehouseCell::BoxRight],
                _ => [WarehouseCell::Empty, WarehouseCell::Empty],
            });
        }

        Self {
            grid: Grid::try_from_cells_and_dimensions(
                cells,
                IVec2::new(2_i32 * dimensions.x, dimensions.y),
            )
            .unwrap(),
            robot: IVec2::new(2_i32 * solution.robot.x, solution.robot.y),
        }
    }

    /// Collects the tree of box cells resting against the robot in `dir`, then shifts them all by
    /// one cell. Nothing is mutated unless the whole tree has room to move.
    fn try_push(&mut self, dir: Direction) -> bool {
        let delta: IVec2 = dir.vec();
        let mut to_move: Vec<IVec2> = Vec::new();
        let mut seen: HashSet<IVec2> = HashSet::new();
        let mut worklist: Vec<IVec2> = vec![self.robot + delta];

        while let Some(pos) = worklist.pop() {
            if !seen.insert(pos) {
                continue;
            }

            match self.grid.get(pos).copied() {
                None | Some(WarehouseCell::Wall) => return false,
                Some(WarehouseCell::Empty) | Some(WarehouseCell::Robot) => {}
                Some(WarehouseCell::Box) => {
                    to_move.push(pos);
                    worklist.push(pos + delta);
                }
                Some(WarehouseCell::BoxLeft) => {
                    to_move.push(pos);
                    worklist.push(pos + delta);
                    worklist.push(pos + IVec2::X);
                }
                Some(WarehouseCell::BoxRight) => {
                    to_move.push(pos);
                    worklist.push(pos + delta);
                    worklist.push(pos + IVec2::NEG_X);
                }
            }
        }

        let moved: Vec<(IVec2, WarehouseCell)> = to_move
            .iter()
            .map(|&pos| (pos + delta, *self.grid.get(pos).unwrap()))
            .collect();

        for &pos in &to_move {
            *self.grid.get_mut(pos).unwrap() = WarehouseCell::Empty;
        }

        for (pos, cell) in moved {
            *self.grid.get_mut(pos).unwrap() = cell;
        }

        true
    }

    fn run(&mut self, moves: &[Direction]) {
        for &dir in moves {
            if self.try_push(dir) {
                self.robot += dir.vec();
            }
        }
    }

    fn render(&self) -> String {
        let mut grid: Grid<WarehouseCell> = self.grid.clone();

        *grid.get_mut(self.robot).unwrap() = WarehouseCell::Robot;

        (&grid).into()
    }

    /// GPS coordinates measure from the top-left corner; a wide box counts its left half.
    fn gps_sum(&self) -> u32 {
        self.grid
            .iter_filtered_positions(|cell| {
                matches!(cell, WarehouseCell::Box | WarehouseCell::BoxLeft)
            })
            .map(|pos| 100_u32 * pos.y as u32 + pos.x as u32)
            .sum()
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    grid: Grid<WarehouseCell>,
    robot: IVec2,
    moves: Vec<Direction>,
}

impl Solution {
    fn run_narrow(&self) -> Warehouse {
        let mut warehouse: Warehouse = Warehouse::narrow(self);

        warehouse.run(&self.moves);

        warehouse
    }

    fn run_wide(&self) -> Warehouse {
        let mut warehouse: Warehouse = Warehouse::wide(self);

        warehouse.run(&self.moves);

        warehouse
    }

    fn narrow_gps_sum(&self) -> u32 {
        self.run_narrow().gps_sum()
    }

    fn wide_gps_sum(&self) -> u32 {
        self.run_wide().gps_sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_opt(
            tuple((
                Grid::parse,
                preceded(
                    opt(line_ending),
                    many0(terminated(
                        map(one_of("^>v<"), |c| match c {
                            '^' => Direction::Up,
                            '>' => Direction::Right,
                            'v' => Direction::Down,
                            _ => Direction::Left,
                        }),
                        opt(line_ending),
                    )),
                ),
            )),
            |(mut grid, moves): (Grid<WarehouseCell>, Vec<Direction>)| {
                grid.try_find_single_position_with_cell(&WarehouseCell::Robot)
                    .map(|robot| {
                        *grid.get_mut(robot).unwrap() = WarehouseCell::Empty;

                        Self { grid, robot, moves }
                    })
            },
        )(input)
    }
}

impl RunParts for Solution {
    fn p1_internal(&mut self, args: &PartArgs) {
        if !args.verbose {
            dbg!(self.narrow_gps_sum());
        } else {
            let warehouse: Warehouse = self.run_narrow();

            dbg!(warehouse.gps_sum());
            println!("{}", warehouse.render());
        }
    }

    fn p2_internal(&mut self, args: &PartArgs) {
        if !args.verbose {
            dbg!(self.wide_gps_sum());
        } else {
            let warehouse: Warehouse = self.run_wide();

            dbg!(warehouse.gps_sum());
            println!("{}", warehouse.render());
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
        ########\n\
        #..O.O.#\n\
        ##@.O..#\n\
        #...O..#\n\
        #.#.O..#\n\
        #...O..#\n\
        #......#\n\
        ########\n\
        \n\
        <^^>>>vv<v>>v<<\n",
        "\
        #######\n\
        #...#.#\n\
        #.....#\n\
        #..OO@#\n\
        #..O..#\n\
        #.....#\n\
        #######\n\
        \n\
        <vv<<^^<<^^\n",
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
        assert_eq!(solution(0_usize).robot, IVec2::new(2_i32, 2_i32));
        assert_eq!(solution(0_usize).moves.len(), 15_usize);
        assert_eq!(
            solution(0_usize).moves[..4_usize],
            [
                Direction::Left,
                Direction::Up,
                Direction::Up,
                Direction::Right
            ]
        );
        assert_eq!(solution(1_usize).robot, IVec2::new(5_i32, 3_i32));
        assert_eq!(solution(1_usize).moves.len(), 11_usize);
    }

    #[test]
    fn test_narrow_gps_sum() {
        assert_eq!(solution(0_usize).narrow_gps_sum(), 2028_u32);
    }

    #[test]
    fn test_wide_gps_sum() {
        assert_eq!(solution(1_usize).wide_gps_sum(), 618_u32);
    }
}
