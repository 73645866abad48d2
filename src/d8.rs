use {
    crate::*,
    glam::IVec2,
    nom::{
        character::complete::satisfy,
        combinator::{map, map_opt},
        error::Error,
        Err, IResult,
    },
    std::collections::{HashMap, HashSet},
};

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq)]
struct RoofCell(u8);

impl RoofCell {
    const EMPTY: Self = Self(b'.');

    fn frequency(self) -> Option<u8> {
        (self != Self::EMPTY).then_some(self.0)
    }
}

impl Parse for RoofCell {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            satisfy(|c| c == '.' || c.is_ascii_alphanumeric()),
            |c| Self(c as u8),
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    grid: Grid<RoofCell>,
    antennas: HashMap<u8, Vec<IVec2>>,
}

impl Solution {
    /// Visits every ordered pair of distinct same-frequency antennas.
    fn for_each_antenna_pair<F: FnMut(IVec2, IVec2)>(&self, mut f: F) {
        for positions in self.antennas.values() {
            for &a in positions {
                for &b in positions {
                    if a != b {
                        f(a, b);
                    }
                }
            }
        }
    }

    fn antinode_count(&self) -> usize {
        let mut antinodes: HashSet<IVec2> = HashSet::new();

        self.for_each_antenna_pair(|a, b| {
            let antinode: IVec2 = 2_i32 * a - b;

            if self.grid.contains(antinode) {
                antinodes.insert(antinode);
            }
        });

        antinodes.len()
    }

    fn resonant_antinode_count(&self) -> usize {
        let mut antinodes: HashSet<IVec2> = HashSet::new();

        self.for_each_antenna_pair(|a, b| {
            let delta: IVec2 = a - b;
            let mut antinode: IVec2 = a;

            while self.grid.contains(antinode) {
                antinodes.insert(antinode);
                antinode += delta;
            }
        });

        antinodes.len()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_opt(Grid::parse, |grid: Grid<RoofCell>| {
            let mut antennas: HashMap<u8, Vec<IVec2>> = HashMap::new();

            for pos in grid.iter_filtered_positions(|cell| cell.frequency().is_some()) {
                antennas
                    .entry(grid.get(pos)?.frequency()?)
                    .or_default()
                    .push(pos);
            }

            Some(Self { grid, antennas })
        })(input)
    }
}

impl RunParts for Solution {
    fn p1_internal(&mut self, _args: &PartArgs) {
        dbg!(self.antinode_count());
    }

    fn p2_internal(&mut self, _args: &PartArgs) {
        dbg!(self.resonant_antinode_count());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
