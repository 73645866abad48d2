use {
    crate::*,
    bitvec::prelude::*,
    glam::IVec2,
    nom::{
        character::complete::satisfy,
        combinator::map,
        error::Error,
        Err, IResult,
    },
    std::collections::HashSet,
    strum::IntoEnumIterator,
};

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq)]
struct Plant(u8);

impl Parse for Plant {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(satisfy(|c| c.is_ascii_uppercase()), |c| Self(c as u8))(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Region {
    area: usize,
    perimeter: usize,
    sides: usize,
}

impl Region {
    /// A region's side count equals its corner count. Convex corners are counted once by the one
    /// cell that observes them; concave corners are observed by two cells each, so their tally is
    /// halved.
    fn from_cells(cells: &HashSet<IVec2>) -> Self {
        let mut perimeter: usize = 0_usize;
        let mut convex_corners: usize = 0_usize;
        let mut concave_corners: usize = 0_usize;

        for &pos in cells {
            let inside = |delta: IVec2| -> bool { cells.contains(&(pos + delta)) };

            let up: bool = inside(IVec2::NEG_Y);
            let right: bool = inside(IVec2::X);
            let down: bool = inside(IVec2::Y);
            let left: bool = inside(IVec2::NEG_X);

            let inside_neighbor_count: usize = [up, right, down, left]
                .into_iter()
                .filter(|&is_inside| is_inside)
                .count();

            if inside_neighbor_count == 4_usize {
                continue;
            }

            perimeter += 4_usize - inside_neighbor_count;

            convex_corners += [
                !up && !right,
                !right && !down,
                !down && !left,
                !left && !up,
            ]
            .into_iter()
            .filter(|&is_corner| is_corner)
            .count();

            let up_right: bool = inside(IVec2::new(1_i32, -1_i32));
            let down_right: bool = inside(IVec2::ONE);
            let down_left: bool = inside(IVec2::new(-1_i32, 1_i32));
            let up_left: bool = inside(IVec2::NEG_ONE);

            concave_corners += [
                !up && up_left && left,
                !up && up_right && right,
                !right && up_right && up,
                !right && down_right && down,
                !down && down_right && right,
                !down && down_left && left,
                !left && down_left && down,
                !left && up_left && up,
            ]
            .into_iter()
            .filter(|&is_corner| is_corner)
            .count();
        }

        Self {
            area: cells.len(),
            perimeter,
            sides: convex_corners + concave_corners / 2_usize,
        }
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid<Plant>);

impl Solution {
    fn regions(&self) -> Vec<Region> {
        let mut visited: BitVec = bitvec![0; self.0.area()];
        let mut regions: Vec<Region> = Vec::new();

        for start_index in 0_usize..self.0.area() {
            if visited[start_index] {
                continue;
            }

            let plant: Plant = self.0.cells()[start_index];
            let mut cells: HashSet<IVec2> = HashSet::new();
            let mut stack: Vec<IVec2> = vec![self.0.pos_from_index(start_index)];

            visited.set(start_index, true);

            while let Some(pos) = stack.pop() {
                cells.insert(pos);

                for dir in Direction::iter() {
                    let next: IVec2 = pos + dir.vec();

                    if self.0.get(next) == Some(&plant) {
                        let next_index: usize = self.0.index_from_pos(next);

                        if !visited[next_index] {
                            visited.set(next_index, true);
                            stack.push(next);
                        }
                    }
                }
            }

            regions.push(Region::from_cells(&cells));
        }

        regions
    }

    fn perimeter_price(&self) -> usize {
        self.regions()
            .into_iter()
            .map(|region| region.area * region.perimeter)
            .sum()
    }

    fn side_price(&self) -> usize {
        self.regions()
            .into_iter()
            .map(|region| region.area * region.sides)
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid::parse, Self)(input)
    }
}

impl RunParts for Solution {
    fn p1_internal(&mut self, _args: &PartArgs) {
        dbg!(self.perimeter_price());
    }

    fn p2_internal(&mut self, _args: &PartArgs) {
        dbg!(self.side_price());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
