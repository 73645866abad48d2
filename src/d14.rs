use {
    crate::*,
    glam::IVec2,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::many0,
        sequence::{preceded, separated_pair, terminated},
        Err, IResult,
    },
    std::collections::HashSet,
};

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Robot {
    position: IVec2,
    velocity: IVec2,
}

impl Robot {
    fn position_after(&self, steps: i32, dimensions: IVec2) -> IVec2 {
        let position: IVec2 = self.position + steps * self.velocity;

        IVec2::new(
            position.x.rem_euclid(dimensions.x),
            position.y.rem_euclid(dimensions.y),
        )
    }

    fn parse_vec<'i>(input: &'i str) -> IResult<&'i str, IVec2> {
        map(
            separated_pair(parse_integer, tag(","), parse_integer),
            |(x, y)| IVec2::new(x, y),
        )(input)
    }
}

impl Parse for Robot {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                preceded(tag("p="), Self::parse_vec),
                tag(" v="),
                Self::parse_vec,
            ),
            |(position, velocity)| Self { position, velocity },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Robot>);

impl Solution {
    const DIMENSIONS: IVec2 = IVec2::new(101_i32, 103_i32);

    fn safety_factor(&self, dimensions: IVec2, steps: i32) -> usize {
        let middle: IVec2 = dimensions / 2_i32;
        let mut quadrant_counts: [usize; 4_usize] = [0_usize; 4_usize];

        for robot in &self.0 {
            let position: IVec2 = robot.position_after(steps, dimensions);

            // Robots on the middle row or column belong to no quadrant.
            if position.x == middle.x || position.y == middle.y {
                continue;
            }

            quadrant_counts[(position.x > middle.x) as usize
                + 2_usize * (position.y > middle.y) as usize] += 1_usize;
        }

        quadrant_counts.into_iter().product()
    }

    /// A point with 3-long diagonal arms going down both ways marks the tip of the tree.
    fn contains_tree(positions: &HashSet<IVec2>) -> bool {
        positions.iter().any(|&tip| {
            (1_i32..=3_i32).all(|arm| {
                positions.contains(&(tip + IVec2::new(-arm, arm)))
                    && positions.contains(&(tip + IVec2::new(arm, arm)))
            })
        })
    }

    fn seconds_until_tree(&self, dimensions: IVec2) -> i32 {
        (0_i32..)
            .find(|&steps| {
                Self::contains_tree(
                    &self
                        .0
                        .iter()
                        .map(|robot| robot.position_after(steps, dimensions))
                        .collect(),
                )
            })
            .unwrap()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(Robot::parse, opt(line_ending))), Self)(input)
    }
}

impl RunParts for Solution {
    fn p1_internal(&mut self, _args: &PartArgs) {
        dbg!(self.safety_factor(Self::DIMENSIONS, 100_i32));
    }

    fn p2_internal(&mut self, _args: &PartArgs) {
        dbg!(self.seconds_until_tree(Self::DIMENSIONS));
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
