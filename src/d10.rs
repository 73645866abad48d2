use {
    crate::*,
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
struct Height(u8);

impl Height {
    const TRAILHEAD: Self = Self(0_u8);
    const PEAK: Self = Self(9_u8);
}

impl Parse for Height {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(satisfy(|c| c.is_ascii_digit()), |c| Self(c as u8 - b'0'))(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid<Height>);

impl Solution {
    /// Depth-first walk over +1 height steps, invoking `f` for every reached peak, once per
    /// distinct trail.
    fn visit_peaks<F: FnMut(IVec2)>(&self, pos: IVec2, f: &mut F) {
        let height: Height = *self.0.get(pos).unwrap();

        if height == Height::PEAK {
            f(pos);

            return;
        }

        for dir in Direction::iter() {
            let next: IVec2 = pos + dir.vec();

            if self.0.get(next) == Some(&Height(height.0 + 1_u8)) {
                self.visit_peaks(next, f);
            }
        }
    }

    fn trailhead_score_sum(&self) -> usize {
        self.0
            .iter_positions_with_cell(&Height::TRAILHEAD)
            .map(|trailhead| {
                let mut peaks: HashSet<IVec2> = HashSet::new();

                self.visit_peaks(trailhead, &mut |peak| {
                    peaks.insert(peak);
                });

                peaks.len()
            })
            .sum()
    }

    fn trailhead_rating_sum(&self) -> usize {
        self.0
            .iter_positions_with_cell(&Height::TRAILHEAD)
            .map(|trailhead| {
                let mut trails: usize = 0_usize;

                self.visit_peaks(trailhead, &mut |_| {
                    trails += 1_usize;
                });

                trails
            })
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
        dbg!(self.trailhead_score_sum());
    }

    fn p2_internal(&mut self, _args: &PartArgs) {
        dbg!(self.trailhead_rating_sum());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
