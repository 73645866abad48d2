use {
    crate::*,
    glam::IVec2,
    nom::{combinator::map, error::Error, Err, IResult},
};

crate::ascii_cell! {
    #[cfg_attr(test, derive(Debug))]
    #[derive(Clone, Copy, PartialEq)]
    enum Letter {
        X = b'X',
        M = b'M',
        A = b'A',
        S = b'S',
    }
}

const XMAS: [Letter; 4_usize] = [Letter::X, Letter::M, Letter::A, Letter::S];

/// The 8 ray directions, orthogonal and diagonal.
const RAY_DELTAS: [IVec2; 8_usize] = [
    IVec2::new(0_i32, -1_i32),
    IVec2::new(1_i32, -1_i32),
    IVec2::new(1_i32, 0_i32),
    IVec2::new(1_i32, 1_i32),
    IVec2::new(0_i32, 1_i32),
    IVec2::new(-1_i32, 1_i32),
    IVec2::new(-1_i32, 0_i32),
    IVec2::new(-1_i32, -1_i32),
];

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid<Letter>);

impl Solution {
    fn ray_matches(&self, start: IVec2, delta: IVec2, word: &[Letter]) -> bool {
        word.iter().enumerate().all(|(index, letter)| {
            self.0.get(start + index as i32 * delta) == Some(letter)
        })
    }

    fn xmas_count(&self) -> usize {
        self.0
            .iter_positions_with_cell(&Letter::X)
            .map(|start| {
                RAY_DELTAS
                    .into_iter()
                    .filter(|&delta| self.ray_matches(start, delta, &XMAS))
                    .count()
            })
            .sum()
    }

    /// Both diagonals through `center` read "MAS" in one orientation or the other.
    fn is_x_mas_center(&self, center: IVec2) -> bool {
        let mas: [Letter; 3_usize] = [Letter::M, Letter::A, Letter::S];
        let down_right: IVec2 = IVec2::ONE;
        let down_left: IVec2 = IVec2::new(-1_i32, 1_i32);

        (self.ray_matches(center - down_right, down_right, &mas)
            || self.ray_matches(center + down_right, -down_right, &mas))
            && (self.ray_matches(center - down_left, down_left, &mas)
                || self.ray_matches(center + down_left, -down_left, &mas))
    }

    fn x_mas_count(&self) -> usize {
        self.0
            .iter_positions_with_cell(&Letter::A)
            .filter(|&center| self.is_x_mas_center(center))
            .count()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid::parse, Self)(input)
    }
}

impl RunParts for Solution {
    fn p1_internal(&mut self, _args: &PartArgs) {
        dbg!(self.xmas_count());
    }

    fn p2_internal(&mut self, _args: &PartArgs) {
        dbg!(self.x_mas_count());
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

    const SOLUTION_STRS: &'static [&'static str] = &["\
        MMMSXXMASM\n\
        MSAMXMSMSA\n\
        AMXSXMAAMM\n\
        MSAMASMSMX\n\
        XMASAMXAMM\n\
        XXAMMXXAMA\n\
        SMSMSASXSS\n\
        SAXAMASAAA\n\
        MAMMMXMMMM\n\
        MXMXAXMASX\n"];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            vec![Solution::try_from(SOLUTION_STRS[0_usize]).unwrap()]
        })[index]
    }

    #[test]
    fn test_xmas_count() {
        for (index, xmas_count) in [18_usize].into_iter().enumerate() {
            assert_eq!(solution(index).xmas_count(), xmas_count);
        }
    }

    #[test]
    fn test_x_mas_count() {
        for (index, x_mas_count) in [9_usize].into_iter().enumerate() {
            assert_eq!(solution(index).x_mas_count(), x_mas_count);
        }
    }
}
