use {
    crate::*,
    nom::{
        character::complete::space1,
        combinator::map,
        error::Error,
        multi::separated_list1,
        Err, IResult,
    },
    std::collections::HashMap,
};

type BlinkCache = HashMap<(u64, u8), u64>;

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<u64>);

impl Solution {
    fn count_stones(stone: u64, blinks: u8, cache: &mut BlinkCache) -> u64 {
        if blinks == 0_u8 {
            return 1_u64;
        }

        if let Some(&count) = cache.get(&(stone, blinks)) {
            return count;
        }

        let digits: u32 = if stone == 0_u64 { 1_u32 } else { stone.ilog10() + 1_u32 };

        let count: u64 = if stone == 0_u64 {
            Self::count_stones(1_u64, blinks - 1_u8, cache)
        } else if digits % 2_u32 == 0_u32 {
            let split: u64 = 10_u64.pow(digits / 2_u32);

            Self::count_stones(stone / split, blinks - 1_u8, cache)
                + Self::count_stones(stone % split, blinks - 1_u8, cache)
        } else {
            Self::count_stones(stone * 2024_u64, blinks - 1_u8, cache)
        };

        cache.insert((stone, blinks), count);

        count
    }

    fn stone_count_after_blinks(&self, blinks: u8) -> u64 {
        let mut cache: BlinkCache = BlinkCache::new();

        self.0
            .iter()
            .map(|&stone| Self::count_stones(stone, blinks, &mut cache))
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(separated_list1(space1, parse_integer), Self)(input)
    }
}

impl RunParts for Solution {
    fn p1_internal(&mut self, _args: &PartArgs) {
        dbg!(self.stone_count_after_blinks(25_u8));
    }

    fn p2_internal(&mut self, _args: &PartArgs) {
        dbg!(self.stone_count_after_blinks(75_u8));
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
