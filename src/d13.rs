use {
    crate::*,
    glam::I64Vec2,
    nom::{
        bytes::complete::tag,
        character::complete::{digit1, line_ending, one_of},
        combinator::{map, map_res, opt},
        error::Error,
        multi::many0,
        sequence::{preceded, separated_pair, terminated, tuple},
        Err, IResult,
    },
    std::str::FromStr,
};

fn parse_signed<'i>(input: &'i str) -> IResult<&'i str, i64> {
    map(
        tuple((opt(one_of("+-")), map_res(digit1, i64::from_str))),
        |(sign, value)| {
            if sign == Some('-') {
                -value
            } else {
                value
            }
        },
    )(input)
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct ClawMachine {
    button_a: I64Vec2,
    button_b: I64Vec2,
    prize: I64Vec2,
}

impl ClawMachine {
    const BUTTON_A_COST: i64 = 3_i64;
    const BUTTON_B_COST: i64 = 1_i64;

    /// Solves `press_a * button_a + press_b * button_b == prize` exactly, rejecting non-integer
    /// and negative press counts.
    fn try_press_counts(&self, prize_offset: i64) -> Option<(i64, i64)> {
        let prize: I64Vec2 = self.prize + I64Vec2::new(prize_offset, prize_offset);
        let determinant: i64 =
            self.button_a.x * self.button_b.y - self.button_a.y * self.button_b.x;

        if determinant == 0_i64 {
            return None;
        }

        let press_a_numerator: i64 = prize.x * self.button_b.y - prize.y * self.button_b.x;
        let press_b_numerator: i64 = self.button_a.x * prize.y - self.button_a.y * prize.x;

        (press_a_numerator % determinant == 0_i64
            && press_b_numerator % determinant == 0_i64
            && press_a_numerator.signum() * determinant.signum() >= 0_i64
            && press_b_numerator.signum() * determinant.signum() >= 0_i64)
            .then(|| {
                (
                    press_a_numerator / determinant,
                    press_b_numerator / determinant,
                )
            })
    }

    fn parse_button<'i>(input: &'i str, label: &'static str) -> IResult<&'i str, I64Vec2> {
        map(
            preceded(
                tuple((tag("Button "), tag(label), tag(": X"))),
                separated_pair(parse_signed, tag(", Y"), parse_signed),
            ),
            |(x, y)| I64Vec2::new(x, y),
        )(input)
    }
}

impl Parse for ClawMachine {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                terminated(|input| Self::parse_button(input, "A"), line_ending),
                terminated(|input| Self::parse_button(input, "B"), line_ending),
                preceded(
                    tag("Prize: X="),
                    separated_pair(parse_signed, tag(", Y="), parse_signed),
                ),
            )),
            |(button_a, button_b, (x, y))| Self {
                button_a,
                button_b,
                prize: I64Vec2::new(x, y),
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<ClawMachine>);

impl Solution {
    fn capped_token_cost(&self) -> i64 {
        self.0
            .iter()
            .filter_map(|claw_machine| claw_machine.try_press_counts(0_i64))
            .filter(|&(press_a, press_b)| press_a <= 100_i64 && press_b <= 100_i64)
            .map(|(press_a, press_b)| {
                press_a * ClawMachine::BUTTON_A_COST + press_b * ClawMachine::BUTTON_B_COST
            })
            .sum()
    }

    fn offset_token_cost(&self) -> i64 {
        const PRIZE_OFFSET: i64 = 10_000_000_000_000_i64;

        self.0
            .iter()
            .filter_map(|claw_machine| claw_machine.try_press_counts(PRIZE_OFFSET))
            .map(|(press_a, press_b)| {
                press_a * ClawMachine::BUTTON_A_COST + press_b * ClawMachine::BUTTON_B_COST
            })
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(terminated(
                ClawMachine::parse,
                many0(line_ending),
            )),
            Self,
        )(input)
    }
}

impl RunParts for Solution {
    fn p1_internal(&mut self, _args: &PartArgs) {
        dbg!(self.capped_token_cost());
    }

    fn p2_internal(&mut self, _args: &PartArgs) {
        dbg!(self.offset_token_cost());
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
        Button A: X+94, Y+34\n\
        Button B: X+22, Y+67\n\
        Prize: X=8400, Y=5400\n\
        \n\
        Button A: X+26, Y+66\n\
        Button B: X+67, Y+21\n\
        Prize: X=12748, Y=12176\n\
        \n\
        Button A: X+17, Y+86\n\
        Button B: X+84, Y+37\n\
        Prize: X=7870, Y=6450\n\
        \n\
        Button A: X+69, Y+23\n\
        Button B: X+27, Y+71\n\
        Prize: X=18641, Y=10279\n"];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            vec![Solution::try_from(SOLUTION_STRS[0_usize]).unwrap()]
        })[index]
    }

    #[test]
    fn test_parsed_machines() {
        assert_eq!(solution(0_usize).0.len(), 4_usize);
        assert_eq!(
            solution(0_usize).0[0_usize],
            ClawMachine {
                button_a: I64Vec2::new(94_i64, 34_i64),
                button_b: I64Vec2::new(22_i64, 67_i64),
                prize: I64Vec2::new(8400_i64, 5400_i64),
            }
        );
    }

    #[test]
    fn test_try_press_counts() {
        assert_eq!(
            solution(0_usize).0[0_usize].try_press_counts(0_i64),
            Some((80_i64, 40_i64))
        );
        assert_eq!(solution(0_usize).0[1_usize].try_press_counts(0_i64), None);
    }

    #[test]
    fn test_capped_token_cost() {
        for (index, capped_token_cost) in [480_i64].into_iter().enumerate() {
            assert_eq!(solution(index).capped_token_cost(), capped_token_cost);
        }
    }

    #[test]
    fn test_offset_token_cost() {
        for (index, offset_token_cost) in [875318608908_i64].into_iter().enumerate() {
            assert_eq!(solution(index).offset_token_cost(), offset_token_cost);
        }
    }
}
