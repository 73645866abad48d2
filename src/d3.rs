use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::anychar,
        combinator::{map, verify},
        error::Error,
        multi::{many0, many_till},
        sequence::{delimited, separated_pair},
        Err, IResult,
    },
};

#[cfg_attr(test, derive(Debug, PartialEq))]
enum Instruction {
    Mul(i32, i32),
    Do,
    Dont,
}

impl Instruction {
    fn parse_operand<'i>(input: &'i str) -> IResult<&'i str, i32> {
        verify(parse_integer, |&operand| {
            (0_i32..1000_i32).contains(&operand)
        })(input)
    }
}

impl Parse for Instruction {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((
            map(
                delimited(
                    tag("mul("),
                    separated_pair(Self::parse_operand, tag(","), Self::parse_operand),
                    tag(")"),
                ),
                |(left, right)| Self::Mul(left, right),
            ),
            map(tag("do()"), |_| Self::Do),
            map(tag("don't()"), |_| Self::Dont),
        ))(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Instruction>);

impl Solution {
    fn product_sum(&self) -> i32 {
        self.0
            .iter()
            .map(|instruction| match instruction {
                Instruction::Mul(left, right) => left * right,
                _ => 0_i32,
            })
            .sum()
    }

    fn enabled_product_sum(&self) -> i32 {
        self.0
            .iter()
            .fold(
                (0_i32, true),
                |(sum, enabled), instruction| match instruction {
                    Instruction::Mul(left, right) => {
                        (sum + if enabled { left * right } else { 0_i32 }, enabled)
                    }
                    Instruction::Do => (sum, true),
                    Instruction::Dont => (sum, false),
                },
            )
            .0
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(map(
                many_till(anychar, Instruction::parse),
                |(_, instruction)| instruction,
            )),
            Self,
        )(input)
    }
}

impl RunParts for Solution {
    fn p1_internal(&mut self, _args: &PartArgs) {
        dbg!(self.product_sum());
    }

    fn p2_internal(&mut self, _args: &PartArgs) {
        dbg!(self.enabled_product_sum());
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
        "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))",
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))",
    ];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            vec![
                Solution(vec![
                    Instruction::Mul(2_i32, 4_i32),
                    Instruction::Mul(5_i32, 5_i32),
                    Instruction::Mul(11_i32, 8_i32),
                    Instruction::Mul(8_i32, 5_i32),
                ]),
                Solution(vec![
                    Instruction::Mul(2_i32, 4_i32),
                    Instruction::Dont,
                    Instruction::Mul(5_i32, 5_i32),
                    Instruction::Mul(11_i32, 8_i32),
                    Instruction::Do,
                    Instruction::Mul(8_i32, 5_i32),
                ]),
            ]
        })[index]
    }

    #[test]
    fn test_try_from_str() {
        for (index, solution_str) in SOLUTION_STRS.iter().copied().enumerate() {
            assert_eq!(
                Solution::try_from(solution_str).as_ref(),
                Ok(solution(index))
            );
        }
    }

    #[test]
    fn test_product_sum() {
        for (index, product_sum) in [161_i32, 161_i32].into_iter().enumerate() {
            assert_eq!(solution(index).product_sum(), product_sum);
        }
    }

    #[test]
    fn test_enabled_product_sum() {
        for (index, enabled_product_sum) in [161_i32, 48_i32].into_iter().enumerate() {
            assert_eq!(solution(index).enabled_product_sum(), enabled_product_sum);
        }
    }
}
