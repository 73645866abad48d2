use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::{line_ending, space1},
        combinator::{map, opt},
        error::Error,
        multi::{many0, separated_list1},
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
};

#[derive(Clone, Copy)]
enum Operator {
    Add,
    Multiply,
    Concatenate,
}

impl Operator {
    fn apply(self, a: u64, b: u64) -> u64 {
        match self {
            Self::Add => a + b,
            Self::Multiply => a * b,
            Self::Concatenate => {
                let mut shift: u64 = 10_u64;

                while shift <= b {
                    shift *= 10_u64;
                }

                a * shift + b
            }
        }
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Calibration {
    target: u64,
    operands: Vec<u64>,
}

impl Calibration {
    fn can_be_true_internal(&self, accumulator: u64, remaining: &[u64], operators: &[Operator]) -> bool {
        match remaining.split_first() {
            None => accumulator == self.target,
            // Every operator only grows the accumulator, so overshooting is unrecoverable.
            Some(_) if accumulator > self.target => false,
            Some((&next, tail)) => operators.iter().any(|operator| {
                self.can_be_true_internal(operator.apply(accumulator, next), tail, operators)
            }),
        }
    }

    fn can_be_true(&self, operators: &[Operator]) -> bool {
        self.operands.split_first().map_or(false, |(&first, tail)| {
            self.can_be_true_internal(first, tail, operators)
        })
    }
}

impl Parse for Calibration {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                parse_integer,
                terminated(tag(":"), space1),
                separated_list1(space1, parse_integer),
            ),
            |(target, operands)| Self { target, operands },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Calibration>);

impl Solution {
    fn achievable_target_sum(&self, operators: &[Operator]) -> u64 {
        self.0
            .iter()
            .filter(|calibration| calibration.can_be_true(operators))
            .map(|calibration| calibration.target)
            .sum()
    }

    fn add_multiply_target_sum(&self) -> u64 {
        self.achievable_target_sum(&[Operator::Add, Operator::Multiply])
    }

    fn add_multiply_concatenate_target_sum(&self) -> u64 {
        self.achievable_target_sum(&[
            Operator::Add,
            Operator::Multiply,
            Operator::Concatenate,
        ])
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(terminated(Calibration::parse, opt(line_ending))),
            Self,
        )(input)
    }
}

impl RunParts for Solution {
    fn p1_internal(&mut self, _args: &PartArgs) {
        dbg!(self.add_multiply_target_sum());
    }

    fn p2_internal(&mut self, _args: &PartArgs) {
        dbg!(self.add_multiply_concatenate_target_sum());
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
        190: 10 19\n\
        3267: 81 40 27\n\
        83: 17 5\n\
        156: 15 6\n\
        7290: 6 8 6 15\n\
        161011: 16 10 13\n\
        192: 17 8 14\n\
        21037: 9 7 18 13\n\
        292: 11 6 16 20\n"];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            vec![Solution(
                [
                    (190_u64, vec![10_u64, 19_u64]),
                    (3267_u64, vec![81_u64, 40_u64, 27_u64]),
                    (83_u64, vec![17_u64, 5_u64]),
                    (156_u64, vec![15_u64, 6_u64]),
                    (7290_u64, vec![6_u64, 8_u64, 6_u64, 15_u64]),
                    (161011_u64, vec![16_u64, 10_u64, 13_u64]),
                    (192_u64, vec![17_u64, 8_u64, 14_u64]),
                    (21037_u64, vec![9_u64, 7_u64, 18_u64, 13_u64]),
                    (292_u64, vec![11_u64, 6_u64, 16_u64, 20_u64]),
                ]
                .into_iter()
                .map(|(target, operands)| Calibration { target, operands })
                .collect(),
            )]
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
    fn test_add_multiply_target_sum() {
        for (index, target_sum) in [3749_u64].into_iter().enumerate() {
            assert_eq!(solution(index).add_multiply_target_sum(), target_sum);
        }
    }

    #[test]
    fn test_add_multiply_concatenate_target_sum() {
        for (index, target_sum) in [11387_u64].into_iter().enumerate() {
            assert_eq!(
                solution(index).add_multiply_concatenate_target_sum(),
                target_sum
            );
        }
    }
}
