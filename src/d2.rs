use {
    crate::*,
    nom::{
        character::complete::{line_ending, space1},
        combinator::{map, opt},
        error::Error,
        multi::{many0, separated_list1},
        sequence::terminated,
        Err, IResult,
    },
};

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Report(Vec<i32>);

impl Report {
    /// Whether consecutive levels all satisfy `predicate`, allowing up to `tolerance` level
    /// removals. On the first failing window, only the three removals touching that window can
    /// repair the report, so only those are retried.
    fn pairs_conform<P: Copy + Fn(i32, i32) -> bool>(
        levels: &[i32],
        predicate: P,
        tolerance: u8,
    ) -> bool {
        for index in 1_usize..levels.len().saturating_sub(1_usize) {
            if predicate(levels[index - 1_usize], levels[index])
                && predicate(levels[index], levels[index + 1_usize])
            {
                continue;
            }

            if tolerance == 0_u8 {
                return false;
            }

            return [index - 1_usize, index, index + 1_usize]
                .into_iter()
                .any(|removed_index| {
                    let mut remaining: Vec<i32> = levels[index - 1_usize..].to_vec();

                    remaining.remove(removed_index + 1_usize - index);

                    Self::pairs_conform(&remaining, predicate, tolerance - 1_u8)
                });
        }

        true
    }

    fn is_safe(&self, tolerance: u8) -> bool {
        Self::pairs_conform(
            &self.0,
            |a, b| (1_i32..=3_i32).contains(&(b - a)),
            tolerance,
        ) || Self::pairs_conform(
            &self.0,
            |a, b| (1_i32..=3_i32).contains(&(a - b)),
            tolerance,
        )
    }
}

impl Parse for Report {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(separated_list1(space1, parse_integer), Self)(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Report>);

impl Solution {
    fn safe_report_count(&self, tolerance: u8) -> usize {
        self.0
            .iter()
            .filter(|report| report.is_safe(tolerance))
            .count()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(Report::parse, opt(line_ending))), Self)(input)
    }
}

impl RunParts for Solution {
    fn p1_internal(&mut self, _args: &PartArgs) {
        dbg!(self.safe_report_count(0_u8));
    }

    fn p2_internal(&mut self, _args: &PartArgs) {
        dbg!(self.safe_report_count(1_u8));
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
        7 6 4 2 1\n\
        1 2 7 8 9\n\
        9 7 6 2 1\n\
        1 3 2 4 5\n\
        8 6 4 4 1\n\
        1 3 6 7 9\n"];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            vec![Solution(
                [
                    vec![7_i32, 6_i32, 4_i32, 2_i32, 1_i32],
                    vec![1_i32, 2_i32, 7_i32, 8_i32, 9_i32],
                    vec![9_i32, 7_i32, 6_i32, 2_i32, 1_i32],
                    vec![1_i32, 3_i32, 2_i32, 4_i32, 5_i32],
                    vec![8_i32, 6_i32, 4_i32, 4_i32, 1_i32],
                    vec![1_i32, 3_i32, 6_i32, 7_i32, 9_i32],
                ]
                .into_iter()
                .map(Report)
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
    fn test_safe_report_count() {
        for (index, safe_report_count) in [2_usize].into_iter().enumerate() {
            assert_eq!(solution(index).safe_report_count(0_u8), safe_report_count);
        }
    }

    #[test]
    fn test_safe_report_count_with_tolerance() {
        for (index, safe_report_count) in [4_usize].into_iter().enumerate() {
            assert_eq!(solution(index).safe_report_count(1_u8), safe_report_count);
        }
    }
}
