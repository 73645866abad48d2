use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::{many0, separated_list1},
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
    std::{
        cmp::Ordering,
        collections::{HashMap, HashSet},
    },
};

type PageNumber = u8;

#[cfg_attr(test, derive(Debug, PartialEq))]
struct OrderingRule {
    before: PageNumber,
    after: PageNumber,
}

impl Parse for OrderingRule {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(parse_integer, tag("|"), parse_integer),
            |(before, after)| Self { before, after },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Update(Vec<PageNumber>);

impl Update {
    fn middle_page_number(&self) -> PageNumber {
        self.0[self.0.len() / 2_usize]
    }
}

impl Parse for Update {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(separated_list1(tag(","), parse_integer), Self)(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    rules: Vec<OrderingRule>,
    updates: Vec<Update>,
}

impl Solution {
    /// Pages that must succeed each page, keyed by the preceding page.
    fn successors(&self) -> HashMap<PageNumber, HashSet<PageNumber>> {
        let mut successors: HashMap<PageNumber, HashSet<PageNumber>> = HashMap::new();

        for rule in &self.rules {
            successors.entry(rule.before).or_default().insert(rule.after);
        }

        successors
    }

    fn compare(
        successors: &HashMap<PageNumber, HashSet<PageNumber>>,
        a: PageNumber,
        b: PageNumber,
    ) -> Ordering {
        if successors.get(&a).map_or(false, |pages| pages.contains(&b)) {
            Ordering::Less
        } else if successors.get(&b).map_or(false, |pages| pages.contains(&a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_in_correct_order(
        successors: &HashMap<PageNumber, HashSet<PageNumber>>,
        update: &Update,
    ) -> bool {
        update.0.windows(2_usize).all(|pair| {
            Self::compare(successors, pair[0_usize], pair[1_usize]) != Ordering::Greater
        })
    }

    fn correct_middle_page_sum(&self) -> u32 {
        let successors: HashMap<PageNumber, HashSet<PageNumber>> = self.successors();

        self.updates
            .iter()
            .filter(|update| Self::is_in_correct_order(&successors, update))
            .map(|update| update.middle_page_number() as u32)
            .sum()
    }

    fn reordered_middle_page_sum(&self) -> u32 {
        let successors: HashMap<PageNumber, HashSet<PageNumber>> = self.successors();

        self.updates
            .iter()
            .filter(|update| !Self::is_in_correct_order(&successors, update))
            .map(|update| {
                let mut pages: Vec<PageNumber> = update.0.clone();

                pages.sort_by(|&a, &b| Self::compare(&successors, a, b));

                Update(pages).middle_page_number() as u32
            })
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                many0(terminated(OrderingRule::parse, opt(line_ending))),
                opt(line_ending),
                many0(terminated(Update::parse, opt(line_ending))),
            ),
            |(rules, updates)| Self { rules, updates },
        )(input)
    }
}

impl RunParts for Solution {
    fn p1_internal(&mut self, _args: &PartArgs) {
        dbg!(self.correct_middle_page_sum());
    }

    fn p2_internal(&mut self, _args: &PartArgs) {
        dbg!(self.reordered_middle_page_sum());
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
        47|53\n\
        97|13\n\
        97|61\n\
        97|47\n\
        75|29\n\
        61|13\n\
        75|53\n\
        29|13\n\
        97|29\n\
        53|29\n\
        61|53\n\
        97|53\n\
        61|29\n\
        47|13\n\
        75|47\n\
        97|75\n\
        47|61\n\
        75|61\n\
        47|29\n\
        75|13\n\
        53|13\n\
        \n\
        75,47,61,53,29\n\
        97,61,53,29,13\n\
        75,29,13\n\
        75,97,47,61,53\n\
        61,13,29\n\
        97,13,75,29,47\n"];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            vec![Solution::try_from(SOLUTION_STRS[0_usize]).unwrap()]
        })[index]
    }

    #[test]
    fn test_parsed_shape() {
        assert_eq!(solution(0_usize).rules.len(), 21_usize);
        assert_eq!(solution(0_usize).updates.len(), 6_usize);
        assert_eq!(
            solution(0_usize).updates[0_usize],
            Update(vec![75_u8, 47_u8, 61_u8, 53_u8, 29_u8])
        );
    }

    #[test]
    fn test_correct_middle_page_sum() {
        for (index, correct_middle_page_sum) in [143_u32].into_iter().enumerate() {
            assert_eq!(
                solution(index).correct_middle_page_sum(),
                correct_middle_page_sum
            );
        }
    }

    #[test]
    fn test_reordered_middle_page_sum() {
        for (index, reordered_middle_page_sum) in [123_u32].into_iter().enumerate() {
            assert_eq!(
                solution(index).reordered_middle_page_sum(),
                reordered_middle_page_sum
            );
        }
    }
}
