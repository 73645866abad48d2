use {
    crate::*,
    nom::{
        character::complete::satisfy,
        combinator::map,
        error::Error,
        multi::many1,
        Err, IResult,
    },
};

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
struct FileSpan {
    start: usize,
    len: usize,
    id: usize,
}

impl FileSpan {
    fn checksum(self) -> u64 {
        // id * (start + start + 1 + .. + start + len - 1)
        self.id as u64 * (self.start..self.start + self.len).sum::<usize>() as u64
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
struct FreeSpan {
    start: usize,
    len: usize,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    files: Vec<FileSpan>,
    frees: Vec<FreeSpan>,
}

impl Solution {
    /// Expands the spans into individual blocks, `None` for free space.
    fn blocks(&self) -> Vec<Option<usize>> {
        let len: usize = self
            .files
            .iter()
            .map(|file| file.start + file.len)
            .max()
            .unwrap_or_default();
        let mut blocks: Vec<Option<usize>> = vec![None; len];

        for file in &self.files {
            blocks[file.start..file.start + file.len].fill(Some(file.id));
        }

        blocks
    }

    fn fragmenting_checksum(&self) -> u64 {
        let mut blocks: Vec<Option<usize>> = self.blocks();
        let mut free_index: usize = 0_usize;
        let mut file_index: usize = blocks.len().saturating_sub(1_usize);

        while free_index < file_index {
            if blocks[free_index].is_some() {
                free_index += 1_usize;
            } else if blocks[file_index].is_none() {
                file_index -= 1_usize;
            } else {
                blocks.swap(free_index, file_index);
            }
        }

        blocks
            .into_iter()
            .enumerate()
            .map(|(index, id)| index as u64 * id.unwrap_or_default() as u64)
            .sum()
    }

    fn whole_file_checksum(&self) -> u64 {
        let mut frees: Vec<FreeSpan> = self.frees.clone();

        self.files
            .iter()
            .rev()
            .map(|&file| {
                let mut moved: FileSpan = file;

                if let Some(free) = frees
                    .iter_mut()
                    .take_while(|free| free.start < file.start)
                    .find(|free| free.len >= file.len)
                {
                    moved.start = free.start;
                    free.start += file.len;
                    free.len -= file.len;
                }

                moved.checksum()
            })
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many1(map(satisfy(|c| c.is_ascii_digit()), |c| {
                c as usize - b'0' as usize
            })),
            |lengths| {
                let mut files: Vec<FileSpan> = Vec::new();
                let mut frees: Vec<FreeSpan> = Vec::new();
                let mut start: usize = 0_usize;

                for (index, len) in lengths.into_iter().enumerate() {
                    if len != 0_usize {
                        if index % 2_usize == 0_usize {
                            files.push(FileSpan {
                                start,
                                len,
                                id: index / 2_usize,
                            });
                        } else {
                            frees.push(FreeSpan { start, len });
                        }
                    }

                    start += len;
                }

                Self { files, frees }
            },
        )(input)
    }
}

impl RunParts for Solution {
    fn p1_internal(&mut self, _args: &PartArgs) {
        dbg!(self.fragmenting_checksum());
    }

    fn p2_internal(&mut self, _args: &PartArgs) {
        dbg!(self.whole_file_checksum());
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

    const SOLUTION_STRS: &'static [&'static str] = &["2333133121414131402"];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            vec![Solution::try_from(SOLUTION_STRS[0_usize]).unwrap()]
        })[index]
    }

    #[test]
    fn test_parsed_spans() {
        let solution: &Solution = solution(0_usize);

        assert_eq!(solution.files.len(), 10_usize);
        assert_eq!(
            solution.files[0_usize],
            FileSpan {
                start: 0_usize,
                len: 2_usize,
                id: 0_usize
            }
        );
        assert_eq!(
            solution.frees[0_usize],
            FreeSpan {
                start: 2_usize,
                len: 3_usize
            }
        );
    }

    #[test]
    fn test_fragmenting_checksum() {
        for (index, fragmenting_checksum) in [1928_u64].into_iter().enumerate() {
            assert_eq!(solution(index).fragmenting_checksum(), fragmenting_checksum);
        }
    }

    #[test]
    fn test_whole_file_checksum() {
        for (index, whole_file_checksum) in [2858_u64].into_iter().enumerate() {
            assert_eq!(solution(index).whole_file_checksum(), whole_file_checksum);
        }
    }
}
