use {
    super::Parse,
    glam::IVec2,
    nom::{
        character::complete::line_ending,
        combinator::{map_res, opt},
        error::{Error as NomError, ErrorKind as NomErrorKind},
        multi::many1_count,
        sequence::tuple,
        Err, IResult,
    },
    static_assertions::const_assert,
    std::{
        fmt::{Debug, DebugList, Formatter, Result as FmtResult},
        mem::transmute,
        str::from_utf8_unchecked,
    },
    strum::{EnumCount, EnumIter},
};

/// A compass direction over grid positions, where `x` is the column and `y` is the row, with rows
/// growing downwards. Declaration order is the clockwise rotation cycle.
#[derive(Copy, Clone, Debug, Default, EnumCount, EnumIter, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Direction {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

const VECS: [IVec2; Direction::COUNT] = [
    Direction::Up.vec_internal(),
    Direction::Right.vec_internal(),
    Direction::Down.vec_internal(),
    Direction::Left.vec_internal(),
];

// This guarantees we can safely convert from `u8` to `Direction` by masking the smallest 2 bits,
// which is the same as masking by `MASK`
const_assert!(Direction::COUNT == 4_usize);

impl Direction {
    pub const COUNT_U8: u8 = Self::COUNT as u8;
    pub const MASK: u8 = Self::COUNT_U8 - 1_u8;
    pub const HALF_COUNT: u8 = Self::COUNT_U8 / 2_u8;
    pub const PREV_DELTA: u8 = Self::COUNT_U8 - 1_u8;

    #[inline]
    pub const fn vec(self) -> IVec2 {
        VECS[self as usize]
    }

    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        // SAFETY: See `const_assert` above
        unsafe { transmute(value & Self::MASK) }
    }

    /// Rotate clockwise: `Up -> Right -> Down -> Left -> Up`.
    #[inline]
    pub const fn next(self) -> Self {
        Self::from_u8(self as u8 + 1_u8)
    }

    /// Rotate counter-clockwise, the exact inverse of `next`.
    #[inline]
    pub const fn prev(self) -> Self {
        Self::from_u8(self as u8 + Self::PREV_DELTA)
    }

    /// Invert.
    #[inline]
    pub const fn rev(self) -> Self {
        Self::from_u8(self as u8 + Self::HALF_COUNT)
    }

    const fn vec_internal(self) -> IVec2 {
        match self {
            Self::Up => IVec2::NEG_Y,
            Self::Right => IVec2::X,
            Self::Down => IVec2::Y,
            Self::Left => IVec2::NEG_X,
        }
    }
}

impl From<Direction> for IVec2 {
    fn from(value: Direction) -> Self {
        value.vec()
    }
}

impl From<u8> for Direction {
    fn from(value: u8) -> Self {
        Self::from_u8(value)
    }
}

/// A position paired with a facing. New values are produced, never mutated in place.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Pose {
    pub pos: IVec2,
    pub dir: Direction,
}

impl Pose {
    pub const fn new(pos: IVec2, dir: Direction) -> Self {
        Self { pos, dir }
    }

    /// Advances the position by the facing's delta, leaving the facing unchanged.
    pub fn step(self) -> Self {
        Self {
            pos: self.pos + self.dir.vec(),
            ..self
        }
    }

    pub fn turn_left(self) -> Self {
        Self {
            dir: self.dir.prev(),
            ..self
        }
    }

    pub fn turn_right(self) -> Self {
        Self {
            dir: self.dir.next(),
            ..self
        }
    }

    /// The three structurally reachable successors. No bounds or cell checking happens here.
    pub fn neighbors(self) -> [Self; 3_usize] {
        [self.step(), self.turn_left(), self.turn_right()]
    }
}

pub struct Grid<T> {
    cells: Vec<T>,

    /// Should only contain unsigned values, but is signed for ease of use for iterating
    dimensions: IVec2,
}

impl<T> Grid<T> {
    pub fn try_from_cells_and_width(cells: Vec<T>, width: usize) -> Option<Self> {
        let cells_len: usize = cells.len();

        (width != 0_usize && cells_len % width == 0_usize).then(|| Self {
            cells,
            dimensions: IVec2::new(width as i32, (cells_len / width) as i32),
        })
    }

    pub fn try_from_cells_and_dimensions(cells: Vec<T>, dimensions: IVec2) -> Option<Self> {
        (dimensions.cmpge(IVec2::ZERO).all()
            && cells.len() == dimensions.x as usize * dimensions.y as usize)
            .then(|| Self { cells, dimensions })
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn dimensions(&self) -> IVec2 {
        self.dimensions
    }

    #[inline]
    pub fn area(&self) -> usize {
        (self.dimensions.x * self.dimensions.y) as usize
    }

    #[inline]
    pub fn contains(&self, pos: IVec2) -> bool {
        pos.cmpge(IVec2::ZERO).all() && pos.cmplt(self.dimensions).all()
    }

    #[inline]
    pub fn index_from_pos(&self, pos: IVec2) -> usize {
        pos.y as usize * self.dimensions.x as usize + pos.x as usize
    }

    pub fn try_index_from_pos(&self, pos: IVec2) -> Option<usize> {
        self.contains(pos).then(|| self.index_from_pos(pos))
    }

    pub fn pos_from_index(&self, index: usize) -> IVec2 {
        let width: usize = self.dimensions.x as usize;

        IVec2::new((index % width) as i32, (index / width) as i32)
    }

    pub fn get(&self, pos: IVec2) -> Option<&T> {
        self.try_index_from_pos(pos)
            .map(|index: usize| &self.cells[index])
    }

    pub fn get_mut(&mut self, pos: IVec2) -> Option<&mut T> {
        self.try_index_from_pos(pos)
            .map(|index: usize| &mut self.cells[index])
    }

    /// Iterates all positions in row-major order.
    pub fn iter_positions(&self) -> impl Iterator<Item = IVec2> {
        let dimensions: IVec2 = self.dimensions;

        (0_i32..dimensions.y)
            .flat_map(move |y| (0_i32..dimensions.x).map(move |x| IVec2::new(x, y)))
    }

    pub fn iter_filtered_positions<'a, P: Fn(&T) -> bool + 'a>(
        &'a self,
        predicate: P,
    ) -> impl Iterator<Item = IVec2> + 'a {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(index, cell)| predicate(cell).then(|| self.pos_from_index(index)))
    }

    pub fn iter_positions_with_cell<'a>(&'a self, target: &'a T) -> impl Iterator<Item = IVec2> + 'a
    where
        T: PartialEq,
    {
        self.iter_filtered_positions(|cell| *cell == *target)
    }

    /// The position of the sole cell equal to `target`, or `None` if there are zero or multiple.
    pub fn try_find_single_position_with_cell(&self, target: &T) -> Option<IVec2>
    where
        T: PartialEq,
    {
        let mut single_pos: Option<IVec2> = None;

        for pos in self.iter_positions_with_cell(target) {
            if single_pos.replace(pos).is_some() {
                return None;
            }
        }

        single_pos
    }
}

impl<T: Clone> Clone for Grid<T> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            dimensions: self.dimensions,
        }
    }
}

impl<T: Debug> Debug for Grid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Grid")?;

        let mut row_list: DebugList = f.debug_list();

        for y in 0_i32..self.dimensions.y {
            let start: usize = (y * self.dimensions.x) as usize;

            row_list.entry(&&self.cells[start..(start + self.dimensions.x as usize)]);
        }

        row_list.finish()
    }
}

impl<T: PartialEq> PartialEq for Grid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions == other.dimensions && self.cells == other.cells
    }
}

impl<T: Parse> Parse for Grid<T> {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        let mut cells: Vec<T> = Vec::new();
        let mut width: Option<usize> = None;

        let (input, _) = many1_count(map_res(
            tuple((T::parse, opt(line_ending))),
            |(cell, opt_line_ending)| -> Result<(), ()> {
                cells.push(cell);

                if opt_line_ending.is_some() {
                    match width {
                        Some(width) => {
                            if cells.len() % width != 0_usize {
                                Err(())?;
                            }
                        }
                        None => {
                            width = Some(cells.len());
                        }
                    }
                }

                Ok(())
            },
        ))(input)?;

        let width: usize = width.unwrap_or(cells.len());

        if cells.len() % width != 0_usize {
            Err(Err::Failure(NomError::new(input, NomErrorKind::ManyMN)))
        } else {
            Ok((input, Grid::try_from_cells_and_width(cells, width).unwrap()))
        }
    }
}

/// A marker trait to indicate that a type is a single byte, and any possible value is a valid
/// ASCII byte.
///
/// # Safety
///
/// Only implement this on a type that meets the following criteria:
///
/// * `std::mem::size_of::<Self>() == 1_usize`
/// * every possible value is a printable ASCII byte
pub unsafe trait AsciiCell {}

impl<T: AsciiCell> From<&Grid<T>> for String {
    fn from(grid: &Grid<T>) -> Self {
        let width: usize = grid.dimensions.x as usize;
        let height: usize = grid.dimensions.y as usize;

        // SAFETY: Guaranteed by `T` implementing `AsciiCell`
        let bytes: &[u8] = unsafe { transmute(grid.cells()) };

        let mut string: String = String::with_capacity((width + 1_usize) * height);

        for row_bytes in bytes.chunks(width) {
            // SAFETY: Guaranteed by `T` implementing `AsciiCell`
            string.push_str(unsafe { from_utf8_unchecked(row_bytes) });
            string.push('\n');
        }

        string
    }
}

/// Defines a cell enum whose variants each correspond to a single ASCII byte, with `Parse`,
/// `TryFrom<u8>`, `TryFrom<char>`, and `AsciiCell` implementations.
#[macro_export]
macro_rules! ascii_cell {
    {
        $( #[$attr:meta] )*
        $vis:vis enum $cell:ident {
            $(
                $( #[$variant_attr:meta] )*
                $variant:ident = $byte:expr
            ),* $(,)?
        }
    } => {
        $( #[$attr] )*
        #[repr(u8)]
        $vis enum $cell {
            $(
                $( #[$variant_attr] )*
                $variant = $byte,
            )*
        }

        impl $cell {
            const CHARS: &'static str =
                // SAFETY: Trivial
                unsafe { ::std::str::from_utf8_unchecked(&[ $( $byte, )* ]) };
        }

        // SAFETY: All variants are printable ASCII bytes
        unsafe impl AsciiCell for $cell {}

        impl Parse for $cell {
            fn parse<'i>(input: &'i str) -> ::nom::IResult<&'i str, Self> {
                ::nom::combinator::map(
                    ::nom::character::complete::one_of($cell::CHARS),
                    |value: char| $cell::try_from(value).unwrap(),
                )(input)
            }
        }

        impl TryFrom<u8> for $cell {
            type Error = ();

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $(
                        $byte => Ok(Self::$variant),
                    )*
                    _ => Err(()),
                }
            }
        }

        impl TryFrom<char> for $cell {
            type Error = ();

            fn try_from(value: char) -> Result<Self, Self::Error> {
                (value as u8).try_into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, strum::IntoEnumIterator};

    #[test]
    fn test_direction_rotation() {
        for dir in Direction::iter() {
            assert_eq!(dir.next().prev(), dir);
            assert_eq!(dir.prev().next(), dir);
            assert_eq!(dir.rev().rev(), dir);
            assert_eq!(dir.next().next(), dir.rev());
        }

        assert_eq!(Direction::Up.next(), Direction::Right);
        assert_eq!(Direction::Right.next(), Direction::Down);
        assert_eq!(Direction::Down.next(), Direction::Left);
        assert_eq!(Direction::Left.next(), Direction::Up);
    }

    #[test]
    fn test_direction_vecs() {
        assert_eq!(
            Direction::iter().map(Direction::vec).sum::<IVec2>(),
            IVec2::ZERO
        );
        assert_eq!(Direction::Up.vec(), IVec2::NEG_Y);
        assert_eq!(Direction::Right.vec(), IVec2::X);
    }

    #[test]
    fn test_pose_neighbors() {
        let pose: Pose = Pose::new(IVec2::new(2_i32, 3_i32), Direction::Right);

        assert_eq!(
            pose.neighbors(),
            [
                Pose::new(IVec2::new(3_i32, 3_i32), Direction::Right),
                Pose::new(IVec2::new(2_i32, 3_i32), Direction::Up),
                Pose::new(IVec2::new(2_i32, 3_i32), Direction::Down),
            ]
        );
    }

    #[test]
    fn test_iter_positions() {
        let grid: Grid<()> =
            Grid::try_from_cells_and_dimensions(vec![(); 6_usize], IVec2::new(3_i32, 2_i32))
                .unwrap();

        assert_eq!(
            grid.iter_positions()
                .map(|pos| grid.index_from_pos(pos))
                .collect::<Vec<usize>>(),
            (0_usize..6_usize).collect::<Vec<usize>>()
        );
    }
}
