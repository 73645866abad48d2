pub use {grid::*, maze::*};

use {
    clap::Parser,
    memmap::Mmap,
    nom::{
        bytes::complete::tag,
        character::complete::digit1,
        combinator::{map, map_res, opt, rest},
        sequence::tuple,
        IResult,
    },
    num::Integer,
    std::{
        any::type_name,
        fmt::Debug,
        fs::File,
        io::{Error as IoError, ErrorKind, Result as IoResult},
        str::{from_utf8, FromStr, Utf8Error},
    },
};

mod grid;
mod maze;

#[derive(Debug, Parser)]
pub struct PartArgs {
    /// Print extra information, if there is any
    #[arg(short, long, default_value_t)]
    pub verbose: bool,
}

/// Arguments for program execution
#[derive(Debug, Parser)]
pub struct Args {
    /// Input file path
    #[arg(short, long, default_value_t)]
    input_file_path: String,

    /// The day to run
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// The part to run, both if omitted
    #[arg(short, long, default_value_t, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub part: u8,

    #[command(flatten)]
    pub part_args: PartArgs,
}

impl Args {
    fn try_to_parsed<P>(&self) -> Option<P>
    where
        P: for<'a> TryFrom<&'a str>,
        for<'a> <P as TryFrom<&'a str>>::Error: Debug,
    {
        let default_file_path: String;
        let file_path: &str = if self.input_file_path.is_empty() {
            default_file_path = format!("input/d{}.txt", self.day);

            &default_file_path
        } else {
            &self.input_file_path
        };

        // SAFETY: This isn't truly safe, we're just hoping nobody touches our file before we're
        // done parsing it
        unsafe {
            open_utf8_file(file_path, |s| {
                s.try_into().map_or_else(
                    |error| {
                        eprintln!(
                            "Failed to convert file \"{file_path}\" to type {}:\n{error:#?}",
                            type_name::<P>()
                        );

                        None
                    },
                    Some,
                )
            })
        }
        .unwrap_or_else(|error| {
            eprintln!("Failed to open UTF-8 file \"{file_path}\":\n{error}");

            None
        })
    }
}

pub trait RunParts
where
    Self: Sized + for<'a> TryFrom<&'a str>,
    for<'a> <Self as TryFrom<&'a str>>::Error: Debug,
{
    fn p2_internal(&mut self, args: &PartArgs);
    fn p1_internal(&mut self, args: &PartArgs);

    fn p1(args: &Args) {
        if let Some(mut parsed) = args.try_to_parsed::<Self>() {
            parsed.p1_internal(&args.part_args);
        }
    }

    fn p2(args: &Args) {
        if let Some(mut parsed) = args.try_to_parsed::<Self>() {
            parsed.p2_internal(&args.part_args);
        }
    }

    fn both(args: &Args) {
        if let Some(mut parsed) = args.try_to_parsed::<Self>() {
            parsed.p1_internal(&args.part_args);
            parsed.p2_internal(&args.part_args);
        }
    }
}

#[derive(Clone)]
pub struct Day {
    pub p1: fn(&Args),
    pub p2: fn(&Args),
    pub both: fn(&Args),
}

impl Day {
    fn run(&self, args: &Args) {
        match args.part {
            0 => (self.both)(args),
            1 => (self.p1)(args),
            2 => (self.p2)(args),
            part => unreachable!(
                "A valid Args will have a part value in the range 0..=2, but {part} was \
                encountered.\n\
                Args:\n\
                {args:#?}"
            ),
        }
    }
}

pub struct DayParams<'a> {
    pub string: &'a str,
    pub option: Option<u8>,
    pub day: Day,
}

fn parse_tagged_int<'i, I: FromStr>(t: &str, input: &'i str) -> IResult<&'i str, I> {
    map(tuple((tag(t), map_res(rest, I::from_str))), |(_, i)| i)(input)
}

#[derive(Default)]
pub struct Days {
    days: Vec<Option<Day>>,
    min: u8,
}

impl Days {
    pub fn run(&self, args: &Args) {
        match args
            .day
            .checked_sub(self.min)
            .and_then(|day| self.days.get(day as usize))
        {
            None => panic!(
                "Queried day {} is out of the range of valid days, {}..{}.\n\
                Args:\n\
                {args:#?}",
                args.day,
                self.min,
                self.min as usize + self.days.len()
            ),
            Some(None) => panic!(
                "Queried day {} has no registered parts.\n\
                Args:\n\
                {args:#?}",
                args.day
            ),
            Some(Some(day)) => day.run(args),
        }
    }

    pub fn try_from_day_params(mut day_params: Vec<DayParams>) -> Option<Self> {
        let (min, max): (u8, u8) = day_params
            .iter_mut()
            .filter_map(|DayParams { string, option, .. }| {
                parse_tagged_int("d", string).map_or_else(
                    |error| {
                        eprintln!(
                            "Invalid day string \"{}\"\n\
                            Error:\n\
                            {error}",
                            string
                        );

                        None
                    },
                    |(_, day)| {
                        *option = Some(day);

                        Some(day)
                    },
                )
            })
            .fold((u8::MAX, u8::MIN), |(min, max), day| {
                (min.min(day), max.max(day))
            });

        if min == u8::MAX {
            None
        } else {
            let size: usize = (max + 1 - min) as usize;
            let mut days: Vec<Option<Day>> = Vec::with_capacity(size);

            days.resize_with(size, || None);

            for DayParams { option, day, .. } in day_params.into_iter() {
                days[(option.unwrap() - min) as usize] = Some(day);
            }

            Some(Days { days, min })
        }
    }
}

#[macro_export]
macro_rules! days {
    [ $( $day:ident ),* $(,)? ] => {
        $(
            pub mod $day;
        )*

        pub fn days() -> &'static Days {
            static ONCE_LOCK: std::sync::OnceLock<Days> = std::sync::OnceLock::new();

            ONCE_LOCK.get_or_init(|| Days::try_from_day_params(vec![ $(
                DayParams {
                    string: stringify!($day),
                    option: None,
                    day: Day {
                        p1: $day::Solution::p1,
                        p2: $day::Solution::p2,
                        both: $day::Solution::both,
                    }
                },
            )* ]).unwrap_or_default())
        }
    };
}

/// Opens a memory-mapped UTF-8 file at a specified path, and passes in a `&str` over the file to a
/// provided callback function
///
/// # Errors
///
/// This function returns a `Result::Err`-wrapped `std::io::Error` if an error has occurred.
/// Possible causes are:
///
/// * `std::fs::File::open` was unable to open a read-only file at `file_path`
/// * `memmap::Mmap::map` fails to create an `Mmap` instance for the opened file
/// * `std::str::from_utf8` determines the file is not in valid UTF-8 format
///
/// `f` is only executed *iff* an error is not encountered.
///
/// # Safety
///
/// This function uses `Mmap::map`, which is an unsafe function. There is no guarantee that an
/// external process won't modify the file after it is opened as read-only, and it is UB if the
/// opened file is modified while this function is referring to it as an immutable string slice.
pub unsafe fn open_utf8_file<T, F: FnOnce(&str) -> T>(file_path: &str, f: F) -> IoResult<T> {
    let file: File = File::open(file_path)?;

    // SAFETY: This operation is unsafe
    let mmap: Mmap = Mmap::map(&file)?;
    let bytes: &[u8] = &mmap;
    let utf8_str: &str = from_utf8(bytes).map_err(|utf8_error: Utf8Error| -> IoError {
        IoError::new(ErrorKind::InvalidData, utf8_error)
    })?;

    Ok(f(utf8_str))
}

pub fn parse_integer<'i, I: FromStr + Integer>(input: &'i str) -> IResult<&'i str, I> {
    map(
        tuple((
            map(opt(tag("-")), |minus| {
                if minus.is_some() {
                    I::zero() - I::one()
                } else {
                    I::one()
                }
            }),
            map_res(digit1, I::from_str),
        )),
        |(sign, bound)| sign * bound,
    )(input)
}

pub trait Parse: Sized {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self>;
}
