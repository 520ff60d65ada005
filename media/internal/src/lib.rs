//! Internal rtcore util functions shared between crates.

use nom::bytes::complete::take_while1;
use nom::character::complete::{digit1, space0};
use nom::combinator::map_res;
use nom::error::VerboseError;
use nom::sequence::preceded;
use std::str::FromStr;

pub type IResult<I, O> = nom::IResult<I, O, VerboseError<I>>;
pub use nom::Finish;

/// Detach a [`VerboseError`] from the input it was produced from
pub fn verbose_error_to_owned(i: VerboseError<&str>) -> VerboseError<String> {
    VerboseError {
        errors: i
            .errors
            .into_iter()
            .map(|(i, kind)| (i.into(), kind))
            .collect(),
    }
}

/// Skip leading spaces/tabs before running `parser`
pub fn ws<'i, O, F>(mut parser: F) -> impl FnMut(&'i str) -> IResult<&'i str, O>
where
    F: FnMut(&'i str) -> IResult<&'i str, O>,
{
    move |i| {
        let (i, _) = space0(i)?;
        parser(i)
    }
}

/// Decimal number which must fit into `T`
pub fn number<'i, T: FromStr>(i: &'i str) -> IResult<&'i str, T> {
    map_res(digit1, T::from_str)(i)
}

/// A run of non-whitespace characters
pub fn token(i: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_ascii_whitespace())(i)
}

/// A token preceded by at least one whitespace
pub fn next_token(i: &str) -> IResult<&str, &str> {
    preceded(take_while1(|c: char| c.is_ascii_whitespace()), token)(i)
}
