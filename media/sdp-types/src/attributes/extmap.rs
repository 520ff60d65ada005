//! RTP header extension mapping attribute (`a=extmap:...`)

use crate::{Direction, not_whitespace};
use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, number};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    combinator::{map, opt},
    error::context,
    multi::many0,
    sequence::{preceded, tuple},
};
use std::fmt;

/// Header extension id to URI mapping
///
/// Media-Level attribute
///
/// [RFC8285](https://www.rfc-editor.org/rfc/rfc8285.html#section-8)
#[derive(Debug, Clone, PartialEq)]
pub struct ExtMap {
    pub id: u8,

    /// Direction suffix of the id, `None` when absent
    pub direction: Option<Direction>,
    pub uri: BytesStr,
    pub attributes: Vec<BytesStr>,
}

impl ExtMap {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing extmap",
            map(
                tuple((
                    // id
                    number::<u8>,
                    // direction
                    opt(alt((
                        map(tag("/sendrecv"), |_| Direction::SendRecv),
                        map(tag("/recvonly"), |_| Direction::RecvOnly),
                        map(tag("/sendonly"), |_| Direction::SendOnly),
                        map(tag("/inactive"), |_| Direction::Inactive),
                    ))),
                    // uri
                    preceded(take_while1(char::is_whitespace), take_while1(not_whitespace)),
                    // extension attributes
                    many0(preceded(
                        take_while1(char::is_whitespace),
                        map(take_while1(not_whitespace), |attr| {
                            BytesStr::from_parse(src, attr)
                        }),
                    )),
                )),
                |(id, direction, uri, attributes)| Self {
                    id,
                    direction,
                    uri: BytesStr::from_parse(src, uri),
                    attributes,
                },
            ),
        )(i)
    }
}

impl fmt::Display for ExtMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id)?;

        if let Some(direction) = self.direction {
            write!(f, "/{direction}")?;
        }

        write!(f, " {}", self.uri)?;

        for attribute in &self.attributes {
            write!(f, " {attribute}")?;
        }

        Ok(())
    }
}
