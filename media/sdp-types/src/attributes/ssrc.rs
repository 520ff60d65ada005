use std::fmt;

use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, number};
use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_while1},
    character::complete::char,
    combinator::{map, opt},
    error::context,
    sequence::{preceded, separated_pair, tuple},
};

use crate::not_whitespace;

/// Source specific attribute (`a=ssrc:<ssrc> <attribute>[:<value>]`)
///
/// [RFC5576](https://www.rfc-editor.org/rfc/rfc5576.html#section-4.1)
#[derive(Debug, Clone, PartialEq)]
pub struct Ssrc {
    pub ssrc: u32,
    pub attribute: SourceAttribute,
}

/// Values wrapped in curly braces (`cname:{...}`) are stored without them
#[derive(Debug, Clone, PartialEq)]
pub enum SourceAttribute {
    CName {
        cname: BytesStr,
    },
    /// Plan-B `msid:<stream> [<track>]`
    Msid {
        stream: BytesStr,
        track: Option<BytesStr>,
    },
    MsLabel {
        label: BytesStr,
    },
    Label {
        label: BytesStr,
    },
    Other {
        name: BytesStr,
        value: Option<BytesStr>,
    },
}

fn unbraced<'i>(src: &Bytes) -> impl FnMut(&'i str) -> IResult<&'i str, BytesStr> + '_ {
    move |i| {
        map(take_while1(not_whitespace), |v: &str| {
            BytesStr::from_parse(src, v.trim_start_matches('{').trim_end_matches('}'))
        })(i)
    }
}

impl Ssrc {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing ssrc-attribute",
            map(
                separated_pair(
                    number::<u32>,
                    take_while1(char::is_whitespace),
                    alt((
                        map(preceded(tag("cname:"), unbraced(src)), |cname| {
                            SourceAttribute::CName { cname }
                        }),
                        map(
                            preceded(
                                tag("msid:"),
                                tuple((
                                    unbraced(src),
                                    opt(preceded(take_while1(char::is_whitespace), unbraced(src))),
                                )),
                            ),
                            |(stream, track)| SourceAttribute::Msid { stream, track },
                        ),
                        map(preceded(tag("mslabel:"), unbraced(src)), |label| {
                            SourceAttribute::MsLabel { label }
                        }),
                        map(preceded(tag("label:"), unbraced(src)), |label| {
                            SourceAttribute::Label { label }
                        }),
                        map(
                            tuple((is_not(":"), opt(preceded(char(':'), take_while1(|_| true))))),
                            |(key, value): (&str, Option<&str>)| SourceAttribute::Other {
                                name: BytesStr::from_parse(src, key.trim()),
                                value: value.map(|value| BytesStr::from_parse(src, value.trim())),
                            },
                        ),
                    )),
                ),
                |(ssrc, attribute)| Self { ssrc, attribute },
            ),
        )(i)
    }
}

impl fmt::Display for Ssrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.ssrc)?;

        match &self.attribute {
            SourceAttribute::CName { cname } => write!(f, "cname:{cname}"),
            SourceAttribute::Msid {
                stream,
                track: Some(track),
            } => write!(f, "msid:{stream} {track}"),
            SourceAttribute::Msid {
                stream,
                track: None,
            } => write!(f, "msid:{stream}"),
            SourceAttribute::MsLabel { label } => write!(f, "mslabel:{label}"),
            SourceAttribute::Label { label } => write!(f, "label:{label}"),
            SourceAttribute::Other {
                name,
                value: Some(value),
            } => write!(f, "{name}:{value}"),
            SourceAttribute::Other { name, value: None } => write!(f, "{name}"),
        }
    }
}
