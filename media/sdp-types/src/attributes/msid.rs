use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, next_token, token};
use nom::combinator::{map, opt};
use nom::error::context;
use nom::multi::many0;
use nom::sequence::tuple;
use std::fmt;

/// Media stream identification (`a=msid:<stream> [<track>]`)
///
/// Curly braces around the ids (`a=msid:{id1} {id2}`) are removed.
///
/// [RFC8830](https://www.rfc-editor.org/rfc/rfc8830.html#section-2)
#[derive(Debug, Clone, PartialEq)]
pub struct MsId {
    pub stream: BytesStr,
    pub track: Option<BytesStr>,
}

fn unbraced(src: &Bytes, id: &str) -> BytesStr {
    BytesStr::from_parse(src, id.trim_start_matches('{').trim_end_matches('}'))
}

impl MsId {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing msid",
            map(tuple((token, opt(next_token))), |(stream, track)| MsId {
                stream: unbraced(src, stream),
                track: track.map(|track| unbraced(src, track)),
            }),
        )(i)
    }
}

impl fmt::Display for MsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stream)?;

        if let Some(track) = &self.track {
            write!(f, " {track}")?;
        }

        Ok(())
    }
}

/// Session wide media stream semantics (`a=msid-semantic:WMS [<id>...]`)
#[derive(Debug, Clone, PartialEq)]
pub struct MsidSemantic {
    pub semantic: BytesStr,
    pub ids: Vec<BytesStr>,
}

impl MsidSemantic {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing msid-semantic",
            map(tuple((token, many0(next_token))), |(semantic, ids)| {
                MsidSemantic {
                    semantic: BytesStr::from_parse(src, semantic),
                    ids: ids
                        .into_iter()
                        .map(|id| BytesStr::from_parse(src, id))
                        .collect(),
                }
            }),
        )(i)
    }
}

impl fmt::Display for MsidSemantic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.semantic)?;

        for id in &self.ids {
            write!(f, " {id}")?;
        }

        Ok(())
    }
}
