//! Media grouping attributes (`a=group:...`, `a=ssrc-group:...`)

use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, next_token, number, token};
use nom::bytes::complete::take_while1;
use nom::combinator::map;
use nom::error::context;
use nom::multi::many0;
use nom::sequence::{preceded, tuple};
use std::fmt;

/// Grouping of media sections by their `mid` (`a=group:BUNDLE 0 1`)
///
/// Session-Level attribute
///
/// [RFC5888](https://www.rfc-editor.org/rfc/rfc5888.html#section-5)
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub semantics: BytesStr,
    pub mids: Vec<BytesStr>,
}

impl Group {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing group",
            map(tuple((token, many0(next_token))), |(semantics, mids)| Group {
                semantics: BytesStr::from_parse(src, semantics),
                mids: mids
                    .into_iter()
                    .map(|mid| BytesStr::from_parse(src, mid))
                    .collect(),
            }),
        )(i)
    }

    /// Semantics are matched case insensitive
    pub fn is_bundle(&self) -> bool {
        self.semantics.eq_ignore_ascii_case("bundle")
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.semantics)?;

        for mid in &self.mids {
            write!(f, " {mid}")?;
        }

        Ok(())
    }
}

/// Grouping of SSRCs (`a=ssrc-group:<semantics> <ssrc>...`)
///
/// [RFC5576](https://www.rfc-editor.org/rfc/rfc5576.html#section-4.2)
#[derive(Debug, Clone, PartialEq)]
pub struct SsrcGroup {
    pub semantics: BytesStr,
    pub ssrcs: Vec<u32>,
}

/// Main media SSRC and its retransmission SSRC (`a=ssrc-group:FID <main> <rtx>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FidGroup {
    pub main: u32,
    pub rtx: u32,
}

impl SsrcGroup {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing ssrc-group",
            map(
                tuple((
                    token,
                    many0(preceded(
                        take_while1(|c: char| c.is_ascii_whitespace()),
                        number::<u32>,
                    )),
                )),
                |(semantics, ssrcs)| SsrcGroup {
                    semantics: BytesStr::from_parse(src, semantics),
                    ssrcs,
                },
            ),
        )(i)
    }

    /// Returns the FID pair if this is a `FID` group of exactly two SSRCs
    pub fn fid(&self) -> Option<FidGroup> {
        if self.semantics != "FID" {
            return None;
        }

        match self.ssrcs[..] {
            [main, rtx] => Some(FidGroup { main, rtx }),
            _ => None,
        }
    }
}

impl fmt::Display for SsrcGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.semantics)?;

        for ssrc in &self.ssrcs {
            write!(f, " {ssrc}")?;
        }

        Ok(())
    }
}

impl fmt::Display for FidGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FID {} {}", self.main, self.rtx)
    }
}
