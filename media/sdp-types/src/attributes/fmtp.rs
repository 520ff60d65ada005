//! Format parameters attribute (`a=fmtp:...`)

use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, number, ws};
use nom::bytes::complete::take_while1;
use nom::combinator::map;
use nom::error::context;
use nom::sequence::tuple;
use std::fmt;

/// Specify additional parameters for a format specified by a `rtpmap`
///
/// Parameters of the form `key=<number>` are decoded into [`Fmtp::params`], every other
/// `;`-separated entry (e.g. `0-15` of telephone-event, `profile-level-id=42e01f`) is kept verbatim in [`Fmtp::misc`].
///
/// Media-Level attribute
///
/// [RFC8866](https://www.rfc-editor.org/rfc/rfc8866.html#section-6.15)
#[derive(Debug, Clone, PartialEq)]
pub struct Fmtp {
    /// The format the parameter is for
    pub format: u8,

    /// Numeric `key=value` parameters in order of appearance
    pub params: Vec<(BytesStr, u32)>,

    /// Entries which are not numeric `key=value` pairs
    pub misc: Vec<BytesStr>,

    /// The complete parameter string
    pub raw: BytesStr,
}

impl Fmtp {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing fmtp",
            map(
                tuple((
                    // format
                    number::<u8>,
                    // remaining into params
                    ws(take_while1(|_| true)),
                )),
                |(format, raw): (u8, &str)| {
                    let mut params = vec![];
                    let mut misc = vec![];

                    for entry in raw.split(';').map(str::trim).filter(|e| !e.is_empty()) {
                        let numeric = entry
                            .split_once('=')
                            .and_then(|(k, v)| Some((k.trim(), v.trim().parse::<u32>().ok()?)));

                        match numeric {
                            Some((key, value)) => params.push((BytesStr::from_parse(src, key), value)),
                            None => misc.push(BytesStr::from_parse(src, entry)),
                        }
                    }

                    Fmtp {
                        format,
                        params,
                        misc,
                        raw: BytesStr::from_parse(src, raw),
                    }
                },
            ),
        )(i)
    }

    /// Value of a numeric parameter, the last occurrence wins
    pub fn param(&self, key: &str) -> Option<u32> {
        self.params
            .iter()
            .rev()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, value)| *value)
    }

    /// Associated payload type (`apt=`) of a RTX format
    pub fn apt(&self) -> Option<u8> {
        self.param("apt").and_then(|apt| u8::try_from(apt).ok())
    }
}

impl fmt::Display for Fmtp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.format, self.raw)
    }
}
