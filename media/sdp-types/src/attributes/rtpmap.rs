//! RtpMap attribute (`a=rtpmap:...`)

use crate::not_whitespace;
use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, number, ws};
use nom::branch::alt;
use nom::bytes::complete::take_while1;
use nom::character::complete::char;
use nom::combinator::{all_consuming, map, opt};
use nom::error::context;
use nom::sequence::{preceded, terminated, tuple};
use std::fmt;

/// Rtpmap attribute (`a=rtpmap`)
///
/// Map a RTP payload number specified in the media description to a encoding.
/// The encoding name is always stored lowercase.
///
/// Media-Level attribute
///
/// [RFC8866](https://www.rfc-editor.org/rfc/rfc8866.html#section-6.6)
#[derive(Debug, Clone, PartialEq)]
pub struct RtpMap {
    /// The number used in the media description which this maps a description to
    pub payload: u8,

    /// Lowercase name of the encoding, empty if the line had no `<encoding>/<rate>` part
    pub encoding: BytesStr,

    /// Clock rate of the encoding
    pub clock_rate: u32,

    /// Number of channels, audio only
    pub channels: Option<u32>,

    /// Anything after the payload number which is not a `<encoding>/<rate>` pair
    pub misc: Option<BytesStr>,
}

impl RtpMap {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing rtpmap",
            map(
                tuple((
                    // payload num
                    number::<u8>,
                    ws(alt((
                        map(
                            all_consuming(tuple((
                                // encoding
                                terminated(take_while1(|c| c != '/' && not_whitespace(c)), char('/')),
                                // clock rate
                                number::<u32>,
                                // channels
                                opt(preceded(char('/'), number::<u32>)),
                            ))),
                            |(encoding, clock_rate, channels)| (Some((encoding, clock_rate, channels)), None),
                        ),
                        map(take_while1(|_| true), |misc| (None, Some(misc))),
                    ))),
                )),
                |(payload, (codec, misc))| {
                    let (encoding, clock_rate, channels) = match codec {
                        Some((encoding, clock_rate, channels)) => {
                            (lowercase(src, encoding), clock_rate, channels)
                        }
                        None => (BytesStr::empty(), 0, None),
                    };

                    RtpMap {
                        payload,
                        encoding,
                        clock_rate,
                        channels,
                        misc: misc.map(|misc: &str| BytesStr::from_parse(src, misc)),
                    }
                },
            ),
        )(i)
    }
}

fn lowercase(src: &Bytes, encoding: &str) -> BytesStr {
    if encoding.chars().any(|c| c.is_ascii_uppercase()) {
        BytesStr::from(encoding.to_ascii_lowercase())
    } else {
        BytesStr::from_parse(src, encoding)
    }
}

impl fmt::Display for RtpMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(misc) = &self.misc {
            return write!(f, "{} {misc}", self.payload);
        }

        write!(f, "{} {}/{}", self.payload, self.encoding, self.clock_rate)?;

        if let Some(channels) = self.channels {
            write!(f, "/{channels}")?;
        }

        Ok(())
    }
}
