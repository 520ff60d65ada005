//! RTCP feedback capability attribute (`a=rtcp-fb:...`)

use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, number, ws};
use nom::branch::alt;
use nom::bytes::complete::take_while1;
use nom::character::complete::char;
use nom::combinator::map;
use nom::error::context;
use nom::sequence::tuple;
use std::fmt;

/// Feedback message a receiver is able to handle (`a=rtcp-fb`)
///
/// Media-Level attribute
///
/// [RFC4585](https://www.rfc-editor.org/rfc/rfc4585.html#section-4.2)
#[derive(Debug, Clone, PartialEq)]
pub struct RtcpFeedback {
    pub pt: RtcpFeedbackPt,

    /// Feedback type and optional parameter, e.g. `nack pli`
    pub kind: BytesStr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtcpFeedbackPt {
    /// `*`, applies to all payload types of the media section
    Any,
    Pt(u8),
}

impl RtcpFeedback {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing rtcp-fb",
            map(
                tuple((
                    alt((
                        map(char('*'), |_| RtcpFeedbackPt::Any),
                        map(number::<u8>, RtcpFeedbackPt::Pt),
                    )),
                    ws(take_while1(|_| true)),
                )),
                |(pt, kind)| Self {
                    pt,
                    kind: BytesStr::from_parse(src, kind.trim_end()),
                },
            ),
        )(i)
    }

    /// Returns `true` if this feedback applies to the given payload type
    pub fn applies_to(&self, pt: u8) -> bool {
        match self.pt {
            RtcpFeedbackPt::Any => true,
            RtcpFeedbackPt::Pt(own) => own == pt,
        }
    }
}

impl fmt::Display for RtcpFeedbackPt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RtcpFeedbackPt::Any => f.write_str("*"),
            RtcpFeedbackPt::Pt(pt) => write!(f, "{pt}"),
        }
    }
}

impl fmt::Display for RtcpFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pt, self.kind)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rtcp_fb() {
        let input = BytesStr::from_static("96 nack pli");

        let (rem, fb) = RtcpFeedback::parse(input.as_ref(), &input).unwrap();

        assert!(rem.is_empty());
        assert_eq!(fb.pt, RtcpFeedbackPt::Pt(96));
        assert_eq!(fb.kind, "nack pli");
        assert!(fb.applies_to(96));
        assert!(!fb.applies_to(97));
    }

    #[test]
    fn rtcp_fb_wildcard() {
        let input = BytesStr::from_static("* transport-cc");

        let (_, fb) = RtcpFeedback::parse(input.as_ref(), &input).unwrap();

        assert_eq!(fb.pt, RtcpFeedbackPt::Any);
        assert!(fb.applies_to(111));
        assert_eq!(fb.to_string(), "* transport-cc");
    }
}
