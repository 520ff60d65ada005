use crate::{
    Direction, ExtMap, FidGroup, Fingerprint, Fmtp, MsId, RtcpFeedback, RtpMap, Sctp, Setup, Ssrc,
};
use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, next_token, token};
use nom::combinator::{map, opt};
use nom::error::context;
use nom::multi::many0;
use nom::sequence::tuple;
use std::collections::BTreeMap;
use std::fmt;

/// Media type of a `m=` line
#[derive(Debug, Clone, PartialEq)]
pub enum MediaKind {
    Audio,
    Video,
    Application,
    Other(BytesStr),
}

impl MediaKind {
    fn from_token(src: &Bytes, kind: &str) -> Self {
        match kind {
            "audio" => MediaKind::Audio,
            "video" => MediaKind::Video,
            "application" => MediaKind::Application,
            _ => MediaKind::Other(BytesStr::from_parse(src, kind)),
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Audio => f.write_str("audio"),
            MediaKind::Video => f.write_str("video"),
            MediaKind::Application => f.write_str("application"),
            MediaKind::Other(other) => f.write_str(other),
        }
    }
}

/// Everything known about one `m=` section of a SDP document
#[derive(Debug, Clone)]
pub struct MediaAttr {
    pub kind: MediaKind,
    pub port: u16,

    /// Transport protocol, e.g. `UDP/TLS/RTP/SAVPF`, empty if the `m=` line was incomplete
    pub proto: BytesStr,

    /// Payload types or the SCTP format of the `m=` line
    pub formats: Vec<BytesStr>,

    pub ice_ufrag: Option<BytesStr>,
    pub ice_pwd: Option<BytesStr>,
    pub ice_options: Option<BytesStr>,
    pub fingerprint: Option<Fingerprint>,
    pub setup: Option<Setup>,

    /// `None` if the section did not carry a direction attribute
    pub direction: Option<Direction>,
    pub mid: Option<BytesStr>,
    pub msids: Vec<MsId>,

    pub rtcp_mux: bool,
    pub rtcp_rsize: bool,

    /// In order of appearance
    pub rtpmaps: Vec<RtpMap>,

    /// Keyed by payload type, a later fmtp for the same payload type replaces the earlier one
    pub fmtps: BTreeMap<u8, Fmtp>,
    pub rtcp_fbs: Vec<RtcpFeedback>,
    pub extmaps: Vec<ExtMap>,
    pub fid_groups: Vec<FidGroup>,
    pub ssrcs: Vec<Ssrc>,

    pub sctp: Option<Sctp>,
    pub max_message_size: Option<u32>,
    pub maxptime: Option<u32>,

    /// Complete `a=candidate:...` lines
    pub candidates: Vec<BytesStr>,
    pub end_of_candidates: bool,
}

impl MediaAttr {
    pub fn new(kind: MediaKind, port: u16, proto: BytesStr, formats: Vec<BytesStr>) -> Self {
        Self {
            kind,
            port,
            proto,
            formats,
            ice_ufrag: None,
            ice_pwd: None,
            ice_options: None,
            fingerprint: None,
            setup: None,
            direction: None,
            mid: None,
            msids: vec![],
            rtcp_mux: false,
            rtcp_rsize: false,
            rtpmaps: vec![],
            fmtps: BTreeMap::new(),
            rtcp_fbs: vec![],
            extmaps: vec![],
            fid_groups: vec![],
            ssrcs: vec![],
            sctp: None,
            max_message_size: None,
            maxptime: None,
            candidates: vec![],
            end_of_candidates: false,
        }
    }

    /// Parse the value of a `m=` line (`<media> <port>[/<count>] <proto> <fmt>...`)
    ///
    /// Only the media type is required, incomplete lines produce an empty protocol.
    pub fn parse_media_line<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing media line",
            map(
                tuple((token, opt(next_token), opt(next_token), many0(next_token))),
                |(kind, port, proto, formats)| {
                    let port = port
                        .and_then(|port| port.split('/').next())
                        .and_then(|port| port.parse().ok())
                        .unwrap_or_default();

                    MediaAttr::new(
                        MediaKind::from_token(src, kind),
                        port,
                        proto
                            .map(|proto| BytesStr::from_parse(src, proto))
                            .unwrap_or_else(BytesStr::empty),
                        formats
                            .into_iter()
                            .map(|format| BytesStr::from_parse(src, format))
                            .collect(),
                    )
                },
            ),
        )(i)
    }

    pub fn is_mid(&self, mid: &str) -> bool {
        self.mid.as_ref().is_some_and(|own| own.as_str() == mid)
    }

    pub fn rtpmap(&self, pt: u8) -> Option<&RtpMap> {
        self.rtpmaps.iter().find(|rtpmap| rtpmap.payload == pt)
    }

    pub fn fmtp(&self, pt: u8) -> Option<&Fmtp> {
        self.fmtps.get(&pt)
    }

    /// Feedback entries which apply to the given payload type
    pub fn rtcp_fbs_for(&self, pt: u8) -> impl Iterator<Item = &RtcpFeedback> + '_ {
        self.rtcp_fbs.iter().filter(move |fb| fb.applies_to(pt))
    }

    /// Distinct SSRCs of all `a=ssrc` lines in order of appearance
    pub fn ssrc_values(&self) -> Vec<u32> {
        let mut values: Vec<u32> = vec![];

        for ssrc in &self.ssrcs {
            if !values.contains(&ssrc.ssrc) {
                values.push(ssrc.ssrc);
            }
        }

        values
    }
}
