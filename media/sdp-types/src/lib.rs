//! SDP offer parsing for WebRTC style sessions
//!
//! [`MediaSdp::parse`] turns a document into its session level fields and one [`MediaAttr`] per
//! `m=` section. Broken attribute lines never fail the whole document, they are logged and skipped.

mod attributes;
mod lines;
mod media_attr;
mod media_sdp;
mod origin;
mod parser;
mod projections;

pub use attributes::{
    Direction, ExtMap, FidGroup, Fingerprint, FingerprintAlgorithm, Fmtp, Group, MsId,
    MsidSemantic, RtcpFeedback, RtcpFeedbackPt, RtpMap, Sctp, Setup, SourceAttribute, Ssrc,
    SsrcGroup,
};
pub use lines::{LineSeparator, split_lines};
pub use media_attr::{MediaAttr, MediaKind};
pub use media_sdp::MediaSdp;
pub use origin::Origin;
pub use parser::{MalformedLine, ParseSdpError};
pub use projections::{SdpExtmap, SdpMediaAttrs, SdpPtype, SdpSsrc};

fn not_whitespace(c: char) -> bool {
    !c.is_ascii_whitespace()
}
