mod direction;
mod extmap;
mod fingerprint;
mod fmtp;
mod group;
mod msid;
mod rtcp_fb;
mod rtpmap;
mod sctp;
mod setup;
mod ssrc;

pub use direction::Direction;
pub use extmap::ExtMap;
pub use fingerprint::{Fingerprint, FingerprintAlgorithm};
pub use fmtp::Fmtp;
pub use group::{FidGroup, Group, SsrcGroup};
pub use msid::{MsId, MsidSemantic};
pub use rtcp_fb::{RtcpFeedback, RtcpFeedbackPt};
pub use rtpmap::RtpMap;
pub use sctp::Sctp;
pub use setup::Setup;
pub use ssrc::{SourceAttribute, Ssrc};
