//! # RTP wire codec
//!
//! Bit-exact marshaling of RTP headers & packets ([RFC3550](https://www.rfc-editor.org/rfc/rfc3550)),
//! wraparound-aware sequence number and timestamp arithmetic, NTP fixed point time conversions and a per-session
//! SSRC registry.
//!
//! Everything except [`SsrcRegistry`] is a pure transformation over caller owned buffers.

mod extensions;
mod header;
mod ntp;
mod packet;
pub mod raw;
mod sequence;
mod ssrc;

pub use extensions::{ONE_BYTE_PROFILE, RtpExtensionsWriter, TWO_BYTE_PROFILE, parse_extensions};
pub use header::RtpHeader;
pub use ntp::{NTP_UNIX_EPOCH_OFFSET, NtpTime, compact_interval_to_millis, current_ntp_millis};
pub use packet::{RtpAudioLevelExt, RtpExtensionIds, RtpExtensions, RtpPacket};
pub use sequence::{ExtendedRtpTimestamp, ExtendedSequenceNumber, RtpTimestamp, SequenceNumber};
pub use ssrc::{MAX_SSRC, MIN_SSRC, SsrcRegistry};

/// Length of the fixed RTP header
pub const RTP_HEADER_LEN: usize = 12;

/// The only RTP version written by this crate
pub const RTP_VERSION: u8 = 2;

/// Maximum number of CSRC entries the 4 bit CC field can describe
pub const MAX_CSRC: usize = 15;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ssrc(pub u32);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RtpError {
    #[error("buffer too short, needed {needed} bytes but only {available} are available")]
    ShortBuffer { needed: usize, available: usize },
    #[error("extension payload length {0} is not a multiple of 4 or exceeds the 16 bit word count")]
    InvalidExtensionLength(usize),
    #[error("{0} CSRC entries do not fit into a RTP header")]
    TooManyCsrc(usize),
    #[error("extension element id={id} with {len} bytes cannot be encoded")]
    InvalidExtensionElement { id: u8, len: usize },
}

pub(crate) fn ensure_len(buf: &[u8], needed: usize) -> Result<(), RtpError> {
    if buf.len() < needed {
        Err(RtpError::ShortBuffer {
            needed,
            available: buf.len(),
        })
    } else {
        Ok(())
    }
}
