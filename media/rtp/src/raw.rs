//! Accessors operating directly on the bytes of a RTP packet, without decoding the full header
//!
//! Every function checks that the buffer holds at least the fixed 12 byte header and fails with
//! [`RtpError::ShortBuffer`] otherwise. Setters modify the caller's buffer in place.

use crate::{
    MAX_CSRC, RTP_HEADER_LEN, RTP_VERSION, RtpError, RtpTimestamp, SequenceNumber, Ssrc,
    ensure_len,
};

pub(crate) const SEQUENCE_NUMBER_OFFSET: usize = 2;
pub(crate) const TIMESTAMP_OFFSET: usize = 4;
pub(crate) const SSRC_OFFSET: usize = 8;

pub(crate) const PADDING_BIT: u8 = 0x20;
pub(crate) const EXTENSION_BIT: u8 = 0x10;
pub(crate) const CSRC_COUNT_MASK: u8 = 0x0F;
pub(crate) const MARKER_BIT: u8 = 0x80;
pub(crate) const PAYLOAD_TYPE_MASK: u8 = 0x7F;

pub fn payload_type(buf: &[u8]) -> Result<u8, RtpError> {
    ensure_len(buf, RTP_HEADER_LEN)?;
    Ok(buf[1] & PAYLOAD_TYPE_MASK)
}

pub fn marker(buf: &[u8]) -> Result<bool, RtpError> {
    ensure_len(buf, RTP_HEADER_LEN)?;
    Ok(buf[1] & MARKER_BIT != 0)
}

pub fn sequence_number(buf: &[u8]) -> Result<SequenceNumber, RtpError> {
    ensure_len(buf, RTP_HEADER_LEN)?;
    Ok(SequenceNumber(read_u16(buf, SEQUENCE_NUMBER_OFFSET)))
}

pub fn timestamp(buf: &[u8]) -> Result<RtpTimestamp, RtpError> {
    ensure_len(buf, RTP_HEADER_LEN)?;
    Ok(RtpTimestamp(read_u32(buf, TIMESTAMP_OFFSET)))
}

pub fn ssrc(buf: &[u8]) -> Result<Ssrc, RtpError> {
    ensure_len(buf, RTP_HEADER_LEN)?;
    Ok(Ssrc(read_u32(buf, SSRC_OFFSET)))
}

/// Overwrite the payload type, keeping the marker bit
pub fn set_payload_type(buf: &mut [u8], pt: u8) -> Result<(), RtpError> {
    ensure_len(buf, RTP_HEADER_LEN)?;
    buf[1] = (buf[1] & MARKER_BIT) | (pt & PAYLOAD_TYPE_MASK);
    Ok(())
}

pub fn set_sequence_number(buf: &mut [u8], seq: SequenceNumber) -> Result<(), RtpError> {
    ensure_len(buf, RTP_HEADER_LEN)?;
    buf[SEQUENCE_NUMBER_OFFSET..SEQUENCE_NUMBER_OFFSET + 2].copy_from_slice(&seq.0.to_be_bytes());
    Ok(())
}

pub fn set_timestamp(buf: &mut [u8], timestamp: RtpTimestamp) -> Result<(), RtpError> {
    ensure_len(buf, RTP_HEADER_LEN)?;
    buf[TIMESTAMP_OFFSET..TIMESTAMP_OFFSET + 4].copy_from_slice(&timestamp.0.to_be_bytes());
    Ok(())
}

pub fn set_ssrc(buf: &mut [u8], ssrc: Ssrc) -> Result<(), RtpError> {
    ensure_len(buf, RTP_HEADER_LEN)?;
    buf[SSRC_OFFSET..SSRC_OFFSET + 4].copy_from_slice(&ssrc.0.to_be_bytes());
    Ok(())
}

/// Rewrite the first header byte: version 2, the given flags and CSRC count
pub fn set_flags(
    buf: &mut [u8],
    padding: bool,
    extension: bool,
    csrc_count: usize,
) -> Result<(), RtpError> {
    if csrc_count > MAX_CSRC {
        return Err(RtpError::TooManyCsrc(csrc_count));
    }

    ensure_len(buf, 1)?;

    let mut b = RTP_VERSION << 6;

    if padding {
        b |= PADDING_BIT;
    }

    if extension {
        b |= EXTENSION_BIT;
    }

    buf[0] = b | csrc_count as u8;

    Ok(())
}

/// Length of the complete header including CSRC list and extension block
///
/// Returns `None` if the buffer is too short to hold the header it declares.
pub fn header_len(buf: &[u8]) -> Option<usize> {
    let first = *buf.first()?;

    let mut len = RTP_HEADER_LEN + usize::from(first & CSRC_COUNT_MASK) * 4;

    if buf.len() < len {
        return None;
    }

    if first & EXTENSION_BIT != 0 {
        let words = buf.get(len + 2..len + 4)?;
        let words = usize::from(u16::from_be_bytes([words[0], words[1]]));

        len += (words + 1) * 4;
    }

    (buf.len() >= len).then_some(len)
}

pub(crate) fn read_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([buf[offset], buf[offset + 1]])
}

pub(crate) fn read_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}
