use crate::{RtpError, RtpExtensionsWriter, RtpHeader, ensure_len};
use bytes::Bytes;
use std::fmt;

/// RTP header together with its payload
///
/// The payload includes any padding bytes, see [`RtpPacket::payload_without_padding`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RtpPacket {
    pub header: RtpHeader,
    pub payload: Bytes,
}

/// Decoded values of the header extensions this crate knows about
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RtpExtensions {
    pub mid: Option<Bytes>,
    pub audio_level: Option<RtpAudioLevelExt>,
    pub twcc_sequence_number: Option<u16>,
    /// 24 bit 6.18 fixed point seconds
    pub abs_send_time: Option<u32>,
    /// 24 bit signed offset in RTP timestamp units
    pub transmission_time_offset: Option<i32>,
}

/// ID to attribute type map to use when parsing or serializing RTP packets
///
/// Usually taken from the `a=extmap` lines of the negotiated media section.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RtpExtensionIds {
    pub mid: Option<u8>,
    pub audio_level: Option<u8>,
    pub twcc_sequence_number: Option<u8>,
    pub abs_send_time: Option<u8>,
    pub transmission_time_offset: Option<u8>,
}

impl RtpExtensionIds {
    pub const MID_URI: &'static str = "urn:ietf:params:rtp-hdrext:sdes:mid";
    pub const AUDIO_LEVEL_URI: &'static str = "urn:ietf:params:rtp-hdrext:ssrc-audio-level";
    pub const TWCC_URI: &'static str =
        "http://www.ietf.org/id/draft-holmer-rmcat-transport-wide-cc-extensions-01";
    pub const ABS_SEND_TIME_URI: &'static str =
        "http://www.webrtc.org/experiments/rtp-hdrext/abs-send-time";
    pub const TOFFSET_URI: &'static str = "urn:ietf:params:rtp-hdrext:toffset";

    /// Build the id map out of `(id, uri)` pairs, ignoring unknown URIs
    pub fn from_extmaps<'a>(extmaps: impl IntoIterator<Item = (u8, &'a str)>) -> Self {
        let mut ids = Self::default();

        for (id, uri) in extmaps {
            let slot = match uri {
                Self::MID_URI => &mut ids.mid,
                Self::AUDIO_LEVEL_URI => &mut ids.audio_level,
                Self::TWCC_URI => &mut ids.twcc_sequence_number,
                Self::ABS_SEND_TIME_URI => &mut ids.abs_send_time,
                Self::TOFFSET_URI => &mut ids.transmission_time_offset,
                _ => continue,
            };

            *slot = Some(id);
        }

        ids
    }
}

impl RtpPacket {
    /// Decode a packet, the payload is everything after the header
    pub fn unmarshal(bytes: impl Into<Bytes>) -> Result<Self, RtpError> {
        let bytes: Bytes = bytes.into();

        let header = RtpHeader::unmarshal_bytes(&bytes)?;
        let payload = bytes.slice(header.payload_offset..);

        Ok(Self { header, payload })
    }

    pub fn marshal_size(&self) -> usize {
        self.header.marshal_size() + self.payload.len()
    }

    /// Write header and payload into `buf`, returning the number of bytes written
    pub fn marshal_to(&mut self, buf: &mut [u8]) -> Result<usize, RtpError> {
        ensure_len(buf, self.marshal_size())?;

        let n = self.header.marshal_to(buf)?;
        buf[n..n + self.payload.len()].copy_from_slice(&self.payload);

        Ok(n + self.payload.len())
    }

    pub fn marshal(&self) -> Result<Vec<u8>, RtpError> {
        let mut buf = self.header.marshal()?;
        buf.extend_from_slice(&self.payload);
        Ok(buf)
    }

    /// Payload with the trailing padding removed
    ///
    /// Returns the full payload if the declared padding length does not fit into it.
    pub fn payload_without_padding(&self) -> Bytes {
        let padding = usize::from(self.header.padding_length);

        if self.header.padding && padding > 0 && padding <= self.payload.len() {
            self.payload.slice(..self.payload.len() - padding)
        } else {
            self.payload.clone()
        }
    }

    /// Returns `true` if this packet's sequence number is newer than `other`'s
    pub fn is_newer_than(&self, other: &Self) -> bool {
        self.header
            .sequence_number
            .is_newer_than(other.header.sequence_number)
    }

    /// Decode the known header extensions using the given id map
    pub fn extensions(&self, ids: RtpExtensionIds) -> RtpExtensions {
        let mut this = RtpExtensions::default();

        for (id, data) in self.header.extension_elements() {
            if Some(id) == ids.mid {
                this.mid = Some(self.header.extension_payload.slice_ref(data));
            }

            if Some(id) == ids.audio_level
                && let &[b0, ..] = data
            {
                this.audio_level = Some(RtpAudioLevelExt(b0));
            }

            if Some(id) == ids.twcc_sequence_number
                && let &[b0, b1, ..] = data
            {
                this.twcc_sequence_number = Some(u16::from_be_bytes([b0, b1]));
            }

            if Some(id) == ids.abs_send_time
                && let &[b0, b1, b2, ..] = data
            {
                this.abs_send_time = Some(u32::from_be_bytes([0, b0, b1, b2]));
            }

            if Some(id) == ids.transmission_time_offset
                && let &[b0, b1, b2, ..] = data
            {
                // sign extend the 24 bit value
                this.transmission_time_offset = Some(i32::from_be_bytes([b0, b1, b2, 0]) >> 8);
            }
        }

        this
    }

    /// Replace the header extension block with the given extensions
    ///
    /// Clears the extension flag when no extension has an id assigned.
    pub fn set_extensions(
        &mut self,
        ids: RtpExtensionIds,
        extensions: &RtpExtensions,
    ) -> Result<(), RtpError> {
        let mut writer = RtpExtensionsWriter::new(false);

        if let Some((id, mid)) = ids.mid.zip(extensions.mid.as_ref()) {
            writer.write(id, mid)?;
        }

        if let Some((id, level)) = ids.audio_level.zip(extensions.audio_level) {
            writer.write(id, &[level.0])?;
        }

        if let Some((id, seq)) = ids
            .twcc_sequence_number
            .zip(extensions.twcc_sequence_number)
        {
            writer.write(id, &seq.to_be_bytes())?;
        }

        if let Some((id, time)) = ids.abs_send_time.zip(extensions.abs_send_time) {
            writer.write(id, &time.to_be_bytes()[1..])?;
        }

        if let Some((id, offset)) = ids
            .transmission_time_offset
            .zip(extensions.transmission_time_offset)
        {
            writer.write(id, &offset.to_be_bytes()[1..])?;
        }

        if writer.is_empty() {
            self.header.extension = false;
            self.header.extension_profile = 0;
            self.header.extension_payload = Bytes::new();
        } else {
            let (profile, payload) = writer.finish();

            self.header.extension = true;
            self.header.extension_profile = profile;
            self.header.extension_payload = payload;
        }

        Ok(())
    }
}

impl fmt::Display for RtpPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = &self.header;

        writeln!(f, "RTP PACKET:")?;
        writeln!(f, "\tVersion: {}", h.version)?;
        writeln!(f, "\tMarker: {}", h.marker)?;
        writeln!(f, "\tPayloadType: {}", h.payload_type)?;
        writeln!(f, "\tSequenceNumber: {}", h.sequence_number.0)?;
        writeln!(f, "\tTimestamp: {}", h.timestamp.0)?;
        writeln!(f, "\tSSRC: {} ({:#x})", h.ssrc.0, h.ssrc.0)?;
        writeln!(f, "\tPayloadLength: {}", self.payload.len())?;
        writeln!(f, "\tPacketLength: {}", self.marshal_size())
    }
}

/// RTP Audio Level Indication extension value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RtpAudioLevelExt(u8);

impl RtpAudioLevelExt {
    /// - `level` in the range of -127 to 0 dBov
    /// - `has_voice_activity` indicates whether the audio packet contains voice activity
    pub fn new(has_voice_activity: bool, level: i8) -> Self {
        let level = level.clamp(-127, 0).unsigned_abs();

        RtpAudioLevelExt((u8::from(has_voice_activity) << 7) | (level & 0x7F))
    }

    pub fn has_voice_activity(self) -> bool {
        (self.0 & 0x80) != 0
    }

    /// Level between -127 and 0 as dBov
    pub fn level(self) -> i8 {
        -((self.0 & 0x7F) as i8)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{SequenceNumber, Ssrc};

    const PACKET: &[u8] = &[
        0x90, 0xE0, 0x69, 0x8F, 0xD9, 0xC2, 0x93, 0xDA, 0x1C, 0x64, 0x27, 0x82, // fixed
        0xBE, 0xDE, 0x00, 0x01, // extension header
        0x50, 0xAA, 0x00, 0x00, // id 5 with one byte
        0x98, 0x36, 0xBE, 0x88, 0x9E, // payload
    ];

    #[test]
    fn unmarshal_payload_is_remainder() {
        let packet = RtpPacket::unmarshal(PACKET).unwrap();

        assert_eq!(packet.header.payload_offset, 20);
        assert_eq!(&packet.payload[..], &PACKET[20..]);
        assert_eq!(packet.marshal_size(), PACKET.len());
    }

    #[test]
    fn marshal_roundtrip() {
        let mut packet = RtpPacket::unmarshal(PACKET).unwrap();

        let mut buf = vec![0u8; packet.marshal_size()];
        let n = packet.marshal_to(&mut buf).unwrap();

        assert_eq!(n, PACKET.len());
        assert_eq!(&buf[..], PACKET);
        assert_eq!(packet.marshal().unwrap(), PACKET);
    }

    #[test]
    fn marshal_short_buffer() {
        let mut packet = RtpPacket::unmarshal(PACKET).unwrap();
        let mut buf = [0u8; 24];

        assert_eq!(
            packet.marshal_to(&mut buf),
            Err(RtpError::ShortBuffer {
                needed: 25,
                available: 24
            })
        );
    }

    #[test]
    fn padding_is_stripped() {
        let buf = [0xA0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0xAA, 0xBB, 0, 2];
        let packet = RtpPacket::unmarshal(buf.to_vec()).unwrap();

        assert_eq!(&packet.payload[..], &[0xAA, 0xBB, 0, 2]);
        assert_eq!(&packet.payload_without_padding()[..], &[0xAA, 0xBB]);
    }

    #[test]
    fn extensions_roundtrip() {
        let ids = RtpExtensionIds {
            mid: Some(1),
            audio_level: Some(2),
            twcc_sequence_number: Some(3),
            abs_send_time: Some(4),
            transmission_time_offset: Some(5),
        };

        let extensions = RtpExtensions {
            mid: Some(Bytes::from_static(b"audio")),
            audio_level: Some(RtpAudioLevelExt::new(true, -30)),
            twcc_sequence_number: Some(513),
            abs_send_time: Some(0xABCDEF),
            transmission_time_offset: Some(-2),
        };

        let mut packet = RtpPacket {
            header: RtpHeader {
                sequence_number: SequenceNumber(1),
                ssrc: Ssrc(10),
                ..Default::default()
            },
            payload: Bytes::from_static(&[1, 2, 3]),
        };

        packet.set_extensions(ids, &extensions).unwrap();
        assert!(packet.header.extension);
        assert_eq!(packet.header.extension_payload.len() % 4, 0);

        let parsed = RtpPacket::unmarshal(packet.marshal().unwrap()).unwrap();
        assert_eq!(parsed.extensions(ids), extensions);
        assert_eq!(&parsed.payload[..], &[1, 2, 3]);

        packet
            .set_extensions(RtpExtensionIds::default(), &extensions)
            .unwrap();
        assert!(!packet.header.extension);
    }

    #[test]
    fn extension_ids_from_extmaps() {
        let ids = RtpExtensionIds::from_extmaps([
            (1, RtpExtensionIds::AUDIO_LEVEL_URI),
            (4, "urn:example:unknown"),
            (9, RtpExtensionIds::MID_URI),
        ]);

        assert_eq!(ids.audio_level, Some(1));
        assert_eq!(ids.mid, Some(9));
        assert_eq!(ids.twcc_sequence_number, None);
    }

    #[test]
    fn audio_level() {
        let level = RtpAudioLevelExt::new(true, -30);
        assert!(level.has_voice_activity());
        assert_eq!(level.level(), -30);

        let level = RtpAudioLevelExt::new(false, 10);
        assert!(!level.has_voice_activity());
        assert_eq!(level.level(), 0);
    }

    #[test]
    fn display() {
        let packet = RtpPacket::unmarshal(PACKET).unwrap();
        let text = packet.to_string();

        assert!(text.starts_with("RTP PACKET:\n"));
        assert!(text.contains("\tSequenceNumber: 27023\n"));
        assert!(text.contains("\tSSRC: 476325762 (0x1c642782)\n"));
        assert!(text.contains("\tPayloadLength: 5\n"));
    }
}
