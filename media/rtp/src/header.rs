use crate::raw::{
    CSRC_COUNT_MASK, EXTENSION_BIT, MARKER_BIT, PADDING_BIT, PAYLOAD_TYPE_MASK,
    SEQUENCE_NUMBER_OFFSET, SSRC_OFFSET, TIMESTAMP_OFFSET, read_u16, read_u32,
};
use crate::{
    MAX_CSRC, RTP_HEADER_LEN, RTP_VERSION, RtpError, RtpTimestamp, SequenceNumber, Ssrc,
    ensure_len, parse_extensions,
};
use bytes::Bytes;

/// Decoded RTP header
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |V=2|P|X|  CC   |M|     PT      |       sequence number         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                           timestamp                           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |           synchronization source (SSRC) identifier            |
/// +=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+
/// |            contributing source (CSRC) identifiers             |
/// |                             ....                              |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// Equality only considers the fields that are part of the wire format, not the bookkeeping
/// fields [`padding_length`](Self::padding_length) and [`payload_offset`](Self::payload_offset).
#[derive(Debug, Default, Clone)]
pub struct RtpHeader {
    pub version: u8,
    pub padding: bool,
    pub extension: bool,
    pub marker: bool,
    pub payload_type: u8,
    pub sequence_number: SequenceNumber,
    pub timestamp: RtpTimestamp,
    pub ssrc: Ssrc,
    pub csrc: Vec<Ssrc>,
    pub extension_profile: u16,
    /// Raw extension block, without the profile & length words
    pub extension_payload: Bytes,

    /// Value of the last byte of the packet when the padding flag is set
    pub padding_length: u8,

    /// Offset of the payload after [`unmarshal`](Self::unmarshal).
    ///
    /// [`marshal_to`](Self::marshal_to) sets it to the offset *before* the extension block, matching what
    /// existing peers of this codec expect. Use [`marshal_size`](Self::marshal_size) for the real header size.
    pub payload_offset: usize,
}

impl PartialEq for RtpHeader {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.padding == other.padding
            && self.extension == other.extension
            && self.marker == other.marker
            && self.payload_type == other.payload_type
            && self.sequence_number == other.sequence_number
            && self.timestamp == other.timestamp
            && self.ssrc == other.ssrc
            && self.csrc == other.csrc
            && self.extension_profile == other.extension_profile
            && self.extension_payload == other.extension_payload
    }
}

impl Eq for RtpHeader {}

impl RtpHeader {
    /// Decode a header from the start of `buf`, copying the extension payload
    pub fn unmarshal(buf: &[u8]) -> Result<Self, RtpError> {
        Self::decode(buf, Bytes::copy_from_slice)
    }

    /// Decode a header from the start of `buf`, referencing the extension payload without copying
    pub fn unmarshal_bytes(buf: &Bytes) -> Result<Self, RtpError> {
        Self::decode(buf, |ext| buf.slice_ref(ext))
    }

    fn decode(buf: &[u8], extension_payload: impl FnOnce(&[u8]) -> Bytes) -> Result<Self, RtpError> {
        ensure_len(buf, RTP_HEADER_LEN)?;

        let b0 = buf[0];
        let b1 = buf[1];

        let padding = b0 & PADDING_BIT != 0;
        let extension = b0 & EXTENSION_BIT != 0;
        let csrc_count = usize::from(b0 & CSRC_COUNT_MASK);

        let padding_length = if padding { buf[buf.len() - 1] } else { 0 };

        let mut offset = RTP_HEADER_LEN + csrc_count * 4;
        ensure_len(buf, offset)?;

        let csrc = buf[RTP_HEADER_LEN..offset]
            .chunks_exact(4)
            .map(|chunk| Ssrc(read_u32(chunk, 0)))
            .collect();

        let mut extension_profile = 0;
        let mut payload = Bytes::new();

        if extension {
            ensure_len(buf, offset + 4)?;

            extension_profile = read_u16(buf, offset);
            let len = usize::from(read_u16(buf, offset + 2)) * 4;
            offset += 4;

            ensure_len(buf, offset + len)?;

            payload = extension_payload(&buf[offset..offset + len]);
            offset += len;
        }

        Ok(Self {
            version: b0 >> 6,
            padding,
            extension,
            marker: b1 & MARKER_BIT != 0,
            payload_type: b1 & PAYLOAD_TYPE_MASK,
            sequence_number: SequenceNumber(read_u16(buf, SEQUENCE_NUMBER_OFFSET)),
            timestamp: RtpTimestamp(read_u32(buf, TIMESTAMP_OFFSET)),
            ssrc: Ssrc(read_u32(buf, SSRC_OFFSET)),
            csrc,
            extension_profile,
            extension_payload: payload,
            padding_length,
            payload_offset: offset,
        })
    }

    /// Size of the header once marshaled
    pub fn marshal_size(&self) -> usize {
        let mut size = RTP_HEADER_LEN + self.csrc.len() * 4;

        if self.extension {
            size += 4 + self.extension_payload.len();
        }

        size
    }

    /// Length of the header, same as [`marshal_size`](Self::marshal_size)
    pub fn header_len(&self) -> usize {
        self.marshal_size()
    }

    /// Iterate the RFC 8285 elements inside the extension block
    pub fn extension_elements(&self) -> impl Iterator<Item = (u8, &[u8])> {
        let data: &[u8] = if self.extension {
            &self.extension_payload
        } else {
            &[]
        };

        parse_extensions(self.extension_profile, data)
    }

    /// Write the header into `buf`, returning the number of bytes written
    ///
    /// Forces the version to 2.
    pub fn marshal_to(&mut self, buf: &mut [u8]) -> Result<usize, RtpError> {
        self.version = RTP_VERSION;

        let (n, legacy_offset) = self.write(buf)?;
        self.payload_offset = legacy_offset;

        Ok(n)
    }

    /// Write the header into a new buffer, forcing the version to 2
    pub fn marshal(&self) -> Result<Vec<u8>, RtpError> {
        let mut buf = vec![0u8; self.marshal_size()];
        let (n, _) = self.write(&mut buf)?;
        buf.truncate(n);
        Ok(buf)
    }

    fn write(&self, buf: &mut [u8]) -> Result<(usize, usize), RtpError> {
        ensure_len(buf, self.marshal_size())?;

        if self.csrc.len() > MAX_CSRC {
            return Err(RtpError::TooManyCsrc(self.csrc.len()));
        }

        let extension_words = if self.extension {
            let len = self.extension_payload.len();

            if len % 4 != 0 {
                return Err(RtpError::InvalidExtensionLength(len));
            }

            Some(u16::try_from(len / 4).map_err(|_| RtpError::InvalidExtensionLength(len))?)
        } else {
            None
        };

        let mut b0 = (RTP_VERSION << 6) | self.csrc.len() as u8;

        if self.padding {
            b0 |= PADDING_BIT;
        }

        if self.extension {
            b0 |= EXTENSION_BIT;
        }

        let mut b1 = self.payload_type & PAYLOAD_TYPE_MASK;

        if self.marker {
            b1 |= MARKER_BIT;
        }

        buf[0] = b0;
        buf[1] = b1;
        buf[2..4].copy_from_slice(&self.sequence_number.0.to_be_bytes());
        buf[4..8].copy_from_slice(&self.timestamp.0.to_be_bytes());
        buf[8..12].copy_from_slice(&self.ssrc.0.to_be_bytes());

        let mut n = RTP_HEADER_LEN;

        for csrc in &self.csrc {
            buf[n..n + 4].copy_from_slice(&csrc.0.to_be_bytes());
            n += 4;
        }

        let legacy_offset = n;

        if let Some(words) = extension_words {
            let len = self.extension_payload.len();

            buf[n..n + 2].copy_from_slice(&self.extension_profile.to_be_bytes());
            buf[n + 2..n + 4].copy_from_slice(&words.to_be_bytes());
            n += 4;

            buf[n..n + len].copy_from_slice(&self.extension_payload);
            n += len;
        }

        Ok((n, legacy_offset))
    }
}
