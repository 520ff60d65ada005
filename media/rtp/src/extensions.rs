//! RFC 8285 header extension elements carried inside [`RtpHeader::extension_payload`](crate::RtpHeader)

use crate::RtpError;
use bytes::{BufMut, Bytes};

/// Profile of the one-byte element form
pub const ONE_BYTE_PROFILE: u16 = 0xBEDE;

/// Profile of the two-byte element form (the lower 4 "appbits" are always written as zero)
pub const TWO_BYTE_PROFILE: u16 = 0x1000;

/// Builds a 4 byte aligned extension payload out of individual elements
#[derive(Debug)]
pub struct RtpExtensionsWriter {
    buffer: Vec<u8>,
    two_byte: bool,
}

impl RtpExtensionsWriter {
    pub fn new(two_byte: bool) -> Self {
        Self {
            buffer: Vec::new(),
            two_byte,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Append an element
    ///
    /// One-byte elements need an id in `1..=14` and 1 to 16 bytes of data, two-byte elements an id
    /// above 0 and at most 255 bytes.
    pub fn write(&mut self, id: u8, data: &[u8]) -> Result<(), RtpError> {
        let invalid = || RtpError::InvalidExtensionElement { id, len: data.len() };

        if self.two_byte {
            if id == 0 {
                return Err(invalid());
            }

            let len = u8::try_from(data.len()).map_err(|_| invalid())?;

            self.buffer.put_slice(&[id, len]);
        } else {
            if !(1..=14).contains(&id) || data.is_empty() || data.len() > 16 {
                return Err(invalid());
            }

            self.buffer.put_u8((id << 4) | (data.len() - 1) as u8);
        }

        self.buffer.put_slice(data);

        Ok(())
    }

    /// Pad the elements to a 32 bit boundary and return the profile together with the payload
    pub fn finish(mut self) -> (u16, Bytes) {
        let profile = if self.two_byte {
            TWO_BYTE_PROFILE
        } else {
            ONE_BYTE_PROFILE
        };

        let padding = (4 - self.buffer.len() % 4) % 4;
        self.buffer.put_bytes(0, padding);

        (profile, self.buffer.into())
    }
}

enum ExtensionsIter<T, U> {
    OneByte(T),
    TwoBytes(U),
    None,
}

impl<T: Iterator, U: Iterator<Item = T::Item>> Iterator for ExtensionsIter<T, U> {
    type Item = T::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ExtensionsIter::OneByte(iter) => iter.next(),
            ExtensionsIter::TwoBytes(iter) => iter.next(),
            ExtensionsIter::None => None,
        }
    }
}

/// Iterate the `(id, data)` elements of an extension payload
///
/// Unknown profiles yield nothing. Iteration stops at the first truncated element.
pub fn parse_extensions(profile: u16, data: &[u8]) -> impl Iterator<Item = (u8, &[u8])> {
    if profile == ONE_BYTE_PROFILE {
        ExtensionsIter::OneByte(parse_onebyte(data))
    } else if (profile & 0xFFF0) == TWO_BYTE_PROFILE {
        ExtensionsIter::TwoBytes(parse_twobyte(data))
    } else {
        ExtensionsIter::None
    }
}

// https://www.rfc-editor.org/rfc/rfc8285#section-4.2
fn parse_onebyte(mut data: &[u8]) -> impl Iterator<Item = (u8, &[u8])> {
    std::iter::from_fn(move || {
        loop {
            let &[b, ref remaining @ ..] = data else {
                return None;
            };

            // padding between elements
            if b == 0 {
                data = remaining;
                continue;
            }

            let id = b >> 4;
            if id == 15 {
                return None;
            }

            let len = usize::from(b & 0x0F) + 1;

            return if remaining.len() >= len {
                data = &remaining[len..];
                Some((id, &remaining[..len]))
            } else {
                None
            };
        }
    })
}

// https://www.rfc-editor.org/rfc/rfc8285#section-4.3
fn parse_twobyte(mut data: &[u8]) -> impl Iterator<Item = (u8, &[u8])> {
    std::iter::from_fn(move || {
        loop {
            match data {
                [0, remaining @ ..] => data = remaining,
                [id, len, remaining @ ..] => {
                    let len = usize::from(*len);

                    return if remaining.len() >= len {
                        data = &remaining[len..];
                        Some((*id, &remaining[..len]))
                    } else {
                        None
                    };
                }
                _ => return None,
            }
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn one_byte_roundtrip() {
        let mut writer = RtpExtensionsWriter::new(false);
        writer.write(1, b"0").unwrap();
        writer.write(3, &[0x12, 0x34]).unwrap();

        let (profile, data) = writer.finish();
        assert_eq!(profile, 0xBEDE);
        assert_eq!(&data[..], &[0x10, b'0', 0x31, 0x12, 0x34, 0, 0, 0]);

        let elements: Vec<_> = parse_extensions(profile, &data).collect();
        assert_eq!(elements, vec![(1, &b"0"[..]), (3, &[0x12, 0x34][..])]);
    }

    #[test]
    fn two_byte_elements() {
        let mut writer = RtpExtensionsWriter::new(true);
        writer.write(20, &[]).unwrap();
        writer.write(200, &[1, 2, 3]).unwrap();

        let (profile, data) = writer.finish();
        assert_eq!(profile, 0x1000);
        assert_eq!(data.len() % 4, 0);

        let elements: Vec<_> = parse_extensions(0x1003, &data).collect();
        assert_eq!(elements, vec![(20, &[][..]), (200, &[1, 2, 3][..])]);
    }

    #[test]
    fn invalid_elements() {
        let mut writer = RtpExtensionsWriter::new(false);

        assert!(writer.write(0, &[1]).is_err());
        assert!(writer.write(15, &[1]).is_err());
        assert!(writer.write(1, &[]).is_err());
        assert!(writer.write(1, &[0; 17]).is_err());
        assert!(writer.is_empty());

        let mut writer = RtpExtensionsWriter::new(true);
        assert!(writer.write(0, &[1]).is_err());
        assert!(writer.write(1, &[0; 256]).is_err());
    }

    #[test]
    fn truncated_element_stops() {
        let data = [0x13, 1, 2];
        assert_eq!(parse_extensions(0xBEDE, &data).count(), 0);

        assert_eq!(parse_extensions(0x1234, &[0x10, 1, 0, 0]).count(), 0);
    }
}
