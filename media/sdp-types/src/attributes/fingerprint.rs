use bytes::Bytes;
use bytesstr::BytesStr;
use internal::IResult;
use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take, take_while1},
    character::complete::char,
    combinator::{map, map_res},
    error::context,
    multi::separated_list1,
    sequence::separated_pair,
};
use std::fmt;

use crate::not_whitespace;

/// Certificate fingerprint used to verify the DTLS handshake (`a=fingerprint:...`)
///
/// Session or Media-Level attribute
///
/// [RFC8122](https://www.rfc-editor.org/rfc/rfc8122.html#section-5)
#[derive(Debug, Clone, PartialEq)]
pub struct Fingerprint {
    pub algorithm: FingerprintAlgorithm,
    pub fingerprint: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FingerprintAlgorithm {
    SHA1,
    SHA224,
    SHA256,
    SHA384,
    SHA512,
    MD5,
    MD2,
    Other(BytesStr),
}

impl Fingerprint {
    pub fn sha256(digest: impl Into<Vec<u8>>) -> Self {
        Self {
            algorithm: FingerprintAlgorithm::SHA256,
            fingerprint: digest.into(),
        }
    }

    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing fingerprint-attribute",
            map(
                separated_pair(
                    alt((
                        map(tag_no_case("SHA-1"), |_| FingerprintAlgorithm::SHA1),
                        map(tag_no_case("SHA-224"), |_| FingerprintAlgorithm::SHA224),
                        map(tag_no_case("SHA-256"), |_| FingerprintAlgorithm::SHA256),
                        map(tag_no_case("SHA-384"), |_| FingerprintAlgorithm::SHA384),
                        map(tag_no_case("SHA-512"), |_| FingerprintAlgorithm::SHA512),
                        map(tag_no_case("MD5"), |_| FingerprintAlgorithm::MD5),
                        map(tag_no_case("MD2"), |_| FingerprintAlgorithm::MD2),
                        map(take_while1(not_whitespace), |other| {
                            FingerprintAlgorithm::Other(BytesStr::from_parse(src, other))
                        }),
                    )),
                    take_while1(char::is_whitespace),
                    separated_list1(
                        char(':'),
                        map_res(take(2usize), |hex: &str| u8::from_str_radix(hex, 16)),
                    ),
                ),
                |(algorithm, fingerprint)| Self {
                    algorithm,
                    fingerprint,
                },
            ),
        )(i)
    }

    /// Colon separated uppercase hex digest without the algorithm, e.g. `D7:87:8B:...`
    pub fn hex(&self) -> String {
        let mut hex = String::with_capacity(self.fingerprint.len() * 3);

        for (i, b) in self.fingerprint.iter().enumerate() {
            if i > 0 {
                hex.push(':');
            }

            hex.push_str(&format!("{b:02X}"));
        }

        hex
    }
}

impl fmt::Display for FingerprintAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FingerprintAlgorithm::SHA1 => "sha-1",
            FingerprintAlgorithm::SHA224 => "sha-224",
            FingerprintAlgorithm::SHA256 => "sha-256",
            FingerprintAlgorithm::SHA384 => "sha-384",
            FingerprintAlgorithm::SHA512 => "sha-512",
            FingerprintAlgorithm::MD5 => "md5",
            FingerprintAlgorithm::MD2 => "md2",
            FingerprintAlgorithm::Other(bytes_str) => bytes_str.as_str(),
        })
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.algorithm, self.hex())
    }
}
