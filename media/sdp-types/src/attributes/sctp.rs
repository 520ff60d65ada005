//! SCTP association attributes (`a=sctpmap:...` and `a=sctp-port:...`)

use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, next_token, number, ws};
use nom::combinator::map;
use nom::error::context;
use nom::sequence::tuple;
use std::fmt;

/// SCTP association of a `m=application` section
///
/// Older offers use `a=sctpmap:<port> <protocol> <streams>`, newer ones a plain `a=sctp-port:<port>`.
/// A media section carries only one of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Sctp {
    Map {
        port: u16,
        protocol: BytesStr,
        streams: u32,
    },
    Port(u16),
}

impl Sctp {
    pub fn parse_sctpmap<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing sctpmap",
            map(
                tuple((number::<u16>, next_token, ws(number::<u32>))),
                |(port, protocol, streams)| Sctp::Map {
                    port,
                    protocol: BytesStr::from_parse(src, protocol),
                    streams,
                },
            ),
        )(i)
    }

    pub fn parse_port(i: &str) -> IResult<&str, Self> {
        context("parsing sctp-port", map(number::<u16>, Sctp::Port))(i)
    }

    pub fn port(&self) -> u16 {
        match self {
            Sctp::Map { port, .. } => *port,
            Sctp::Port(port) => *port,
        }
    }
}

/// Prints the attribute including its name, e.g. `sctp-port:5000`
impl fmt::Display for Sctp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sctp::Map {
                port,
                protocol,
                streams,
            } => write!(f, "sctpmap:{port} {protocol} {streams}"),
            Sctp::Port(port) => write!(f, "sctp-port:{port}"),
        }
    }
}
