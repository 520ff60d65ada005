use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, next_token, token};
use nom::combinator::{map, opt};
use nom::error::context;
use nom::sequence::tuple;
use std::fmt;

/// Origin field (`o=`)
///
/// Only the username and session id are required, missing transport fields are left empty.
///
/// [RFC8866](https://www.rfc-editor.org/rfc/rfc8866.html#section-5.2)
#[derive(Debug, Clone, PartialEq)]
pub struct Origin {
    /// Username of the origin, the "owner" of the session
    pub username: BytesStr,

    /// Globally unique session identifier
    pub session_id: BytesStr,

    /// The version of the session, changes with each modification/renegotiation.
    pub session_version: BytesStr,

    pub net_type: BytesStr,
    pub addr_type: BytesStr,
    pub address: BytesStr,
}

impl Origin {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing origin",
            map(
                tuple((
                    token,
                    next_token,
                    opt(next_token),
                    opt(next_token),
                    opt(next_token),
                    opt(next_token),
                )),
                |(username, session_id, session_version, net_type, addr_type, address)| Origin {
                    username: BytesStr::from_parse(src, username),
                    session_id: BytesStr::from_parse(src, session_id),
                    session_version: optional(src, session_version),
                    net_type: optional(src, net_type),
                    addr_type: optional(src, addr_type),
                    address: optional(src, address),
                },
            ),
        )(i)
    }
}

fn optional(src: &Bytes, field: Option<&str>) -> BytesStr {
    field
        .map(|field| BytesStr::from_parse(src, field))
        .unwrap_or_else(BytesStr::empty)
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "o={} {} {} {} {} {}",
            self.username,
            self.session_id,
            self.session_version,
            self.net_type,
            self.addr_type,
            self.address
        )
    }
}
