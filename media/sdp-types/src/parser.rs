use crate::{
    Direction, ExtMap, Fingerprint, Fmtp, Group, MediaAttr, MediaKind, MediaSdp, MsId,
    MsidSemantic, Origin, RtcpFeedback, RtpMap, Sctp, Setup, Ssrc, SsrcGroup,
};
use bytesstr::BytesStr;
use internal::{Finish, IResult, verbose_error_to_owned};
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ParseSdpError {
    #[error("document contains no SDP lines")]
    NoUsableLines,
    #[error("failed to read document: {0}")]
    Io(#[from] io::Error),
}

/// A single attribute line which could not be parsed
///
/// Never returned from [`MediaSdp::parse`], the line is logged and skipped.
#[derive(Debug, thiserror::Error)]
#[error("malformed attribute a={attribute}: {reason}")]
pub struct MalformedLine {
    pub attribute: String,
    pub reason: String,
}

impl MalformedLine {
    fn new(attribute: &str, reason: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            reason: reason.into(),
        }
    }
}

/// Run an attribute grammar over the complete value
fn grammar<'i, O>(
    attribute: &str,
    value: &'i str,
    mut parser: impl FnMut(&'i str) -> IResult<&'i str, O>,
) -> Result<O, MalformedLine> {
    parser(value)
        .finish()
        .map(|(_, o)| o)
        .map_err(|e| MalformedLine::new(attribute, verbose_error_to_owned(e).to_string()))
}

fn number<T: std::str::FromStr>(attribute: &str, value: &str) -> Result<T, MalformedLine> {
    value
        .trim()
        .parse()
        .map_err(|_| MalformedLine::new(attribute, format!("{value:?} is not a valid number")))
}

#[derive(Default)]
pub(crate) struct Parser {
    usable_lines: usize,
    origin: Option<Origin>,
    name: Option<BytesStr>,
    ice_lite: bool,
    ice_options: Option<BytesStr>,
    ice_ufrag: Option<BytesStr>,
    ice_pwd: Option<BytesStr>,
    fingerprint: Option<Fingerprint>,
    bundle: Vec<BytesStr>,
    msid_semantic: Option<MsidSemantic>,

    /// Section the following attributes belong to, sections of unknown media types are parsed and then dropped
    current: Option<MediaAttr>,
    audios: Vec<MediaAttr>,
    videos: Vec<MediaAttr>,
    applications: Vec<MediaAttr>,
}

impl Parser {
    pub(crate) fn parse_line(&mut self, src: &BytesStr, complete_line: &str) {
        let complete_line = complete_line.trim_end();

        if complete_line.len() <= 2 || complete_line.as_bytes()[1] != b'=' {
            return;
        }

        self.usable_lines += 1;

        let line = &complete_line[2..];

        log::trace!("parsing line {complete_line:?}");

        match complete_line.as_bytes()[0] {
            b'o' => match Origin::parse(src.as_ref(), line).finish() {
                Ok((_, origin)) => self.origin = Some(origin),
                Err(e) => log::warn!("skipping malformed origin line, {}", verbose_error_to_owned(e)),
            },
            b's' => self.name = Some(BytesStr::from_parse(src.as_ref(), line)),
            b'm' => match MediaAttr::parse_media_line(src.as_ref(), line).finish() {
                Ok((_, media)) => {
                    self.flush_media();
                    self.current = Some(media);
                }
                Err(e) => {
                    log::warn!("skipping malformed media section, {}", verbose_error_to_owned(e));

                    // the section still owns the following attributes, it is dropped on flush
                    self.flush_media();
                    self.current = Some(MediaAttr::new(
                        MediaKind::Other(BytesStr::from_static("malformed")),
                        0,
                        BytesStr::empty(),
                        vec![],
                    ));
                }
            },
            b'a' => {
                if let Err(e) = self.parse_attribute(src, complete_line, line) {
                    log::warn!("skipping line, {e}");
                }
            }
            _ => {}
        }
    }

    fn flush_media(&mut self) {
        let Some(media) = self.current.take() else {
            return;
        };

        match media.kind {
            MediaKind::Audio => self.audios.push(media),
            MediaKind::Video => self.videos.push(media),
            MediaKind::Application => self.applications.push(media),
            MediaKind::Other(ref kind) => log::debug!("dropping media section of type {kind}"),
        }
    }

    fn parse_attribute(
        &mut self,
        src: &BytesStr,
        complete_line: &str,
        line: &str,
    ) -> Result<(), MalformedLine> {
        match line.split_once(':') {
            Some((name, value)) => self.parse_attribute_with_value(src, complete_line, name, value),
            None => {
                self.parse_attribute_without_value(line);
                Ok(())
            }
        }
    }

    fn parse_attribute_without_value(&mut self, name: &str) {
        if name == "ice-lite" {
            self.ice_lite = true;
            return;
        }

        let Some(media) = &mut self.current else {
            log::debug!("ignoring a={name} outside of a media section");
            return;
        };

        match name {
            "inactive" | "sendonly" | "recvonly" | "sendrecv" => {
                media.direction = name.parse::<Direction>().ok();
            }
            "rtcp-mux" => media.rtcp_mux = true,
            "rtcp-rsize" => media.rtcp_rsize = true,
            "end-of-candidates" => media.end_of_candidates = true,
            _ => log::debug!("unsupported attribute a={name}"),
        }
    }

    fn parse_attribute_with_value(
        &mut self,
        src: &BytesStr,
        complete_line: &str,
        name: &str,
        value: &str,
    ) -> Result<(), MalformedLine> {
        let bytes = src.as_ref();

        match name {
            "group" => {
                let group = grammar(name, value, |i| Group::parse(bytes, i))?;

                if group.is_bundle() {
                    self.bundle.extend(group.mids);
                } else {
                    log::debug!("unsupported group semantics {}", group.semantics);
                }

                return Ok(());
            }
            "msid-semantic" => {
                let semantic = grammar(name, value, |i| MsidSemantic::parse(bytes, i.trim_start()))?;
                self.msid_semantic = Some(semantic);
                return Ok(());
            }
            _ => {}
        }

        let Some(media) = &mut self.current else {
            match name {
                "ice-options" => self.ice_options = Some(BytesStr::from_parse(bytes, value.trim())),
                "ice-ufrag" => self.ice_ufrag = Some(BytesStr::from_parse(bytes, value.trim())),
                "ice-pwd" => self.ice_pwd = Some(BytesStr::from_parse(bytes, value.trim())),
                "fingerprint" => {
                    self.fingerprint = Some(grammar(name, value, |i| Fingerprint::parse(bytes, i))?);
                }
                _ => log::debug!("ignoring session level a={name}"),
            }

            return Ok(());
        };

        match name {
            "rtcp" => {}
            "ice-ufrag" => media.ice_ufrag = Some(BytesStr::from_parse(bytes, value.trim())),
            "ice-pwd" => media.ice_pwd = Some(BytesStr::from_parse(bytes, value.trim())),
            "ice-options" => media.ice_options = Some(BytesStr::from_parse(bytes, value.trim())),
            "fingerprint" => {
                media.fingerprint = Some(grammar(name, value, |i| Fingerprint::parse(bytes, i))?);
            }
            "setup" => {
                let setup = value
                    .parse::<Setup>()
                    .map_err(|_| MalformedLine::new(name, format!("unknown role {value:?}")))?;

                media.setup = Some(setup);
            }
            "mid" => media.mid = Some(BytesStr::from_parse(bytes, value.trim())),
            "rtpmap" => {
                let rtpmap = grammar(name, value, |i| RtpMap::parse(bytes, i))?;
                media.rtpmaps.push(rtpmap);
            }
            "fmtp" => {
                let fmtp = grammar(name, value, |i| Fmtp::parse(bytes, i))?;
                media.fmtps.insert(fmtp.format, fmtp);
            }
            "rtcp-fb" => {
                let rtcp_fb = grammar(name, value, |i| RtcpFeedback::parse(bytes, i))?;
                media.rtcp_fbs.push(rtcp_fb);
            }
            "extmap" => {
                let extmap = grammar(name, value, |i| ExtMap::parse(bytes, i))?;
                media.extmaps.push(extmap);
            }
            "ssrc-group" => {
                let group = grammar(name, value, |i| SsrcGroup::parse(bytes, i))?;

                match group.fid() {
                    Some(fid) => media.fid_groups.push(fid),
                    None => log::debug!("unsupported ssrc-group {group}"),
                }
            }
            "ssrc" => {
                let ssrc = grammar(name, value, |i| Ssrc::parse(bytes, i))?;
                media.ssrcs.push(ssrc);
            }
            "msid" => {
                let msid = grammar(name, value, |i| MsId::parse(bytes, i))?;
                media.msids.push(msid);
            }
            "sctpmap" => media.sctp = Some(grammar(name, value, |i| Sctp::parse_sctpmap(bytes, i))?),
            "sctp-port" => media.sctp = Some(grammar(name, value.trim(), Sctp::parse_port)?),
            "max-message-size" => media.max_message_size = Some(number(name, value)?),
            "maxptime" => media.maxptime = Some(number(name, value)?),
            "candidate" => media
                .candidates
                .push(BytesStr::from_parse(bytes, complete_line)),
            _ => log::debug!("unsupported attribute a={name}"),
        }

        Ok(())
    }

    pub(crate) fn finish(mut self) -> Result<MediaSdp, ParseSdpError> {
        self.flush_media();

        if self.usable_lines == 0 {
            return Err(ParseSdpError::NoUsableLines);
        }

        Ok(MediaSdp {
            origin: self.origin,
            name: self.name,
            ice_lite: self.ice_lite,
            ice_options: self.ice_options,
            session_ice_ufrag: self.ice_ufrag,
            session_ice_pwd: self.ice_pwd,
            fingerprint: self.fingerprint,
            bundle: self.bundle,
            msid_semantic: self.msid_semantic,
            audios: self.audios,
            videos: self.videos,
            applications: self.applications,
        })
    }
}
