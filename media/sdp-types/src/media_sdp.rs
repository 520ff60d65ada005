use crate::lines::split_lines;
use crate::parser::{ParseSdpError, Parser};
use crate::projections::SdpMediaAttrs;
use crate::{Fingerprint, MediaAttr, MsidSemantic, Origin};
use bytesstr::BytesStr;
use std::path::Path;

/// Parsed SDP document
///
/// Media sections are sorted into one list per media type, each keeping the document order.
#[derive(Debug, Clone)]
pub struct MediaSdp {
    pub origin: Option<Origin>,

    /// Session name (`s=`)
    pub name: Option<BytesStr>,

    pub ice_lite: bool,
    pub ice_options: Option<BytesStr>,

    /// Session level credentials, some offers carry them here instead of per media section
    pub session_ice_ufrag: Option<BytesStr>,
    pub session_ice_pwd: Option<BytesStr>,
    pub fingerprint: Option<Fingerprint>,

    /// Media ids of all `a=group:BUNDLE` lines in order of appearance
    pub bundle: Vec<BytesStr>,
    pub msid_semantic: Option<MsidSemantic>,

    pub audios: Vec<MediaAttr>,
    pub videos: Vec<MediaAttr>,
    pub applications: Vec<MediaAttr>,
}

impl MediaSdp {
    /// Parse a SDP document
    ///
    /// Lines which cannot be parsed are logged and skipped. Only a document without a single
    /// `<type>=<value>` line is rejected.
    pub fn parse(src: &BytesStr) -> Result<Self, ParseSdpError> {
        let (_, lines) = split_lines(src);

        let mut parser = Parser::default();

        for line in lines {
            parser.parse_line(src, line);
        }

        parser.finish()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParseSdpError> {
        let text = std::fs::read_to_string(path)?;

        Self::parse(&BytesStr::from(text))
    }

    /// Username of the origin line, empty if there was none
    pub fn owner(&self) -> &str {
        self.origin
            .as_ref()
            .map(|origin| origin.username.as_str())
            .unwrap_or_default()
    }

    pub fn has_audio(&self) -> bool {
        !self.audios.is_empty()
    }

    pub fn has_video(&self) -> bool {
        !self.videos.is_empty()
    }

    pub fn has_application(&self) -> bool {
        !self.applications.is_empty()
    }

    /// All media sections, audio first, then video, then application
    pub fn media(&self) -> impl Iterator<Item = &MediaAttr> {
        self.audios
            .iter()
            .chain(&self.videos)
            .chain(&self.applications)
    }

    /// The first media section, used as the source of the transport parameters
    fn first_media(&self) -> Option<&MediaAttr> {
        self.media().next()
    }

    /// ICE username fragment of the first media section, falling back to the session level one
    pub fn ice_ufrag(&self) -> Option<&BytesStr> {
        self.first_media()
            .and_then(|media| media.ice_ufrag.as_ref())
            .or(self.session_ice_ufrag.as_ref())
    }

    /// ICE password of the first media section, falling back to the session level one
    pub fn ice_pwd(&self) -> Option<&BytesStr> {
        self.first_media()
            .and_then(|media| media.ice_pwd.as_ref())
            .or(self.session_ice_pwd.as_ref())
    }

    /// Candidate lines of the first media section
    pub fn candidates(&self) -> &[BytesStr] {
        self.first_media()
            .map(|media| media.candidates.as_slice())
            .unwrap_or_default()
    }

    pub fn audio_attrs(&self) -> SdpMediaAttrs {
        SdpMediaAttrs::from_media(&self.audios)
    }

    pub fn video_attrs(&self) -> SdpMediaAttrs {
        SdpMediaAttrs::from_media(&self.videos)
    }

    /// Find the media section with the given `mid` across all media types
    pub fn find_by_mid(&self, mid: &str) -> Option<&MediaAttr> {
        self.media().find(|media| media.is_mid(mid))
    }
}
