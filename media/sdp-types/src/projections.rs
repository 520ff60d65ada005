//! Flat per media type views of the negotiated SSRCs, payload types and header extensions

use crate::MediaAttr;
use bytesstr::BytesStr;
use std::collections::BTreeMap;
use std::fmt;

/// SSRC of a stream and its retransmission SSRC (0 if there is none)
///
/// `num` is the number of streams in the media section, `idx` counts down from `num - 1` in
/// the order they were declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SdpSsrc {
    pub main: u32,
    pub rtx: u32,
    pub num: usize,
    pub idx: usize,
}

/// Payload type with its associated payload type
///
/// For a `rtx` payload `apt_ptype` is the payload it retransmits, for every other payload it is
/// the `rtx` payload retransmitting it. 0 if there is no association.
#[derive(Debug, Clone, PartialEq)]
pub struct SdpPtype {
    pub ptype: u8,
    pub apt_ptype: u8,
    pub codec: BytesStr,
    pub channels: u32,
    pub frequency: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SdpExtmap {
    pub id: u8,
    pub uri: BytesStr,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SdpMediaAttrs {
    pub ssrcs: BTreeMap<u32, SdpSsrc>,
    pub ptypes: BTreeMap<u8, SdpPtype>,
    pub extmaps: BTreeMap<u8, SdpExtmap>,
}

impl SdpMediaAttrs {
    /// Merge the projections of all given media sections, later sections overwrite earlier entries
    pub fn from_media<'a>(media: impl IntoIterator<Item = &'a MediaAttr>) -> Self {
        let mut attrs = Self::default();

        for media in media {
            attrs.add_ssrcs(media);
            attrs.add_ptypes(media);
            attrs.add_extmaps(media);
        }

        attrs
    }

    fn add_ssrcs(&mut self, media: &MediaAttr) {
        let streams: Vec<(u32, u32)> = if !media.fid_groups.is_empty() {
            media.fid_groups.iter().map(|fid| (fid.main, fid.rtx)).collect()
        } else {
            media.ssrc_values().into_iter().map(|ssrc| (ssrc, 0)).collect()
        };

        let num = streams.len();

        for (i, (main, rtx)) in streams.into_iter().enumerate() {
            self.ssrcs.insert(
                main,
                SdpSsrc {
                    main,
                    rtx,
                    num,
                    idx: num - 1 - i,
                },
            );
        }
    }

    fn add_ptypes(&mut self, media: &MediaAttr) {
        for rtpmap in &media.rtpmaps {
            let apt_ptype = if rtpmap.encoding == "rtx" {
                media.fmtp(rtpmap.payload).and_then(|fmtp| fmtp.apt())
            } else {
                media
                    .fmtps
                    .values()
                    .find(|fmtp| fmtp.apt() == Some(rtpmap.payload))
                    .map(|fmtp| fmtp.format)
            };

            self.ptypes.insert(
                rtpmap.payload,
                SdpPtype {
                    ptype: rtpmap.payload,
                    apt_ptype: apt_ptype.unwrap_or_default(),
                    codec: rtpmap.encoding.clone(),
                    channels: rtpmap.channels.unwrap_or_default(),
                    frequency: rtpmap.clock_rate,
                },
            );
        }
    }

    fn add_extmaps(&mut self, media: &MediaAttr) {
        for extmap in &media.extmaps {
            self.extmaps.insert(
                extmap.id,
                SdpExtmap {
                    id: extmap.id,
                    uri: extmap.uri.clone(),
                },
            );
        }
    }

    /// Iterate the header extension ids with their URI
    pub fn extmap_uris(&self) -> impl Iterator<Item = (u8, &str)> {
        self.extmaps
            .values()
            .map(|extmap| (extmap.id, extmap.uri.as_str()))
    }
}

impl fmt::Display for SdpSsrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ssrc:{}_{}_idx{}", self.main, self.rtx, self.idx)
    }
}

impl fmt::Display for SdpPtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ptype:{}_{}_{}_{}ch_{}hz",
            self.ptype, self.apt_ptype, self.codec, self.channels, self.frequency
        )
    }
}

impl fmt::Display for SdpExtmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "extmap:{}_{}", self.id, self.uri)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::MediaSdp;

    fn video() -> MediaSdp {
        let src = BytesStr::from_static(concat!(
            "v=0\r\n",
            "m=video 9 UDP/TLS/RTP/SAVPF 96 97\r\n",
            "a=extmap:2 urn:ietf:params:rtp-hdrext:toffset\r\n",
            "a=rtpmap:96 VP8/90000\r\n",
            "a=rtpmap:97 rtx/90000\r\n",
            "a=fmtp:97 apt=96\r\n",
            "a=ssrc-group:FID 1001 1002\r\n",
            "a=ssrc-group:FID 2001 2002\r\n",
            "a=ssrc:1001 cname:abc\r\n",
        ));

        MediaSdp::parse(&src).unwrap()
    }

    #[test]
    fn ptypes_are_associated() {
        let attrs = video().video_attrs();

        assert_eq!(attrs.ptypes[&96].apt_ptype, 97);
        assert_eq!(attrs.ptypes[&97].apt_ptype, 96);
        assert_eq!(attrs.ptypes[&96].to_string(), "ptype:96_97_vp8_0ch_90000hz");
    }

    #[test]
    fn fid_groups_take_precedence() {
        let attrs = video().video_attrs();

        assert_eq!(attrs.ssrcs.len(), 2);
        assert_eq!(
            attrs.ssrcs[&1001],
            SdpSsrc {
                main: 1001,
                rtx: 1002,
                num: 2,
                idx: 1
            }
        );
        assert_eq!(attrs.ssrcs[&2001].idx, 0);
        assert_eq!(attrs.ssrcs[&2001].to_string(), "ssrc:2001_2002_idx0");
    }

    #[test]
    fn extmaps_by_id() {
        let attrs = video().video_attrs();

        assert_eq!(
            attrs.extmaps[&2].to_string(),
            "extmap:2_urn:ietf:params:rtp-hdrext:toffset"
        );
        assert!(video().audio_attrs().extmaps.is_empty());
    }
}
