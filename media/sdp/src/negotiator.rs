use crate::certificate::{CertificateError, CertificateSource, sha256_fingerprint};
use crate::{Agent, AnswerConfig, UnsupportedAgent};
use bytesstr::BytesStr;
use rand::Rng;
use rand::distr::{Alphanumeric, SampleString};
use sdp_types::{Fingerprint, MediaAttr, MediaSdp, RtpMap};

#[derive(Debug, thiserror::Error)]
pub enum NegotiationError {
    #[error(transparent)]
    UnsupportedAgent(#[from] UnsupportedAgent),
    #[error(transparent)]
    Certificate(#[from] CertificateError),
}

/// Codec selected from an offered `a=rtpmap`
#[derive(Debug, Clone, PartialEq)]
pub struct RtpMapInfo {
    pub ptype: u8,

    /// Lowercase encoding name
    pub codec: BytesStr,
    pub frequency: u32,
    pub channels: Option<u32>,

    /// Payload type of the RTX stream retransmitting this codec
    pub apt_ptype: Option<u8>,
}

impl From<&RtpMap> for RtpMapInfo {
    fn from(rtpmap: &RtpMap) -> Self {
        Self {
            ptype: rtpmap.payload,
            codec: rtpmap.encoding.clone(),
            frequency: rtpmap.clock_rate,
            channels: rtpmap.channels,
            apt_ptype: None,
        }
    }
}

/// Selection made for one offered `m=audio` section
#[derive(Debug, Clone, PartialEq)]
pub struct NegotiatedAudio {
    /// `None` if the offer contains none of the supported codecs, the section is answered as inactive
    pub main: Option<RtpMapInfo>,
}

/// Selection made for one offered `m=video` section
#[derive(Debug, Clone, PartialEq)]
pub struct NegotiatedVideo {
    /// First offered H.264 payload, `None` makes the section inactive
    pub main: Option<RtpMapInfo>,
    pub red: Option<RtpMapInfo>,
    pub ulpfec: Option<RtpMapInfo>,

    /// Retransmit `main` using its RTX payload type (`main.apt_ptype`)
    pub use_rtx: bool,

    /// Group the main and RTX SSRC with `a=ssrc-group:FID`
    pub use_rtx_fid: bool,

    /// Always disabled, RED/ULPFEC are never answered
    pub use_red_fec: bool,
}

/// Audio codecs in order of preference
const AUDIO_CODECS: [&str; 3] = ["opus", "pcmu", "pcma"];

fn select_audio(media: &MediaAttr) -> NegotiatedAudio {
    let usable = |rtpmap: &&RtpMap, codec: &str| {
        rtpmap.encoding == codec && (codec != "opus" || rtpmap.clock_rate == 48000)
    };

    let main = AUDIO_CODECS.into_iter().find_map(|codec| {
        media
            .rtpmaps
            .iter()
            .find(|rtpmap| usable(rtpmap, codec))
            .map(RtpMapInfo::from)
    });

    match &main {
        Some(main) => log::debug!("selected audio codec {} pt={}", main.codec, main.ptype),
        None => log::debug!("no supported audio codec offered, answering inactive"),
    }

    NegotiatedAudio { main }
}

fn select_video(media: &MediaAttr) -> NegotiatedVideo {
    let first = |codec: &str| {
        media
            .rtpmaps
            .iter()
            .find(|rtpmap| rtpmap.encoding == codec)
            .map(RtpMapInfo::from)
    };

    let mut video = NegotiatedVideo {
        main: first("h264"),
        red: first("red"),
        ulpfec: first("ulpfec"),
        use_rtx: false,
        use_rtx_fid: false,
        use_red_fec: false,
    };

    let Some(main) = &mut video.main else {
        log::debug!("no H264 offered, answering video inactive");
        return video;
    };

    let rtx = media.rtpmaps.iter().find(|rtpmap| {
        rtpmap.encoding == "rtx"
            && media
                .fmtp(rtpmap.payload)
                .is_some_and(|fmtp| fmtp.apt() == Some(main.ptype))
    });

    if let Some(rtx) = rtx {
        main.apt_ptype = Some(rtx.payload);
        video.use_rtx = true;
    }

    video.use_rtx_fid = !media.fid_groups.is_empty();

    log::debug!(
        "selected video codec {} pt={} rtx={:?} fid={}",
        main.codec,
        main.ptype,
        main.apt_ptype,
        video.use_rtx_fid
    );

    video
}

/// Creates answers to offers of browser peers
#[derive(Debug, Default, Clone)]
pub struct Negotiator {
    config: AnswerConfig,
}

impl Negotiator {
    pub fn new(config: AnswerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnswerConfig {
        &self.config
    }

    /// Create an answer to `offer` for the given agent (`chrome` or `firefox`)
    pub fn create_answer<C>(
        &self,
        offer: &MediaSdp,
        agent: &str,
        certificate: &C,
    ) -> Result<SdpAnswer, NegotiationError>
    where
        C: CertificateSource + ?Sized,
    {
        self.create_answer_with_rng(offer, agent, certificate, &mut rand::rng())
    }

    /// Same as [`Negotiator::create_answer`] drawing the ICE credentials from `rng`
    pub fn create_answer_with_rng<C, R>(
        &self,
        offer: &MediaSdp,
        agent: &str,
        certificate: &C,
        rng: &mut R,
    ) -> Result<SdpAnswer, NegotiationError>
    where
        C: CertificateSource + ?Sized,
        R: Rng + ?Sized,
    {
        let agent = agent.parse::<Agent>().inspect_err(|e| log::warn!("{e}"))?;

        let fingerprint = sha256_fingerprint(certificate)
            .inspect_err(|e| log::warn!("cannot create fingerprint, {e}"))?;

        let ice_ufrag = format!(
            "{}{}",
            self.config.ice_ufrag_prefix,
            Alphanumeric.sample_string(rng, self.config.ice_ufrag_len)
        );
        let ice_pwd = Alphanumeric.sample_string(rng, self.config.ice_pwd_len);

        log::debug!(
            "answering {agent} offer, audios={} videos={} applications={}",
            offer.audios.len(),
            offer.videos.len(),
            offer.applications.len()
        );

        Ok(SdpAnswer {
            config: self.config.clone(),
            agent,
            ice_ufrag,
            ice_pwd,
            fingerprint,
            audios: offer.audios.iter().map(select_audio).collect(),
            videos: offer.videos.iter().map(select_video).collect(),
            video_ssrcs: None,
            offer: offer.clone(),
        })
    }
}

/// Negotiated answer to an offer, printed with [`Display`](std::fmt::Display)
#[derive(Debug, Clone)]
pub struct SdpAnswer {
    pub(crate) config: AnswerConfig,
    pub(crate) agent: Agent,
    pub(crate) ice_ufrag: String,
    pub(crate) ice_pwd: String,
    pub(crate) fingerprint: Fingerprint,

    /// Parallel to `offer.audios`
    pub(crate) audios: Vec<NegotiatedAudio>,

    /// Parallel to `offer.videos`
    pub(crate) videos: Vec<NegotiatedVideo>,
    pub(crate) video_ssrcs: Option<(u32, u32)>,
    pub(crate) offer: MediaSdp,
}

impl SdpAnswer {
    pub fn agent(&self) -> Agent {
        self.agent
    }

    pub fn ice_ufrag(&self) -> &str {
        &self.ice_ufrag
    }

    pub fn ice_pwd(&self) -> &str {
        &self.ice_pwd
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    pub fn offer(&self) -> &MediaSdp {
        &self.offer
    }

    pub fn audios(&self) -> &[NegotiatedAudio] {
        &self.audios
    }

    pub fn videos(&self) -> &[NegotiatedVideo] {
        &self.videos
    }

    /// Codec name of the first audio section with a selected codec
    pub fn audio_codec(&self) -> Option<&str> {
        self.audios
            .iter()
            .find_map(|audio| audio.main.as_ref())
            .map(|main| main.codec.as_str())
    }

    /// Codec name of the first video section with a selected codec
    pub fn video_codec(&self) -> Option<&str> {
        self.videos
            .iter()
            .find_map(|video| video.main.as_ref())
            .map(|main| main.codec.as_str())
    }

    /// Announce the SSRCs of the sent video stream and its retransmissions
    ///
    /// Video SSRC lines are only written if both values are non-zero.
    pub fn set_video_ssrcs(&mut self, main: u32, rtx: u32) {
        self.video_ssrcs = Some((main, rtx)).filter(|&(main, rtx)| main > 0 && rtx > 0);
    }

    pub fn video_ssrcs(&self) -> Option<(u32, u32)> {
        self.video_ssrcs
    }
}
