use crate::SdpAnswer;
use crate::negotiator::{NegotiatedAudio, NegotiatedVideo, RtpMapInfo};
use bytesstr::BytesStr;
use sdp_types::{Direction, MediaAttr, MediaSdp, ParseSdpError};
use std::fmt;

/// Audio header extensions kept in the answer, matched as URI substrings
const AUDIO_EXTENSIONS: [&str; 1] = ["ssrc-audio-level"];

/// Video header extensions kept in the answer, matched as URI substrings
const VIDEO_EXTENSIONS: [&str; 4] = [
    "urn:ietf:params:rtp-hdrext:toffset",
    "rtp-hdrext/abs-send-time",
    "holmer-rmcat-transport-wide-cc-extensions",
    "ietf-avtext-framemarking",
];

const H264_FMTP: &str = "level-asymmetry-allowed=1;packetization-mode=1;profile-level-id=42e01f";

fn red_fec(video: &NegotiatedVideo) -> Option<(&RtpMapInfo, &RtpMapInfo)> {
    if !video.use_red_fec {
        return None;
    }

    Some((video.red.as_ref()?, video.ulpfec.as_ref()?))
}

struct AnswerWriter<'a> {
    answer: &'a SdpAnswer,
    body: Vec<String>,

    /// Stream labels for the `a=msid-semantic` line
    streams: Vec<&'a str>,
}

impl<'a> AnswerWriter<'a> {
    fn line(&mut self, line: impl Into<String>) {
        self.body.push(line.into());
    }

    fn stream(&mut self, label: &'a str) {
        if !self.streams.contains(&label) {
            self.streams.push(label);
        }
    }

    fn transport(&mut self) {
        let answer = self.answer;

        self.line("c=IN IP4 0.0.0.0");
        self.line(format!("a=ice-ufrag:{}", answer.ice_ufrag));
        self.line(format!("a=ice-pwd:{}", answer.ice_pwd));
        self.line(format!("a=fingerprint:{}", answer.fingerprint));
        self.line("a=setup:passive");
    }

    fn extmaps(&mut self, media: &MediaAttr, supported: &[&str]) {
        for extmap in &media.extmaps {
            if supported.iter().any(|uri| extmap.uri.contains(uri)) {
                self.line(format!("a=extmap:{} {}", extmap.id, extmap.uri));
            }
        }
    }

    /// `a=inactive` without a selected codec, the mirrored offer direction otherwise
    fn direction(&mut self, media: &MediaAttr, has_codec: bool) {
        let direction = if has_codec {
            media.direction.map(Direction::flipped)
        } else {
            Some(Direction::Inactive)
        };

        if let Some(direction) = direction {
            self.line(format!("a={direction}"));
        }
    }

    fn audio(&mut self, mid: &str, media: &MediaAttr, audio: &NegotiatedAudio) {
        let answer = self.answer;
        let config = &answer.config;

        let mut m_line = format!("m=audio 1 {}", media.proto);
        if let Some(main) = &audio.main {
            m_line.push_str(&format!(" {}", main.ptype));
        }
        m_line.push_str(&format!(" {}", config.telephone_event_pt));
        self.line(m_line);

        self.transport();
        self.extmaps(media, &AUDIO_EXTENSIONS);
        self.direction(media, audio.main.is_some());
        self.line(format!("a=mid:{mid}"));
        self.line("a=rtcp-mux");

        if let Some(main) = &audio.main {
            let mut rtpmap = format!("a=rtpmap:{} {}/{}", main.ptype, main.codec, main.frequency);
            if let Some(channels) = main.channels.filter(|&channels| channels > 0) {
                rtpmap.push_str(&format!("/{channels}"));
            }
            self.line(rtpmap);

            if main.codec == "opus" {
                self.line(format!(
                    "a=fmtp:{} minptime=20;useinbandfec=1;usedtx=0",
                    main.ptype
                ));
                self.line("a=maxptime:20");
            }
        }

        self.line(format!(
            "a=rtpmap:{} telephone-event/8000",
            config.telephone_event_pt
        ));

        let ssrc = config.audio_ssrc;
        let stream = config.audio_stream_label.as_str();
        let track = config.audio_track_label.as_str();

        self.stream(stream);
        self.line(format!("a=ssrc:{ssrc} cname:{}", config.cname));

        if answer.agent.is_unified_plan() {
            self.line(format!("a=msid:{stream} {track}"));
        } else {
            self.plan_b_labels(ssrc, stream, track);
        }
    }

    fn plan_b_labels(&mut self, ssrc: u32, stream: &str, track: &str) {
        self.line(format!("a=ssrc:{ssrc} msid:{stream} {track}"));
        self.line(format!("a=ssrc:{ssrc} mslabel:{stream}"));
        self.line(format!("a=ssrc:{ssrc} label:{track}"));
    }

    fn application(&mut self, mid: &str, media: &MediaAttr) {
        let mut m_line = format!("m=application 9 {}", media.proto);
        if let Some(format) = media.formats.first() {
            m_line.push_str(&format!(" {format}"));
        }
        self.line(m_line);

        self.transport();

        if let Some(direction) = media.direction {
            self.line(format!("a={}", direction.flipped()));
        }

        self.line(format!("a=mid:{mid}"));

        if let Some(sctp) = &media.sctp {
            self.line(format!("a={sctp}"));
        }
    }

    fn video(&mut self, mid: &str, media: &MediaAttr, video: &NegotiatedVideo) {
        let mut m_line = format!("m=video 1 {}", media.proto);
        if let Some(main) = &video.main {
            m_line.push_str(&format!(" {}", main.ptype));

            if let Some(rtx) = main.apt_ptype.filter(|_| video.use_rtx) {
                m_line.push_str(&format!(" {rtx}"));
            }
        }
        if let Some((red, ulpfec)) = red_fec(video) {
            m_line.push_str(&format!(" {} {}", red.ptype, ulpfec.ptype));
        }
        self.line(m_line);

        self.transport();
        self.extmaps(media, &VIDEO_EXTENSIONS);
        self.direction(media, video.main.is_some());
        self.line(format!("a=mid:{mid}"));
        self.line("a=rtcp-mux");

        if let Some(main) = &video.main {
            let pt = main.ptype;

            self.line(format!("a=rtpmap:{pt} {}/{}", main.codec, main.frequency));

            if video.use_rtx {
                self.line(format!("a=rtcp-fb:{pt} nack"));
            }
            self.line(format!("a=rtcp-fb:{pt} nack pli"));
            self.line(format!("a=rtcp-fb:{pt} goog-remb"));
            self.line(format!("a=fmtp:{pt} {H264_FMTP}"));

            if let Some(rtx) = main.apt_ptype.filter(|_| video.use_rtx) {
                self.line(format!("a=rtpmap:{rtx} rtx/90000"));
                self.line(format!("a=fmtp:{rtx} apt={pt}"));
            }
        }

        if let Some((red, ulpfec)) = red_fec(video) {
            self.line(format!("a=rtpmap:{} {}/{}", red.ptype, red.codec, red.frequency));
            self.line(format!(
                "a=rtpmap:{} {}/{}",
                ulpfec.ptype, ulpfec.codec, ulpfec.frequency
            ));
        }

        if let Some((main_ssrc, rtx_ssrc)) = self.answer.video_ssrcs {
            self.video_ssrcs(video, main_ssrc, rtx_ssrc);
        }
    }

    fn video_ssrcs(&mut self, video: &NegotiatedVideo, main: u32, rtx: u32) {
        let answer = self.answer;
        let config = &answer.config;
        let stream = config.video_stream_label.as_str();
        let track = config.video_track_label.as_str();
        let plan_b = !answer.agent.is_unified_plan();

        if video.use_rtx_fid {
            self.line(format!("a=ssrc-group:FID {main} {rtx}"));
        }

        self.line(format!("a=ssrc:{main} cname:{}", config.cname));
        if plan_b {
            self.plan_b_labels(main, stream, track);
        } else {
            self.line(format!("a=msid:{stream} {track}"));
        }

        if video.use_rtx_fid {
            self.line(format!("a=ssrc:{rtx} cname:{}", config.cname));
            if plan_b {
                self.plan_b_labels(rtx, stream, track);
            }
        }

        self.stream(stream);
    }

    fn write(mut self) -> Vec<String> {
        let answer = self.answer;
        let offer = &answer.offer;

        for mid in &offer.bundle {
            for (media, audio) in offer.audios.iter().zip(&answer.audios) {
                if media.is_mid(mid) {
                    self.audio(mid, media, audio);
                }
            }

            for media in &offer.applications {
                if media.is_mid(mid) {
                    self.application(mid, media);
                }
            }

            for (media, video) in offer.videos.iter().zip(&answer.videos) {
                if media.is_mid(mid) {
                    self.video(mid, media, video);
                }
            }
        }

        let config = &answer.config;

        let mut bundle = String::from("a=group:BUNDLE");
        for mid in &offer.bundle {
            bundle.push(' ');
            bundle.push_str(mid);
        }

        let mut semantics = String::from("a=msid-semantic:WMS");
        for stream in &self.streams {
            semantics.push(' ');
            semantics.push_str(stream);
        }

        let mut lines = vec![
            "v=0".to_owned(),
            format!(
                "o={} {} {} IN IP4 127.0.0.1",
                config.origin_username, config.session_id, config.session_version
            ),
            "s=-".to_owned(),
            "t=0 0".to_owned(),
            bundle,
            semantics,
        ];

        lines.append(&mut self.body);
        lines
    }
}

impl SdpAnswer {
    /// All lines of the answer without line separators
    pub fn lines(&self) -> Vec<String> {
        AnswerWriter {
            answer: self,
            body: vec![],
            streams: vec![],
        }
        .write()
    }

    /// Parse the generated answer
    pub fn description(&self) -> Result<MediaSdp, ParseSdpError> {
        MediaSdp::parse(&BytesStr::from(self.to_string()))
    }
}

/// Prints the answer as SDP document, each line terminated by CRLF
impl fmt::Display for SdpAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            write!(f, "{line}\r\n")?;
        }

        Ok(())
    }
}
