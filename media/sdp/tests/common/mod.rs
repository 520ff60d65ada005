#![allow(dead_code)]

use bytesstr::BytesStr;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rtcore_sdp::{CertificateError, CertificateSource, Negotiator, SdpAnswer};
use sdp_types::MediaSdp;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Certificate source returning fixed bytes in place of a DER encoded certificate
pub(crate) struct FixedDer(pub(crate) &'static [u8]);

impl CertificateSource for FixedDer {
    fn certificate_der(&self) -> Result<Vec<u8>, CertificateError> {
        Ok(self.0.to_vec())
    }
}

/// SHA-256 of `abc`
pub(crate) const ABC_FINGERPRINT: &str = "sha-256 BA:78:16:BF:8F:01:CF:EA:41:41:40:DE:5D:AE:22:23:B0:03:61:A3:96:17:7A:9C:B4:10:FF:61:F2:00:15:AD";

pub(crate) const CHROME_OFFER: &str = concat!(
    "v=0\r\n",
    "o=- 4611731400430051336 2 IN IP4 127.0.0.1\r\n",
    "s=-\r\n",
    "t=0 0\r\n",
    "a=group:BUNDLE audio video data\r\n",
    "a=msid-semantic: WMS stream\r\n",
    "m=audio 9 UDP/TLS/RTP/SAVPF 111 0 8 126\r\n",
    "c=IN IP4 0.0.0.0\r\n",
    "a=candidate:1467250027 1 udp 2122260223 192.168.0.196 46243 typ host generation 0\r\n",
    "a=ice-ufrag:Oyef7uvBlwafI3hT\r\n",
    "a=ice-pwd:T0teqPLNQQOf+5W+ls+P2p16\r\n",
    "a=fingerprint:sha-256 49:66:12:17:0D:1C:91:AE:57:4C:C6:36:DD:D5:97:D2:7D:62:C9:9A:7F:B9:A3:F4:70:03:E7:43:91:73:23:5E\r\n",
    "a=setup:actpass\r\n",
    "a=mid:audio\r\n",
    "a=extmap:1 urn:ietf:params:rtp-hdrext:ssrc-audio-level\r\n",
    "a=extmap:3 http://www.webrtc.org/experiments/rtp-hdrext/abs-send-time\r\n",
    "a=sendrecv\r\n",
    "a=rtcp-mux\r\n",
    "a=rtpmap:111 opus/48000/2\r\n",
    "a=fmtp:111 minptime=10;useinbandfec=1\r\n",
    "a=rtpmap:0 PCMU/8000\r\n",
    "a=rtpmap:8 PCMA/8000\r\n",
    "a=rtpmap:126 telephone-event/8000\r\n",
    "a=ssrc:1001211536 cname:peer\r\n",
    "m=video 9 UDP/TLS/RTP/SAVPF 96 97 100 101 102 127\r\n",
    "c=IN IP4 0.0.0.0\r\n",
    "a=ice-ufrag:Oyef7uvBlwafI3hT\r\n",
    "a=ice-pwd:T0teqPLNQQOf+5W+ls+P2p16\r\n",
    "a=setup:actpass\r\n",
    "a=mid:video\r\n",
    "a=extmap:2 urn:ietf:params:rtp-hdrext:toffset\r\n",
    "a=extmap:3 http://www.webrtc.org/experiments/rtp-hdrext/abs-send-time\r\n",
    "a=extmap:4 urn:3gpp:video-orientation\r\n",
    "a=sendrecv\r\n",
    "a=rtcp-mux\r\n",
    "a=rtpmap:96 VP8/90000\r\n",
    "a=rtpmap:97 rtx/90000\r\n",
    "a=fmtp:97 apt=96\r\n",
    "a=rtpmap:100 H264/90000\r\n",
    "a=fmtp:100 level-asymmetry-allowed=1;packetization-mode=1;profile-level-id=42e01f\r\n",
    "a=rtpmap:101 rtx/90000\r\n",
    "a=fmtp:101 apt=100\r\n",
    "a=rtpmap:102 red/90000\r\n",
    "a=rtpmap:127 ulpfec/90000\r\n",
    "a=ssrc-group:FID 2231627014 632943048\r\n",
    "a=ssrc:2231627014 cname:peer\r\n",
    "a=ssrc:632943048 cname:peer\r\n",
    "m=application 9 DTLS/SCTP 5000\r\n",
    "c=IN IP4 0.0.0.0\r\n",
    "a=ice-ufrag:Oyef7uvBlwafI3hT\r\n",
    "a=ice-pwd:T0teqPLNQQOf+5W+ls+P2p16\r\n",
    "a=setup:actpass\r\n",
    "a=mid:data\r\n",
    "a=sctpmap:5000 webrtc-datachannel 1024\r\n",
);

pub(crate) const FIREFOX_OFFER: &str = concat!(
    "v=0\n",
    "o=mozilla...THIS_IS_SDPARTA-99.0 5545233349580584012 0 IN IP4 0.0.0.0\n",
    "s=-\n",
    "t=0 0\n",
    "a=fingerprint:sha-256 8B:87:09:8A:5D:C2:F3:33:EF:C5:B1:F6:84:3A:3D:D6:A3:E2:9C:17:4C:E7:46:3B:1B:CE:84:98:DD:8E:AF:7B\n",
    "a=group:BUNDLE 0 1 2\n",
    "a=msid-semantic:WMS *\n",
    "m=audio 9 UDP/TLS/RTP/SAVPF 109 0 8 101\n",
    "c=IN IP4 0.0.0.0\n",
    "a=sendonly\n",
    "a=extmap:1 urn:ietf:params:rtp-hdrext:ssrc-audio-level\n",
    "a=extmap:3 urn:ietf:params:rtp-hdrext:sdes:mid\n",
    "a=fmtp:109 maxplaybackrate=48000;stereo=1;useinbandfec=1\n",
    "a=fmtp:101 0-15\n",
    "a=ice-pwd:0e1a5a2e0e0e3f3a0a0e8a1f5b8d1c6e\n",
    "a=ice-ufrag:4a5d2b1e\n",
    "a=mid:0\n",
    "a=msid:{6a2f4b49-e6ab-4c4f-9d4b-1a8c2e3f4d5e} {b3c4d5e6-f7a8-4b9c-8d0e-1f2a3b4c5d6e}\n",
    "a=rtcp-mux\n",
    "a=rtpmap:109 opus/48000/2\n",
    "a=rtpmap:0 PCMU/8000\n",
    "a=rtpmap:8 PCMA/8000\n",
    "a=rtpmap:101 telephone-event/8000\n",
    "a=setup:actpass\n",
    "a=ssrc:2655508255 cname:{735484ea-4f6c-f74a-bd66-7425f8476c2e}\n",
    "m=video 9 UDP/TLS/RTP/SAVPF 120 124 126 127\n",
    "c=IN IP4 0.0.0.0\n",
    "a=recvonly\n",
    "a=extmap:4 http://www.webrtc.org/experiments/rtp-hdrext/abs-send-time\n",
    "a=extmap:5 urn:ietf:params:rtp-hdrext:toffset\n",
    "a=extmap:6 urn:ietf:params:rtp-hdrext:sdes:mid\n",
    "a=fmtp:126 profile-level-id=42e01f;level-asymmetry-allowed=1;packetization-mode=1\n",
    "a=fmtp:127 apt=126\n",
    "a=fmtp:124 apt=120\n",
    "a=ice-pwd:0e1a5a2e0e0e3f3a0a0e8a1f5b8d1c6e\n",
    "a=ice-ufrag:4a5d2b1e\n",
    "a=mid:1\n",
    "a=rtcp-mux\n",
    "a=rtpmap:120 VP8/90000\n",
    "a=rtpmap:124 rtx/90000\n",
    "a=rtpmap:126 H264/90000\n",
    "a=rtpmap:127 rtx/90000\n",
    "a=setup:actpass\n",
    "a=ssrc:3173515413 cname:{735484ea-4f6c-f74a-bd66-7425f8476c2e}\n",
    "a=ssrc:1294434011 cname:{735484ea-4f6c-f74a-bd66-7425f8476c2e}\n",
    "a=ssrc-group:FID 3173515413 1294434011\n",
    "m=application 9 UDP/DTLS/SCTP webrtc-datachannel\n",
    "c=IN IP4 0.0.0.0\n",
    "a=sendrecv\n",
    "a=ice-pwd:0e1a5a2e0e0e3f3a0a0e8a1f5b8d1c6e\n",
    "a=ice-ufrag:4a5d2b1e\n",
    "a=mid:2\n",
    "a=setup:actpass\n",
    "a=sctp-port:5000\n",
);

pub(crate) fn parse(text: &'static str) -> MediaSdp {
    MediaSdp::parse(&BytesStr::from_static(text)).unwrap()
}

/// Answer `offer` with the default configuration, a fixed certificate and a seeded rng
pub(crate) fn answer(offer: &MediaSdp, agent: &str) -> SdpAnswer {
    let mut rng = SmallRng::seed_from_u64(0x5eed);

    Negotiator::default()
        .create_answer_with_rng(offer, agent, &FixedDer(b"abc"), &mut rng)
        .unwrap()
}

/// Index of `line` in `lines`, panics if it is missing
pub(crate) fn position(lines: &[String], line: &str) -> usize {
    lines
        .iter()
        .position(|l| l == line)
        .unwrap_or_else(|| panic!("missing line {line:?} in\n{}", lines.join("\n")))
}

pub(crate) fn contains(lines: &[String], line: &str) -> bool {
    lines.iter().any(|l| l == line)
}
