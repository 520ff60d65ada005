#![allow(dead_code)]

use bytesstr::BytesStr;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) const CHROME_OFFER: &str = concat!(
    "v=0\r\n",
    "o=- 4611731400430051336 2 IN IP4 127.0.0.1\r\n",
    "s=-\r\n",
    "t=0 0\r\n",
    "a=group:BUNDLE audio video data\r\n",
    "a=msid-semantic: WMS lgsCFqt9kN2fVKw5wXK4jnQ8BvgVCc9dP0dK\r\n",
    "m=audio 9 UDP/TLS/RTP/SAVPF 111 103 0 8 126\r\n",
    "c=IN IP4 0.0.0.0\r\n",
    "a=rtcp:9 IN IP4 0.0.0.0\r\n",
    "a=candidate:1467250027 1 udp 2122260223 192.168.0.196 46243 typ host generation 0\r\n",
    "a=candidate:435653019 1 tcp 1845501695 192.168.0.196 0 typ host tcptype active generation 0\r\n",
    "a=ice-ufrag:Oyef7uvBlwafI3hT\r\n",
    "a=ice-pwd:T0teqPLNQQOf+5W+ls+P2p16\r\n",
    "a=ice-options:trickle\r\n",
    "a=fingerprint:sha-256 49:66:12:17:0D:1C:91:AE:57:4C:C6:36:DD:D5:97:D2:7D:62:C9:9A:7F:B9:A3:F4:70:03:E7:43:91:73:23:5E\r\n",
    "a=setup:actpass\r\n",
    "a=mid:audio\r\n",
    "a=extmap:1 urn:ietf:params:rtp-hdrext:ssrc-audio-level\r\n",
    "a=extmap:3 http://www.webrtc.org/experiments/rtp-hdrext/abs-send-time\r\n",
    "a=sendrecv\r\n",
    "a=rtcp-mux\r\n",
    "a=rtpmap:111 opus/48000/2\r\n",
    "a=rtcp-fb:111 transport-cc\r\n",
    "a=fmtp:111 minptime=10;useinbandfec=1\r\n",
    "a=rtpmap:103 ISAC/16000\r\n",
    "a=rtpmap:0 PCMU/8000\r\n",
    "a=rtpmap:8 PCMA/8000\r\n",
    "a=rtpmap:126 telephone-event/8000\r\n",
    "a=ssrc:1001211536 cname:{2f0d5c2e-a7a8-4b3c-8f0f-9e7d6c5b4a39}\r\n",
    "a=ssrc:1001211536 msid:lgsCFqt9kN2fVKw5wXK4jnQ8BvgVCc9dP0dK 0b3e6fa5-3d4f-4d3a-8e8c-8c0d4b4c5d6e\r\n",
    "a=ssrc:1001211536 mslabel:lgsCFqt9kN2fVKw5wXK4jnQ8BvgVCc9dP0dK\r\n",
    "a=ssrc:1001211536 label:0b3e6fa5-3d4f-4d3a-8e8c-8c0d4b4c5d6e\r\n",
    "m=video 9 UDP/TLS/RTP/SAVPF 96 97 100 101 102 122 127\r\n",
    "c=IN IP4 0.0.0.0\r\n",
    "a=rtcp:9 IN IP4 0.0.0.0\r\n",
    "a=ice-ufrag:Oyef7uvBlwafI3hT\r\n",
    "a=ice-pwd:T0teqPLNQQOf+5W+ls+P2p16\r\n",
    "a=ice-options:trickle\r\n",
    "a=fingerprint:sha-256 49:66:12:17:0D:1C:91:AE:57:4C:C6:36:DD:D5:97:D2:7D:62:C9:9A:7F:B9:A3:F4:70:03:E7:43:91:73:23:5E\r\n",
    "a=setup:actpass\r\n",
    "a=mid:video\r\n",
    "a=extmap:2 urn:ietf:params:rtp-hdrext:toffset\r\n",
    "a=extmap:3 http://www.webrtc.org/experiments/rtp-hdrext/abs-send-time\r\n",
    "a=extmap:4 urn:3gpp:video-orientation\r\n",
    "a=extmap:5 http://www.ietf.org/id/draft-holmer-rmcat-transport-wide-cc-extensions-01\r\n",
    "a=sendrecv\r\n",
    "a=rtcp-mux\r\n",
    "a=rtcp-rsize\r\n",
    "a=rtpmap:96 VP8/90000\r\n",
    "a=rtcp-fb:96 nack\r\n",
    "a=rtcp-fb:96 nack pli\r\n",
    "a=rtpmap:97 rtx/90000\r\n",
    "a=fmtp:97 apt=96\r\n",
    "a=rtpmap:100 H264/90000\r\n",
    "a=rtcp-fb:100 goog-remb\r\n",
    "a=rtcp-fb:100 nack\r\n",
    "a=rtcp-fb:100 nack pli\r\n",
    "a=fmtp:100 level-asymmetry-allowed=1;packetization-mode=1;profile-level-id=42e01f\r\n",
    "a=rtpmap:101 rtx/90000\r\n",
    "a=fmtp:101 apt=100\r\n",
    "a=rtpmap:102 red/90000\r\n",
    "a=rtpmap:122 rtx/90000\r\n",
    "a=fmtp:122 apt=102\r\n",
    "a=rtpmap:127 ulpfec/90000\r\n",
    "a=ssrc-group:FID 2231627014 632943048\r\n",
    "a=ssrc:2231627014 cname:{2f0d5c2e-a7a8-4b3c-8f0f-9e7d6c5b4a39}\r\n",
    "a=ssrc:2231627014 msid:lgsCFqt9kN2fVKw5wXK4jnQ8BvgVCc9dP0dK 6e2ba2a2-45f7-4f0d-a2a7-9b8e6f0f4c3d\r\n",
    "a=ssrc:632943048 cname:{2f0d5c2e-a7a8-4b3c-8f0f-9e7d6c5b4a39}\r\n",
    "m=application 9 DTLS/SCTP 5000\r\n",
    "c=IN IP4 0.0.0.0\r\n",
    "a=ice-ufrag:Oyef7uvBlwafI3hT\r\n",
    "a=ice-pwd:T0teqPLNQQOf+5W+ls+P2p16\r\n",
    "a=ice-options:trickle\r\n",
    "a=fingerprint:sha-256 49:66:12:17:0D:1C:91:AE:57:4C:C6:36:DD:D5:97:D2:7D:62:C9:9A:7F:B9:A3:F4:70:03:E7:43:91:73:23:5E\r\n",
    "a=setup:actpass\r\n",
    "a=mid:data\r\n",
    "a=sctpmap:5000 webrtc-datachannel 1024\r\n",
);

pub(crate) const FIREFOX_OFFER: &str = concat!(
    "v=0\n",
    "o=mozilla...THIS_IS_SDPARTA-99.0 5545233349580584012 0 IN IP4 0.0.0.0\n",
    "s=-\n",
    "t=0 0\n",
    "a=sendrecv\n",
    "a=fingerprint:sha-256 8B:87:09:8A:5D:C2:F3:33:EF:C5:B1:F6:84:3A:3D:D6:A3:E2:9C:17:4C:E7:46:3B:1B:CE:84:98:DD:8E:AF:7B\n",
    "a=group:BUNDLE 0 1 2\n",
    "a=ice-options:trickle\n",
    "a=msid-semantic:WMS *\n",
    "m=audio 9 UDP/TLS/RTP/SAVPF 109 9 0 8 101\n",
    "c=IN IP4 0.0.0.0\n",
    "a=sendrecv\n",
    "a=extmap:1 urn:ietf:params:rtp-hdrext:ssrc-audio-level\n",
    "a=extmap:2/recvonly urn:ietf:params:rtp-hdrext:csrc-audio-level\n",
    "a=extmap:3 urn:ietf:params:rtp-hdrext:sdes:mid\n",
    "a=fmtp:109 maxplaybackrate=48000;stereo=1;useinbandfec=1\n",
    "a=fmtp:101 0-15\n",
    "a=ice-pwd:0e1a5a2e0e0e3f3a0a0e8a1f5b8d1c6e\n",
    "a=ice-ufrag:4a5d2b1e\n",
    "a=mid:0\n",
    "a=msid:{6a2f4b49-e6ab-4c4f-9d4b-1a8c2e3f4d5e} {b3c4d5e6-f7a8-4b9c-8d0e-1f2a3b4c5d6e}\n",
    "a=rtcp-mux\n",
    "a=rtpmap:109 opus/48000/2\n",
    "a=rtpmap:9 G722/8000/1\n",
    "a=rtpmap:0 PCMU/8000\n",
    "a=rtpmap:8 PCMA/8000\n",
    "a=rtpmap:101 telephone-event/8000\n",
    "a=setup:actpass\n",
    "a=ssrc:2655508255 cname:{735484ea-4f6c-f74a-bd66-7425f8476c2e}\n",
    "m=video 9 UDP/TLS/RTP/SAVPF 120 124 126 127\n",
    "c=IN IP4 0.0.0.0\n",
    "a=sendrecv\n",
    "a=extmap:3 urn:ietf:params:rtp-hdrext:sdes:mid\n",
    "a=extmap:4 http://www.webrtc.org/experiments/rtp-hdrext/abs-send-time\n",
    "a=extmap:5 urn:ietf:params:rtp-hdrext:toffset\n",
    "a=fmtp:126 profile-level-id=42e01f;level-asymmetry-allowed=1;packetization-mode=1\n",
    "a=fmtp:127 apt=126\n",
    "a=fmtp:120 max-fs=12288;max-fr=60\n",
    "a=fmtp:124 apt=120\n",
    "a=ice-pwd:0e1a5a2e0e0e3f3a0a0e8a1f5b8d1c6e\n",
    "a=ice-ufrag:4a5d2b1e\n",
    "a=mid:1\n",
    "a=msid:{6a2f4b49-e6ab-4c4f-9d4b-1a8c2e3f4d5e} {1c2d3e4f-5a6b-4c7d-8e9f-0a1b2c3d4e5f}\n",
    "a=rtcp-fb:120 nack\n",
    "a=rtcp-fb:120 nack pli\n",
    "a=rtcp-fb:120 ccm fir\n",
    "a=rtcp-fb:126 nack\n",
    "a=rtcp-fb:126 nack pli\n",
    "a=rtcp-fb:* transport-cc\n",
    "a=rtcp-mux\n",
    "a=rtcp-rsize\n",
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
    "a=max-message-size:1073741823\n",
);

pub(crate) fn sdp_text(text: &'static str) -> BytesStr {
    BytesStr::from_static(text)
}
