/// Fixed values written into every answer
#[derive(Debug, Clone)]
pub struct AnswerConfig {
    /// Username of the `o=` line
    pub origin_username: String,
    pub session_id: String,
    pub session_version: String,

    /// CNAME announced for all sent streams
    pub cname: String,

    pub audio_stream_label: String,
    pub audio_track_label: String,
    pub video_stream_label: String,
    pub video_track_label: String,

    /// Payload type of `telephone-event/8000`, always appended to the audio formats
    pub telephone_event_pt: u8,

    /// SSRC announced for the answering audio stream
    pub audio_ssrc: u32,

    /// The generated ICE username fragment is this prefix followed by `ice_ufrag_len` random characters
    pub ice_ufrag_prefix: String,
    pub ice_ufrag_len: usize,
    pub ice_pwd_len: usize,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            origin_username: "xrtc".into(),
            session_id: "123456789".into(),
            session_version: "2".into(),
            cname: "xrtc_endpoint".into(),
            audio_stream_label: "stream_audio_label".into(),
            audio_track_label: "track_audio_label".into(),
            video_stream_label: "stream_video_label".into(),
            video_track_label: "track_video_label".into(),
            telephone_event_pt: 126,
            audio_ssrc: 1,
            ice_ufrag_prefix: "xrtc".into(),
            ice_ufrag_len: 12,
            ice_pwd_len: 24,
        }
    }
}
