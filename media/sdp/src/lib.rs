//! SDP answers for browser peers
//!
//! [`Negotiator::create_answer`] selects the codecs of a parsed offer (see [`sdp_types::MediaSdp`])
//! and returns a [`SdpAnswer`] which prints as the answer document. Chrome receives a plan-b
//! answer, Firefox a unified-plan answer.
//!
//! [`replace_candidates`] and [`extract_candidates`] rewrite the ICE candidates of an existing
//! document, e.g. to add the candidates of a relay before handing the answer to the browser.

mod agent;
mod answer;
mod candidates;
mod certificate;
mod config;
mod negotiator;

pub use agent::{Agent, UnsupportedAgent};
pub use candidates::{Candidate, extract_candidates, parse_candidate_lines, replace_candidates};
pub use certificate::{
    CertificateError, CertificateSource, DtlsCertificate, PemFile, sha256_fingerprint,
};
pub use config::AnswerConfig;
pub use negotiator::{
    NegotiatedAudio, NegotiatedVideo, NegotiationError, Negotiator, RtpMapInfo, SdpAnswer,
};
