#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use rtcore_rtp::{RtpHeader, RtpTimestamp, SequenceNumber, Ssrc};

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5EED)
}

pub(crate) fn opus_header(seq: u16) -> RtpHeader {
    RtpHeader {
        version: 2,
        payload_type: 111,
        sequence_number: SequenceNumber(seq),
        timestamp: RtpTimestamp(u32::from(seq) * 960),
        ssrc: Ssrc(0x1234_5678),
        ..Default::default()
    }
}
