use crate::RtpTimestamp;
use std::ops::Sub;
use std::time::SystemTime;
use time::OffsetDateTime;

/// Seconds between 1900-01-01 (NTP epoch) and 1970-01-01 (UNIX epoch)
pub const NTP_UNIX_EPOCH_OFFSET: u64 = 2_208_988_800;

const FRACTIONS_PER_SECOND: u64 = 1 << 32;

/// 64 bit NTP timestamp
///
/// Upper 32 bits are whole seconds since 1900, lower 32 bits are fractions of a second in units of 1/2^32.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NtpTime(u64);

impl NtpTime {
    pub const ZERO: Self = Self(0);

    pub fn new(seconds: u32, fractions: u32) -> Self {
        Self((u64::from(seconds) << 32) | u64::from(fractions))
    }

    pub fn now() -> Self {
        Self::from_wall_clock(OffsetDateTime::now_utc())
    }

    /// Convert a wall clock time, the sub second part is rounded to the nearest fraction
    ///
    /// Times outside the NTP era 0 wrap around the 32 bit seconds field.
    pub fn from_wall_clock(time: OffsetDateTime) -> Self {
        let seconds = time
            .unix_timestamp()
            .wrapping_add(NTP_UNIX_EPOCH_OFFSET as i64) as u32;

        let nanos = u64::from(time.nanosecond());
        let fractions = ((nanos << 32) + 500_000_000) / 1_000_000_000;

        Self::new(seconds, fractions as u32)
    }

    /// Milliseconds since 1900 to NTP time, rounding the sub second part to the nearest fraction
    pub fn from_millis(millis: u64) -> Self {
        let seconds = millis / 1000;
        let fractions = ((millis % 1000) * FRACTIONS_PER_SECOND + 500) / 1000;

        Self::new(seconds as u32, fractions as u32)
    }

    /// Expand the 32 bit compact form (16 bit seconds, 16 bit fractions) as used in RTCP
    pub fn from_compact(compact: u32) -> Self {
        Self(u64::from(compact) << 16)
    }

    pub fn from_fixed_u64(fixed: u64) -> Self {
        Self(fixed)
    }

    pub fn to_fixed_u64(self) -> u64 {
        self.0
    }

    pub fn seconds(self) -> u32 {
        (self.0 >> 32) as u32
    }

    pub fn fractions(self) -> u32 {
        self.0 as u32
    }

    /// Milliseconds since 1900, fractions are rounded to the nearest millisecond
    pub fn to_millis(self) -> i64 {
        let frac_ms = (u64::from(self.fractions()) * 1000 + (FRACTIONS_PER_SECOND / 2)) >> 32;

        1000 * i64::from(self.seconds()) + frac_ms as i64
    }

    /// Convert to RTP timestamp units of the given clock rate
    ///
    /// Only the lower 32 bits are kept, the result wraps like any RTP timestamp.
    pub fn to_rtp_timestamp(self, clock_rate: u32) -> RtpTimestamp {
        let rate = u64::from(clock_rate);
        let whole = u64::from(self.seconds()) * rate;
        let partial = (u64::from(self.fractions()) * rate) >> 32;

        RtpTimestamp(whole.wrapping_add(partial) as u32)
    }

    /// Middle 32 bits: lower 16 bits of the seconds and upper 16 bits of the fractions
    pub fn compact(self) -> u32 {
        (self.0 >> 16) as u32
    }

    pub fn as_seconds_f64(self) -> f64 {
        f64::from(self.seconds()) + f64::from(self.fractions()) / FRACTIONS_PER_SECOND as f64
    }
}

impl From<SystemTime> for NtpTime {
    fn from(time: SystemTime) -> Self {
        Self::from_wall_clock(OffsetDateTime::from(time))
    }
}

impl Sub for NtpTime {
    type Output = time::Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        let diff = i128::from(self.0) - i128::from(rhs.0);
        let nanos = (diff * 1_000_000_000) >> 32;

        time::Duration::nanoseconds(nanos as i64)
    }
}

/// Current wall clock time as milliseconds since 1900
pub fn current_ntp_millis() -> i64 {
    let now = OffsetDateTime::now_utc();
    let unix_millis = (now.unix_timestamp_nanos() / 1_000_000) as i64;

    unix_millis + 1000 * NTP_UNIX_EPOCH_OFFSET as i64
}

/// Convert a compact NTP interval (e.g. a RTT derived from RTCP reports) to milliseconds
///
/// Intervals with the top bit set come from a non monotonic clock and are reported as 1ms, as is
/// anything rounding to less than 1ms.
pub fn compact_interval_to_millis(compact: u32) -> i64 {
    if compact & 0x8000_0000 != 0 {
        return 1;
    }

    let millis = (i64::from(compact) * 1000 + (1 << 15)) / (1 << 16);

    millis.max(1)
}
