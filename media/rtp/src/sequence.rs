use std::cmp::Ordering;

/// 16 bit RTP sequence number
///
/// Comparisons wrap around: `a` is newer than `b` when the forward distance `a - b` (mod 2^16) is non zero and
/// smaller than half the number space. The exact half (`0x8000`) is never considered newer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceNumber(pub u16);

impl SequenceNumber {
    const HALF: u16 = 0x8000;

    /// Returns `true` if `self` was sent after `prev`
    pub fn is_newer_than(self, prev: Self) -> bool {
        let diff = self.0.wrapping_sub(prev.0);
        diff != 0 && diff < Self::HALF
    }

    /// Returns the newer one of both sequence numbers
    pub fn latest(self, prev: Self) -> Self {
        if self.is_newer_than(prev) { self } else { prev }
    }

    /// Wraparound aware ordering, `Greater` if `self` is newer than `other`
    pub fn compare(self, other: Self) -> Ordering {
        match self.0.wrapping_sub(other.0) {
            0 => Ordering::Equal,
            diff if diff < Self::HALF => Ordering::Greater,
            _ => Ordering::Less,
        }
    }

    /// Forward distance from `prev` to `self` in `[0, 65536)`
    pub fn forward_distance(self, prev: Self) -> u16 {
        self.0.wrapping_sub(prev.0)
    }

    /// Shortest distance between both sequence numbers in either direction, in `[0, 32768]`
    pub fn abs_distance(self, other: Self) -> u16 {
        let diff = self.0.wrapping_sub(other.0);

        if diff <= Self::HALF {
            diff
        } else {
            diff.wrapping_neg()
        }
    }

    /// Returns `true` if `self` lies inside the window `[start, start + size)`, which may wrap around
    pub fn in_range(self, start: Self, size: u16) -> bool {
        let n = u32::from(self.0);
        let s = u32::from(start.0);
        let e = s + u32::from(size);

        (s <= n && n < e) || (s <= n + 0x1_0000 && n + 0x1_0000 < e)
    }
}

/// 32 bit RTP timestamp, compared with the same wraparound rule as [`SequenceNumber`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RtpTimestamp(pub u32);

impl RtpTimestamp {
    const HALF: u32 = 0x8000_0000;

    pub fn is_newer_than(self, prev: Self) -> bool {
        let diff = self.0.wrapping_sub(prev.0);
        diff != 0 && diff < Self::HALF
    }

    pub fn latest(self, prev: Self) -> Self {
        if self.is_newer_than(prev) { self } else { prev }
    }

    pub fn compare(self, other: Self) -> Ordering {
        match self.0.wrapping_sub(other.0) {
            0 => Ordering::Equal,
            diff if diff < Self::HALF => Ordering::Greater,
            _ => Ordering::Less,
        }
    }

    pub fn forward_distance(self, prev: Self) -> u32 {
        self.0.wrapping_sub(prev.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExtendedSequenceNumber(pub u64);

impl ExtendedSequenceNumber {
    pub fn increase_one(&mut self) -> SequenceNumber {
        self.0 += 1;
        self.truncated()
    }

    pub fn truncated(&self) -> SequenceNumber {
        SequenceNumber((self.0 & u64::from(u16::MAX)) as u16)
    }

    pub fn rollover_count(&self) -> u64 {
        self.0 >> 16
    }

    /// Extend `seq` to the 64 bit counter value closest to `self`
    pub fn guess_extended(&self, seq: SequenceNumber) -> ExtendedSequenceNumber {
        ExtendedSequenceNumber(unwrap_counter(self.0, u64::from(seq.0), 1 << 16))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExtendedRtpTimestamp(pub u64);

impl ExtendedRtpTimestamp {
    pub fn truncated(&self) -> RtpTimestamp {
        RtpTimestamp(self.0 as u32)
    }

    pub fn rollover_count(&self) -> u64 {
        self.0 >> 32
    }

    pub fn guess_extended(&self, ts: RtpTimestamp) -> ExtendedRtpTimestamp {
        ExtendedRtpTimestamp(unwrap_counter(self.0, u64::from(ts.0), 1 << 32))
    }
}

/// Pick the candidate `cycle * modulus + got` (previous, same or next cycle of `reference`) nearest to `reference`
fn unwrap_counter(reference: u64, got: u64, modulus: u64) -> u64 {
    let cycle = reference / modulus;

    [cycle.checked_sub(1), Some(cycle), cycle.checked_add(1)]
        .into_iter()
        .flatten()
        .filter_map(|c| c.checked_mul(modulus)?.checked_add(got))
        .min_by_key(|candidate| candidate.abs_diff(reference))
        .unwrap_or(got)
}
