use crate::Ssrc;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::collections::HashSet;
use std::hash::{BuildHasher, Hasher};

/// Allocated SSRCs are strictly greater than this value
pub const MIN_SSRC: u32 = 0x0000_FFFF;

/// Allocated SSRCs are strictly less than this value
pub const MAX_SSRC: u32 = 0xFFFF_FFF0;

/// Set of SSRCs in use by one peer
///
/// Every session that needs its own namespace creates its own registry, share it with an `Arc` otherwise.
/// All operations lock an internal mutex, so allocation never hands out the same value twice.
pub struct SsrcRegistry<R = StdRng> {
    inner: Mutex<Inner<R>>,
}

struct Inner<R> {
    held: HashSet<Ssrc, SsrcHasher>,
    rng: R,
}

impl SsrcRegistry<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for SsrcRegistry<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> SsrcRegistry<R> {
    /// Create a registry drawing its candidates from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self {
            inner: Mutex::new(Inner {
                held: HashSet::default(),
                rng,
            }),
        }
    }

    /// Draw a random SSRC in `(MIN_SSRC, MAX_SSRC)` that is not held yet and mark it as held
    pub fn allocate(&self) -> Ssrc {
        let mut inner = self.inner.lock();

        loop {
            let candidate = inner.rng.next_u32();

            if candidate <= MIN_SSRC || candidate >= MAX_SSRC {
                continue;
            }

            if inner.held.insert(Ssrc(candidate)) {
                log::trace!("allocated ssrc={candidate:#010x}");
                return Ssrc(candidate);
            }
        }
    }

    /// Mark an externally chosen SSRC as held, returns `false` if it already was
    pub fn register(&self, ssrc: Ssrc) -> bool {
        self.inner.lock().held.insert(ssrc)
    }

    /// Release an SSRC, returns `false` if it was not held
    pub fn release(&self, ssrc: Ssrc) -> bool {
        self.inner.lock().held.remove(&ssrc)
    }

    pub fn contains(&self, ssrc: Ssrc) -> bool {
        self.inner.lock().held.contains(&ssrc)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().held.is_empty()
    }
}

/// SSRCs are random already, use them as their own hash
#[derive(Default)]
struct SsrcHasher(u32);

impl BuildHasher for SsrcHasher {
    type Hasher = Self;

    fn build_hasher(&self) -> Self::Hasher {
        Self(0)
    }
}

impl Hasher for SsrcHasher {
    fn finish(&self) -> u64 {
        self.0.into()
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = self.0.rotate_left(8) ^ u32::from(b);
        }
    }

    fn write_u32(&mut self, i: u32) {
        self.0 = i;
    }
}
