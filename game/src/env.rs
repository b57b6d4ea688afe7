//! Execution-environment capabilities: wall clock and battle seeds
//!
//! Both are seams rather than hardwired calls so battles replay exactly
//! in tests and in offline verification. Production implementations are
//! std-only; the fixed variants work anywhere.

use triad_battle::AccountId;

/// Source of battle timestamps (seconds).
pub trait Clock {
    fn now(&self) -> u64;
}

/// Source of per-battle seeds.
///
/// A seed feeds one battle's RNG: the percentile draw first, then the
/// opponent derivation. Production implementations must make seeds
/// unpredictable across calls; tests pin them.
pub trait SeedSource {
    fn next_seed(&mut self, who: &AccountId, context: &[u8]) -> u64;
}

/// Always returns the same instant. For tests and replay harnesses.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

/// Always returns the same seed. For tests and replay harnesses.
#[derive(Debug, Clone, Copy)]
pub struct FixedSeed(pub u64);

impl SeedSource for FixedSeed {
    fn next_seed(&mut self, _who: &AccountId, _context: &[u8]) -> u64 {
        self.0
    }
}

#[cfg(feature = "std")]
pub use self::std_env::{EntropySeed, SystemClock};

#[cfg(feature = "std")]
mod std_env {
    use tiny_keccak::{Hasher, Keccak};

    use triad_battle::AccountId;

    use super::{Clock, SeedSource};

    /// Unix time from the system clock.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> u64 {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        }
    }

    /// OS entropy mixed with the caller and a per-call counter, so two
    /// draws in the same battle context can never replay each other.
    #[derive(Debug, Clone, Default)]
    pub struct EntropySeed {
        counter: u64,
    }

    impl EntropySeed {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl SeedSource for EntropySeed {
        fn next_seed(&mut self, who: &AccountId, context: &[u8]) -> u64 {
            self.counter = self.counter.wrapping_add(1);

            let mut entropy = [0u8; 16];
            // A failed entropy read degrades to counter-only mixing
            // rather than aborting the battle.
            let _ = getrandom::getrandom(&mut entropy);

            let mut hasher = Keccak::v256();
            hasher.update(&entropy);
            hasher.update(&who.0);
            hasher.update(&self.counter.to_le_bytes());
            hasher.update(context);
            let mut out = [0u8; 32];
            hasher.finalize(&mut out);

            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(&out[0..8]);
            u64::from_le_bytes(bytes)
        }
    }
}
