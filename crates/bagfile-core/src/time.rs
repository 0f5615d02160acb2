//! Message time stamps.
//!
//! The middleware clock is a pair of 32-bit counters: whole seconds and
//! nanoseconds within the second. Stamps are supplied by the caller on
//! every write and are the sort key for index queries and merged playback,
//! so `Time` derives a total order over `(sec, nsec)`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(seconds, nanoseconds)` message stamp.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Time {
    /// Whole seconds.
    pub sec: u32,

    /// Nanoseconds within the second, always < 1_000_000_000 after `new`.
    pub nsec: u32,
}

/// One second, in nanoseconds.
const NSEC_PER_SEC: u32 = 1_000_000_000;

impl Time {
    /// The earliest representable stamp.
    pub const MIN: Time = Time { sec: 0, nsec: 0 };

    /// The latest representable stamp.
    pub const MAX: Time = Time {
        sec: u32::MAX,
        nsec: NSEC_PER_SEC - 1,
    };

    /// Create a stamp, folding excess nanoseconds into seconds.
    pub fn new(sec: u32, nsec: u32) -> Self {
        let sec = sec.wrapping_add(nsec / NSEC_PER_SEC);
        let nsec = nsec % NSEC_PER_SEC;
        Self { sec, nsec }
    }

    /// Create a stamp on a whole-second boundary.
    pub fn from_sec(sec: u32) -> Self {
        Self { sec, nsec: 0 }
    }

    /// The stamp as fractional seconds. Lossy above 2^53 ns; for display
    /// and diagnostics only.
    pub fn as_secs_f64(&self) -> f64 {
        self.sec as f64 + self.nsec as f64 / NSEC_PER_SEC as f64
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.sec, self.nsec)
    }
}
