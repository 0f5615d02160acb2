//! Per-topic time index.
//!
//! For every topic, the writer accumulates one [`IndexEntry`] per message
//! in write order; since a single topic's stamps are non-decreasing in
//! practice, the sequence is queryable by time range with binary search.
//! On close the entries are persisted verbatim as the body of the topic's
//! `INDEX_DATA` record, 16 bytes each:
//!
//! ```text
//! ┌──────────┬──────────┬──────────┐
//! │ sec      │ nsec     │ pos      │
//! │ (u32le)  │ (u32le)  │ (u64le)  │
//! └──────────┴──────────┴──────────┘
//! ```
//!
//! `pos` is the absolute offset of the frame to read for this message.
//! For a topic's first message that frame is its `MSG_DEF` record (the
//! definition is emitted immediately before the first data record, and the
//! position is captured before either); readers therefore skip past any
//! definition frames when resolving an entry.

use bagfile_core::constants::INDEX_ENTRY_SIZE;
use bagfile_core::{Error, Result, Time};
use bytes::BufMut;

/// One recorded message: its stamp and the file offset of its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    /// Caller-supplied message stamp.
    pub time: Time,

    /// Absolute file offset of the frame to read for this message.
    pub pos: u64,
}

impl IndexEntry {
    /// Append the 16-byte packed form to `buf`.
    pub fn encode(&self, buf: &mut Vec<u8>) {
        buf.put_u32_le(self.time.sec);
        buf.put_u32_le(self.time.nsec);
        buf.put_u64_le(self.pos);
    }

    /// Decode one packed entry.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < INDEX_ENTRY_SIZE {
            return Err(Error::MalformedRecord(format!(
                "index entry truncated: {} of {INDEX_ENTRY_SIZE} bytes",
                bytes.len()
            )));
        }
        let sec = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let nsec = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        let mut pos = [0u8; 8];
        pos.copy_from_slice(&bytes[8..16]);
        Ok(Self {
            time: Time { sec, nsec },
            pos: u64::from_le_bytes(pos),
        })
    }
}

/// The half-open slice `[lo, hi)` of `entries` whose stamps fall inside the
/// closed interval `[t0, t1]`.
///
/// `lo` is the first entry with `time >= t0`; `hi` is the first entry with
/// `time > t1`. Ties at the lower bound land on the earliest matching
/// entry, ties at the upper bound stay included.
pub fn range_within(entries: &[IndexEntry], t0: Time, t1: Time) -> (usize, usize) {
    let lo = entries.partition_point(|e| e.time < t0);
    let hi = entries.partition_point(|e| e.time <= t1);
    (lo, hi)
}
