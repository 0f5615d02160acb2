//! Bagfile container: recording and playback of time-stamped pub/sub
//! messages in a single append-structured file.
//!
//! ## What is a bagfile?
//!
//! A recording session captures every message published on a set of
//! topics, together with its stamp and the schema needed to decode it
//! later. The container keeps the payload stream strictly append-only
//! while it is being written, then rewrites a small trailer pointer on
//! close so readers can seek straight to any `(topic, time)` without
//! scanning the file.
//!
//! ```text
//! ┌─────────────┐
//! │ Publishers  │ (many threads)
//! └──────┬──────┘
//!        │ write(topic, time, msg)
//!        ▼
//! ┌─────────────────┐
//! │ Bag (write mode)│ definition + data records, in-memory index
//! └────────┬────────┘
//!          │ close(): index trailer + header rewrite
//!          ▼
//! ┌─────────────────┐
//! │ one .bag file   │
//! └────────┬────────┘
//!          │ open(Read): version gate, trailer load, def load
//!          ▼
//! ┌─────────────────┐
//! │ Bag (read mode) │──query──▶ View ──merge──▶ MessageInstance
//! └─────────────────┘                               │ instantiate::<T>()
//!                                                   ▼
//!                                             typed payload
//! ```
//!
//! ## Main components
//!
//! - [`Bag`]: the container handle; write, close, reopen, query.
//! - [`Query`] / [`TopicFilter`]: topic predicate plus closed time window.
//! - [`View`]: k-way merged, time-ordered stream over matched topics.
//! - [`MessageInstance`]: lazy message handle; payloads deserialize on
//!   demand through the `BagMessage` trait from `bagfile-core`.
//! - [`BagConfig`]: free-space gate thresholds and probe intervals.
//!
//! Format vocabulary (stamps, header codec, message traits, errors) lives
//! in the `bagfile-core` crate and is re-exported where it appears in this
//! crate's API.

pub mod bag;
pub mod config;
pub mod index;
pub mod query;
pub mod record;
pub mod view;

pub use bag::{Bag, BagMode};
pub use config::BagConfig;
pub use index::IndexEntry;
pub use query::{Query, TopicFilter};
pub use view::{MessageInstance, View, ViewIterator};
