//! Core types for the bagfile container format.
//!
//! A bagfile is a single-file, append-structured log of time-stamped,
//! typed pub/sub messages. This crate holds the format vocabulary shared
//! by writers, readers, and tooling:
//!
//! - [`constants`]: op codes, field names, fixed sizes
//! - [`time::Time`]: the 32+32-bit message stamp
//! - [`header`]: the `name=value` record-header codec and field validation
//! - [`message::BagMessage`]: the payload serialization contract
//! - [`topic::TopicInfo`]: immutable per-topic metadata
//! - [`error::Error`]: the shared error taxonomy
//!
//! The container itself (file layout, indexing, queries, playback) lives
//! in `bagfile-storage`.

pub mod constants;
pub mod error;
pub mod header;
pub mod message;
pub mod time;
pub mod topic;

pub use error::{Error, Result};
pub use header::FieldMap;
pub use message::{BagMessage, ConnectionHeader, RawMessage, ANY_MD5SUM};
pub use time::Time;
pub use topic::TopicInfo;
