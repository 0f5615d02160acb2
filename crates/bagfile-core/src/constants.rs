//! Bagfile format constants.
//!
//! This module contains the record op codes, field names, and fixed sizes
//! of the bagfile container format. Keeping a single source of truth for
//! these prevents bugs from mismatches between the writer and reader
//! implementations.
//!
//! ## Format recap
//!
//! A bagfile is a version line followed by length-prefixed records:
//!
//! ```text
//! #ROSRECORD V1.2\n
//! ┌─────────────────────────────────────────────────────┐
//! │ FILE_HEADER record, padded to FILE_HEADER_LENGTH    │  rewritten on close
//! ├─────────────────────────────────────────────────────┤
//! │ MSG_DEF / MSG_DATA records, interleaved             │  append-only stream
//! ├─────────────────────────────────────────────────────┤
//! │ INDEX_DATA records, one per topic                   │  trailer
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Every record is `[u32le hlen][header][u32le dlen][body]`, and every
//! header is a dictionary of `name '=' u32le(len) value` fields. All
//! integers in the format are little-endian.

/// Version string written into the bagfile version line.
pub const VERSION: &str = "1.2";

/// Current format major version.
pub const VERSION_MAJOR: u32 = 1;

/// Current format minor version.
pub const VERSION_MINOR: u32 = 2;

/// Combined version number (`100 * major + minor`) used by the read gate.
pub const VERSION_COMBINED: u32 = 100 * VERSION_MAJOR + VERSION_MINOR;

/// Prefix of the version line; the full line is `#ROSRECORD V<major>.<minor>\n`.
pub const VERSION_LINE_PREFIX: &str = "#ROSRECORD V";

// Record op codes, carried as a one-byte value under the `op` field.

/// Schema definition record - precedes the first data record of its topic.
pub const OP_MSG_DEF: u8 = 0x01;
/// Message instance record - body is the serialized payload.
pub const OP_MSG_DATA: u8 = 0x02;
/// File header record - holds the trailer pointer, rewritten in place on close.
pub const OP_FILE_HEADER: u8 = 0x03;
/// Per-topic index record - body is a packed array of index entries.
pub const OP_INDEX_DATA: u8 = 0x04;

// Header field names (ASCII, case-sensitive).

/// Record kind discriminator (one byte).
pub const OP_FIELD_NAME: &str = "op";
/// Topic name.
pub const TOPIC_FIELD_NAME: &str = "topic";
/// Schema fingerprint (32 hex characters).
pub const MD5_FIELD_NAME: &str = "md5";
/// Data type name.
pub const TYPE_FIELD_NAME: &str = "type";
/// Full schema text (may be empty).
pub const DEF_FIELD_NAME: &str = "def";
/// Timestamp seconds (u32le).
pub const SEC_FIELD_NAME: &str = "sec";
/// Timestamp nanoseconds (u32le).
pub const NSEC_FIELD_NAME: &str = "nsec";
/// Absolute offset of the first INDEX_DATA record (u64le).
pub const INDEX_POS_FIELD_NAME: &str = "index_pos";
/// Index record layout version (u32le).
pub const VER_FIELD_NAME: &str = "ver";
/// Number of entries in an INDEX_DATA body (u32le).
pub const COUNT_FIELD_NAME: &str = "count";
/// Present with value `"1"` when the publisher connection was latched.
pub const LATCHING_FIELD_NAME: &str = "latching";
/// Publisher node name, recorded alongside `latching`.
pub const CALLERID_FIELD_NAME: &str = "callerid";

/// Separator between a field name and its length-prefixed value.
pub const FIELD_DELIM: u8 = b'=';

/// Total frame size of the padded FILE_HEADER record. Large enough for the
/// worst-case header encoding; the remainder is ASCII-space padding in the
/// body so the record can be rewritten in place without moving the stream.
pub const FILE_HEADER_LENGTH: u32 = 4096;

/// Layout version of INDEX_DATA record bodies.
pub const INDEX_VERSION: u32 = 0;

/// Packed size of one index entry: `u32le sec | u32le nsec | u64le pos`.
pub const INDEX_ENTRY_SIZE: usize = 16;
