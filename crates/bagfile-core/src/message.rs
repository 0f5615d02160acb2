//! Message serialization contract.
//!
//! The container never interprets payload bytes itself; it drives a typed
//! payload through the [`BagMessage`] trait on write and on read. The
//! trait mirrors the middleware's message traits: a per-type schema
//! fingerprint, data-type name, and schema text, plus the serialize /
//! deserialize pair over raw byte slices.
//!
//! ## Connection headers
//!
//! Publishers attach a small string dictionary to every connection. On
//! write, the container inspects it for `latching` and `callerid` and
//! preserves both in the data record. On read, the container synthesizes
//! one carrying the record's `md5` and `type` so `deserialize` can check
//! or capture them.
//!
//! ## The `*` fingerprint
//!
//! A type whose `md5sum()` is `"*"` matches any record. [`RawMessage`] uses
//! this to read arbitrary payload bytes without a concrete type; it is a
//! read-side escape hatch and not meant to be written (its fingerprint is
//! not a valid 32-hex digest).

use std::collections::BTreeMap;

use crate::error::Result;

/// Fingerprint value that matches any record fingerprint.
pub const ANY_MD5SUM: &str = "*";

/// String dictionary attached to a publisher connection or synthesized
/// for a record being read.
pub type ConnectionHeader = BTreeMap<String, String>;

/// A payload the container can record and replay.
pub trait BagMessage: Sized {
    /// 32-hex-character schema fingerprint, or `"*"` to match anything.
    fn md5sum() -> &'static str;

    /// Fully-qualified data-type name.
    fn datatype() -> &'static str;

    /// Full schema text; may be empty when the publisher supplied none.
    fn definition() -> &'static str;

    /// Exact number of bytes `serialize` will produce.
    fn serialized_length(&self) -> u32;

    /// Write the payload into `buf`, which is at least `serialized_length`
    /// bytes long.
    fn serialize(&self, buf: &mut [u8]) -> Result<()>;

    /// Reconstruct a payload from `buf`. `connection` carries at least the
    /// record's `md5` and `type`.
    fn deserialize(buf: &[u8], connection: &ConnectionHeader) -> Result<Self>;
}

/// An untyped payload: the raw serialized bytes plus the record metadata
/// captured from the synthesized connection header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMessage {
    /// The record body, verbatim.
    pub data: Vec<u8>,

    /// Fingerprint of the record this was read from; empty when constructed
    /// directly.
    pub md5sum: String,

    /// Data-type name of the record this was read from; empty when
    /// constructed directly.
    pub datatype: String,
}

impl RawMessage {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            md5sum: String::new(),
            datatype: String::new(),
        }
    }
}

impl BagMessage for RawMessage {
    fn md5sum() -> &'static str {
        ANY_MD5SUM
    }

    fn datatype() -> &'static str {
        "*"
    }

    fn definition() -> &'static str {
        ""
    }

    fn serialized_length(&self) -> u32 {
        self.data.len() as u32
    }

    fn serialize(&self, buf: &mut [u8]) -> Result<()> {
        buf[..self.data.len()].copy_from_slice(&self.data);
        Ok(())
    }

    fn deserialize(buf: &[u8], connection: &ConnectionHeader) -> Result<Self> {
        Ok(Self {
            data: buf.to_vec(),
            md5sum: connection.get("md5").cloned().unwrap_or_default(),
            datatype: connection.get("type").cloned().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_message_matches_any() {
        assert_eq!(<RawMessage as BagMessage>::md5sum(), "*");
    }

    #[test]
    fn test_raw_message_serialize() {
        let msg = RawMessage::new(vec![1, 2, 3]);
        assert_eq!(msg.serialized_length(), 3);

        let mut buf = [0u8; 3];
        msg.serialize(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
    }

    #[test]
    fn test_raw_message_deserialize_captures_connection() {
        let mut connection = ConnectionHeader::new();
        connection.insert("md5".to_string(), "d41d8cd98f00b204e9800998ecf8427e".to_string());
        connection.insert("type".to_string(), "sensors/Imu".to_string());

        let msg = RawMessage::deserialize(&[9, 8, 7], &connection).unwrap();
        assert_eq!(msg.data, vec![9, 8, 7]);
        assert_eq!(msg.md5sum, "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(msg.datatype, "sensors/Imu");
    }

    #[test]
    fn test_raw_message_deserialize_empty_connection() {
        let msg = RawMessage::deserialize(&[], &ConnectionHeader::new()).unwrap();
        assert!(msg.data.is_empty());
        assert!(msg.md5sum.is_empty());
        assert!(msg.datatype.is_empty());
    }
}
