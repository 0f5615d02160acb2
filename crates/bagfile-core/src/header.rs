//! Record header codec.
//!
//! Every record in a bagfile carries a header that is a dictionary of
//! fields, each encoded as:
//!
//! ```text
//! ┌────────────┬───────┬─────────────┬──────────────┐
//! │ name bytes │ '='   │ value len   │ value bytes  │
//! │ (ASCII)    │(1 byte)│ (u32le)    │ (opaque)     │
//! └────────────┴───────┴─────────────┴──────────────┘
//! ```
//!
//! Field order is not significant and duplicate names are rejected. Names
//! never contain `=`, so the first `=` in a field terminates the name.
//! Values are opaque byte strings; integer-valued fields store the
//! little-endian bytes of the integer.
//!
//! Decoding failures surface as `MalformedHeader`. Presence and size
//! validation of individual fields goes through [`check_field`], whose
//! `required = false` form reports absence as `Ok(None)` instead of an
//! error.

use bytes::BufMut;
use std::collections::BTreeMap;

use crate::constants::{FIELD_DELIM, OP_FIELD_NAME};
use crate::error::{Error, Result};

/// A decoded record header: field name to opaque value.
///
/// An ordered map keeps the encoded byte stream deterministic, which the
/// in-place file-header rewrite relies on.
pub type FieldMap = BTreeMap<String, Vec<u8>>;

/// Append the encoded form of `fields` to `buf`.
///
/// `buf` is a reusable scratch buffer owned by the caller; it is not
/// cleared here.
pub fn encode_fields(fields: &FieldMap, buf: &mut Vec<u8>) {
    for (name, value) in fields {
        buf.put_slice(name.as_bytes());
        buf.put_u8(FIELD_DELIM);
        buf.put_u32_le(value.len() as u32);
        buf.put_slice(value);
    }
}

/// Decode a header byte region into a [`FieldMap`].
pub fn decode_fields(mut bytes: &[u8]) -> Result<FieldMap> {
    let mut fields = FieldMap::new();

    while !bytes.is_empty() {
        let delim = bytes
            .iter()
            .position(|&b| b == FIELD_DELIM)
            .ok_or_else(|| Error::MalformedHeader("field without '=' separator".to_string()))?;

        let name = std::str::from_utf8(&bytes[..delim])
            .map_err(|_| Error::MalformedHeader("field name is not ASCII".to_string()))?
            .to_string();

        let rest = &bytes[delim + 1..];
        if rest.len() < 4 {
            return Err(Error::MalformedHeader(format!(
                "field {name} truncated before value length"
            )));
        }
        let value_len = u32::from_le_bytes([rest[0], rest[1], rest[2], rest[3]]) as usize;

        let rest = &rest[4..];
        if rest.len() < value_len {
            return Err(Error::MalformedHeader(format!(
                "field {name} truncated: expected {value_len} value bytes, found {}",
                rest.len()
            )));
        }

        if fields.insert(name.clone(), rest[..value_len].to_vec()).is_some() {
            return Err(Error::MalformedHeader(format!("duplicate field {name}")));
        }

        bytes = &rest[value_len..];
    }

    Ok(fields)
}

/// Validate presence and size of one field.
///
/// Returns the value when present and within `[min_len, max_len]`.
/// A missing optional field is `Ok(None)`; a missing required field is
/// `MissingField`; a present field outside the size bounds is
/// `WrongFieldSize` regardless of `required`.
pub fn check_field<'a>(
    fields: &'a FieldMap,
    name: &str,
    min_len: usize,
    max_len: usize,
    required: bool,
) -> Result<Option<&'a [u8]>> {
    match fields.get(name) {
        None if required => Err(Error::MissingField(name.to_string())),
        None => Ok(None),
        Some(value) if value.len() < min_len || value.len() > max_len => {
            Err(Error::WrongFieldSize {
                field: name.to_string(),
                len: value.len(),
            })
        }
        Some(value) => Ok(Some(value.as_slice())),
    }
}

/// The one-byte record kind discriminator.
pub fn read_op(fields: &FieldMap) -> Result<u8> {
    let value = check_field(fields, OP_FIELD_NAME, 1, 1, true)?.expect("required");
    Ok(value[0])
}

/// A required 4-byte little-endian field.
pub fn read_u32(fields: &FieldMap, name: &str) -> Result<u32> {
    let value = check_field(fields, name, 4, 4, true)?.expect("required");
    Ok(u32::from_le_bytes([value[0], value[1], value[2], value[3]]))
}

/// A required 8-byte little-endian field.
pub fn read_u64(fields: &FieldMap, name: &str) -> Result<u64> {
    let value = check_field(fields, name, 8, 8, true)?.expect("required");
    let mut raw = [0u8; 8];
    raw.copy_from_slice(value);
    Ok(u64::from_le_bytes(raw))
}

/// A required string-valued field.
pub fn read_string(fields: &FieldMap, name: &str, min_len: usize) -> Result<String> {
    let value = check_field(fields, name, min_len, u32::MAX as usize, true)?.expect("required");
    String::from_utf8(value.to_vec())
        .map_err(|_| Error::MalformedHeader(format!("field {name} is not valid UTF-8")))
}
