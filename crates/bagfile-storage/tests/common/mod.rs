//! Shared fixtures for bagfile integration tests.

use bagfile_core::{BagMessage, ConnectionHeader, Error, Result};

/// A string payload serialized ROS-style: u32le length prefix + bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringMessage {
    pub data: String,
}

impl StringMessage {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl BagMessage for StringMessage {
    fn md5sum() -> &'static str {
        "992ce8a1687cec8c8bd883ec73ca41d1"
    }

    fn datatype() -> &'static str {
        "std_msgs/String"
    }

    fn definition() -> &'static str {
        "string data\n"
    }

    fn serialized_length(&self) -> u32 {
        4 + self.data.len() as u32
    }

    fn serialize(&self, buf: &mut [u8]) -> Result<()> {
        buf[..4].copy_from_slice(&(self.data.len() as u32).to_le_bytes());
        buf[4..4 + self.data.len()].copy_from_slice(self.data.as_bytes());
        Ok(())
    }

    fn deserialize(buf: &[u8], _connection: &ConnectionHeader) -> Result<Self> {
        if buf.len() < 4 {
            return Err(Error::MalformedRecord("string payload truncated".to_string()));
        }
        let len = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]) as usize;
        if buf.len() < 4 + len {
            return Err(Error::MalformedRecord("string payload truncated".to_string()));
        }
        let data = String::from_utf8(buf[4..4 + len].to_vec())
            .map_err(|_| Error::MalformedRecord("string payload is not UTF-8".to_string()))?;
        Ok(Self { data })
    }
}

/// A 4-byte counter payload with a different fingerprint than
/// [`StringMessage`], for type-mismatch tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountMessage {
    pub value: i32,
}

impl BagMessage for CountMessage {
    fn md5sum() -> &'static str {
        "da5909fbe378aeaf85e547e830cc1bb7"
    }

    fn datatype() -> &'static str {
        "std_msgs/Int32"
    }

    fn definition() -> &'static str {
        "int32 data\n"
    }

    fn serialized_length(&self) -> u32 {
        4
    }

    fn serialize(&self, buf: &mut [u8]) -> Result<()> {
        buf[..4].copy_from_slice(&self.value.to_le_bytes());
        Ok(())
    }

    fn deserialize(buf: &[u8], _connection: &ConnectionHeader) -> Result<Self> {
        if buf.len() < 4 {
            return Err(Error::MalformedRecord("counter payload truncated".to_string()));
        }
        Ok(Self {
            value: i32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
        })
    }
}
