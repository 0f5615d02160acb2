//! Record framing.
//!
//! Every record in a bagfile is one frame:
//!
//! ```text
//! ┌──────────────┬──────────────┬──────────────┬──────────────┐
//! │ header len   │ header bytes │ data len     │ data bytes   │
//! │ (u32le)      │ (field dict) │ (u32le)      │ (opaque)     │
//! └──────────────┴──────────────┴──────────────┴──────────────┘
//! ```
//!
//! [`RecordWriter`] appends frames and tracks the absolute write position,
//! which doubles as the index position of every record it emits.
//! [`RecordReader`] reads frames and leaves the cursor at the first body
//! byte, so callers choose between [`RecordReader::read_body`] and
//! [`RecordReader::skip_body`].
//!
//! Both sides own reusable scratch buffers that grow by doubling and are
//! never released; a long recording session settles into zero allocation
//! per record.
//!
//! A clean end of file at a frame boundary reads as `Ok(None)`; running
//! out of bytes inside a frame is `UnexpectedEof`.

use std::io::{Read, Seek, SeekFrom, Write};

use bagfile_core::header::{decode_fields, encode_fields, FieldMap};
use bagfile_core::{Error, Result};

/// Grow `buf` so at least `needed` bytes are addressable, doubling from the
/// current size. Never shrinks.
pub(crate) fn grow_to(buf: &mut Vec<u8>, needed: usize) {
    if buf.len() >= needed {
        return;
    }
    let mut size = if buf.is_empty() { needed } else { buf.len() };
    while size < needed {
        size *= 2;
    }
    buf.resize(size, 0);
}

/// Position-tracked frame writer.
pub struct RecordWriter<W: Write + Seek> {
    stream: W,
    pos: u64,
    encode_buf: Vec<u8>,
}

impl<W: Write + Seek> RecordWriter<W> {
    pub fn new(stream: W) -> Self {
        Self {
            stream,
            pos: 0,
            encode_buf: Vec::new(),
        }
    }

    /// Bytes written since the start of the file.
    pub fn pos(&self) -> u64 {
        self.pos
    }

    /// Append raw bytes, advancing the tracked position.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.stream.write_all(bytes)?;
        self.pos += bytes.len() as u64;
        Ok(())
    }

    /// Append a complete frame: encoded header, then `data` as the body.
    pub fn write_frame(&mut self, fields: &FieldMap, data: &[u8]) -> Result<()> {
        self.write_frame_header(fields, data.len() as u32)?;
        self.write_bytes(data)
    }

    /// Append the header and data-length prefix of a frame whose body the
    /// caller streams separately (used for index records).
    pub fn write_frame_header(&mut self, fields: &FieldMap, data_len: u32) -> Result<()> {
        self.encode_buf.clear();
        encode_fields(fields, &mut self.encode_buf);

        let header_len = self.encode_buf.len() as u32;
        self.stream.write_all(&header_len.to_le_bytes())?;
        self.stream.write_all(&self.encode_buf)?;
        self.stream.write_all(&data_len.to_le_bytes())?;
        self.pos += 4 + header_len as u64 + 4;
        Ok(())
    }

    /// Move the write cursor; the tracked position follows.
    pub fn seek(&mut self, pos: u64) -> Result<()> {
        self.stream.seek(SeekFrom::Start(pos))?;
        self.pos = pos;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stream.flush()?;
        Ok(())
    }

    /// Consume the writer, returning the underlying stream.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.stream
    }
}

/// Frame reader with shared body buffer.
pub struct RecordReader<R: Read + Seek> {
    stream: R,
    header_buf: Vec<u8>,
    data_buf: Vec<u8>,
}

impl<R: Read + Seek> RecordReader<R> {
    pub fn new(stream: R) -> Self {
        Self {
            stream,
            header_buf: Vec::new(),
            data_buf: Vec::new(),
        }
    }

    /// Read the text line at the current cursor, without the trailing
    /// newline. Used once per file, for the version line.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            match self.stream.read(&mut byte)? {
                0 => break,
                _ if byte[0] == b'\n' => break,
                _ => line.push(byte[0]),
            }
        }
        String::from_utf8(line)
            .map_err(|_| Error::MalformedRecord("version line is not ASCII".to_string()))
    }

    /// Read the next frame's header and data length. The cursor is left at
    /// the first body byte. Returns `None` on a clean end of file.
    pub fn read_frame(&mut self) -> Result<Option<(FieldMap, u32)>> {
        let mut prefix = [0u8; 4];
        if !self.read_exact_or_eof(&mut prefix)? {
            return Ok(None);
        }
        let header_len = u32::from_le_bytes(prefix) as usize;

        grow_to(&mut self.header_buf, header_len);
        self.stream
            .read_exact(&mut self.header_buf[..header_len])
            .map_err(Error::from_read)?;
        let fields = decode_fields(&self.header_buf[..header_len])?;

        self.stream
            .read_exact(&mut prefix)
            .map_err(Error::from_read)?;
        let data_len = u32::from_le_bytes(prefix);

        Ok(Some((fields, data_len)))
    }

    /// Read exactly `len` body bytes into the shared buffer.
    pub fn read_body(&mut self, len: u32) -> Result<&[u8]> {
        let len = len as usize;
        grow_to(&mut self.data_buf, len);
        self.stream
            .read_exact(&mut self.data_buf[..len])
            .map_err(Error::from_read)?;
        Ok(&self.data_buf[..len])
    }

    /// Advance the cursor past `len` body bytes.
    pub fn skip_body(&mut self, len: u32) -> Result<()> {
        self.stream.seek(SeekFrom::Current(len as i64))?;
        Ok(())
    }

    /// Move the read cursor to an absolute offset.
    pub fn seek(&mut self, pos: u64) -> Result<()> {
        self.stream.seek(SeekFrom::Start(pos))?;
        Ok(())
    }

    /// Fill `buf`, distinguishing a clean EOF before the first byte (false)
    /// from truncation after it (`UnexpectedEof`).
    fn read_exact_or_eof(&mut self, buf: &mut [u8]) -> Result<bool> {
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.stream.read(&mut buf[filled..])?;
            if n == 0 {
                if filled == 0 {
                    return Ok(false);
                }
                return Err(Error::UnexpectedEof);
            }
            filled += n;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn fields_with(entries: &[(&str, &[u8])]) -> FieldMap {
        let mut fields = FieldMap::new();
        for (name, value) in entries {
            fields.insert(name.to_string(), value.to_vec());
        }
        fields
    }

    // ---------------------------------------------------------------
    // grow_to
    // ---------------------------------------------------------------

    #[test]
    fn test_grow_to_doubles() {
        let mut buf = Vec::new();
        grow_to(&mut buf, 10);
        assert_eq!(buf.len(), 10);

        grow_to(&mut buf, 11);
        assert_eq!(buf.len(), 20);

        grow_to(&mut buf, 100);
        assert_eq!(buf.len(), 160);
    }

    #[test]
    fn test_grow_to_never_shrinks() {
        let mut buf = vec![0u8; 64];
        grow_to(&mut buf, 8);
        assert_eq!(buf.len(), 64);
    }

    // ---------------------------------------------------------------
    // Frame roundtrip
    // ---------------------------------------------------------------

    #[test]
    fn test_frame_roundtrip() {
        let mut writer = RecordWriter::new(Cursor::new(Vec::new()));
        let fields = fields_with(&[("op", &[0x02]), ("topic", b"/scan")]);
        writer.write_frame(&fields, b"payload").unwrap();

        let buf = writer.stream.into_inner();
        let mut reader = RecordReader::new(Cursor::new(buf));
        let (decoded, data_len) = reader.read_frame().unwrap().unwrap();
        assert_eq!(decoded, fields);
        assert_eq!(data_len, 7);
        assert_eq!(reader.read_body(data_len).unwrap(), b"payload");
    }

    #[test]
    fn test_two_frames_skip_first_body() {
        let mut writer = RecordWriter::new(Cursor::new(Vec::new()));
        writer
            .write_frame(&fields_with(&[("op", &[0x01])]), b"aaaa")
            .unwrap();
        writer
            .write_frame(&fields_with(&[("op", &[0x02])]), b"bb")
            .unwrap();

        let mut reader = RecordReader::new(Cursor::new(writer.stream.into_inner()));
        let (_, len) = reader.read_frame().unwrap().unwrap();
        reader.skip_body(len).unwrap();

        let (fields, len) = reader.read_frame().unwrap().unwrap();
        assert_eq!(fields.get("op").unwrap(), &vec![0x02]);
        assert_eq!(reader.read_body(len).unwrap(), b"bb");
    }

    #[test]
    fn test_position_tracks_every_byte() {
        let mut writer = RecordWriter::new(Cursor::new(Vec::new()));
        writer.write_bytes(b"#VERSION\n").unwrap();
        assert_eq!(writer.pos(), 9);

        let fields = fields_with(&[("op", &[0x03])]);
        writer.write_frame(&fields, b"xy").unwrap();
        // 4 (hlen) + 8 ("op" '=' u32le(1) value) + 4 (dlen) + 2 (body)
        assert_eq!(writer.pos(), 9 + 4 + 8 + 4 + 2);
        assert_eq!(writer.pos(), writer.stream.into_inner().len() as u64);
    }

    #[test]
    fn test_seek_resets_position() {
        let mut writer = RecordWriter::new(Cursor::new(Vec::new()));
        writer.write_bytes(b"0123456789").unwrap();
        writer.seek(4).unwrap();
        assert_eq!(writer.pos(), 4);
        writer.write_bytes(b"AB").unwrap();
        assert_eq!(writer.pos(), 6);
        assert_eq!(&writer.stream.into_inner()[..], b"0123AB6789");
    }

    // ---------------------------------------------------------------
    // EOF handling
    // ---------------------------------------------------------------

    #[test]
    fn test_read_frame_clean_eof() {
        let mut reader = RecordReader::new(Cursor::new(Vec::new()));
        assert!(reader.read_frame().unwrap().is_none());
    }

    #[test]
    fn test_read_frame_truncated_length_prefix() {
        let mut reader = RecordReader::new(Cursor::new(vec![1, 0]));
        assert!(matches!(
            reader.read_frame().unwrap_err(),
            Error::UnexpectedEof
        ));
    }

    #[test]
    fn test_read_frame_truncated_header() {
        // Claims a 100-byte header, provides none.
        let mut reader = RecordReader::new(Cursor::new(100u32.to_le_bytes().to_vec()));
        assert!(matches!(
            reader.read_frame().unwrap_err(),
            Error::UnexpectedEof
        ));
    }

    #[test]
    fn test_read_frame_truncated_data_length() {
        let mut writer = RecordWriter::new(Cursor::new(Vec::new()));
        writer
            .write_frame(&fields_with(&[("op", &[0x01])]), b"")
            .unwrap();
        let mut bytes = writer.stream.into_inner();
        bytes.truncate(bytes.len() - 2); // cut into the data-length prefix

        let mut reader = RecordReader::new(Cursor::new(bytes));
        assert!(matches!(
            reader.read_frame().unwrap_err(),
            Error::UnexpectedEof
        ));
    }

    #[test]
    fn test_read_body_truncated() {
        let mut writer = RecordWriter::new(Cursor::new(Vec::new()));
        writer
            .write_frame_header(&fields_with(&[("op", &[0x02])]), 50)
            .unwrap();
        writer.write_bytes(b"short").unwrap();

        let mut reader = RecordReader::new(Cursor::new(writer.stream.into_inner()));
        let (_, len) = reader.read_frame().unwrap().unwrap();
        assert!(matches!(
            reader.read_body(len).unwrap_err(),
            Error::UnexpectedEof
        ));
    }

    // ---------------------------------------------------------------
    // Version line
    // ---------------------------------------------------------------

    #[test]
    fn test_read_line_strips_newline() {
        let mut reader = RecordReader::new(Cursor::new(b"#ROSRECORD V1.2\nrest".to_vec()));
        assert_eq!(reader.read_line().unwrap(), "#ROSRECORD V1.2");
    }

    #[test]
    fn test_read_line_at_eof() {
        let mut reader = RecordReader::new(Cursor::new(b"no newline".to_vec()));
        assert_eq!(reader.read_line().unwrap(), "no newline");
    }
}
