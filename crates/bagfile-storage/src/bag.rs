//! The bagfile container handle.
//!
//! A [`Bag`] is a single file holding time-stamped, typed pub/sub messages.
//! One handle is either a writer or a reader:
//!
//! 1. **Write mode**: truncate-creates the file, emits the version line and
//!    a padded file-header record, then appends definition and data records
//!    as messages arrive. Closing appends one index record per topic and
//!    rewrites the file header in place so it points at the index block.
//! 2. **Read mode**: validates the version line, follows the file header to
//!    the index block, loads every topic's index into memory, and resolves
//!    each topic's schema definition. Messages are then fetched lazily by
//!    seeking to their indexed offsets.
//!
//! ## Thread safety
//!
//! A writer may be shared across producer threads. Three mutexes guard the
//! mutable state - the descriptor map, the free-space gate, and the record
//! stream (which also owns the reusable serialization buffers and the
//! in-memory indexes). They are acquired one at a time, never nested, so
//! messages from different threads land in the order the record mutex is
//! won. A reader handle is meant for single-threaded use; its cursor is
//! still mutex-wrapped so message handles can resolve payloads through a
//! shared reference.
//!
//! ## Free-space gate
//!
//! While writing, the filesystem is probed every `check_disk_interval`.
//! Below `min_free_space` the writer drops messages (with one warning per
//! `warn_interval`) until a later probe sees at least `low_free_space`
//! free. Between the two thresholds it warns and keeps writing. A failed
//! probe is itself only a warning.
//!
//! ## Usage
//!
//! ```ignore
//! use bagfile_storage::{Bag, BagMode};
//! use bagfile_core::Time;
//!
//! let bag = Bag::open("run.bag", BagMode::Write)?;
//! bag.write("/odom", Time::from_sec(100), &odom_msg)?;
//! bag.close()?;
//!
//! let bag = Bag::open("run.bag", BagMode::Read)?;
//! for msg in &bag.get_view_by_topic(&["/odom"], Time::MIN, Time::MAX) {
//!     let odom = msg.instantiate::<Odometry>()?;
//! }
//! ```

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

use bagfile_core::constants::{
    CALLERID_FIELD_NAME, COUNT_FIELD_NAME, DEF_FIELD_NAME, FILE_HEADER_LENGTH, INDEX_ENTRY_SIZE,
    INDEX_POS_FIELD_NAME, INDEX_VERSION, LATCHING_FIELD_NAME, MD5_FIELD_NAME, NSEC_FIELD_NAME,
    OP_FIELD_NAME, OP_FILE_HEADER, OP_INDEX_DATA, OP_MSG_DATA, OP_MSG_DEF, SEC_FIELD_NAME,
    TOPIC_FIELD_NAME, TYPE_FIELD_NAME, VERSION, VERSION_COMBINED, VERSION_LINE_PREFIX,
    VER_FIELD_NAME,
};
use bagfile_core::header::{self, encode_fields, FieldMap};
use bagfile_core::{BagMessage, ConnectionHeader, Error, Result, Time, TopicInfo};

use crate::config::BagConfig;
use crate::index::IndexEntry;
use crate::query::Query;
use crate::record::{grow_to, RecordReader, RecordWriter};
use crate::view::View;

/// How a container is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BagMode {
    /// Open an existing file for reading.
    Read,
    /// Truncate-create a file for writing.
    Write,
    /// Declared by the format, not yet supported.
    Append,
}

/// Free-space gate state.
struct DiskGate {
    /// Next time the filesystem will be probed.
    check_next: Instant,
    /// Earliest time the next dropped-write warning may be logged.
    /// `None` warns immediately.
    warn_next: Option<Instant>,
    writing_enabled: bool,
}

/// Everything owned by the record mutex: the write stream, the reusable
/// payload buffer, and the per-topic index vectors.
struct WriterState {
    rec: RecordWriter<File>,
    message_buf: Vec<u8>,
    indexes: BTreeMap<String, Vec<IndexEntry>>,
}

impl std::fmt::Debug for Bag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bag")
            .field("mode", &self.mode)
            .field("path", &self.path)
            .finish()
    }
}

/// A single-file message log, open for writing or reading.
pub struct Bag {
    mode: BagMode,
    path: PathBuf,
    config: BagConfig,
    version: u32,
    file_header_pos: u64,

    /// Topic descriptors, created on first write or during trailer load.
    topics: Mutex<BTreeMap<String, Arc<TopicInfo>>>,

    disk: Mutex<DiskGate>,
    writer: Mutex<Option<WriterState>>,
    reader: Mutex<Option<RecordReader<File>>>,

    /// Read mode only: the indexes loaded from the trailer. Immutable
    /// after open.
    loaded_indexes: BTreeMap<String, Vec<IndexEntry>>,
}

impl Bag {
    /// Open a container with the default configuration.
    pub fn open(path: impl AsRef<Path>, mode: BagMode) -> Result<Self> {
        Self::open_with_config(path, mode, BagConfig::default())
    }

    /// Open a container with an explicit configuration.
    pub fn open_with_config(
        path: impl AsRef<Path>,
        mode: BagMode,
        config: BagConfig,
    ) -> Result<Self> {
        match mode {
            BagMode::Write => Self::open_write(path.as_ref(), config),
            BagMode::Read => Self::open_read(path.as_ref(), config),
            BagMode::Append => Err(Error::Unsupported("append mode".to_string())),
        }
    }

    fn open_write(path: &Path, config: BagConfig) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        let mut rec = RecordWriter::new(file);
        rec.write_bytes(format!("{VERSION_LINE_PREFIX}{VERSION}\n").as_bytes())?;

        let file_header_pos = rec.pos();
        write_file_header_record(&mut rec, 0)?;

        let bag = Self {
            mode: BagMode::Write,
            path: path.to_path_buf(),
            version: VERSION_COMBINED,
            file_header_pos,
            topics: Mutex::new(BTreeMap::new()),
            disk: Mutex::new(DiskGate {
                check_next: Instant::now() + config.check_disk_interval(),
                warn_next: None,
                writing_enabled: true,
            }),
            writer: Mutex::new(Some(WriterState {
                rec,
                message_buf: Vec::new(),
                indexes: BTreeMap::new(),
            })),
            reader: Mutex::new(None),
            loaded_indexes: BTreeMap::new(),
            config,
        };

        bag.probe_disk(&mut bag.disk.lock());
        info!(path = %bag.path.display(), "bag opened for writing");
        Ok(bag)
    }

    fn open_read(path: &Path, config: BagConfig) -> Result<Self> {
        let file = File::open(path)?;
        let mut rec = RecordReader::new(file);

        // Version gate.
        let line = rec.read_line()?;
        let version = parse_version_line(&line);
        if version != VERSION_COMBINED {
            return Err(Error::UnsupportedVersion(line));
        }

        // File header: capture the trailer pointer, skip the padding.
        let (fields, data_len) = rec.read_frame()?.ok_or(Error::UnexpectedEof)?;
        let op = header::read_op(&fields)?;
        if op != OP_FILE_HEADER {
            return Err(Error::MalformedRecord(format!(
                "expected file header record, found op {op:#04x}"
            )));
        }
        let index_pos = header::read_u64(&fields, INDEX_POS_FIELD_NAME)?;
        rec.skip_body(data_len)?;

        // Trailer: one INDEX_DATA record per topic, until end of file.
        let loaded_indexes = read_index_block(&mut rec, index_pos)?;

        // Schema definitions: each topic's first entry leads to its def.
        let mut topics = BTreeMap::new();
        for (topic, entries) in &loaded_indexes {
            let first = match entries.first() {
                Some(first) => first,
                None => continue,
            };
            let info = read_definition(&mut rec, first.pos)?;
            if &info.topic != topic {
                return Err(Error::MalformedRecord(format!(
                    "definition topic {} does not match index topic {topic}",
                    info.topic
                )));
            }
            topics.insert(topic.clone(), Arc::new(info));
        }

        info!(
            path = %path.display(),
            topics = topics.len(),
            "bag opened for reading"
        );

        Ok(Self {
            mode: BagMode::Read,
            path: path.to_path_buf(),
            version,
            file_header_pos: 0,
            topics: Mutex::new(topics),
            disk: Mutex::new(DiskGate {
                check_next: Instant::now(),
                warn_next: None,
                writing_enabled: false,
            }),
            writer: Mutex::new(None),
            reader: Mutex::new(Some(rec)),
            loaded_indexes,
            config,
        })
    }

    /// Record a message with no publisher connection metadata.
    pub fn write<M: BagMessage>(&self, topic: &str, time: Time, msg: &M) -> Result<()> {
        self.write_inner(topic, time, msg, None)
    }

    /// Record a message, preserving `latching` / `callerid` from the
    /// publisher's connection header.
    pub fn write_with_connection_header<M: BagMessage>(
        &self,
        topic: &str,
        time: Time,
        msg: &M,
        connection: &ConnectionHeader,
    ) -> Result<()> {
        self.write_inner(topic, time, msg, Some(connection))
    }

    fn write_inner<M: BagMessage>(
        &self,
        topic: &str,
        time: Time,
        msg: &M,
        connection: Option<&ConnectionHeader>,
    ) -> Result<()> {
        if self.mode != BagMode::Write {
            return Err(Error::NotOpen);
        }

        // Drop early while the gate is closed, one warning per interval.
        {
            let mut gate = self.disk.lock();
            if !gate.writing_enabled {
                let now = Instant::now();
                if gate.warn_next.map_or(true, |at| now >= at) {
                    gate.warn_next = Some(now + self.config.warn_interval());
                    warn!("dropping message: recording disabled, most likely the disk is full");
                }
                return Ok(());
            }
        }

        // Register the topic descriptor on first sight.
        let (info, needs_def) = {
            let mut topics = self.topics.lock();
            match topics.get(topic) {
                Some(info) => (Arc::clone(info), false),
                None => {
                    let info = Arc::new(TopicInfo {
                        topic: topic.to_string(),
                        datatype: M::datatype().to_string(),
                        md5sum: M::md5sum().to_string(),
                        msg_def: M::definition().to_string(),
                    });
                    topics.insert(topic.to_string(), Arc::clone(&info));
                    (info, true)
                }
            }
        };

        // Periodic free-space probe. A probe that disables the gate still
        // lets the current message through; subsequent writes are dropped.
        {
            let mut gate = self.disk.lock();
            if Instant::now() >= gate.check_next {
                gate.check_next += self.config.check_disk_interval();
                self.probe_disk(&mut gate);
            }
        }

        // Publisher metadata to preserve in the data record.
        let latching = connection
            .and_then(|c| c.get(LATCHING_FIELD_NAME))
            .map_or(false, |v| v != "0");
        let callerid = connection
            .and_then(|c| c.get(CALLERID_FIELD_NAME))
            .cloned()
            .unwrap_or_default();

        let mut guard = self.writer.lock();
        let state = guard.as_mut().ok_or(Error::NotOpen)?;

        // The index entry is captured before the definition record, so a
        // topic's first entry points at its MSG_DEF frame.
        state
            .indexes
            .entry(topic.to_string())
            .or_default()
            .push(IndexEntry {
                time,
                pos: state.rec.pos(),
            });

        if needs_def {
            let mut fields = FieldMap::new();
            fields.insert(OP_FIELD_NAME.to_string(), vec![OP_MSG_DEF]);
            fields.insert(TOPIC_FIELD_NAME.to_string(), topic.as_bytes().to_vec());
            fields.insert(MD5_FIELD_NAME.to_string(), info.md5sum.as_bytes().to_vec());
            fields.insert(TYPE_FIELD_NAME.to_string(), info.datatype.as_bytes().to_vec());
            fields.insert(DEF_FIELD_NAME.to_string(), info.msg_def.as_bytes().to_vec());
            state.rec.write_frame(&fields, b"")?;
            debug!(topic, datatype = %info.datatype, "wrote message definition");
        }

        // Serialize into the shared buffer, growing it double-until-fits.
        let len = msg.serialized_length() as usize;
        grow_to(&mut state.message_buf, len);
        msg.serialize(&mut state.message_buf[..len])?;

        let mut fields = FieldMap::new();
        fields.insert(OP_FIELD_NAME.to_string(), vec![OP_MSG_DATA]);
        fields.insert(TOPIC_FIELD_NAME.to_string(), topic.as_bytes().to_vec());
        fields.insert(MD5_FIELD_NAME.to_string(), info.md5sum.as_bytes().to_vec());
        fields.insert(TYPE_FIELD_NAME.to_string(), info.datatype.as_bytes().to_vec());
        fields.insert(SEC_FIELD_NAME.to_string(), time.sec.to_le_bytes().to_vec());
        fields.insert(NSEC_FIELD_NAME.to_string(), time.nsec.to_le_bytes().to_vec());
        if latching {
            fields.insert(LATCHING_FIELD_NAME.to_string(), b"1".to_vec());
            fields.insert(CALLERID_FIELD_NAME.to_string(), callerid.into_bytes());
        }

        if let Err(err) = state.rec.write_frame(&fields, &state.message_buf[..len]) {
            error!(topic, %err, "could not write to bag file, check permissions and disk space");
            return Err(err);
        }

        Ok(())
    }

    /// Flush the trailer and close the underlying file.
    ///
    /// For a writer this appends one index record per topic, rewrites the
    /// file header so its trailer pointer is valid, and closes the stream
    /// with interrupt delivery masked (a long flush interrupted mid-close
    /// would otherwise corrupt the handle). Idempotent; also invoked from
    /// `Drop`.
    pub fn close(&self) -> Result<()> {
        *self.reader.lock() = None;

        let state = self.writer.lock().take();
        let mut state = match state {
            Some(state) => state,
            None => return Ok(()),
        };

        let index_pos = state.rec.pos();
        {
            let topics = self.topics.lock();
            let mut body = Vec::new();
            for (topic, entries) in &state.indexes {
                let datatype = topics
                    .get(topic)
                    .map(|info| info.datatype.clone())
                    .unwrap_or_default();

                let mut fields = FieldMap::new();
                fields.insert(OP_FIELD_NAME.to_string(), vec![OP_INDEX_DATA]);
                fields.insert(TOPIC_FIELD_NAME.to_string(), topic.as_bytes().to_vec());
                fields.insert(TYPE_FIELD_NAME.to_string(), datatype.into_bytes());
                fields.insert(
                    VER_FIELD_NAME.to_string(),
                    INDEX_VERSION.to_le_bytes().to_vec(),
                );
                fields.insert(
                    COUNT_FIELD_NAME.to_string(),
                    (entries.len() as u32).to_le_bytes().to_vec(),
                );

                body.clear();
                body.reserve(entries.len() * INDEX_ENTRY_SIZE);
                for entry in entries {
                    entry.encode(&mut body);
                }
                state.rec.write_frame(&fields, &body)?;
            }
        }

        state.rec.seek(self.file_header_pos)?;
        write_file_header_record(&mut state.rec, index_pos)?;
        state.rec.flush()?;

        self.topics.lock().clear();

        // Closing a large file can take a while (especially over NFS); an
        // interrupt delivered mid-close must not tear down the stream
        // twice.
        {
            let _mask = SigintMask::new();
            drop(state);
        }

        info!(path = %self.path.display(), index_pos, "bag closed");
        Ok(())
    }

    /// Descriptors of every topic seen so far.
    pub fn topics(&self) -> Vec<Arc<TopicInfo>> {
        self.topics.lock().values().cloned().collect()
    }

    /// Descriptor for one topic, if it has been seen.
    pub fn topic_info(&self, topic: &str) -> Option<Arc<TopicInfo>> {
        self.topics.lock().get(topic).cloned()
    }

    pub fn mode(&self) -> BagMode {
        self.mode
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Combined format version (`100 * major + minor`) of the open file.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// A time-ordered view over the named topics within `[t0, t1]`.
    pub fn get_view_by_topic<S: AsRef<str>>(&self, topics: &[S], t0: Time, t1: Time) -> View<'_> {
        let mut view = View::new();
        view.add_query(self, &Query::topics(topics).with_time_range(t0, t1));
        view
    }

    /// The `(descriptor, in-range entries)` pairs a query selects, with the
    /// entries snapshot by value.
    pub(crate) fn select_ranges(&self, query: &Query) -> Vec<(Arc<TopicInfo>, Vec<IndexEntry>)> {
        let topics = self.topics.lock();
        let mut ranges = Vec::new();

        let mut collect = |topic: &str, entries: &[IndexEntry]| {
            let info = match topics.get(topic) {
                Some(info) => info,
                None => return,
            };
            if !query.evaluate(info) {
                return;
            }
            let (lo, hi) =
                crate::index::range_within(entries, query.begin_time(), query.end_time());
            if lo < hi {
                ranges.push((Arc::clone(info), entries[lo..hi].to_vec()));
            }
        };

        if self.mode == BagMode::Read {
            for (topic, entries) in &self.loaded_indexes {
                collect(topic, entries);
            }
        } else {
            let guard = self.writer.lock();
            if let Some(state) = guard.as_ref() {
                for (topic, entries) in &state.indexes {
                    collect(topic, entries);
                }
            }
        }

        ranges
    }

    /// Resolve the message at `pos`: skip definition frames, validate the
    /// data record, read its body, and deserialize.
    pub(crate) fn instantiate_at<T: BagMessage>(&self, pos: u64) -> Result<T> {
        let mut guard = self.reader.lock();
        let rec = guard.as_mut().ok_or(Error::NotOpen)?;
        rec.seek(pos)?;

        loop {
            let (fields, data_len) = rec.read_frame()?.ok_or(Error::UnexpectedEof)?;
            match header::read_op(&fields)? {
                // A definition's body is empty, so the cursor is already at
                // the next frame.
                OP_MSG_DEF => continue,
                OP_MSG_DATA => {
                    header::check_field(&fields, TOPIC_FIELD_NAME, 1, u32::MAX as usize, true)?;
                    let md5sum = {
                        let raw = header::check_field(&fields, MD5_FIELD_NAME, 32, 32, true)?
                            .expect("required");
                        String::from_utf8_lossy(raw).into_owned()
                    };
                    let datatype = header::read_string(&fields, TYPE_FIELD_NAME, 1)?;

                    let mut connection = ConnectionHeader::new();
                    connection.insert(MD5_FIELD_NAME.to_string(), md5sum);
                    connection.insert(TYPE_FIELD_NAME.to_string(), datatype);

                    let body = rec.read_body(data_len)?;
                    return T::deserialize(body, &connection);
                }
                other => {
                    return Err(Error::MalformedRecord(format!(
                        "unexpected op {other:#04x} while resolving a message"
                    )))
                }
            }
        }
    }

    fn probe_disk(&self, gate: &mut DiskGate) {
        let free = match fs2::available_space(&self.path) {
            Ok(free) => free,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to check filesystem stats");
                return;
            }
        };

        if free < self.config.min_free_space {
            if gate.writing_enabled {
                error!(
                    path = %self.path.display(),
                    free,
                    "less than {} bytes of space free on disk, disabling recording",
                    self.config.min_free_space
                );
            }
            gate.writing_enabled = false;
            gate.warn_next = None;
        } else if free < self.config.low_free_space {
            warn!(
                path = %self.path.display(),
                free,
                "less than {} bytes of space free on disk",
                self.config.low_free_space
            );
        } else {
            gate.writing_enabled = true;
        }
    }
}

impl Drop for Bag {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            error!(path = %self.path.display(), %err, "error closing bag");
        }
    }
}

/// Emit the padded file-header record at the current write position. The
/// frame always occupies exactly `FILE_HEADER_LENGTH` bytes, so the close
/// path can rewrite it in place.
fn write_file_header_record<W: std::io::Write + std::io::Seek>(
    rec: &mut RecordWriter<W>,
    index_pos: u64,
) -> Result<()> {
    let mut fields = FieldMap::new();
    fields.insert(OP_FIELD_NAME.to_string(), vec![OP_FILE_HEADER]);
    fields.insert(
        INDEX_POS_FIELD_NAME.to_string(),
        index_pos.to_le_bytes().to_vec(),
    );

    let mut encoded = Vec::new();
    encode_fields(&fields, &mut encoded);
    let frame_overhead = 4 + encoded.len() as u32 + 4;
    let padding_len = FILE_HEADER_LENGTH.saturating_sub(frame_overhead);

    let padding = vec![b' '; padding_len as usize];
    rec.write_frame(&fields, &padding)
}

/// Load the trailer: every INDEX_DATA record from `index_pos` to the end
/// of the file.
fn read_index_block(
    rec: &mut RecordReader<File>,
    index_pos: u64,
) -> Result<BTreeMap<String, Vec<IndexEntry>>> {
    rec.seek(index_pos)?;
    let mut indexes = BTreeMap::new();

    while let Some((fields, data_len)) = rec.read_frame()? {
        let op = header::read_op(&fields)?;
        if op != OP_INDEX_DATA {
            return Err(Error::MalformedRecord(format!(
                "expected index record, found op {op:#04x}"
            )));
        }

        let ver = header::read_u32(&fields, VER_FIELD_NAME)?;
        if ver != INDEX_VERSION {
            return Err(Error::UnsupportedVersion(format!("index version {ver}")));
        }

        let topic = header::read_string(&fields, TOPIC_FIELD_NAME, 1)?;
        header::check_field(&fields, TYPE_FIELD_NAME, 1, u32::MAX as usize, true)?;
        let count = header::read_u32(&fields, COUNT_FIELD_NAME)?;

        if data_len as usize != count as usize * INDEX_ENTRY_SIZE {
            return Err(Error::MalformedRecord(format!(
                "index body for {topic} is {data_len} bytes, expected {count} entries"
            )));
        }

        let body = rec.read_body(data_len)?;
        let entries = body
            .chunks_exact(INDEX_ENTRY_SIZE)
            .map(IndexEntry::decode)
            .collect::<Result<Vec<_>>>()?;
        indexes.insert(topic, entries);
    }

    Ok(indexes)
}

/// Read the definition record a topic's first index entry points at.
fn read_definition(rec: &mut RecordReader<File>, pos: u64) -> Result<TopicInfo> {
    rec.seek(pos)?;
    let (fields, _) = rec.read_frame()?.ok_or(Error::UnexpectedEof)?;

    let op = header::read_op(&fields)?;
    if op != OP_MSG_DEF {
        return Err(Error::MalformedRecord(format!(
            "expected definition record, found op {op:#04x}"
        )));
    }

    let topic = header::read_string(&fields, TOPIC_FIELD_NAME, 1)?;
    let md5sum = {
        let raw = header::check_field(&fields, MD5_FIELD_NAME, 32, 32, true)?.expect("required");
        String::from_utf8_lossy(raw).into_owned()
    };
    let datatype = header::read_string(&fields, TYPE_FIELD_NAME, 1)?;
    // The definition can legitimately be empty when the publisher supplied
    // none.
    let msg_def = header::read_string(&fields, DEF_FIELD_NAME, 0)?;

    Ok(TopicInfo {
        topic,
        datatype,
        md5sum,
        msg_def,
    })
}

/// Parse `#ROSRECORD V<major>.<minor>` into `100 * major + minor`. A line
/// starting with `#` that does not match is treated as major 1, minor 0.
fn parse_version_line(line: &str) -> u32 {
    if let Some(rest) = line.strip_prefix(VERSION_LINE_PREFIX) {
        if let Some((major, minor)) = rest.split_once('.') {
            if let (Ok(major), Ok(minor)) = (major.parse::<u32>(), minor.parse::<u32>()) {
                return 100 * major + minor;
            }
        }
    }
    if line.starts_with('#') {
        return 100;
    }
    0
}

/// Ignores SIGINT for its lifetime, restoring the previous disposition on
/// drop.
#[cfg(unix)]
struct SigintMask {
    previous: libc::sighandler_t,
}

#[cfg(unix)]
impl SigintMask {
    fn new() -> Self {
        let previous = unsafe { libc::signal(libc::SIGINT, libc::SIG_IGN) };
        Self { previous }
    }
}

#[cfg(unix)]
impl Drop for SigintMask {
    fn drop(&mut self) {
        unsafe {
            libc::signal(libc::SIGINT, self.previous);
        }
    }
}

#[cfg(not(unix))]
struct SigintMask;

#[cfg(not(unix))]
impl SigintMask {
    fn new() -> Self {
        Self
    }
}
