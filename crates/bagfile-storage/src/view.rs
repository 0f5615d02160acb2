//! Time-ordered views over one or more bags.
//!
//! A [`View`] binds queries to bags and presents every matched message as
//! a single stream sorted by stamp. Each `(bag, query)` pair contributes
//! one range per matched topic: the slice of that topic's index whose
//! stamps fall inside the query's time window.
//!
//! Ranges snapshot their index entries by value when the query is added,
//! so a view built over a bag that is still being written sees exactly the
//! messages indexed at `add_query` time - later writes neither appear in
//! nor invalidate the view.
//!
//! ## Merging
//!
//! Iteration runs a k-way merge: a min-heap holds one cursor per
//! non-exhausted range, keyed by the cursor's current stamp. Equal stamps
//! are broken by the order ranges were added, then by position within a
//! range, so playback is deterministic. Advancing pops the minimum,
//! re-pushes the cursor if its range has more entries, and yields a
//! [`MessageInstance`].
//!
//! ## Lazy payloads
//!
//! A `MessageInstance` is three cheap handles: the topic descriptor, the
//! index entry, and the owning bag. Payload bytes are only touched by
//! [`MessageInstance::instantiate`], which seeks the bag's read cursor to
//! the indexed offset, skips any definition frames, and deserializes the
//! data record's body. A fingerprint mismatch yields `Ok(None)` without
//! reading the body; an expected fingerprint beginning with `*` matches
//! anything.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::sync::Arc;

use bagfile_core::{BagMessage, Result, Time, TopicInfo};

use crate::bag::Bag;
use crate::index::IndexEntry;
use crate::query::Query;

/// One matched topic's slice of index entries, plus where they came from.
struct MessageRange<'bag> {
    entries: Vec<IndexEntry>,
    info: Arc<TopicInfo>,
    bag: &'bag Bag,
}

/// A collection of ranges presented as one time-ordered stream.
pub struct View<'bag> {
    ranges: Vec<MessageRange<'bag>>,
}

impl<'bag> View<'bag> {
    /// An empty view; populate it with [`View::add_query`].
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Match `query` against `bag` and append one range per selected
    /// topic. May be called repeatedly, with the same or different bags.
    pub fn add_query(&mut self, bag: &'bag Bag, query: &Query) {
        for (info, entries) in bag.select_ranges(query) {
            self.ranges.push(MessageRange { entries, info, bag });
        }
    }

    /// Total number of messages across all ranges.
    pub fn len(&self) -> usize {
        self.ranges.iter().map(|r| r.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.iter().all(|r| r.entries.is_empty())
    }

    /// Iterate the merged stream in non-decreasing stamp order.
    pub fn iter(&self) -> ViewIterator<'_, 'bag> {
        ViewIterator::new(self)
    }
}

impl<'bag> Default for View<'bag> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'view, 'bag> IntoIterator for &'view View<'bag> {
    type Item = MessageInstance<'bag>;
    type IntoIter = ViewIterator<'view, 'bag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Heap key for one range's cursor. Field order makes the derived `Ord`
/// sort by stamp first, then by range insertion order, then by position,
/// which is what makes equal-stamp playback deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct MergeCursor {
    time: Time,
    range_idx: usize,
    entry_idx: usize,
}

/// K-way merge over a view's ranges.
pub struct ViewIterator<'view, 'bag> {
    view: &'view View<'bag>,
    heap: BinaryHeap<Reverse<MergeCursor>>,
}

impl<'view, 'bag> ViewIterator<'view, 'bag> {
    fn new(view: &'view View<'bag>) -> Self {
        let mut heap = BinaryHeap::with_capacity(view.ranges.len());
        for (range_idx, range) in view.ranges.iter().enumerate() {
            if let Some(first) = range.entries.first() {
                heap.push(Reverse(MergeCursor {
                    time: first.time,
                    range_idx,
                    entry_idx: 0,
                }));
            }
        }
        Self { view, heap }
    }
}

impl<'view, 'bag> Iterator for ViewIterator<'view, 'bag> {
    type Item = MessageInstance<'bag>;

    fn next(&mut self) -> Option<Self::Item> {
        let Reverse(cursor) = self.heap.pop()?;
        let range = &self.view.ranges[cursor.range_idx];
        let entry = range.entries[cursor.entry_idx];

        let next_idx = cursor.entry_idx + 1;
        if let Some(next) = range.entries.get(next_idx) {
            self.heap.push(Reverse(MergeCursor {
                time: next.time,
                range_idx: cursor.range_idx,
                entry_idx: next_idx,
            }));
        }

        Some(MessageInstance {
            info: Arc::clone(&range.info),
            entry,
            bag: range.bag,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), None)
    }
}

/// One message in a view: descriptor, index entry, and owning bag. Cheap
/// to produce; the payload stays on disk until [`instantiate`] is called.
///
/// [`instantiate`]: MessageInstance::instantiate
pub struct MessageInstance<'bag> {
    info: Arc<TopicInfo>,
    entry: IndexEntry,
    bag: &'bag Bag,
}

impl<'bag> MessageInstance<'bag> {
    pub fn topic(&self) -> &str {
        &self.info.topic
    }

    pub fn datatype(&self) -> &str {
        &self.info.datatype
    }

    pub fn md5sum(&self) -> &str {
        &self.info.md5sum
    }

    /// Full schema text recorded for the topic (may be empty).
    pub fn def(&self) -> &str {
        &self.info.msg_def
    }

    pub fn time(&self) -> Time {
        self.entry.time
    }

    /// Descriptor of the topic this message belongs to.
    pub fn topic_info(&self) -> &Arc<TopicInfo> {
        &self.info
    }

    /// Whether `T` matches this message's fingerprint and data type.
    pub fn is_type<T: BagMessage>(&self) -> bool {
        T::md5sum() == self.info.md5sum && T::datatype() == self.info.datatype
    }

    /// Materialize the payload as a `T`.
    ///
    /// Returns `Ok(None)` without touching the file when `T`'s fingerprint
    /// neither equals the record's nor begins with `*`.
    pub fn instantiate<T: BagMessage>(&self) -> Result<Option<T>> {
        if T::md5sum() != self.info.md5sum && !T::md5sum().starts_with('*') {
            return Ok(None);
        }
        self.bag.instantiate_at::<T>(self.entry.pos).map(Some)
    }
}
