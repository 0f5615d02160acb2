//! Topic descriptors.

use serde::{Deserialize, Serialize};

/// Immutable metadata for one topic in a container.
///
/// Created on the first write of a topic, or while loading the trailer on
/// read. The fingerprint and data type are stable across the whole file;
/// every data record of the topic carries the same pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicInfo {
    /// Topic name.
    pub topic: String,

    /// Fully-qualified data-type name.
    pub datatype: String,

    /// 32-hex-character schema fingerprint.
    pub md5sum: String,

    /// Full schema text; empty when the publisher supplied none.
    pub msg_def: String,
}
