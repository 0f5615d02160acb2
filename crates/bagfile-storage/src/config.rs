//! Recorder configuration.
//!
//! Controls the free-space gate of the write path:
//!
//! - **check_disk_interval_secs**: how often the filesystem is probed while
//!   writing (default: 20 s)
//! - **warn_interval_secs**: minimum spacing between dropped-write warnings
//!   while writing is disabled (default: 5 s)
//! - **min_free_space**: below this many free bytes, writing is disabled and
//!   messages are dropped (default: 1 GiB)
//! - **low_free_space**: below this many free bytes, a warning is logged but
//!   writing continues (default: 5 GiB)
//!
//! ## Usage
//!
//! ```ignore
//! use bagfile_storage::{Bag, BagConfig, BagMode};
//!
//! // Tight thresholds for a small embedded disk
//! let config = BagConfig {
//!     min_free_space: 64 * 1024 * 1024,
//!     low_free_space: 256 * 1024 * 1024,
//!     ..Default::default()
//! };
//! let bag = Bag::open_with_config("run.bag", BagMode::Write, config)?;
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BagConfig {
    /// Seconds between free-space probes while writing (default: 20).
    #[serde(default = "default_check_disk_interval_secs")]
    pub check_disk_interval_secs: u64,

    /// Minimum seconds between dropped-write warnings (default: 5).
    #[serde(default = "default_warn_interval_secs")]
    pub warn_interval_secs: u64,

    /// Free bytes below which writing is disabled (default: 1 GiB).
    #[serde(default = "default_min_free_space")]
    pub min_free_space: u64,

    /// Free bytes below which a low-space warning is logged (default: 5 GiB).
    #[serde(default = "default_low_free_space")]
    pub low_free_space: u64,
}

impl Default for BagConfig {
    fn default() -> Self {
        Self {
            check_disk_interval_secs: default_check_disk_interval_secs(),
            warn_interval_secs: default_warn_interval_secs(),
            min_free_space: default_min_free_space(),
            low_free_space: default_low_free_space(),
        }
    }
}

impl BagConfig {
    pub(crate) fn check_disk_interval(&self) -> Duration {
        Duration::from_secs(self.check_disk_interval_secs)
    }

    pub(crate) fn warn_interval(&self) -> Duration {
        Duration::from_secs(self.warn_interval_secs)
    }
}

fn default_check_disk_interval_secs() -> u64 {
    20
}

fn default_warn_interval_secs() -> u64 {
    5
}

fn default_min_free_space() -> u64 {
    1024 * 1024 * 1024 // 1 GiB
}

fn default_low_free_space() -> u64 {
    5 * 1024 * 1024 * 1024 // 5 GiB
}
