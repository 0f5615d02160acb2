//! Message queries.
//!
//! A [`Query`] selects messages by topic and by time window. The topic
//! side is a [`TopicFilter`]: either every topic, or an explicit set. The
//! time window is a closed interval; both bounds default to the full
//! representable range.
//!
//! ## Usage
//!
//! ```ignore
//! use bagfile_storage::Query;
//! use bagfile_core::Time;
//!
//! // Everything on two topics between t=100s and t=200s
//! let query = Query::topics(["/odom", "/scan"])
//!     .with_time_range(Time::from_sec(100), Time::from_sec(200));
//!
//! // Every message in the bag
//! let all = Query::all();
//! ```

use bagfile_core::{Time, TopicInfo};

/// Which topics a query matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicFilter {
    /// Match every topic.
    All,

    /// Match topics whose name is in the set.
    Topics(Vec<String>),
}

/// A topic predicate plus a closed time window.
#[derive(Debug, Clone)]
pub struct Query {
    begin_time: Time,
    end_time: Time,
    filter: TopicFilter,
}

impl Query {
    /// Every topic, full time range.
    pub fn all() -> Self {
        Self {
            begin_time: Time::MIN,
            end_time: Time::MAX,
            filter: TopicFilter::All,
        }
    }

    /// The named topics, full time range.
    pub fn topics<I, S>(topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            filter: TopicFilter::Topics(
                topics.into_iter().map(|t| t.as_ref().to_string()).collect(),
            ),
            ..Self::all()
        }
    }

    /// Restrict the query to the closed interval `[begin, end]`.
    pub fn with_time_range(mut self, begin: Time, end: Time) -> Self {
        self.begin_time = begin;
        self.end_time = end;
        self
    }

    pub fn begin_time(&self) -> Time {
        self.begin_time
    }

    pub fn end_time(&self) -> Time {
        self.end_time
    }

    /// Whether a topic's descriptor passes the filter.
    pub fn evaluate(&self, info: &TopicInfo) -> bool {
        match &self.filter {
            TopicFilter::All => true,
            TopicFilter::Topics(topics) => topics.iter().any(|t| t == &info.topic),
        }
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::all()
    }
}
