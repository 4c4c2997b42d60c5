//! Error types for strseg.

/// Errors that can occur while splitting or walking segments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A pattern separator was empty.
    #[error("separator pattern must not be empty")]
    EmptySeparator,

    /// Index outside `[0, count)`.
    #[error("segment index {index} out of range (count {count})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of segments in the collection.
        count: usize,
    },

    /// A segment that already has a successor was appended to.
    #[error("segment at running index {running_index} already has a successor")]
    AlreadyLinked {
        /// Running index of the segment that was appended to.
        running_index: usize,
    },

    /// A comparison mode name that is not recognized.
    #[error("unknown comparison mode: {0}")]
    UnknownComparison(String),
}

/// Result type for strseg operations.
pub type Result<T> = std::result::Result<T, Error>;
