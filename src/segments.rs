//! The split result: a counted chain of segments over one source string.
//!
//! ## How Splitting Works
//!
//! ```text
//! value:      "1.2..3"
//! separator:  '.'
//!
//! scan ──▶ "1" │ "2" │ "" │ "3"
//!              ▲     ▲    ▲
//!           matches at 1, 3, 4
//!
//! segments:   ["1", "2", "", "3"]   count = matches + 1
//! ```
//!
//! The scan runs once, left to right. After each match it resumes right after
//! the matched text, so matches never overlap. Leading, trailing, and adjacent
//! separators produce empty segments; they are kept, not dropped.
//!
//! ## Indexing
//!
//! The chain has no random access, so `segments[i]` walks `i` links from the
//! head. Every index is bounds-checked against [`StringSegments::count`].

use std::ops::{Index, Range};

use crate::comparison::{Comparison, Matcher};
use crate::segment::{Chain, MemorySegment};
use crate::{Error, Result};

/// Substrings of one source string, delimited by a separator.
///
/// ## Example
///
/// ```rust
/// use strseg::StringSegments;
///
/// let segments = StringSegments::split("1.2.3.4", '.');
/// assert_eq!(segments.count(), 4);
/// assert_eq!(segments[2].memory(), "3");
///
/// let parts: Vec<&str> = segments.parts().collect();
/// assert_eq!(parts, ["1", "2", "3", "4"]);
/// ```
#[derive(Debug)]
pub struct StringSegments<'a> {
    original: &'a str,
    count: usize,
    first: MemorySegment<'a, str>,
}

impl<'a> StringSegments<'a> {
    /// Wrap an existing chain.
    ///
    /// No validation is performed: `count` is trusted to match the chain's
    /// length and the chain is trusted to point into `original`.
    pub fn new(original: &'a str, count: usize, first: MemorySegment<'a, str>) -> Self {
        Self {
            original,
            count,
            first,
        }
    }

    /// Split `value` on every occurrence of `separator`.
    ///
    /// A value containing the separator `n` times yields `n + 1` segments.
    ///
    /// ```rust
    /// use strseg::StringSegments;
    ///
    /// let segments = StringSegments::split(".a.", '.');
    /// let parts: Vec<&str> = segments.parts().collect();
    /// assert_eq!(parts, ["", "a", ""]);
    /// ```
    pub fn split(value: &'a str, separator: char) -> Self {
        let mut buf = [0u8; 4];
        let needle = separator.encode_utf8(&mut buf);
        Self::split_matching(value, &Matcher::new(needle, Comparison::Ordinal))
    }

    /// Split `value` on every exact occurrence of `separator`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySeparator`] if `separator` is empty.
    pub fn split_pattern(value: &'a str, separator: &str) -> Result<Self> {
        Self::split_with(value, separator, Comparison::Ordinal)
    }

    /// Split `value` on every occurrence of `separator` under `comparison`.
    ///
    /// ```rust
    /// use strseg::{Comparison, StringSegments};
    ///
    /// let segments =
    ///     StringSegments::split_with("1ab2Ab3", "ab", Comparison::OrdinalIgnoreCase).unwrap();
    /// assert_eq!(segments.count(), 3);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySeparator`] if `separator` is empty.
    pub fn split_with(value: &'a str, separator: &str, comparison: Comparison) -> Result<Self> {
        if separator.is_empty() {
            return Err(Error::EmptySeparator);
        }
        Ok(Self::split_matching(
            value,
            &Matcher::new(separator, comparison),
        ))
    }

    pub(crate) fn split_matching(value: &'a str, matcher: &Matcher<'_>) -> Self {
        let Some(found) = matcher.find(value, 0) else {
            trace_split(value, matcher, 1);
            return Self::new(value, 1, MemorySegment::new(value));
        };

        let mut count = 2;
        let mut first = MemorySegment::new(&value[..found.start]);
        let mut last = &mut first;
        let mut offset = found.end;

        while let Some(found) = matcher.find(value, offset) {
            last = last.append(&value[offset..found.start]);
            offset = found.end;
            count += 1;
        }
        last.append(&value[offset..]);

        trace_split(value, matcher, count);
        Self::new(value, count, first)
    }

    /// The full source string.
    pub fn original(&self) -> &'a str {
        self.original
    }

    /// Number of segments.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The head of the chain.
    pub fn first(&self) -> &MemorySegment<'a, str> {
        &self.first
    }

    /// Segment at `index`, or `None` outside `[0, count)`.
    pub fn get(&self, index: usize) -> Option<&MemorySegment<'a, str>> {
        if index >= self.count {
            return None;
        }
        self.iter().nth(index)
    }

    /// Segment at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] outside `[0, count)`.
    pub fn try_get(&self, index: usize) -> Result<&MemorySegment<'a, str>> {
        self.get(index).ok_or(Error::IndexOutOfRange {
            index,
            count: self.count,
        })
    }

    /// Iterate the segments in order, starting from the head.
    pub fn iter(&self) -> Chain<'_, 'a, str> {
        self.first.iter()
    }

    /// Iterate the segment texts in order.
    pub fn parts(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.iter().map(MemorySegment::memory)
    }

    /// Byte range of each segment inside [`original`](Self::original).
    ///
    /// Yields exactly one item per segment, in chain order. A segment that
    /// does not point into `original` (possible only through
    /// [`new`](Self::new)) yields `None`.
    ///
    /// ```rust
    /// use strseg::StringSegments;
    ///
    /// let segments = StringSegments::split("ab, cd", ',');
    /// let spans: Vec<_> = segments.spans().collect();
    /// assert_eq!(spans, [Some(0..2), Some(3..6)]);
    /// ```
    pub fn spans(&self) -> impl Iterator<Item = Option<Range<usize>>> + '_ {
        self.iter().map(|segment| segment.span_in(self.original))
    }

    /// Total length of all segments, separators excluded.
    pub fn joined_len(&self) -> usize {
        self.iter().last().map_or(0, MemorySegment::end_index)
    }
}

fn trace_split(value: &str, matcher: &Matcher<'_>, count: usize) {
    tracing::trace!(
        len = value.len(),
        separator_len = matcher.needle_len(),
        comparison = %matcher.comparison(),
        count,
        "split string segments"
    );
}

impl<'a> Index<usize> for StringSegments<'a> {
    type Output = MemorySegment<'a, str>;

    fn index(&self, index: usize) -> &Self::Output {
        match self.try_get(index) {
            Ok(segment) => segment,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'s, 'a> IntoIterator for &'s StringSegments<'a> {
    type Item = &'s MemorySegment<'a, str>;
    type IntoIter = Chain<'s, 'a, str>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
