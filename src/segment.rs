//! The generic segment node: one borrowed slice in a forward-linked chain.
//!
//! ## Layout
//!
//! A chain is a head node that owns its successor, which owns its successor,
//! and so on. Every node records where it starts in the flattened sequence:
//!
//! ```text
//! memory:         "first"   "source"   "!"
//! running_index:   0         5          11
//! next:            ──────▶   ──────▶    None
//! ```
//!
//! Nothing here knows about text. The node is parameterized over any
//! [`Contiguous`] element kind (`[E]` or `str`), so the same chain works as a
//! scatter/gather view over byte buffers and as the result of a string split.
//!
//! ## Appending
//!
//! [`MemorySegment::append`] links exactly one successor. A node that already
//! has one panics on a second append; [`MemorySegment::try_append`] reports
//! [`Error::AlreadyLinked`] instead.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;

use crate::{Error, Result};

/// A contiguous run of elements with a length.
///
/// Implemented for slices and `str`. The length of a `str` is in UTF-8 bytes.
pub trait Contiguous {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> Contiguous for [E] {
    fn len(&self) -> usize {
        <[E]>::len(self)
    }
}

impl Contiguous for str {
    fn len(&self) -> usize {
        str::len(self)
    }
}

/// One node of a forward-linked chain of borrowed slices.
///
/// ## Example
///
/// ```rust
/// use strseg::MemorySegment;
///
/// let mut first = MemorySegment::new("first");
/// first.append("source");
///
/// let second = first.next().unwrap();
/// assert_eq!(second.memory(), "source");
/// assert_eq!(second.running_index(), 5);
/// ```
pub struct MemorySegment<'a, T: ?Sized> {
    memory: &'a T,
    running_index: usize,
    next: Option<Box<MemorySegment<'a, T>>>,
}

impl<'a, T: ?Sized + Contiguous> MemorySegment<'a, T> {
    /// Create a head node with no successor and a running index of 0.
    ///
    /// Empty memory is allowed.
    pub fn new(memory: &'a T) -> Self {
        Self {
            memory,
            running_index: 0,
            next: None,
        }
    }

    /// Link a new node after this one and return it.
    ///
    /// The new node starts at `self.running_index() + self.len()`.
    ///
    /// # Panics
    ///
    /// Panics if this node already has a successor.
    pub fn append(&mut self, memory: &'a T) -> &mut Self {
        assert!(
            self.next.is_none(),
            "segment at running index {} already has a successor",
            self.running_index
        );
        self.link(memory)
    }

    /// Like [`append`](Self::append), but reports a second append as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyLinked`] if this node already has a successor.
    pub fn try_append(&mut self, memory: &'a T) -> Result<&mut Self> {
        if self.next.is_some() {
            return Err(Error::AlreadyLinked {
                running_index: self.running_index,
            });
        }
        Ok(self.link(memory))
    }

    fn link(&mut self, memory: &'a T) -> &mut Self {
        let next = Self {
            memory,
            running_index: self.end_index(),
            next: None,
        };
        &mut **self.next.insert(Box::new(next))
    }

    /// The slice this node covers.
    pub fn memory(&self) -> &'a T {
        self.memory
    }

    /// Sum of the lengths of every node before this one.
    pub fn running_index(&self) -> usize {
        self.running_index
    }

    /// The following node, or `None` at the tail.
    pub fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }

    /// Length of this node's slice.
    pub fn len(&self) -> usize {
        self.memory.len()
    }

    /// Whether this node's slice is empty.
    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    /// Running index one past the end of this node.
    pub fn end_index(&self) -> usize {
        self.running_index + self.len()
    }

    /// Walk the chain from this node to the tail.
    pub fn iter(&self) -> Chain<'_, 'a, T> {
        Chain { cursor: Some(self) }
    }

    /// Locate a flattened position: the node that holds it and the offset inside that node.
    ///
    /// `position` is in running-index units and the walk starts at this node,
    /// so positions before `self.running_index()` or past the tail give `None`.
    /// Empty nodes never hold a position.
    ///
    /// ```rust
    /// use strseg::MemorySegment;
    ///
    /// let mut head = MemorySegment::new("first");
    /// head.append("").append("source");
    ///
    /// let (segment, offset) = head.find(7).unwrap();
    /// assert_eq!((segment.memory(), offset), ("source", 2));
    /// assert!(head.find(11).is_none());
    /// ```
    pub fn find(&self, position: usize) -> Option<(&Self, usize)> {
        if position < self.running_index {
            return None;
        }
        self.iter()
            .find(|segment| position < segment.end_index())
            .map(|segment| (segment, position - segment.running_index))
    }
}

impl MemorySegment<'_, str> {
    /// Byte range of this segment inside `original`.
    ///
    /// Returns `None` if the segment does not point into `original`.
    ///
    /// ```rust
    /// use strseg::StringSegments;
    ///
    /// let text = "key=value";
    /// let segments = StringSegments::split(text, '=');
    /// assert_eq!(segments[1].span_in(text), Some(4..9));
    /// ```
    pub fn span_in(&self, original: &str) -> Option<Range<usize>> {
        let start = (self.memory.as_ptr() as usize).checked_sub(original.as_ptr() as usize)?;
        let end = start + self.memory.len();
        (end <= original.len()).then_some(start..end)
    }
}

// Unlink iteratively; the default recursive drop overflows on long chains.
impl<T: ?Sized> Drop for MemorySegment<'_, T> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for MemorySegment<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySegment")
            .field("memory", &self.memory)
            .field("running_index", &self.running_index)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

impl fmt::Display for MemorySegment<'_, str> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.memory)
    }
}

impl<'s, 'a, T: ?Sized + Contiguous> IntoIterator for &'s MemorySegment<'a, T> {
    type Item = &'s MemorySegment<'a, T>;
    type IntoIter = Chain<'s, 'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the nodes of a chain, following `next` links.
pub struct Chain<'s, 'a, T: ?Sized> {
    cursor: Option<&'s MemorySegment<'a, T>>,
}

impl<T: ?Sized> Clone for Chain<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor,
        }
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Chain<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain").field("cursor", &self.cursor).finish()
    }
}

impl<'s, 'a, T: ?Sized + Contiguous> Iterator for Chain<'s, 'a, T> {
    type Item = &'s MemorySegment<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor?;
        self.cursor = current.next();
        Some(current)
    }
}

impl<T: ?Sized + Contiguous> FusedIterator for Chain<'_, '_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_successor() {
        let segment = MemorySegment::new("first");
        assert!(segment.next().is_none());
        assert_eq!(segment.memory(), "first");
        assert_eq!(segment.running_index(), 0);
    }

    #[test]
    fn test_append() {
        let mut first = MemorySegment::new("first");
        let second = first.append("source");
        assert!(second.next().is_none());
        assert_eq!(second.memory(), "source");
        assert_eq!(second.running_index(), 5);

        let second = first.next().unwrap();
        assert_eq!(second.memory(), "source");
        assert_eq!(second.end_index(), 11);
    }

    #[test]
    fn test_running_index_accumulates() {
        let mut head = MemorySegment::new("ab");
        head.append("").append("cde").append("f");

        let starts: Vec<usize> = head.iter().map(MemorySegment::running_index).collect();
        assert_eq!(starts, vec![0, 2, 2, 5]);
    }

    #[test]
    fn test_empty_memory_preserved() {
        let mut head = MemorySegment::new("");
        head.append("");
        assert_eq!(head.iter().count(), 2);
        assert!(head.iter().all(MemorySegment::is_empty));
    }

    #[test]
    fn test_generic_over_slices() {
        let data = [1u32, 2, 3, 4, 5];
        let mut head = MemorySegment::new(&data[..2]);
        head.append(&data[2..]);

        let tail = head.next().unwrap();
        assert_eq!(tail.memory(), &[3, 4, 5]);
        assert_eq!(tail.running_index(), 2);
        assert_eq!(tail.end_index(), 5);
    }

    #[test]
    #[should_panic(expected = "already has a successor")]
    fn test_second_append_panics() {
        let mut head = MemorySegment::new("a");
        head.append("b");
        head.append("c");
    }

    #[test]
    fn test_try_append_rejects_second_link() {
        let mut head = MemorySegment::new("abc");
        assert!(head.try_append("d").is_ok());
        assert_eq!(
            head.try_append("e").unwrap_err(),
            Error::AlreadyLinked { running_index: 0 }
        );
        assert_eq!(head.next().unwrap().memory(), "d");
    }

    #[test]
    fn test_long_chain_drops() {
        let data = vec![7u8; 200_000];
        let mut head = MemorySegment::new(&data[..1]);
        let mut last = &mut head;
        for i in 1..data.len() {
            last = last.append(&data[i..=i]);
        }
        assert_eq!(last.running_index(), data.len() - 1);
        assert_eq!(head.iter().count(), data.len());
        drop(head);
    }

    #[test]
    fn test_find_locates_position() {
        let mut head = MemorySegment::new("ab");
        head.append("").append("cde");

        let located: Vec<_> = (0..5)
            .map(|p| head.find(p).map(|(s, off)| (s.memory(), off)))
            .collect();
        assert_eq!(
            located,
            vec![
                Some(("ab", 0)),
                Some(("ab", 1)),
                Some(("cde", 0)),
                Some(("cde", 1)),
                Some(("cde", 2)),
            ]
        );
        assert!(head.find(5).is_none());

        let tail = head.next().unwrap().next().unwrap();
        assert!(tail.find(1).is_none());
        assert_eq!(tail.find(4).map(|(_, off)| off), Some(2));
    }

    #[test]
    fn test_span_in() {
        let text = "hello world";
        let segment = MemorySegment::new(&text[6..]);
        assert_eq!(segment.span_in(text), Some(6..11));
        assert_eq!(segment.span_in("unrelated"), None);
    }

    #[test]
    fn test_display_writes_text() {
        let segment = MemorySegment::new("abc");
        assert_eq!(segment.to_string(), "abc");
    }
}
