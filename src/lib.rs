//! # strseg
//!
//! Zero-copy string splitting into linked, indexable segment chains.
//!
//! ## The Problem
//!
//! `str::split` is lazy but single-pass: once consumed, the pieces are gone,
//! and collecting them into a `Vec<String>` copies every byte. Often you want
//! to split once, keep the result around, index into it, walk it several
//! times, and know where each piece sits in the flattened sequence, all
//! without copying the source.
//!
//! ## The Shape of the Result
//!
//! A split produces a chain of [`MemorySegment`] nodes. Each node borrows one
//! piece of the source and records its running index: the combined length of
//! every piece before it.
//!
//! ```text
//! split("1.22.333", '.')
//!
//! original:  "1.22.333"
//!             │ ││ │││
//! segments:  "1" ─▶ "22" ─▶ "333"
//! running:    0      1       3
//! ```
//!
//! The chain is wrapped in a [`StringSegments`] that keeps the original string
//! and the segment count. The borrow checker ties every segment to the source,
//! so the source cannot be freed or mutated while a segment is alive.
//!
//! ## Two Layers
//!
//! - [`MemorySegment`] is generic over the element kind (`[E]` or `str`). It
//!   knows nothing about text and works as a scatter/gather view over any
//!   contiguous buffers. [`MemorySegment::find`] maps a flattened position to
//!   a node, and byte chains can be read through [`ChainReader`] or gathered
//!   into `IoSlice`s for vectored writes.
//! - [`StringSegments`] is the `str`-specialized splitter built on top.
//!
//! ## Quick Start
//!
//! ```rust
//! use strseg::{Comparison, SplitSegments, Splitter, StringSegments};
//!
//! // Single character
//! let segments = StringSegments::split("1.2.3.4", '.');
//! assert_eq!(segments.count(), 4);
//! assert_eq!(segments[3].memory(), "4");
//!
//! // Literal pattern, case-insensitive
//! let segments = "1ab2Ab3".split_segments_with("AB", Comparison::OrdinalIgnoreCase)?;
//! assert_eq!(segments.parts().collect::<Vec<_>>(), ["1", "2", "3"]);
//!
//! // Reusable configuration
//! let splitter = Splitter::new("::")?;
//! assert_eq!(splitter.split("a::b").count(), 2);
//! # Ok::<(), strseg::Error>(())
//! ```
//!
//! ## Semantics at a Glance
//!
//! | Input | Separator | Segments |
//! |-------|-----------|----------|
//! | `""` | `'.'` | `[""]` |
//! | `"abc"` | `'.'` | `["abc"]` |
//! | `"."` | `'.'` | `["", ""]` |
//! | `"a..b"` | `'.'` | `["a", "", "b"]` |
//! | `"xaaay"` | `"aa"` | `["x", "ay"]` |
//!
//! An empty pattern is rejected with [`Error::EmptySeparator`].
//!
//! ## Performance Considerations
//!
//! | Operation | Cost |
//! |-----------|------|
//! | split, ordinal | O(n), `memchr`/`memmem` |
//! | split, ignore case | O(n × m) worst case, `memchr3` prefilter for ASCII-led patterns |
//! | `segments[i]` | O(i) |
//! | iteration | O(count) |
//!
//! One small node is allocated per segment; the text itself is never copied.

mod comparison;
mod error;
mod gather;
mod segment;
mod segments;
mod splitter;

pub use comparison::Comparison;
pub use error::{Error, Result};
pub use gather::ChainReader;
pub use segment::{Chain, Contiguous, MemorySegment};
pub use segments::StringSegments;
pub use splitter::{Separator, SplitSegments, Splitter};
