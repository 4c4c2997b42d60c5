//! Byte chains as one flattened, read-only buffer.
//!
//! A chain of `[u8]` segments is the scatter/gather shape I/O wants: either
//! hand the pieces to a vectored write as [`IoSlice`]s, or read through them
//! in order with [`ChainReader`] without first copying them together.
//!
//! ```text
//! segments:   [de ad] ─▶ [] ─▶ [be ef 01]
//! reader:      de ad be ef 01
//! io_slices:  [de ad] [be ef 01]          (empty segments skipped)
//! ```

use std::io::{self, BufRead, IoSlice, Read};

use crate::segment::MemorySegment;

impl<'a> MemorySegment<'a, [u8]> {
    /// Read the chain from this node to the tail as one byte stream.
    ///
    /// ```rust
    /// use std::io::Read;
    /// use strseg::MemorySegment;
    ///
    /// let mut head = MemorySegment::new(&b"hello "[..]);
    /// head.append(b"world");
    ///
    /// let mut out = String::new();
    /// head.reader().read_to_string(&mut out).unwrap();
    /// assert_eq!(out, "hello world");
    /// ```
    pub fn reader(&self) -> ChainReader<'_, 'a> {
        ChainReader {
            cursor: Some(self),
            offset: 0,
            position: self.running_index(),
        }
    }

    /// The non-empty segments from this node to the tail, for vectored writes.
    pub fn io_slices(&self) -> Vec<IoSlice<'a>> {
        self.iter()
            .filter(|segment| !segment.is_empty())
            .map(|segment| IoSlice::new(segment.memory()))
            .collect()
    }
}

/// [`Read`] and [`BufRead`] over a chain of byte segments.
///
/// `fill_buf` hands out the current segment's remaining bytes directly, so
/// buffered consumers never copy.
#[derive(Debug, Clone)]
pub struct ChainReader<'s, 'a> {
    cursor: Option<&'s MemorySegment<'a, [u8]>>,
    offset: usize,
    position: usize,
}

impl<'a> ChainReader<'_, 'a> {
    /// Flattened position of the next byte to be read.
    pub fn position(&self) -> usize {
        self.position
    }

    fn remaining(&mut self) -> &'a [u8] {
        while let Some(segment) = self.cursor {
            let memory = segment.memory();
            if self.offset < memory.len() {
                return &memory[self.offset..];
            }
            self.cursor = segment.next();
            self.offset = 0;
        }
        &[]
    }
}

impl Read for ChainReader<'_, '_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut written = 0;
        while written < buf.len() {
            let chunk = self.remaining();
            if chunk.is_empty() {
                break;
            }
            let n = chunk.len().min(buf.len() - written);
            buf[written..written + n].copy_from_slice(&chunk[..n]);
            self.consume(n);
            written += n;
        }
        Ok(written)
    }
}

impl BufRead for ChainReader<'_, '_> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.remaining())
    }

    fn consume(&mut self, amt: usize) {
        self.offset += amt;
        self.position += amt;
    }
}
