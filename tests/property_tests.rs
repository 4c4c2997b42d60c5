//! Property-based tests for string splitting.
//!
//! These tests verify that splits maintain key invariants:
//! - Count: one more segment than separator occurrences
//! - Round trip: joining the parts with the separator restores the input
//! - Running index: each node starts where the previous one ended
//! - Indexing: `segments[i]` is the node reached by walking `i` links

use std::io::Read;

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use strseg::{Comparison, MemorySegment, StringSegments};

// =============================================================================
// Test Generators
// =============================================================================

/// Text drawn from a small alphabet so separators occur often.
fn dense_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab.,→ ]{0,60}").unwrap()
}

/// ASCII text with mixed case for comparison-mode tests.
fn mixed_case_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[aAbBcC1-3]{0,60}").unwrap()
}

fn separator_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['.', ',', ' ', 'a', '→'])
}

fn separator_pattern() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab.]{1,3}").unwrap()
}

// =============================================================================
// Invariant Helpers
// =============================================================================

/// Check that each running index is the sum of the lengths before it.
fn running_indexes_accumulate(segments: &StringSegments<'_>) -> bool {
    let mut expected = 0;
    for segment in segments {
        if segment.running_index() != expected {
            return false;
        }
        expected += segment.len();
    }
    expected == segments.joined_len()
}

/// Check that indexing agrees with iteration at every position.
fn indexing_matches_iteration(segments: &StringSegments<'_>) -> bool {
    segments
        .iter()
        .enumerate()
        .all(|(i, segment)| std::ptr::eq(&segments[i], segment))
        && segments.get(segments.count()).is_none()
}

// =============================================================================
// Single-Character Splits
// =============================================================================

proptest! {
    #[test]
    fn char_count_is_occurrences_plus_one(text in dense_text(), sep in separator_char()) {
        let segments = StringSegments::split(&text, sep);
        let occurrences = text.matches(sep).count();
        prop_assert_eq!(segments.count(), occurrences + 1);
        prop_assert_eq!(segments.iter().count(), segments.count());
    }

    #[test]
    fn char_round_trip(text in dense_text(), sep in separator_char()) {
        let segments = StringSegments::split(&text, sep);
        let mut buf = [0u8; 4];
        let sep: &str = sep.encode_utf8(&mut buf);
        let parts: Vec<&str> = segments.parts().collect();
        prop_assert_eq!(parts.join(sep), text.as_str());
    }

    #[test]
    fn char_matches_std_split(text in dense_text(), sep in separator_char()) {
        let segments = StringSegments::split(&text, sep);
        let ours: Vec<&str> = segments.parts().collect();
        let expected: Vec<&str> = text.split(sep).collect();
        prop_assert_eq!(ours, expected);
    }

    #[test]
    fn char_running_index(text in dense_text(), sep in separator_char()) {
        let segments = StringSegments::split(&text, sep);
        prop_assert!(running_indexes_accumulate(&segments));
    }

    #[test]
    fn char_indexing(text in dense_text(), sep in separator_char()) {
        let segments = StringSegments::split(&text, sep);
        prop_assert!(indexing_matches_iteration(&segments));
    }

    #[test]
    fn spans_point_into_original(text in dense_text(), sep in separator_char()) {
        let segments = StringSegments::split(&text, sep);
        let spans: Vec<_> = segments.spans().collect();
        prop_assert_eq!(spans.len(), segments.count());
        for (span, part) in spans.into_iter().zip(segments.parts()) {
            let span = span.expect("split segments point into the source");
            prop_assert_eq!(&text[span], part);
        }
    }
}

// =============================================================================
// Pattern Splits
// =============================================================================

proptest! {
    #[test]
    fn pattern_matches_std_split(text in dense_text(), sep in separator_pattern()) {
        let segments = StringSegments::split_pattern(&text, &sep).unwrap();
        let ours: Vec<&str> = segments.parts().collect();
        let expected: Vec<&str> = text.split(sep.as_str()).collect();
        prop_assert_eq!(ours, expected);
    }

    #[test]
    fn pattern_round_trip(text in dense_text(), sep in separator_pattern()) {
        let segments = StringSegments::split_pattern(&text, &sep).unwrap();
        let parts: Vec<&str> = segments.parts().collect();
        prop_assert_eq!(parts.join(sep.as_str()), text.as_str());
        prop_assert!(running_indexes_accumulate(&segments));
        prop_assert!(indexing_matches_iteration(&segments));
    }

    #[test]
    fn ignore_case_matches_lowercased_ordinal(
        text in mixed_case_text(),
        sep in prop::string::string_regex("[aAbB]{1,2}").unwrap()
    ) {
        let segments =
            StringSegments::split_with(&text, &sep, Comparison::OrdinalIgnoreCase).unwrap();

        let lowered = text.to_ascii_lowercase();
        let reference =
            StringSegments::split_pattern(&lowered, &sep.to_ascii_lowercase()).unwrap();

        let ours: Vec<_> = segments.spans().collect();
        let expected: Vec<_> = reference.spans().collect();
        prop_assert_eq!(ours, expected);
    }

    #[test]
    fn ordinal_never_splits_more_than_ignore_case(
        text in mixed_case_text(),
        sep in prop::string::string_regex("[aAbB]{1,2}").unwrap()
    ) {
        let ordinal = StringSegments::split_with(&text, &sep, Comparison::Ordinal).unwrap();
        let ignore = StringSegments::split_with(&text, &sep, Comparison::OrdinalIgnoreCase).unwrap();
        prop_assert!(ordinal.count() <= ignore.count());
    }
}

// =============================================================================
// Generic Chains
// =============================================================================

proptest! {
    #[test]
    fn byte_chain_running_index(chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..8), 1..20)) {
        let mut head = MemorySegment::new(chunks[0].as_slice());
        let mut last = &mut head;
        for chunk in &chunks[1..] {
            last = last.append(chunk.as_slice());
        }

        let total: usize = chunks.iter().map(Vec::len).sum();
        let mut expected = 0;
        for (node, chunk) in head.iter().zip(&chunks) {
            prop_assert_eq!(node.running_index(), expected);
            prop_assert_eq!(node.memory(), chunk.as_slice());
            expected += chunk.len();
        }
        prop_assert_eq!(expected, total);
        prop_assert_eq!(head.iter().count(), chunks.len());
    }
}

fn byte_chunks() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 0..8), 1..20)
}

/// Build a chain over `chunks` and pass its head to `f`.
fn with_chain<R>(chunks: &[Vec<u8>], f: impl FnOnce(&MemorySegment<'_, [u8]>) -> R) -> R {
    let mut head = MemorySegment::new(chunks[0].as_slice());
    let mut last = &mut head;
    for chunk in &chunks[1..] {
        last = last.append(chunk.as_slice());
    }
    f(&head)
}

proptest! {
    #[test]
    fn byte_chain_find_matches_flattened(chunks in byte_chunks()) {
        let flat: Vec<u8> = chunks.concat();
        with_chain(&chunks, |head| -> Result<(), TestCaseError> {
            for (position, byte) in flat.iter().enumerate() {
                let (segment, offset) = head.find(position).unwrap();
                prop_assert_eq!(segment.memory()[offset], *byte);
                prop_assert_eq!(segment.running_index() + offset, position);
            }
            prop_assert!(head.find(flat.len()).is_none());
            Ok(())
        })?;
    }

    #[test]
    fn byte_chain_gathers_to_flattened(chunks in byte_chunks(), buf_len in 1usize..7) {
        let flat: Vec<u8> = chunks.concat();
        with_chain(&chunks, |head| -> Result<(), TestCaseError> {
            let mut reader = head.reader();
            let mut buf = vec![0u8; buf_len];
            let mut read = Vec::new();
            loop {
                let n = reader.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                read.extend_from_slice(&buf[..n]);
            }
            prop_assert_eq!(&read, &flat);
            prop_assert_eq!(reader.position(), flat.len());

            let gathered: Vec<u8> = head
                .io_slices()
                .iter()
                .flat_map(|slice| slice.iter().copied())
                .collect();
            prop_assert_eq!(&gathered, &flat);
            Ok(())
        })?;
    }
}
