//! Separator comparison modes and the matchers that implement them.
//!
//! Both modes are ordinal: characters are compared by value, never by locale.
//!
//! | Mode | Matches `"ab"` in | Search |
//! |------|-------------------|--------|
//! | `Ordinal` | `"ab"` | `memchr` / `memmem` over bytes |
//! | `OrdinalIgnoreCase` | `"ab"`, `"Ab"`, `"aB"`, `"AB"` | `memchr3` candidates, then per-char compare |
//!
//! Case folding approximates the simple (one-to-one) uppercase mapping:
//!
//! | Character | Full uppercase | Folds to |
//! |-----------|----------------|----------|
//! | `'a'` | `"A"` | `'A'` |
//! | `'ᾳ'` / `'ᾼ'` | `"ΑΙ"` | `'ᾳ'` (lowercase, since uppercase expands) |
//! | `'ß'` | `"SS"` | `'ß'` |
//! | `'ẞ'` | `"ẞ"` | `'ẞ'` |
//!
//! When the full uppercase is one character it is the simple mapping. When it
//! expands, the titlecase and ypogegrammeni forms still pair up through their
//! common lowercase; `'ß'`, which has no simple uppercase, only matches itself.
//!
//! A case-insensitive match may span a different number of bytes than the
//! pattern (`'ſ'` folds to `'S'` but is two bytes long), so matchers report the
//! matched byte range rather than assuming the pattern's length.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use memchr::memmem;

use crate::Error;

/// How a separator pattern is compared against the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Comparison {
    /// Exact, case-sensitive comparison.
    #[default]
    Ordinal,
    /// Case-insensitive comparison using simple per-character case folding.
    OrdinalIgnoreCase,
}

impl Comparison {
    /// The textual name of this mode, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ordinal => "ordinal",
            Self::OrdinalIgnoreCase => "ordinal-ignore-case",
        }
    }

    /// Whether letter case is ignored.
    pub const fn ignores_case(self) -> bool {
        matches!(self, Self::OrdinalIgnoreCase)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Comparison {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ordinal" => Ok(Self::Ordinal),
            "ordinal-ignore-case" => Ok(Self::OrdinalIgnoreCase),
            other => Err(Error::UnknownComparison(other.to_string())),
        }
    }
}

/// A compiled separator search.
pub(crate) enum Matcher<'n> {
    Byte(u8),
    Ordinal(memmem::Finder<'n>),
    IgnoreCase(&'n str),
}

impl<'n> Matcher<'n> {
    pub(crate) fn new(needle: &'n str, comparison: Comparison) -> Self {
        debug_assert!(!needle.is_empty(), "separator must not be empty");
        match comparison {
            Comparison::Ordinal => match *needle.as_bytes() {
                [byte] => Self::Byte(byte),
                _ => Self::Ordinal(memmem::Finder::new(needle)),
            },
            Comparison::OrdinalIgnoreCase => Self::IgnoreCase(needle),
        }
    }

    /// Length of the separator as written, in bytes.
    pub(crate) fn needle_len(&self) -> usize {
        match self {
            Self::Byte(_) => 1,
            Self::Ordinal(finder) => finder.needle().len(),
            Self::IgnoreCase(needle) => needle.len(),
        }
    }

    pub(crate) fn comparison(&self) -> Comparison {
        match self {
            Self::Byte(_) | Self::Ordinal(_) => Comparison::Ordinal,
            Self::IgnoreCase(_) => Comparison::OrdinalIgnoreCase,
        }
    }

    /// Byte range of the first match starting at or after `from`.
    ///
    /// `from` must lie on a char boundary of `haystack`.
    pub(crate) fn find(&self, haystack: &str, from: usize) -> Option<Range<usize>> {
        let rest = &haystack[from..];
        let found = match self {
            Self::Byte(byte) => memchr::memchr(*byte, rest.as_bytes()).map(|i| i..i + 1),
            Self::Ordinal(finder) => finder
                .find(rest.as_bytes())
                .map(|i| i..i + finder.needle().len()),
            Self::IgnoreCase(needle) => find_ignore_case(rest, needle),
        }?;
        Some(from + found.start..from + found.end)
    }
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    let try_at = |start: usize| {
        match_len_ignore_case(&haystack[start..], needle).map(|len| start..start + len)
    };

    match needle.bytes().next() {
        // Candidates are ASCII bytes or UTF-8 lead bytes, so always char boundaries.
        Some(first) if first.is_ascii() => {
            let (lower, upper) = (first.to_ascii_lowercase(), first.to_ascii_uppercase());
            memchr::memchr3_iter(lower, upper, folding_lead_byte(lower), haystack.as_bytes())
                .find_map(try_at)
        }
        _ => haystack.char_indices().find_map(|(start, _)| try_at(start)),
    }
}

/// Lead byte of the non-ASCII character that folds onto ASCII `lower`, if any.
///
/// Only U+0131 (`'ı'`, to `'I'`) and U+017F (`'ſ'`, to `'S'`) do. Other letters
/// return `lower` itself, which `memchr3` already covers.
fn folding_lead_byte(lower: u8) -> u8 {
    match lower {
        b'i' => 0xC4,
        b's' => 0xC5,
        _ => lower,
    }
}

/// Bytes of `text` consumed by matching `needle` at its start.
fn match_len_ignore_case(text: &str, needle: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    for expected in needle.chars() {
        let (_, actual) = chars.next()?;
        if !chars_eq_ignore_case(actual, expected) {
            return None;
        }
    }
    Some(chars.next().map_or(text.len(), |(end, _)| end))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(&b);
    }
    a == b || fold(a) == fold(b)
}

fn fold(c: char) -> char {
    single(c.to_uppercase())
        .or_else(|| single(c.to_lowercase()))
        .unwrap_or(c)
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
