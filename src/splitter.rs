//! Reusable split configuration and the `str` extension trait.

use crate::comparison::{Comparison, Matcher};
use crate::segments::StringSegments;
use crate::{Error, Result};

/// What to split on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Separator {
    /// A single character.
    Char(char),
    /// A literal, possibly multi-character, pattern.
    Pattern(String),
}

impl Separator {
    /// Length of the separator in UTF-8 bytes.
    pub fn len_utf8(&self) -> usize {
        match self {
            Self::Char(c) => c.len_utf8(),
            Self::Pattern(p) => p.len(),
        }
    }
}

impl From<char> for Separator {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<&str> for Separator {
    fn from(s: &str) -> Self {
        Self::Pattern(s.to_string())
    }
}

impl From<String> for Separator {
    fn from(s: String) -> Self {
        Self::Pattern(s)
    }
}

/// A validated separator and comparison mode, ready to split any number of strings.
///
/// ## Example
///
/// ```rust
/// use strseg::Splitter;
///
/// let splitter = Splitter::new(" AND ").unwrap().ignore_case();
/// let segments = splitter.split("a and b AND c");
/// let parts: Vec<&str> = segments.parts().collect();
/// assert_eq!(parts, ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splitter {
    separator: Separator,
    comparison: Comparison,
}

impl Splitter {
    /// Create an ordinal splitter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySeparator`] for an empty pattern.
    pub fn new(separator: impl Into<Separator>) -> Result<Self> {
        let separator = separator.into();
        if separator.len_utf8() == 0 {
            return Err(Error::EmptySeparator);
        }
        Ok(Self {
            separator,
            comparison: Comparison::Ordinal,
        })
    }

    /// Use `comparison` when matching the separator.
    ///
    /// A [`Separator::Char`] also honors the mode, so `'x'` with
    /// [`Comparison::OrdinalIgnoreCase`] splits on `'X'` as well.
    #[must_use]
    pub fn with_comparison(self, comparison: Comparison) -> Self {
        Self { comparison, ..self }
    }

    /// Shorthand for `with_comparison(Comparison::OrdinalIgnoreCase)`.
    #[must_use]
    pub fn ignore_case(self) -> Self {
        self.with_comparison(Comparison::OrdinalIgnoreCase)
    }

    /// The configured separator.
    pub fn separator(&self) -> &Separator {
        &self.separator
    }

    /// The configured comparison mode.
    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    /// Split `text`.
    pub fn split<'a>(&self, text: &'a str) -> StringSegments<'a> {
        let mut buf = [0u8; 4];
        let needle: &str = match &self.separator {
            Separator::Char(c) => c.encode_utf8(&mut buf),
            Separator::Pattern(p) => p.as_str(),
        };
        StringSegments::split_matching(text, &Matcher::new(needle, self.comparison))
    }
}

/// Split methods on `str` (and `String` through deref).
///
/// ```rust
/// use strseg::SplitSegments;
///
/// let line = String::from("a,b,c");
/// assert_eq!(line.split_segments(',').count(), 3);
/// ```
pub trait SplitSegments {
    /// See [`StringSegments::split`].
    fn split_segments(&self, separator: char) -> StringSegments<'_>;

    /// See [`StringSegments::split_pattern`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySeparator`] if `separator` is empty.
    fn split_segments_str(&self, separator: &str) -> Result<StringSegments<'_>>;

    /// See [`StringSegments::split_with`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySeparator`] if `separator` is empty.
    fn split_segments_with(
        &self,
        separator: &str,
        comparison: Comparison,
    ) -> Result<StringSegments<'_>>;
}

impl SplitSegments for str {
    fn split_segments(&self, separator: char) -> StringSegments<'_> {
        StringSegments::split(self, separator)
    }

    fn split_segments_str(&self, separator: &str) -> Result<StringSegments<'_>> {
        StringSegments::split_pattern(self, separator)
    }

    fn split_segments_with(
        &self,
        separator: &str,
        comparison: Comparison,
    ) -> Result<StringSegments<'_>> {
        StringSegments::split_with(self, separator, comparison)
    }
}
