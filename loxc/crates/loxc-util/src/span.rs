//! Span module - Source location tracking.
//!
//! A [`Span`] records the byte range a lexeme occupies in the source buffer
//! together with the 1-based line it starts on. Lox diagnostics only ever
//! report lines, so no column information is kept.
//!
//! # Examples
//!
//! ```
//! use loxc_util::span::Span;
//!
//! let span = Span::new(4, 7, 1);
//! assert_eq!(span.len(), 3);
//! assert_eq!(span.slice("var abc = 1;"), "abc");
//! ```

/// Source location span
///
/// # Examples
///
/// ```
/// use loxc_util::span::Span;
///
/// let span = Span::new(10, 20, 3);
/// assert_eq!(span.start, 10);
/// assert_eq!(span.end, 20);
/// assert_eq!(span.line, 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source (inclusive)
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
}

impl Span {
    /// Dummy span for diagnostics without a location
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.line, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32) -> Self {
        debug_assert!(start <= end, "span start {} > end {}", start, end);
        Self { start, end, line }
    }

    /// Create an empty span at a single byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::span::Span;
    ///
    /// let point = Span::point(12, 2);
    /// assert!(point.is_empty());
    /// assert_eq!(point.start, 12);
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32) -> Self {
        Self::new(offset, offset, line)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span ends at or before `other` starts
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::span::Span;
    ///
    /// let a = Span::new(0, 2, 1);
    /// let b = Span::new(2, 3, 1);
    /// assert!(a.precedes(b));
    /// assert!(!b.precedes(a));
    /// ```
    #[inline]
    pub fn precedes(&self, other: Span) -> bool {
        self.end <= other.start
    }

    /// Returns the text this span covers in `source`
    ///
    /// # Panics
    ///
    /// Panics if the span is out of bounds or does not fall on UTF-8
    /// character boundaries of `source`.
    #[inline]
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start..self.end]
    }
}
