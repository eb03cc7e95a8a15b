/// Configuration options for the comment scanner.
///
/// Options are fixed for the lifetime of a [`Scanner`](crate::Scanner) and
/// are never written by [`serialize`](crate::Scanner::serialize); a host
/// that restores a checkpoint keeps whatever options it created the scanner
/// with.
///
/// # Examples
///
/// ```rust
/// use wolfram_scanner::{Scanner, ScannerOptions};
///
/// let scanner = Scanner::with_options(ScannerOptions {
///     max_depth: Some(64),
///     ..Default::default()
/// });
/// ```
///
/// # Default
///
/// No nesting limit, Unicode whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ScannerOptions {
    /// Deepest nesting accepted inside a single comment, counting the
    /// outermost `(*` as depth 1.
    ///
    /// A comment that opens more levels than this is rejected as soon as the
    /// extra opener is seen, so the host reports an error instead of the
    /// scanner walking arbitrarily far.
    ///
    /// # Default
    ///
    /// `None` (unlimited)
    pub max_depth: Option<usize>,

    /// Whether to skip only ASCII whitespace before a comment.
    ///
    /// By default the scanner skips any code point with the Unicode
    /// `White_Space` property, which includes U+00A0, U+2028 and the
    /// ideographic space.
    ///
    /// # Default
    ///
    /// `false`
    pub ascii_whitespace_only: bool,
}

impl ScannerOptions {
    pub(crate) fn is_whitespace(&self, c: char) -> bool {
        if self.ascii_whitespace_only {
            c.is_ascii_whitespace()
        } else {
            c.is_whitespace()
        }
    }
}
