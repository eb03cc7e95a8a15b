use thiserror::Error;

/// Why a scan did not produce a token.
///
/// None of these are fatal: the host treats every variant as "not an
/// external token here" and carries on with its own lexer from wherever the
/// cursor was left.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Abstain {
    /// After whitespace, the lookahead was not `(`. Only whitespace has been
    /// consumed.
    #[error("no comment at cursor (found {})", DisplayFound(.found))]
    NotAComment {
        /// Lookahead, or `None` at end of input.
        found: Option<char>,
    },
    /// A `(` was consumed but the next code point was not `*`.
    #[error("'(' not followed by '*' (found {})", DisplayFound(.found))]
    PartialOpener {
        /// Lookahead after the `(`, or `None` at end of input.
        found: Option<char>,
    },
    /// Input ended while `depth` comments were still open.
    #[error("unterminated comment, {depth} level(s) still open")]
    Unterminated {
        /// Open comments at end of input.
        depth: usize,
    },
    /// Nesting went deeper than the configured ceiling.
    #[error("comment nesting exceeds limit of {limit}")]
    DepthLimit {
        /// The configured ceiling.
        limit: usize,
    },
}

struct DisplayFound<'a>(&'a Option<char>);

impl core::fmt::Display for DisplayFound<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self.0 {
            Some(c) => write!(f, "{c:?}"),
            None => f.write_str("end of input"),
        }
    }
}
