//! Scanner: the callback a parser runtime invokes for external tokens.
//!
//! One call to [`Scanner::scan`] does three things, in order:
//! - skips leading whitespace as extras, so it never becomes part of a token;
//! - recognizes the `(*` opener, abstaining on anything else;
//! - runs the nested body state machine (see `comment`) until the matching
//!   `*)` or end of input.
//!
//! The scanner keeps nothing between calls. Everything a call needs lives on
//! its stack, which is why serialization is empty and why a restored
//! checkpoint behaves exactly like a fresh scanner.
//!
//! Consumption on failure
//! - Whitespace is always consumed.
//! - A lone `(` is consumed before the scanner can see that no `*` follows.
//!   The lookahead is a single code point, so there is no way to confirm
//!   the opener first; the host restarts its own lexer from the cursor.
//! - An unterminated comment leaves everything up to end of input consumed.

mod comment;

use tracing::{debug, trace};

use self::comment::CommentBody;
use crate::{
    Abstain, Lexer, ScannerOptions, Symbol,
    lexer::peek,
};

/// Size of the buffer a host hands to [`Scanner::serialize`]. The scanner
/// never writes to it.
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// A successfully scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The symbol reported to the host.
    pub symbol: Symbol,
    /// Deepest nesting seen, counting the outermost comment as 1.
    pub deepest: usize,
}

/// The external scanner. Holds options only; no parse state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scanner {
    options: ScannerOptions,
}

impl Scanner {
    /// Creates a scanner with default options.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_options(ScannerOptions {
            max_depth: None,
            ascii_whitespace_only: false,
        })
    }

    /// Creates a scanner with the given options.
    #[must_use]
    pub const fn with_options(options: ScannerOptions) -> Self {
        Self { options }
    }

    /// The options this scanner was created with.
    #[must_use]
    pub const fn options(&self) -> &ScannerOptions {
        &self.options
    }

    /// Host entry point. Returns `true` iff a [`Symbol::Comment`] was
    /// produced, its end marked and the result symbol set on `lexer`.
    ///
    /// `valid_symbols` is indexed by [`Symbol::ordinal`]. Comments are extras
    /// in the Wolfram grammar and so are accepted everywhere; the set is
    /// recorded in the trace span but does not gate recognition.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(comment_valid = valid_symbols.get(usize::from(Symbol::Comment.ordinal())).copied())
    )]
    pub fn scan<L: Lexer + ?Sized>(&self, lexer: &mut L, valid_symbols: &[bool]) -> bool {
        match self.try_scan(lexer) {
            Ok(token) => {
                trace!(symbol = ?token.symbol, deepest = token.deepest, "scanned comment");
                true
            }
            Err(reason) => {
                trace!(%reason, "abstained");
                false
            }
        }
    }

    /// Like [`scan`](Self::scan), but reports why no token was produced.
    ///
    /// # Errors
    ///
    /// Returns the [`Abstain`] reason when the input at the cursor is not a
    /// complete comment. The lexer may have been advanced; see the module
    /// documentation for what is consumed in each case.
    pub fn try_scan<L: Lexer + ?Sized>(&self, lexer: &mut L) -> Result<Token, Abstain> {
        self.skip_whitespace(lexer);
        Self::open_comment(lexer)?;
        CommentBody::new(self.options.max_depth).run(lexer)
    }

    /// Writes the scanner's state into `buffer` and returns the number of
    /// bytes written, which is always zero.
    // Receivers mirror the host's payload-taking callbacks.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    /// Restores state written by [`serialize`](Self::serialize).
    ///
    /// There is no state to restore. Non-empty input cannot have come from
    /// this scanner; it is logged and ignored.
    #[allow(clippy::unused_self)]
    pub fn deserialize(&mut self, buffer: &[u8]) {
        if !buffer.is_empty() {
            debug!(len = buffer.len(), "ignoring non-empty scanner state");
        }
    }

    fn skip_whitespace<L: Lexer + ?Sized>(&self, lexer: &mut L) {
        while peek(lexer).is_some_and(|c| self.options.is_whitespace(c)) {
            lexer.advance(true);
        }
    }

    fn open_comment<L: Lexer + ?Sized>(lexer: &mut L) -> Result<(), Abstain> {
        match peek(lexer) {
            Some('(') => lexer.advance(false),
            found => return Err(Abstain::NotAComment { found }),
        }
        match peek(lexer) {
            Some('*') => lexer.advance(false),
            found => return Err(Abstain::PartialOpener { found }),
        }
        Ok(())
    }
}
