//! In-memory [`Lexer`] over a byte slice.
//!
//! Behaves the way a parser runtime does towards its external scanner:
//! - the lookahead is one decoded code point; malformed UTF-8 yields U+FFFD
//!   and advances by the length of the invalid sequence;
//! - `advance(true)` moves the token start along with the cursor;
//! - the token is the span from the token start to the last `mark_end`;
//! - at end of input the lookahead is `'\0'` and `advance` does nothing.

use bstr::{BStr, ByteSlice};

use crate::{Lexer, Symbol};

/// A [`Lexer`] over an in-memory buffer.
#[derive(Debug, Clone)]
pub struct SliceLexer<'src> {
    input: &'src [u8],
    pos: usize,
    lookahead: char,
    lookahead_len: usize,
    token_start: usize,
    token_end: Option<usize>,
    result_symbol: Option<Symbol>,
}

impl<'src> SliceLexer<'src> {
    /// Starts a lexer at the beginning of `input`.
    #[must_use]
    pub fn new(input: &'src [u8]) -> Self {
        Self::at(input, 0)
    }

    /// Starts a lexer at byte offset `pos` of `input`. Offsets past the end
    /// are clamped to end of input.
    #[must_use]
    pub fn at(input: &'src [u8], pos: usize) -> Self {
        let mut lexer = Self {
            input,
            pos: pos.min(input.len()),
            lookahead: '\0',
            lookahead_len: 0,
            token_start: 0,
            token_end: None,
            result_symbol: None,
        };
        lexer.reset_token();
        lexer
    }

    /// The whole input.
    #[must_use]
    pub fn input(&self) -> &'src BStr {
        self.input.as_bstr()
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Byte offset where the current token starts.
    #[must_use]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Byte offset pinned by the last [`mark_end`](Lexer::mark_end).
    #[must_use]
    pub fn token_end(&self) -> Option<usize> {
        self.token_end
    }

    /// Symbol set by the last successful scan.
    #[must_use]
    pub fn result_symbol(&self) -> Option<Symbol> {
        self.result_symbol
    }

    /// Input not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'src BStr {
        self.input[self.pos..].as_bstr()
    }

    /// The recognized token, once a symbol has been set and its end marked.
    #[must_use]
    pub fn token(&self) -> Option<&'src BStr> {
        self.result_symbol?;
        let end = self.token_end?;
        Some(self.input[self.token_start..end].as_bstr())
    }

    /// Prepares for the next scan the way a host does after a call returns:
    /// the cursor moves back to the marked token end if there is one, and the
    /// token state is cleared.
    pub fn resume(&mut self) {
        if let Some(end) = self.token_end {
            self.pos = end;
        }
        self.reset_token();
    }

    fn reset_token(&mut self) {
        self.token_start = self.pos;
        self.token_end = None;
        self.result_symbol = None;
        self.decode_lookahead();
    }

    fn decode_lookahead(&mut self) {
        let (ch, len) = bstr::decode_utf8(&self.input[self.pos..]);
        self.lookahead_len = len;
        self.lookahead = match (ch, len) {
            (_, 0) => '\0',
            (Some(c), _) => c,
            (None, _) => char::REPLACEMENT_CHARACTER,
        };
    }
}

impl Lexer for SliceLexer<'_> {
    #[inline]
    fn lookahead(&self) -> char {
        self.lookahead
    }

    fn advance(&mut self, skip: bool) {
        if self.eof() {
            return;
        }
        self.pos += self.lookahead_len;
        if skip {
            self.token_start = self.pos;
        }
        self.decode_lookahead();
    }

    #[inline]
    fn mark_end(&mut self) {
        self.token_end = Some(self.pos);
    }

    #[inline]
    fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    #[inline]
    fn set_result_symbol(&mut self, symbol: Symbol) {
        self.result_symbol = Some(symbol);
    }
}
