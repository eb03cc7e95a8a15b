use std::{format, string::String, vec::Vec};

use crate::{Lexer, Scanner, SliceLexer, Symbol};

/// Outcome of one scan, flattened for comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Scanned {
    pub matched: bool,
    pub position: usize,
    pub token: Option<Vec<u8>>,
}

pub(crate) fn scan_with(scanner: &Scanner, input: &[u8]) -> Scanned {
    let mut lexer = SliceLexer::new(input);
    let matched = scanner.scan(&mut lexer, &[true]);
    Scanned {
        matched,
        position: lexer.position(),
        token: lexer.token().map(|t| t.to_vec()),
    }
}

pub(crate) fn scan(input: &[u8]) -> Scanned {
    scan_with(&Scanner::new(), input)
}

/// Wraps a lexer and logs every call that changes host state.
pub(crate) struct RecordingLexer<L> {
    inner: L,
    pub calls: Vec<String>,
}

impl<L: Lexer> RecordingLexer<L> {
    pub(crate) fn new(inner: L) -> Self {
        Self {
            inner,
            calls: Vec::new(),
        }
    }
}

impl Lexer for RecordingLexer<&mut SliceLexer<'_>> {
    fn lookahead(&self) -> char {
        self.inner.lookahead()
    }

    fn advance(&mut self, skip: bool) {
        let verb = if skip { "skip" } else { "advance" };
        self.calls.push(format!("{verb} {:?}", self.inner.lookahead()));
        self.inner.advance(skip);
    }

    fn mark_end(&mut self) {
        self.calls.push(format!("mark_end {}", self.inner.position()));
        self.inner.mark_end();
    }

    fn eof(&self) -> bool {
        self.inner.eof()
    }

    fn set_result_symbol(&mut self, symbol: Symbol) {
        self.calls.push(format!("symbol {symbol:?}"));
        self.inner.set_result_symbol(symbol);
    }
}
