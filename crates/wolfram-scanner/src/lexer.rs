//! The host side of the scanner contract.

/// External tokens this scanner can produce.
///
/// The discriminant is the token's ordinal within the grammar's external
/// token list, which is what the host expects in its result slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Symbol {
    /// A complete, possibly nested, `(* ... *)` block comment.
    Comment = 0,
}

impl Symbol {
    /// Number of external tokens, and so the length of the valid-symbols
    /// set the host passes to [`Scanner::scan`](crate::Scanner::scan).
    pub const COUNT: usize = 1;

    /// Ordinal of this symbol in the host's external token list.
    #[must_use]
    pub const fn ordinal(self) -> u16 {
        self as u16
    }

    /// Looks up a symbol by ordinal.
    #[must_use]
    pub const fn from_ordinal(ordinal: u16) -> Option<Self> {
        match ordinal {
            0 => Some(Symbol::Comment),
            _ => None,
        }
    }
}

/// Cursor over the host's input, borrowed for a single scan.
///
/// The cursor moves one code point at a time. Everything between the
/// position after the last skipped advance and the last [`mark_end`] is the
/// token the host records when the scan succeeds.
///
/// [`mark_end`]: Lexer::mark_end
pub trait Lexer {
    /// Code point at the cursor, without consuming it. Returns `'\0'` at end
    /// of input; use [`eof`](Lexer::eof) to tell a real NUL apart.
    fn lookahead(&self) -> char;

    /// Consumes the lookahead. With `skip` set the code point is an extra
    /// (whitespace) and the token start moves past it.
    fn advance(&mut self, skip: bool);

    /// Pins the current cursor as the end of the token.
    fn mark_end(&mut self);

    /// Whether the cursor is at end of input.
    fn eof(&self) -> bool;

    /// Records which token the scan produced.
    fn set_result_symbol(&mut self, symbol: Symbol);
}

impl<L: Lexer + ?Sized> Lexer for &mut L {
    #[inline]
    fn lookahead(&self) -> char {
        (**self).lookahead()
    }

    #[inline]
    fn advance(&mut self, skip: bool) {
        (**self).advance(skip);
    }

    #[inline]
    fn mark_end(&mut self) {
        (**self).mark_end();
    }

    #[inline]
    fn eof(&self) -> bool {
        (**self).eof()
    }

    #[inline]
    fn set_result_symbol(&mut self, symbol: Symbol) {
        (**self).set_result_symbol(symbol);
    }
}

/// Lookahead as an `Option`, `None` at end of input.
#[inline]
pub(crate) fn peek<L: Lexer + ?Sized>(lexer: &L) -> Option<char> {
    if lexer.eof() {
        None
    } else {
        Some(lexer.lookahead())
    }
}
