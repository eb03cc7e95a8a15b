//! Nested comment body.
//!
//! Entered with the outer `(*` already consumed. Each step looks at one code
//! point and either consumes it or leaves it for the next state, which is
//! how overlapping delimiters are handled:
//!
//! - `**)`: the second `*` is left for `Scanning`, which re-enters `SawStar`.
//! - `((*`: the second `(` is left for `Scanning`, which re-enters
//!   `SawOpenParen`.
//! - An inner opener's `*` is not consumed either, so it is free to start a
//!   closer. `(*)` therefore opens and immediately closes a level.

use crate::{Abstain, Lexer, Symbol, scanner::Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BodyState {
    Scanning,
    SawStar,
    SawOpenParen,
    Done,
}

#[derive(Debug)]
pub(super) struct CommentBody {
    state: BodyState,
    depth: usize,
    deepest: usize,
    limit: Option<usize>,
}

impl CommentBody {
    pub(super) fn new(limit: Option<usize>) -> Self {
        Self {
            state: BodyState::Scanning,
            depth: 0,
            deepest: 0,
            limit,
        }
    }

    pub(super) fn run<L: Lexer + ?Sized>(mut self, lexer: &mut L) -> Result<Token, Abstain> {
        self.open()?;
        loop {
            if self.state == BodyState::Done {
                return Ok(Token {
                    symbol: Symbol::Comment,
                    deepest: self.deepest,
                });
            }
            if lexer.eof() {
                return Err(Abstain::Unterminated { depth: self.depth });
            }
            self.state = self.step(lexer)?;
        }
    }

    fn step<L: Lexer + ?Sized>(&mut self, lexer: &mut L) -> Result<BodyState, Abstain> {
        use BodyState::*;
        let next = match (self.state, lexer.lookahead()) {
            (Scanning, '*') => {
                lexer.advance(false);
                SawStar
            }
            (Scanning, '(') => {
                lexer.advance(false);
                SawOpenParen
            }
            (Scanning, _) => {
                lexer.advance(false);
                Scanning
            }
            (SawStar, ')') => {
                self.depth -= 1;
                if self.depth == 0 {
                    lexer.set_result_symbol(Symbol::Comment);
                    lexer.advance(false);
                    lexer.mark_end();
                    Done
                } else {
                    Scanning
                }
            }
            (SawOpenParen, '*') => {
                self.open()?;
                Scanning
            }
            (SawStar | SawOpenParen, _) => Scanning,
            (Done, _) => Done,
        };
        Ok(next)
    }

    fn open(&mut self) -> Result<(), Abstain> {
        if let Some(limit) = self.limit {
            if self.depth >= limit {
                return Err(Abstain::DepthLimit { limit });
            }
        }
        self.depth += 1;
        self.deepest = self.deepest.max(self.depth);
        Ok(())
    }
}
