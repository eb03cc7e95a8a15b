//! External scanner for nested Wolfram block comments.
//!
//! Wolfram comments are delimited by `(*` and `*)` and nest to arbitrary
//! depth, which a context-free tokenizer cannot count. This crate supplies
//! the hand-written recognizer that a parser runtime calls back into when
//! the grammar accepts a `COMMENT` token.
//!
//! The host drives the scanner through the [`Lexer`] trait. [`SliceLexer`]
//! is an in-memory host that is convenient for tests and tools.
//!
//! ```rust
//! use wolfram_scanner::{Scanner, SliceLexer, Symbol};
//!
//! let scanner = Scanner::new();
//! let mut lexer = SliceLexer::new(b"(* a (* b *) c *)x");
//! assert!(scanner.scan(&mut lexer, &[true]));
//! assert_eq!(lexer.result_symbol(), Some(Symbol::Comment));
//! assert_eq!(lexer.token().unwrap(), "(* a (* b *) c *)");
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

mod error;
mod lexer;
mod options;
mod scanner;
mod slice_lexer;

#[cfg(test)]
mod tests;

pub use error::Abstain;
pub use lexer::{Lexer, Symbol};
pub use options::ScannerOptions;
pub use scanner::{SERIALIZATION_BUFFER_SIZE, Scanner, Token};
pub use slice_lexer::SliceLexer;
