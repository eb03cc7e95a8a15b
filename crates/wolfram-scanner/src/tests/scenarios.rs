use rstest::rstest;

use super::utils::{Scanned, scan};
use crate::{Lexer, Scanner, SliceLexer, Symbol};

#[rstest]
#[case::simple("(* hi *)rest", Some("(* hi *)"), 8)]
#[case::nested("(* a (* b *) c *)X", Some("(* a (* b *) c *)"), 17)]
#[case::empty("(**)", Some("(**)"), 4)]
#[case::unterminated("(* unterminated", None, 15)]
#[case::leading_whitespace("  \t(* x *)", Some("(* x *)"), 10)]
#[case::text_first("x(* y *)", None, 0)]
#[case::partial_opener("(x)", None, 1)]
#[case::double_star("(* ** *)", Some("(* ** *)"), 8)]
#[case::triple_nested("(*(*(**)*)*)", Some("(*(*(**)*)*)"), 12)]
#[case::star_run_close("(* ***)", Some("(* ***)"), 7)]
#[case::paren_run_open("(* ((* *) *)", Some("(* ((* *) *)"), 12)]
#[case::inner_paren_star_paren("(* (*) *)", Some("(* (*) *)"), 9)]
#[case::stray_close_paren("(* ) *)", Some("(* ) *)"), 7)]
#[case::multiline("(* line 1\n   line 2 *)\nx", Some("(* line 1\n   line 2 *)"), 22)]
fn scenario(#[case] input: &str, #[case] token: Option<&str>, #[case] position: usize) {
    let expected = Scanned {
        matched: token.is_some(),
        position,
        token: token.map(|t| t.as_bytes().to_vec()),
    };
    assert_eq!(scan(input.as_bytes()), expected);
}

#[test]
fn result_symbol_is_comment_with_ordinal_zero() {
    let mut lexer = SliceLexer::new(b"(* hi *)");
    assert!(Scanner::new().scan(&mut lexer, &[true]));
    assert_eq!(lexer.result_symbol(), Some(Symbol::Comment));
    assert_eq!(Symbol::Comment.ordinal(), 0);
    assert_eq!(Symbol::from_ordinal(0), Some(Symbol::Comment));
    assert_eq!(Symbol::from_ordinal(1), None);
    assert_eq!(Symbol::COUNT, 1);
}

#[test]
fn failed_scan_leaves_no_symbol_or_end() {
    let mut lexer = SliceLexer::new(b"(* unterminated");
    assert!(!Scanner::new().scan(&mut lexer, &[true]));
    assert_eq!(lexer.result_symbol(), None);
    assert_eq!(lexer.token_end(), None);
}

#[test]
fn scanning_again_after_a_comment() {
    let scanner = Scanner::new();
    let input = b"(* a *) (* b *) x";
    let mut lexer = SliceLexer::new(input);

    assert!(scanner.scan(&mut lexer, &[true]));
    assert_eq!(lexer.token().unwrap(), "(* a *)");
    lexer.resume();

    assert!(scanner.scan(&mut lexer, &[true]));
    assert_eq!(lexer.token().unwrap(), "(* b *)");
    lexer.resume();

    assert!(!scanner.scan(&mut lexer, &[true]));
    assert_eq!(lexer.remaining(), "x");
}

#[test]
fn scanning_at_end_of_a_comment_abstains() {
    let scanner = Scanner::new();
    let mut lexer = SliceLexer::new(b"(* *)");
    assert!(scanner.scan(&mut lexer, &[true]));
    lexer.resume();
    assert!(!scanner.scan(&mut lexer, &[true]));
    assert!(lexer.eof());
}
