#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use wolfram_scanner::{Abstain, Lexer, Scanner, ScannerOptions, SliceLexer};

const HEADER: usize = 1; // option flags

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r",
    "\u{00A0}".as_bytes(),
    "\u{1680}".as_bytes(),
    "\u{2000}".as_bytes(),
    "\u{2007}".as_bytes(),
    "\u{200A}".as_bytes(),
    "\u{2028}".as_bytes(),
    "\u{2029}".as_bytes(),
    "\u{202F}".as_bytes(),
    "\u{205F}".as_bytes(),
    "\u{3000}".as_bytes(),
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8);

        let mut prefix = HEADER;
        while prefix < size.max(HEADER + 1) && prefix < max_size {
            let limit = max_size - prefix;
            prefix += append_whitespace(&mut data[prefix..], limit);
            let limit = max_size - prefix;
            prefix += append_comment(&mut data[prefix..], size, limit);
        }
        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append 0‒8 whitespace code points, never exceeding `limit` bytes.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        let n_codepoints = rng.random_range(0..=8);
        let mut written = 0;
        for _ in 0..n_codepoints {
            let w = WS_TABLE[rng.random_range(0..WS_TABLE.len())];
            if written + w.len() > limit {
                break;
            }
            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

/// Append a (possibly truncated) nested comment rendered from random bytes.
fn append_comment(data: &mut [u8], size: usize, limit: usize) -> usize {
    let comment = loop {
        let s = with_rng(|rng| rng.random_range(1..(size * 2).max(2)));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(comment) = ArbitraryComment::arbitrary(&mut Unstructured::new(&bytes)) {
            break comment;
        }
    };
    let mut rendered = Vec::new();
    comment.render(&mut rendered);
    let len = rendered.len().min(limit);
    data[..len].copy_from_slice(&rendered[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
enum Piece {
    Text(Vec<u8>),
    Delimiter(u8),
    Nested(ArbitraryComment),
}

#[derive(Debug)]
struct ArbitraryComment(Vec<Piece>);

impl<'a> Arbitrary<'a> for ArbitraryComment {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut body = Vec::new();
        for _ in 0..u.choose_index(6)? {
            let piece = match u.choose_index(10)? {
                0..=4 => Piece::Text(u.arbitrary()?),
                5..=6 => Piece::Delimiter(*u.choose(b"(*)")?),
                _ => Piece::Nested(u.arbitrary()?),
            };
            body.push(piece);
        }
        Ok(ArbitraryComment(body))
    }
}

impl ArbitraryComment {
    fn render(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"(*");
        for piece in &self.0 {
            match piece {
                Piece::Text(text) => out.extend_from_slice(text),
                Piece::Delimiter(b) => out.push(*b),
                Piece::Nested(inner) => inner.render(out),
            }
        }
        out.extend_from_slice(b"*)");
    }
}

/// The comment loop written as a plain switch over the lookahead, to check
/// the state machine against. Returns the token end on success.
fn reference_scan(lexer: &mut SliceLexer<'_>, options: &ScannerOptions) -> Option<usize> {
    let skip = |c: char| {
        if options.ascii_whitespace_only {
            c.is_ascii_whitespace()
        } else {
            c.is_whitespace()
        }
    };
    while !lexer.eof() && skip(lexer.lookahead()) {
        lexer.advance(true);
    }
    if lexer.eof() || lexer.lookahead() != '(' {
        return None;
    }
    lexer.advance(false);
    if lexer.eof() || lexer.lookahead() != '*' {
        return None;
    }
    lexer.advance(false);

    let mut depth = 1usize;
    if options.max_depth.is_some_and(|limit| depth > limit) {
        return None;
    }
    while !lexer.eof() {
        match lexer.lookahead() {
            '*' => {
                lexer.advance(false);
                if !lexer.eof() && lexer.lookahead() == ')' {
                    depth -= 1;
                    if depth == 0 {
                        lexer.advance(false);
                        return Some(lexer.position());
                    }
                }
            }
            '(' => {
                lexer.advance(false);
                if !lexer.eof() && lexer.lookahead() == '*' {
                    depth += 1;
                    if options.max_depth.is_some_and(|limit| depth > limit) {
                        return None;
                    }
                }
            }
            _ => lexer.advance(false),
        }
    }
    None
}

fn scanner(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }
    let flags = data[0];
    let options = ScannerOptions {
        ascii_whitespace_only: flags & 1 != 0,
        max_depth: match (flags >> 1) & 7 {
            0 => None,
            n => Some(usize::from(n - 1)),
        },
    };
    let input = &data[HEADER..];
    let scanner = Scanner::with_options(options);

    // Walk the whole input the way a host would, one scan per position.
    let mut pos = 0;
    while pos < input.len() {
        let mut lexer = SliceLexer::at(input, pos);
        let mut expected = SliceLexer::at(input, pos);
        let result = scanner.try_scan(&mut lexer);
        let reference = reference_scan(&mut expected, &options);

        match result {
            Ok(token) => {
                let end = lexer.token_end().expect("successful scan marks its end");
                assert_eq!(Some(end), reference);
                let text = lexer.token().expect("successful scan sets its symbol");
                assert!(text.starts_with(b"(*") && text.ends_with(b"*)"));
                assert!(token.deepest >= 1);
                if let Some(limit) = options.max_depth {
                    assert!(token.deepest <= limit);
                }
                pos = end;
            }
            Err(reason) => {
                assert_eq!(reference, None, "{reason}");
                assert_eq!(lexer.result_symbol(), None);
                if matches!(reason, Abstain::Unterminated { .. }) {
                    assert!(lexer.eof());
                }
                // Step past one byte, as the host's own lexer would.
                pos += 1;
            }
        }
    }
}

fuzz_target!(|data: &[u8]| scanner(data));
