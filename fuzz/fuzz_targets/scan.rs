#![no_main]
use libfuzzer_sys::fuzz_target;

use lox::{Scanner, TokenKind};

fuzz_target!(|src: &str| {
    let mut errors = Vec::new();
    let tokens = Scanner::new(src).scan_tokens(&mut errors);

    assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
    assert!(tokens.last().map(|t| t.kind == TokenKind::Eof).unwrap_or(false));
    assert!(tokens.windows(2).all(|w| w[0].line <= w[1].line));
});
