//! Contains `Scanner`, which converts a Lox source into a sequence of tokens.

use crate::{keyword, Literal, Report, Token, TokenKind};

/// Converts a Lox source into a [`Vec`] of [`Token`].
///
/// The scanner makes a single pass over the source, looking at most two bytes
/// ahead of the current one. Lexical errors are handed to a [`Report`] as soon
/// as they are found and scanning continues, so one call surfaces every error
/// in the source.
///
/// A scanner is consumed by [`scan_tokens`], which makes it impossible to scan
/// the same source twice or to share the cursor between scans.
///
/// [`scan_tokens`]: Scanner::scan_tokens
#[derive(Debug)]
pub struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new `Scanner` from a source.
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scan the whole source. The last token is always [`TokenKind::Eof`].
    pub fn scan_tokens(mut self, reporter: &mut impl Report) -> Vec<Token<'a>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token(reporter);
        }

        trace!("eof on line {}", self.line);
        self.tokens.push(Token::eof(self.line));
        self.tokens
    }

    fn scan_token(&mut self, reporter: &mut impl Report) {
        let kind = match self.advance_char() {
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            b',' => TokenKind::Comma,
            b'.' => TokenKind::Dot,
            b'-' => TokenKind::Minus,
            b'+' => TokenKind::Plus,
            b';' => TokenKind::Semicolon,
            b'*' => TokenKind::Star,

            b'!' => {
                if self.match_char(b'=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                }
            }

            b'=' => {
                if self.match_char(b'=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                }
            }

            b'<' => {
                if self.match_char(b'=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                }
            }

            b'>' => {
                if self.match_char(b'=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                }
            }

            b'/' => {
                if self.match_char(b'/') {
                    while self.peek_char() != b'\n' && !self.is_at_end() {
                        self.advance_char();
                    }
                    return;
                } else {
                    TokenKind::Slash
                }
            }

            b'"' => return self.scan_string(reporter),

            b' ' | b'\t' => return,

            b'\n' => {
                self.line += 1;
                return;
            }

            c if is_digit(c) => return self.scan_number(),
            c if is_alpha(c) => return self.identifier_or_keyword(),

            _ => return self.unexpected_char(reporter),
        };

        self.add_token(kind, None);
    }

    fn scan_string(&mut self, reporter: &mut impl Report) {
        let line_start = self.line;
        while self.peek_char() != b'"' && !self.is_at_end() {
            if self.peek_char() == b'\n' {
                self.line += 1;
            }
            self.advance_char();
        }

        if self.is_at_end() {
            debug!("string from line {} never closed", line_start);
            reporter.report(make_error!(UnterminatedString).line(self.line));
            return;
        }

        // closing quote
        self.advance_char();

        let value = &self.source[self.start + 1..self.current - 1];
        self.tokens.push(Token::new(
            TokenKind::String,
            self.lexeme(),
            Some(Literal::String(value)),
            line_start,
        ));
    }

    fn scan_number(&mut self) {
        while is_digit(self.peek_char()) {
            self.advance_char();
        }

        if self.peek_char() == b'.' && is_digit(self.peek_next()) {
            self.advance_char();
            while is_digit(self.peek_char()) {
                self.advance_char();
            }
        }

        let value = match self.lexeme().parse::<f64>() {
            Ok(value) => value,
            Err(_) => unreachable!("digits with an optional fraction always parse as f64"),
        };
        self.add_token(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn identifier_or_keyword(&mut self) {
        while is_alpha_numeric(self.peek_char()) {
            self.advance_char();
        }

        let kind = keyword::lookup(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind, None);
    }

    fn unexpected_char(&mut self, reporter: &mut impl Report) {
        // skip the rest of a multi-byte character so the cursor stays on a char boundary
        let character = self.source[self.start..].chars().next().unwrap_or('\0');
        self.current = self.start + character.len_utf8();

        reporter.report(make_error!(UnexpectedCharacter { character }).line(self.line));
    }

    fn add_token(&mut self, kind: TokenKind, literal: Option<Literal<'a>>) {
        trace!("{:?} on line {}", kind, self.line);
        self.tokens
            .push(Token::new(kind, self.lexeme(), literal, self.line));
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance_char(&mut self) -> u8 {
        self.current += 1;
        self.source.as_bytes()[self.current - 1]
    }

    fn match_char(&mut self, expected: u8) -> bool {
        if self.peek_char() != expected || self.is_at_end() {
            false
        } else {
            self.current += 1;
            true
        }
    }

    fn peek_char(&self) -> u8 {
        if self.is_at_end() {
            b'\0'
        } else {
            self.source.as_bytes()[self.current]
        }
    }

    fn peek_next(&self) -> u8 {
        if self.current + 1 >= self.source.len() {
            b'\0'
        } else {
            self.source.as_bytes()[self.current + 1]
        }
    }
}

fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_alpha_numeric(c: u8) -> bool {
    is_alpha(c) || is_digit(c)
}
