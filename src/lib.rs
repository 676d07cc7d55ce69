//! # Lox
//!
//! Scanner for the Lox scripting language. Converts a source into a sequence of
//! [`Token`]s for a parser to consume, reporting lexical errors through a
//! [`Report`] implementation as it goes.
//!
//! ```
//! use lox::TokenKind;
//!
//! let tokens = lox::scan("print 1 + 2;").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Print);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```

#[macro_export]
macro_rules! trace {
    ($($log:expr),*) => {
        #[cfg(feature = "log")]
        log::trace!($($log),*);
    };
}

#[macro_export]
macro_rules! debug {
    ($($log:expr),*) => {
        #[cfg(feature = "log")]
        log::debug!($($log),*);
    };
}

#[macro_export]
macro_rules! info {
    ($($log:expr),*) => {
        #[cfg(feature = "log")]
        log::info!($($log),*);
    };
}

#[macro_export]
macro_rules! warn {
    ($($log:expr),*) => {
        #[cfg(feature = "log")]
        log::warn!($($log),*);
    };
}

#[macro_export]
macro_rules! error {
    ($($log:expr),*) => {
        #[cfg(feature = "log")]
        log::error!($($log),*);
    };
}

#[macro_use]
pub mod error;
pub mod keyword;
pub mod scanner;
pub mod token;

pub use error::{ErrorKind, LoxError, Report, Reporter};
pub use scanner::Scanner;
pub use token::{Literal, Token, TokenKind};

use std::path::Path;

/// Scan a source, collecting every lexical error.
///
/// Returns the tokens only if the source scanned cleanly.
pub fn scan(src: &str) -> Result<Vec<Token>, Vec<LoxError>> {
    let mut errors = Vec::new();
    let tokens = scan_with(src, &mut errors);

    if errors.is_empty() {
        Ok(tokens)
    } else {
        debug!("{} errors", errors.len());
        Err(errors)
    }
}

/// Scan a source, handing lexical errors to `reporter`.
///
/// Always returns a token sequence ending in [`TokenKind::Eof`], even if errors
/// were reported.
pub fn scan_with<'a>(src: &'a str, reporter: &mut impl Report) -> Vec<Token<'a>> {
    debug!("scan {} bytes", src.len());
    Scanner::new(src).scan_tokens(reporter)
}

/// Reads a file to be scanned.
pub fn read_source(file: &Path) -> Result<String, LoxError> {
    info!("read {}", file.display());
    std::fs::read_to_string(file).map_err(|e| LoxError::from(e).file(file.display().to_string()))
}
