//! Contains [`LoxError`], the error type of the scanner, and the [`Report`] trait
//! through which the scanner hands its diagnostics to a caller.

use std::fmt;

/// Creates a [`LoxError`] from an [`ErrorKind`] variant.
///
/// ```
/// # use lox::make_error;
/// let err = make_error!(UnexpectedCharacter { character: '@' }).line(3);
/// assert_eq!(err.get_line(), Some(3));
/// ```
#[macro_export]
macro_rules! make_error {
    ($kind:ident) => {
        $crate::error::LoxError::new($crate::error::ErrorKind::$kind)
    };

    ($kind:ident { $($tt:tt)* }) => {
        $crate::error::LoxError::new($crate::error::ErrorKind::$kind { $($tt)* })
    };
}

#[derive(Debug)]
pub enum ErrorKind {
    UnexpectedCharacter { character: char },
    UnterminatedString,
    IoError(std::io::Error),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::UnexpectedCharacter { character } => {
                write!(f, "Unexpected '{}' character.", character.escape_debug())
            }
            ErrorKind::UnterminatedString => write!(f, "Unterminated string."),
            ErrorKind::IoError(err) => write!(f, "{}", err),
        }
    }
}

/// An error with the line and file it occurred in, if known.
#[derive(Debug)]
pub struct LoxError {
    kind: ErrorKind,
    line: Option<usize>,
    file: Option<String>,
}

impl LoxError {
    pub fn new(kind: ErrorKind) -> Self {
        LoxError {
            kind,
            line: None,
            file: None,
        }
    }

    pub fn line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn get_line(&self) -> Option<usize> {
        self.line
    }

    pub fn get_file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// True for errors that come from scanning rather than from the environment.
    pub fn is_lexical(&self) -> bool {
        !matches!(self.kind, ErrorKind::IoError(_))
    }
}

impl fmt::Display for LoxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "[line {}] ", line)?;
        }

        write!(f, "Error: {}", self.kind)?;

        if let Some(file) = &self.file {
            write!(f, " in {}", file)?;
        }

        Ok(())
    }
}

impl std::error::Error for LoxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoxError {
    fn from(err: std::io::Error) -> Self {
        LoxError::new(ErrorKind::IoError(err))
    }
}

/// A sink for diagnostics.
///
/// The scanner calls [`report`](Report::report) once per malformed lexeme, at
/// the moment it is found, then keeps scanning. Whether any report should stop
/// the caller from going on to parse is up to the caller.
pub trait Report {
    fn report(&mut self, error: LoxError);
}

impl Report for Vec<LoxError> {
    fn report(&mut self, error: LoxError) {
        self.push(error);
    }
}

impl<R: Report + ?Sized> Report for &mut R {
    fn report(&mut self, error: LoxError) {
        (**self).report(error);
    }
}

/// Prints diagnostics to stderr as they arrive and remembers whether there
/// were any.
#[derive(Debug, Default)]
pub struct Reporter {
    file: Option<String>,
    errors: usize,
}

impl Reporter {
    pub fn new() -> Self {
        Reporter::default()
    }

    /// Tag every diagnostic with a file name.
    pub fn with_file(file: impl Into<String>) -> Self {
        Reporter {
            file: Some(file.into()),
            errors: 0,
        }
    }

    pub fn had_error(&self) -> bool {
        self.errors != 0
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn reset(&mut self) {
        self.errors = 0;
    }
}

impl Report for Reporter {
    fn report(&mut self, error: LoxError) {
        let error = match &self.file {
            Some(file) if error.get_file().is_none() => error.file(file.clone()),
            _ => error,
        };

        error!("{}", error);
        eprintln!("{}", error);
        self.errors += 1;
    }
}
