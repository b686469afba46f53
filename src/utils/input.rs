//! Parsing helpers for line-oriented console input.
//!
//! A failed parse never leaves anything behind: the whole line has already
//! been consumed by the reader, so the caller can simply re-prompt.

use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("input stream closed")]
    Closed,

    #[error("no input given")]
    Empty,

    #[error("expected a number, got {0:?}")]
    NotANumber(String),

    #[error("input line is not valid UTF-8")]
    InvalidText,

    #[error("console IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// Bad user input that can be rejected and asked for again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            InputError::Empty | InputError::NotANumber(_) | InputError::InvalidText
        )
    }
}

/// Outcome of one interactive read once stream failures are split off.
#[derive(Debug, PartialEq)]
pub enum Reply<T> {
    Value(T),
    /// Bad input; the line is already discarded.
    Rejected,
    /// End of input.
    Closed,
}

impl<T> Reply<T> {
    /// Sorts a read result into a reply. Only stream failures stay errors.
    pub fn from_read(read: Result<T, InputError>) -> Result<Self, InputError> {
        match read {
            Ok(value) => Ok(Reply::Value(value)),
            Err(InputError::Closed) => Ok(Reply::Closed),
            Err(e) if e.is_recoverable() => Ok(Reply::Rejected),
            Err(e) => Err(e),
        }
    }
}

/// Parses the first whitespace-separated token of `raw` as a number.
///
/// Anything after the first token is discarded. A token that is only partly
/// numeric (`3abc`) is rejected as a whole.
pub fn parse_number<T: FromStr>(raw: &str) -> Result<T, InputError> {
    let token = raw.split_whitespace().next().ok_or(InputError::Empty)?;
    token
        .parse::<T>()
        .map_err(|_| InputError::NotANumber(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_takes_first_token() {
        assert_eq!(parse_number::<i64>("3").unwrap(), 3);
        assert_eq!(parse_number::<i64>("  12  trailing words").unwrap(), 12);
        assert_eq!(parse_number::<i64>("-1").unwrap(), -1);
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert!(matches!(
            parse_number::<i64>("abc"),
            Err(InputError::NotANumber(token)) if token == "abc"
        ));
        assert!(matches!(parse_number::<i64>("3abc"), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_number::<i64>("   "), Err(InputError::Empty)));
    }

    #[test]
    fn test_reply_from_read() {
        assert_eq!(Reply::from_read(parse_number::<i64>("4")).unwrap(), Reply::Value(4));
        assert_eq!(Reply::from_read(parse_number::<i64>("x")).unwrap(), Reply::Rejected);
        assert_eq!(
            Reply::<i64>::from_read(Err(InputError::Closed)).unwrap(),
            Reply::Closed
        );
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        assert!(Reply::<i64>::from_read(Err(InputError::Io(io))).is_err());
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(InputError::Empty.is_recoverable());
        assert!(InputError::NotANumber("x".into()).is_recoverable());
        assert!(InputError::InvalidText.is_recoverable());
        assert!(!InputError::Closed.is_recoverable());
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        assert!(!InputError::from(io).is_recoverable());
    }
}
