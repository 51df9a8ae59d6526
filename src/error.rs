use crate::{position::Position, token::TokenKind};
use std::fmt;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum LexErrorInfo {
    #[error("Unrecognizable character({0:?}) was given")]
    NotProperToken(char),
    #[error("Found end of JSON, until string not closed")]
    NotStringClosed,
    #[error("Number({0}) does not fit in 64-bit integer")]
    NumberOutOfRange(String),
}

/// Failure while scanning, with the unconsumed input from the failing position.
#[derive(Debug, PartialEq, Error)]
#[error("Error at {pos} : {info}, remaining input {rest:?}")]
pub struct LexError {
    pub pos: Position,
    pub rest: String,
    pub info: LexErrorInfo,
}

#[derive(Debug, PartialEq, Error)]
pub enum ParseErrorInfo {
    #[error("Expect token({expected}) is not given, found {found}")]
    NotExpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("Token({0}) can not start a value")]
    NotValueToken(TokenKind),
    #[error("Found end of token stream, while more tokens are expected")]
    UnexpectedEOF,
    #[error("Token({0}) is given after the top-level value")]
    TrailingToken(TokenKind),
    #[error("Nesting deeper than {0} levels is not allowed")]
    TooDeep(usize),
}

/// Grammar violation. `pos` is `None` when the token stream ran out.
#[derive(Debug, PartialEq, Error)]
pub struct ParseError {
    pub pos: Option<Position>,
    pub info: ParseErrorInfo,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.pos {
            Some(pos) => write!(f, "Error at {} : {}", pos, self.info),
            None => write!(f, "Error at end of input : {}", self.info),
        }
    }
}

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn is_lex(&self) -> bool {
        matches!(self, Error::Lex(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, LexError, LexErrorInfo, ParseError, ParseErrorInfo};
    use crate::{position::Position, token::TokenKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn lex_error_display() {
        let err = LexError {
            pos: Position { row: 1, col: 4 },
            rest: "@]".to_string(),
            info: LexErrorInfo::NotProperToken('@'),
        };
        assert_eq!(
            err.to_string(),
            "Error at 1:4 : Unrecognizable character('@') was given, remaining input \"@]\""
        );
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError {
            pos: Some(Position { row: 1, col: 2 }),
            info: ParseErrorInfo::NotExpectedToken {
                expected: TokenKind::String,
                found: TokenKind::Number,
            },
        };
        assert_eq!(
            err.to_string(),
            "Error at 1:2 : Expect token(string) is not given, found number"
        );
    }

    #[test]
    fn parse_error_display_at_end() {
        let err = ParseError {
            pos: None,
            info: ParseErrorInfo::UnexpectedEOF,
        };
        assert_eq!(
            err.to_string(),
            "Error at end of input : Found end of token stream, while more tokens are expected"
        );
    }

    #[test]
    fn wrapped_error_is_transparent() {
        let err: Error = ParseError {
            pos: None,
            info: ParseErrorInfo::TooDeep(2),
        }
        .into();
        assert!(err.is_parse());
        assert!(!err.is_lex());
        assert_eq!(
            err.to_string(),
            "Error at end of input : Nesting deeper than 2 levels is not allowed"
        );
    }
}
