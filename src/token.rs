use crate::position::Position;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub val: TokenValue,
    pub pos: Position,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    String(String),
    Number(i64),
    Null,
    Boolean(bool),

    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Colon,
    Comma,
}

/// Token kind without payload, used by the parser cursor and in error reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    String,
    Number,
    Null,
    Boolean,

    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Colon,
    Comma,
}

impl TokenValue {
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenValue::String(_) => TokenKind::String,
            TokenValue::Number(_) => TokenKind::Number,
            TokenValue::Null => TokenKind::Null,
            TokenValue::Boolean(_) => TokenKind::Boolean,
            TokenValue::OpenBracket => TokenKind::OpenBracket,
            TokenValue::CloseBracket => TokenKind::CloseBracket,
            TokenValue::OpenBrace => TokenKind::OpenBrace,
            TokenValue::CloseBrace => TokenKind::CloseBrace,
            TokenValue::Colon => TokenKind::Colon,
            TokenValue::Comma => TokenKind::Comma,
        }
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        self.val.kind()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::String => write!(f, "string"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Null => write!(f, "null"),
            TokenKind::Boolean => write!(f, "boolean"),
            TokenKind::OpenBracket => write!(f, "["),
            TokenKind::CloseBracket => write!(f, "]"),
            TokenKind::OpenBrace => write!(f, "{{"),
            TokenKind::CloseBrace => write!(f, "}}"),
            TokenKind::Colon => write!(f, ":"),
            TokenKind::Comma => write!(f, ","),
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenValue::String(val) => write!(f, "string({})", val),
            TokenValue::Number(val) => write!(f, "number({})", val),
            TokenValue::Boolean(val) => write!(f, "boolean({})", val),
            other => write!(f, "{}", other.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TokenKind, TokenValue};

    macro_rules! display {
        ($($name:ident: $val:expr, $expect:expr;)*) => {
        $(
            #[test]
            fn $name() {
                assert_eq!($val.to_string(), $expect);
            }
        )*
        }
    }

    display! {
        display_string: TokenValue::String("key".to_string()), "string(key)";
        display_number: TokenValue::Number(42), "number(42)";
        display_boolean: TokenValue::Boolean(false), "boolean(false)";
        display_null: TokenValue::Null, "null";
        display_open_brace: TokenValue::OpenBrace, "{";
        display_close_brace: TokenValue::CloseBrace, "}";
        display_comma_kind: TokenKind::Comma, ",";
    }

    #[test]
    fn kind_ignores_payload() {
        assert_eq!(TokenValue::Number(1).kind(), TokenValue::Number(2).kind());
        assert_ne!(TokenValue::Number(1), TokenValue::Number(2));
        assert_eq!(TokenValue::Boolean(true).kind(), TokenKind::Boolean);
    }
}
