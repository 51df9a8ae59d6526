//! A small hand-written JSON lexer and recursive descent parser.
//!
//! The accepted language is a deliberately reduced JSON:
//!
//! * numbers are runs of ASCII digits, read as non-negative `i64`
//!   (no sign, fraction or exponent),
//! * string literals end at the next `"` and escapes are not interpreted,
//! * the plain space is the only insignificant whitespace.
//!
//! ```
//! use mini_json_parser::{json_object, parse};
//!
//! let json = parse(r#"{"key": [1, 2]}"#).unwrap();
//! assert_eq!(json, json_object! { "key"; mini_json_parser::json_array![1i64, 2i64] });
//! ```

mod error;
mod json;
mod lexer;
mod limits;
mod parser;
mod position;
mod token;

pub use error::{Error, LexError, LexErrorInfo, ParseError, ParseErrorInfo};
pub use json::Json;
pub use lexer::tokenize;
pub use limits::Limits;
pub use parser::{parse, parse_with_limits, Parser};
pub use position::Position;
pub use token::{Token, TokenKind, TokenValue};
