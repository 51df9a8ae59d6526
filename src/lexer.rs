use crate::{
    error::{LexError, LexErrorInfo},
    position::Position,
    token::{Token, TokenValue},
};
use tracing::{debug, trace};

const SPACE: char = '\u{0020}';
const QUOTATION_MARK: char = '\u{0022}';
const LINE_FEED: char = '\u{000A}';

const COMMA: char = ',';
const COLON: char = ':';
const LEFT_BRACKET: char = '[';
const RIGHT_BRACKET: char = ']';
const LEFT_BRACE: char = '{';
const RIGHT_BRACE: char = '}';

/// Splits `source` into tokens.
///
/// Only the plain space is treated as insignificant; tabs and line breaks
/// outside string literals are rejected like any other unknown character.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    match Lexer::new(source).tokenize() {
        Ok(tokens) => {
            trace!(tokens = tokens.len(), "tokenized input");
            Ok(tokens)
        }
        Err(err) => {
            debug!(pos = %err.pos, "{}", err.info);
            Err(err)
        }
    }
}

#[derive(Debug)]
struct Lexer<'a> {
    src: &'a str,
    offset: usize,
    pos: Position,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Lexer {
            src,
            offset: 0,
            pos: Position::default(),
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.offset..]
    }

    fn cur(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn move_next(&mut self) {
        if let Some(ch) = self.cur() {
            self.offset += ch.len_utf8();
            match ch {
                LINE_FEED => self.pos.next_row(),
                _ => self.pos.next_col(),
            }
        }
    }

    fn move_if_expected(&mut self, expected: &str) -> bool {
        if !self.rest().starts_with(expected) {
            return false;
        }
        for _ in expected.chars() {
            self.move_next();
        }
        true
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens: Vec<Token> = vec![];
        while let Some(ch) = self.cur() {
            if ch == SPACE {
                self.move_next();
                continue;
            }
            tokens.push(self.generate_token_start_with(ch)?);
        }
        Ok(tokens)
    }

    fn generate_token_start_with(&mut self, ch: char) -> Result<Token, LexError> {
        let pos = self.pos;
        let rest = self.rest();

        match self.generate_value_start_with(ch) {
            Ok(val) => Ok(Token { val, pos }),
            Err(info) => Err(LexError {
                pos,
                rest: rest.to_string(),
                info,
            }),
        }
    }

    fn generate_value_start_with(&mut self, ch: char) -> Result<TokenValue, LexErrorInfo> {
        match ch {
            QUOTATION_MARK => self.generate_string_value(),
            '0'..='9' => self.generate_number_value(),
            'n' | 't' | 'f' => self.generate_keyword_value(ch),
            _ => self.generate_reserved_value(ch),
        }
    }

    fn generate_keyword_value(&mut self, ch: char) -> Result<TokenValue, LexErrorInfo> {
        if self.move_if_expected("null") {
            Ok(TokenValue::Null)
        } else if self.move_if_expected("true") {
            Ok(TokenValue::Boolean(true))
        } else if self.move_if_expected("false") {
            Ok(TokenValue::Boolean(false))
        } else {
            Err(LexErrorInfo::NotProperToken(ch))
        }
    }

    fn generate_reserved_value(&mut self, ch: char) -> Result<TokenValue, LexErrorInfo> {
        let val = match ch {
            COMMA => TokenValue::Comma,
            COLON => TokenValue::Colon,
            LEFT_BRACE => TokenValue::OpenBrace,
            RIGHT_BRACE => TokenValue::CloseBrace,
            LEFT_BRACKET => TokenValue::OpenBracket,
            RIGHT_BRACKET => TokenValue::CloseBracket,
            _ => return Err(LexErrorInfo::NotProperToken(ch)),
        };
        self.move_next();
        Ok(val)
    }

    // Escapes are not interpreted: the literal ends at the next quotation mark.
    fn generate_string_value(&mut self) -> Result<TokenValue, LexErrorInfo> {
        self.move_next();

        let mut val = String::new();
        loop {
            let ch = self.cur().ok_or(LexErrorInfo::NotStringClosed)?;
            self.move_next();

            if ch == QUOTATION_MARK {
                return Ok(TokenValue::String(val));
            }
            val.push(ch);
        }
    }

    fn generate_number_value(&mut self) -> Result<TokenValue, LexErrorInfo> {
        let mut digits = String::new();
        while let Some(digit) = self.cur() {
            if !digit.is_ascii_digit() {
                break;
            }
            self.move_next();
            digits.push(digit);
        }

        match digits.parse::<i64>() {
            Ok(num) => Ok(TokenValue::Number(num)),
            Err(_) => Err(LexErrorInfo::NumberOutOfRange(digits)),
        }
    }
}
