use std::collections::BTreeMap;

use crate::{
    error::{Error, ParseError, ParseErrorInfo},
    json::Json,
    lexer,
    limits::Limits,
    token::{Token, TokenKind, TokenValue},
};
use tracing::{debug, trace};

/// Parses `source` as a single JSON value with the default [`Limits`].
pub fn parse(source: &str) -> Result<Json, Error> {
    parse_with_limits(source, Limits::default())
}

pub fn parse_with_limits(source: &str, limits: Limits) -> Result<Json, Error> {
    let tokens = lexer::tokenize(source)?;
    let json = Parser::with_limits(tokens, limits).parse().map_err(|err| {
        debug!("{}", err);
        err
    })?;
    trace!("parsed input");
    Ok(json)
}

/// Recursive descent over an already tokenized input.
pub struct Parser {
    tokens: Vec<Token>,
    idx: usize,
    depth: usize,
    limits: Limits,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser::with_limits(tokens, Limits::default())
    }

    pub fn with_limits(tokens: Vec<Token>, limits: Limits) -> Self {
        Parser {
            tokens,
            idx: 0,
            depth: 0,
            limits,
        }
    }

    /// Consumes the whole token sequence, which must hold exactly one value.
    pub fn parse(mut self) -> Result<Json, ParseError> {
        let json = self.value()?;

        match self.tokens.get(self.idx) {
            None => Ok(json),
            Some(token) => Err(ParseError {
                pos: Some(token.pos),
                info: ParseErrorInfo::TrailingToken(token.kind()),
            }),
        }
    }

    fn current(&self) -> Result<&Token, ParseError> {
        self.tokens.get(self.idx).ok_or(ParseError {
            pos: None,
            info: ParseErrorInfo::UnexpectedEOF,
        })
    }

    fn current_kind(&self) -> Result<TokenKind, ParseError> {
        Ok(self.current()?.kind())
    }

    fn advance(&mut self) {
        self.idx += 1;
    }

    fn expect(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        let token = self.current()?;
        if token.kind() != expected {
            return Err(ParseError {
                pos: Some(token.pos),
                info: ParseErrorInfo::NotExpectedToken {
                    expected,
                    found: token.kind(),
                },
            });
        }

        let token = token.clone();
        self.advance();
        Ok(token)
    }

    fn value(&mut self) -> Result<Json, ParseError> {
        let token = self.current()?;
        let json = match &token.val {
            TokenValue::OpenBracket => return self.nested(Parser::array),
            TokenValue::OpenBrace => return self.nested(Parser::object),
            TokenValue::String(val) => Json::String(val.clone()),
            TokenValue::Number(num) => Json::Integer(*num),
            TokenValue::Boolean(val) => Json::Bool(*val),
            TokenValue::Null => Json::Null,
            _ => {
                return Err(ParseError {
                    pos: Some(token.pos),
                    info: ParseErrorInfo::NotValueToken(token.kind()),
                })
            }
        };
        self.advance();
        Ok(json)
    }

    fn nested(
        &mut self,
        production: fn(&mut Parser) -> Result<Json, ParseError>,
    ) -> Result<Json, ParseError> {
        if self.depth >= self.limits.max_depth {
            return Err(ParseError {
                pos: Some(self.current()?.pos),
                info: ParseErrorInfo::TooDeep(self.limits.max_depth),
            });
        }

        self.depth += 1;
        let res = production(self);
        self.depth -= 1;
        res
    }

    fn array(&mut self) -> Result<Json, ParseError> {
        self.expect(TokenKind::OpenBracket)?;

        let mut v: Vec<Json> = vec![];
        if self.current_kind()? == TokenKind::CloseBracket {
            self.advance();
            return Ok(Json::Array(v));
        }

        loop {
            v.push(self.value()?);
            if self.current_kind()? == TokenKind::CloseBracket {
                self.advance();
                break;
            }
            self.expect(TokenKind::Comma)?;
        }

        Ok(Json::Array(v))
    }

    fn object(&mut self) -> Result<Json, ParseError> {
        self.expect(TokenKind::OpenBrace)?;

        let mut m: BTreeMap<String, Json> = BTreeMap::new();
        if self.current_kind()? == TokenKind::CloseBrace {
            self.advance();
            return Ok(Json::Object(m));
        }

        loop {
            let token = self.expect(TokenKind::String)?;
            let (pos, found) = (token.pos, token.kind());
            let key = match token.val {
                TokenValue::String(key) => key,
                _ => {
                    return Err(ParseError {
                        pos: Some(pos),
                        info: ParseErrorInfo::NotExpectedToken {
                            expected: TokenKind::String,
                            found,
                        },
                    })
                }
            };
            self.expect(TokenKind::Colon)?;

            // Later duplicates replace earlier ones.
            m.insert(key, self.value()?);

            if self.current_kind()? == TokenKind::CloseBrace {
                self.advance();
                break;
            }
            self.expect(TokenKind::Comma)?;
        }

        Ok(Json::Object(m))
    }
}
