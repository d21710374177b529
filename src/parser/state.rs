use std::fmt;

use lachs::Span;

use crate::lexer::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub expected: Vec<String>,
    pub found: Option<String>,
    pub position: Option<Span>,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            expected: vec![],
            found: None,
            position: None,
        }
    }

    pub fn expected(mut self, what: impl Into<String>) -> Self {
        self.expected.push(what.into());
        self
    }

    pub fn found(mut self, what: impl Into<String>) -> Self {
        self.found = Some(what.into());
        self
    }

    pub fn at(mut self, position: Span) -> Self {
        self.position = Some(position);
        self
    }

    /// The message with expected/found details, without source location.
    pub fn details(&self) -> String {
        let mut msg = self.message.clone();
        if !self.expected.is_empty() {
            msg.push_str(&format!(", expected {}", self.expected.join(" or ")));
        }
        if let Some(found) = &self.found {
            msg.push_str(&format!(", found {}", found));
        }
        msg
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = self.details();
        match &self.position {
            Some(position) if !position.source.is_empty() => {
                write!(f, "{}", position.to_string(&msg))
            }
            _ => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

pub struct ParseState {
    tokens: Vec<Token>,
    index: usize,
    /// Error recorded at the highest token index so far, for reporting after backtracking.
    furthest: Option<(usize, ParseError)>,
}

impl ParseState {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            index: 0,
            furthest: None,
        }
    }

    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).cloned()?;
        self.index += 1;
        Some(token)
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    pub fn has_next(&self) -> bool {
        self.index < self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn restore(&mut self, position: usize) {
        self.index = position;
    }

    /// Remember `err` if it happened at least as far into the input as any earlier one.
    pub fn record_error(&mut self, err: ParseError) {
        match &self.furthest {
            Some((index, _)) if *index > self.index => {}
            _ => self.furthest = Some((self.index, err)),
        }
    }

    /// The furthest recorded error, if it is not behind the current position.
    pub fn furthest_error(&self) -> Option<&ParseError> {
        match &self.furthest {
            Some((index, err)) if *index >= self.index => Some(err),
            _ => None,
        }
    }

    /// An "unexpected" error for the token at the current position.
    pub fn error_here(&self, msg: &str) -> ParseError {
        match self.peek() {
            Some(tok) => ParseError::new(msg).found(tok.describe()).at(tok.pos()),
            None => ParseError::new("unexpected end of input"),
        }
    }
}

pub trait Parser<T>: Sized {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T>;
}

impl<T, F: Fn(&mut ParseState) -> ParseResult<T>> Parser<T> for F {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        self(state)
    }
}
