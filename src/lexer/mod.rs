use lachs::Span;

#[lachs::token]
pub enum Token {
    #[terminal("let")]
    Let,
    #[terminal("rec")]
    Rec,
    #[terminal("in")]
    In,
    #[terminal("if")]
    If,
    #[terminal("then")]
    Then,
    #[terminal("else")]
    Else,
    #[terminal("true")]
    True,
    #[terminal("false")]
    False,
    #[literal("[a-z_][a-zA-Z0-9_']*")]
    Ident,
    #[literal("[A-Z][a-zA-Z0-9_']*")]
    UpperIdent,
    #[literal("[0-9]+")]
    Integer,
    #[literal(r#""([^"\\]|\\.)*""#)]
    StringLiteral,
    #[terminal("=")]
    Equals,
    #[terminal("->")]
    Arrow,
    #[terminal("\\")]
    Backslash,
    #[terminal("(")]
    LParen,
    #[terminal(")")]
    RParen,
}

impl Token {
    pub fn pos(&self) -> Span {
        match self {
            Token::Let(inner) => inner.position.clone(),
            Token::Rec(inner) => inner.position.clone(),
            Token::In(inner) => inner.position.clone(),
            Token::If(inner) => inner.position.clone(),
            Token::Then(inner) => inner.position.clone(),
            Token::Else(inner) => inner.position.clone(),
            Token::True(inner) => inner.position.clone(),
            Token::False(inner) => inner.position.clone(),
            Token::Ident(inner) => inner.position.clone(),
            Token::UpperIdent(inner) => inner.position.clone(),
            Token::Integer(inner) => inner.position.clone(),
            Token::StringLiteral(inner) => inner.position.clone(),
            Token::Equals(inner) => inner.position.clone(),
            Token::Arrow(inner) => inner.position.clone(),
            Token::Backslash(inner) => inner.position.clone(),
            Token::LParen(inner) => inner.position.clone(),
            Token::RParen(inner) => inner.position.clone(),
        }
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self {
            Token::Let(_) => "'let'".to_string(),
            Token::Rec(_) => "'rec'".to_string(),
            Token::In(_) => "'in'".to_string(),
            Token::If(_) => "'if'".to_string(),
            Token::Then(_) => "'then'".to_string(),
            Token::Else(_) => "'else'".to_string(),
            Token::True(_) => "'true'".to_string(),
            Token::False(_) => "'false'".to_string(),
            Token::Ident(inner) => format!("identifier '{}'", inner.value),
            Token::UpperIdent(inner) => format!("type name '{}'", inner.value),
            Token::Integer(inner) => format!("integer '{}'", inner.value),
            Token::StringLiteral(inner) => format!("string {}", inner.value),
            Token::Equals(_) => "'='".to_string(),
            Token::Arrow(_) => "'->'".to_string(),
            Token::Backslash(_) => "'\\'".to_string(),
            Token::LParen(_) => "'('".to_string(),
            Token::RParen(_) => "')'".to_string(),
        }
    }
}

/// Resolve the escapes of a string literal token and drop its quotes.
///
/// Supports `\n`, `\t`, `\"` and `\\`; any other escaped character stands for itself.
pub fn unescape(literal: &str) -> String {
    let inner = literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(literal);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Inverse of [`unescape`]: quote `value` as a string literal.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
