use tracing::{debug, trace};

use super::{Token, TokenKind, OPERATORS, SEPARATORS};

#[derive(Debug)]
pub struct Lexer {
    tokens: Vec<Token>,
    buffer: String,
}

impl Lexer {
    fn new() -> Self {
        Self {
            tokens: vec![],
            buffer: String::new(),
        }
    }

    fn new_token(&mut self, token: Token) {
        trace!(kind = %token.kind, text = %token.text, "token");
        self.tokens.push(token);
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let word = std::mem::take(&mut self.buffer);
        self.new_token(Token::classify(&word));
    }

    fn _tokenize(&mut self, s: &str) {
        for c in s.chars() {
            if c.is_whitespace() || SEPARATORS.contains(&c) {
                self.flush();
            } else if OPERATORS.contains(&c) {
                self.flush();
                self.new_token(Token::new(TokenKind::Operator, c));
            } else {
                self.buffer.push(c);
            }
        }

        self.flush();
    }

    /// Splits `s` into classified tokens. Never fails: characters outside the
    /// operator set end up inside identifiers.
    pub fn tokenize(s: &str) -> Vec<Token> {
        let mut lexer = Lexer::new();
        lexer._tokenize(s);

        debug!(count = lexer.tokens.len(), "lexical analysis done");
        lexer.tokens
    }
}
