use std::fmt;

use phf::{phf_map, phf_set};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyword {
    Def,
    Let,
    Print,
    If,
    End,
}

pub static KEYWORDS: phf::Map<&'static str, Keyword> = phf_map! {
    "def" => Keyword::Def,
    "let" => Keyword::Let,
    "print" => Keyword::Print,
    "if" => Keyword::If,
    "end" => Keyword::End,
};

/// Single characters that always form a token of their own.
pub static OPERATORS: phf::Set<char> = phf_set! {
    '+', '-', '*', '/', '^', '=', '(', ')', ',',
};

/// Characters dropped between tokens besides whitespace.
pub static SEPARATORS: phf::Set<char> = phf_set! {
    ';',
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Operator,
    Number,
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Number => "NUMBER",
            TokenKind::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Classifies a run of non-operator characters.
    pub fn classify(word: &str) -> Self {
        let kind = if KEYWORDS.contains_key(word) {
            TokenKind::Keyword
        } else if word.starts_with(|c: char| c.is_ascii_digit()) {
            TokenKind::Number
        } else {
            TokenKind::Identifier
        };
        Self::new(kind, word)
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword => KEYWORDS.get(self.text.as_str()).copied(),
            _ => None,
        }
    }

    pub fn is_operator(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == op
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type: {}, Value: {}", self.kind, self.text)
    }
}
