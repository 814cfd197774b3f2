use logos::{Logos, SpannedIter};
use std::fmt;
use std::ops::Range;

#[derive(Default, Debug, Clone, PartialEq)]
pub enum LexicalError {
    #[default]
    InvalidToken,
}

// Whitespace is insignificant everywhere in a definition, including inside a
// name or a literal: `ab c = 1 2` defines `abc` as `12`. Every other character
// that is not `=` or `+` belongs to a word.
#[derive(Logos, Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[logos(error = LexicalError)]
#[logos(skip r"\s+")]
pub enum Token {
    #[token("=", priority = 10)]
    Equal,
    #[token("+", priority = 10)]
    Plus,
    #[regex(r"[^=+\s]+", priority = 2)]
    Word,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Equal => write!(f, "="),
            Token::Plus => write!(f, "+"),
            Token::Word => write!(f, "word"),
        }
    }
}

pub struct Lexer<'input> {
    token_stream: SpannedIter<'input, Token>,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Self {
            token_stream: Token::lexer(input).spanned(),
        }
    }
}

impl Iterator for Lexer<'_> {
    /// A token and its byte range, or the byte range that failed to lex.
    type Item = Result<(Token, Range<usize>), Range<usize>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.token_stream.next()? {
            (Ok(token), span) => Some(Ok((token, span))),
            (Err(LexicalError::InvalidToken), span) => Some(Err(span)),
        }
    }
}
