use crate::error::ParseError;
use std::fmt;
use std::iter::FusedIterator;

static WHITE: &[u8] = b" \t\r\n";
static OPS: &[u8] = b"()+-*/";

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Token {
    /// Digits exactly as they appeared in the source, parsed at eval time.
    Number(String),
    Operator(char),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(digits) => f.write_str(digits),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// Single pass tokenizer over an expression string.
///
/// Yields `Err` at most once, after which it behaves as exhausted.
pub struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Tokenizer<'a> {
        Tokenizer { src, pos: 0 }
    }

    // first position at or after pos that isn't whitespace
    fn skip_blanks(&self, mut pos: usize) -> usize {
        let bytes = self.src.as_bytes();
        while pos < bytes.len() && WHITE.contains(&bytes[pos]) {
            pos += 1;
        }
        pos
    }

    // first position at or after pos that isn't an ascii digit
    fn read_digits(&self, mut pos: usize) -> usize {
        let bytes = self.src.as_bytes();
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        pos
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pos = self.skip_blanks(self.pos);
        let current = *self.src.as_bytes().get(self.pos)?;
        if OPS.contains(&current) {
            self.pos += 1;
            return Some(Ok(Token::Operator(current as char)));
        }
        let start = self.pos;
        let end = self.read_digits(start);
        if end == start {
            // cursor only ever moves over ascii, so start is a char boundary
            let ch = self.src[start..].chars().next()?;
            self.pos = self.src.len();
            return Some(Err(ParseError::InvalidCharacter { ch, pos: start }));
        }
        self.pos = end;
        Some(Ok(Token::Number(self.src[start..end].to_string())))
    }
}

impl<'a> FusedIterator for Tokenizer<'a> {}
