use crate::error::ParseError;
use crate::stack::{ArrayStack, Stack};
use crate::tokenizer::{Token, Tokenizer};
use std::fmt;
use tracing::{debug, trace};

/// Binding strength of an operator or parenthesis.
///
/// Parentheses sit below every operator so the operator rule never flushes
/// them. Numbers never reach the operator stack and have no precedence.
pub fn precedence(token: &Token) -> Option<usize> {
    match *token {
        Token::Operator('(') | Token::Operator(')') => Some(0), // keep at bottom
        Token::Operator('+') | Token::Operator('-') => Some(1),
        Token::Operator('*') | Token::Operator('/') => Some(2),
        _ => None,
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct RPNExpr(pub Vec<Token>);

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        // an expression can't hold more tokens than bytes
        let mut stack = ArrayStack::new(expr.len());
        Self::parse(Tokenizer::new(expr), &mut stack)
    }

    /// Reorders infix tokens into postfix using `stack` for pending operators.
    ///
    /// Operators of equal precedence are flushed before the new one is
    /// pushed, so `+ -` and `* /` associate to the left.
    pub fn parse<I, S>(lex: I, stack: &mut S) -> Result<RPNExpr, ParseError>
    where
        I: IntoIterator<Item = Result<Token, ParseError>>,
        S: Stack<Token>,
    {
        let mut out = Vec::new();

        for token in lex {
            let token = token?;
            trace!(%token, pending = stack.size(), "shunting");
            match token {
                Token::Number(_) => out.push(token),
                Token::Operator('(') => push(stack, token)?,
                Token::Operator(')') => loop {
                    match stack.pop() {
                        Some(Token::Operator('(')) => break, // peel matching paren
                        Some(top) => out.push(top),
                        None => return Err(ParseError::UnbalancedParenthesis),
                    }
                },
                Token::Operator(_) => {
                    let prec_rhs = precedence(&token);
                    while let Some(top) = stack.peek() {
                        match (precedence(top), prec_rhs) {
                            (Some(prec_lhs), Some(prec_rhs)) if prec_lhs >= prec_rhs => (),
                            _ => break,
                        }
                        if let Some(top) = stack.pop() {
                            out.push(top);
                        }
                    }
                    push(stack, token)?;
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                Token::Operator('(') => return Err(ParseError::UnbalancedParenthesis),
                token => out.push(token),
            }
        }

        let rpn = RPNExpr(out);
        debug!(%rpn, "converted");
        Ok(rpn)
    }
}

fn push(stack: &mut impl Stack<Token>, token: Token) -> Result<(), ParseError> {
    stack.push(token).map_err(|_| ParseError::StackFull)
}
