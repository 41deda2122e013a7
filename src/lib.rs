mod error;
mod parser;
mod rpneval;
mod stack;
mod tokenizer;

pub use crate::error::{Error, EvalError, ParseError};
pub use crate::parser::{precedence, RPNExpr, ShuntingParser};
pub use crate::rpneval::{MathContext, Overflow};
pub use crate::stack::{ArrayStack, LinkedStack, Stack};
pub use crate::tokenizer::{Token, Tokenizer};

/// Converts `expr` to postfix and reduces it with the default context.
pub fn eval_str(expr: &str) -> Result<i64, Error> {
    let rpn = ShuntingParser::parse_str(expr)?;
    Ok(MathContext::new().eval(&rpn)?)
}
