use thiserror::Error;

/// Failures raised while tokenizing or reordering an expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid character {ch:?} at offset {pos}")]
    InvalidCharacter { ch: char, pos: usize },
    #[error("unbalanced parenthesis")]
    UnbalancedParenthesis,
    #[error("operator stack is full")]
    StackFull,
}

/// Failures raised while reducing an RPN sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("operator needs two operands")]
    InsufficientOperands,
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid operator: {0}")]
    InvalidOperator(char),
    #[error("malformed expression")]
    MalformedExpression,
    #[error("integer overflow")]
    Overflow,
    #[error("operand stack is full")]
    StackFull,
}

/// Either stage of the pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
