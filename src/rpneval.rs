use crate::error::EvalError;
use crate::parser::RPNExpr;
use crate::stack::{ArrayStack, Stack};
use crate::tokenizer::Token;
use tracing::{debug, trace};

/// What to do when `+ - * /` leaves the range of `i64`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Overflow {
    /// Fail with `EvalError::Overflow`.
    Checked,
    Wrapping,
    Saturating,
}

impl Default for Overflow {
    fn default() -> Self {
        Overflow::Checked
    }
}

#[derive(Debug, Clone, Default)]
pub struct MathContext {
    overflow: Overflow,
}

impl MathContext {
    pub fn new() -> MathContext {
        MathContext::default()
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> MathContext {
        self.overflow = overflow;
        self
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    pub fn eval(&self, rpn: &RPNExpr) -> Result<i64, EvalError> {
        let mut operands = ArrayStack::new(rpn.0.len());
        self.eval_with(rpn, &mut operands)
    }

    /// Reduces `rpn` to a single value, using `operands` as scratch space.
    ///
    /// The first value popped for an operator is its right hand side.
    pub fn eval_with<S>(&self, rpn: &RPNExpr, operands: &mut S) -> Result<i64, EvalError>
    where
        S: Stack<i64>,
    {
        for token in rpn.0.iter() {
            trace!(%token, depth = operands.size(), "reducing");
            match *token {
                Token::Number(ref digits) => {
                    let value = digits
                        .parse::<i64>()
                        .map_err(|_| EvalError::InvalidNumber(digits.clone()))?;
                    push(operands, value)?;
                }
                Token::Operator(op) => {
                    if operands.size() < 2 {
                        return Err(EvalError::InsufficientOperands);
                    }
                    let r = operands.pop().ok_or(EvalError::InsufficientOperands)?;
                    let l = operands.pop().ok_or(EvalError::InsufficientOperands)?;
                    push(operands, self.apply(op, l, r)?)?;
                }
            }
        }
        if operands.size() != 1 {
            return Err(EvalError::MalformedExpression);
        }
        let result = operands.pop().ok_or(EvalError::MalformedExpression)?;
        debug!(%rpn, result, "evaluated");
        Ok(result)
    }

    fn apply(&self, op: char, l: i64, r: i64) -> Result<i64, EvalError> {
        if op == '/' && r == 0 {
            return Err(EvalError::DivisionByZero);
        }
        match self.overflow {
            Overflow::Checked => {
                let checked = match op {
                    '+' => l.checked_add(r),
                    '-' => l.checked_sub(r),
                    '*' => l.checked_mul(r),
                    '/' => l.checked_div(r),
                    _ => return Err(EvalError::InvalidOperator(op)),
                };
                checked.ok_or(EvalError::Overflow)
            }
            Overflow::Wrapping => match op {
                '+' => Ok(l.wrapping_add(r)),
                '-' => Ok(l.wrapping_sub(r)),
                '*' => Ok(l.wrapping_mul(r)),
                '/' => Ok(l.wrapping_div(r)),
                _ => Err(EvalError::InvalidOperator(op)),
            },
            Overflow::Saturating => match op {
                '+' => Ok(l.saturating_add(r)),
                '-' => Ok(l.saturating_sub(r)),
                '*' => Ok(l.saturating_mul(r)),
                '/' => Ok(l.saturating_div(r)),
                _ => Err(EvalError::InvalidOperator(op)),
            },
        }
    }
}

fn push(operands: &mut impl Stack<i64>, value: i64) -> Result<(), EvalError> {
    operands.push(value).map_err(|_| EvalError::StackFull)
}

#[cfg(test)]
mod tests {
    use super::{MathContext, Overflow};
    use crate::error::EvalError;
    use crate::parser::{RPNExpr, ShuntingParser};
    use crate::stack::{ArrayStack, LinkedStack};
    use crate::tokenizer::Token;

    fn eval(expr: &str) -> Result<i64, EvalError> {
        let rpn = ShuntingParser::parse_str(expr).unwrap();
        MathContext::new().eval(&rpn)
    }

    fn num(digits: &str) -> Token {
        Token::Number(digits.to_string())
    }

    #[test]
    fn test_eval1() {
        assert_eq!(eval("3 * 8 + 4"), Ok(28));
    }

    #[test]
    fn test_eval2() {
        assert_eq!(eval("72 / (12 - 6)"), Ok(12));
    }

    #[test]
    fn test_eval3() {
        assert_eq!(eval("4 - 2 * (6 - 3) / (3 * (11 - 3))"), Ok(4));
    }

    #[test]
    fn test_eval4() {
        assert_eq!(eval("(4 - 19) * (7 + 19) + 19 * (7 - 4 + 19)"), Ok(28));
    }

    #[test]
    fn test_eval5() {
        assert_eq!(eval("8 - 3 - 2"), Ok(3));
        assert_eq!(eval("100 / 10 / 5"), Ok(2));
        assert_eq!(eval("7"), Ok(7));
        assert_eq!(eval("((7))"), Ok(7));
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(eval("7 / 2"), Ok(3));
        assert_eq!(eval("(0 - 7) / 2"), Ok(-3));
        assert_eq!(eval("7 / (0 - 2)"), Ok(-3));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(eval("1 / 0"), Err(EvalError::DivisionByZero));
        assert_eq!(eval("1 / (2 - 2)"), Err(EvalError::DivisionByZero));
        let cx = MathContext::new().with_overflow(Overflow::Wrapping);
        let rpn = ShuntingParser::parse_str("5 / 0").unwrap();
        assert_eq!(cx.eval(&rpn), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn missing_operands() {
        assert_eq!(eval("1 +"), Err(EvalError::InsufficientOperands));
        assert_eq!(eval("* 2"), Err(EvalError::InsufficientOperands));
        assert_eq!(eval("()+"), Err(EvalError::InsufficientOperands));
    }

    #[test]
    fn malformed() {
        assert_eq!(eval(""), Err(EvalError::MalformedExpression));
        assert_eq!(eval("1 2"), Err(EvalError::MalformedExpression));
        assert_eq!(eval("1 2 + 3"), Err(EvalError::MalformedExpression));
        assert_eq!(
            MathContext::new().eval(&RPNExpr::default()),
            Err(EvalError::MalformedExpression)
        );
    }

    #[test]
    fn bad_tokens() {
        let rpn = RPNExpr(vec![num("1"), num("2"), Token::Operator('%')]);
        assert_eq!(MathContext::new().eval(&rpn), Err(EvalError::InvalidOperator('%')));

        let rpn = RPNExpr(vec![num("1"), num("2"), Token::Operator('(')]);
        assert_eq!(MathContext::new().eval(&rpn), Err(EvalError::InvalidOperator('(')));

        let rpn = RPNExpr(vec![num("1x")]);
        assert_eq!(
            MathContext::new().eval(&rpn),
            Err(EvalError::InvalidNumber("1x".to_string()))
        );

        assert_eq!(
            eval("99999999999999999999"),
            Err(EvalError::InvalidNumber("99999999999999999999".to_string()))
        );
    }

    #[test]
    fn overflow_policies() {
        let rpn = ShuntingParser::parse_str("9223372036854775807 + 1").unwrap();
        assert_eq!(MathContext::new().eval(&rpn), Err(EvalError::Overflow));
        assert_eq!(
            MathContext::new().with_overflow(Overflow::Wrapping).eval(&rpn),
            Ok(i64::MIN)
        );
        assert_eq!(
            MathContext::new().with_overflow(Overflow::Saturating).eval(&rpn),
            Ok(i64::MAX)
        );

        let rpn = ShuntingParser::parse_str("(0 - 9223372036854775807 - 1) / (0 - 1)").unwrap();
        assert_eq!(MathContext::new().eval(&rpn), Err(EvalError::Overflow));
        assert_eq!(
            MathContext::new().with_overflow(Overflow::Wrapping).eval(&rpn),
            Ok(i64::MIN)
        );
        assert_eq!(
            MathContext::new().with_overflow(Overflow::Saturating).eval(&rpn),
            Ok(i64::MAX)
        );

        let rpn = ShuntingParser::parse_str("0 - 9223372036854775807 - 2").unwrap();
        assert_eq!(MathContext::new().eval(&rpn), Err(EvalError::Overflow));
        assert_eq!(
            MathContext::new().with_overflow(Overflow::Wrapping).eval(&rpn),
            Ok(i64::MAX)
        );
        assert_eq!(
            MathContext::new().with_overflow(Overflow::Saturating).eval(&rpn),
            Ok(i64::MIN)
        );

        let rpn = ShuntingParser::parse_str("3037000500 * 3037000500").unwrap();
        assert_eq!(MathContext::new().eval(&rpn), Err(EvalError::Overflow));
        assert_eq!(
            MathContext::new().with_overflow(Overflow::Wrapping).eval(&rpn),
            Ok(-9223372036709301616)
        );
        assert_eq!(
            MathContext::new().with_overflow(Overflow::Saturating).eval(&rpn),
            Ok(i64::MAX)
        );
    }

    #[test]
    fn default_is_checked() {
        assert_eq!(MathContext::new().overflow(), Overflow::Checked);
        assert_eq!(
            MathContext::new().with_overflow(Overflow::Saturating).overflow(),
            Overflow::Saturating
        );
    }

    #[test]
    fn any_stack_will_do() {
        let rpn = ShuntingParser::parse_str("(4 - 19) * (7 + 19) + 19 * (7 - 4 + 19)").unwrap();
        let cx = MathContext::new();
        assert_eq!(cx.eval_with(&rpn, &mut LinkedStack::new()), Ok(28));
        assert_eq!(cx.eval_with(&rpn, &mut ArrayStack::new(1)), Err(EvalError::StackFull));
    }
}
