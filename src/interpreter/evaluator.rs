use tracing::trace;

use crate::{
    error::{CalcError, CalcResult},
    token::PostfixToken,
};

/// Computes the value of a postfix expression.
///
/// Numbers are pushed onto a value stack. An operator pops its right operand
/// first and its left operand second, then pushes the result. Arithmetic is
/// plain IEEE double arithmetic, so dividing by zero gives an infinity or
/// `NaN`.
///
/// # Errors
/// Returns [`CalcError::MalformedExpression`] if an operator finds fewer than
/// two operands, or if the sequence does not leave exactly one value.
///
/// # Example
/// ```
/// use strcalc::{
///     interpreter::evaluator::evaluate,
///     token::{Operator, PostfixToken},
/// };
///
/// // 8 3 - 2 -
/// let postfix = [PostfixToken::Number(8.0),
///                PostfixToken::Number(3.0),
///                PostfixToken::BinaryOperation(Operator::Sub),
///                PostfixToken::Number(2.0),
///                PostfixToken::BinaryOperation(Operator::Sub)];
/// assert_eq!(evaluate(&postfix).unwrap(), 3.0);
/// assert!(evaluate(&[]).is_err());
/// ```
pub fn evaluate(postfix: &[PostfixToken]) -> CalcResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match *token {
            PostfixToken::Number(value) => stack.push(value),
            PostfixToken::BinaryOperation(op) => {
                let right = stack.pop().ok_or(CalcError::MalformedExpression)?;
                let left = stack.pop().ok_or(CalcError::MalformedExpression)?;
                stack.push(op.apply(left, right));
            },
        }
    }

    match stack.as_slice() {
        [result] => {
            trace!(result, "evaluated postfix expression");
            Ok(*result)
        },
        _ => Err(CalcError::MalformedExpression),
    }
}
