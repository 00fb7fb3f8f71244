use tracing::trace;

use crate::{
    error::{CalcError, CalcResult},
    token::{Operator, PostfixToken, Token},
};

/// An entry of the operator stack used while reordering.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum StackEntry {
    Operator(Operator),
    OpeningParenthesis,
}

/// Reorders infix tokens into postfix (Reverse Polish) order.
///
/// This is the Shunting-Yard algorithm. Numbers go straight to the output.
/// An operator first moves every stacked operator of greater or equal
/// precedence to the output, which makes equal precedence group left to
/// right. Parentheses only ever live on the operator stack.
///
/// # Errors
/// Returns [`CalcError::InvalidParentheses`] if a `)` has no matching `(`,
/// or if a `(` is still open at the end of the input.
///
/// # Example
/// ```
/// use strcalc::{
///     interpreter::{postfix::to_postfix, tokenizer::tokenize},
///     token::{Operator, PostfixToken},
/// };
///
/// let tokens = tokenize("(2 + 3) * 4").unwrap();
/// assert_eq!(to_postfix(&tokens).unwrap(),
///            vec![PostfixToken::Number(2.0),
///                 PostfixToken::Number(3.0),
///                 PostfixToken::BinaryOperation(Operator::Add),
///                 PostfixToken::Number(4.0),
///                 PostfixToken::BinaryOperation(Operator::Mul)]);
/// ```
pub fn to_postfix(tokens: &[Token]) -> CalcResult<Vec<PostfixToken>> {
    let mut stack: Vec<StackEntry> = Vec::new();
    let mut output = Vec::with_capacity(tokens.len());

    for token in tokens {
        match *token {
            Token::Number(value) => output.push(PostfixToken::Number(value)),
            Token::BinaryOperation(op) => {
                while let Some(&StackEntry::Operator(top)) = stack.last()
                      && top.precedence() >= op.precedence()
                {
                    stack.pop();
                    output.push(PostfixToken::BinaryOperation(top));
                }
                stack.push(StackEntry::Operator(op));
            },
            Token::OpeningParenthesis => stack.push(StackEntry::OpeningParenthesis),
            Token::ClosingParenthesis => loop {
                match stack.pop() {
                    Some(StackEntry::Operator(op)) => {
                        output.push(PostfixToken::BinaryOperation(op));
                    },
                    Some(StackEntry::OpeningParenthesis) => break,
                    None => return Err(CalcError::InvalidParentheses),
                }
            },
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(op) => output.push(PostfixToken::BinaryOperation(op)),
            StackEntry::OpeningParenthesis => return Err(CalcError::InvalidParentheses),
        }
    }

    trace!(tokens = output.len(), "converted to postfix");
    Ok(output)
}
