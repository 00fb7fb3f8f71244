use tracing::trace;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::lexer::{Lexeme, lex},
    token::{Operator, Token},
};

/// Converts an infix expression into a sequence of tokens.
///
/// Whitespace is removed first and is never significant, so `1 2` reads as
/// `12`. A `-` that appears where an operand is expected (at the start, after
/// another operator, or after `(`) is a sign. Signs are folded into the
/// next number and never become operator tokens. A sign only ever marks that
/// number as negative: repeated signs do not cancel out, and a sign in front
/// of `(` applies to the first number inside the parentheses.
///
/// # Errors
/// - [`CalcError::InvalidInput`] if a character is not allowed, or a number
///   such as `.` or `1.2.3` is not a valid decimal.
/// - [`CalcError::Syntax`] if two operators follow each other and the second
///   one is not `-`.
///
/// # Example
/// ```
/// use strcalc::{
///     interpreter::tokenizer::tokenize,
///     token::{Operator, Token},
/// };
///
/// assert_eq!(tokenize("2 * -3").unwrap(),
///            vec![Token::Number(2.0),
///                 Token::BinaryOperation(Operator::Mul),
///                 Token::Number(-3.0)]);
/// ```
pub fn tokenize(input: &str) -> CalcResult<Vec<Token>> {
    let stripped = eliminate_whitespace(input);
    let lexemes = lex(&stripped)?;

    if has_consecutive_operators(&lexemes) {
        return Err(CalcError::Syntax);
    }

    let mut tokens = Vec::with_capacity(lexemes.len());
    let mut negative = false;
    let mut previous: Option<Lexeme> = None;

    for &lexeme in &lexemes {
        match lexeme {
            Lexeme::Number(digits) => {
                let value = parse_decimal(digits)?;
                tokens.push(Token::Number(if negative { -value } else { value }));
                negative = false;
            },
            Lexeme::Minus if expects_operand(previous) => negative = true,
            Lexeme::LParen => tokens.push(Token::OpeningParenthesis),
            Lexeme::RParen => tokens.push(Token::ClosingParenthesis),
            Lexeme::Plus => tokens.push(Token::BinaryOperation(Operator::Add)),
            Lexeme::Minus => tokens.push(Token::BinaryOperation(Operator::Sub)),
            Lexeme::Star => tokens.push(Token::BinaryOperation(Operator::Mul)),
            Lexeme::Slash => tokens.push(Token::BinaryOperation(Operator::Div)),
        }
        previous = Some(lexeme);
    }

    trace!(tokens = tokens.len(), "tokenized expression");
    Ok(tokens)
}

fn eliminate_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Returns `true` if an operator is directly followed by an operator other
/// than `-`.
///
/// `+-`, `--` and `*-` are fine because the `-` is a sign. `+*` or `/+` are
/// not.
fn has_consecutive_operators(lexemes: &[Lexeme]) -> bool {
    lexemes.windows(2).any(|pair| {
                          matches!(pair, [current, next]
                                   if current.is_operator()
                                      && next.is_operator()
                                      && *next != Lexeme::Minus)
                      })
}

/// Decides whether the lexeme before a `-` leaves an operand outstanding, in
/// which case the `-` is a sign.
const fn expects_operand(previous: Option<Lexeme>) -> bool {
    match previous {
        None | Some(Lexeme::LParen) => true,
        Some(lexeme) => lexeme.is_operator(),
    }
}

fn parse_decimal(digits: &str) -> CalcResult<f64> {
    digits.parse().map_err(|_| CalcError::InvalidInput)
}
