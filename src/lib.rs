//! # strcalc
//!
//! strcalc evaluates arithmetic expressions written as text.
//! It supports `+`, `-`, `*` and `/` with the usual precedence, decimal and
//! negative numbers, and parentheses nested to any depth.
//!
//! An expression passes through three stages: the tokenizer turns text into
//! typed tokens, the Shunting-Yard stage reorders them into postfix order,
//! and the evaluator reduces the postfix sequence to a single number. Every
//! stage is a pure function, so [`calculate`] can be called from any number
//! of threads at once.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{evaluator::evaluate, postfix::to_postfix, tokenizer::tokenize};

/// Provides the error type shared by all stages.
///
/// Every failure is one of a small, flat set of kinds. None of them is
/// recoverable: the first problem found aborts the whole calculation, and the
/// error's `Display` text is the message meant for the user.
pub mod error;
/// Runs the three stages of a calculation.
///
/// # Responsibilities
/// - Lexes and tokenizes the raw input.
/// - Resolves precedence and parentheses into postfix order.
/// - Evaluates postfix sequences.
pub mod interpreter;
/// Defines the token types passed between stages.
///
/// Tokens are closed enums; each stage matches on them exhaustively.
pub mod token;

pub use error::{CalcError, CalcResult};

/// Evaluates an arithmetic expression and returns its value.
///
/// Whitespace anywhere in the expression is ignored. Division by zero is not
/// an error and yields an infinity or `NaN`.
///
/// # Errors
/// Returns the first [`CalcError`] found by any stage. No partial result is
/// produced.
///
/// # Examples
/// ```
/// use strcalc::{CalcError, calculate};
///
/// assert_eq!(calculate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(calculate("-5+-8--11*2").unwrap(), 9.0);
/// assert_eq!(calculate("-.32/.5").unwrap(), -0.64);
///
/// assert_eq!(calculate("19 + cinnamon"), Err(CalcError::InvalidInput));
/// assert_eq!(calculate("2+-+-4").unwrap_err().to_string(), "Syntax error");
/// ```
#[tracing::instrument(level = "debug")]
pub fn calculate(expression: &str) -> CalcResult<f64> {
    let result = tokenize(expression).and_then(|tokens| to_postfix(&tokens))
                                     .and_then(|postfix| evaluate(&postfix));

    match result {
        Ok(value) => debug!(value, "calculated expression"),
        Err(e) => debug!(error = %e, "calculation failed"),
    }

    result
}
