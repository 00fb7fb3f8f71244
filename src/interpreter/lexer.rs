use logos::Logos;

use crate::{
    error::{CalcError, CalcResult},
    token::Operator,
};

/// Represents a raw lexeme of whitespace-free input.
///
/// A lexeme is the smallest meaningful slice of the input. Numbers are kept
/// as unparsed text so that sign handling and validation can happen in the
/// tokenizer, in input order.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme<'s> {
    /// A run of digits and decimal points, such as `3`, `.5`, `2.25` or even
    /// `1.2.3`. Whether the run is a valid decimal is decided later.
    #[regex(r"[0-9.]+", |lex| lex.slice())]
    Number(&'s str),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Lexeme<'_> {
    /// Maps an operator lexeme to its [`Operator`].
    ///
    /// Returns `None` for numbers and parentheses.
    ///
    /// # Example
    /// ```
    /// use strcalc::{interpreter::lexer::Lexeme, token::Operator};
    ///
    /// assert_eq!(Lexeme::Slash.operator(), Some(Operator::Div));
    /// assert_eq!(Lexeme::LParen.operator(), None);
    /// ```
    #[must_use]
    pub const fn operator(self) -> Option<Operator> {
        match self {
            Self::Plus => Some(Operator::Add),
            Self::Minus => Some(Operator::Sub),
            Self::Star => Some(Operator::Mul),
            Self::Slash => Some(Operator::Div),
            Self::Number(_) | Self::LParen | Self::RParen => None,
        }
    }

    /// Returns `true` for `+`, `-`, `*` and `/`.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        self.operator().is_some()
    }
}

/// Splits whitespace-free input into lexemes.
///
/// The whole input is lexed before anything else is checked, so an illegal
/// character anywhere is reported ahead of any syntax problem.
///
/// # Errors
/// Returns [`CalcError::InvalidInput`] if the input contains a character
/// that is not a digit, `.`, an operator or a parenthesis. Whitespace is not
/// accepted here; strip it first.
///
/// # Example
/// ```
/// use strcalc::interpreter::lexer::{Lexeme, lex};
///
/// assert_eq!(lex("(.5*2)").unwrap(),
///            vec![Lexeme::LParen,
///                 Lexeme::Number(".5"),
///                 Lexeme::Star,
///                 Lexeme::Number("2"),
///                 Lexeme::RParen]);
/// assert!(lex("19+cinnamon").is_err());
/// ```
pub fn lex(source: &str) -> CalcResult<Vec<Lexeme<'_>>> {
    Lexeme::lexer(source).map(|lexeme| lexeme.map_err(|()| CalcError::InvalidInput))
                         .collect()
}
