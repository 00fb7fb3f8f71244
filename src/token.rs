/// Represents one of the four supported binary operators.
///
/// All operators are left-associative. `*` and `/` bind tighter than `+` and
/// `-`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Binding strength of an [`Operator`].
///
/// Variants are ordered so that `Low < High`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// `+` and `-`.
    Low,
    /// `*` and `/`.
    High,
}

impl Operator {
    /// Returns the precedence class of the operator.
    ///
    /// # Example
    /// ```
    /// use strcalc::token::{Operator, Precedence};
    ///
    /// assert_eq!(Operator::Mul.precedence(), Precedence::High);
    /// assert!(Operator::Sub.precedence() < Operator::Div.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Low,
            Self::Mul | Self::Div => Precedence::High,
        }
    }

    /// Returns the source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Applies the operator to two operands using IEEE double arithmetic.
    ///
    /// Operand order matters for `-` and `/`. Division by zero yields an
    /// infinity or `NaN` instead of an error.
    ///
    /// # Example
    /// ```
    /// use strcalc::token::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(8.0, 3.0), 5.0);
    /// assert_eq!(Operator::Div.apply(1.0, 0.0), f64::INFINITY);
    /// assert!(Operator::Div.apply(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A token of an infix expression, as produced by the tokenizer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    /// A fully parsed number. Any leading sign is already applied.
    Number(f64),
    /// A binary operator.
    BinaryOperation(Operator),
    /// `(`
    OpeningParenthesis,
    /// `)`
    ClosingParenthesis,
}

/// A token of a postfix expression.
///
/// Parentheses never survive the infix to postfix transformation, so this
/// type only has room for numbers and operators.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PostfixToken {
    /// A number operand.
    Number(f64),
    /// A binary operator applied to the two preceding operands.
    BinaryOperation(Operator),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::BinaryOperation(op) => write!(f, "{op}"),
            Self::OpeningParenthesis => write!(f, "("),
            Self::ClosingParenthesis => write!(f, ")"),
        }
    }
}

impl std::fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::BinaryOperation(op) => write!(f, "{op}"),
        }
    }
}
