/// Result type used by every stage of the calculator.
pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while calculating an expression.
///
/// Every error aborts the whole computation. The `Display` output of each
/// variant is the message shown to users.
pub enum CalcError {
    /// The input contains a character outside digits, `.`, `+`, `-`, `*`, `/`,
    /// `(`, `)` and whitespace, or a number literal that is not a valid
    /// decimal.
    InvalidInput,
    /// Two operators follow each other and the second one is not a `-` sign.
    Syntax,
    /// A closing parenthesis has no matching opening parenthesis, or an
    /// opening parenthesis is never closed.
    InvalidParentheses,
    /// The expression does not reduce to a single value, e.g. it is empty or
    /// misses an operand.
    MalformedExpression,
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "Invalid input"),
            Self::Syntax => write!(f, "Syntax error"),
            Self::InvalidParentheses => write!(f, "Invalid parentheses"),
            Self::MalformedExpression => write!(f, "Malformed expression"),
        }
    }
}

impl std::error::Error for CalcError {}
