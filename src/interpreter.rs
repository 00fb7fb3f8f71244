/// The evaluator module computes the value of a postfix expression.
///
/// # Responsibilities
/// - Scans postfix tokens left to right with a value stack.
/// - Applies operators with the correct operand order.
/// - Reports expressions that do not reduce to exactly one value.
pub mod evaluator;
/// The lexer module splits raw input into lexemes.
///
/// The lexer recognizes number runs, operator characters and parentheses. It
/// is the only place where the set of legal characters is defined.
pub mod lexer;
/// The postfix module reorders infix tokens into postfix order.
///
/// This is the Shunting-Yard stage: operator precedence, left associativity
/// and parentheses are resolved here so that the evaluator needs no rules of
/// its own.
///
/// # Responsibilities
/// - Emits numbers in input order and operators by precedence.
/// - Detects unbalanced parentheses.
pub mod postfix;
/// The tokenizer module turns text into typed infix tokens.
///
/// # Responsibilities
/// - Removes whitespace and validates characters.
/// - Rejects illegal operator sequences.
/// - Folds `-` signs into the numbers they precede.
pub mod tokenizer;
