use std::{iter::Peekable, str::Chars};

use proptest::prelude::*;
use strcalc::calculate;

/// Recursive-descent evaluator used as the reference for `calculate`.
///
/// Grammar:
/// ```text
/// expr   := term (("+" | "-") term)*
/// term   := factor (("*" | "/") factor)*
/// factor := "-"? number | "(" expr ")"
/// ```
struct Reference<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Reference<'a> {
    fn evaluate(source: &'a str) -> Option<f64> {
        let mut parser = Self { chars: source.chars().peekable() };
        let value = parser.expr()?;
        parser.skip_whitespace();
        parser.chars.peek().is_none().then_some(value)
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.chars.peek().copied()
    }

    fn expr(&mut self) -> Option<f64> {
        let mut left = self.term()?;
        while let Some(op @ ('+' | '-')) = self.peek() {
            self.chars.next();
            let right = self.term()?;
            left = if op == '+' { left + right } else { left - right };
        }
        Some(left)
    }

    fn term(&mut self) -> Option<f64> {
        let mut left = self.factor()?;
        while let Some(op @ ('*' | '/')) = self.peek() {
            self.chars.next();
            let right = self.factor()?;
            left = if op == '*' { left * right } else { left / right };
        }
        Some(left)
    }

    fn factor(&mut self) -> Option<f64> {
        match self.peek()? {
            '(' => {
                self.chars.next();
                let value = self.expr()?;
                if self.peek()? != ')' {
                    return None;
                }
                self.chars.next();
                Some(value)
            },
            '-' => {
                self.chars.next();
                Some(-self.number()?)
            },
            _ => self.number(),
        }
    }

    fn number(&mut self) -> Option<f64> {
        self.skip_whitespace();
        let mut digits = String::new();
        while let Some(c) = self.chars.next_if(|c| c.is_ascii_digit() || *c == '.') {
            digits.push(c);
        }
        digits.parse().ok()
    }
}

fn number_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), 0u32..1000, prop::option::of(0u32..1000)).prop_map(|(negative, whole, fraction)| {
        let sign = if negative { "-" } else { "" };
        match fraction {
            Some(fraction) => format!("{sign}{whole}.{fraction}"),
            None => format!("{sign}{whole}"),
        }
    })
}

fn expression_strategy() -> impl Strategy<Value = String> {
    let operator = prop::sample::select(vec!['+', '-', '*', '/']);

    number_strategy().prop_recursive(6, 64, 2, move |inner| {
        prop_oneof![
            (inner.clone(), operator.clone(), inner.clone())
                .prop_map(|(left, op, right)| format!("{left} {op} {right}")),
            inner.prop_map(|e| format!("({e})")),
        ]
    })
}

fn same_value(left: f64, right: f64) -> bool {
    left == right || (left.is_nan() && right.is_nan())
}

proptest! {
    #[test]
    fn matches_reference_evaluator(expression in expression_strategy()) {
        let expected = Reference::evaluate(&expression);
        prop_assert!(expected.is_some(), "reference rejected {:?}", expression);
        let expected = expected.unwrap();

        let actual = calculate(&expression);
        prop_assert!(actual.is_ok(), "{:?} failed: {:?}", expression, actual);
        let actual = actual.unwrap();

        prop_assert!(same_value(actual, expected),
                     "{:?} gave {} but the reference gave {}", expression, actual, expected);
    }

    #[test]
    fn is_deterministic(expression in expression_strategy()) {
        let first = calculate(&expression);
        let second = calculate(&expression);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a.to_bits(), b.to_bits()),
            (a, b) => prop_assert_eq!(a, b),
        }
    }

    #[test]
    fn whitespace_does_not_matter(expression in expression_strategy()) {
        let compact: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
        let spaced = compact.chars().map(|c| format!("{c} ")).collect::<String>();

        let a = calculate(&compact);
        let b = calculate(&spaced);
        match (a, b) {
            (Ok(a), Ok(b)) => prop_assert!(same_value(a, b)),
            (a, b) => prop_assert_eq!(a, b),
        }
    }

    #[test]
    fn never_panics(input in "[0-9. +\\-*/()a]{0,40}") {
        let _ = calculate(&input);
    }
}
