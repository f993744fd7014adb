// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Custom assertions on rendered column clauses

/// Assertion helpers for formatted SQL fragments
pub struct ClauseAssertions;

impl ClauseAssertions {
    /// Assert that a clause has no alias
    pub fn assert_unaliased(clause: &str) {
        assert!(
            !clause.contains(" AS "),
            "Expected clause without alias, found '{}'",
            clause
        );
    }

    /// Assert that a clause ends with `AS <quoted_alias>`
    pub fn assert_aliased(clause: &str, quoted_alias: &str) {
        let suffix = format!(" AS {}", quoted_alias);
        assert!(
            clause.ends_with(&suffix),
            "Expected clause ending with '{}', found '{}'",
            suffix,
            clause
        );
    }

    /// Assert that a clause is `<left> <symbol> <right>` at its top level
    ///
    /// `left` is the already-rendered left operand, so the check is exact even
    /// when the operands themselves contain operators.
    pub fn assert_math(clause: &str, left: &str, symbol: &str, right: &str) {
        assert!(
            ["+", "-", "*", "/", "%"].contains(&symbol),
            "'{}' is not an arithmetic symbol",
            symbol
        );
        assert_eq!(clause, format!("{} {} {}", left, symbol, right));
    }

    /// Assert that a clause is a call of `function` and return its argument text
    pub fn assert_function_call<'a>(clause: &'a str, function: &str) -> &'a str {
        let body = clause
            .strip_prefix(function)
            .and_then(|rest| rest.strip_prefix('('))
            .unwrap_or_else(|| panic!("Expected call of '{}', found '{}'", function, clause));
        let end = body
            .rfind(')')
            .unwrap_or_else(|| panic!("Unterminated call in '{}'", clause));
        &body[..end]
    }
}
