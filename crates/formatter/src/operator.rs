// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Operator to SQL symbol mapping

use refsql_ir::BinaryOp;

use crate::error::{FormatError, FormatResult};

/// SQL symbol for an arithmetic operator
///
/// # Errors
///
/// Returns `FormatError::InvalidOperator` for comparison, logical and string
/// operators, which have no place in a math reference.
pub fn math_operator_symbol(operator: BinaryOp) -> FormatResult<&'static str> {
    match operator {
        BinaryOp::Add => Ok("+"),
        BinaryOp::Subtract => Ok("-"),
        BinaryOp::Multiply => Ok("*"),
        BinaryOp::Divide => Ok("/"),
        BinaryOp::Modulo => Ok("%"),
        other => Err(FormatError::InvalidOperator(format!("{:?}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_symbols() {
        let cases = [
            (BinaryOp::Add, "+"),
            (BinaryOp::Subtract, "-"),
            (BinaryOp::Multiply, "*"),
            (BinaryOp::Divide, "/"),
            (BinaryOp::Modulo, "%"),
        ];
        for (op, symbol) in cases {
            assert_eq!(math_operator_symbol(op), Ok(symbol));
        }
    }

    #[test]
    fn test_non_arithmetic_rejected() {
        for op in [BinaryOp::Equal, BinaryOp::And, BinaryOp::Like, BinaryOp::GreaterThan] {
            assert!(!op.is_arithmetic());
            assert!(matches!(
                math_operator_symbol(op),
                Err(FormatError::InvalidOperator(_))
            ));
        }
    }
}
