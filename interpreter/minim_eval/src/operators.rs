//! Integer arithmetic and comparison.
//!
//! Division truncates toward zero and `mod` takes the sign of the
//! dividend (the `i64` convention). All arithmetic is checked: overflow
//! is a typed error, never a wrap and never a panic.

use minim_ir::Value;

use crate::errors::{division_by_zero, integer_overflow, type_mismatch, EvalResult};

/// Binary integer operation selected by an operator symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Gt,
    Lt,
}

/// Apply `op` to two already-evaluated operands. Both must be integers.
pub(crate) fn eval_arith(op: ArithOp, left: &Value, right: &Value) -> EvalResult {
    let (a, b) = match (left, right) {
        (Value::Int(a), Value::Int(b)) => (*a, *b),
        (Value::Int(_), other) | (other, _) => {
            return Err(type_mismatch("int", other.type_name()))
        }
    };
    match op {
        ArithOp::Add => checked(a.checked_add(b), "addition"),
        ArithOp::Sub => checked(a.checked_sub(b), "subtraction"),
        ArithOp::Mul => checked(a.checked_mul(b), "multiplication"),
        ArithOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked(a.checked_div(b), "division")
            }
        }
        ArithOp::Mod => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked(a.checked_rem(b), "remainder")
            }
        }
        ArithOp::Gt => Ok(Value::Bool(a > b)),
        ArithOp::Lt => Ok(Value::Bool(a < b)),
    }
}

#[inline]
fn checked(result: Option<i64>, operation: &'static str) -> EvalResult {
    result
        .map(Value::Int)
        .ok_or_else(|| integer_overflow(operation))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::errors::EvalErrorKind;

    fn int_op(op: ArithOp, a: i64, b: i64) -> EvalResult {
        eval_arith(op, &Value::Int(a), &Value::Int(b))
    }

    #[test]
    fn arithmetic_on_integers() {
        assert_eq!(int_op(ArithOp::Add, 2, 3).unwrap(), Value::Int(5));
        assert_eq!(int_op(ArithOp::Sub, 2, 3).unwrap(), Value::Int(-1));
        assert_eq!(int_op(ArithOp::Mul, -4, 3).unwrap(), Value::Int(-12));
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(int_op(ArithOp::Div, 7, 2).unwrap(), Value::Int(3));
        assert_eq!(int_op(ArithOp::Div, -7, 2).unwrap(), Value::Int(-3));
        assert_eq!(int_op(ArithOp::Mod, 7, 2).unwrap(), Value::Int(1));
        // Remainder takes the sign of the dividend.
        assert_eq!(int_op(ArithOp::Mod, -7, 2).unwrap(), Value::Int(-1));
    }

    #[test]
    fn zero_divisor_is_an_error() {
        assert_eq!(
            int_op(ArithOp::Div, 4, 0).unwrap_err().kind(),
            &EvalErrorKind::DivisionByZero
        );
        assert_eq!(
            int_op(ArithOp::Mod, 4, 0).unwrap_err().kind(),
            &EvalErrorKind::DivisionByZero
        );
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(
            int_op(ArithOp::Add, i64::MAX, 1).unwrap_err().kind(),
            &EvalErrorKind::IntegerOverflow {
                operation: "addition"
            }
        );
        assert_eq!(
            int_op(ArithOp::Sub, i64::MIN, 1).unwrap_err().kind(),
            &EvalErrorKind::IntegerOverflow {
                operation: "subtraction"
            }
        );
        // i64::MIN / -1 is the one overflowing division.
        assert_eq!(
            int_op(ArithOp::Div, i64::MIN, -1).unwrap_err().kind(),
            &EvalErrorKind::IntegerOverflow {
                operation: "division"
            }
        );
    }

    #[test]
    fn comparisons_return_booleans() {
        assert_eq!(int_op(ArithOp::Gt, 3, 2).unwrap(), Value::Bool(true));
        assert_eq!(int_op(ArithOp::Lt, 3, 2).unwrap(), Value::Bool(false));
        assert_eq!(int_op(ArithOp::Lt, -1, 0).unwrap(), Value::Bool(true));
    }

    #[test]
    fn non_integer_operands_are_type_errors() {
        let err = eval_arith(ArithOp::Add, &Value::Bool(true), &Value::Int(1)).unwrap_err();
        assert_eq!(
            err.kind(),
            &EvalErrorKind::TypeMismatch {
                expected: "int",
                got: "bool"
            }
        );
        let err = eval_arith(ArithOp::Gt, &Value::Int(1), &Value::list(vec![])).unwrap_err();
        assert_eq!(
            err.kind(),
            &EvalErrorKind::TypeMismatch {
                expected: "int",
                got: "list"
            }
        );
    }
}
