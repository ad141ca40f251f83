use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates an arithmetic operation.
    ///
    /// Both operands must be numeric, or, for `+` only, both strings
    /// (concatenation). Mixed integer/real operands are promoted to real and
    /// the result follows the promotion; pure integer arithmetic stays
    /// integer, with `/` truncating toward zero. Division and modulo by zero
    /// fail for integers and reals alike, and integer overflow is an error
    /// rather than a wrapped result.
    ///
    /// Any boolean or date-time operand is a type error.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator (`Add`, `Sub`, `Mul`, `Div` or
    ///   `Mod`).
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `offset`: Byte position of the operator, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed scalar.
    pub(crate) fn eval_arithmetic(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  offset: usize)
                                  -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};
        use Value::{Integer, Real, String};

        match (left, right) {
            (String(a), String(b)) if op == Add => Ok(String(format!("{a}{b}"))),

            (Real(_), Integer(_) | Real(_)) | (Integer(_), Real(_)) => {
                let a = left.as_real(offset)?;
                let b = right.as_real(offset)?;

                if matches!(op, Div | Mod) && b == 0.0 {
                    return Err(EvalError::DivisionByZero { offset });
                }
                Ok(Real(match op {
                            Add => a + b,
                            Sub => a - b,
                            Mul => a * b,
                            Div => a / b,
                            Mod => a % b,
                            _ => unreachable!(),
                        }))
            },

            (Integer(a), Integer(b)) => {
                if matches!(op, Div | Mod) && *b == 0 {
                    return Err(EvalError::DivisionByZero { offset });
                }
                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    Div => a.checked_div(*b),
                    Mod => a.checked_rem(*b),
                    _ => unreachable!(),
                };
                result.map(Integer).ok_or(EvalError::Overflow { offset })
            },

            _ => Err(EvalError::TypeMismatch { details: format!("Cannot use {op} on {} and {}",
                                                                left.kind(),
                                                                right.kind()),
                                               offset }),
        }
    }
}
