use crate::{
    ast::UnaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation for integers and reals.
    /// - `Not`: boolean negation.
    ///
    /// Any other operand kind produces a type error; negating `i64::MIN`
    /// overflows.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `offset`: Byte position within the expression, for error reporting.
    ///
    /// # Returns
    /// The computed [`Value`] wrapped in `EvalResult`.
    pub(crate) fn eval_unary(op: UnaryOperator, value: &Value, offset: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(EvalError::Overflow { offset }),
                Value::Real(r) => Ok(Value::Real(-r)),
                _ => Err(EvalError::TypeMismatch { details: format!("Cannot negate {}",
                                                                    value.kind()),
                                                   offset }),
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.as_bool(offset)?)),
        }
    }
}
