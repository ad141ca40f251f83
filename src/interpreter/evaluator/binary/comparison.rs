use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

/// Applies an ordering operator to two comparable values.
///
/// Shared by the numeric, string and date-time arms of `eval_ordering`;
/// this function performs no kind checking itself.
fn ordered<T: PartialOrd>(op: BinaryOperator, a: &T, b: &T) -> bool {
    match op {
        BinaryOperator::Less => a < b,
        BinaryOperator::Greater => a > b,
        BinaryOperator::LessEqual => a <= b,
        BinaryOperator::GreaterEqual => a >= b,
        _ => unreachable!("ordered used with a non ordering operator"),
    }
}

impl Context<'_> {
    /// Evaluates an equality comparison of the form `Value = Value` or its
    /// negation.
    ///
    /// Both operands must be of the same comparable kind: numeric (after
    /// integer-to-real promotion), string, boolean, or date-time. Comparing
    /// across kinds is a type error, never silently false.
    ///
    /// # Parameters
    /// - `op`: `Equal` or `NotEqual`.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `offset`: Byte position of the operator, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    #[allow(clippy::float_cmp)]
    pub(crate) fn eval_equality(op: BinaryOperator,
                                left: &Value,
                                right: &Value,
                                offset: usize)
                                -> EvalResult<Value> {
        use Value::{Bool, DateTime, Integer, Real, String};

        let is_equal = match (left, right) {
            (Integer(a), Integer(b)) => a == b,
            (Real(_), Integer(_) | Real(_)) | (Integer(_), Real(_)) => {
                left.as_real(offset)? == right.as_real(offset)?
            },
            (String(a), String(b)) => a == b,
            (Bool(a), Bool(b)) => a == b,
            (DateTime(a), DateTime(b)) => a == b,
            _ => {
                return Err(EvalError::TypeMismatch { details: format!("Cannot compare {} with {}",
                                                                      left.kind(),
                                                                      right.kind()),
                                                     offset });
            },
        };

        Ok(Value::Bool(if op == BinaryOperator::Equal { is_equal } else { !is_equal }))
    }

    /// Evaluates an ordering comparison.
    ///
    /// Numbers order after integer-to-real promotion, strings
    /// lexicographically, and date-times chronologically. Booleans have no
    /// ordering; comparing them, or mixing kinds, is a type error.
    ///
    /// # Parameters
    /// - `op`: `Less`, `Greater`, `LessEqual` or `GreaterEqual`.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `offset`: Byte position of the operator, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    pub(crate) fn eval_ordering(op: BinaryOperator,
                                left: &Value,
                                right: &Value,
                                offset: usize)
                                -> EvalResult<Value> {
        use Value::{DateTime, Integer, Real, String};

        let result = match (left, right) {
            (Integer(_) | Real(_), Integer(_) | Real(_)) => {
                ordered(op, &left.as_real(offset)?, &right.as_real(offset)?)
            },
            (String(a), String(b)) => ordered(op, a, b),
            (DateTime(a), DateTime(b)) => ordered(op, a, b),
            _ => {
                return Err(EvalError::TypeMismatch { details: format!("Cannot order {} against {}",
                                                                      left.kind(),
                                                                      right.kind()),
                                                     offset });
            },
        };

        Ok(Value::Bool(result))
    }
}
