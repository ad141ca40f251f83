use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// The operands are converted to booleans using `as_bool`; anything else
    /// is a type error. Both operands were already evaluated by the caller,
    /// so `and`/`or` never short-circuit.
    ///
    /// # Parameters
    /// - `op`: The logical operator (`And` or `Or`).
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `offset`: Byte position of the operator, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    pub(crate) fn eval_logic(op: BinaryOperator,
                             left: &Value,
                             right: &Value,
                             offset: usize)
                             -> EvalResult<Value> {
        use BinaryOperator::{And, Or};

        let a = left.as_bool(offset)?;
        let b = right.as_bool(offset)?;

        match op {
            And => Ok(Value::Bool(a && b)),
            Or => Ok(Value::Bool(a || b)),
            _ => unreachable!("eval_logic used with a non logical operator"),
        }
    }
}
