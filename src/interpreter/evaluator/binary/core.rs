use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending
    /// on the operator. Arithmetic operators (which also cover string
    /// concatenation for `+`) use `eval_arithmetic`. Equality uses
    /// `eval_equality`, ordering uses `eval_ordering`, and the logical
    /// operators use `eval_logic`.
    ///
    /// Both operands have already been evaluated by the caller, left before
    /// right.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `offset`: Byte position of the operator, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       offset: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_arithmetic(op, left, right, offset),

            Equal | NotEqual => Self::eval_equality(op, left, right, offset),

            Less | Greater | LessEqual | GreaterEqual => {
                Self::eval_ordering(op, left, right, offset)
            },

            And | Or => Self::eval_logic(op, left, right, offset),
        }
    }
}
