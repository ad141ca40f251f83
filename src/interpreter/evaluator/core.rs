use std::collections::HashMap;

use crate::{ast::Expr, error::EvalError, interpreter::value::Value};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// A source of property values supplied by the embedding build system.
///
/// The evaluator consults the store for bare identifiers and for the
/// `property::get-value`/`property::exists` builtins. The returned raw text
/// is always treated as a string value; callers needing another type convert
/// explicitly with `convert::*`.
///
/// If the store is mutable and shared across concurrent evaluations, its
/// consistency discipline is the caller's responsibility; the evaluator
/// itself holds no mutable state.
pub trait PropertyStore {
    /// Returns the raw text bound to `name`, or `None` when the property has
    /// not been set.
    fn get(&self, name: &str) -> Option<String>;
}

impl PropertyStore for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

/// Stores the evaluation context.
///
/// The context carries the property-lookup capability and nothing else:
/// evaluation is a pure recursive walk over the expression tree, so a
/// context can be created per expression or reused freely across threads
/// evaluating different expressions.
pub struct Context<'a> {
    properties: &'a dyn PropertyStore,
}

impl<'a> Context<'a> {
    /// Creates an evaluation context over the given property store.
    #[must_use]
    pub fn new(properties: &'a dyn PropertyStore) -> Self {
        Self { properties }
    }

    /// Evaluates an expression tree and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. The evaluator dispatches
    /// based on expression variant: literals, property references, unary and
    /// binary operations, function calls and conditionals.
    ///
    /// Both operands of a binary operation are always evaluated, left before
    /// right; `and`/`or` do not short-circuit. Function arguments are
    /// evaluated eagerly in call order. The `if(...)` form is the one
    /// exception: only the branch selected by the condition is evaluated.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`], or the first error raised anywhere in the
    /// walk. Errors abort the whole expression; there is no local recovery.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Property { name, offset } => self.eval_property(name, *offset),
            Expr::UnaryOp { op, expr, offset } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *offset)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             offset, } => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                Self::eval_binary(*op, &lhs, &rhs, *offset)
            },
            Expr::FunctionCall { namespace,
                                 name,
                                 arguments,
                                 offset, } => {
                let mut args = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    args.push(self.eval(argument)?);
                }
                self.eval_function(namespace, name, &args, *offset)
            },
            Expr::Conditional { condition,
                                then_branch,
                                else_branch,
                                offset, } => {
                if self.eval(condition)?.as_bool(*offset)? {
                    self.eval(then_branch)
                } else {
                    self.eval(else_branch)
                }
            },
        }
    }

    /// Resolves a bare property reference.
    ///
    /// The raw text from the store becomes a string value; an unset name is
    /// an error, never a value.
    fn eval_property(&self, name: &str, offset: usize) -> EvalResult<Value> {
        self.property(name)
            .map(Value::String)
            .ok_or_else(|| EvalError::UndefinedProperty { name: name.to_string(),
                                                          offset })
    }

    /// Queries the property store.
    ///
    /// Shared by bare references and the `property` namespace builtins.
    pub(crate) fn property(&self, name: &str) -> Option<String> {
        self.properties.get(name)
    }
}
