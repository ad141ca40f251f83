use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::core::argument_error,
        },
        value::Value,
    },
};

/// Returns the value bound to a property name.
/// `property::get-value(name)`.
///
/// This is the explicit form of a bare property reference: the lookup goes
/// through the same capability, and an unset name is the same
/// undefined-property error.
pub fn get_value(context: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::String(name) => {
            context.property(name)
                   .map(Value::String)
                   .ok_or_else(|| EvalError::UndefinedProperty { name: name.clone(),
                                                                 offset })
        },
        other => Err(argument_error("property::get-value",
                                    format!("expected a property name string, found {}",
                                            other.kind()),
                                    offset)),
    }
}

/// Tests whether a property has been set. `property::exists(name)`.
pub fn exists(context: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::String(name) => Ok(Value::Bool(context.property(name).is_some())),
        other => Err(argument_error("property::exists",
                                    format!("expected a property name string, found {}",
                                            other.kind()),
                                    offset)),
    }
}
