use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::Value,
};

/// Rounds to the nearest whole number, ties to even. `math::round(x)`.
///
/// Like the rest of the namespace, accepts an integer or real argument and
/// always returns a real.
pub fn round(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    Ok(Value::Real(args[0].as_real(offset)?.round_ties_even()))
}

/// Rounds toward negative infinity. `math::floor(x)`.
pub fn floor(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    Ok(Value::Real(args[0].as_real(offset)?.floor()))
}

/// Rounds toward positive infinity. `math::ceiling(x)`.
pub fn ceiling(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    Ok(Value::Real(args[0].as_real(offset)?.ceil()))
}

/// Returns the absolute value. `math::abs(x)`.
pub fn abs(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    Ok(Value::Real(args[0].as_real(offset)?.abs()))
}
