use crate::{
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{core::argument_error, datetime::parse_date_time},
        },
        value::Value,
    },
    util::num::f64_to_i64_checked,
};

/// Converts a value to a real number. `convert::to-double(x)`.
///
/// Integers promote, reals pass through, and strings are parsed with
/// invariant formatting. Booleans and date-times are rejected; an explicit
/// conversion chain is required instead.
pub fn to_double(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Integer(_) | Value::Real(_) => args[0].as_real(offset).map(Value::Real),
        Value::String(s) => {
            s.trim()
             .parse::<f64>()
             .map(Value::Real)
             .map_err(|_| {
                 argument_error("convert::to-double",
                                format!("cannot convert '{s}' to a real number"),
                                offset)
             })
        },
        other => Err(argument_error("convert::to-double",
                                    format!("cannot convert {}", other.kind()),
                                    offset)),
    }
}

/// Converts a value to an integer. `convert::to-int(x)`.
///
/// Strings are parsed; reals must have no fractional part rather than being
/// silently truncated.
pub fn to_int(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Integer(n) => Ok(Value::Integer(*n)),
        Value::Real(r) => {
            f64_to_i64_checked(*r,
                               argument_error("convert::to-int",
                                              format!("{r} has no exact integer representation"),
                                              offset)).map(Value::Integer)
        },
        Value::String(s) => {
            s.trim()
             .parse::<i64>()
             .map(Value::Integer)
             .map_err(|_| {
                 argument_error("convert::to-int",
                                format!("cannot convert '{s}' to an integer"),
                                offset)
             })
        },
        other => Err(argument_error("convert::to-int",
                                    format!("cannot convert {}", other.kind()),
                                    offset)),
    }
}

/// Converts a string to a boolean. `convert::to-boolean(s)`.
///
/// Only the case-insensitive strings `'true'` and `'false'` are accepted;
/// everything else, including numbers, is rejected.
pub fn to_boolean(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(Value::Bool(true)),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(Value::Bool(false)),
        Value::String(s) => Err(argument_error("convert::to-boolean",
                                               format!("'{s}' is neither 'true' nor 'false'"),
                                               offset)),
        other => Err(argument_error("convert::to-boolean",
                                    format!("cannot convert {}", other.kind()),
                                    offset)),
    }
}

/// Converts a value to a date-time. `convert::to-datetime(x)`.
///
/// Accepts a parseable date string or an existing date-time, on which the
/// conversion is idempotent.
pub fn to_datetime(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::DateTime(d) => Ok(Value::DateTime(*d)),
        Value::String(s) => {
            parse_date_time(s).map(Value::DateTime)
                              .ok_or_else(|| {
                                  argument_error("convert::to-datetime",
                                                 format!("cannot parse '{s}' as a date"),
                                                 offset)
                              })
        },
        other => Err(argument_error("convert::to-datetime",
                                    format!("cannot convert {}", other.kind()),
                                    offset)),
    }
}

/// Converts any value to its canonical string form. `convert::to-string(x)`.
pub fn to_string(_: &Context<'_>, args: &[Value], _offset: usize) -> EvalResult<Value> {
    Ok(Value::String(args[0].to_string()))
}
