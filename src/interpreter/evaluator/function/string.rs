use crate::{
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::core::argument_error,
        },
        value::Value,
    },
    util::num::i64_to_usize_checked,
};

/// Returns the number of characters in a string.
/// `string::get-length(s)`.
#[allow(clippy::cast_possible_wrap)]
pub fn get_length(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::String(s) => Ok(Value::Integer(s.chars().count() as i64)),
        other => Err(argument_error("string::get-length",
                                    format!("expected a string, found {}", other.kind()),
                                    offset)),
    }
}

/// Returns a zero-based slice of a string.
/// `string::substring(s, start, length)`.
///
/// Indices count characters, not bytes. A range that falls outside the
/// string is an error, not a clamp.
pub fn substring(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    match (&args[0], &args[1], &args[2]) {
        (Value::String(s), Value::Integer(start), Value::Integer(length)) => {
            let start = i64_to_usize_checked(*start,
                                             argument_error("string::substring",
                                                            "start index must not be negative",
                                                            offset))?;
            let length = i64_to_usize_checked(*length,
                                              argument_error("string::substring",
                                                             "length must not be negative",
                                                             offset))?;

            let total = s.chars().count();
            if start.checked_add(length).is_none_or(|end| end > total) {
                return Err(argument_error("string::substring",
                                          format!("range {start}+{length} is outside a string of length {total}"),
                                          offset));
            }

            Ok(Value::String(s.chars().skip(start).take(length).collect()))
        },
        _ => Err(argument_error("string::substring",
                                "expected (string, integer, integer)",
                                offset)),
    }
}

/// Removes leading and trailing whitespace. `string::trim(s)`.
pub fn trim(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::String(s) => Ok(Value::String(s.trim().to_string())),
        other => Err(argument_error("string::trim",
                                    format!("expected a string, found {}", other.kind()),
                                    offset)),
    }
}

/// Removes leading whitespace. `string::trim-start(s)`.
pub fn trim_start(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::String(s) => Ok(Value::String(s.trim_start().to_string())),
        other => Err(argument_error("string::trim-start",
                                    format!("expected a string, found {}", other.kind()),
                                    offset)),
    }
}

/// Removes trailing whitespace. `string::trim-end(s)`.
pub fn trim_end(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::String(s) => Ok(Value::String(s.trim_end().to_string())),
        other => Err(argument_error("string::trim-end",
                                    format!("expected a string, found {}", other.kind()),
                                    offset)),
    }
}

/// Left-pads a string to a given width with a single pad character.
/// `string::pad-left(s, width, char)`.
///
/// A width no larger than the string's length returns the string unchanged.
pub fn pad_left(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    padded("string::pad-left", args, offset, true)
}

/// Right-pads a string to a given width with a single pad character.
/// `string::pad-right(s, width, char)`.
pub fn pad_right(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    padded("string::pad-right", args, offset, false)
}

/// Shared implementation of the two padding builtins.
fn padded(function: &str, args: &[Value], offset: usize, left: bool) -> EvalResult<Value> {
    match (&args[0], &args[1], &args[2]) {
        (Value::String(s), Value::Integer(width), Value::String(pad)) => {
            let width = i64_to_usize_checked(*width,
                                             argument_error(function,
                                                            "width must not be negative",
                                                            offset))?;

            let mut pad_chars = pad.chars();
            let (Some(fill), None) = (pad_chars.next(), pad_chars.next()) else {
                return Err(argument_error(function,
                                          "the padding string must be a single character",
                                          offset));
            };

            let length = s.chars().count();
            if width <= length {
                return Ok(Value::String(s.clone()));
            }

            let filler: String = std::iter::repeat_n(fill, width - length).collect();
            let result = if left { format!("{filler}{s}") } else { format!("{s}{filler}") };
            Ok(Value::String(result))
        },
        _ => Err(argument_error(function, "expected (string, integer, string)", offset)),
    }
}

/// Returns the character index of the first occurrence of `needle` in `s`,
/// or `-1` when absent. `string::index-of(s, needle)`.
#[allow(clippy::cast_possible_wrap)]
pub fn index_of(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    match (&args[0], &args[1]) {
        (Value::String(s), Value::String(needle)) => {
            let index = s.find(needle.as_str())
                         .map_or(-1, |byte| s[..byte].chars().count() as i64);
            Ok(Value::Integer(index))
        },
        _ => Err(argument_error("string::index-of", "expected (string, string)", offset)),
    }
}
