use std::path::Path;

use crate::interpreter::{
    evaluator::{
        core::{Context, EvalResult},
        function::core::argument_error,
    },
    value::Value,
};

/// Tests whether a directory exists at the given path.
/// `directory::exists(path)`.
///
/// Paths use host-native syntax and resolve relative to the process working
/// directory. A file at the path does not count.
pub fn exists(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::String(path) => Ok(Value::Bool(Path::new(path).is_dir())),
        other => Err(argument_error("directory::exists",
                                    format!("expected a path string, found {}", other.kind()),
                                    offset)),
    }
}
