use std::{fs, path::Path};

use chrono::{DateTime, Local};

use crate::interpreter::{
    evaluator::{
        core::{Context, EvalResult},
        function::core::argument_error,
    },
    value::Value,
};

/// Tests whether a file exists at the given path. `file::exists(path)`.
///
/// Paths use host-native syntax and resolve relative to the process working
/// directory. A directory at the path does not count.
pub fn exists(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::String(path) => Ok(Value::Bool(Path::new(path).is_file())),
        other => Err(argument_error("file::exists",
                                    format!("expected a path string, found {}", other.kind()),
                                    offset)),
    }
}

/// Returns the last modification time of a file.
/// `file::get-last-write-time(path)`.
///
/// Fails when the path does not exist or cannot be queried.
pub fn get_last_write_time(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::String(path) => {
            let metadata = fs::metadata(path).map_err(|e| {
                               argument_error("file::get-last-write-time",
                                              format!("cannot query '{path}': {e}"),
                                              offset)
                           })?;
            let modified = metadata.modified().map_err(|e| {
                               argument_error("file::get-last-write-time",
                                              format!("no modification time for '{path}': {e}"),
                                              offset)
                           })?;

            Ok(Value::DateTime(DateTime::<Local>::from(modified).naive_local()))
        },
        other => Err(argument_error("file::get-last-write-time",
                                    format!("expected a path string, found {}", other.kind()),
                                    offset)),
    }
}
