use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{convert, datetime, directory, file, math, property, string},
        },
        value::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluation context (used by the `property`
/// namespace; pure builtins ignore it), the slice of evaluated argument
/// values, and the byte offset of the call for error reporting. It returns
/// the computed value wrapped in `EvalResult`.
pub type NativeFn = fn(&Context<'_>, &[Value], usize) -> EvalResult<Value>;

/// The kind of value a builtin parameter accepts.
///
/// Each evaluated argument is checked against its declared kind before
/// dispatch; a mismatch is a function-argument error. `Any` defers the check
/// to the builtin itself, which pattern-matches the variants it supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// An integer or real value.
    Number,
    /// An integer value.
    Int,
    /// A string value.
    Str,
    /// A date-time value.
    DateTime,
    /// Any value; the builtin performs its own matching.
    Any,
}

impl ParamKind {
    /// Tests whether the given value satisfies this parameter kind.
    fn admits(self, value: &Value) -> bool {
        match self {
            Self::Number => value.is_numeric(),
            Self::Int => matches!(value, Value::Integer(_)),
            Self::Str => matches!(value, Value::String(_)),
            Self::DateTime => matches!(value, Value::DateTime(_)),
            Self::Any => true,
        }
    }

    /// Describes the expected kind, for error messages.
    const fn expected(self) -> &'static str {
        match self {
            Self::Number => "a numeric value",
            Self::Int => "an integer",
            Self::Str => "a string",
            Self::DateTime => "a datetime",
            Self::Any => "any value",
        }
    }
}

/// Metadata describing one registered builtin.
///
/// Entries are static and read-only: the registry is built at compile time
/// and never mutated by evaluation. Every builtin has a fixed parameter
/// list, so its arity is `params.len()`.
pub struct BuiltinDef {
    /// Namespace the builtin is addressed through, e.g. `string`.
    pub namespace: &'static str,
    /// Name within the namespace, e.g. `pad-left`.
    pub name:      &'static str,
    /// Declared parameter kinds, one per argument.
    pub params:    &'static [ParamKind],
    /// The implementation.
    pub func:      NativeFn,
}

/// Defines the builtin function table.
///
/// Each entry provides the namespaced name, the declared parameter kinds,
/// and a function pointer implementing the builtin. The macro produces the
/// static `BUILTIN_TABLE` that [`lookup`] searches.
macro_rules! builtin_functions {
    (
        $(
            $ns:literal :: $name:literal => {
                params: $params:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { namespace: $ns, name: $name, params: $params, func: $func },
            )*
        ];
    };
}

#[rustfmt::skip]
builtin_functions! {
    "convert"::"to-double"     => { params: &[ParamKind::Any], func: convert::to_double },
    "convert"::"to-int"        => { params: &[ParamKind::Any], func: convert::to_int },
    "convert"::"to-boolean"    => { params: &[ParamKind::Any], func: convert::to_boolean },
    "convert"::"to-datetime"   => { params: &[ParamKind::Any], func: convert::to_datetime },
    "convert"::"to-string"     => { params: &[ParamKind::Any], func: convert::to_string },

    "string"::"get-length"     => { params: &[ParamKind::Str], func: string::get_length },
    "string"::"substring"      => { params: &[ParamKind::Str, ParamKind::Int, ParamKind::Int], func: string::substring },
    "string"::"trim"           => { params: &[ParamKind::Str], func: string::trim },
    "string"::"trim-start"     => { params: &[ParamKind::Str], func: string::trim_start },
    "string"::"trim-end"       => { params: &[ParamKind::Str], func: string::trim_end },
    "string"::"pad-left"       => { params: &[ParamKind::Str, ParamKind::Int, ParamKind::Str], func: string::pad_left },
    "string"::"pad-right"      => { params: &[ParamKind::Str, ParamKind::Int, ParamKind::Str], func: string::pad_right },
    "string"::"index-of"       => { params: &[ParamKind::Str, ParamKind::Str], func: string::index_of },

    "math"::"round"            => { params: &[ParamKind::Number], func: math::round },
    "math"::"floor"            => { params: &[ParamKind::Number], func: math::floor },
    "math"::"ceiling"          => { params: &[ParamKind::Number], func: math::ceiling },
    "math"::"abs"              => { params: &[ParamKind::Number], func: math::abs },

    "datetime"::"now"          => { params: &[], func: datetime::now },
    "datetime"::"add"          => { params: &[ParamKind::DateTime, ParamKind::Int], func: datetime::add },

    "file"::"exists"           => { params: &[ParamKind::Str], func: file::exists },
    "file"::"get-last-write-time" => { params: &[ParamKind::Str], func: file::get_last_write_time },

    "directory"::"exists"      => { params: &[ParamKind::Str], func: directory::exists },

    "property"::"get-value"    => { params: &[ParamKind::Str], func: property::get_value },
    "property"::"exists"       => { params: &[ParamKind::Str], func: property::exists },
}

/// Looks up a builtin by namespace and name.
///
/// Used by the parser to validate `namespace::name` existence and argument
/// counts while parsing, and by the evaluator to dispatch validated calls.
///
/// # Parameters
/// - `namespace`: The namespace qualifier, e.g. `convert`.
/// - `name`: The function name, e.g. `to-double`.
///
/// # Returns
/// The registry entry, or `None` when the pair is not registered.
#[must_use]
pub fn lookup(namespace: &str, name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter()
                 .find(|b| b.namespace == namespace && b.name == name)
}

/// Builds the function-argument error every builtin reports when an
/// argument fails its type or format requirement.
pub(in crate::interpreter::evaluator::function) fn argument_error(function: &str,
                                                                  details: impl Into<String>,
                                                                  offset: usize)
                                                                  -> EvalError {
    EvalError::FunctionArgument { function: function.to_string(),
                                  details: details.into(),
                                  offset }
}

impl Context<'_> {
    /// Evaluates a builtin function call.
    ///
    /// The signature is looked up in the registry, each evaluated argument
    /// is checked against its declared parameter kind, and the builtin is
    /// executed. The parser validates existence and arity before evaluation
    /// is attempted, so the lookup and count checks here only reject
    /// expression trees that were built without going through it.
    ///
    /// # Parameters
    /// - `namespace`: Namespace qualifier of the call.
    /// - `name`: Function name within the namespace.
    /// - `args`: Evaluated argument values, in call order.
    /// - `offset`: Byte position of the call, for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup, kind checking or the
    /// builtin itself fails.
    pub(crate) fn eval_function(&self,
                                namespace: &str,
                                name: &str,
                                args: &[Value],
                                offset: usize)
                                -> EvalResult<Value> {
        let Some(builtin) = lookup(namespace, name) else {
            return Err(EvalError::UnknownFunction { function: format!("{namespace}::{name}"),
                                                    offset });
        };

        if args.len() != builtin.params.len() {
            return Err(argument_error(&format!("{namespace}::{name}"),
                                      format!("takes {} argument(s), {} given",
                                              builtin.params.len(),
                                              args.len()),
                                      offset));
        }

        for (index, (param, value)) in builtin.params.iter().zip(args).enumerate() {
            if !param.admits(value) {
                return Err(argument_error(&format!("{namespace}::{name}"),
                                          format!("argument {} must be {}, found {}",
                                                  index + 1,
                                                  param.expected(),
                                                  value.kind()),
                                          offset));
            }
        }

        (builtin.func)(self, args, offset)
    }
}
