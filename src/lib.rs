//! # propex
//!
//! propex is the property-expression language of a build tool, written in
//! Rust. It parses, type-checks, and evaluates the small typed expressions
//! that appear inside `${...}` placeholders in build-file text, with
//! arithmetic, relational and logical operators, string/date/numeric
//! conversions, and a namespaced builtin function library.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_complete},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for all language constructs.
/// - Attaches byte offsets to AST nodes for error reporting.
/// - Separates the `if(...)` form from ordinary calls, since only its taken
///   branch is evaluated.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression. It keeps the "malformed expression" class
/// apart from the "valid expression, runtime failure" class, and carries
/// byte offsets for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches offsets and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// The `${...}` placeholder substitution driver.
///
/// Scans surrounding text for placeholder regions, evaluates each inner
/// expression, and splices the canonical string form of the result back
/// into the text.
///
/// # Responsibilities
/// - Locates `${...}` regions and preserves literal text verbatim.
/// - Converts evaluated values to their canonical string forms.
/// - Reports unterminated placeholders.
pub mod expand;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, the builtin registry, and all supporting infrastructure
/// to provide a complete runtime for property expressions.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides the property-lookup capability consumed by evaluation.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable helpers used by the conversion and string
/// builtins: safe conversions between integer and floating-point types
/// without silent data loss.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize`, and `f64`.
pub mod util;

pub use crate::{
    error::{Error, EvalError, ParseError},
    expand::expand,
    interpreter::{evaluator::core::PropertyStore, value::Value},
};

/// Parses an expression string into an expression tree.
fn parse(expression: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(expression)?;
    let mut iter = tokens.iter().peekable();
    parse_complete(&mut iter)
}

/// Evaluates a property expression and returns the resulting value.
///
/// The expression is tokenized, parsed (with function calls validated
/// against the builtin registry), and evaluated against the supplied
/// property store. Any failure in any phase aborts the whole expression.
///
/// # Errors
/// Returns [`Error::Parse`] for lexical, structural and arity errors, and
/// [`Error::Eval`] for type, arithmetic, function-argument and
/// undefined-property errors.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use propex::{Value, evaluate};
///
/// let properties: HashMap<String, String> = HashMap::new();
/// assert_eq!(evaluate("1+2*3", &properties).unwrap(), Value::Integer(7));
/// assert_eq!(evaluate("5.0/(2+8)", &properties).unwrap(), Value::Real(0.5));
///
/// // A valid expression can still fail at evaluation time.
/// assert!(evaluate("5/0", &properties).is_err());
/// ```
pub fn evaluate(expression: &str, properties: &dyn PropertyStore) -> Result<Value, Error> {
    let expr = parse(expression)?;
    Ok(Context::new(properties).eval(&expr)?)
}

/// Checks an expression for lexical, structural and arity errors without
/// evaluating it.
///
/// Intended for pre-flight validation of build-file expressions: it accepts
/// anything the evaluator would parse, including expressions that would
/// fail at evaluation time, and performs no property lookups, filesystem
/// access, or arithmetic.
///
/// # Errors
/// The same [`ParseError`] taxonomy full evaluation reports for malformed
/// input.
///
/// # Examples
/// ```
/// use propex::check_syntax;
///
/// assert!(check_syntax("1+2*3").is_ok());
/// // Division by zero is an evaluation failure, not a syntax error.
/// assert!(check_syntax("5/0").is_ok());
/// // Trailing input after a complete expression is rejected.
/// assert!(check_syntax("1+2*3 1").is_err());
/// ```
pub fn check_syntax(expression: &str) -> Result<(), ParseError> {
    parse(expression).map(|_| ())
}
