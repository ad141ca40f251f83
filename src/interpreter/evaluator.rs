/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions:
/// arithmetic and string concatenation, equality and ordering comparisons,
/// and the logical operators.
pub mod binary;

/// Core evaluation logic for expressions and values.
///
/// Contains the evaluation context with its property-lookup capability, the
/// expression dispatch, and core error propagation.
pub mod core;

/// Builtin function evaluation.
///
/// Declares the namespaced function registry and the implementations of all
/// builtin functions, grouped by namespace.
pub mod function;

/// Unary operator evaluation.
///
/// Handles numeric negation and logical `not`.
pub mod unary;
