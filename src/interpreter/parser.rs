/// Core parsing logic and the expression entry point.
///
/// Declares the `ParseResult` alias and the functions that parse a complete
/// expression, requiring the whole token stream to be consumed.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from logical OR at the bottom to
/// multiplication at the top, all left-associative.
pub mod binary;

/// Unary operator and primary parsing.
///
/// Handles prefix `not` and `-`, literals, parenthesized sub-expressions,
/// property references, namespaced function calls and the `if(...)` form.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides the comma-separated list helper shared by function-call argument
/// lists and the conditional form.
pub mod utils;
