/// Parsing errors.
///
/// Defines all error types that can occur while turning expression text into
/// an expression tree. Parse errors cover the lexical class (unterminated
/// strings, malformed numbers, unrecognized characters), the structural class
/// (unexpected tokens, unbalanced parentheses, trailing input) and the arity
/// class (unknown functions, wrong argument counts).
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression tree: operand type violations, division by zero and overflow,
/// builtin argument failures, and unresolved property references.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// Any failure produced by the combined parse-and-evaluate entry points.
///
/// The two variants keep the "malformed expression" and "valid expression,
/// runtime failure" classes apart, so a caller running a pre-flight syntax
/// check can distinguish them from a single result type.
#[derive(Debug)]
pub enum Error {
    /// The expression text could not be tokenized or parsed.
    Parse(ParseError),
    /// The expression parsed but failed during evaluation.
    Eval(EvalError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
