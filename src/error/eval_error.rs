#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum EvalError {
    /// An operator was applied to operand kinds it does not support.
    TypeMismatch {
        /// Details about the kind violation.
        details: String,
        /// Byte offset where the error occurred.
        offset:  usize,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// Byte offset where the error occurred.
        offset: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// Byte offset where the error occurred.
        offset: usize,
    },
    /// A builtin function's argument failed its type or format requirement.
    FunctionArgument {
        /// The full function name, e.g. `convert::to-boolean`.
        function: String,
        /// Details about why the argument was rejected.
        details:  String,
        /// Byte offset of the call within the expression text.
        offset:   usize,
    },
    /// A property reference has no bound value.
    UndefinedProperty {
        /// The name of the property.
        name:   String,
        /// Byte offset where the reference occurred.
        offset: usize,
    },
    /// A call node names a function the registry does not contain.
    ///
    /// The parser validates registry membership, so this only arises for
    /// expression trees constructed without going through it.
    UnknownFunction {
        /// The full function name.
        function: String,
        /// Byte offset of the call within the expression text.
        offset:   usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { details, offset } => {
                write!(f, "Error at position {offset}: {details}.")
            },

            Self::DivisionByZero { offset } => {
                write!(f, "Error at position {offset}: Division by zero.")
            },

            Self::Overflow { offset } => write!(f,
                                                "Error at position {offset}: Integer overflow while computing the result."),

            Self::FunctionArgument { function,
                                     details,
                                     offset, } => {
                write!(f, "Error at position {offset}: {function}: {details}.")
            },

            Self::UndefinedProperty { name, offset } => {
                write!(f, "Error at position {offset}: Property '{name}' has not been set.")
            },

            Self::UnknownFunction { function, offset } => {
                write!(f, "Error at position {offset}: Unknown function {function}.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
