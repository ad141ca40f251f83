/// Equality and ordering evaluation.
///
/// Implements `=`/`==`/`<>` over same-kind operands and `<`/`>`/`<=`/`>=`
/// over numbers, strings and date-times.
pub mod comparison;

/// Binary operator routing.
///
/// Dispatches an operator and two evaluated operands to the arithmetic,
/// comparison or logical handler.
pub mod core;

/// Logical operator evaluation.
///
/// Implements `and` and `or` over boolean operands.
pub mod logic;

/// Scalar arithmetic evaluation.
///
/// Implements `+ - * / %` over numbers with integer-to-real promotion, and
/// string concatenation for `+`.
pub mod scalar;
