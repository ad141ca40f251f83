use chrono::NaiveDateTime;

use crate::{ast::LiteralValue, error::EvalError, interpreter::evaluator::core::EvalResult};

/// Canonical date-time format used when printing and converting values.
///
/// This is the invariant form date-times take when a `${...}` placeholder is
/// substituted back into build-file text, and the first format
/// `convert::to-datetime` tries when parsing.
pub const DATE_TIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Represents a runtime value of the expression language.
///
/// This enum models the complete value lattice: every expression evaluates
/// to exactly one of these variants. There is no null or undefined value;
/// absence is always an error, never a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `=`, `<>`, etc.) and logical
    /// operations, and required as the guard of an `if(...)` conditional.
    Bool(bool),
    /// An immutable sequence of characters.
    String(String),
    /// A calendar timestamp with time of day and no timezone.
    DateTime(NaiveDateTime),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(n) => (*n).into(),
            LiteralValue::Real(r) => (*r).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::String(s) => s.clone().into(),
        }
    }
}

impl Value {
    /// Returns the name of this value's kind, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Bool(_) => "boolean",
            Self::String(_) => "string",
            Self::DateTime(_) => "datetime",
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Integers are silently promoted; this is the promotion rule applied
    /// whenever an integer participates in an arithmetic or relational
    /// operation with a real operand.
    ///
    /// # Parameters
    /// - `offset`: Byte position within the expression, for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is real or integer.
    /// - `Err(EvalError::TypeMismatch)`: If the value is not numeric.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(&self, offset: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(*n as f64),
            _ => Err(EvalError::TypeMismatch { details: format!("Expected a numeric value, found {}",
                                                                self.kind()),
                                               offset }),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for the operands of `and`/`or`/`not` and the guard of `if(...)`.
    ///
    /// # Parameters
    /// - `offset`: Byte position within the expression, for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(EvalError::TypeMismatch)`: If the value is not boolean.
    pub fn as_bool(&self, offset: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(EvalError::TypeMismatch { details: format!("Expected a boolean value, found {}",
                                                                self.kind()),
                                               offset }),
        }
    }

    /// Returns `true` if the value is [`Integer`] or [`Real`].
    ///
    /// [`Integer`]: Value::Integer
    /// [`Real`]: Value::Real
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_))
    }
}

impl std::fmt::Display for Value {
    /// Formats the value in its canonical string form: the form substituted
    /// back into the surrounding text when a placeholder is expanded.
    ///
    /// Booleans print as `True`/`False`; numbers use invariant formatting;
    /// strings are unchanged; date-times use [`DATE_TIME_FORMAT`].
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            Self::String(s) => write!(f, "{s}"),
            Self::DateTime(d) => write!(f, "{}", d.format(DATE_TIME_FORMAT)),
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::Value;

    #[test]
    fn canonical_forms() {
        assert_eq!(Value::Integer(7).to_string(), "7");
        assert_eq!(Value::Real(0.5).to_string(), "0.5");
        assert_eq!(Value::Real(1.0).to_string(), "1");
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Bool(false).to_string(), "False");
        assert_eq!(Value::String("ab".to_string()).to_string(), "ab");
    }

    #[test]
    fn datetime_uses_the_invariant_format() {
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()
                                                        .and_hms_opt(1, 23, 34)
                                                        .unwrap();
        assert_eq!(Value::DateTime(date).to_string(), "12/31/1999 01:23:34");
    }
}
