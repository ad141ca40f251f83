/// Safely converts an `f64` to `i64` if the value is finite, within range,
/// and not fractional.
///
/// Used by `convert::to-int`, which refuses to silently drop a fractional
/// part.
///
/// ## Errors
/// Returns `Err(error)` for non-finite, out-of-range, or fractional values.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Returns
/// - `Ok(i64)`: The converted value if it is exact.
/// - `Err(error)`: If the value cannot be represented as an `i64`.
///
/// ## Example
/// ```
/// use propex::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(1000.0, "inexact"), Ok(1000));
/// assert_eq!(f64_to_i64_checked(1.5, "inexact"), Err("inexact"));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked<E>(value: f64, error: E) -> Result<i64, E> {
    if !value.is_finite() {
        return Err(error);
    }
    if value < i64::MIN as f64 || value > i64::MAX as f64 {
        return Err(error);
    }
    if value.fract() != 0.0 {
        return Err(error);
    }
    Ok(value as i64)
}

/// Safely converts an `i64` to a `usize` if and only if it can be
/// represented exactly.
///
/// Used by the string builtins, whose index and width arguments arrive as
/// language integers but index into Rust strings.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or exceeds the maximum
/// representable `usize`.
///
/// ## Parameters
/// - `value`: The integer value to convert.
/// - `error`: The error to return if conversion fails.
///
/// ## Returns
/// - `Ok(usize)`: The converted value if it is safe.
/// - `Err(error)`: If the value is out of range.
///
/// ## Example
/// ```
/// use propex::util::num::i64_to_usize_checked;
///
/// assert_eq!(i64_to_usize_checked(42, "out of range"), Ok(42));
/// assert_eq!(i64_to_usize_checked(-1, "out of range"), Err("out of range"));
/// ```
pub fn i64_to_usize_checked<E>(value: i64, error: E) -> Result<usize, E> {
    usize::try_from(value).map_or(Err(error), Ok)
}
