use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

use crate::interpreter::{
    evaluator::{
        core::{Context, EvalResult},
        function::core::argument_error,
    },
    value::{DATE_TIME_FORMAT, Value},
};

/// Date-and-time formats accepted by [`parse_date_time`], tried in order.
const DATE_TIME_FORMATS: &[&str] = &[DATE_TIME_FORMAT, "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Date-only formats accepted by [`parse_date_time`]; the time of day
/// defaults to midnight.
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

/// Parses a date string in one of the accepted invariant formats.
///
/// Shared with `convert::to-datetime`. Returns `None` when no format
/// matches.
pub(crate) fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();

    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return parsed.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Returns the current local date and time. `datetime::now()`.
pub fn now(_: &Context<'_>, _args: &[Value], _offset: usize) -> EvalResult<Value> {
    Ok(Value::DateTime(Local::now().naive_local()))
}

/// Adds a number of seconds to a date-time.
/// `datetime::add(date, seconds)`.
///
/// The seconds count is an integer and may be negative.
pub fn add(_: &Context<'_>, args: &[Value], offset: usize) -> EvalResult<Value> {
    match (&args[0], &args[1]) {
        (Value::DateTime(date), Value::Integer(seconds)) => {
            Duration::try_seconds(*seconds)
                .and_then(|delta| date.checked_add_signed(delta))
                .map(Value::DateTime)
                .ok_or_else(|| {
                    argument_error("datetime::add", "the resulting date is out of range", offset)
                })
        },
        _ => Err(argument_error("datetime::add", "expected (datetime, integer)", offset)),
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::parse_date_time;

    #[test]
    fn parses_the_invariant_format() {
        let parsed = parse_date_time("12/31/1999 01:23:34").unwrap();
        let expected = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()
                                                            .and_hms_opt(1, 23, 34)
                                                            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn date_only_forms_default_to_midnight() {
        let parsed = parse_date_time("2004-06-01").unwrap();
        let expected = NaiveDate::from_ymd_opt(2004, 6, 1).unwrap()
                                                          .and_hms_opt(0, 0, 0)
                                                          .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn junk_does_not_parse() {
        assert!(parse_date_time("not a date").is_none());
        assert!(parse_date_time("13/45/1999").is_none());
    }
}
