//! Errors raised by table construction and lookups.

use std::num::{IntErrorKind, ParseIntError};

/// Errors returned by [`CombinationTable`](crate::CombinationTable) and argument parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{arg} must be between {min} and {max}, got {value}")]
    OutOfRange {
        arg: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("C({n},{k}) does not fit the coefficient type")]
    Overflow { n: usize, k: usize },
}

pub type Result<T, E = TableError> = std::result::Result<T, E>;

/// Largest magnitude an `f64` holds without skipping integers (2^53).
const F64_EXACT_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Parse a table index from text.
///
/// Accepts decimal integers, integral decimals (`"5.0"`) and integral
/// exponent forms (`"1e3"`). Non-integral text such as `"2.5"` and values
/// outside `i64` are an `InvalidArgument`. Sign is not checked here.
pub fn parse_index(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => return Ok(value),
        Err(err) if is_overflow(&err) => return Err(out_of_range(trimmed)),
        Err(_) => {}
    }

    let value = match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => return Err(not_a_number(trimmed)),
    };

    // plain decimals stay exact: "123.000" is read through its integer part
    if !trimmed.contains(['e', 'E']) {
        if let Some((whole, fraction)) = trimmed.split_once('.') {
            if !fraction.bytes().all(|b| b == b'0') {
                return Err(not_an_integer(trimmed));
            }
            return match whole {
                "" | "+" | "-" => Ok(0),
                _ => whole.parse::<i64>().map_err(|err| {
                    if is_overflow(&err) {
                        out_of_range(trimmed)
                    } else {
                        not_a_number(trimmed)
                    }
                }),
            };
        }
    }

    if value.fract() != 0.0 {
        return Err(not_an_integer(trimmed));
    }
    if value.abs() > F64_EXACT_LIMIT {
        return Err(out_of_range(trimmed));
    }
    Ok(value as i64)
}

fn is_overflow(err: &ParseIntError) -> bool {
    matches!(
        err.kind(),
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
    )
}

fn out_of_range(text: &str) -> TableError {
    TableError::InvalidArgument(format!("{text:?} is out of range for an index"))
}

fn not_an_integer(text: &str) -> TableError {
    TableError::InvalidArgument(format!("{text:?} is not an integer"))
}

fn not_a_number(text: &str) -> TableError {
    TableError::InvalidArgument(format!("{text:?} is not a number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integers() {
        assert_eq!(parse_index("7"), Ok(7));
        assert_eq!(parse_index("  52 "), Ok(52));
        assert_eq!(parse_index("-1"), Ok(-1));
        assert_eq!(parse_index("5.0"), Ok(5));
    }

    #[test]
    fn test_parse_rejects_non_integral() {
        for text in ["2.5", "2.50", "1.0000000000000000001", "1.5e0", "abc", "", "NaN", "inf"] {
            assert!(
                matches!(parse_index(text), Err(TableError::InvalidArgument(_))),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_parse_keeps_exact_values() {
        assert_eq!(parse_index("9007199254740993.0"), Ok(9_007_199_254_740_993));
        assert_eq!(parse_index("9223372036854775807.00"), Ok(i64::MAX));
        assert_eq!(parse_index("-9223372036854775808"), Ok(i64::MIN));
        assert_eq!(parse_index("1e3"), Ok(1000));
        assert_eq!(parse_index("-0.0"), Ok(0));
    }

    #[test]
    fn test_parse_rejects_values_outside_i64() {
        for text in [
            "-9223372036854775809",
            "9223372036854775808",
            "9223372036854775808.0",
            "1e30",
            "-1e19",
        ] {
            match parse_index(text) {
                Err(TableError::InvalidArgument(msg)) => {
                    assert!(msg.contains("out of range"), "{:?}: {}", text, msg)
                }
                other => panic!("{:?} should be out of range, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_out_of_range_message() {
        let err = TableError::OutOfRange {
            arg: "n",
            value: 53,
            min: 0,
            max: 52,
        };
        assert_eq!(err.to_string(), "n must be between 0 and 52, got 53");
    }
}
