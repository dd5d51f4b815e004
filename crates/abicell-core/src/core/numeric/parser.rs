use super::number::Number;
use crate::engine::error::CellError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A coordinate literal exactly as supplied by an external collaborator.
///
/// The variants are tried in declaration order when deserializing, so an integral JSON
/// number becomes [`RawValue::Integer`] and any other JSON number becomes
/// [`RawValue::Float`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Integer(i64),
    Float(f64),
    /// A `"A/B"` fraction, an integer, or a decimal literal written as a string.
    Text(String),
    /// A structured fraction, either `{numerator, denominator}` or `{value: "A/B"}`.
    Fraction(FractionRecord),
}

/// Structured fraction literal.
///
/// Extra keys (such as a `_type` marker) are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FractionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numerator: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denominator: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Integer(i) => write!(f, "{}", i),
            RawValue::Float(v) => write!(f, "{}", v),
            RawValue::Text(s) => write!(f, "\"{}\"", s),
            RawValue::Fraction(record) => {
                let fields = [
                    record.numerator.map(|n| format!("numerator: {}", n)),
                    record.denominator.map(|d| format!("denominator: {}", d)),
                    record.value.as_ref().map(|v| format!("value: \"{}\"", v)),
                ];
                write!(f, "{{{}}}", fields.into_iter().flatten().join(", "))
            }
        }
    }
}

impl From<Number> for RawValue {
    fn from(number: Number) -> Self {
        match number {
            Number::Exact(r) if r.is_integer() => RawValue::Integer(*r.numer()),
            Number::Exact(r) => RawValue::Fraction(FractionRecord {
                numerator: Some(*r.numer()),
                denominator: Some(*r.denom()),
                value: None,
            }),
            Number::Float(v) => RawValue::Float(v),
        }
    }
}

/// Resolves a single literal into a [`Number`].
///
/// Integers and fractions produce exact values; floats and decimal strings produce
/// floating-point values. `context` describes where the literal came from and is carried
/// into the error.
///
/// # Errors
///
/// Returns [`CellError::MalformedCoordinateValue`] when a string is neither a fraction nor a
/// number, when a fraction has a zero denominator, or when a structured record carries
/// neither `numerator`/`denominator` nor `value`.
pub fn parse_value(raw: &RawValue, context: &str) -> Result<Number, CellError> {
    let parsed = match raw {
        RawValue::Integer(i) => Some(Number::from(*i)),
        RawValue::Float(v) => Some(Number::Float(*v)),
        RawValue::Text(text) => parse_text(text),
        RawValue::Fraction(FractionRecord {
            numerator: Some(numerator),
            denominator: Some(denominator),
            ..
        }) => Number::ratio(*numerator, *denominator),
        RawValue::Fraction(FractionRecord {
            value: Some(text), ..
        }) => parse_text(text),
        RawValue::Fraction(_) => None,
    };
    parsed.ok_or_else(|| CellError::MalformedCoordinateValue {
        literal: raw.to_string(),
        context: context.to_string(),
    })
}

/// Resolves every element of a coordinate array.
///
/// # Errors
///
/// Fails on the first malformed element; the error context names the element index and
/// the full source array.
pub fn parse_coordinate_array(values: &[RawValue]) -> Result<Vec<Number>, CellError> {
    values
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            parse_value(raw, "coordinate element").map_err(|err| match err {
                CellError::MalformedCoordinateValue { literal, .. } => {
                    CellError::MalformedCoordinateValue {
                        literal,
                        context: format!(
                            "element {} of coordinate array [{}]",
                            index,
                            values.iter().join(", ")
                        ),
                    }
                }
                other => other,
            })
        })
        .collect()
}

fn parse_text(text: &str) -> Option<Number> {
    let trimmed = text.trim();
    if let Some((numerator, denominator)) = trimmed.split_once('/') {
        let (numerator, denominator) = (numerator.trim(), denominator.trim());
        if let (Ok(n), Ok(d)) = (numerator.parse::<i64>(), denominator.parse::<i64>()) {
            return Number::ratio(n, d);
        }
        let (n, d) = (parse_decimal(numerator)?, parse_decimal(denominator)?);
        return (d != 0.0).then(|| Number::Float(n / d));
    }
    if let Ok(integer) = trimmed.parse::<i64>() {
        return Some(Number::from(integer));
    }
    parse_decimal(trimmed).map(Number::Float)
}

fn parse_decimal(text: &str) -> Option<f64> {
    if !text.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RawValue {
        RawValue::Text(s.to_string())
    }

    #[test]
    fn integers_and_fraction_strings_parse_exactly() {
        let whole = parse_value(&RawValue::Integer(3), "test").unwrap();
        assert!(whole.is_exact());
        assert_eq!(whole, Number::from(3));

        let half = parse_value(&text("1/2"), "test").unwrap();
        assert!(half.is_exact());
        assert_eq!(half, Number::ratio(1, 2).unwrap());

        let spaced = parse_value(&text(" 2 / 3 "), "test").unwrap();
        assert_eq!(spaced, Number::ratio(2, 3).unwrap());

        let integer_text = parse_value(&text("-4"), "test").unwrap();
        assert!(integer_text.is_exact());
    }

    #[test]
    fn decimals_fall_back_to_float() {
        let value = parse_value(&text("0.25"), "test").unwrap();
        assert!(!value.is_exact());
        assert_eq!(value.to_f64(), 0.25);

        let float = parse_value(&RawValue::Float(0.125), "test").unwrap();
        assert!(!float.is_exact());

        let decimal_fraction = parse_value(&text("1.5/3"), "test").unwrap();
        assert!(!decimal_fraction.is_exact());
        assert_eq!(decimal_fraction.to_f64(), 0.5);
    }

    #[test]
    fn structured_fractions_parse_exactly() {
        let pair = RawValue::Fraction(FractionRecord {
            numerator: Some(1),
            denominator: Some(3),
            value: None,
        });
        assert_eq!(
            parse_value(&pair, "test").unwrap(),
            Number::ratio(1, 3).unwrap()
        );

        let valued = RawValue::Fraction(FractionRecord {
            value: Some("3/4".to_string()),
            ..Default::default()
        });
        assert_eq!(
            parse_value(&valued, "test").unwrap(),
            Number::ratio(3, 4).unwrap()
        );
    }

    #[test]
    fn malformed_literals_report_literal_and_context() {
        let err = parse_value(&text("abc"), "atom 3").unwrap_err();
        assert_eq!(
            err,
            CellError::MalformedCoordinateValue {
                literal: "\"abc\"".to_string(),
                context: "atom 3".to_string(),
            }
        );

        assert!(parse_value(&text("1/0"), "test").is_err());
        assert!(parse_value(&text("inf"), "test").is_err());
        assert!(parse_value(&text(""), "test").is_err());
        assert!(parse_value(&RawValue::Fraction(FractionRecord::default()), "test").is_err());
    }

    #[test]
    fn fractions_that_overflow_when_normalised_are_malformed() {
        let err = parse_value(&text("1/-9223372036854775808"), "atom 0").unwrap_err();
        assert!(matches!(err, CellError::MalformedCoordinateValue { .. }));

        let structured = RawValue::Fraction(FractionRecord {
            numerator: Some(i64::MIN),
            denominator: Some(-1),
            value: None,
        });
        assert!(parse_value(&structured, "atom 0").is_err());

        let smallest = parse_value(&text("-9223372036854775808/1"), "atom 0").unwrap();
        assert_eq!(smallest, Number::from(i64::MIN));
    }

    #[test]
    fn coordinate_array_error_names_full_source_array() {
        let values = vec![RawValue::Integer(0), text("x/y"), RawValue::Float(0.5)];
        let err = parse_coordinate_array(&values).unwrap_err();
        match err {
            CellError::MalformedCoordinateValue { literal, context } => {
                assert_eq!(literal, "\"x/y\"");
                assert_eq!(context, "element 1 of coordinate array [0, \"x/y\", 0.5]");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn coordinate_array_parses_mixed_literals() {
        let values = vec![RawValue::Integer(0), text("1/3"), RawValue::Float(0.5)];
        let parsed = parse_coordinate_array(&values).unwrap();
        assert_eq!(
            parsed,
            vec![
                Number::zero(),
                Number::ratio(1, 3).unwrap(),
                Number::Float(0.5)
            ]
        );
    }

    #[test]
    fn deserializes_every_literal_shape_from_json() {
        let values: Vec<RawValue> = serde_json::from_str(
            r#"[1, 0.5, "2/3", {"numerator": 1, "denominator": 4}, {"_type": "fraction", "value": "1/5"}]"#,
        )
        .unwrap();
        assert_eq!(values[0], RawValue::Integer(1));
        assert_eq!(values[1], RawValue::Float(0.5));
        assert_eq!(values[2], text("2/3"));
        let parsed = parse_coordinate_array(&values).unwrap();
        assert_eq!(parsed[3], Number::ratio(1, 4).unwrap());
        assert_eq!(parsed[4], Number::ratio(1, 5).unwrap());
    }

    #[test]
    fn numbers_convert_back_to_raw_values() {
        assert_eq!(RawValue::from(Number::from(2)), RawValue::Integer(2));
        assert_eq!(RawValue::from(Number::Float(0.5)), RawValue::Float(0.5));
        assert_eq!(
            RawValue::from(Number::ratio(1, 3).unwrap()),
            RawValue::Fraction(FractionRecord {
                numerator: Some(1),
                denominator: Some(3),
                value: None,
            })
        );
    }
}
