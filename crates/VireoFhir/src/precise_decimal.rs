use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// High-precision decimal that preserves its original string representation.
///
/// FHIR decimals are significant down to their textual form: `"12.340"` and
/// `"12.34"` are the same number but different representations, and the
/// representation must survive a round trip. This type keeps the parsed
/// [`Decimal`] for arithmetic and comparison alongside the original string
/// for serialization.
///
/// Values outside [`Decimal`]'s range are tolerated: the string is kept and
/// the parsed value is `None`.
///
/// # Examples
///
/// ```rust
/// use vireo_fhir_lib::PreciseDecimal;
/// use rust_decimal::Decimal;
///
/// let precise = PreciseDecimal::from(Decimal::new(12340, 3)); // 12.340
/// assert_eq!(precise.original_string(), "12.340");
///
/// let parsed: PreciseDecimal = "185.50".parse().unwrap();
/// assert_eq!(parsed.original_string(), "185.50");
/// assert_eq!(parsed, "185.5".parse().unwrap()); // equality is numeric
/// ```
#[derive(Debug, Clone)]
pub struct PreciseDecimal {
    /// Parsed value, `None` if the original string was out of range
    value: Option<Decimal>,
    /// Original string representation, preserved verbatim
    original_string: Arc<str>,
}

impl PreciseDecimal {
    /// Creates a value from an explicit parse result and its source string.
    pub fn from_parts(value: Option<Decimal>, original_string: String) -> Self {
        PreciseDecimal {
            value,
            original_string: Arc::from(original_string),
        }
    }

    /// Returns the parsed decimal value, if the original string was in range.
    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    /// Returns the original string representation.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }
}

// Equality and ordering are numeric; the string form plays no part.
impl PartialEq for PreciseDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for PreciseDecimal {}

impl PartialOrd for PreciseDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreciseDecimal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl From<Decimal> for PreciseDecimal {
    fn from(value: Decimal) -> Self {
        PreciseDecimal {
            original_string: Arc::from(value.to_string()),
            value: Some(value),
        }
    }
}

impl FromStr for PreciseDecimal {
    type Err = std::convert::Infallible;

    /// Never fails: an unparseable string is kept with `value: None`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PreciseDecimal {
            value: Decimal::from_str(s).ok(),
            original_string: Arc::from(s),
        })
    }
}

impl fmt::Display for PreciseDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl Serialize for PreciseDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Emit the original text as a raw JSON number so trailing zeros
        // survive. Falls back to a string when the text is not valid JSON.
        match serde_json::value::RawValue::from_string(self.original_string.to_string()) {
            Ok(raw) => raw.serialize(serializer),
            Err(_) => serializer.serialize_str(&self.original_string),
        }
    }
}

impl<'de> Deserialize<'de> for PreciseDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DecimalVisitor;

        impl de::Visitor<'_> for DecimalVisitor {
            type Value = PreciseDecimal;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON number or a numeric string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(PreciseDecimal::from_parts(Some(Decimal::from(v)), v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(PreciseDecimal::from_parts(Some(Decimal::from(v)), v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                let text = v.to_string();
                Ok(PreciseDecimal::from_parts(
                    Decimal::from_str(&text).ok(),
                    text,
                ))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(PreciseDecimal::from_parts(
                    Decimal::from_str(v).ok(),
                    v.to_string(),
                ))
            }
        }

        deserializer.deserialize_any(DecimalVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn preserves_trailing_zeros_through_serialization() {
        let value: PreciseDecimal = "12.340".parse().unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), "12.340");
    }

    #[test]
    fn equality_is_numeric_not_textual() {
        let a: PreciseDecimal = "10.0".parse().unwrap();
        let b: PreciseDecimal = "10.00".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.value(), Some(dec!(10.0)));
    }

    #[test]
    fn out_of_range_keeps_string_without_value() {
        let huge: PreciseDecimal = "1e100000".parse().unwrap();
        assert!(huge.value().is_none());
        assert_eq!(huge.original_string(), "1e100000");
    }

    #[test]
    fn deserializes_from_json_number() {
        let value: PreciseDecimal = serde_json::from_str("185.5").unwrap();
        assert_eq!(value.value(), Some(dec!(185.5)));
    }
}
