use std::fmt;
use std::sync::Arc;

use chrono::{DateTime as ChronoDateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Precision levels for FHIR Date values.
///
/// FHIR dates support partial precision, allowing year-only, year-month,
/// or full date specifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Full date (YYYY-MM-DD)
    Full,
}

/// Precision levels for FHIR DateTime values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateTimePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Date only (YYYY-MM-DD)
    Date,
    /// Date with time to minutes (YYYY-MM-DDTHH:MM)
    Minute,
    /// Date with time to seconds (YYYY-MM-DDTHH:MM:SS)
    Second,
    /// Full datetime with sub-second precision
    Full,
}

/// Precision-aware FHIR Date.
///
/// Preserves the original precision and string representation while giving
/// typed access to the components that are present.
///
/// # Examples
///
/// ```rust
/// use vireo_fhir_lib::{DatePrecision, PrecisionDate};
///
/// let year_only = PrecisionDate::parse("1974").unwrap();
/// assert_eq!(year_only.precision(), DatePrecision::Year);
///
/// let full = PrecisionDate::from_ymd(2023, 3, 15);
/// assert_eq!(full.original_string(), "2023-03-15");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionDate {
    year: i32,
    /// 1-12, `None` for year-only precision
    month: Option<u32>,
    /// 1-31, `None` unless full precision
    day: Option<u32>,
    precision: DatePrecision,
    original_string: Arc<str>,
}

impl Default for PrecisionDate {
    fn default() -> Self {
        Self::from_ymd(1970, 1, 1)
    }
}

impl PrecisionDate {
    /// Creates a year-only precision date.
    pub fn from_year(year: i32) -> Self {
        PrecisionDate {
            year,
            month: None,
            day: None,
            precision: DatePrecision::Year,
            original_string: Arc::from(format!("{:04}", year)),
        }
    }

    /// Creates a year-month precision date.
    pub fn from_year_month(year: i32, month: u32) -> Self {
        PrecisionDate {
            year,
            month: Some(month),
            day: None,
            precision: DatePrecision::YearMonth,
            original_string: Arc::from(format!("{:04}-{:02}", year, month)),
        }
    }

    /// Creates a full precision date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        PrecisionDate {
            year,
            month: Some(month),
            day: Some(day),
            precision: DatePrecision::Full,
            original_string: Arc::from(format!("{:04}-{:02}-{:02}", year, month, day)),
        }
    }

    /// Parses a FHIR date string, preserving precision.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split('-').collect();
        match parts.len() {
            1 => {
                let year = parts[0].parse::<i32>().ok()?;
                Some(PrecisionDate {
                    year,
                    month: None,
                    day: None,
                    precision: DatePrecision::Year,
                    original_string: Arc::from(s),
                })
            }
            2 => {
                let year = parts[0].parse::<i32>().ok()?;
                let month = parts[1].parse::<u32>().ok()?;
                if !(1..=12).contains(&month) {
                    return None;
                }
                Some(PrecisionDate {
                    year,
                    month: Some(month),
                    day: None,
                    precision: DatePrecision::YearMonth,
                    original_string: Arc::from(s),
                })
            }
            3 => {
                let year = parts[0].parse::<i32>().ok()?;
                let month = parts[1].parse::<u32>().ok()?;
                let day = parts[2].parse::<u32>().ok()?;
                if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
                    return None;
                }
                Some(PrecisionDate {
                    year,
                    month: Some(month),
                    day: Some(day),
                    precision: DatePrecision::Full,
                    original_string: Arc::from(s),
                })
            }
            _ => None,
        }
    }

    /// Returns the precision level of this date.
    pub fn precision(&self) -> DatePrecision {
        self.precision
    }

    /// Returns the original string representation.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component if present.
    pub fn month(&self) -> Option<u32> {
        self.month
    }

    /// Returns the day component if present.
    pub fn day(&self) -> Option<u32> {
        self.day
    }

    /// Converts to a [`NaiveDate`], defaulting missing components to 1.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.unwrap_or(1), self.day.unwrap_or(1))
    }
}

impl fmt::Display for PrecisionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

/// Precision-aware FHIR DateTime.
///
/// A datetime may stop at any precision from year down to sub-second, with an
/// optional timezone offset once a time is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionDateTime {
    date: PrecisionDate,
    /// Time of day, `None` for date-only precisions
    time: Option<NaiveTime>,
    /// Offset from UTC in minutes, `None` when unspecified
    timezone_offset: Option<i32>,
    precision: DateTimePrecision,
    original_string: Arc<str>,
}

impl PrecisionDateTime {
    /// Parses a FHIR dateTime string, preserving precision and timezone.
    pub fn parse(s: &str) -> Option<Self> {
        if let Some(t_pos) = s.find('T') {
            let date = PrecisionDate::parse(&s[..t_pos])?;
            let time_and_tz = &s[t_pos + 1..];

            let (time_part, timezone_offset) = if let Some(stripped) = time_and_tz.strip_suffix('Z')
            {
                (stripped, Some(0))
            } else if let Some(plus_pos) = time_and_tz.rfind('+') {
                let offset = Self::parse_timezone_offset(&time_and_tz[plus_pos + 1..])?;
                (&time_and_tz[..plus_pos], Some(offset))
            } else if let Some(minus_pos) = time_and_tz.rfind('-') {
                let offset = Self::parse_timezone_offset(&time_and_tz[minus_pos + 1..])?;
                (&time_and_tz[..minus_pos], Some(-offset))
            } else {
                (time_and_tz, None)
            };

            let (time, precision) = Self::parse_time(time_part)?;
            Some(PrecisionDateTime {
                date,
                time: Some(time),
                timezone_offset,
                precision,
                original_string: Arc::from(s),
            })
        } else {
            let date = PrecisionDate::parse(s)?;
            let precision = match date.precision() {
                DatePrecision::Year => DateTimePrecision::Year,
                DatePrecision::YearMonth => DateTimePrecision::YearMonth,
                DatePrecision::Full => DateTimePrecision::Date,
            };
            Some(PrecisionDateTime {
                original_string: date.original_string.clone(),
                date,
                time: None,
                timezone_offset: None,
                precision,
            })
        }
    }

    /// Parses `HH:MM`, `HH:MM:SS`, or `HH:MM:SS.sss`.
    fn parse_time(s: &str) -> Option<(NaiveTime, DateTimePrecision)> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.len() {
            2 => {
                let hour = parts[0].parse::<u32>().ok()?;
                let minute = parts[1].parse::<u32>().ok()?;
                let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
                Some((time, DateTimePrecision::Minute))
            }
            3 => {
                let hour = parts[0].parse::<u32>().ok()?;
                let minute = parts[1].parse::<u32>().ok()?;
                if let Some((sec, frac)) = parts[2].split_once('.') {
                    let second = sec.parse::<u32>().ok()?;
                    // Normalize the fraction to milliseconds
                    let millis = format!("{:0<3}", frac).get(..3)?.parse::<u32>().ok()?;
                    let time = NaiveTime::from_hms_milli_opt(hour, minute, second, millis)?;
                    Some((time, DateTimePrecision::Full))
                } else {
                    let second = parts[2].parse::<u32>().ok()?;
                    let time = NaiveTime::from_hms_opt(hour, minute, second)?;
                    Some((time, DateTimePrecision::Second))
                }
            }
            _ => None,
        }
    }

    /// Parses a timezone offset (`HH:MM` or `HH`) into minutes.
    fn parse_timezone_offset(s: &str) -> Option<i32> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.len() {
            1 => Some(parts[0].parse::<i32>().ok()? * 60),
            2 => {
                let hours = parts[0].parse::<i32>().ok()?;
                let minutes = parts[1].parse::<i32>().ok()?;
                Some(hours * 60 + minutes)
            }
            _ => None,
        }
    }

    /// Returns the precision level of this datetime.
    pub fn precision(&self) -> DateTimePrecision {
        self.precision
    }

    /// Returns the original string representation.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    /// Returns the date components.
    pub fn date(&self) -> &PrecisionDate {
        &self.date
    }

    /// Converts to UTC, defaulting missing components and treating a missing
    /// timezone as UTC.
    pub fn to_utc(&self) -> Option<ChronoDateTime<Utc>> {
        let naive = self
            .date
            .to_naive_date()?
            .and_time(self.time.unwrap_or_default());
        let adjusted = naive - chrono::Duration::minutes(self.timezone_offset.unwrap_or(0) as i64);
        Some(ChronoDateTime::from_naive_utc_and_offset(adjusted, Utc))
    }
}

impl fmt::Display for PrecisionDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

/// FHIR Instant: a fully specified point in time with a mandatory timezone.
///
/// Unlike [`PrecisionDateTime`] there is no partial precision; parsing
/// requires at least second precision and an offset, per the FHIR `instant`
/// grammar (RFC 3339).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionInstant {
    instant: ChronoDateTime<FixedOffset>,
    original_string: Arc<str>,
}

impl PrecisionInstant {
    /// Parses a FHIR instant string.
    pub fn parse(s: &str) -> Option<Self> {
        let instant = ChronoDateTime::parse_from_rfc3339(s).ok()?;
        Some(PrecisionInstant {
            instant,
            original_string: Arc::from(s),
        })
    }

    /// Returns the parsed point in time.
    pub fn instant(&self) -> ChronoDateTime<FixedOffset> {
        self.instant
    }

    /// Returns the original string representation.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }
}

impl fmt::Display for PrecisionInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

// All three temporal types serialize as their original string and reject
// malformed input during deserialization with a descriptive message.

impl Serialize for PrecisionDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.original_string)
    }
}

impl<'de> Deserialize<'de> for PrecisionDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| de::Error::custom(format!("Invalid FHIR date format: {}", s)))
    }
}

impl Serialize for PrecisionDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.original_string)
    }
}

impl<'de> Deserialize<'de> for PrecisionDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s)
            .ok_or_else(|| de::Error::custom(format!("Invalid FHIR dateTime format: {}", s)))
    }
}

impl Serialize for PrecisionInstant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.original_string)
    }
}

impl<'de> Deserialize<'de> for PrecisionInstant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s)
            .ok_or_else(|| de::Error::custom(format!("Invalid FHIR instant format: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_parse_preserves_precision() {
        let year = PrecisionDate::parse("1974").unwrap();
        assert_eq!(year.precision(), DatePrecision::Year);
        assert_eq!(year.month(), None);

        let year_month = PrecisionDate::parse("1974-12").unwrap();
        assert_eq!(year_month.precision(), DatePrecision::YearMonth);

        let full = PrecisionDate::parse("1974-12-25").unwrap();
        assert_eq!(full.precision(), DatePrecision::Full);
        assert_eq!(full.day(), Some(25));
    }

    #[test]
    fn date_rejects_out_of_range_components() {
        assert!(PrecisionDate::parse("1974-13").is_none());
        assert!(PrecisionDate::parse("1974-12-32").is_none());
        assert!(PrecisionDate::parse("not-a-date").is_none());
    }

    #[test]
    fn datetime_parse_handles_timezones() {
        let utc = PrecisionDateTime::parse("2015-02-07T13:28:17Z").unwrap();
        assert_eq!(utc.precision(), DateTimePrecision::Second);

        let offset = PrecisionDateTime::parse("2015-02-07T13:28:17.239+05:30").unwrap();
        assert_eq!(offset.precision(), DateTimePrecision::Full);
        assert_eq!(offset.original_string(), "2015-02-07T13:28:17.239+05:30");

        let date_only = PrecisionDateTime::parse("2015-02").unwrap();
        assert_eq!(date_only.precision(), DateTimePrecision::YearMonth);
    }

    #[test]
    fn datetime_utc_conversion_applies_offset() {
        let a = PrecisionDateTime::parse("2015-02-07T13:28:17+01:00").unwrap();
        let b = PrecisionDateTime::parse("2015-02-07T12:28:17Z").unwrap();
        assert_eq!(a.to_utc(), b.to_utc());
    }

    #[test]
    fn instant_requires_full_precision() {
        assert!(PrecisionInstant::parse("2015-02-07T13:28:17.239+02:00").is_some());
        assert!(PrecisionInstant::parse("2015-02-07").is_none());
    }

    #[test]
    fn serde_round_trips_original_string() {
        let date = PrecisionDate::parse("2023-03").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2023-03\"");
        let back: PrecisionDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
