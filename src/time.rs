//! Date values with an invalid-date sentinel.
//!
//! Candidate records carry dates as value objects, and a date field is only
//! acceptable when the object holds a real calendar instant. Construction
//! from text never fails outright: out-of-range input (day 36 of a month, a
//! string that is not a date at all) produces a [`Timestamp`] whose
//! [`is_valid`](Timestamp::is_valid) is false. The type validator rejects
//! such sentinels even though they are the right runtime type.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point in time, or the invalid-date sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    instant: Option<DateTime<Utc>>,
}

impl Timestamp {
    /// Wraps a real instant.
    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Some(instant),
        }
    }

    /// The invalid-date sentinel.
    pub fn invalid() -> Self {
        Self { instant: None }
    }

    /// The current instant.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Parses a date from text.
    ///
    /// Accepts RFC 3339 (`2022-03-31T12:00:00Z`), `YYYY-MM-DD HH:MM:SS`, and
    /// bare `YYYY-MM-DD`. Input that does not parse, including calendar
    /// overflow such as `2022-03-36`, yields the invalid sentinel rather
    /// than an error.
    pub fn parse(s: &str) -> Self {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Self::from_datetime(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
            return Self::from_datetime(naive.and_utc());
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            if let Some(naive) = date.and_hms_opt(0, 0, 0) {
                return Self::from_datetime(naive.and_utc());
            }
        }
        Self::invalid()
    }

    /// Whether this holds a real calendar instant.
    pub fn is_valid(&self) -> bool {
        self.instant.is_some()
    }

    /// The underlying instant, if valid.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        self.instant
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::from_datetime(instant)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.instant {
            Some(dt) => write!(f, "{}", dt.to_rfc3339()),
            None => write!(f, "invalid date"),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.instant {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = Option::<String>::deserialize(deserializer)?;
        match s {
            Some(s) => {
                let ts = Timestamp::parse(&s);
                if ts.is_valid() {
                    Ok(ts)
                } else {
                    Err(D::Error::custom(format!("unparseable date '{}'", s)))
                }
            }
            None => Ok(Timestamp::invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        let ts = Timestamp::parse("2022-03-31T12:30:00Z");
        assert!(ts.is_valid());
        assert_eq!(ts.datetime().unwrap().to_rfc3339(), "2022-03-31T12:30:00+00:00");
    }

    #[test]
    fn test_parse_bare_date() {
        let ts = Timestamp::parse("2022-03-31");
        assert!(ts.is_valid());
    }

    #[test]
    fn test_parse_space_separated() {
        let ts = Timestamp::parse("2022-03-31 08:15:00");
        assert!(ts.is_valid());
    }

    #[test]
    fn test_calendar_overflow_yields_sentinel() {
        // Day 36 does not exist in March; the right type, the wrong instant.
        let ts = Timestamp::parse("2022-03-36");
        assert!(!ts.is_valid());
        assert_eq!(ts, Timestamp::invalid());
    }

    #[test]
    fn test_garbage_yields_sentinel() {
        assert!(!Timestamp::parse("not a date").is_valid());
        assert!(!Timestamp::parse("").is_valid());
    }

    #[test]
    fn test_serde_as_rfc3339_string() {
        let ts = Timestamp::parse("2022-03-31T12:30:00Z");
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2022-03-31T12:30:00+00:00\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);

        assert_eq!(serde_json::to_string(&Timestamp::invalid()).unwrap(), "null");
        let back: Timestamp = serde_json::from_str("null").unwrap();
        assert!(!back.is_valid());

        assert!(serde_json::from_str::<Timestamp>("\"2022-03-36\"").is_err());
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(Timestamp::invalid().to_string(), "invalid date");
        let ts = Timestamp::parse("2022-03-31T00:00:00Z");
        assert!(ts.to_string().starts_with("2022-03-31"));
    }
}
