//! Time utilities: parsing HH:MM[:SS], formatting, circular distances.

use chrono::{NaiveTime, Timelike};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Parse a time of day in `HH:MM` or `HH:MM:SS`, ignoring surrounding whitespace.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// Short form used when echoing configuration back: seconds only when non-zero.
pub fn format_compact(t: NaiveTime) -> String {
    if t.second() == 0 {
        t.format("%H:%M").to_string()
    } else {
        t.format("%H:%M:%S").to_string()
    }
}

pub fn seconds_of_day(t: NaiveTime) -> i64 {
    t.num_seconds_from_midnight() as i64
}

/// Distance in seconds between two times of day on the 24h circle
/// (23:59 and 00:01 are 120 seconds apart).
pub fn circular_distance_secs(a: NaiveTime, b: NaiveTime) -> i64 {
    let d = (seconds_of_day(a) - seconds_of_day(b)).rem_euclid(SECONDS_PER_DAY);
    d.min(SECONDS_PER_DAY - d)
}

/// Serde adapter for `NaiveTime` fields written as "HH:MM" or "HH:MM:SS".
pub mod hms {
    use super::{format_compact, parse_time};
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format_compact(*t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse_time(&raw).ok_or_else(|| de::Error::custom(format!("invalid time '{raw}'")))
    }

    pub mod option {
        use super::super::{format_compact, parse_time};
        use chrono::NaiveTime;
        use serde::{Deserialize, Deserializer, Serializer, de};

        pub fn serialize<S: Serializer>(t: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
            match t {
                Some(t) => s.serialize_str(&format_compact(*t)),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
            match Option::<String>::deserialize(d)? {
                Some(raw) => parse_time(&raw)
                    .map(Some)
                    .ok_or_else(|| de::Error::custom(format!("invalid time '{raw}'"))),
                None => Ok(None),
            }
        }
    }
}
