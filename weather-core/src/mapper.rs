//! Mapping from a One Call style JSON tree to [`crate::WeatherReport`].
//!
//! Mapping is best-effort: a field that is missing or has the wrong JSON
//! type gets its default and the pass goes on. Only a document that is not
//! valid JSON, or whose top level is not an object, is rejected.

use chrono::{DateTime, Duration, FixedOffset};

use crate::{
    extract::{Object, field, get_integer},
    model::Timestamp,
};

pub mod alert;
pub mod current;
pub mod daily;
pub mod description;
pub mod hourly;
mod report;

pub use report::{parse_report, parse_report_slice, parse_report_str};

/// Read an epoch-seconds field and place it in `offset`.
pub(crate) fn timestamp(obj: &Object, key: &str, offset: FixedOffset) -> Timestamp {
    let secs = get_integer(obj, key)?;
    DateTime::from_timestamp(secs, 0).map(|utc| utc.with_timezone(&offset))
}

/// `sunset - sunrise`, computed from the raw epoch values.
///
/// `None` unless both are present as numbers. Negative results are kept.
pub(crate) fn daylight_duration(obj: &Object) -> Option<Duration> {
    let sunrise = get_integer(obj, "sunrise")?;
    let sunset = get_integer(obj, "sunset")?;
    sunset.checked_sub(sunrise).and_then(Duration::try_seconds)
}

/// `pop` fraction as an integer percent: truncated toward zero, clamped to 0..=100.
pub(crate) fn precipitation_probability(obj: &Object) -> u8 {
    let fraction: f64 = field(obj, "pop");
    (fraction * 100.0).clamp(0.0, 100.0) as u8
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::FixedOffset;
    use serde_json::Value;

    use crate::extract::Object;

    pub fn object(value: Value) -> Object {
        value.as_object().cloned().expect("test value must be an object")
    }

    pub fn kyiv() -> FixedOffset {
        FixedOffset::east_opt(7200).expect("valid offset")
    }
}
