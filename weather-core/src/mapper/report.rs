use chrono::FixedOffset;
use serde_json::Value;
use tracing::debug;

use super::{alert::map_alert, current::map_current, daily::map_daily, hourly::map_hourly};
use crate::{
    error::ReportError,
    extract::{Object, field, get_array, get_object},
    model::{WeatherReport, offset_or_utc},
};

/// Build a [`WeatherReport`] from an already parsed document.
///
/// Fails only when the top level is not an object. Everything below that is
/// best-effort: absent keys and bad entries turn into defaults, and one bad
/// array element never stops the rest from being mapped.
pub fn parse_report(document: &Value) -> Result<WeatherReport, ReportError> {
    let obj = document.as_object().ok_or_else(|| {
        ReportError::MissingData(format!(
            "expected a JSON object at the top level, found {}",
            kind(document)
        ))
    })?;

    let timezone_offset: i32 = field(obj, "timezone_offset");
    let offset = offset_or_utc(timezone_offset);

    let current = match get_object(obj, "current") {
        Some(current) => map_current(current, offset),
        None => {
            debug!("no current conditions in document");
            Default::default()
        }
    };

    let report = WeatherReport {
        latitude: field(obj, "lat"),
        longitude: field(obj, "lon"),
        timezone_name: field(obj, "timezone"),
        timezone_offset,
        current,
        hourly: map_entries(obj, "hourly", offset, map_hourly),
        daily: map_entries(obj, "daily", offset, map_daily),
        alerts: map_entries(obj, "alerts", offset, map_alert),
    };

    debug!(
        hourly = report.hourly.len(),
        daily = report.daily.len(),
        alerts = report.alerts.len(),
        "mapped weather report"
    );

    Ok(report)
}

/// Parse raw bytes, then map them.
pub fn parse_report_slice(bytes: &[u8]) -> Result<WeatherReport, ReportError> {
    let document: Value = serde_json::from_slice(bytes)?;
    parse_report(&document)
}

pub fn parse_report_str(text: &str) -> Result<WeatherReport, ReportError> {
    let document: Value = serde_json::from_str(text)?;
    parse_report(&document)
}

fn map_entries<T: Default>(
    obj: &Object,
    key: &str,
    offset: FixedOffset,
    map: fn(&Object, FixedOffset) -> T,
) -> Vec<T> {
    let Some(values) = get_array(obj, key) else {
        debug!(key, "no array in document, leaving it empty");
        return Vec::new();
    };

    values
        .iter()
        .enumerate()
        .map(|(index, value)| match value.as_object() {
            Some(entry) => map(entry, offset),
            None => {
                debug!(key, index, "entry is not an object, using defaults");
                T::default()
            }
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
