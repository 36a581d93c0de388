use chrono::FixedOffset;
use serde_json::Value;
use tracing::debug;

use super::timestamp;
use crate::{
    extract::{Object, field, get_array},
    model::WeatherAlert,
};

/// Map one element of the `alerts` array.
pub fn map_alert(obj: &Object, offset: FixedOffset) -> WeatherAlert {
    WeatherAlert {
        sender_name: field(obj, "sender_name"),
        event: field(obj, "event"),
        start_time: timestamp(obj, "start", offset),
        end_time: timestamp(obj, "end", offset),
        description: field(obj, "description"),
        tags: get_array(obj, "tags").map(tags).unwrap_or_default(),
    }
}

// Non-string entries are dropped, so the result can be shorter than the source.
fn tags(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| match value.as_str() {
            Some(tag) => Some(tag.to_owned()),
            None => {
                debug!(index, "skipping alert tag that is not a string");
                None
            }
        })
        .collect()
}
