use chrono::FixedOffset;

use super::{description::description_of, precipitation_probability, timestamp};
use crate::{
    extract::{Object, field, get_object},
    model::HourlyForecast,
};

/// Map one element of the `hourly` array.
pub fn map_hourly(obj: &Object, offset: FixedOffset) -> HourlyForecast {
    HourlyForecast {
        observed_at: timestamp(obj, "dt", offset),
        temp: field(obj, "temp"),
        feels_like: field(obj, "feels_like"),
        dew_point: field(obj, "dew_point"),
        pressure: field(obj, "pressure"),
        humidity: field(obj, "humidity"),
        uv_index: field(obj, "uvi"),
        cloud_cover: field(obj, "clouds"),
        visibility: field(obj, "visibility"),
        wind_speed: field(obj, "wind_speed"),
        wind_gust: field(obj, "wind_gust"),
        wind_direction: field(obj, "wind_deg"),
        weather: description_of(obj),
        precipitation_probability: precipitation_probability(obj),
        rain_last_hour: last_hour(obj, "rain"),
        snow_last_hour: last_hour(obj, "snow"),
    }
}

/// Hourly precipitation comes wrapped: `"rain": { "1h": 0.21 }`.
fn last_hour(obj: &Object, key: &str) -> f64 {
    get_object(obj, key)
        .map(|wrapper| field(wrapper, "1h"))
        .unwrap_or_default()
}
