use chrono::FixedOffset;

use super::{daylight_duration, description::description_of, timestamp};
use crate::{
    extract::{Object, field},
    model::CurrentConditions,
};

/// Map the `current` object. Every field is read independently.
pub fn map_current(obj: &Object, offset: FixedOffset) -> CurrentConditions {
    CurrentConditions {
        observed_at: timestamp(obj, "dt", offset),
        sunrise: timestamp(obj, "sunrise", offset),
        sunset: timestamp(obj, "sunset", offset),
        daylight_duration: daylight_duration(obj),
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
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::test_support::{kyiv, object};
    use chrono::Duration;
    use serde_json::json;

    fn sample() -> Object {
        object(json!({
            "dt": 1734115079,
            "sunrise": 1734067534,
            "sunset": 1734097581,
            "temp": -4.28,
            "feels_like": -11.28,
            "pressure": 1029,
            "humidity": 62,
            "dew_point": -9.79,
            "uvi": 0,
            "clouds": 68,
            "visibility": 10000,
            "wind_speed": 7.26,
            "wind_deg": 322,
            "wind_gust": 11.75,
            "weather": [
                { "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04n" }
            ]
        }))
    }

    #[test]
    fn maps_every_field() {
        let current = map_current(&sample(), kyiv());

        assert_eq!(current.observed_at.map(|t| t.timestamp()), Some(1734115079));
        assert_eq!(current.sunrise.map(|t| t.timestamp()), Some(1734067534));
        assert_eq!(current.sunset.map(|t| t.timestamp()), Some(1734097581));
        assert_eq!(current.daylight_duration, Some(Duration::seconds(30047)));
        assert_eq!(current.temp, -4.28);
        assert_eq!(current.feels_like, -11.28);
        assert_eq!(current.dew_point, -9.79);
        assert_eq!(current.pressure, 1029);
        assert_eq!(current.humidity, 62);
        assert_eq!(current.uv_index, 0.0);
        assert_eq!(current.cloud_cover, 68);
        assert_eq!(current.visibility, 10000);
        assert_eq!(current.wind_speed, 7.26);
        assert_eq!(current.wind_direction, 322);
        assert_eq!(current.wind_gust, 11.75);
        assert_eq!(current.weather.id, 803);
        assert_eq!(current.weather.description, "broken clouds");
    }

    #[test]
    fn missing_sunset_leaves_daylight_unknown() {
        let mut obj = sample();
        obj.remove("sunset");

        let current = map_current(&obj, kyiv());
        assert!(current.sunset.is_none());
        assert!(current.daylight_duration.is_none());
        assert_eq!(current.temp, -4.28);
    }

    #[test]
    fn empty_object_maps_to_default() {
        assert_eq!(map_current(&Object::new(), kyiv()), CurrentConditions::default());
    }

    #[test]
    fn mistyped_fields_fall_back_independently() {
        let mut obj = sample();
        obj.insert("temp".into(), json!("cold"));
        obj.insert("humidity".into(), json!(null));

        let current = map_current(&obj, kyiv());
        assert_eq!(current.temp, 0.0);
        assert_eq!(current.humidity, 0);
        assert_eq!(current.pressure, 1029);
    }
}
