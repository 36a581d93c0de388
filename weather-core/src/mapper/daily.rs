use chrono::FixedOffset;

use super::{daylight_duration, description::description_of, precipitation_probability, timestamp};
use crate::{
    extract::{Object, field, get_object},
    model::{DailyForecast, DailyTemperature, FeelsLikeTemperature},
};

/// Map one element of the `daily` array.
pub fn map_daily(obj: &Object, offset: FixedOffset) -> DailyForecast {
    DailyForecast {
        dt: timestamp(obj, "dt", offset),
        sunrise: timestamp(obj, "sunrise", offset),
        sunset: timestamp(obj, "sunset", offset),
        daylight_duration: daylight_duration(obj),
        moonrise: timestamp(obj, "moonrise", offset),
        moonset: timestamp(obj, "moonset", offset),
        moon_phase: field(obj, "moon_phase"),
        summary: field(obj, "summary"),
        temp: get_object(obj, "temp").map(temperature).unwrap_or_default(),
        feels_like: get_object(obj, "feels_like").map(feels_like).unwrap_or_default(),
        pressure: field(obj, "pressure"),
        humidity: field(obj, "humidity"),
        dew_point: field(obj, "dew_point"),
        wind_speed: field(obj, "wind_speed"),
        wind_direction: field(obj, "wind_deg"),
        wind_gust: field(obj, "wind_gust"),
        weather: description_of(obj),
        cloud_cover: field(obj, "clouds"),
        precipitation_probability: precipitation_probability(obj),
        // Daily totals are plain numbers, unlike the hourly `{ "1h": .. }` wrappers.
        rain_total: field(obj, "rain"),
        snow_total: field(obj, "snow"),
        uv_index: field(obj, "uvi"),
    }
}

fn temperature(obj: &Object) -> DailyTemperature {
    DailyTemperature {
        day: field(obj, "day"),
        night: field(obj, "night"),
        eve: field(obj, "eve"),
        morn: field(obj, "morn"),
        min: field(obj, "min"),
        max: field(obj, "max"),
    }
}

fn feels_like(obj: &Object) -> FeelsLikeTemperature {
    FeelsLikeTemperature {
        day: field(obj, "day"),
        night: field(obj, "night"),
        eve: field(obj, "eve"),
        morn: field(obj, "morn"),
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
            "dt": 1734084000,
            "sunrise": 1734067534,
            "sunset": 1734097581,
            "moonrise": 1734095040,
            "moonset": 1734057240,
            "moon_phase": 0.41,
            "summary": "Expect a day of partly cloudy with snow",
            "temp": { "day": -2.3, "min": -6.1, "max": -1.2, "night": -5.0, "eve": -4.4, "morn": -5.9 },
            "feels_like": { "day": -7.9, "night": -11.4, "eve": -10.2, "morn": -11.9 },
            "pressure": 1031,
            "humidity": 79,
            "dew_point": -5.62,
            "wind_speed": 8.1,
            "wind_deg": 318,
            "wind_gust": 14.2,
            "weather": [{ "id": 600, "main": "Snow", "description": "light snow", "icon": "13d" }],
            "clouds": 100,
            "pop": 0.75,
            "snow": 0.56,
            "uvi": 0.31
        }))
    }

    #[test]
    fn maps_day_entry() {
        let day = map_daily(&sample(), kyiv());

        assert_eq!(day.dt.map(|t| t.timestamp()), Some(1734084000));
        assert_eq!(day.sunrise.map(|t| t.timestamp()), Some(1734067534));
        assert_eq!(day.sunset.map(|t| t.timestamp()), Some(1734097581));
        assert_eq!(day.moonrise.map(|t| t.timestamp()), Some(1734095040));
        assert_eq!(day.moonset.map(|t| t.timestamp()), Some(1734057240));
        assert_eq!(day.daylight_duration, Some(Duration::seconds(30047)));
        assert_eq!(day.moon_phase, 0.41);
        assert_eq!(day.summary, "Expect a day of partly cloudy with snow");
        assert_eq!(
            day.temp,
            DailyTemperature { day: -2.3, night: -5.0, eve: -4.4, morn: -5.9, min: -6.1, max: -1.2 }
        );
        assert_eq!(
            day.feels_like,
            FeelsLikeTemperature { day: -7.9, night: -11.4, eve: -10.2, morn: -11.9 }
        );
        assert_eq!(day.pressure, 1031);
        assert_eq!(day.humidity, 79);
        assert_eq!(day.dew_point, -5.62);
        assert_eq!(day.wind_speed, 8.1);
        assert_eq!(day.wind_gust, 14.2);
        assert_eq!(day.wind_direction, 318);
        assert_eq!(day.cloud_cover, 100);
        assert_eq!(day.precipitation_probability, 75);
        assert_eq!(day.snow_total, 0.56);
        assert_eq!(day.rain_total, 0.0);
        assert_eq!(day.uv_index, 0.31);
        assert_eq!(day.weather.icon, "13d");
    }

    #[test]
    fn wrapped_precipitation_is_not_a_daily_shape() {
        let obj = object(json!({ "rain": { "1h": 3.0 } }));

        assert_eq!(map_daily(&obj, kyiv()).rain_total, 0.0);
    }

    #[test]
    fn feels_like_ignores_extremes() {
        let obj = object(json!({ "feels_like": { "day": 1.0, "min": -40.0, "max": 40.0 } }));

        let day = map_daily(&obj, kyiv());
        assert_eq!(day.feels_like, FeelsLikeTemperature { day: 1.0, ..Default::default() });
    }

    #[test]
    fn missing_sub_records_default() {
        let day = map_daily(&object(json!({ "temp": 12.5, "sunrise": 10 })), kyiv());

        assert_eq!(day.temp, DailyTemperature::default());
        assert_eq!(day.feels_like, FeelsLikeTemperature::default());
        assert!(day.daylight_duration.is_none());
    }
}
