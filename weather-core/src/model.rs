use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};

/// A point in time, shown in the report's own UTC offset.
///
/// `None` when the document had no usable epoch value for it.
pub type Timestamp = Option<DateTime<FixedOffset>>;

/// Categorical weather condition, e.g. id 800 / "Clear" / "clear sky" / "01n".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionDescription {
    pub id: i32,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurrentConditions {
    pub observed_at: Timestamp,
    pub sunrise: Timestamp,
    pub sunset: Timestamp,
    /// `sunset - sunrise`; only known when both were present.
    pub daylight_duration: Option<Duration>,
    pub temp: f64,
    pub feels_like: f64,
    pub dew_point: f64,
    /// hPa.
    pub pressure: u16,
    /// Percent.
    pub humidity: u8,
    pub uv_index: f64,
    /// Percent.
    pub cloud_cover: u8,
    /// Meters.
    pub visibility: u32,
    pub wind_speed: f64,
    pub wind_gust: f64,
    /// Degrees.
    pub wind_direction: u16,
    pub weather: ConditionDescription,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HourlyForecast {
    pub observed_at: Timestamp,
    pub temp: f64,
    pub feels_like: f64,
    pub dew_point: f64,
    pub pressure: u16,
    pub humidity: u8,
    pub uv_index: f64,
    pub cloud_cover: u8,
    pub visibility: u32,
    pub wind_speed: f64,
    pub wind_gust: f64,
    pub wind_direction: u16,
    pub weather: ConditionDescription,
    /// Integer percent, 0..=100.
    pub precipitation_probability: u8,
    /// Millimeters over the last hour.
    pub rain_last_hour: f64,
    /// Millimeters over the last hour.
    pub snow_last_hour: f64,
}

/// Temperatures at four points of the day plus the daily extremes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailyTemperature {
    pub day: f64,
    pub night: f64,
    pub eve: f64,
    pub morn: f64,
    pub min: f64,
    pub max: f64,
}

/// Like [`DailyTemperature`], without extremes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeelsLikeTemperature {
    pub day: f64,
    pub night: f64,
    pub eve: f64,
    pub morn: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailyForecast {
    pub dt: Timestamp,
    pub sunrise: Timestamp,
    pub sunset: Timestamp,
    pub daylight_duration: Option<Duration>,
    pub moonrise: Timestamp,
    pub moonset: Timestamp,
    pub moon_phase: f64,
    pub summary: String,
    pub temp: DailyTemperature,
    pub feels_like: FeelsLikeTemperature,
    pub pressure: u16,
    pub humidity: u8,
    pub dew_point: f64,
    pub wind_speed: f64,
    pub wind_direction: u16,
    pub wind_gust: f64,
    pub weather: ConditionDescription,
    pub cloud_cover: u8,
    pub precipitation_probability: u8,
    /// Millimeters over the day.
    pub rain_total: f64,
    /// Millimeters over the day.
    pub snow_total: f64,
    pub uv_index: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherAlert {
    pub sender_name: String,
    pub event: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub description: String,
    pub tags: Vec<String>,
}

/// A complete report, built in one pass by [`crate::parse_report`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherReport {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone_name: String,
    /// Seconds east of UTC.
    pub timezone_offset: i32,
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyForecast>,
    pub daily: Vec<DailyForecast>,
    pub alerts: Vec<WeatherAlert>,
}

impl WeatherReport {
    /// The report's UTC offset, or UTC if the stored offset is out of range.
    pub fn utc_offset(&self) -> FixedOffset {
        offset_or_utc(self.timezone_offset)
    }
}

pub(crate) fn offset_or_utc(seconds: i32) -> FixedOffset {
    FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
}
