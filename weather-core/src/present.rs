//! Plain-text rendering of a finished [`WeatherReport`].

use std::fmt;

use chrono::{DateTime, Duration, FixedOffset, Local};
use serde::{Deserialize, Serialize};

use crate::model::{Timestamp, WeatherAlert, WeatherReport};

const DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";
const TIME: &str = "%H:%M:%S";

/// Which clock timestamps are shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeDisplay {
    /// The report's own `timezone_offset`.
    #[default]
    Report,
    /// The machine's local time zone.
    Local,
}

impl TimeDisplay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeDisplay::Report => "report",
            TimeDisplay::Local => "local",
        }
    }

    pub const fn all() -> &'static [TimeDisplay] {
        &[TimeDisplay::Report, TimeDisplay::Local]
    }
}

impl fmt::Display for TimeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentOptions {
    pub time_display: TimeDisplay,
    /// Show at most this many hourly entries; all of them when `None`.
    pub hourly_limit: Option<usize>,
}

/// A report paired with display settings, rendered through [`fmt::Display`].
#[derive(Debug, Clone, Copy)]
pub struct ReportView<'a> {
    pub report: &'a WeatherReport,
    pub options: &'a PresentOptions,
}

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, self.report, self.options)
    }
}

/// Render the whole report as text.
pub fn render_report(report: &WeatherReport, options: &PresentOptions) -> String {
    ReportView { report, options }.to_string()
}

fn write_report(
    out: &mut fmt::Formatter<'_>,
    report: &WeatherReport,
    options: &PresentOptions,
) -> fmt::Result {
    let clock = Clock(options.time_display);
    let current = &report.current;

    writeln!(
        out,
        "Latitude: {:.6}, Longitude: {:.6}",
        report.latitude, report.longitude
    )?;
    writeln!(
        out,
        "Time: {} ({})",
        clock.show(current.observed_at, DATE_TIME),
        report.timezone_name
    )?;
    writeln!(
        out,
        "Sunrise: {}\tSunset: {}",
        clock.show(current.sunrise, TIME),
        clock.show(current.sunset, TIME)
    )?;
    writeln!(out, "Day duration: {}", duration(current.daylight_duration))?;
    writeln!(out, "Current weather:")?;
    writeln!(
        out,
        "   Temp, C: {:>12.1}   feels like, C: {:>5.1}",
        current.temp, current.feels_like
    )?;
    writeln!(
        out,
        "   Pressure, hPa: {:>6}     Hum, %: {:>6}",
        current.pressure, current.humidity
    )?;
    writeln!(
        out,
        "   Wind: {:03} deg, {:.1} m/s ({:.1} m/s)",
        current.wind_direction, current.wind_speed, current.wind_gust
    )?;
    writeln!(
        out,
        "   {}, {}",
        or_dash(&current.weather.main),
        or_dash(&current.weather.description)
    )?;

    let shown = options.hourly_limit.unwrap_or(report.hourly.len());
    if !report.hourly.is_empty() && shown > 0 {
        writeln!(out, "\nHourly forecast:\n================")?;
        for hour in report.hourly.iter().take(shown) {
            writeln!(
                out,
                "{:>20}: {:>5.1} ({:>5.1}) {:>3}%",
                clock.show(hour.observed_at, DATE_TIME),
                hour.temp,
                hour.feels_like,
                hour.precipitation_probability
            )?;
        }
    }

    if !report.daily.is_empty() {
        writeln!(out, "\nDaily forecast:\n================")?;
        for day in &report.daily {
            writeln!(
                out,
                "{:>5.1} ({:>5.1}) - {}",
                day.temp.day,
                day.feels_like.day,
                or_dash(&day.summary)
            )?;
        }
    }

    if !report.alerts.is_empty() {
        writeln!(out, "\nAlerts:\n================")?;
        for alert in &report.alerts {
            write_alert(out, alert, clock)?;
        }
    }

    Ok(())
}

fn write_alert(out: &mut fmt::Formatter<'_>, alert: &WeatherAlert, clock: Clock) -> fmt::Result {
    if !alert.tags.is_empty() {
        let tags: Vec<String> = alert.tags.iter().map(|tag| format!("[{tag}]")).collect();
        writeln!(out, "{}", tags.join(" "))?;
    }
    writeln!(
        out,
        "{} reports {} from {} to {}.",
        or_dash(&alert.sender_name),
        or_dash(&alert.event),
        clock.show(alert.start_time, DATE_TIME),
        clock.show(alert.end_time, DATE_TIME)
    )?;
    writeln!(out, "{}\n================", alert.description)
}

#[derive(Debug, Clone, Copy)]
struct Clock(TimeDisplay);

impl Clock {
    fn show(self, ts: Timestamp, format: &str) -> String {
        match ts {
            Some(ts) => self.convert(ts).format(format).to_string(),
            None => "--".to_string(),
        }
    }

    fn convert(self, ts: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        match self.0 {
            TimeDisplay::Report => ts,
            TimeDisplay::Local => ts.with_timezone(&Local).fixed_offset(),
        }
    }
}

/// `HH:MM:SS`, with a leading minus for negative durations.
fn duration(value: Option<Duration>) -> String {
    let Some(value) = value else {
        return "--".to_string();
    };
    let secs = value.num_seconds();
    let sign = if secs < 0 { "-" } else { "" };
    let secs = secs.unsigned_abs();
    format!("{sign}{:02}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() { "--" } else { text }
}
