//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - The typed weather report model
//! - Best-effort mapping from One Call style JSON into that model
//! - Document sources (file, stdin) and the text presenter
//! - Configuration handling
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod extract;
pub mod mapper;
pub mod model;
pub mod present;
pub mod source;

pub use config::Config;
pub use error::ReportError;
pub use mapper::{parse_report, parse_report_slice, parse_report_str};
pub use model::{
    ConditionDescription, CurrentConditions, DailyForecast, DailyTemperature,
    FeelsLikeTemperature, HourlyForecast, WeatherAlert, WeatherReport,
};
pub use present::{PresentOptions, ReportView, TimeDisplay, render_report};
pub use source::{FileSource, ReportSource, StdinSource, load_report, source_from_arg};
