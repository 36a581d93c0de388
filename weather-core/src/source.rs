use std::{
    fmt::Debug,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use crate::{Config, WeatherReport, error::ReportError, mapper::parse_report_slice};

/// Path argument meaning "read from standard input".
pub const STDIN_ARG: &str = "-";

/// Somewhere a weather document can be read from.
#[async_trait]
pub trait ReportSource: Send + Sync + Debug {
    /// Read the whole document into memory.
    async fn read_document(&self) -> Result<Vec<u8>, ReportError>;

    /// Human-readable name for messages.
    fn describe(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ReportSource for FileSource {
    async fn read_document(&self) -> Result<Vec<u8>, ReportError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| ReportError::Io { path: self.path.clone(), source })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

#[async_trait]
impl ReportSource for StdinSource {
    async fn read_document(&self) -> Result<Vec<u8>, ReportError> {
        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .map_err(|source| ReportError::Io { path: PathBuf::from("<stdin>"), source })?;
        Ok(buf)
    }

    fn describe(&self) -> String {
        "standard input".to_string()
    }
}

/// Pick a source: an explicit path (`-` for stdin) wins over the configured default.
pub fn source_from_arg(
    path: Option<&Path>,
    config: &Config,
) -> anyhow::Result<Box<dyn ReportSource>> {
    let path = match path {
        Some(path) => path,
        None => config.default_report.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "No weather document given and no default report configured.\n\
                 Hint: pass a path (or `-` for stdin), or run `weather configure`."
            )
        })?,
    };

    let boxed: Box<dyn ReportSource> = if path.as_os_str() == STDIN_ARG {
        Box::new(StdinSource)
    } else {
        Box::new(FileSource::new(path))
    };

    Ok(boxed)
}

/// Read a document from `source` and map it into a report.
pub async fn load_report(source: &dyn ReportSource) -> Result<WeatherReport, ReportError> {
    let bytes = source.read_document().await?;
    debug!(bytes = bytes.len(), source = %source.describe(), "read weather document");

    let report = parse_report_slice(&bytes)?;
    info!(
        source = %source.describe(),
        timezone = %report.timezone_name,
        "loaded weather report"
    );
    Ok(report)
}
