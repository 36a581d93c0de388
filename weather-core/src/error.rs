use std::{io, path::PathBuf};
use thiserror::Error;

/// Fatal failures while turning a document into a [`crate::WeatherReport`].
///
/// Missing or mistyped fields inside the document are not errors; they fall
/// back to defaults. Only the cases below abort a parse.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The bytes are not valid JSON.
    #[error("Malformed weather document at line {line}, column {column}: {source}")]
    Document {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed, but its top level is not a JSON object.
    #[error("Weather document has no usable data: {0}")]
    MissingData(String),

    /// The document could not be read.
    #[error("Failed to read weather document from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<serde_json::Error> for ReportError {
    fn from(source: serde_json::Error) -> Self {
        ReportError::Document {
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}
