use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum TicketStatsError {
    #[error("failed to read ticket document '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("ticket document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse date/time '{value}': {source}")]
    Format {
        value: String,
        source: chrono::ParseError,
    },
}

impl TicketStatsError {
    /// true when the input document could not be located, read or parsed.
    pub fn is_data_source(&self) -> bool {
        matches!(self, TicketStatsError::Io { .. } | TicketStatsError::Json(_))
    }
}
