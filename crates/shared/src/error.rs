use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Ways a directory load can fail. The distinction only matters for diagnostics;
/// the view collapses all of them into one message.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to reach user directory: {source}")]
    Network { source: BoxError },
    #[error("user directory returned HTTP status {status}")]
    HttpStatus { status: u16 },
    #[error("invalid user directory payload: {source}")]
    Decode { source: BoxError },
}

impl DirectoryError {
    pub fn network(source: impl Into<BoxError>) -> Self {
        Self::Network {
            source: source.into(),
        }
    }

    pub fn decode(source: impl Into<BoxError>) -> Self {
        Self::Decode {
            source: source.into(),
        }
    }

    /// Stable label for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network { .. } => "network",
            Self::HttpStatus { .. } => "http_status",
            Self::Decode { .. } => "decode",
        }
    }
}
