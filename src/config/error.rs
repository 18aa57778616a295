use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`ConfigService`](super::ConfigService).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The settings document could not be fetched or parsed.
    ///
    /// The underlying cause is logged, never returned.
    #[error("Error: Configuration service unreachable!")]
    SourceUnreachable,

    #[error("Error: No setting found with the specified group [{group}]!")]
    GroupNotFound { group: String },

    #[error("Error: No setting found with the specified group/key [{group}/{key}]!")]
    KeyNotFound { group: String, key: String },

    #[error("settings have not been loaded; call init() first")]
    NotInitialized,

    #[error("failed to deserialize setting '{path}': {source}")]
    Deserialize {
        path: String,
        source: serde_json::Error,
    },
}

/// Errors raised by a [`Transport`](super::Transport) while fetching a source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    #[error("invalid source address '{address}'")]
    InvalidAddress {
        address: String,
        #[source]
        source: Option<url::ParseError>,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("'{url}' responded with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
