use thiserror::Error;

use crate::config::ConfigError;

/// Start-up failure surfaced by [`AppContext`](crate::AppContext).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The settings document could not be loaded or read.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
