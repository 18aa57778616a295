pub mod config;
pub mod context;
mod error;

pub use config::{
    ConfigError, ConfigLoader, ConfigService, EnvLoader, FileTransport, HttpTransport, LoadState,
    StaticLoader, Transport, TransportError,
};
pub use context::AppContext;
pub use error::Error;
