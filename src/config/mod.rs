//! Settings loading and lookup.

mod builder;
mod env;
mod error;
mod file;
mod service;
mod source;
mod transport;

pub use builder::ConfigServiceBuilder;
pub use env::EnvLoader;
pub use error::{ConfigError, TransportError};
pub use file::FileTransport;
pub use service::{ConfigService, LoadState};
pub use source::{ConfigLoader, StaticLoader, DEFAULT_SOURCE};
pub use transport::{HttpTransport, Transport};
