//! The settings store.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::builder::ConfigServiceBuilder;
use super::error::TransportError;
use super::source::ConfigLoader;
use super::transport::Transport;
use super::ConfigError;

/// Lifecycle of a [`ConfigService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Uninitialized,
    Initialized,
    /// The last attempt failed and no document was ever installed.
    Failed,
}

#[derive(Debug)]
enum State {
    Uninitialized,
    Failed,
    Initialized(Value),
}

/// Why a load attempt failed. Only ever logged.
#[derive(Debug, Error)]
enum LoadFailure {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("malformed settings document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("settings document root must be an object, found {0}")]
    NotAnObject(&'static str),
}

/// Loads a settings document once and serves lookups from memory.
///
/// The document is fetched by [`init`](Self::init) from the address the
/// loader resolves. Afterwards lookups are synchronous and never touch the
/// network again.
///
/// ## Example
///
/// ```no_run
/// use boot_config::ConfigService;
///
/// # async fn run() -> Result<(), boot_config::ConfigError> {
/// let mut config = ConfigService::builder()
///     .with_endpoint("https://example.com/config.json")
///     .build();
/// config.init().await?;
///
/// let name = config.setting("system", "applicationName")?;
/// let port: u16 = config.setting_as("server", "port")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConfigService {
    loader: Box<dyn ConfigLoader>,
    transport: Box<dyn Transport>,
    state: State,
}

impl ConfigService {
    pub fn new(loader: Box<dyn ConfigLoader>, transport: Box<dyn Transport>) -> Self {
        Self {
            loader,
            transport,
            state: State::Uninitialized,
        }
    }

    /// Creates a builder with the default loader and an HTTP transport.
    pub fn builder() -> ConfigServiceBuilder {
        ConfigServiceBuilder::default()
    }

    pub fn loader(&self) -> &dyn ConfigLoader {
        self.loader.as_ref()
    }

    pub fn state(&self) -> LoadState {
        match self.state {
            State::Uninitialized => LoadState::Uninitialized,
            State::Failed => LoadState::Failed,
            State::Initialized(_) => LoadState::Initialized,
        }
    }

    /// Fetches and installs the settings document.
    ///
    /// Every failure is reported as [`ConfigError::SourceUnreachable`]. When
    /// called again after a success, a newly fetched document replaces the
    /// old one; if that fetch fails, the old document stays in place.
    pub async fn init(&mut self) -> Result<(), ConfigError> {
        let address = self.loader.resolve_source();
        tracing::debug!("loading settings from {}", address);

        match self.load(&address).await {
            Ok(document) => {
                tracing::debug!(
                    "installed settings from {} ({} groups)",
                    address,
                    document.as_object().map_or(0, |groups| groups.len())
                );
                self.state = State::Initialized(document);
                Ok(())
            }
            Err(cause) => {
                tracing::warn!("failed to load settings from {}: {}", address, cause);
                if !matches!(self.state, State::Initialized(_)) {
                    self.state = State::Failed;
                }
                Err(ConfigError::SourceUnreachable)
            }
        }
    }

    async fn load(&self, address: &str) -> Result<Value, LoadFailure> {
        let body = self.transport.fetch(address).await?;
        let document: Value = serde_json::from_slice(&body)?;
        match document {
            Value::Object(_) => Ok(document),
            other => Err(LoadFailure::NotAnObject(kind_of(&other))),
        }
    }

    /// Looks up settings by optional group and key.
    ///
    /// With no group the whole document is returned; with a group only, its
    /// value; with both, the value stored under the key inside that group.
    /// A key without a group is ignored.
    pub fn get_settings(
        &self,
        group: Option<&str>,
        key: Option<&str>,
    ) -> Result<&Value, ConfigError> {
        match (group, key) {
            (None, _) => self.settings(),
            (Some(group), None) => self.group(group),
            (Some(group), Some(key)) => self.setting(group, key),
        }
    }

    /// Returns the whole settings document.
    pub fn settings(&self) -> Result<&Value, ConfigError> {
        match &self.state {
            State::Initialized(document) => Ok(document),
            State::Uninitialized | State::Failed => Err(ConfigError::NotInitialized),
        }
    }

    pub fn group(&self, group: &str) -> Result<&Value, ConfigError> {
        self.settings()?
            .get(group)
            .ok_or_else(|| ConfigError::GroupNotFound {
                group: group.to_string(),
            })
    }

    /// Returns the value under `key` in `group`.
    ///
    /// Present values are returned even when they are `0`, `""`, `false`
    /// or `null`. A group holding a scalar has no keys.
    pub fn setting(&self, group: &str, key: &str) -> Result<&Value, ConfigError> {
        self.group(group)?
            .get(key)
            .ok_or_else(|| ConfigError::KeyNotFound {
                group: group.to_string(),
                key: key.to_string(),
            })
    }

    /// Deserializes a whole group into `T`.
    pub fn group_as<T: DeserializeOwned>(&self, group: &str) -> Result<T, ConfigError> {
        let value = self.group(group)?;
        Deserialize::deserialize(value).map_err(|source| ConfigError::Deserialize {
            path: group.to_string(),
            source,
        })
    }

    /// Deserializes a single setting into `T`.
    pub fn setting_as<T: DeserializeOwned>(
        &self,
        group: &str,
        key: &str,
    ) -> Result<T, ConfigError> {
        let value = self.setting(group, key)?;
        Deserialize::deserialize(value).map_err(|source| ConfigError::Deserialize {
            path: format!("{group}/{key}"),
            source,
        })
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
